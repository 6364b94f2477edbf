/// ASCII rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::{Matrix4, Vector3};
use std::io::Write;
use tor3d_core::{Camera, Mesh, Triangle};

/// Character luminosity ramp for depth/shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Minimum brightness so back-facing geometry stays visible
const AMBIENT: f32 = 0.25;

/// ASCII renderer that converts 3D meshes to terminal characters
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    char_buffer: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            char_buffer: vec![' '; size],
        }
    }

    /// Rebuild the buffers for a new surface size
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        let size = width * height;
        self.depth_buffer = vec![f32::INFINITY; size];
        self.char_buffer = vec![' '; size];
    }

    pub fn clear(&mut self) {
        for i in 0..self.depth_buffer.len() {
            self.depth_buffer[i] = f32::INFINITY;
            self.char_buffer[i] = ' ';
        }
    }

    pub fn render_mesh(&mut self, mesh: &Mesh, model_matrix: &Matrix4<f32>, camera: &Camera) {
        for triangle in &mesh.triangles {
            self.render_triangle(triangle, model_matrix, camera);
        }
    }

    fn render_triangle(
        &mut self,
        triangle: &Triangle,
        model_matrix: &Matrix4<f32>,
        camera: &Camera,
    ) {
        // Project vertices to screen space
        let mut screen_coords = Vec::new();
        for vertex in &triangle.vertices {
            if let Some((x, y, z)) = camera.project_to_screen(
                &vertex.position,
                model_matrix,
                self.width as u32,
                self.height as u32,
            ) {
                screen_coords.push((x, y, z));
            } else {
                return; // Triangle is clipped
            }
        }

        if screen_coords.len() != 3 {
            return;
        }

        // Shade from the rotated face normal against the key light
        let normal = model_matrix
            .transform_vector(&triangle.calculate_normal())
            .normalize();
        // Key light from the widget's top-right, matching the original rig
        let light_dir = Vector3::new(2.0, 2.0, 5.0).normalize();
        let diffuse = normal.dot(&light_dir).max(0.0);
        let brightness = (AMBIENT + (1.0 - AMBIENT) * diffuse).min(1.0);

        // Map brightness to character
        let char_index = (brightness * (LUMINOSITY_RAMP.len() - 1) as f32) as usize;
        let char_index = char_index.min(LUMINOSITY_RAMP.len() - 1);
        let character = LUMINOSITY_RAMP[char_index];

        // Rasterize triangle using scanline algorithm
        self.rasterize_triangle(&screen_coords, character);
    }

    fn rasterize_triangle(&mut self, coords: &[(f32, f32, f32)], character: char) {
        let (v0, v1, v2) = (coords[0], coords[1], coords[2]);

        // Bounding box
        let min_x = v0.0.min(v1.0).min(v2.0).floor() as i32;
        let max_x = v0.0.max(v1.0).max(v2.0).ceil() as i32;
        let min_y = v0.1.min(v1.1).min(v2.1).floor() as i32;
        let max_y = v0.1.max(v1.1).max(v2.1).ceil() as i32;

        // Clip to screen bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.width as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i32 - 1);

        // Scanline rasterization
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                // Barycentric coordinates
                if let Some((w0, w1, w2)) =
                    barycentric((v0.0, v0.1), (v1.0, v1.1), (v2.0, v2.1), (px, py))
                {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        // Interpolate depth
                        let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;

                        let idx = y as usize * self.width + x as usize;
                        if depth < self.depth_buffer[idx] {
                            self.depth_buffer[idx] = depth;
                            self.char_buffer[idx] = character;
                        }
                    }
                }
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let c = self.char_buffer[idx];

                // Indigo-ish ramp, dim cells stay dark
                let color = match c {
                    ' ' | '.' | ':' => Color::DarkBlue,
                    '-' | '=' => Color::Blue,
                    '+' | '*' => Color::Cyan,
                    '#' | '%' | '@' => Color::White,
                    _ => Color::White,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            // Raw mode needs an explicit carriage return. No newline after
            // the bottom row: the viewport ends on the terminal's last line
            // and a trailing one would scroll the whole screen.
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Matrix4;
    use tor3d_core::Mesh;

    #[test]
    fn test_barycentric_centroid() {
        let (w0, w1, w2) =
            barycentric((0.0, 0.0), (3.0, 0.0), (0.0, 3.0), (1.0, 1.0)).unwrap();
        assert!((w0 - 1.0 / 3.0).abs() < 1e-6);
        assert!((w1 - 1.0 / 3.0).abs() < 1e-6);
        assert!((w2 - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_barycentric_degenerate_triangle() {
        assert!(barycentric((0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (1.0, 0.0)).is_none());
    }

    #[test]
    fn test_torus_fills_some_cells() {
        let mut renderer = AsciiRenderer::new(60, 30);
        let mesh = Mesh::torus(1.0, 0.4, 8, 24);
        let camera = Camera::new(2.0);
        renderer.render_mesh(&mesh, &Matrix4::identity(), &camera);

        let filled = renderer.char_buffer.iter().filter(|&&c| c != ' ').count();
        assert!(filled > 0);
    }

    #[test]
    fn test_draw_emits_no_newline_after_bottom_row() {
        let renderer = AsciiRenderer::new(80, 23);
        let mut out: Vec<u8> = Vec::new();
        renderer.draw(&mut out).unwrap();

        let breaks = out.iter().filter(|&&b| b == b'\n').count();
        // Separators only between rows, never after the last one
        assert_eq!(breaks, 22);
        assert!(!out.ends_with(b"\r\n"));
    }

    #[test]
    fn test_clear_resets_buffers() {
        let mut renderer = AsciiRenderer::new(10, 10);
        renderer.char_buffer[5] = '@';
        renderer.depth_buffer[5] = 0.5;
        renderer.clear();
        assert!(renderer.char_buffer.iter().all(|&c| c == ' '));
        assert!(renderer.depth_buffer.iter().all(|&d| d.is_infinite()));
    }
}
