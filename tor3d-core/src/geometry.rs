/// Geometry primitives for 3D rendering
use nalgebra::{Point3, Vector3};

/// A 3D vertex with position and normal
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32, nx: f32, ny: f32, nz: f32) -> Self {
        Self {
            position: Point3::new(x, y, z),
            normal: Vector3::new(nx, ny, nz),
        }
    }
}

/// A triangle face defined by three vertices
#[derive(Debug, Clone)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Calculate the face normal from the triangle's vertices
    pub fn calculate_normal(&self) -> Vector3<f32> {
        let v0 = self.vertices[0].position;
        let v1 = self.vertices[1].position;
        let v2 = self.vertices[2].position;

        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        edge1.cross(&edge2).normalize()
    }
}

/// A 3D mesh composed of triangles
#[derive(Debug, Clone)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Create a torus mesh with per-vertex smooth normals.
    ///
    /// `radius` is the distance from the torus center to the tube center,
    /// `tube` is the tube radius. `radial_segments` subdivides the tube
    /// cross-section, `tubular_segments` subdivides the main ring. Produces
    /// `radial_segments * tubular_segments * 2` triangles.
    pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Self {
        let radial = radial_segments.max(3) as usize;
        let tubular = tubular_segments.max(3) as usize;

        // Vertex grid: (radial + 1) x (tubular + 1) so the seam rows/columns
        // duplicate the first ring and close the surface.
        let mut grid: Vec<Vertex> = Vec::with_capacity((radial + 1) * (tubular + 1));
        for j in 0..=radial {
            let v = j as f32 / radial as f32 * std::f32::consts::TAU;
            for i in 0..=tubular {
                let u = i as f32 / tubular as f32 * std::f32::consts::TAU;

                let x = (radius + tube * v.cos()) * u.cos();
                let y = (radius + tube * v.cos()) * u.sin();
                let z = tube * v.sin();

                // Normal points from the ring center through the vertex
                let center = Point3::new(radius * u.cos(), radius * u.sin(), 0.0);
                let normal = (Point3::new(x, y, z) - center).normalize();

                grid.push(Vertex {
                    position: Point3::new(x, y, z),
                    normal,
                });
            }
        }

        let mut mesh = Self::with_capacity(radial * tubular * 2);
        for j in 1..=radial {
            for i in 1..=tubular {
                let a = grid[(tubular + 1) * j + i - 1];
                let b = grid[(tubular + 1) * (j - 1) + i - 1];
                let c = grid[(tubular + 1) * (j - 1) + i];
                let d = grid[(tubular + 1) * j + i];

                mesh.add_triangle(Triangle::new(a, b, d));
                mesh.add_triangle(Triangle::new(b, c, d));
            }
        }

        mesh
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_torus_triangle_count() {
        let mesh = Mesh::torus(1.0, 0.4, 16, 100);
        assert_eq!(mesh.triangles.len(), 16 * 100 * 2);
    }

    #[test]
    fn test_torus_vertices_on_surface() {
        let radius = 1.0;
        let tube = 0.4;
        let mesh = Mesh::torus(radius, tube, 8, 12);

        // Every vertex satisfies (sqrt(x^2 + y^2) - R)^2 + z^2 = r^2
        for triangle in &mesh.triangles {
            for vertex in &triangle.vertices {
                let p = vertex.position;
                let ring = (p.x * p.x + p.y * p.y).sqrt() - radius;
                let dist = (ring * ring + p.z * p.z).sqrt();
                assert!((dist - tube).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_torus_unit_normals() {
        let mesh = Mesh::torus(1.0, 0.4, 8, 12);
        for triangle in &mesh.triangles {
            for vertex in &triangle.vertices {
                assert!((vertex.normal.norm() - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_face_normal() {
        let triangle = Triangle::new(
            Vertex::new(0.0, 0.0, 0.0, 0.0, 0.0, 1.0),
            Vertex::new(1.0, 0.0, 0.0, 0.0, 0.0, 1.0),
            Vertex::new(0.0, 1.0, 0.0, 0.0, 0.0, 1.0),
        );
        let normal = triangle.calculate_normal();
        assert!((normal - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-6);
    }
}
