/// Terminal frontend for the rotating-torus widget.
///
/// Owns the frame loop and translates terminal input into control events
/// for the core rotation controller. The mesh viewport (everything below
/// the status row) is the interaction surface: mouse movement over it
/// tilts the torus, leaving it lets the tilt settle back to neutral.
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use tor3d_core::{
    controller::{ControlEvent, PointerSample, SPEED_STEP},
    Camera, Mesh, RotationController, Transform,
};

pub mod renderer;

pub use renderer::AsciiRenderer;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 0.5;

/// Startup configuration for the widget
#[derive(Debug, Clone, Copy)]
pub struct WidgetConfig {
    pub speed: f32,
    pub paused: bool,
    pub target_fps: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            speed: 0.02,
            paused: false,
            target_fps: 60,
        }
    }
}

/// Scoped terminal session: raw mode, alternate screen, hidden cursor and
/// mouse capture are acquired together and released exactly once on drop,
/// whichever way the frame loop exits.
struct TerminalSession;

impl TerminalSession {
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Nothing sensible to do with errors while tearing down
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            cursor::Show,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// The mesh viewport inside the terminal, below the status row.
/// Serves as the interaction surface for pointer events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    /// Build from the full terminal size, reserving the top status row
    pub fn from_terminal(cols: u16, rows: u16) -> Self {
        Self {
            width: cols.max(1),
            height: rows.saturating_sub(1).max(1),
        }
    }

    /// Terminal row where the viewport starts (below the status row)
    pub fn top(&self) -> u16 {
        1
    }

    /// Whether a terminal cell lies inside the interaction surface
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column < self.width && row >= self.top() && row < self.top() + self.height
    }

    /// Normalize a cell position to [-1, 1] pointer coordinates.
    /// The corner cells map to the extremes, the vertical axis is inverted.
    pub fn normalize(&self, column: u16, row: u16) -> PointerSample {
        let x = column.min(self.width.saturating_sub(1)) as f32;
        let y = row
            .saturating_sub(self.top())
            .min(self.height.saturating_sub(1)) as f32;
        PointerSample::from_surface(
            x,
            y,
            self.width.saturating_sub(1).max(1) as f32,
            self.height.saturating_sub(1).max(1) as f32,
        )
    }

    /// Camera aspect ratio, compensated for the cell shape
    pub fn aspect(&self) -> f32 {
        self.width as f32 * CELL_ASPECT / self.height as f32
    }
}

/// Translate a pressed key into a control event. `None` means the key is
/// not bound (quit is handled separately by the frame loop).
///
/// Speed keys emit relative adjustments so repeated presses within one
/// frame accumulate instead of overwriting each other.
pub fn translate_key(code: KeyCode) -> Option<ControlEvent> {
    match code {
        KeyCode::Char(' ') => Some(ControlEvent::TogglePlayback),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
            Some(ControlEvent::AdjustSpeed(SPEED_STEP))
        }
        KeyCode::Char('-') | KeyCode::Down => Some(ControlEvent::AdjustSpeed(-SPEED_STEP)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(ControlEvent::Reset),
        _ => None,
    }
}

/// Main application struct for the terminal widget
pub struct TerminalApp {
    mesh: Mesh,
    controller: RotationController,
    camera: Camera,
    renderer: AsciiRenderer,
    viewport: Viewport,
    pointer_inside: bool,
    running: bool,
    frame_interval: Duration,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mesh: Mesh, config: WidgetConfig) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        let viewport = Viewport::from_terminal(cols, rows);

        Ok(Self {
            mesh,
            controller: RotationController::new(!config.paused, config.speed),
            camera: Camera::new(viewport.aspect()),
            renderer: AsciiRenderer::new(viewport.width as usize, viewport.height as usize),
            viewport,
            pointer_inside: false,
            running: true,
            frame_interval: Duration::from_micros(1_000_000 / config.target_fps.max(1) as u64),
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    /// Run the frame loop inside a scoped terminal session
    pub fn run(&mut self) -> io::Result<()> {
        let _session = TerminalSession::acquire()?;
        info!(
            "widget started, viewport {}x{}",
            self.viewport.width, self.viewport.height
        );
        self.main_loop()
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.running {
            let frame_start = Instant::now();

            // Drain all pending terminal input into the control queue
            while event::poll(Duration::from_millis(0))? {
                self.handle_input(event::read()?)?;
            }

            // Queued events are consumed and the orientation advanced in
            // a single per-frame step
            self.controller.step();

            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_interval {
                std::thread::sleep(self.frame_interval - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        info!("widget stopped");
        Ok(())
    }

    fn handle_input(&mut self, event: Event) -> io::Result<()> {
        match event {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                code => {
                    if let Some(control) = translate_key(code) {
                        self.controller.enqueue(control);
                    }
                }
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Moved,
                column,
                row,
                ..
            }) => self.handle_pointer(column, row),
            Event::Resize(cols, rows) => self.handle_resize(cols, rows),
            _ => {}
        }
        Ok(())
    }

    fn handle_pointer(&mut self, column: u16, row: u16) {
        if self.viewport.contains(column, row) {
            if !self.pointer_inside {
                self.pointer_inside = true;
                self.controller.enqueue(ControlEvent::PointerEntered);
            }
            let sample = self.viewport.normalize(column, row);
            self.controller.enqueue(ControlEvent::PointerMoved(sample));
        } else if self.pointer_inside {
            self.pointer_inside = false;
            self.controller.enqueue(ControlEvent::PointerLeft);
        }
    }

    fn handle_resize(&mut self, cols: u16, rows: u16) {
        self.viewport = Viewport::from_terminal(cols, rows);
        self.renderer
            .resize(self.viewport.width as usize, self.viewport.height as usize);
        self.camera.set_aspect(self.viewport.aspect());
        debug!("resized to {}x{}", cols, rows);
    }

    fn render(&mut self) -> io::Result<()> {
        let model = Transform::rotation_matrix(&self.controller.orientation());

        self.renderer.clear();
        self.renderer.render_mesh(&self.mesh, &model, &self.camera);

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, self.viewport.top()))?;
        self.renderer.draw(&mut stdout)?;

        // Status row
        let playback = if self.controller.playing() {
            "playing"
        } else {
            "paused"
        };
        let hover = if self.controller.hovering() {
            "interacting"
        } else {
            "hover to interact"
        };
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::CurrentLine),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "tor3d | {} | speed {:.0}% | {} | FPS {:.1} | Space=Play/Pause +/-=Speed R=Reset Q=Quit",
                playback,
                self.controller.speed() * 100.0,
                hover,
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_reserves_status_row() {
        let viewport = Viewport::from_terminal(80, 24);
        assert_eq!(viewport.width, 80);
        assert_eq!(viewport.height, 23);
        assert!(!viewport.contains(0, 0)); // status row
        assert!(viewport.contains(0, 1));
        assert!(viewport.contains(79, 23));
        assert!(!viewport.contains(80, 1));
        assert!(!viewport.contains(0, 24));
    }

    #[test]
    fn test_viewport_normalizes_corners() {
        let viewport = Viewport::from_terminal(81, 42); // 81x41 surface
        let top_left = viewport.normalize(0, viewport.top());
        assert_eq!(top_left, PointerSample { x: -1.0, y: 1.0 });

        let bottom_right = viewport.normalize(80, 41);
        assert_eq!(bottom_right, PointerSample { x: 1.0, y: -1.0 });

        let center = viewport.normalize(40, 21);
        assert!(center.x.abs() < 1e-6);
        assert!(center.y.abs() < 1e-6);
    }

    #[test]
    fn test_viewport_survives_tiny_terminal() {
        let viewport = Viewport::from_terminal(1, 1);
        assert_eq!(viewport.width, 1);
        assert_eq!(viewport.height, 1);
        let sample = viewport.normalize(0, 1);
        assert!(sample.x.abs() <= 1.0 && sample.y.abs() <= 1.0);
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(
            translate_key(KeyCode::Char(' ')),
            Some(ControlEvent::TogglePlayback)
        );
        assert_eq!(translate_key(KeyCode::Char('r')), Some(ControlEvent::Reset));
        assert_eq!(
            translate_key(KeyCode::Up),
            Some(ControlEvent::AdjustSpeed(SPEED_STEP))
        );
        assert_eq!(
            translate_key(KeyCode::Char('-')),
            Some(ControlEvent::AdjustSpeed(-SPEED_STEP))
        );
        assert_eq!(translate_key(KeyCode::Char('x')), None);
    }
}
