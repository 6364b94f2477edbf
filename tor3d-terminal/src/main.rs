/// TOR3D - Interactive rotating torus for the terminal
///
/// Controls:
///   - Mouse over the viewport: tilt the torus
///   - Space: play/pause the spin
///   - +/- or Up/Down: adjust spin speed
///   - R: reset orientation
///   - Q/ESC: quit
///
/// Set RUST_LOG=debug for event diagnostics on stderr.
use clap::Parser;
use log::info;
use std::io;
use tor3d_core::{controller::MAX_SPEED, Mesh};
use tor3d_terminal::{TerminalApp, WidgetConfig};

#[derive(Parser, Debug)]
#[command(name = "tor3d", version, about = "Interactive rotating torus widget")]
struct Args {
    /// Initial spin speed in radians per frame
    #[arg(long, default_value_t = 0.02)]
    speed: f32,

    /// Start with the spin paused
    #[arg(long)]
    paused: bool,

    /// Target frame rate
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Torus ring radius
    #[arg(long, default_value_t = 1.0)]
    radius: f32,

    /// Torus tube radius
    #[arg(long, default_value_t = 0.4)]
    tube: f32,

    /// Subdivisions of the tube cross-section
    #[arg(long, default_value_t = 16)]
    radial_segments: u32,

    /// Subdivisions of the main ring
    #[arg(long, default_value_t = 100)]
    tubular_segments: u32,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mesh = Mesh::torus(
        args.radius,
        args.tube,
        args.radial_segments,
        args.tubular_segments,
    );
    info!(
        "torus mesh: {} triangles, speed {:.3} (max {})",
        mesh.triangles.len(),
        args.speed.clamp(0.0, MAX_SPEED),
        MAX_SPEED
    );

    let config = WidgetConfig {
        speed: args.speed,
        paused: args.paused,
        target_fps: args.fps,
    };

    let mut app = TerminalApp::new(mesh, config)?;
    app.run()
}
