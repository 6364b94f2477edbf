/// TOR3D Core Library - Widget state and geometry logic
///
/// This library provides the display-independent core of the rotating-torus
/// widget: mesh geometry, orientation and transformation matrices, camera
/// projection, and the rotation controller that blends automatic spin with
/// pointer-driven tilt.

pub mod controller;
pub mod geometry;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use controller::{ControlEvent, PointerSample, RotationController};
pub use geometry::{Mesh, Triangle, Vertex};
pub use projection::Camera;
pub use transform::{Orientation, Transform};
