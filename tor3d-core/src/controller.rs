/// Rotation controller: the per-frame update rule of the widget.
///
/// Blends automatic spin around the Y axis with pointer-relative tilt on
/// the X and Z axes. Control and pointer events are queued by the frontend
/// and consumed exactly once per frame, before the update rule runs, so a
/// frame always sees a consistent snapshot of the inputs.
use std::collections::VecDeque;
use std::f32::consts::TAU;

use log::{debug, trace};

use crate::transform::Orientation;

/// Upper bound for the spin speed, in radians per frame
pub const MAX_SPEED: f32 = 0.05;

/// Speed increment of the control surface's slider
pub const SPEED_STEP: f32 = 0.005;

/// Fraction of pointer deflection translated into tilt
const TILT_SCALE: f32 = 0.5;

/// Smoothing factor while the pointer drives the tilt target
const HOVER_SMOOTHING: f32 = 0.1;

/// Smoothing factor while easing back to neutral
const SETTLE_SMOOTHING: f32 = 0.05;

/// A pointer position normalized to the interaction surface.
///
/// Both coordinates lie in [-1, 1]; the vertical axis is inverted so that
/// moving the pointer up yields positive `y`. Top-left maps to (-1, 1),
/// bottom-right to (1, -1), the center to (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    /// Normalize raw surface coordinates against the surface size.
    /// Out-of-bounds coordinates are clamped.
    pub fn from_surface(x: f32, y: f32, width: f32, height: f32) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);
        Self {
            x: (x / width * 2.0 - 1.0).clamp(-1.0, 1.0),
            y: (-(y / height) * 2.0 + 1.0).clamp(-1.0, 1.0),
        }
    }
}

/// State updates produced by the control and pointer surfaces.
///
/// Frontends enqueue these as they observe input; the controller applies
/// them in order at the start of the next frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    TogglePlayback,
    SetPlaying(bool),
    SetSpeed(f32),
    /// Relative speed change; repeated events within one frame accumulate
    AdjustSpeed(f32),
    Reset,
    PointerMoved(PointerSample),
    PointerEntered,
    PointerLeft,
}

/// Owns the orientation of the displayed object and advances it per frame.
#[derive(Debug)]
pub struct RotationController {
    orientation: Orientation,
    playing: bool,
    speed: f32,
    hovering: bool,
    pointer: PointerSample,
    pending: VecDeque<ControlEvent>,
}

impl RotationController {
    pub fn new(playing: bool, speed: f32) -> Self {
        Self {
            orientation: Orientation::zero(),
            playing,
            speed: speed.clamp(0.0, MAX_SPEED),
            hovering: false,
            pointer: PointerSample::default(),
            pending: VecDeque::new(),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    /// Queue an event for the next frame
    pub fn enqueue(&mut self, event: ControlEvent) {
        trace!("queued control event: {:?}", event);
        self.pending.push_back(event);
    }

    /// Apply a single event immediately, mutating only the affected field
    pub fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::TogglePlayback => {
                self.playing = !self.playing;
                debug!("playback toggled, playing={}", self.playing);
            }
            ControlEvent::SetPlaying(playing) => self.playing = playing,
            ControlEvent::SetSpeed(speed) => {
                self.speed = speed.clamp(0.0, MAX_SPEED);
            }
            ControlEvent::AdjustSpeed(delta) => {
                self.speed = (self.speed + delta).clamp(0.0, MAX_SPEED);
            }
            ControlEvent::Reset => {
                self.orientation.reset();
                debug!("orientation reset");
            }
            ControlEvent::PointerMoved(sample) => self.pointer = sample,
            ControlEvent::PointerEntered => self.hovering = true,
            ControlEvent::PointerLeft => self.hovering = false,
        }
    }

    /// Advance one frame: drain the event queue, then run the update rule.
    ///
    /// While playing, `y` advances by the spin speed (wrapped to [0, 2π)).
    /// `x` and `z` ease toward the pointer-derived tilt target while
    /// hovering, or back toward neutral otherwise.
    pub fn step(&mut self) -> Orientation {
        while let Some(event) = self.pending.pop_front() {
            self.apply(event);
        }

        if self.playing {
            self.orientation.y = (self.orientation.y + self.speed).rem_euclid(TAU);
        }

        let (target_x, target_z, smoothing) = if self.hovering {
            (
                self.pointer.y * TILT_SCALE,
                self.pointer.x * TILT_SCALE,
                HOVER_SMOOTHING,
            )
        } else {
            (0.0, 0.0, SETTLE_SMOOTHING)
        };
        self.orientation.x += (target_x - self.orientation.x) * smoothing;
        self.orientation.z += (target_z - self.orientation.z) * smoothing;

        self.orientation
    }
}

impl Default for RotationController {
    fn default() -> Self {
        Self::new(true, 0.02)
    }
}
