//! Orthographic camera for the Bloch scene
//!
//! The view is described by elevation and azimuth in degrees, the same
//! convention as matplotlib's `view_init`: azimuth rotates about +Z starting
//! from +X, elevation tilts the eye above the XY plane. All three axes share
//! one scale so the unit sphere always projects to a circle.

use serde::{Deserialize, Serialize};

/// Half-width of the world region mapped onto the shorter image side.
/// Wider than the unit cube so pole labels stay inside the frame.
const VIEW_EXTENT: f64 = 1.6;

/// Camera orientation in degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewAngle {
    pub elev: f64,
    pub azim: f64,
}

impl ViewAngle {
    pub fn new(elev: f64, azim: f64) -> Self {
        Self { elev, azim }
    }
}

impl Default for ViewAngle {
    fn default() -> Self {
        Self {
            elev: 30.0,
            azim: -60.0,
        }
    }
}

/// A point after projection
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    /// Pixel column
    pub x: f64,
    /// Pixel row, growing downwards
    pub y: f64,
    /// Distance towards the viewer; larger is nearer
    pub depth: f64,
}

impl Projected {
    pub fn pixel(&self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

/// Projects world coordinates to pixels for a fixed image size
#[derive(Clone, Debug)]
pub struct Camera {
    eye: [f64; 3],
    right: [f64; 3],
    up: [f64; 3],
    center: (f64, f64),
    scale: f64,
}

impl Camera {
    pub fn new(view: ViewAngle, width: u32, height: u32) -> Self {
        let (elev, azim) = (view.elev.to_radians(), view.azim.to_radians());

        let eye = [elev.cos() * azim.cos(), elev.cos() * azim.sin(), elev.sin()];
        let right = [-azim.sin(), azim.cos(), 0.0];
        let up = [-elev.sin() * azim.cos(), -elev.sin() * azim.sin(), elev.cos()];

        let half = f64::from(width.min(height)) / 2.0;
        Self {
            eye,
            right,
            up,
            center: (f64::from(width) / 2.0, f64::from(height) / 2.0),
            scale: half / VIEW_EXTENT,
        }
    }

    /// Pixels per world unit
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn project(&self, point: [f64; 3]) -> Projected {
        let sx = dot(point, self.right);
        let sy = dot(point, self.up);
        Projected {
            x: self.center.0 + sx * self.scale,
            y: self.center.1 - sy * self.scale,
            depth: dot(point, self.eye),
        }
    }
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}
