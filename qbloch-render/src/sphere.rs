//! Reference sphere: axes, wireframe, basis labels and optional equator

use crate::color::Color;
use crate::scene::{Primitive, Scene, Stroke};
use qbloch_core::linspace;
use std::f64::consts::PI;
use tracing::debug;

/// Samples along the rim of the equatorial disk
const EQUATOR_SEGMENTS: usize = 100;

/// Draw the Bloch reference sphere into `scene` and return it for chaining
///
/// Adds three axis segments from −1 to 1 with their labels, a unit
/// wireframe sphere with |0⟩ and |1⟩ at the poles and, when `show_equator`
/// is set, a translucent disk in the z = 0 plane.
pub fn basic_bloch_sphere(scene: &mut Scene, show_equator: bool) -> &mut Scene {
    let font_size = scene.config().font_size;
    let density = scene.config().wireframe;

    let axis_stroke = Stroke::new(Color::BLACK, 0.5, 1.0);
    let axes = [
        ([1.0, 0.0, 0.0], "x̂"),
        ([0.0, 1.0, 0.0], "ŷ"),
        ([0.0, 0.0, 1.0], "ẑ"),
    ];
    for (end, name) in axes {
        let start = end.map(|c: f64| -c);
        scene.push(Primitive::Polyline {
            points: vec![start, end],
            stroke: axis_stroke,
        });
        scene.push(label(end, name, font_size));
    }

    let wire_stroke = Stroke::new(Color::RED, 0.5, 0.5);
    let phis = linspace(0.0, 2.0 * PI, density.longitudes);
    let thetas = linspace(0.0, PI, density.latitudes);

    for &phi in &phis {
        scene.push(Primitive::Polyline {
            points: thetas.iter().map(|&theta| sphere_point(theta, phi)).collect(),
            stroke: wire_stroke,
        });
    }
    for &theta in &thetas {
        scene.push(Primitive::Polyline {
            points: phis.iter().map(|&phi| sphere_point(theta, phi)).collect(),
            stroke: wire_stroke,
        });
    }
    scene.push(label([-0.05, 0.0, 1.2], "|0⟩", font_size));
    scene.push(label([-0.05, 0.0, -1.45], "|1⟩", font_size));

    if show_equator {
        scene.push(Primitive::Polygon {
            points: linspace(0.0, 2.0 * PI, EQUATOR_SEGMENTS)
                .into_iter()
                .map(|th| [th.cos(), th.sin(), 0.0])
                .collect(),
            color: Color::BLACK,
            alpha: 0.2,
        });
    }

    debug!(
        primitives = scene.primitives().len(),
        show_equator, "drew reference sphere"
    );
    scene
}

fn sphere_point(theta: f64, phi: f64) -> [f64; 3] {
    [theta.sin() * phi.cos(), theta.sin() * phi.sin(), theta.cos()]
}

fn label(position: [f64; 3], text: &str, size: u32) -> Primitive {
    Primitive::Label {
        position,
        text: text.to_string(),
        size,
    }
}
