//! State arrows from the origin to Bloch coordinates

use crate::color::Color;
use crate::error::{RenderError, Result};
use crate::scene::{Primitive, Scene, Stroke};
use qbloch_core::BlochVector;
use tracing::debug;

/// Length of the arrow head relative to the arrow
pub const ARROW_LENGTH_RATIO: f64 = 0.1;

/// Stroke width of state arrows, in points
const ARROW_WIDTH: f64 = 1.5;

/// Draw one arrow per coordinate, colored by the matching entry of `colors`
///
/// Fails with [`RenderError::ColorCountMismatch`] before drawing anything
/// when the two slices differ in length.
pub fn plot_coords(
    scene: &mut Scene,
    coords: &[BlochVector],
    colors: &[Color],
    alpha: f64,
) -> Result<()> {
    if coords.len() != colors.len() {
        return Err(RenderError::color_count(colors.len(), coords.len()));
    }

    scene.extend(coords.iter().zip(colors).map(|(coord, &color)| Primitive::Arrow {
        tip: coord.as_array(),
        stroke: Stroke::new(color, alpha, ARROW_WIDTH),
        head_ratio: ARROW_LENGTH_RATIO,
    }));

    debug!(count = coords.len(), alpha, "plotted state arrows");
    Ok(())
}

/// Draw a single arrow
pub fn plot_coord(scene: &mut Scene, coord: &BlochVector, color: Color, alpha: f64) {
    scene.push(Primitive::Arrow {
        tip: coord.as_array(),
        stroke: Stroke::new(color, alpha, ARROW_WIDTH),
        head_ratio: ARROW_LENGTH_RATIO,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_arrow_per_coordinate() {
        let mut scene = Scene::default();
        let coords = [BlochVector::new(1.0, 0.0, 0.0), BlochVector::new(0.0, 1.0, 0.0)];
        plot_coords(&mut scene, &coords, &[Color::RED, Color::BLACK], 0.5).unwrap();

        let arrows: Vec<_> = scene.arrows().collect();
        assert_eq!(arrows.len(), 2);
        assert_eq!(arrows[0].0, &[1.0, 0.0, 0.0]);
        assert_eq!(arrows[1].1.color, Color::BLACK);
        assert_eq!(arrows[1].1.alpha, 0.5);
    }

    #[test]
    fn test_mismatch_draws_nothing() {
        let mut scene = Scene::default();
        let coords = [BlochVector::new(1.0, 0.0, 0.0), BlochVector::new(0.0, 1.0, 0.0)];
        let err = plot_coords(&mut scene, &coords, &[Color::RED], 0.5).unwrap_err();

        assert!(matches!(
            err,
            RenderError::ColorCountMismatch { colors: 1, coords: 2 }
        ));
        assert!(scene.is_empty());
    }

    #[test]
    fn test_single_coordinate() {
        let mut scene = Scene::default();
        let coord = BlochVector::new(0.0, 0.0, -1.0);
        plot_coords(&mut scene, std::slice::from_ref(&coord), &[Color::BLACK], 0.5).unwrap();
        plot_coord(&mut scene, &coord, Color::RED, 1.0);
        assert_eq!(scene.arrows().count(), 2);
    }

    #[test]
    fn test_empty_input() {
        let mut scene = Scene::default();
        plot_coords(&mut scene, &[], &[], 0.5).unwrap();
        assert!(scene.is_empty());
    }
}
