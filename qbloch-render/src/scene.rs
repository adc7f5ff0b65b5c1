//! The drawing surface
//!
//! A [`Scene`] is a retained list of 3D primitives. The sphere renderer and
//! vector plotter push primitives into it; the output backends project and
//! rasterize them. The caller owns the scene for the lifetime of one figure.

use crate::camera::ViewAngle;
use crate::color::Color;
use crate::config::SceneConfig;

/// Line appearance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    /// Opacity in `[0, 1]`
    pub alpha: f64,
    /// Width in points, as in matplotlib's `linewidth`
    pub width: f64,
}

impl Stroke {
    /// Stroke of `width` points in `color` at opacity `alpha`
    pub fn new(color: Color, alpha: f64, width: f64) -> Self {
        Self {
            color,
            alpha,
            width,
        }
    }
}

/// A single drawable item in world coordinates
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Connected line segments
    Polyline { points: Vec<[f64; 3]>, stroke: Stroke },
    /// Filled polygon
    Polygon {
        points: Vec<[f64; 3]>,
        color: Color,
        alpha: f64,
    },
    /// Arrow from the origin to `tip`; the head is `head_ratio` of the length
    Arrow {
        tip: [f64; 3],
        stroke: Stroke,
        head_ratio: f64,
    },
    /// Text anchored at a world position
    Label {
        position: [f64; 3],
        text: String,
        size: u32,
    },
}

/// Retained 3D drawing surface
#[derive(Clone, Debug)]
pub struct Scene {
    config: SceneConfig,
    primitives: Vec<Primitive>,
    title: Option<String>,
}

impl Scene {
    /// Empty scene drawn with `config`
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            primitives: Vec::new(),
            title: None,
        }
    }

    /// Size, view, wireframe density and text settings
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Change the camera orientation without touching the primitives
    pub fn set_view(&mut self, elev: f64, azim: f64) {
        self.config.view = ViewAngle::new(elev, azim);
    }

    /// Current camera orientation
    pub fn view(&self) -> ViewAngle {
        self.config.view
    }

    /// Remove every primitive and the title; the configuration is kept
    pub fn clear(&mut self) {
        self.primitives.clear();
        self.title = None;
    }

    /// Append one primitive; later primitives draw over earlier ones at equal depth
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Append primitives in iteration order
    pub fn extend(&mut self, primitives: impl IntoIterator<Item = Primitive>) {
        self.primitives.extend(primitives);
    }

    /// Every primitive in insertion order
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// True when no primitive has been pushed since creation or the last [`clear`](Self::clear)
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Set the caption drawn above the figure
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Caption drawn above the figure, if any
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Arrows currently in the scene, in drawing order
    pub fn arrows(&self) -> impl Iterator<Item = (&[f64; 3], &Stroke)> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Arrow { tip, stroke, .. } => Some((tip, stroke)),
            _ => None,
        })
    }

    /// Text of every label currently in the scene
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Number of filled polygons
    pub fn polygon_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Polygon { .. }))
            .count()
    }

    /// Number of polylines (axes and wireframe lines)
    pub fn polyline_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Polyline { .. }))
            .count()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_keeps_config() {
        let mut scene = Scene::new(SceneConfig::presentation());
        scene.push(Primitive::Label {
            position: [0.0, 0.0, 1.0],
            text: "|0⟩".to_string(),
            size: 12,
        });
        scene.set_title("Frame 0");

        scene.clear();
        assert!(scene.is_empty());
        assert!(scene.title().is_none());
        assert_eq!(scene.config(), &SceneConfig::presentation());
    }

    #[test]
    fn test_set_view() {
        let mut scene = Scene::default();
        scene.set_view(10.0, -45.0);
        assert_eq!(scene.view(), ViewAngle::new(10.0, -45.0));
    }

    #[test]
    fn test_arrow_iteration() {
        let mut scene = Scene::default();
        let stroke = Stroke::new(Color::BLACK, 0.5, 1.5);
        scene.push(Primitive::Arrow {
            tip: [1.0, 0.0, 0.0],
            stroke,
            head_ratio: 0.1,
        });
        scene.push(Primitive::Polyline {
            points: vec![[0.0; 3], [1.0; 3]],
            stroke,
        });

        let arrows: Vec<_> = scene.arrows().collect();
        assert_eq!(arrows.len(), 1);
        assert_eq!(arrows[0].0, &[1.0, 0.0, 0.0]);
        assert_eq!(scene.polyline_count(), 1);
    }

    #[test]
    fn test_push_and_extend_keep_order() {
        let mut scene = Scene::default();
        let label = |text: &str| Primitive::Label {
            position: [0.0; 3],
            text: text.to_string(),
            size: 12,
        };
        scene.push(label("a"));
        scene.extend(vec![label("b"), label("c")]);

        assert_eq!(scene.primitives().len(), 3);
        assert_eq!(scene.labels().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(scene.polygon_count(), 0);
    }
}
