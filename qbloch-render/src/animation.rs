//! Frame-driven animation of Bloch trajectories
//!
//! [`animate_coords`] validates a [`CoordinateSeries`] against the
//! configuration and returns an [`Animation`]. Nothing is drawn until the
//! caller drives it, either through [`Animation::drive`] with its own frame
//! sink or through [`Animation::save_gif`].
//!
//! # Example
//!
//! ```no_run
//! use qbloch_core::{phase_rotation, CoordinateSeries, Statevector};
//! use qbloch_render::{animate_coords, AnimationConfig, Scene, SceneConfig};
//!
//! let series = CoordinateSeries::new(vec![phase_rotation(&Statevector::plus(), 100)])?;
//! let scene = Scene::new(SceneConfig::presentation());
//! let mut animation = animate_coords(scene, &series, AnimationConfig::new().with_fps(20))?;
//! animation.save_gif("animation.gif")?;
//! # Ok::<(), qbloch_render::RenderError>(())
//! ```

use crate::backend::GifWriter;
use crate::color::{default_palette, Color};
use crate::config::AnimationConfig;
use crate::error::{RenderError, Result};
use crate::scene::Scene;
use crate::sphere::basic_bloch_sphere;
use crate::vectors::plot_coords;
use qbloch_core::CoordinateSeries;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Transparency of the step-0 reference overlay
const INITIAL_OVERLAY_ALPHA: f64 = 0.5;

/// Lifecycle of an [`Animation`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    /// Frame callback set up, no frame rendered yet
    Constructed,
    /// The caller has iterated the frames at least once
    Driven,
}

/// A trajectory animation over a caller-supplied scene
#[derive(Debug)]
pub struct Animation {
    scene: Scene,
    series: CoordinateSeries,
    colors: Vec<Color>,
    config: AnimationConfig,
    state: AnimationState,
    frames_rendered: usize,
}

/// Build an animation with one frame per step of `series`
///
/// Without explicit colors the default palette is truncated to the number
/// of traces. Explicit colors must match the number of traces.
pub fn animate_coords(
    scene: Scene,
    series: &CoordinateSeries,
    config: AnimationConfig,
) -> Result<Animation> {
    config.validate()?;
    scene.config().validate()?;

    let traces = series.num_traces();
    let colors = match &config.colors {
        None => default_palette(traces),
        Some(colors) if colors.len() == traces => colors.clone(),
        Some(colors) => return Err(RenderError::color_count(colors.len(), traces)),
    };

    debug!(
        traces,
        frames = series.num_steps(),
        interval_ms = config.interval_ms,
        repeat = config.repeat,
        "constructed animation"
    );

    Ok(Animation {
        scene,
        series: series.clone(),
        colors,
        config,
        state: AnimationState::Constructed,
        frames_rendered: 0,
    })
}

impl Animation {
    /// Number of frames (time steps of the series)
    pub fn num_frames(&self) -> usize {
        self.series.num_steps()
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Delay between frames
    pub fn interval(&self) -> Duration {
        self.config.interval()
    }

    /// Whether playback loops
    pub fn repeat(&self) -> bool {
        self.config.repeat
    }

    /// Trace colors in use
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Total frame updates performed so far, across every drive
    pub fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }

    /// The scene as left by the most recent frame update
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Redraw the scene for frame `frame`
    pub fn update(&mut self, frame: usize) -> Result<&Scene> {
        let current = self.series.frame(frame)?;

        self.scene.clear();
        basic_bloch_sphere(&mut self.scene, self.config.show_equator);
        if self.config.show_initial {
            plot_coords(
                &mut self.scene,
                &self.series.initial(),
                &self.colors,
                INITIAL_OVERLAY_ALPHA,
            )?;
        }
        plot_coords(&mut self.scene, &current, &self.colors, self.config.alpha)?;
        if self.config.label_steps {
            self.scene.set_title(format!("Frame {}", frame));
        }

        self.frames_rendered += 1;
        Ok(&self.scene)
    }

    /// Render every frame in order, handing each finished scene to `sink`
    ///
    /// Stops at the first error from a frame update or from the sink.
    pub fn drive<F>(&mut self, mut sink: F) -> Result<()>
    where
        F: FnMut(usize, &Scene) -> Result<()>,
    {
        self.state = AnimationState::Driven;
        for frame in 0..self.num_frames() {
            let scene = self.update(frame)?;
            sink(frame, scene)?;
        }
        Ok(())
    }

    /// Drive the animation into a GIF file
    pub fn save_gif(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let (width, height) = (self.scene.config().width, self.scene.config().height);

        let mut writer = GifWriter::create(path, width, height, self.interval(), self.repeat())?;
        self.drive(|_, scene| writer.write_scene(scene))?;
        let frames = writer.frames_written();
        writer.finish()?;

        info!(path = %path.display(), frames, "wrote animation");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;
    use qbloch_core::{phase_rotation, BlochVector, Statevector};

    fn series(traces: usize, steps: usize) -> CoordinateSeries {
        CoordinateSeries::new(
            (0..traces)
                .map(|i| phase_rotation(&Statevector::from_angles(0.3 * (i + 1) as f64, 0.0), steps))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_default_colors_truncated_to_traces() {
        let animation = animate_coords(Scene::default(), &series(3, 5), AnimationConfig::new()).unwrap();
        assert_eq!(animation.colors(), default_palette(3).as_slice());
        assert_eq!(animation.state(), AnimationState::Constructed);
        assert_eq!(animation.num_frames(), 5);
        assert_eq!(animation.frames_rendered(), 0);
    }

    #[test]
    fn test_color_count_must_match_traces() {
        let config = AnimationConfig::new().with_colors(vec![Color::RED]);
        let err = animate_coords(Scene::default(), &series(2, 5), config).unwrap_err();
        assert!(matches!(err, RenderError::ColorCountMismatch { colors: 1, coords: 2 }));
    }

    #[test]
    fn test_drive_invokes_every_frame_once() {
        let mut animation = animate_coords(Scene::default(), &series(2, 7), AnimationConfig::new()).unwrap();

        let mut seen = Vec::new();
        animation
            .drive(|frame, scene| {
                seen.push((frame, scene.arrows().count(), scene.title().map(str::to_string)));
                Ok(())
            })
            .unwrap();

        assert_eq!(animation.state(), AnimationState::Driven);
        assert_eq!(animation.frames_rendered(), 7);
        assert_eq!(seen.len(), 7);
        assert_eq!(seen[0], (0, 2, Some("Frame 0".to_string())));
        assert_eq!(seen[6].0, 6);
    }

    #[test]
    fn test_initial_overlay_doubles_arrows() {
        let config = AnimationConfig::new().with_initial(true).with_step_labels(false);
        let mut animation = animate_coords(Scene::default(), &series(2, 4), config).unwrap();

        let scene = animation.update(3).unwrap();
        let arrows: Vec<_> = scene.arrows().collect();
        assert_eq!(arrows.len(), 4);
        assert_eq!(arrows[0].1.alpha, INITIAL_OVERLAY_ALPHA);
        assert!(scene.title().is_none());
    }

    #[test]
    fn test_update_redraws_from_scratch() {
        let config = AnimationConfig::new().with_equator(true);
        let mut animation = animate_coords(Scene::default(), &series(1, 3), config).unwrap();

        let first = animation.update(0).unwrap().primitives().len();
        let second = animation.update(1).unwrap().primitives().len();
        assert_eq!(first, second);
        assert_eq!(animation.scene().polygon_count(), 1);
    }

    #[test]
    fn test_update_uses_frame_coordinates() {
        let series = CoordinateSeries::new(vec![vec![
            BlochVector::new(0.0, 0.0, 1.0),
            BlochVector::new(1.0, 0.0, 0.0),
        ]])
        .unwrap();
        let mut animation = animate_coords(Scene::default(), &series, AnimationConfig::new()).unwrap();

        let scene = animation.update(1).unwrap();
        let (tip, _) = scene.arrows().next().unwrap();
        assert_eq!(tip, &[1.0, 0.0, 0.0]);
        assert!(animation.update(2).is_err());
    }

    #[test]
    fn test_sink_error_stops_drive() {
        let mut animation = animate_coords(Scene::default(), &series(1, 5), AnimationConfig::new()).unwrap();
        let result = animation.drive(|frame, _| {
            if frame == 2 {
                Err(RenderError::Backend("sink full".to_string()))
            } else {
                Ok(())
            }
        });
        assert!(result.is_err());
        assert_eq!(animation.frames_rendered(), 3);
    }

    #[test]
    fn test_invalid_scene_config_rejected() {
        let scene = Scene::new(SceneConfig::new().with_size(0, 0));
        assert!(animate_coords(scene, &series(1, 2), AnimationConfig::new()).is_err());
    }
}
