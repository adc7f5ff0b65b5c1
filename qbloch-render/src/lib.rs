//! Bloch sphere rendering and animation for single-qubit states
//!
//! This crate draws [`qbloch_core`] coordinates:
//! - [`basic_bloch_sphere`]: axes, wireframe sphere, basis labels, equator
//! - [`plot_coords`]: one arrow per Bloch coordinate
//! - [`animate_coords`]: frame-by-frame trajectories, written as GIF
//!
//! Drawing happens on a caller-owned [`Scene`], which is written to PNG or
//! SVG by the backends.
//!
//! # Example
//! ```no_run
//! use qbloch_core::{to_bloch_coords, Statevector};
//! use qbloch_render::{basic_bloch_sphere, plot_coords, Color, Scene, SceneConfig};
//!
//! let mut scene = Scene::new(SceneConfig::presentation());
//! basic_bloch_sphere(&mut scene, true);
//! plot_coords(&mut scene, &[to_bloch_coords(&Statevector::one())], &[Color::BLACK], 0.5)?;
//! scene.save_png("bloch_sphere.png")?;
//! # Ok::<(), qbloch_render::RenderError>(())
//! ```

pub mod animation;
pub mod backend;
pub mod camera;
pub mod color;
pub mod config;
pub mod error;
pub mod scene;
pub mod sphere;
pub mod vectors;

// Re-exports for convenience
pub use animation::{animate_coords, Animation, AnimationState};
pub use backend::{draw_scene, register_font, render_rgb, GifWriter};
pub use camera::{Camera, ViewAngle};
pub use color::{default_palette, parse_colors, Color};
pub use config::{AnimationConfig, SceneConfig, WireframeDensity};
pub use error::{RenderError, Result};
pub use scene::{Primitive, Scene, Stroke};
pub use sphere::basic_bloch_sphere;
pub use vectors::{plot_coord, plot_coords, ARROW_LENGTH_RATIO};
