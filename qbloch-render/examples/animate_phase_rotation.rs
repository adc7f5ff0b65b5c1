//! Animate two statevectors rotating about Z
//!
//! Each trajectory multiplies the |1⟩ amplitude by e^(iθ) for θ over
//! [0, 2π] in 100 steps. Writes `animation.gif` at 20 frames per second.
//!
//! Run with: cargo run --example animate_phase_rotation -p qbloch-render

use qbloch_core::{phase_rotation, CoordinateSeries, Statevector};
use qbloch_render::{animate_coords, parse_colors, AnimationConfig, Scene, SceneConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let init_1 = Statevector::from_real(1.0 / 2.0_f64.sqrt(), 1.0 / 2.0_f64.sqrt());
    let init_2 = Statevector::from_real(2.0 / 5.0_f64.sqrt(), 1.0 / 5.0_f64.sqrt());

    let both_coords = CoordinateSeries::new(vec![
        phase_rotation(&init_1, 100),
        phase_rotation(&init_2, 100),
    ])?;

    let config = AnimationConfig::new()
        .with_equator(true)
        .with_initial(true)
        .with_step_labels(true)
        .with_colors(parse_colors(&["r", "g"])?)
        .with_repeat(true)
        .with_fps(20);

    let scene = Scene::new(SceneConfig::presentation());
    let mut animation = animate_coords(scene, &both_coords, config)?;
    animation.save_gif("animation.gif")?;

    println!("Rendered {} frames", animation.frames_rendered());
    Ok(())
}
