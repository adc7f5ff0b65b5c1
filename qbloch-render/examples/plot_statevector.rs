//! Plot a single statevector on the Bloch sphere
//!
//! Writes `bloch_sphere.png` and `bloch_sphere.svg` to the current directory.
//!
//! Run with: cargo run --example plot_statevector -p qbloch-render

use qbloch_core::{to_bloch_coords, Statevector};
use qbloch_render::{basic_bloch_sphere, plot_coords, Color, Scene, SceneConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut scene = Scene::new(SceneConfig::default());
    basic_bloch_sphere(&mut scene, true);

    let statevector = Statevector::from_real(0.0, 1.0);
    let bloch = to_bloch_coords(&statevector);
    println!("{} -> {}", statevector, bloch);

    plot_coords(&mut scene, &[bloch], &[Color::BLACK], 0.5)?;
    scene.set_view(10.0, -45.0);

    scene.save_png("bloch_sphere.png")?;
    scene.save_svg("bloch_sphere.svg")?;
    Ok(())
}
