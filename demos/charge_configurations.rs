use charge_field::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), FieldError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("scene, charges, max|E|(V/m), |E| at (2,2)(V/m)");
    for scene in FieldScene::presets() {
        let solution = scene.evaluate()?;
        let magnitude = solution.field.magnitude();
        let probe = field_at(&scene.charges, R2::new(2.0, 2.0), &scene.config)?;
        println!(
            "{}, {}, {:.6e}, {:.6e}",
            scene.name,
            scene.charges.len(),
            magnitude.max(),
            probe.norm()
        );
        tracing::info!(scene = %scene.name, rows = solution.grid.shape().0, "evaluated");
    }

    // Arrow plots use every sixth sample.
    let dipole = FieldScene::dipole().evaluate()?;
    let arrows = dipole.field.subsample(6)?;
    println!("dipole arrow lattice: {:?}", arrows.shape());
    Ok(())
}
