use crate::cluster::{Dbscan, DbscanResult};
use crate::config::RunConfig;
use crate::dataset::PointGenerator;
use crate::error::Result;
use crate::render::{draw_clusters, Palette, Surface};
use log::info;

/// Generate a fresh point set, cluster it and draw it onto `surface`.
///
/// Bounds and parameters are checked before any point is generated, so a
/// failed run leaves the surface untouched.
pub fn run(config: &RunConfig, surface: &mut dyn Surface) -> Result<DbscanResult> {
    config.bounds.validate()?;
    let dbscan = Dbscan::new(config.params.radius, config.params.min_neighbors);

    let mut generator = PointGenerator::new(config.bounds);
    if let Some(seed) = config.seed {
        generator = generator.random_state(seed);
    }
    let points = generator.generate(config.params.total_points)?;

    let result = dbscan.fit(&points)?;
    info!(
        "clustered {} points (radius {}, min neighbors {}): {} clusters, {} noise",
        points.len(),
        dbscan.radius(),
        dbscan.min_neighbors(),
        result.n_clusters(),
        result.n_noise()
    );

    draw_clusters(surface, &result, &Palette::default(), config.draw_boxes);
    Ok(result)
}
