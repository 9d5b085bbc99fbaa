//! Random point sets clustered with DBSCAN and drawn as coloured dots.
//!
//! The crate is split into a small core ([`point`], [`dataset`],
//! [`cluster`]) and the pieces a front end needs around it: parameter
//! validation in [`config`], drawing in [`render`] and the
//! generate-cluster-draw loop in [`pipeline`].

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod cluster;
pub mod config;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod point;
pub mod render;

pub use cluster::{Dbscan, DbscanResult};
pub use config::{Params, RunConfig};
pub use dataset::{Bounds, PointGenerator};
pub use error::{Error, Result};
pub use metrics::ClusterSummary;
pub use point::{euclidean_distance, Point, PointKey};
pub use render::{draw_clusters, BoundingBox, Palette, Surface, SvgSurface, TextSurface};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reexported_api_clusters_points() {
        let points: Vec<Point> = [(0, 0), (1, 0), (40, 40)].into_iter().map(Point::from).collect();
        let result = Dbscan::new(2.0, 1).fit(&points).unwrap();

        let labels: Vector = result.labels(&points);
        assert_eq!(labels.to_vec(), vec![0.0, 0.0, -1.0]);

        let m: Matrix = dataset::to_matrix(&points);
        assert_eq!(m.shape(), &[3, 2]);
    }
}
