use crate::cluster::DbscanResult;
use crate::error::{Error, Result};
use crate::point::{euclidean_distance, Point};
use crate::Matrix;
use std::fmt;

/// Symmetric `n x n` matrix of Euclidean distances, zero on the diagonal.
pub fn pairwise_distances(points: &[Point]) -> Matrix {
    let n = points.len();
    let mut distances = Matrix::zeros((n, n));

    for i in 0..n {
        for j in (i + 1)..n {
            let d = euclidean_distance(&points[i], &points[j]);
            distances[[i, j]] = d;
            distances[[j, i]] = d;
        }
    }

    distances
}

pub fn noise_ratio(result: &DbscanResult) -> Result<f64> {
    let n = result.n_points();
    if n == 0 {
        return Err(Error::EmptyInput);
    }
    Ok(result.n_noise() as f64 / n as f64)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClusterSummary {
    pub n_points: usize,
    pub n_clusters: usize,
    pub n_noise: usize,
    pub n_core: usize,
    pub largest_cluster: usize,
    pub noise_ratio: f64,
}

impl ClusterSummary {
    pub fn from_result(result: &DbscanResult) -> Self {
        Self {
            n_points: result.n_points(),
            n_clusters: result.n_clusters(),
            n_noise: result.n_noise(),
            n_core: result.core_points.len(),
            largest_cluster: result.clusters.iter().map(Vec::len).max().unwrap_or(0),
            noise_ratio: noise_ratio(result).unwrap_or(0.0),
        }
    }
}

impl fmt::Display for ClusterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} points: {} clusters (largest {}), {} core, {} noise ({:.1}%)",
            self.n_points,
            self.n_clusters,
            self.largest_cluster,
            self.n_core,
            self.n_noise,
            self.noise_ratio * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::Dbscan;

    #[test]
    fn test_pairwise_distances() {
        let points = vec![Point::from((0, 0)), Point::from((3, 4)), Point::from((6, 8))];
        let d = pairwise_distances(&points);

        assert_eq!(d.shape(), &[3, 3]);
        assert!((d[[0, 1]] - 5.0).abs() < 1e-10);
        assert!((d[[0, 2]] - 10.0).abs() < 1e-10);
        assert_eq!(d[[1, 0]], d[[0, 1]]);
        assert_eq!(d[[2, 2]], 0.0);
    }

    #[test]
    fn test_noise_ratio() {
        let points = vec![Point::from((0, 0)), Point::from((1, 0)), Point::from((90, 90)), Point::from((0, 90))];
        let result = Dbscan::new(2.0, 1).fit(&points).unwrap();

        let ratio = noise_ratio(&result).unwrap();
        assert!((ratio - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_noise_ratio_empty() {
        assert!(noise_ratio(&DbscanResult::default()).is_err());
    }

    #[test]
    fn test_summary() {
        let points = vec![Point::from((0, 0)), Point::from((1, 0)), Point::from((2, 0)), Point::from((50, 50))];
        let result = Dbscan::new(2.0, 1).fit(&points).unwrap();
        let summary = ClusterSummary::from_result(&result);

        assert_eq!(summary.n_points, 4);
        assert_eq!(summary.n_clusters, 1);
        assert_eq!(summary.largest_cluster, 3);
        assert_eq!(summary.n_core, 3);
        assert_eq!(
            summary.to_string(),
            "4 points: 1 clusters (largest 3), 3 core, 1 noise (25.0%)"
        );
    }
}
