use crate::error::{Error, Result};
use crate::point::{euclidean_distance, Point, PointKey};
use crate::Vector;
use log::debug;
use std::collections::{HashMap, HashSet};

/// Density-based clustering over integer 2D points.
///
/// A point is a core point when at least `min_neighbors` *other* points lie
/// strictly closer than `radius`. Clusters are the connected components of
/// core points under the neighbour relation; everything else is noise.
#[derive(Clone, Debug)]
pub struct Dbscan {
    radius: f64,
    min_neighbors: usize,
}

/// Output of [`Dbscan::fit`].
///
/// Each distinct coordinate pair of the input appears exactly once, either
/// in one cluster or in `noise`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DbscanResult {
    pub clusters: Vec<Vec<Point>>,
    pub noise: Vec<Point>,
    pub core_points: Vec<Point>,
}

impl Dbscan {
    pub fn new(radius: f64, min_neighbors: usize) -> Self {
        Self { radius, min_neighbors }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn min_neighbors(&self) -> usize {
        self.min_neighbors
    }

    pub fn fit(&self, points: &[Point]) -> Result<DbscanResult> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(Error::InvalidParameter {
                name: "radius",
                message: "must be a finite, non-negative number",
            });
        }

        // Later points sharing coordinates with an earlier one are the same point.
        let mut seen = HashSet::new();
        let points: Vec<Point> = points.iter().copied().filter(|p| seen.insert(p.key())).collect();

        let core = self.core_points(&points);
        let core_points: Vec<Point> = points
            .iter()
            .copied()
            .filter(|p| core.contains_key(&p.key()))
            .collect();

        let mut processed = HashSet::new();
        let mut clusters = Vec::new();

        for seed in &core_points {
            if processed.contains(&seed.key()) {
                continue;
            }
            clusters.push(expand_cluster(*seed, &core, &mut processed));
        }

        let noise: Vec<Point> = points
            .iter()
            .copied()
            .filter(|p| !processed.contains(&p.key()))
            .collect();

        debug!(
            "dbscan radius={} min_neighbors={}: {} points, {} core, {} clusters, {} noise",
            self.radius,
            self.min_neighbors,
            points.len(),
            core_points.len(),
            clusters.len(),
            noise.len()
        );

        Ok(DbscanResult {
            clusters,
            noise,
            core_points,
        })
    }

    /// Points strictly within `radius` of `point`, excluding the point itself.
    pub fn region_query(&self, points: &[Point], point: &Point) -> Vec<Point> {
        points
            .iter()
            .filter(|q| q.key() != point.key() && euclidean_distance(point, q) < self.radius)
            .copied()
            .collect()
    }

    fn core_points(&self, points: &[Point]) -> HashMap<PointKey, Vec<Point>> {
        let mut core = HashMap::new();
        for p in points {
            let neighbors = self.region_query(points, p);
            if neighbors.len() >= self.min_neighbors {
                core.insert(p.key(), neighbors);
            }
        }
        core
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::new(20.0, 1)
    }
}

/// Collect the component of `seed` using an explicit stack.
///
/// Only core points are pushed; a candidate popped twice is skipped so each
/// point lands in the cluster once.
fn expand_cluster(
    seed: Point,
    core: &HashMap<PointKey, Vec<Point>>,
    processed: &mut HashSet<PointKey>,
) -> Vec<Point> {
    let mut cluster = Vec::new();
    let mut candidates = vec![seed];

    while let Some(candidate) = candidates.pop() {
        if !processed.insert(candidate.key()) {
            continue;
        }
        cluster.push(candidate);

        if let Some(neighbors) = core.get(&candidate.key()) {
            for n in neighbors {
                if core.contains_key(&n.key()) && !processed.contains(&n.key()) {
                    candidates.push(*n);
                }
            }
        }
    }

    cluster
}

impl DbscanResult {
    pub fn n_clusters(&self) -> usize {
        self.clusters.len()
    }

    pub fn n_noise(&self) -> usize {
        self.noise.len()
    }

    /// Number of distinct points across clusters and noise.
    pub fn n_points(&self) -> usize {
        self.clusters.iter().map(Vec::len).sum::<usize>() + self.noise.len()
    }

    pub fn is_core(&self, point: &Point) -> bool {
        self.core_points.iter().any(|p| p.key() == point.key())
    }

    pub fn cluster_of(&self, point: &Point) -> Option<usize> {
        self.clusters
            .iter()
            .position(|c| c.iter().any(|p| p.key() == point.key()))
    }

    /// One label per input point: cluster index, or -1 for noise and for
    /// points that were not part of the fitted set.
    pub fn labels(&self, points: &[Point]) -> Vector {
        let mut index = HashMap::new();
        for (i, cluster) in self.clusters.iter().enumerate() {
            for p in cluster {
                index.insert(p.key(), i as f64);
            }
        }
        points
            .iter()
            .map(|p| index.get(&p.key()).copied().unwrap_or(-1.0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i64, i64)]) -> Vec<Point> {
        coords.iter().map(|&c| Point::from(c)).collect()
    }

    fn keys(points: &[Point]) -> Vec<PointKey> {
        let mut keys: Vec<PointKey> = points.iter().map(Point::key).collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_dbscan_chain_and_outlier() {
        let points = pts(&[(0, 0), (1, 0), (2, 0), (50, 50)]);
        let result = Dbscan::new(2.0, 1).fit(&points).unwrap();

        assert_eq!(result.n_clusters(), 1);
        assert_eq!(result.clusters[0], pts(&[(0, 0), (1, 0), (2, 0)]));
        assert_eq!(result.noise, pts(&[(50, 50)]));
    }

    #[test]
    fn test_dbscan_boundary_distance_is_not_neighbor() {
        let points = pts(&[(0, 0), (2, 0)]);
        let dbscan = Dbscan::new(2.0, 1);
        assert!(dbscan.region_query(&points, &points[0]).is_empty());

        let result = dbscan.fit(&points).unwrap();
        assert_eq!(result.n_clusters(), 0);
        assert_eq!(result.n_noise(), 2);
    }

    #[test]
    fn test_dbscan_all_noise() {
        let points = pts(&[(0, 0), (100, 0), (0, 100)]);
        let result = Dbscan::new(10.0, 1).fit(&points).unwrap();
        assert!(result.clusters.is_empty());
        assert_eq!(result.n_noise(), 3);
    }

    #[test]
    fn test_dbscan_two_clusters_in_seed_order() {
        let points = pts(&[(100, 100), (0, 0), (101, 100), (1, 0), (0, 1)]);
        let result = Dbscan::new(3.0, 1).fit(&points).unwrap();

        assert_eq!(result.n_clusters(), 2);
        assert_eq!(result.clusters[0][0], Point::from((100, 100)));
        assert_eq!(keys(&result.clusters[0]), keys(&pts(&[(100, 100), (101, 100)])));
        assert_eq!(keys(&result.clusters[1]), keys(&pts(&[(0, 0), (1, 0), (0, 1)])));
        assert!(result.noise.is_empty());
    }

    #[test]
    fn test_dbscan_stack_order_within_cluster() {
        // (5,5) pushes (4,5) then (6,5); the later push pops first.
        let points = pts(&[(5, 5), (4, 5), (6, 5)]);
        let result = Dbscan::new(1.5, 1).fit(&points).unwrap();
        assert_eq!(result.clusters[0], pts(&[(5, 5), (6, 5), (4, 5)]));
    }

    #[test]
    fn test_dbscan_border_point_is_noise() {
        // (3,1) sees only two neighbours, so it stays noise next to a dense block.
        let points = pts(&[(0, 0), (1, 0), (0, 1), (1, 1), (3, 1)]);
        let result = Dbscan::new(2.5, 3).fit(&points).unwrap();

        assert!(!result.is_core(&Point::from((3, 1))));
        assert_eq!(result.noise, pts(&[(3, 1)]));
        assert_eq!(result.n_clusters(), 1);
    }

    #[test]
    fn test_dbscan_min_neighbors_zero_has_no_noise() {
        let points = pts(&[(0, 0), (1, 0), (40, 40)]);
        let result = Dbscan::new(2.0, 0).fit(&points).unwrap();
        assert_eq!(result.n_noise(), 0);
        assert_eq!(result.n_clusters(), 2);
        assert_eq!(result.core_points.len(), 3);
    }

    #[test]
    fn test_dbscan_zero_radius() {
        let points = pts(&[(0, 0), (1, 0), (2, 0)]);

        let result = Dbscan::new(0.0, 1).fit(&points).unwrap();
        assert_eq!(result.n_noise(), 3);
        assert_eq!(result.n_clusters(), 0);

        let result = Dbscan::new(0.0, 0).fit(&points).unwrap();
        assert_eq!(result.n_clusters(), 3);
        assert!(result.clusters.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn test_dbscan_duplicate_coordinates_collapse() {
        let points = vec![
            Point::new(0, 0, 10),
            Point::new(0, 0, 20),
            Point::new(1, 0, 30),
        ];
        let result = Dbscan::new(2.0, 1).fit(&points).unwrap();

        assert_eq!(result.n_points(), 2);
        assert_eq!(result.clusters[0][0].value, 10);

        let labels = result.labels(&points);
        assert_eq!(labels[0], 0.0);
        assert_eq!(labels[1], 0.0);
        assert_eq!(labels[2], 0.0);
    }

    #[test]
    fn test_dbscan_duplicate_does_not_count_as_neighbor() {
        let points = vec![Point::new(5, 5, 1), Point::new(5, 5, 2)];
        let result = Dbscan::new(10.0, 1).fit(&points).unwrap();
        assert_eq!(result.noise, vec![Point::new(5, 5, 1)]);
    }

    #[test]
    fn test_dbscan_far_apart_coordinates() {
        let points = vec![
            Point::new(i64::MAX, 0, 1),
            Point::new(-1, 0, 1),
            Point::new(i64::MIN, i64::MAX, 1),
            Point::new(i64::MIN + 1, i64::MAX, 1),
        ];
        let result = Dbscan::new(5.0, 1).fit(&points).unwrap();

        assert_eq!(result.n_clusters(), 1);
        assert_eq!(keys(&result.clusters[0]), keys(&points[2..]));
        assert_eq!(result.n_noise(), 2);
    }

    #[test]
    fn test_dbscan_empty_input() {
        let result = Dbscan::default().fit(&[]).unwrap();
        assert_eq!(result, DbscanResult::default());
    }

    #[test]
    fn test_dbscan_invalid_radius() {
        let points = pts(&[(0, 0)]);
        assert!(Dbscan::new(-1.0, 1).fit(&points).is_err());
        assert!(Dbscan::new(f64::NAN, 1).fit(&points).is_err());
        assert!(Dbscan::new(f64::INFINITY, 1).fit(&points).is_err());
    }

    #[test]
    fn test_dbscan_labels_and_lookup() {
        let points = pts(&[(0, 0), (1, 0), (30, 30)]);
        let result = Dbscan::new(2.0, 1).fit(&points).unwrap();

        let labels = result.labels(&points);
        assert_eq!(labels.to_vec(), vec![0.0, 0.0, -1.0]);
        assert_eq!(result.cluster_of(&Point::from((1, 0))), Some(0));
        assert_eq!(result.cluster_of(&Point::from((30, 30))), None);
    }
}
