//! Density-based clustering of 2D points.
//!
//! `Dbscan` splits a point set into clusters of density-connected core
//! points and a noise set:
//! - a **core point** has at least `min_neighbors` other points strictly
//!   closer than `radius`
//! - a **cluster** is a connected component of core points, where two core
//!   points are linked when one is a recorded neighbour of the other
//! - every other point is **noise**
//!
//! The neighbour search is a plain O(n²) scan, which is fine for the few
//! hundred points a canvas holds.
//!
//! # Examples
//!
//! ```rust
//! use dotscan::{Dbscan, Point};
//!
//! let points: Vec<Point> = [(0, 0), (1, 0), (2, 0), (50, 50)]
//!     .into_iter()
//!     .map(Point::from)
//!     .collect();
//!
//! let result = Dbscan::new(2.0, 1).fit(&points).unwrap();
//!
//! assert_eq!(result.n_clusters(), 1);
//! assert_eq!(result.clusters[0].len(), 3);
//! assert_eq!(result.noise, vec![Point::from((50, 50))]);
//! ```

mod dbscan;

pub use dbscan::{Dbscan, DbscanResult};
