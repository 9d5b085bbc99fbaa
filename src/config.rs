//! Run configuration.
//!
//! The three user-facing fields (point count, radius, minimum neighbours)
//! arrive as text, the way a form or command line hands them over. They are
//! all validated before anything is generated; the first empty field aborts
//! the run.

use crate::dataset::Bounds;
use crate::error::{Error, Result};
use std::str::FromStr;

pub const DEFAULT_TOTAL_POINTS: usize = 100;
pub const DEFAULT_RADIUS: f64 = 20.0;
pub const DEFAULT_MIN_NEIGHBORS: usize = 1;

const TOTAL_FIELD: &str = "the total number of points";
const RADIUS_FIELD: &str = "the neighborhood radius";
const MIN_NEIGHBORS_FIELD: &str = "the minimum number of neighbors";

/// Clustering parameters after validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
    pub total_points: usize,
    pub radius: f64,
    pub min_neighbors: usize,
}

impl Params {
    pub fn new(total_points: usize, radius: f64, min_neighbors: usize) -> Self {
        Self {
            total_points,
            radius,
            min_neighbors,
        }
    }

    /// Parse the raw control fields, checked in order: total, radius, minimum neighbours.
    pub fn from_fields(total: &str, radius: &str, min_neighbors: &str) -> Result<Self> {
        let total = required(total, TOTAL_FIELD)?;
        let radius = required(radius, RADIUS_FIELD)?;
        let min_neighbors = required(min_neighbors, MIN_NEIGHBORS_FIELD)?;

        let total_points = parse(total, TOTAL_FIELD)?;
        let radius: f64 = parse(radius, RADIUS_FIELD)?;
        if !radius.is_finite() || radius < 0.0 {
            return Err(Error::InvalidParameter {
                name: "radius",
                message: "must be a finite, non-negative number",
            });
        }

        Ok(Self {
            total_points,
            radius,
            min_neighbors: parse(min_neighbors, MIN_NEIGHBORS_FIELD)?,
        })
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new(DEFAULT_TOTAL_POINTS, DEFAULT_RADIUS, DEFAULT_MIN_NEIGHBORS)
    }
}

fn required<'a>(raw: &'a str, name: &'static str) -> Result<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingParameter { name });
    }
    Ok(trimmed)
}

fn parse<T: FromStr>(raw: &str, name: &'static str) -> Result<T> {
    raw.parse().map_err(|_| Error::InvalidNumber {
        name,
        value: raw.to_string(),
    })
}

/// Everything one run of generate, cluster and render needs.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub params: Params,
    pub bounds: Bounds,
    pub seed: Option<u64>,
    pub draw_boxes: bool,
}

impl RunConfig {
    pub fn new(params: Params) -> Self {
        Self {
            params,
            bounds: Bounds::default(),
            seed: None,
            draw_boxes: false,
        }
    }

    pub fn bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn draw_boxes(mut self, draw_boxes: bool) -> Self {
        self.draw_boxes = draw_boxes;
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(Params::default())
    }
}
