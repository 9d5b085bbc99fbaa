use crate::error::{Error, Result};
use crate::point::Point;
use crate::Matrix;
use ndarray::Array1;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const MIN_POINT_VALUE: u32 = 1;
pub const MAX_POINT_VALUE: u32 = 100;

/// Drawing area the points are scattered over.
///
/// Coordinates are drawn from `[offset, width - offset]` and
/// `[offset, height - offset]`, both inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub width: i64,
    pub height: i64,
    pub offset: i64,
}

impl Bounds {
    pub fn new(width: i64, height: i64, offset: i64) -> Self {
        Self { width, height, offset }
    }

    pub fn validate(&self) -> Result<()> {
        let fits = |extent: i64| {
            extent
                .checked_sub(self.offset)
                .is_some_and(|upper| upper >= self.offset)
        };
        if self.offset < 0 || !fits(self.width) || !fits(self.height) {
            return Err(Error::InvalidBounds {
                width: self.width,
                height: self.height,
                offset: self.offset,
            });
        }
        Ok(())
    }

    pub fn x_range(&self) -> (i64, i64) {
        (self.offset, self.width - self.offset)
    }

    pub fn y_range(&self) -> (i64, i64) {
        (self.offset, self.height - self.offset)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(1280, 720, 40)
    }
}

#[derive(Clone, Debug)]
pub struct PointGenerator {
    bounds: Bounds,
    random_state: Option<u64>,
}

impl PointGenerator {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            random_state: None,
        }
    }

    pub fn random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Generate `n` points, seeded from `random_state` when one was set.
    pub fn generate(&self, n: usize) -> Result<Vec<Point>> {
        let mut rng = match self.random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate_using(n, &mut rng)
    }

    pub fn generate_using<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<Point>> {
        self.bounds.validate()?;

        let (x_lo, x_hi) = self.bounds.x_range();
        let (y_lo, y_hi) = self.bounds.y_range();

        let xs: Array1<i64> = Array1::random_using(n, Uniform::new_inclusive(x_lo, x_hi), rng);
        let ys: Array1<i64> = Array1::random_using(n, Uniform::new_inclusive(y_lo, y_hi), rng);
        let values: Array1<u32> = Array1::random_using(
            n,
            Uniform::new_inclusive(MIN_POINT_VALUE, MAX_POINT_VALUE),
            rng,
        );

        let points = xs
            .iter()
            .zip(ys.iter())
            .zip(values.iter())
            .map(|((&x, &y), &value)| Point::new(x, y, value))
            .collect();

        Ok(points)
    }
}

/// Coordinates as an `n x 2` matrix, one row per point.
pub fn to_matrix(points: &[Point]) -> Matrix {
    let mut m = Matrix::zeros((points.len(), 2));
    for (i, p) in points.iter().enumerate() {
        m[[i, 0]] = p.x as f64;
        m[[i, 1]] = p.y as f64;
    }
    m
}
