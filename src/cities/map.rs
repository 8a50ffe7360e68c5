//! Points and the dense distance table.

use crate::error::{Error, Result};
use std::fmt;

/// Minimum number of cities for a meaningful closed tour.
const MIN_CITIES: usize = 3;

/// A location in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// An immutable set of cities with pairwise Euclidean distances.
///
/// Distances are stored row-major in an `n × n` table built once at
/// construction.
///
/// # Examples
///
/// ```
/// use u_tsp_ga::cities::CityMap;
///
/// let map = CityMap::new([(0.0, 0.0), (3.0, 4.0), (6.0, 0.0)]).unwrap();
/// assert_eq!(map.len(), 3);
/// assert!((map.distance(0, 1) - 5.0).abs() < 1e-12);
/// assert!((map.tour_length(&[0, 1, 2]) - 16.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CityMap {
    points: Vec<Point>,
    distances: Vec<f64>,
}

impl CityMap {
    /// Builds a map from an ordered sequence of coordinates.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidCityMap`] if fewer than 3 cities are given or any
    ///   coordinate is NaN or infinite.
    /// - [`Error::DegenerateTour`] if every city has the same coordinates,
    ///   which would make every tour length zero.
    pub fn new<I, P>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let points: Vec<Point> = points.into_iter().map(Into::into).collect();
        let n = points.len();

        if n < MIN_CITIES {
            return Err(Error::InvalidCityMap(format!(
                "at least {MIN_CITIES} cities are required, got {n}"
            )));
        }
        if let Some(i) = points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(Error::InvalidCityMap(format!(
                "city {i} has a non-finite coordinate"
            )));
        }
        if points.iter().all(|p| *p == points[0]) {
            return Err(Error::DegenerateTour { cities: n });
        }

        let mut distances = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                distances[i * n + j] = d;
                distances[j * n + i] = d;
            }
        }

        Ok(Self { points, distances })
    }

    /// The bundled ten-city benchmark instance.
    ///
    /// Cities are labelled `A` through `J` in this order.
    pub fn ten_cities() -> Self {
        const COORDS: [(f64, f64); 10] = [
            (4.0, 4.0),
            (1.0, 1.0),
            (8.0, 9.0),
            (2.0, 10.0),
            (4.0, 10.0),
            (6.0, 9.0),
            (5.0, 6.0),
            (1.0, 8.0),
            (8.0, 7.0),
            (9.0, 4.0),
        ];
        Self::new(COORDS).expect("built-in instance is valid")
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a constructed map holds at least three cities.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Coordinates of city `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn point(&self, index: usize) -> Point {
        self.points[index]
    }

    /// All coordinates in index order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Euclidean distance between cities `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances[from * self.points.len() + to]
    }

    /// Length of the closed cycle visiting `order`, including the edge
    /// from the last city back to the first.
    pub fn tour_length(&self, order: &[usize]) -> f64 {
        let (Some(&first), Some(&last)) = (order.first(), order.last()) else {
            return 0.0;
        };
        let open: f64 = order.windows(2).map(|w| self.distance(w[0], w[1])).sum();
        open + self.distance(last, first)
    }

    /// Display label for city `index`: `A`..`Z`, then `#26`, `#27`, ...
    pub fn label(index: usize) -> String {
        match u8::try_from(index) {
            Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
            _ => format!("#{index}"),
        }
    }
}

impl fmt::Display for CityMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: ({}, {})", Self::label(i), p.x, p.y)?;
        }
        Ok(())
    }
}
