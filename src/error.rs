//! Error type shared by every constructor in the crate.
//!
//! All failures are construction-time: once an [`EvolutionEngine`] or
//! [`CityMap`] exists, running it cannot fail.
//!
//! [`EvolutionEngine`]: crate::ga::EvolutionEngine
//! [`CityMap`]: crate::cities::CityMap

/// Errors reported while validating inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A numeric parameter is outside its admissible range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending field.
        name: &'static str,
        /// Human-readable constraint that was violated.
        reason: String,
    },

    /// The city coordinates cannot form a problem instance.
    #[error("invalid city map: {0}")]
    InvalidCityMap(String),

    /// Every city shares the same coordinates, so every tour has length
    /// zero and fitness `1 / length` is undefined.
    #[error("degenerate tour: all {cities} cities share the same coordinates")]
    DegenerateTour {
        /// Number of cities in the rejected map.
        cities: usize,
    },
}

impl Error {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Checks that `value` is a probability in `[0, 1]`.
///
/// NaN is rejected.
pub(crate) fn check_rate(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::invalid_parameter(
            name,
            format!("must be within [0, 1], got {value}"),
        ))
    }
}
