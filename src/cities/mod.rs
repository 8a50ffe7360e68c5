//! City model.
//!
//! A [`CityMap`] is the immutable problem instance: an ordered set of
//! 2-D points indexed `0..N`. It precomputes the full Euclidean distance
//! matrix so that tour evaluation is a sequence of table lookups.
//!
//! The map is shared by reference with every [`Tour`](crate::ga::Tour)
//! and every engine built on it; nothing in the crate mutates it.

mod map;

pub use map::{CityMap, Point};
