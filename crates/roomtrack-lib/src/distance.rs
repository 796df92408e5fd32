//! Straight Euclidean separation over raw coordinate triples.
//!
//! Latitude and longitude are treated as plain numbers next to altitude; no
//! geodesic correction is applied. Arrival radii in the dataset are calibrated
//! against this same metric, so it must stay this way.

use rust_decimal::{Decimal, MathematicalOps};

use crate::error::{Error, Result};
use crate::records::Position;

/// Euclidean norm of the component-wise difference between two positions.
pub fn distance(a: &Position, b: &Position) -> Result<Decimal> {
    let squares = [(a.lat, b.lat), (a.lng, b.lng), (a.alt, b.alt)]
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, (from, to)| {
            let delta = to.checked_sub(from)?;
            acc.checked_add(delta.checked_mul(delta)?)
        })
        .ok_or(Error::DistanceOverflow)?;

    // Non-negative by construction, so `sqrt` always yields a value.
    squares.sqrt().ok_or(Error::DistanceOverflow)
}

impl Position {
    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> Result<Decimal> {
        distance(self, other)
    }
}
