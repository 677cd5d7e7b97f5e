//! Validation utilities used while parsing encodings

use super::{Coordinate, Error, Result};

/// Validate that a length is one of the accepted encoding lengths
#[inline(always)]
pub fn length_one_of(context: &'static str, actual: usize, allowed: &[usize]) -> Result<()> {
    if !allowed.contains(&actual) {
        return Err(Error::InvalidLength { context, actual });
    }
    Ok(())
}

/// Validate that a format byte is one of the accepted prefixes
#[inline(always)]
pub fn prefix_one_of(context: &'static str, prefix: u8, allowed: &[u8]) -> Result<()> {
    if !allowed.contains(&prefix) {
        return Err(Error::InvalidPrefix { context, prefix });
    }
    Ok(())
}

/// Validate that a decoded coordinate is below the field prime
#[inline(always)]
pub fn coordinate_in_range(coordinate: Coordinate, in_range: bool) -> Result<()> {
    if !in_range {
        return Err(Error::CoordinateOutOfRange { coordinate });
    }
    Ok(())
}
