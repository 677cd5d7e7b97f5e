//! Error type definitions for public-key parsing

use core::fmt;

/// Which affine coordinate an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coordinate {
    /// The x-coordinate
    X,
    /// The y-coordinate
    Y,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::X => f.write_str("x"),
            Coordinate::Y => f.write_str("y"),
        }
    }
}

/// Reasons a byte string is not a valid public-key encoding.
///
/// Parsing fails fast: the variant reports the first condition the input
/// violated, in the order length, prefix, coordinate range, curve membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    /// The input length matches no recognized encoding
    #[cfg_attr(
        feature = "std",
        error("{context}: invalid length {actual} (expected 33 or 65 bytes)")
    )]
    InvalidLength {
        /// Where the length was checked
        context: &'static str,
        /// Length of the rejected input
        actual: usize,
    },

    /// The length is recognized but the leading format byte is not accepted
    #[cfg_attr(feature = "std", error("{context}: unsupported format prefix {prefix:#04x}"))]
    InvalidPrefix {
        /// Where the prefix was checked
        context: &'static str,
        /// The rejected prefix byte
        prefix: u8,
    },

    /// A decoded coordinate is not below the field prime
    #[cfg_attr(feature = "std", error("{coordinate} coordinate is not less than the field prime"))]
    CoordinateOutOfRange {
        /// The offending coordinate
        coordinate: Coordinate,
    },

    /// The coordinates do not satisfy y² = x³ + 7
    #[cfg_attr(feature = "std", error("point is not on the secp256k1 curve"))]
    NotOnCurve,

    /// x³ + 7 has no square root modulo p, so no y exists for the given x
    #[cfg_attr(feature = "std", error("x coordinate has no corresponding y on the secp256k1 curve"))]
    NoSquareRoot,
}

/// Result type for public-key operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// True for the two kinds that mean "these bytes name no curve point".
    ///
    /// `NotOnCurve` and `NoSquareRoot` are reported separately for
    /// diagnostics, but callers deciding whether a key is usable can treat
    /// them the same.
    pub fn is_invalid_point(&self) -> bool {
        matches!(self, Error::NotOnCurve | Error::NoSquareRoot)
    }

    /// True for the kinds raised before any coordinate is decoded
    pub fn is_malformed_encoding(&self) -> bool {
        matches!(self, Error::InvalidLength { .. } | Error::InvalidPrefix { .. })
    }
}

#[cfg(not(feature = "std"))]
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength { context, actual } => write!(
                f,
                "{}: invalid length {} (expected 33 or 65 bytes)",
                context, actual
            ),
            Error::InvalidPrefix { context, prefix } => {
                write!(f, "{}: unsupported format prefix {:#04x}", context, prefix)
            }
            Error::CoordinateOutOfRange { coordinate } => write!(
                f,
                "{} coordinate is not less than the field prime",
                coordinate
            ),
            Error::NotOnCurve => f.write_str("point is not on the secp256k1 curve"),
            Error::NoSquareRoot => {
                f.write_str("x coordinate has no corresponding y on the secp256k1 curve")
            }
        }
    }
}
