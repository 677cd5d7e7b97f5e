//! Elliptic Curve Primitives
//!
//! Field arithmetic, point validation and point encoding for secp256k1.
//! Points carry a type-level marker recording whether they have been
//! checked against the curve equation.

pub mod k256;

pub use k256::{
    AffinePoint as K256AffinePoint, FieldElement as K256FieldElement,
    PublicKey as K256PublicKey,
};

mod private {
    pub trait Sealed {}
}

/// Common trait for the validation state of an affine point
pub trait Validation: private::Sealed + Copy + core::fmt::Debug {}

/// Coordinates that have not been checked against the curve equation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unchecked;
impl private::Sealed for Unchecked {}
impl Validation for Unchecked {}

/// Coordinates known to satisfy the curve equation, normalized
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Validated;
impl private::Sealed for Validated {}
impl Validation for Validated {}
