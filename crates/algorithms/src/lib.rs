//! secp256k1 public-key arithmetic with constant-time field operations
//!
//! This crate provides the arithmetic core behind secp256k1 public keys:
//! modular arithmetic over the curve prime, the curve-membership test,
//! y-coordinate decompression, and strict SEC1 parsing and serialization.
//! The library is usable in both `std` and `no_std` environments and never
//! allocates.
//!
//! # Security Features
//!
//! - Field multiplication, reduction and square roots run in constant time
//! - Range checks on decoded coordinates use constant-time comparisons
//! - Only validated points can be wrapped in a `PublicKey`

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error re-exports
pub use secp256k1_pubkey_api::{validate, Coordinate, Error, Result};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{
    k256, K256AffinePoint, K256FieldElement, K256PublicKey, Unchecked, Validated, Validation,
};
