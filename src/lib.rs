//! # secp256k1-pubkey
//!
//! secp256k1 public keys: field arithmetic modulo
//! p = 2²⁵⁶ − 2³² − 977, curve membership, Y-coordinate recovery and strict
//! SEC1 parsing and serialization.
//!
//! ## Usage
//!
//! ```
//! use secp256k1_pubkey::prelude::*;
//!
//! let bytes = hex_literal();
//! let key = parse_public_key(&bytes)?;
//! assert_eq!(key.serialize_compressed(), bytes);
//! # fn hex_literal() -> [u8; 33] {
//! #     let mut out = [0u8; 33];
//! #     out[0] = 0x02;
//! #     out[1..].copy_from_slice(&secp256k1_pubkey::algorithms::ec::k256::GENERATOR_X);
//! #     out
//! # }
//! # Ok::<(), secp256k1_pubkey::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` for [`api::Error`] and `tracing/std`
//! - `alloc`: `Vec`-returning helpers on [`api::Sec1Encoding`]
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`secp256k1-pubkey-api`]: error taxonomy and encoding traits
//! - [`secp256k1-pubkey-algorithms`]: field, point and public-key codec

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use secp256k1_pubkey_algorithms as algorithms;
pub use secp256k1_pubkey_api as api;

// Re-exported so callers can name `Choice`/`CtOption` and zeroize keys
pub use subtle;
pub use zeroize;

/// Common imports for secp256k1-pubkey users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Coordinate, Error, Result};

    // Re-export core traits
    pub use crate::api::Sec1Encoding;

    // Field, point and codec
    pub use crate::algorithms::ec::k256::{
        decompress_y, is_on_curve, parse_public_key, AffinePoint, FieldElement, PointFormat,
        PublicKey,
    };
    pub use crate::algorithms::ec::{Unchecked, Validated};
}
