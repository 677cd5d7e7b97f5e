//! Public API traits and types for the secp256k1-pubkey library
//!
//! This crate provides the surface shared by every other crate in the
//! workspace: the error taxonomy reported by public-key parsing, the
//! validation helpers that produce it, and the `Sec1Encoding` trait that
//! public-key types implement.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Coordinate, Error, Result};
pub use traits::Sec1Encoding;
