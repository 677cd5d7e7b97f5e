//! Koblitz secp256k1 public-key core
//!
//! The curve equation is y² = x³ + 7 over the prime field F_p where:
//! - p = 2^256 - 2^32 - 977
//! - The curve order n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
//!
//! This module covers field arithmetic modulo p, the curve-membership
//! predicate, y-coordinate decompression and the SEC1 public-key codec.
//! The group law is not implemented here.

mod constants;
mod field;
mod point;
mod pubkey;

pub use constants::{
    CURVE_B, FIELD_PRIME, GENERATOR_X, GENERATOR_Y, GROUP_ORDER, K256_FIELD_ELEMENT_SIZE,
    K256_POINT_COMPRESSED_SIZE, K256_POINT_UNCOMPRESSED_SIZE, PREFIX_COMPRESSED_EVEN,
    PREFIX_COMPRESSED_ODD, PREFIX_UNCOMPRESSED,
};
pub use field::FieldElement;
pub use point::{decompress_y, is_on_curve, AffinePoint};
pub use pubkey::{parse_public_key, PointFormat, PublicKey};

/// Get the standard base point G of the secp256k1 curve
pub fn base_point_g() -> AffinePoint<crate::ec::Validated> {
    AffinePoint::generator()
}
