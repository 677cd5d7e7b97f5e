//! SEC1 public-key encoding and decoding for secp256k1
//!
//! Accepted encodings:
//!
//! | prefix | length | form |
//! |---|---|---|
//! | `0x02` / `0x03` | 33 | compressed, y even / odd |
//! | `0x04` | 65 | uncompressed |
//!
//! Hybrid encodings (`0x06`/`0x07`) and everything else are rejected.

use crate::ec::k256::{
    constants::{
        K256_FIELD_ELEMENT_SIZE, K256_POINT_COMPRESSED_SIZE, K256_POINT_UNCOMPRESSED_SIZE,
        PREFIX_COMPRESSED_EVEN, PREFIX_COMPRESSED_ODD, PREFIX_UNCOMPRESSED,
    },
    field::FieldElement,
    point::AffinePoint,
};
use crate::ec::Validated;
use secp256k1_pubkey_api::{validate, Coordinate, Error, Result, Sec1Encoding};
use subtle::ConstantTimeEq;

const CONTEXT: &str = "secp256k1 public key";

/// Format of a serialized public key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointFormat {
    /// Compressed format: 0x02/0x03 || x
    Compressed,
    /// Uncompressed format: 0x04 || x || y
    Uncompressed,
}

impl PointFormat {
    /// Classify an encoding by its length and prefix byte.
    ///
    /// Fails with `InvalidLength` unless the input is 33 or 65 bytes, and
    /// with `InvalidPrefix` when the leading byte does not belong to that
    /// length's format.
    pub fn detect(bytes: &[u8]) -> Result<Self> {
        validate::length_one_of(
            CONTEXT,
            bytes.len(),
            &[K256_POINT_COMPRESSED_SIZE, K256_POINT_UNCOMPRESSED_SIZE],
        )?;

        let prefix = bytes[0];
        if bytes.len() == K256_POINT_COMPRESSED_SIZE {
            validate::prefix_one_of(
                CONTEXT,
                prefix,
                &[PREFIX_COMPRESSED_EVEN, PREFIX_COMPRESSED_ODD],
            )?;
            Ok(PointFormat::Compressed)
        } else {
            validate::prefix_one_of(CONTEXT, prefix, &[PREFIX_UNCOMPRESSED])?;
            Ok(PointFormat::Uncompressed)
        }
    }

    /// Number of bytes in this format's encoding
    pub fn encoded_len(self) -> usize {
        match self {
            PointFormat::Compressed => K256_POINT_COMPRESSED_SIZE,
            PointFormat::Uncompressed => K256_POINT_UNCOMPRESSED_SIZE,
        }
    }
}

/// A secp256k1 public key.
///
/// Wraps a point known to satisfy the curve equation with coordinates below
/// p. Downstream code may rely on that without re-checking.
#[derive(Clone, Copy, Debug)]
pub struct PublicKey {
    point: AffinePoint<Validated>,
}

impl PublicKey {
    /// Parse a compressed or uncompressed SEC1 encoding.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        Self::decode(bytes).map_err(|err| {
            tracing::debug!(len = bytes.len(), error = ?err, "rejected public key encoding");
            err
        })
    }

    /// Build a key from coordinates, checking the curve equation.
    ///
    /// Field elements are always reduced mod p, so there is no range check
    /// here; the coordinates are normalized before being stored.
    pub fn from_coordinates(x: FieldElement, y: FieldElement) -> Result<Self> {
        AffinePoint::new(x, y)
            .validate()
            .map(Self::from_point)
            .ok_or(Error::NotOnCurve)
    }

    /// Wrap an already validated point.
    pub fn from_point(point: AffinePoint<Validated>) -> Self {
        PublicKey { point }
    }

    /// The underlying validated point
    pub fn point(&self) -> &AffinePoint<Validated> {
        &self.point
    }

    /// The x-coordinate
    pub fn x(&self) -> &FieldElement {
        self.point.x()
    }

    /// The y-coordinate
    pub fn y(&self) -> &FieldElement {
        self.point.y()
    }

    /// Whether the y-coordinate is odd
    pub fn has_odd_y(&self) -> bool {
        self.point.has_odd_y()
    }

    /// Serialize this key in compressed format.
    pub fn serialize_compressed(&self) -> [u8; K256_POINT_COMPRESSED_SIZE] {
        let mut out = [0u8; K256_POINT_COMPRESSED_SIZE];
        out[0] = if self.has_odd_y() {
            PREFIX_COMPRESSED_ODD
        } else {
            PREFIX_COMPRESSED_EVEN
        };
        out[1..].copy_from_slice(&self.point.x_coordinate_bytes());
        out
    }

    /// Serialize this key in uncompressed format.
    pub fn serialize_uncompressed(&self) -> [u8; K256_POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; K256_POINT_UNCOMPRESSED_SIZE];
        out[0] = PREFIX_UNCOMPRESSED;
        out[1..1 + K256_FIELD_ELEMENT_SIZE].copy_from_slice(&self.point.x_coordinate_bytes());
        out[1 + K256_FIELD_ELEMENT_SIZE..].copy_from_slice(&self.point.y_coordinate_bytes());
        out
    }

    /// Serialize into the given format, writing into `out`.
    ///
    /// Returns the number of bytes written, or `InvalidLength` when `out`
    /// is shorter than the format needs.
    pub fn serialize_into(&self, format: PointFormat, out: &mut [u8]) -> Result<usize> {
        let len = format.encoded_len();
        if out.len() < len {
            return Err(Error::InvalidLength {
                context: "public key output buffer",
                actual: out.len(),
            });
        }
        match format {
            PointFormat::Compressed => out[..len].copy_from_slice(&self.serialize_compressed()),
            PointFormat::Uncompressed => {
                out[..len].copy_from_slice(&self.serialize_uncompressed())
            }
        }
        Ok(len)
    }

    /// True iff both keys name the same point, whatever format each was
    /// parsed from.
    pub fn is_equal(&self, other: &PublicKey) -> bool {
        let x = self.point.x.ct_eq(&other.point.x);
        let y = self.point.y.ct_eq(&other.point.y);
        (x & y).into()
    }

    fn decode(bytes: &[u8]) -> Result<Self> {
        let point = match PointFormat::detect(bytes)? {
            PointFormat::Compressed => {
                let x = decode_coordinate(&bytes[1..], Coordinate::X)?;
                let want_odd = bytes[0] == PREFIX_COMPRESSED_ODD;
                AffinePoint::lift_x(&x, want_odd).ok_or(Error::NoSquareRoot)?
            }
            PointFormat::Uncompressed => {
                let x = decode_coordinate(&bytes[1..], Coordinate::X)?;
                let y = decode_coordinate(&bytes[1 + K256_FIELD_ELEMENT_SIZE..], Coordinate::Y)?;
                AffinePoint::new(x, y)
                    .validate()
                    .ok_or(Error::NotOnCurve)?
            }
        };
        Ok(PublicKey { point })
    }
}

/// Read one 32-byte big-endian coordinate from the front of `bytes`,
/// rejecting values ≥ p.
fn decode_coordinate(bytes: &[u8], coordinate: Coordinate) -> Result<FieldElement> {
    let mut buf = [0u8; K256_FIELD_ELEMENT_SIZE];
    buf.copy_from_slice(&bytes[..K256_FIELD_ELEMENT_SIZE]);

    let fe = FieldElement::from_bytes_canonical(&buf);
    validate::coordinate_in_range(coordinate, fe.is_some().into())?;
    Ok(fe.unwrap_or(FieldElement::zero()))
}

/// Parse a SEC1 public key.
///
/// Free-function form of [`PublicKey::parse`].
pub fn parse_public_key(bytes: &[u8]) -> Result<PublicKey> {
    PublicKey::parse(bytes)
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for PublicKey {}

impl Sec1Encoding for PublicKey {
    type Compressed = [u8; K256_POINT_COMPRESSED_SIZE];
    type Uncompressed = [u8; K256_POINT_UNCOMPRESSED_SIZE];

    fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        Self::parse(bytes)
    }

    fn to_compressed(&self) -> Self::Compressed {
        self.serialize_compressed()
    }

    fn to_uncompressed(&self) -> Self::Uncompressed {
        self.serialize_uncompressed()
    }
}

impl From<PublicKey> for AffinePoint<Validated> {
    fn from(key: PublicKey) -> Self {
        key.point
    }
}
