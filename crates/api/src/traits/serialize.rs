//! Traits for SEC1 byte serialization of public points.

use crate::Result;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// A public type with SEC1 compressed and uncompressed byte encodings.
///
/// Implementors only come into existence through `from_sec1_bytes`, so a
/// value of the type is always a valid encoding's decoded form.
pub trait Sec1Encoding: Sized {
    /// Fixed-size compressed encoding, `0x02`/`0x03` followed by X
    type Compressed: AsRef<[u8]>;
    /// Fixed-size uncompressed encoding, `0x04` followed by X and Y
    type Uncompressed: AsRef<[u8]>;

    /// Parses either encoding, rejecting everything else.
    fn from_sec1_bytes(bytes: &[u8]) -> Result<Self>;

    /// Serializes in compressed form.
    fn to_compressed(&self) -> Self::Compressed;

    /// Serializes in uncompressed form.
    fn to_uncompressed(&self) -> Self::Uncompressed;

    /// Serializes into a vector, compressed or not.
    #[cfg(feature = "alloc")]
    fn to_sec1_vec(&self, compress: bool) -> Vec<u8> {
        if compress {
            self.to_compressed().as_ref().to_vec()
        } else {
            self.to_uncompressed().as_ref().to_vec()
        }
    }
}
