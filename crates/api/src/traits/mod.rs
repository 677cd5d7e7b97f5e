//! Trait definitions for public-key encodings

pub mod serialize;

pub use serialize::Sec1Encoding;
