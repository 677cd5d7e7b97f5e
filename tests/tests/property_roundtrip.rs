//! Property-based tests for the public-key codec

use proptest::prelude::*;
use secp256k1_pubkey_algorithms::ec::k256::{
    decompress_y, is_on_curve, parse_public_key, AffinePoint, FieldElement, PublicKey,
    FIELD_PRIME,
};
use secp256k1_pubkey_api::{Coordinate, Error};

/// 32 random bytes that encode a value below p
fn canonical_coordinate() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>().prop_filter("coordinate must be below p", |bytes| {
        bool::from(FieldElement::from_bytes_canonical(bytes).is_some())
    })
}

/// A public key built by lifting a random x, skipping non-residues
fn public_key() -> impl Strategy<Value = PublicKey> {
    (canonical_coordinate(), any::<bool>()).prop_filter_map(
        "x must lift to a curve point",
        |(x, odd)| {
            AffinePoint::lift_x(&FieldElement::from_bytes(&x), odd).map(PublicKey::from_point)
        },
    )
}

proptest! {
    #[test]
    fn compressed_roundtrip(key in public_key()) {
        let bytes = key.serialize_compressed();
        let parsed = parse_public_key(&bytes).unwrap();

        prop_assert_eq!(parsed.serialize_compressed(), bytes);
        prop_assert!(parsed.is_equal(&key));
    }

    #[test]
    fn uncompressed_roundtrip(key in public_key()) {
        let bytes = key.serialize_uncompressed();
        let parsed = parse_public_key(&bytes).unwrap();

        prop_assert_eq!(parsed.serialize_uncompressed().to_vec(), bytes.to_vec());
        prop_assert!(parsed.is_equal(&key));
    }

    #[test]
    fn formats_agree(key in public_key()) {
        let from_compressed = parse_public_key(&key.serialize_compressed()).unwrap();
        let from_uncompressed = parse_public_key(&key.serialize_uncompressed()).unwrap();

        prop_assert!(from_compressed.is_equal(&from_uncompressed));
        prop_assert_eq!(
            from_compressed.serialize_uncompressed().to_vec(),
            from_uncompressed.serialize_uncompressed().to_vec()
        );
        prop_assert_eq!(
            from_uncompressed.serialize_compressed(),
            from_compressed.serialize_compressed()
        );
    }

    #[test]
    fn decompress_validity_ignores_parity(x in canonical_coordinate()) {
        let x = FieldElement::from_bytes(&x);
        let odd = decompress_y(&x, true);
        let even = decompress_y(&x, false);

        prop_assert_eq!(odd.is_some(), even.is_some());
        if let (Some(odd), Some(even)) = (odd, even) {
            prop_assert!(odd.is_odd());
            prop_assert!(!even.is_odd());
            prop_assert!(is_on_curve(&x, &odd));
            prop_assert!(is_on_curve(&x, &even));
        }
    }

    #[test]
    fn hybrid_prefixes_rejected(key in public_key(), prefix in 0x05u8..=0x07) {
        let mut bytes = key.serialize_uncompressed();
        bytes[0] = prefix;

        prop_assert_eq!(
            parse_public_key(&bytes),
            Err(Error::InvalidPrefix { context: "secp256k1 public key", prefix })
        );
    }

    #[test]
    fn unknown_prefixes_rejected(key in public_key(), prefix in any::<u8>()) {
        prop_assume!(!(0x02..=0x04).contains(&prefix));

        let mut compressed = key.serialize_compressed();
        compressed[0] = prefix;
        prop_assert!(parse_public_key(&compressed).is_err());

        let mut uncompressed = key.serialize_uncompressed();
        uncompressed[0] = prefix;
        prop_assert!(parse_public_key(&uncompressed).is_err());
    }

    #[test]
    fn other_lengths_rejected(bytes in prop::collection::vec(any::<u8>(), 0..100)) {
        prop_assume!(bytes.len() != 33 && bytes.len() != 65);

        prop_assert_eq!(
            parse_public_key(&bytes),
            Err(Error::InvalidLength { context: "secp256k1 public key", actual: bytes.len() })
        );
    }

    #[test]
    fn out_of_range_x_rejected(key in public_key(), excess in 0u16..0x03D0) {
        // p + excess stays in the low two bytes and below 2²⁵⁶
        let mut x = FIELD_PRIME;
        let low = u16::from_be_bytes([x[30], x[31]]) + excess;
        x[30..].copy_from_slice(&low.to_be_bytes());

        let mut bytes = key.serialize_uncompressed();
        bytes[1..33].copy_from_slice(&x);
        prop_assert_eq!(
            parse_public_key(&bytes),
            Err(Error::CoordinateOutOfRange { coordinate: Coordinate::X })
        );

        let mut compressed = key.serialize_compressed();
        compressed[1..].copy_from_slice(&x);
        prop_assert_eq!(
            parse_public_key(&compressed),
            Err(Error::CoordinateOutOfRange { coordinate: Coordinate::X })
        );
    }

    #[test]
    fn flipped_y_parity_is_a_different_key(key in public_key()) {
        let mut bytes = key.serialize_compressed();
        bytes[0] ^= 0x01;
        let other = parse_public_key(&bytes).unwrap();

        prop_assert!(!other.is_equal(&key));
        prop_assert_eq!(other.x(), key.x());
        prop_assert_eq!(*other.y(), key.y().negate());
    }
}
