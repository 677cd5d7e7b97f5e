//! secp256k1 affine points: curve membership and y-coordinate recovery

use crate::ec::k256::{
    constants::{CURVE_B, GENERATOR_X, GENERATOR_Y, K256_FIELD_ELEMENT_SIZE},
    field::FieldElement,
};
use crate::ec::{Unchecked, Validated, Validation};
use core::marker::PhantomData;
use subtle::{Choice, ConditionallySelectable};

/// An affine `(x, y)` pair on (or claimed to be on) secp256k1.
///
/// The marker records whether the curve equation has been checked. Anyone
/// can build an `AffinePoint<Unchecked>`; an `AffinePoint<Validated>` only
/// comes out of [`validate`](AffinePoint::validate),
/// [`lift_x`](AffinePoint::lift_x) or [`generator`](AffinePoint::generator),
/// and always holds normalized coordinates.
///
/// There is no point at infinity here; every value is a finite affine point.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint<V: Validation = Unchecked> {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    _marker: PhantomData<V>,
}

impl AffinePoint<Unchecked> {
    /// Pair two coordinates without checking anything.
    pub fn new(x: FieldElement, y: FieldElement) -> Self {
        AffinePoint {
            x,
            y,
            _marker: PhantomData,
        }
    }

    /// Check the curve equation, promoting the pair on success.
    pub fn validate(self) -> Option<AffinePoint<Validated>> {
        if !is_on_curve(&self.x, &self.y) {
            return None;
        }
        Some(AffinePoint::assume_validated(
            self.x.normalize(),
            self.y.normalize(),
        ))
    }
}

impl AffinePoint<Validated> {
    /// The standard base point G.
    pub fn generator() -> Self {
        AffinePoint::assume_validated(
            FieldElement::from_bytes(&GENERATOR_X),
            FieldElement::from_bytes(&GENERATOR_Y),
        )
    }

    /// The curve point with this x and the requested y parity, if any.
    pub fn lift_x(x: &FieldElement, want_odd: bool) -> Option<Self> {
        decompress_y(x, want_odd).map(|y| AffinePoint::assume_validated(x.normalize(), y))
    }

    /// Whether y is odd; decides the compressed prefix.
    pub fn has_odd_y(&self) -> bool {
        self.y.is_odd()
    }

    /// Forget the validation, e.g. to hand the pair to code that rebuilds it.
    pub fn into_unchecked(self) -> AffinePoint<Unchecked> {
        AffinePoint::new(self.x, self.y)
    }

    // Callers guarantee (x, y) is on the curve and both are normalized.
    fn assume_validated(x: FieldElement, y: FieldElement) -> Self {
        debug_assert!(x.is_normalized() && y.is_normalized());
        AffinePoint {
            x,
            y,
            _marker: PhantomData,
        }
    }
}

impl<V: Validation> AffinePoint<V> {
    /// The x-coordinate
    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    /// The y-coordinate
    pub fn y(&self) -> &FieldElement {
        &self.y
    }

    /// Get the x-coordinate of this point as bytes.
    pub fn x_coordinate_bytes(&self) -> [u8; K256_FIELD_ELEMENT_SIZE] {
        self.x.to_bytes()
    }

    /// Get the y-coordinate of this point as bytes.
    pub fn y_coordinate_bytes(&self) -> [u8; K256_FIELD_ELEMENT_SIZE] {
        self.y.to_bytes()
    }
}

/// Coordinate equality, regardless of how either side was validated.
impl<V: Validation, W: Validation> PartialEq<AffinePoint<W>> for AffinePoint<V> {
    fn eq(&self, other: &AffinePoint<W>) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<V: Validation> Eq for AffinePoint<V> {}

/// x³ + 7
fn curve_rhs(x: &FieldElement) -> FieldElement {
    x.square().mul(x).add(&FieldElement::from_u32(CURVE_B))
}

/// Returns true iff y² ≡ x³ + 7 (mod p).
///
/// Both sides are normalized before comparison, so un-normalized inputs are
/// fine.
pub fn is_on_curve(x: &FieldElement, y: &FieldElement) -> bool {
    y.square() == curve_rhs(x)
}

/// Recover the y with the requested parity such that `(x, y)` is on the curve.
///
/// Computes c = x³ + 7 and r = c^((p+1)/4), which is a square root of c
/// whenever one exists because p ≡ 3 (mod 4). `r` and `p − r` have opposite
/// parities, so exactly one of them matches `want_odd`. Returns `None` when
/// c is a non-residue; that answer never depends on `want_odd`.
///
/// The returned y is normalized.
pub fn decompress_y(x: &FieldElement, want_odd: bool) -> Option<FieldElement> {
    let c = curve_rhs(x);
    c.sqrt()
        .map(|r| {
            let neg = r.negate().normalize();
            let flip = Choice::from((r.is_odd() != want_odd) as u8);
            FieldElement::conditional_select(&r, &neg, flip)
        })
        .into()
}
