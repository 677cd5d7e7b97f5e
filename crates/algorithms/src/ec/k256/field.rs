//! secp256k1 field arithmetic implementation

use crate::ec::k256::constants::K256_FIELD_ELEMENT_SIZE;
use core::fmt;
use subtle::{
    Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater, CtOption,
};
use zeroize::Zeroize;

/// Number of 52-bit limbs for a secp256k1 field element (5 × 52 = 260 bits)
const NLIMBS: usize = 5;

/// Mask of a full 52-bit limb
const LIMB_MASK: u64 = 0xF_FFFF_FFFF_FFFF;

/// Mask of the 48-bit top limb (bits 208..256)
const TOP_MASK: u64 = 0xFFFF_FFFF_FFFF;

/// 2²⁵⁶ mod p = 2³² + 977
const R256: u64 = 0x1_0000_03D1;

/// 2²⁶⁰ mod p, i.e. `R256 << 4`
const R260: u128 = 0x10_0000_3D10;

/// Lowest 52-bit limb of p
const P0: u64 = 0xF_FFFE_FFFF_FC2F;

/// secp256k1 field element representing values in 𝔽ₚ, where
/// p = 2²⁵⁶ − 2³² − 977.
///
/// Internally stored as 5 little‐endian 52-bit limbs held in `u64`s. The
/// spare bits let additions run without carrying: a limb may exceed 52 bits
/// until the element is normalized. The *magnitude* of an element is the
/// number of normalized values summed into it; every operation here accepts
/// magnitudes up to 256.
///
/// `is_odd`, `equals` and the raw limbs are only meaningful after
/// [`FieldElement::normalize`]. `PartialEq`, `ConstantTimeEq`, `is_zero` and
/// `to_bytes` normalize internally, so they are always safe to call.
#[derive(Clone, Copy, Zeroize)]
pub struct FieldElement(pub(crate) [u64; NLIMBS]);

impl FieldElement {
    /* ================================================================= */
    /*  Tiny helpers                                                     */
    /* ================================================================= */

    /// Build a field element from a small literal (`0 ≤ n < 2³²`)
    #[inline]
    pub fn from_u32(n: u32) -> Self {
        FieldElement([n as u64, 0, 0, 0, 0])
    }

    /// The additive identity: 0
    #[inline]
    pub fn zero() -> Self {
        FieldElement([0u64; NLIMBS])
    }

    /// The multiplicative identity: 1
    #[inline]
    pub fn one() -> Self {
        Self::from_u32(1)
    }

    /// Create a field element from big‐endian bytes.
    ///
    /// Values ≥ p are accepted as-is and only reduced by a later
    /// [`normalize`](Self::normalize); callers that must reject them use
    /// [`from_bytes_canonical`](Self::from_bytes_canonical).
    pub fn from_bytes(bytes: &[u8; K256_FIELD_ELEMENT_SIZE]) -> Self {
        let mut words = [0u64; 4];
        for (i, word) in words.iter_mut().enumerate() {
            let offset = (3 - i) * 8;
            let mut chunk = [0u8; 8];
            chunk.copy_from_slice(&bytes[offset..offset + 8]);
            *word = u64::from_be_bytes(chunk);
        }

        FieldElement([
            words[0] & LIMB_MASK,
            ((words[0] >> 52) | (words[1] << 12)) & LIMB_MASK,
            ((words[1] >> 40) | (words[2] << 24)) & LIMB_MASK,
            ((words[2] >> 28) | (words[3] << 36)) & LIMB_MASK,
            words[3] >> 16,
        ])
    }

    /// Create a field element from big‐endian bytes, refusing values ≥ p.
    ///
    /// The range test runs in constant time.
    pub fn from_bytes_canonical(bytes: &[u8; K256_FIELD_ELEMENT_SIZE]) -> CtOption<Self> {
        let fe = Self::from_bytes(bytes);
        let in_range = !fe.raw_ge_modulus();
        CtOption::new(fe, in_range)
    }

    /// Create a field element from a big-endian hex string of up to 64 digits.
    ///
    /// Short strings are zero-extended on the left, so `"1"` is one.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let digits = s.as_bytes();
        if digits.len() > 2 * K256_FIELD_ELEMENT_SIZE {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut padded = [b'0'; 2 * K256_FIELD_ELEMENT_SIZE];
        padded[2 * K256_FIELD_ELEMENT_SIZE - digits.len()..].copy_from_slice(digits);

        let mut bytes = [0u8; K256_FIELD_ELEMENT_SIZE];
        hex::decode_to_slice(padded, &mut bytes)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Convert this field element into canonical big‐endian bytes.
    pub fn to_bytes(&self) -> [u8; K256_FIELD_ELEMENT_SIZE] {
        let n = self.normalize().0;
        let words = [
            n[0] | (n[1] << 52),
            (n[1] >> 12) | (n[2] << 40),
            (n[2] >> 24) | (n[3] << 28),
            (n[3] >> 36) | (n[4] << 16),
        ];

        let mut out = [0u8; K256_FIELD_ELEMENT_SIZE];
        for (i, word) in words.iter().enumerate() {
            let offset = (3 - i) * 8;
            out[offset..offset + 8].copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// Whether the limbs hold the canonical form of a value in `[0, p)`
    pub fn is_normalized(&self) -> bool {
        let limbs_fit = self.0[..4].iter().all(|&l| l <= LIMB_MASK) && self.0[4] <= TOP_MASK;
        limbs_fit && !bool::from(self.raw_ge_modulus())
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> bool {
        let n = self.normalize().0;
        (n[0] | n[1] | n[2] | n[3] | n[4]).ct_eq(&0).into()
    }

    /// Return true if the element is odd (least‐significant bit = 1).
    ///
    /// Only valid on a normalized element.
    pub fn is_odd(&self) -> bool {
        debug_assert!(self.is_normalized(), "is_odd on an unnormalized field element");
        (self.0[0] & 1) == 1
    }

    /// Integer equality of two normalized elements.
    ///
    /// Compares raw limbs in constant time; use `==` when either side may
    /// not be normalized.
    pub fn equals(&self, other: &Self) -> bool {
        debug_assert!(self.is_normalized() && other.is_normalized());
        Self::limbs_ct_eq(&self.0, &other.0).into()
    }

    /* ================================================================= */
    /*  Reduction                                                        */
    /* ================================================================= */

    /// Reduce the magnitude to 1 without the final subtraction of p.
    ///
    /// Afterwards limbs 0..3 fit in 52 bits and the top limb in 49 bits,
    /// but the value may still lie in `[p, 2²⁵⁶ + 2²⁰⁸)`.
    pub fn normalize_weak(&self) -> Self {
        let [mut t0, mut t1, mut t2, mut t3, mut t4] = self.0;

        // Fold everything above bit 256 back in, 2²⁵⁶ ≡ R256
        let x = t4 >> 48;
        t4 &= TOP_MASK;
        t0 += x * R256;

        t1 += t0 >> 52;
        t0 &= LIMB_MASK;
        t2 += t1 >> 52;
        t1 &= LIMB_MASK;
        t3 += t2 >> 52;
        t2 &= LIMB_MASK;
        t4 += t3 >> 52;
        t3 &= LIMB_MASK;

        debug_assert!(t4 >> 49 == 0);
        FieldElement([t0, t1, t2, t3, t4])
    }

    /// Reduce to the canonical representative in `[0, p)`.
    ///
    /// Idempotent. Runs the final conditional subtraction unconditionally so
    /// timing does not depend on the value.
    pub fn normalize(&self) -> Self {
        let [mut t0, mut t1, mut t2, mut t3, mut t4] = self.normalize_weak().0;

        // At most one more subtraction of p: either bit 256 is set, or the
        // value sits in [p, 2²⁵⁶).
        let mid = t1 & t2 & t3;
        let ge_p = t4.ct_eq(&TOP_MASK) & mid.ct_eq(&LIMB_MASK) & t0.ct_gt(&(P0 - 1));
        let x = (t4 >> 48) | u64::from(ge_p.unwrap_u8());

        t0 += x * R256;
        t1 += t0 >> 52;
        t0 &= LIMB_MASK;
        t2 += t1 >> 52;
        t1 &= LIMB_MASK;
        t3 += t2 >> 52;
        t2 &= LIMB_MASK;
        t4 += t3 >> 52;
        t3 &= LIMB_MASK;

        debug_assert!(t4 >> 48 == x);
        t4 &= TOP_MASK;

        FieldElement([t0, t1, t2, t3, t4])
    }

    /* ================================================================= */
    /*  Arithmetic                                                       */
    /* ================================================================= */

    /// Lazy addition: (self + other) mod p.
    ///
    /// Limbs are summed without carrying, so the result's magnitude is the
    /// sum of the operands' magnitudes.
    pub fn add(&self, other: &Self) -> Self {
        let mut out = [0u64; NLIMBS];
        for ((o, a), b) in out.iter_mut().zip(self.0.iter()).zip(other.0.iter()) {
            *o = a + b;
        }
        FieldElement(out)
    }

    /// Doubling: 2·self mod p
    #[inline(always)]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Negation: (p − self) mod p, with magnitude 2.
    pub fn negate(&self) -> Self {
        let a = self.normalize_weak().0;
        // 2p − a, limb by limb; every limb of 2p dominates a weakly
        // normalized limb, so nothing underflows.
        FieldElement([
            2 * P0 - a[0],
            2 * LIMB_MASK - a[1],
            2 * LIMB_MASK - a[2],
            2 * LIMB_MASK - a[3],
            2 * TOP_MASK - a[4],
        ])
    }

    /// Subtraction: (self − other) mod p
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }

    /// Field multiplication: (self * other) mod p.
    ///
    /// Schoolbook 5×5 → 9 column product, then reduction. The result has
    /// magnitude 1.
    pub fn mul(&self, other: &Self) -> Self {
        debug_assert!(self.0.iter().chain(other.0.iter()).all(|&l| l >> 60 == 0));

        let mut cols = [0u128; 2 * NLIMBS - 1];
        for i in 0..NLIMBS {
            for j in 0..NLIMBS {
                cols[i + j] += (self.0[i] as u128) * (other.0[j] as u128);
            }
        }
        Self::reduce_wide(cols)
    }

    /// Field squaring: (self²) mod p
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Square root for p ≡ 3 (mod 4): self^((p+1)/4), checked by squaring.
    ///
    /// The exponent is applied through a fixed addition chain, so the
    /// sequence of multiplications never depends on the input. Returns a
    /// normalized root, or none when self is a non-residue.
    pub fn sqrt(&self) -> CtOption<Self> {
        let root = self.pow_p_plus_1_over_4().normalize();
        let is_root = root.square().ct_eq(self);
        CtOption::new(root, is_root)
    }

    /* ================================================================= */
    /*  Private helper methods                                           */
    /* ================================================================= */

    /// Square `k` times
    #[inline(always)]
    fn pow2k(&self, k: usize) -> Self {
        let mut r = *self;
        for _ in 0..k {
            r = r.square();
        }
        r
    }

    /// self^((p+1)/4).
    ///
    /// (p+1)/4 in binary is 223 ones, a zero, 22 ones, four zeros, two ones
    /// and two zeros. Build x^(2^k − 1) for k ∈ {2, 3, 6, 9, 11, 22, 44, 88,
    /// 176, 220, 223} and stitch the runs together.
    fn pow_p_plus_1_over_4(&self) -> Self {
        let x2 = self.square().mul(self);
        let x3 = x2.square().mul(self);
        let x6 = x3.pow2k(3).mul(&x3);
        let x9 = x6.pow2k(3).mul(&x3);
        let x11 = x9.pow2k(2).mul(&x2);
        let x22 = x11.pow2k(11).mul(&x11);
        let x44 = x22.pow2k(22).mul(&x22);
        let x88 = x44.pow2k(44).mul(&x44);
        let x176 = x88.pow2k(88).mul(&x88);
        let x220 = x176.pow2k(44).mul(&x44);
        let x223 = x220.pow2k(3).mul(&x3);

        let t = x223.pow2k(23).mul(&x22);
        let t = t.pow2k(6).mul(&x2);
        t.pow2k(2)
    }

    /// Whether the raw limbs (assumed to fit their widths) encode a value ≥ p
    #[inline(always)]
    fn raw_ge_modulus(&self) -> Choice {
        let [l0, l1, l2, l3, l4] = self.0;
        l4.ct_eq(&TOP_MASK) & (l1 & l2 & l3).ct_eq(&LIMB_MASK) & l0.ct_gt(&(P0 - 1))
    }

    #[inline(always)]
    fn limbs_ct_eq(a: &[u64; NLIMBS], b: &[u64; NLIMBS]) -> Choice {
        a.iter()
            .zip(b.iter())
            .fold(Choice::from(1), |acc, (x, y)| acc & x.ct_eq(y))
    }

    /// Reduce a 9-column (≈ 520-bit) product modulo p.
    ///
    /// Columns are carried into ten 52-bit digits, digits 5..10 are folded
    /// down with 2²⁶⁰ ≡ R260, and the bits above 256 that remain are folded
    /// once more with 2²⁵⁶ ≡ R256.
    fn reduce_wide(cols: [u128; 2 * NLIMBS - 1]) -> Self {
        //------------------------------------------------------------------
        // step 1  –  carry the columns into 52-bit digits
        //------------------------------------------------------------------
        let mut t = [0u128; 2 * NLIMBS];
        let mut carry: u128 = 0;
        for (digit, col) in t.iter_mut().zip(cols.iter()) {
            let v = col + carry;
            *digit = v & LIMB_MASK as u128;
            carry = v >> 52;
        }
        t[2 * NLIMBS - 1] = carry;

        //------------------------------------------------------------------
        // step 2  –  r = low + high · 2²⁶⁰ mod p
        //------------------------------------------------------------------
        let mut r = [0u128; NLIMBS];
        for (i, limb) in r.iter_mut().enumerate() {
            *limb = t[i] + t[i + NLIMBS] * R260;
        }

        //------------------------------------------------------------------
        // step 3  –  carry, fold bits ≥ 256, carry again
        //------------------------------------------------------------------
        for i in 0..NLIMBS - 1 {
            r[i + 1] += r[i] >> 52;
            r[i] &= LIMB_MASK as u128;
        }
        let top = r[4] >> 48;
        r[4] &= TOP_MASK as u128;
        r[0] += top * R256 as u128;
        for i in 0..NLIMBS - 1 {
            r[i + 1] += r[i] >> 52;
            r[i] &= LIMB_MASK as u128;
        }

        debug_assert!(r[4] >> 49 == 0);
        FieldElement([
            r[0] as u64,
            r[1] as u64,
            r[2] as u64,
            r[3] as u64,
            r[4] as u64,
        ])
    }
}

impl Default for FieldElement {
    fn default() -> Self {
        Self::zero()
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        Self::limbs_ct_eq(&self.normalize().0, &other.normalize().0)
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0u64; NLIMBS];
        for ((o, x), y) in out.iter_mut().zip(a.0.iter()).zip(b.0.iter()) {
            *o = u64::conditional_select(x, y, choice);
        }
        FieldElement(out)
    }
}

/// Equality of the represented integers mod p, whatever the magnitudes.
impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({})", self)
    }
}
