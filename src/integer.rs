//! Fixed-width nonnegative integers.
//!
//! SRP keeps concatenating values by their padded byte representation, so the
//! serialization width is part of the value itself: [`SrpInteger`] carries the
//! hex width it was parsed or generated with, and every serializer emits
//! exactly that width. Arithmetic propagates the widest operand; reduction
//! modulo `N` inherits the width of `N`, which is how values reduced modulo
//! the group modulus come out ready for `PAD(·)` concatenation.

use core::fmt;

use num_bigint::{BigInt, Sign};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;

use crate::errors::AuthError;

/// A nonnegative big integer together with the hex width of its wire form.
///
/// The width is a property of the value in transit, not of the mathematical
/// integer: equality ignores it, serialization honors it. Values are
/// immutable; all operations return new integers.
#[derive(Clone)]
pub struct SrpInteger {
    value: BigInt,
    hex_length: Option<usize>,
}

/// Widest operand wins. `None` means "no width was ever imposed".
fn combined_width(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (w, None) | (None, w) => w,
    }
}

impl SrpInteger {
    /// The integer zero, with no imposed width.
    pub fn zero() -> Self {
        Self {
            value: BigInt::from(0u8),
            hex_length: None,
        }
    }

    /// The integer one, with no imposed width.
    pub fn one() -> Self {
        Self {
            value: BigInt::from(1u8),
            hex_length: None,
        }
    }

    /// Parses a hex string, remembering its width (rounded up to even).
    ///
    /// Both hex cases are accepted; output is always lowercase.
    ///
    /// # Errors
    ///
    /// [`AuthError::IllegalParameter`] if `hex` is empty or contains a
    /// non-hex character.
    pub fn from_hex(hex: &str) -> Result<Self, AuthError> {
        let value = BigInt::parse_bytes(hex.as_bytes(), 16)
            .ok_or(AuthError::IllegalParameter { name: "hex" })?;
        if value.sign() == Sign::Minus {
            // parse_bytes accepts a leading '-'
            return Err(AuthError::IllegalParameter { name: "hex" });
        }
        Ok(Self {
            value,
            hex_length: Some(hex.len() + hex.len() % 2),
        })
    }

    /// Parses a decimal string. The result has no imposed width.
    ///
    /// # Errors
    ///
    /// [`AuthError::IllegalParameter`] if `decimal` is not a nonnegative
    /// base-10 integer.
    pub fn from_decimal(decimal: &str) -> Result<Self, AuthError> {
        let value = BigInt::parse_bytes(decimal.as_bytes(), 10)
            .ok_or(AuthError::IllegalParameter { name: "decimal" })?;
        if value.sign() == Sign::Minus {
            return Err(AuthError::IllegalParameter { name: "decimal" });
        }
        Ok(Self {
            value,
            hex_length: None,
        })
    }

    /// Interprets big-endian bytes as a nonnegative integer of width
    /// `2 * bytes.len()`.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Self {
            value: BigInt::from_bytes_be(Sign::Plus, bytes),
            hex_length: Some(2 * bytes.len()),
        }
    }

    /// Samples `bytes` uniform octets from `rng`, yielding an integer of
    /// width `2 * bytes`.
    pub fn random<R: RngCore + CryptoRng>(bytes: usize, rng: &mut R) -> Self {
        let mut buf = vec![0u8; bytes];
        rng.fill_bytes(&mut buf);
        Self::from_bytes_be(&buf)
    }

    /// Same value, forced width.
    pub fn pad(&self, hex_length: usize) -> Self {
        Self {
            value: self.value.clone(),
            hex_length: Some(hex_length),
        }
    }

    /// The carried hex width, if one was imposed.
    pub fn hex_length(&self) -> Option<usize> {
        self.hex_length
    }

    /// Whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.value.sign() == Sign::NoSign
    }

    /// `self + rhs`; width is the max of the operand widths.
    pub fn add(&self, rhs: &Self) -> Self {
        Self {
            value: &self.value + &rhs.value,
            hex_length: combined_width(self.hex_length, rhs.hex_length),
        }
    }

    /// `self - rhs`; width is the max of the operand widths.
    ///
    /// The result may be transiently negative (`B - k·g^x` can be); it must
    /// be passed through [`Self::modulo`] before serialization.
    pub fn sub(&self, rhs: &Self) -> Self {
        Self {
            value: &self.value - &rhs.value,
            hex_length: combined_width(self.hex_length, rhs.hex_length),
        }
    }

    /// `self * rhs`; width is the max of the operand widths.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self {
            value: &self.value * &rhs.value,
            hex_length: combined_width(self.hex_length, rhs.hex_length),
        }
    }

    /// `self mod modulus`, normalized into `[0, modulus)`.
    ///
    /// The result inherits the width of `modulus`.
    ///
    /// # Errors
    ///
    /// [`AuthError::IllegalParameter`] unless `modulus` is positive.
    pub fn modulo(&self, modulus: &Self) -> Result<Self, AuthError> {
        if modulus.value.sign() != Sign::Plus {
            return Err(AuthError::IllegalParameter { name: "modulus" });
        }
        let mut r = &self.value % &modulus.value;
        if r.sign() == Sign::Minus {
            r += &modulus.value;
        }
        Ok(Self {
            value: r,
            hex_length: modulus.hex_length,
        })
    }

    /// `self ^ exponent mod modulus`.
    ///
    /// The result inherits the width of `modulus`.
    ///
    /// # Errors
    ///
    /// [`AuthError::IllegalParameter`] unless `modulus` is positive and
    /// `exponent` nonnegative.
    pub fn mod_pow(&self, exponent: &Self, modulus: &Self) -> Result<Self, AuthError> {
        if exponent.value.sign() == Sign::Minus {
            return Err(AuthError::IllegalParameter { name: "exponent" });
        }
        let base = self.modulo(modulus)?;
        Ok(Self {
            value: base.value.modpow(&exponent.value, &modulus.value),
            hex_length: modulus.hex_length,
        })
    }

    /// Lowercase hex, left-zero-padded to the carried width.
    ///
    /// A value without an imposed width, or one that outgrew it, emits its
    /// minimal even width instead; the width is never allowed to truncate.
    pub fn to_hex(&self) -> String {
        debug_assert!(self.value.sign() != Sign::Minus, "serializing a negative");
        let digits = self.value.to_str_radix(16);
        let minimal = digits.len() + digits.len() % 2;
        let width = match self.hex_length {
            Some(w) if w >= digits.len() => w,
            _ => minimal,
        };
        let mut out = String::with_capacity(width);
        for _ in digits.len()..width {
            out.push('0');
        }
        out.push_str(&digits);
        out
    }

    /// Big-endian bytes, `ceil(width / 2)` of them.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        debug_assert!(self.value.sign() != Sign::Minus, "serializing a negative");
        let (_, bytes) = self.value.to_bytes_be();
        let target = match self.hex_length {
            Some(w) => ((w + 1) / 2).max(bytes.len()),
            None => bytes.len(),
        };
        let mut out = vec![0u8; target - bytes.len()];
        out.extend_from_slice(&bytes);
        out
    }
}

/// Value equality, width-independent. Runs in time dependent only on the
/// wider operand's length, not on where the values differ.
impl PartialEq for SrpInteger {
    fn eq(&self, other: &Self) -> bool {
        let (_, a) = self.value.to_bytes_be();
        let (_, b) = other.value.to_bytes_be();
        let len = a.len().max(b.len());
        let mut a_buf = vec![0u8; len - a.len()];
        a_buf.extend_from_slice(&a);
        let mut b_buf = vec![0u8; len - b.len()];
        b_buf.extend_from_slice(&b);
        a_buf.ct_eq(&b_buf).into()
    }
}

impl Eq for SrpInteger {}

/// Value ordering, width-independent. Variable-time; meant for structural
/// validation of public values, not for comparing secrets.
impl PartialOrd for SrpInteger {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SrpInteger {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

/// Truncated preview so ephemeral secrets never land in logs verbatim.
impl fmt::Debug for SrpInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.value.to_str_radix(16);
        if digits.len() > 16 {
            write!(f, "SrpInteger(0x{}..., {} digits)", &digits[..16], digits.len())
        } else {
            write!(f, "SrpInteger(0x{digits})")
        }
    }
}
