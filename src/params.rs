//! Negotiated protocol parameters.
//!
//! [`SrpParameters`] is the immutable context both endpoints agree on before
//! any exchange: the group `(N, g)`, the hash selection, and the derived
//! multiplier `k = H(N | PAD(g))`. A parameter set is fully described by the
//! `N` and `g` hex strings plus the hash algorithm name, so any two
//! deployments constructing from the same description interoperate.

use core::fmt;

use crate::errors::AuthError;
use crate::groups::G_2048;
use crate::hash::{HashAlgorithm, HashInput, SrpHash};
use crate::integer::SrpInteger;
use crate::types::SrpGroup;

/// Immutable `(N, g, k, H)` context shared by both endpoints.
///
/// Holds no mutable state; a single instance can back any number of
/// concurrent authentication sessions by shared reference.
#[derive(Debug, Clone)]
pub struct SrpParameters {
    group: SrpGroup,
    k: SrpInteger,
    hash: SrpHash,
}

impl SrpParameters {
    /// Pairs a group with a hash algorithm and derives `k`.
    ///
    /// # Errors
    ///
    /// [`AuthError::Configuration`] if the derived multiplier is zero
    /// (which no usable group produces).
    pub fn new(group: &SrpGroup, algorithm: HashAlgorithm) -> Result<Self, AuthError> {
        let hash = SrpHash::new(algorithm);
        let padded_length = group.n.hex_length().unwrap_or(0);
        // k = H(N | PAD(g))
        let g_padded = group.g.pad(padded_length);
        let k = hash
            .compute(&[HashInput::Int(&group.n), HashInput::Int(&g_padded)])?
            .modulo(&group.n)?;
        if k.is_zero() {
            return Err(AuthError::Configuration {
                reason: "derived multiplier k is zero",
            });
        }
        Ok(Self {
            group: group.clone(),
            k,
            hash,
        })
    }

    /// Builds parameters from explicit `N` and `g` hex strings.
    ///
    /// # Errors
    ///
    /// [`AuthError::Configuration`] as for [`SrpGroup::from_hex`].
    pub fn from_hex(n: &str, g: &str, algorithm: HashAlgorithm) -> Result<Self, AuthError> {
        Self::new(&SrpGroup::from_hex(n, g)?, algorithm)
    }

    /// Like [`Self::from_hex`], resolving the hash by name (`"SHA-256"`,
    /// `"sha512"`, ...).
    ///
    /// # Errors
    ///
    /// [`AuthError::Configuration`] on an unknown algorithm name or a bad
    /// group.
    pub fn from_hex_with_name(n: &str, g: &str, algorithm: &str) -> Result<Self, AuthError> {
        Self::from_hex(n, g, HashAlgorithm::from_name(algorithm)?)
    }

    /// The group modulus `N`.
    pub fn n(&self) -> &SrpInteger {
        &self.group.n
    }

    /// The generator `g`.
    pub fn g(&self) -> &SrpInteger {
        &self.group.g
    }

    /// The multiplier `k = H(N | PAD(g)) mod N`.
    pub fn k(&self) -> &SrpInteger {
        &self.k
    }

    /// The bound hash adapter.
    pub fn hash(&self) -> &SrpHash {
        &self.hash
    }

    /// Hex width of `N`; the wire width of `v`, `A` and `B`.
    pub fn padded_length(&self) -> usize {
        self.group.n.hex_length().unwrap_or(0)
    }

    /// Digest length of the selected hash, in bytes.
    pub fn hash_size_bytes(&self) -> usize {
        self.hash.output_size()
    }

    /// `x` at the group's padded width, ready for `PAD(·)` concatenation.
    pub fn pad(&self, x: &SrpInteger) -> SrpInteger {
        x.pad(self.padded_length())
    }
}

/// RFC 5054 2048-bit group with SHA-256.
impl Default for SrpParameters {
    fn default() -> Self {
        Self::new(&G_2048, HashAlgorithm::Sha256).expect("default parameters are well-formed")
    }
}

impl fmt::Display for SrpParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SrpParameters(N={} bits, g=0x{}, hash={})",
            self.group.modulus_bits(),
            self.group.g.to_hex(),
            self.hash.algorithm().name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::G_1024;

    #[test]
    fn k_matches_rfc5054_vector() {
        // RFC 5054 appendix B, 1024-bit group with SHA-1
        let params = SrpParameters::new(&G_1024, HashAlgorithm::Sha1).unwrap();
        let expected =
            SrpInteger::from_hex("7556aa045aef2cdd07abaf0f665c3e818913186f").unwrap();
        assert_eq!(*params.k(), expected);
    }

    #[test]
    fn derived_values_are_pure() {
        let a = SrpParameters::new(&G_2048, HashAlgorithm::Sha256).unwrap();
        let b = SrpParameters::new(&G_2048, HashAlgorithm::Sha256).unwrap();
        assert_eq!(a.k(), b.k());
        assert_eq!(a.padded_length(), b.padded_length());
        assert_eq!(a.hash_size_bytes(), b.hash_size_bytes());
    }

    #[test]
    fn default_is_2048_sha256() {
        let params = SrpParameters::default();
        assert_eq!(params.padded_length(), 512);
        assert_eq!(params.hash_size_bytes(), 32);
        assert_eq!(params.hash().algorithm(), HashAlgorithm::Sha256);
    }

    #[test]
    fn widths_follow_the_group() {
        for (group, bits) in [(&G_1024, 1024), (&G_2048, 2048)] {
            let params = SrpParameters::new(group, HashAlgorithm::Sha512).unwrap();
            assert_eq!(params.padded_length(), bits / 4);
            assert_eq!(params.hash_size_bytes(), 64);
        }
    }

    #[test]
    fn construction_by_name() {
        // even modulus rejected before the hash is ever consulted
        let err = SrpParameters::from_hex_with_name("18", "05", "SHA-1").unwrap_err();
        assert!(matches!(err, AuthError::Configuration { .. }));

        let params = SrpParameters::from_hex_with_name("17", "05", "SHA-1").unwrap();
        assert_eq!(params.hash_size_bytes(), 20);

        assert!(SrpParameters::from_hex_with_name("17", "05", "whirlpool").is_err());
    }

    #[test]
    fn display_names_the_selection() {
        let shown = SrpParameters::default().to_string();
        assert!(shown.contains("2048 bits"));
        assert!(shown.contains("SHA-256"));
    }
}
