//! Computations shared by both endpoints.
//!
//! `u`, `M1` and `M2` must be assembled from byte-identical layouts on the
//! client and the server or the proofs can never match; both state machines
//! call through here.

use crate::errors::AuthError;
use crate::hash::HashInput;
use crate::integer::SrpInteger;
use crate::params::SrpParameters;

pub(crate) fn parse_hex(value: &str, name: &'static str) -> Result<SrpInteger, AuthError> {
    SrpInteger::from_hex(value).map_err(|_| AuthError::IllegalParameter { name })
}

/// u = H(PAD(A) | PAD(B))
///
/// # Errors
///
/// [`AuthError::IllegalParameter`] if the digest comes out zero, which
/// would collapse the premaster secret.
pub fn compute_u(
    params: &SrpParameters,
    a_pub: &SrpInteger,
    b_pub: &SrpInteger,
) -> Result<SrpInteger, AuthError> {
    let u = params.hash().compute(&[
        HashInput::Int(&params.pad(a_pub)),
        HashInput::Int(&params.pad(b_pub)),
    ])?;
    if u.is_zero() {
        return Err(AuthError::IllegalParameter { name: "u" });
    }
    Ok(u)
}

// H(N) XOR H(g); g is hashed at its own width here, unlike the padded g
// inside k.
fn hash_n_xor_hash_g(params: &SrpParameters) -> Vec<u8> {
    let h_n = params.hash().digest_bytes(&params.n().to_bytes_be());
    let h_g = params.hash().digest_bytes(&params.g().to_bytes_be());
    h_n.iter().zip(h_g.iter()).map(|(n, g)| n ^ g).collect()
}

/// M1 = H(H(N) XOR H(g) | H(I) | s | PAD(A) | PAD(B) | K)
///
/// # Errors
///
/// Propagates hash-input failures; none occur for already-parsed values.
pub fn compute_m1(
    params: &SrpParameters,
    identity: &str,
    salt: &SrpInteger,
    a_pub: &SrpInteger,
    b_pub: &SrpInteger,
    key: &SrpInteger,
) -> Result<SrpInteger, AuthError> {
    let xor = hash_n_xor_hash_g(params);
    let identity_hash = params
        .hash()
        .compute(&[HashInput::Bytes(identity.as_bytes())])?;
    params.hash().compute(&[
        HashInput::Bytes(&xor),
        HashInput::Int(&identity_hash),
        HashInput::Int(salt),
        HashInput::Int(&params.pad(a_pub)),
        HashInput::Int(&params.pad(b_pub)),
        HashInput::Int(key),
    ])
}

/// M2 = H(PAD(A) | M1 | K)
///
/// # Errors
///
/// Propagates hash-input failures; none occur for already-parsed values.
pub fn compute_m2(
    params: &SrpParameters,
    a_pub: &SrpInteger,
    m1: &SrpInteger,
    key: &SrpInteger,
) -> Result<SrpInteger, AuthError> {
    params.hash().compute(&[
        HashInput::Int(&params.pad(a_pub)),
        HashInput::Int(m1),
        HashInput::Int(key),
    ])
}
