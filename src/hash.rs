//! Hash adapter.
//!
//! SRP hashes concatenations of mixed-typed values (`H(N | PAD(g))`,
//! `H(PAD(A) | PAD(B))`, `H(H(N) XOR H(g) | H(I) | s | A | B | K)`), then
//! reads the digest back as an integer. [`SrpHash`] concentrates that
//! "serialize each argument, hash once, reinterpret" idiom so the byte
//! sequence fed to the digest is identical at every call site.

use digest::Digest;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};

use crate::errors::AuthError;
use crate::integer::SrpInteger;

/// Supported hash selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// SHA-1 (RFC 5054 test vectors)
    Sha1,
    /// SHA-256 (default)
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
    /// MD5, for interop with legacy deployments only
    Md5,
}

impl HashAlgorithm {
    /// Digest length in bytes.
    pub fn output_size(&self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
            Self::Md5 => 16,
        }
    }

    /// Canonical algorithm name. Diagnostic output only; never hashed.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
            Self::Md5 => "MD5",
        }
    }

    /// Looks an algorithm up by name, tolerating case and hyphenation
    /// (`"SHA-256"`, `"sha256"`, `"Sha256"` all resolve).
    ///
    /// # Errors
    ///
    /// [`AuthError::Configuration`] for an unknown name.
    pub fn from_name(name: &str) -> Result<Self, AuthError> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '-')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        match normalized.as_str() {
            "SHA1" => Ok(Self::Sha1),
            "SHA256" => Ok(Self::Sha256),
            "SHA384" => Ok(Self::Sha384),
            "SHA512" => Ok(Self::Sha512),
            "MD5" => Ok(Self::Md5),
            _ => Err(AuthError::Configuration {
                reason: "unknown hash algorithm name",
            }),
        }
    }
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        Self::Sha256
    }
}

/// One argument to [`SrpHash::compute`].
pub enum HashInput<'a> {
    /// An integer, contributing its padded big-endian bytes
    Int(&'a SrpInteger),
    /// A hex string, parsed (width included) and contributed as bytes
    Hex(&'a str),
    /// Raw bytes, contributed as-is (UTF-8 identities go through here)
    Bytes(&'a [u8]),
    /// Contributes nothing
    Empty,
}

/// Stateless adapter binding a [`HashAlgorithm`] to the protocol's
/// hash-to-integer idiom.
#[derive(Debug, Clone, Copy)]
pub struct SrpHash {
    algorithm: HashAlgorithm,
}

fn digest_inputs<D: Digest>(inputs: &[HashInput<'_>]) -> Result<Vec<u8>, AuthError> {
    let mut d = D::new();
    for input in inputs {
        match input {
            HashInput::Int(x) => d.update(x.to_bytes_be()),
            HashInput::Hex(h) => {
                if !h.is_empty() {
                    d.update(SrpInteger::from_hex(h)?.to_bytes_be());
                }
            }
            HashInput::Bytes(b) => d.update(b),
            HashInput::Empty => {}
        }
    }
    Ok(d.finalize().to_vec())
}

impl SrpHash {
    /// Binds the adapter to an algorithm.
    pub const fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    /// The bound algorithm.
    pub const fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Digest length in bytes.
    pub fn output_size(&self) -> usize {
        self.algorithm.output_size()
    }

    /// Serializes each input, feeds one digest, and reads the result as a
    /// big-endian integer of width `2 * output_size`.
    ///
    /// # Errors
    ///
    /// [`AuthError::IllegalParameter`] if a [`HashInput::Hex`] argument is
    /// malformed.
    pub fn compute(&self, inputs: &[HashInput<'_>]) -> Result<SrpInteger, AuthError> {
        let digest = match self.algorithm {
            HashAlgorithm::Sha1 => digest_inputs::<Sha1>(inputs)?,
            HashAlgorithm::Sha256 => digest_inputs::<Sha256>(inputs)?,
            HashAlgorithm::Sha384 => digest_inputs::<Sha384>(inputs)?,
            HashAlgorithm::Sha512 => digest_inputs::<Sha512>(inputs)?,
            HashAlgorithm::Md5 => digest_inputs::<Md5>(inputs)?,
        };
        Ok(SrpInteger::from_bytes_be(&digest))
    }

    /// Single-shot digest of raw bytes.
    pub fn digest_bytes(&self, data: &[u8]) -> Vec<u8> {
        match self.algorithm {
            HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
            HashAlgorithm::Md5 => Md5::digest(data).to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn known_digests() {
        let cases: [(HashAlgorithm, &[u8]); 5] = [
            (HashAlgorithm::Sha1, &hex!("a9993e364706816aba3e25717850c26c9cd0d89d")),
            (
                HashAlgorithm::Sha256,
                &hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
            ),
            (
                HashAlgorithm::Sha384,
                &hex!(
                    "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded163"
                    "1a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7"
                ),
            ),
            (
                HashAlgorithm::Sha512,
                &hex!(
                    "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
                    "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
                ),
            ),
            (HashAlgorithm::Md5, &hex!("900150983cd24fb0d6963f7d28e17f72")),
        ];
        for (algorithm, expected) in cases {
            let h = SrpHash::new(algorithm);
            let out = h.compute(&[HashInput::Bytes(b"abc")]).unwrap();
            assert_eq!(out.to_bytes_be(), expected, "{}", algorithm.name());
            assert_eq!(out.hex_length(), Some(2 * h.output_size()));
        }
    }

    #[test]
    fn padding_changes_the_digest() {
        let h = SrpHash::new(HashAlgorithm::Sha256);
        let x = SrpInteger::from_hex("ff").unwrap();
        let narrow = h.compute(&[HashInput::Int(&x)]).unwrap();
        let wide = h.compute(&[HashInput::Int(&x.pad(8))]).unwrap();
        assert_ne!(narrow, wide);
    }

    #[test]
    fn hex_width_is_significant() {
        let h = SrpHash::new(HashAlgorithm::Sha256);
        let narrow = h.compute(&[HashInput::Hex("ff")]).unwrap();
        let wide = h.compute(&[HashInput::Hex("00ff")]).unwrap();
        assert_ne!(narrow, wide);
    }

    #[test]
    fn empty_inputs_contribute_nothing() {
        let h = SrpHash::new(HashAlgorithm::Sha256);
        let plain = h.compute(&[HashInput::Bytes(b"abc")]).unwrap();
        let padded = h
            .compute(&[
                HashInput::Empty,
                HashInput::Bytes(b"abc"),
                HashInput::Hex(""),
            ])
            .unwrap();
        assert_eq!(plain, padded);
    }

    #[test]
    fn concatenation_matches_streaming() {
        let h = SrpHash::new(HashAlgorithm::Sha1);
        let split = h
            .compute(&[HashInput::Bytes(b"a"), HashInput::Bytes(b"bc")])
            .unwrap();
        let joined = h.compute(&[HashInput::Bytes(b"abc")]).unwrap();
        assert_eq!(split, joined);
    }

    #[test]
    fn name_lookup() {
        assert_eq!(HashAlgorithm::from_name("sha256").unwrap(), HashAlgorithm::Sha256);
        assert_eq!(HashAlgorithm::from_name("SHA-512").unwrap(), HashAlgorithm::Sha512);
        assert_eq!(HashAlgorithm::from_name("Sha-1").unwrap(), HashAlgorithm::Sha1);
        assert_eq!(HashAlgorithm::from_name("md5").unwrap(), HashAlgorithm::Md5);
        assert!(HashAlgorithm::from_name("whirlpool").is_err());
    }

    #[test]
    fn rejects_malformed_hex_input() {
        let h = SrpHash::new(HashAlgorithm::Sha256);
        assert!(h.compute(&[HashInput::Hex("not hex")]).is_err());
    }
}
