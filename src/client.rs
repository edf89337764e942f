//! SRP client implementation.
//!
//! # Usage
//! First create the client over shared parameters (the defaults are the
//! RFC 5054 2048-bit group with SHA-256):
//!
//! ```ignore
//! use srp6a::client::SrpClient;
//! use srp6a::params::SrpParameters;
//!
//! let params = SrpParameters::default();
//! let client = SrpClient::new(&params);
//! ```
//!
//! Enrollment happens once, over a protected channel: generate a salt,
//! derive the private key `x` from the credentials and send the verifier
//! (never `x` itself) to the server together with the salt and username:
//!
//! ```ignore
//! let salt = client.generate_salt();
//! let private_key = client.derive_private_key(&salt, username, password)?;
//! let verifier = client.derive_verifier(&private_key)?;
//! conn.send_registration(username, &salt, &verifier);
//! ```
//!
//! On login, exchange public ephemerals and derive the session:
//!
//! ```ignore
//! let ephemeral = client.generate_ephemeral()?;
//! let (salt, b_pub) = conn.send_handshake(username, &ephemeral.public);
//! let private_key = client.derive_private_key(&salt, username, password)?;
//! let session = client.derive_session(
//!     &ephemeral.secret, &b_pub, &salt, username, &private_key,
//! )?;
//! conn.send_proof(&session.proof);
//! ```
//!
//! Finally verify the server's proof from the reply; on success both sides
//! hold the same `session.key`:
//!
//! ```ignore
//! let server_proof = conn.receive_proof();
//! client.verify_session(&ephemeral.public, &session, &server_proof)?;
//! ```

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::errors::AuthError;
use crate::hash::HashInput;
use crate::integer::SrpInteger;
use crate::params::SrpParameters;
use crate::types::{SrpEphemeral, SrpSession};
use crate::utils::{compute_m1, compute_m2, compute_u, parse_hex};

/// Client endpoint. Stateless: holds only the shared parameters, every
/// method consumes explicit inputs and returns new values.
pub struct SrpClient<'a> {
    params: &'a SrpParameters,
}

impl<'a> SrpClient<'a> {
    /// Create new SRP client instance.
    #[must_use]
    pub const fn new(params: &'a SrpParameters) -> Self {
        Self { params }
    }

    /// Generates a random salt of `HashSizeBytes` octets from the platform
    /// CSPRNG.
    #[must_use]
    pub fn generate_salt(&self) -> String {
        self.generate_salt_with_rng(&mut OsRng)
    }

    /// Like [`Self::generate_salt`] with a caller-supplied RNG.
    pub fn generate_salt_with_rng<R: RngCore + CryptoRng>(&self, rng: &mut R) -> String {
        SrpInteger::random(self.params.hash_size_bytes(), rng).to_hex()
    }

    /// Derives the private key `x = H(s | H(I | ":" | P))`.
    ///
    /// `username` and `password` are hashed as raw UTF-8; no normalization
    /// or case folding is applied.
    ///
    /// # Errors
    ///
    /// [`AuthError::IllegalParameter`] if `salt` is not valid hex.
    pub fn derive_private_key(
        &self,
        salt: &str,
        username: &str,
        password: &str,
    ) -> Result<String, AuthError> {
        let s = parse_hex(salt, "salt")?;
        let identity_hash = self.params.hash().compute(&[
            HashInput::Bytes(username.as_bytes()),
            HashInput::Bytes(b":"),
            HashInput::Bytes(password.as_bytes()),
        ])?;
        let x = self
            .params
            .hash()
            .compute(&[HashInput::Int(&s), HashInput::Int(&identity_hash)])?;
        Ok(x.to_hex())
    }

    /// Derives the password verifier `v = g^x mod N` for enrollment.
    ///
    /// # Errors
    ///
    /// [`AuthError::IllegalParameter`] if `private_key` is not valid hex.
    pub fn derive_verifier(&self, private_key: &str) -> Result<String, AuthError> {
        let x = parse_hex(private_key, "private_key")?;
        let v = self.params.g().mod_pow(&x, self.params.n())?;
        Ok(v.to_hex())
    }

    /// Generates an ephemeral pair `(a, A = g^a mod N)`, resampling in the
    /// (astronomically unlikely) case `A mod N == 0`.
    ///
    /// # Errors
    ///
    /// Propagates arithmetic failures; none occur for well-formed
    /// parameters.
    pub fn generate_ephemeral(&self) -> Result<SrpEphemeral, AuthError> {
        self.generate_ephemeral_with_rng(&mut OsRng)
    }

    /// Like [`Self::generate_ephemeral`] with a caller-supplied RNG.
    ///
    /// # Errors
    ///
    /// As for [`Self::generate_ephemeral`].
    pub fn generate_ephemeral_with_rng<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<SrpEphemeral, AuthError> {
        loop {
            let a = SrpInteger::random(self.params.hash_size_bytes(), rng);
            let a_pub = self.params.g().mod_pow(&a, self.params.n())?;
            if !a_pub.is_zero() {
                return Ok(SrpEphemeral {
                    public: a_pub.to_hex(),
                    secret: a.to_hex(),
                });
            }
        }
    }

    /// Recomputes `A = g^a mod N` from a stored secret ephemeral, so a
    /// caller only has to persist `a` between protocol rounds.
    ///
    /// # Errors
    ///
    /// [`AuthError::IllegalParameter`] if `secret_ephemeral` is not valid
    /// hex.
    pub fn compute_public_ephemeral(&self, secret_ephemeral: &str) -> Result<String, AuthError> {
        let a = parse_hex(secret_ephemeral, "a")?;
        let a_pub = self.params.g().mod_pow(&a, self.params.n())?;
        Ok(a_pub.to_hex())
    }

    /// Derives the session key `K` and the client proof `M1` from the
    /// server's handshake reply.
    ///
    /// # Errors
    ///
    /// [`AuthError::IllegalParameter`] if any input is malformed, if
    /// `B mod N == 0`, or if the scrambling parameter `u` comes out zero.
    pub fn derive_session(
        &self,
        client_secret_ephemeral: &str,
        server_public_ephemeral: &str,
        salt: &str,
        username: &str,
        private_key: &str,
    ) -> Result<SrpSession, AuthError> {
        let n = self.params.n();
        let a = parse_hex(client_secret_ephemeral, "a")?;
        let b_pub = parse_hex(server_public_ephemeral, "b_pub")?;
        let s = parse_hex(salt, "salt")?;
        let x = parse_hex(private_key, "private_key")?;

        // Safeguard against malicious B
        if b_pub.modulo(n)?.is_zero() {
            return Err(AuthError::IllegalParameter { name: "b_pub" });
        }

        let a_pub = self.params.g().mod_pow(&a, n)?;
        let u = compute_u(self.params, &a_pub, &b_pub)?;

        // S = (B - k * g^x) ^ (a + u * x) mod N; the subtraction can dip
        // below zero, mod_pow renormalizes the base into the group.
        let g_x = self.params.g().mod_pow(&x, n)?;
        let k_g_x = self.params.k().mul(&g_x).modulo(n)?;
        let base = b_pub.sub(&k_g_x);
        let exponent = a.add(&u.mul(&x));
        let premaster = base.mod_pow(&exponent, n)?;

        // K = H(PAD(S)); S carries the modulus width out of the reduction
        let key = self
            .params
            .hash()
            .compute(&[HashInput::Int(&premaster)])?;
        let proof = compute_m1(self.params, username, &s, &a_pub, &b_pub, &key)?;

        Ok(SrpSession {
            key: key.to_hex(),
            proof: proof.to_hex(),
        })
    }

    /// Checks the server proof `M2` against
    /// `H(PAD(A) | M1 | K)`. On mismatch the session key must be
    /// discarded.
    ///
    /// # Errors
    ///
    /// [`AuthError::BadRecordMac`] with peer `"server"` on mismatch,
    /// [`AuthError::IllegalParameter`] if any input is malformed.
    pub fn verify_session(
        &self,
        client_public_ephemeral: &str,
        session: &SrpSession,
        server_session_proof: &str,
    ) -> Result<(), AuthError> {
        let a_pub = parse_hex(client_public_ephemeral, "a_pub")?;
        let m1 = parse_hex(&session.proof, "session_proof")?;
        let key = parse_hex(&session.key, "session_key")?;
        let m2 = parse_hex(server_session_proof, "server_proof")?;

        let expected = compute_m2(self.params, &a_pub, &m1, &key)?;
        if expected == m2 {
            Ok(())
        } else {
            Err(AuthError::BadRecordMac { peer: "server" })
        }
    }
}
