//! SRP server implementation.
//!
//! # Usage
//! First receive the username and the client public ephemeral `A`, look the
//! stored `(salt, verifier)` pair up for that username, and generate the
//! server ephemeral:
//!
//! ```ignore
//! use srp6a::params::SrpParameters;
//! use srp6a::server::SrpServer;
//!
//! let params = SrpParameters::default();
//! let server = SrpServer::new(&params);
//!
//! let (username, a_pub) = conn.receive_handshake();
//! let (salt, verifier) = db.lookup(&username);
//! let ephemeral = server.generate_ephemeral(&verifier)?;
//! conn.reply_to_handshake(&salt, &ephemeral.public);
//! ```
//!
//! Then receive the client proof, verify it and derive the session in one
//! step; a wrong password surfaces as `BadRecordMac` here and neither the
//! session key nor `M2` is produced:
//!
//! ```ignore
//! let client_proof = conn.receive_proof();
//! let session = server.derive_session(
//!     &ephemeral.secret, &a_pub, &salt, &username, &verifier, &client_proof,
//! )?;
//! conn.send_proof(&session.proof);
//! // session.key now equals the client's
//! ```

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::errors::AuthError;
use crate::hash::HashInput;
use crate::integer::SrpInteger;
use crate::params::SrpParameters;
use crate::types::{SrpEphemeral, SrpSession};
use crate::utils::{compute_m1, compute_m2, compute_u, parse_hex};

/// Server endpoint. Stateless and reentrant: one instance can serve any
/// number of concurrent sessions by shared reference.
pub struct SrpServer<'a> {
    params: &'a SrpParameters,
}

impl<'a> SrpServer<'a> {
    /// Create new server state.
    #[must_use]
    pub const fn new(params: &'a SrpParameters) -> Self {
        Self { params }
    }

    /// Generates an ephemeral pair `(b, B = (k·v + g^b) mod N)` for one
    /// authentication attempt, resampling while `B mod N == 0`.
    ///
    /// # Errors
    ///
    /// [`AuthError::IllegalParameter`] if `verifier` is not valid hex.
    pub fn generate_ephemeral(&self, verifier: &str) -> Result<SrpEphemeral, AuthError> {
        self.generate_ephemeral_with_rng(verifier, &mut OsRng)
    }

    /// Like [`Self::generate_ephemeral`] with a caller-supplied RNG.
    ///
    /// # Errors
    ///
    /// As for [`Self::generate_ephemeral`].
    pub fn generate_ephemeral_with_rng<R: RngCore + CryptoRng>(
        &self,
        verifier: &str,
        rng: &mut R,
    ) -> Result<SrpEphemeral, AuthError> {
        let v = parse_hex(verifier, "verifier")?;
        loop {
            let b = SrpInteger::random(self.params.hash_size_bytes(), rng);
            let b_pub = self.compute_b_pub(&b, &v)?;
            if !b_pub.is_zero() {
                return Ok(SrpEphemeral {
                    public: b_pub.to_hex(),
                    secret: b.to_hex(),
                });
            }
        }
    }

    //  B = (k*v + g^b) mod N
    fn compute_b_pub(&self, b: &SrpInteger, v: &SrpInteger) -> Result<SrpInteger, AuthError> {
        let n = self.params.n();
        let k_v = self.params.k().mul(v);
        let g_b = self.params.g().mod_pow(b, n)?;
        k_v.add(&g_b).modulo(n)
    }

    /// Verifies the client proof `M1` and derives the session key `K` and
    /// the server proof `M2`.
    ///
    /// `B` is recomputed from `(b, v)`, so the server does not have to
    /// persist it between rounds. On a proof mismatch neither `K` nor `M2`
    /// leaves this function.
    ///
    /// # Errors
    ///
    /// [`AuthError::IllegalParameter`] if any input is malformed, if
    /// `A mod N == 0`, or if the scrambling parameter `u` comes out zero;
    /// [`AuthError::BadRecordMac`] with peer `"client"` if `M1` does not
    /// match (the client used the wrong password or the exchange was
    /// tampered with).
    pub fn derive_session(
        &self,
        server_secret_ephemeral: &str,
        client_public_ephemeral: &str,
        salt: &str,
        username: &str,
        verifier: &str,
        client_session_proof: &str,
    ) -> Result<SrpSession, AuthError> {
        let n = self.params.n();
        let b = parse_hex(server_secret_ephemeral, "b")?;
        let a_pub = parse_hex(client_public_ephemeral, "a_pub")?;
        let s = parse_hex(salt, "salt")?;
        let v = parse_hex(verifier, "verifier")?;
        let m1 = parse_hex(client_session_proof, "client_proof")?;

        // Safeguard against malicious A
        if a_pub.modulo(n)?.is_zero() {
            return Err(AuthError::IllegalParameter { name: "a_pub" });
        }

        let b_pub = self.compute_b_pub(&b, &v)?;
        let u = compute_u(self.params, &a_pub, &b_pub)?;

        // S = (A * v^u) ^ b mod N
        let premaster = a_pub
            .mul(&v.mod_pow(&u, n)?)
            .modulo(n)?
            .mod_pow(&b, n)?;

        // K = H(PAD(S))
        let key = self
            .params
            .hash()
            .compute(&[HashInput::Int(&premaster)])?;

        let expected_m1 = compute_m1(self.params, username, &s, &a_pub, &b_pub, &key)?;
        if expected_m1 != m1 {
            return Err(AuthError::BadRecordMac { peer: "client" });
        }

        let m2 = compute_m2(self.params, &a_pub, &expected_m1, &key)?;
        Ok(SrpSession {
            key: key.to_hex(),
            proof: m2.to_hex(),
        })
    }
}
