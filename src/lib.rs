//! An implementation of the Secure Remote Password protocol, version 6a
//! (SRP-6a), as standardized in [RFC 5054](https://tools.ietf.org/html/rfc5054).
//!
//! SRP-6a is a password-authenticated key exchange: a client holding a
//! password and a server holding only a salted verifier mutually
//! authenticate and agree on a strong shared session key over an untrusted
//! channel, without the password (or anything password-equivalent) ever
//! crossing the wire and without a PKI.
//!
//! The crate is split into:
//! * a [`client`] module and a [`server`] module with the two endpoint
//!   state machines;
//! * a [`params`] module for the negotiated `(N, g, k, H)` context and a
//!   [`groups`] module with the seven RFC 5054 standard groups;
//! * an [`integer`] module with the fixed-width big integer all wire
//!   values are built from, and a [`hash`] module with the adapter that
//!   feeds mixed-typed values into the selected digest.
//!
//! All values that cross the wire are lowercase hex strings in the widths
//! fixed by the parameters: `A`, `B` and `v` at the hex width of `N`;
//! salts, session keys and proofs at twice the digest size. This crate does
//! not define a transport or storage format; moving the strings between the
//! endpoints is the caller's concern.
//!
//! # Usage
//!
//! ```
//! use srp6a::client::SrpClient;
//! use srp6a::params::SrpParameters;
//! use srp6a::server::SrpServer;
//!
//! # fn main() -> Result<(), srp6a::errors::AuthError> {
//! let params = SrpParameters::default();
//! let client = SrpClient::new(&params);
//! let server = SrpServer::new(&params);
//!
//! // Enrollment: the client registers a salt and a verifier, over a
//! // protected channel. The server stores them keyed by username.
//! let salt = client.generate_salt();
//! let private_key = client.derive_private_key(&salt, "alice", "password123")?;
//! let verifier = client.derive_verifier(&private_key)?;
//!
//! // Round 1: both sides generate ephemerals and swap the public halves.
//! let client_ephemeral = client.generate_ephemeral()?;
//! let server_ephemeral = server.generate_ephemeral(&verifier)?;
//!
//! // Round 2: the client derives the session and sends its proof.
//! let client_session = client.derive_session(
//!     &client_ephemeral.secret,
//!     &server_ephemeral.public,
//!     &salt,
//!     "alice",
//!     &private_key,
//! )?;
//!
//! // Round 3: the server checks the client proof and replies with its own.
//! let server_session = server.derive_session(
//!     &server_ephemeral.secret,
//!     &client_ephemeral.public,
//!     &salt,
//!     "alice",
//!     &verifier,
//!     &client_session.proof,
//! )?;
//! client.verify_session(
//!     &client_ephemeral.public,
//!     &client_session,
//!     &server_session.proof,
//! )?;
//!
//! assert_eq!(client_session.key, server_session.key);
//! # Ok(())
//! # }
//! ```
//!
//! # Security notes
//!
//! Proof and value comparisons go through [`subtle`]; the big-integer
//! arithmetic itself is not constant-time. Deployments needing side-channel
//! hardening should put this behind the same mitigations they apply to
//! their other `num-bigint` code. Prefer the RFC 5054 groups over custom
//! ones, and prefer a memory-hard KDF over the bare `x` derivation when the
//! deployment allows it (the RFC formula is provided for interop).

#![forbid(unsafe_code)]
#![warn(
    clippy::perf,
    clippy::correctness,
    clippy::style,
    clippy::missing_errors_doc,
    clippy::doc_markdown,
    missing_docs
)]

pub mod client;
pub mod errors;
pub mod groups;
pub mod hash;
pub mod integer;
pub mod params;
pub mod server;
pub mod types;
pub mod utils;
