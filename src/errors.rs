//! Error types.

use core::{error, fmt};

/// SRP authentication error.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum AuthError {
    /// A received value is unusable: malformed hex, a public ephemeral that
    /// is zero modulo `N`, or a zero scrambling parameter `u`.
    IllegalParameter {
        /// Parameter name
        name: &'static str,
    },
    /// A session proof did not match the expected value.
    BadRecordMac {
        /// Which peer's proof is invalid (`"client"` for `M1`, `"server"`
        /// for `M2`)
        peer: &'static str,
    },
    /// The group or hash selection is invalid. Raised at parameter
    /// construction, never mid-protocol.
    Configuration {
        /// What is wrong with the selection
        reason: &'static str,
    },
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalParameter { name } => {
                write!(f, "illegal_parameter: bad '{name}' value")
            }
            Self::BadRecordMac { peer } => {
                write!(f, "bad_record_mac: incorrect '{peer}' proof")
            }
            Self::Configuration { reason } => {
                write!(f, "configuration: {reason}")
            }
        }
    }
}

impl error::Error for AuthError {}
