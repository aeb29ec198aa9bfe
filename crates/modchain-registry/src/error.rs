//! Admission errors.

use std::error::Error;
use std::fmt;

use modchain_arch::GateError;

/// Why a module was not admitted into the registry.
///
/// Both cases are ordinary outcomes: the loader abandons that one module
/// and carries on with the rest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdmitError {
    /// The architecture gate refused the module's machine code.
    Rejected {
        /// Module name.
        module: String,
        /// Gate verdict.
        reason: GateError,
    },
    /// This exact module record is already registered.
    AlreadyLoaded {
        /// Module name.
        module: String,
    },
}

impl fmt::Display for AdmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected { module, reason } => {
                write!(f, "module {module} not admitted: {reason}")
            }
            Self::AlreadyLoaded { module } => {
                write!(f, "module {module} is already loaded")
            }
        }
    }
}

impl Error for AdmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rejected { reason, .. } => Some(reason),
            Self::AlreadyLoaded { .. } => None,
        }
    }
}
