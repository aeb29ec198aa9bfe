//! Gate rejection reasons.

use std::error::Error;
use std::fmt;

use crate::machine::ElfMachine;

/// Why the [`ArchitectureGate`](crate::ArchitectureGate) refused a code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateError {
    /// The code is not in the machine table at all.
    Unknown {
        /// The raw code as presented.
        code: i32,
    },
    /// The code names a known machine this process cannot run.
    Unsupported {
        /// The recognised machine.
        machine: ElfMachine,
    },
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { code } => write!(f, "unknown machine code {code}"),
            Self::Unsupported { machine } => {
                write!(f, "machine {machine} is not supported by this process")
            }
        }
    }
}

impl Error for GateError {}
