//! The architecture admission gate.

use crate::error::GateError;
use crate::machine::{ElfMachine, HOST_MACHINE};

/// Fixed set of machines a process accepts modules for.
///
/// Stored as a bitmask over [`ElfMachine`] table positions, so every query
/// is O(1). [`ElfMachine::None`] can never be admitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArchitectureGate {
    supported: u64,
}

impl ArchitectureGate {
    /// A gate that admits nothing.
    pub const fn empty() -> Self {
        Self { supported: 0 }
    }

    /// A gate admitting exactly the machine this process was built for.
    ///
    /// Admits nothing on targets missing from the machine table.
    pub const fn host() -> Self {
        match HOST_MACHINE {
            Some(machine) => Self::empty().with(machine),
            None => Self::empty(),
        }
    }

    /// A gate admitting the given machines.
    pub fn with_supported(machines: &[ElfMachine]) -> Self {
        machines
            .iter()
            .fold(Self::empty(), |gate, &machine| gate.with(machine))
    }

    /// This gate plus `machine`. Adding [`ElfMachine::None`] is ignored.
    pub const fn with(self, machine: ElfMachine) -> Self {
        if matches!(machine, ElfMachine::None) {
            return self;
        }
        Self {
            supported: self.supported | (1 << machine.ordinal()),
        }
    }

    /// Whether a module declaring raw code `code` may be admitted.
    ///
    /// Codes outside the `u16` range, codes missing from the table, and
    /// `EM_NONE` are all unsupported.
    pub fn is_supported(&self, code: i32) -> bool {
        self.check(code).is_ok()
    }

    /// Whether `machine` is in the supported set.
    pub const fn supports(&self, machine: ElfMachine) -> bool {
        self.supported & (1 << machine.ordinal()) != 0
    }

    /// Resolve `code` to a supported machine, or say why not.
    pub fn check(&self, code: i32) -> Result<ElfMachine, GateError> {
        let machine = u16::try_from(code)
            .ok()
            .and_then(ElfMachine::from_code)
            .ok_or(GateError::Unknown { code })?;
        if self.supports(machine) {
            Ok(machine)
        } else {
            Err(GateError::Unsupported { machine })
        }
    }

    /// Supported machines in table order.
    pub fn supported(&self) -> impl Iterator<Item = ElfMachine> + '_ {
        ElfMachine::ALL
            .iter()
            .copied()
            .filter(move |&machine| self.supports(machine))
    }
}

impl Default for ArchitectureGate {
    fn default() -> Self {
        Self::host()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gate_rejects_everything() {
        let gate = ArchitectureGate::empty();
        for &m in ElfMachine::ALL {
            assert!(!gate.is_supported(m.code() as i32));
        }
    }

    #[test]
    fn explicit_set_is_honoured() {
        let gate = ArchitectureGate::with_supported(&[ElfMachine::Arm, ElfMachine::Aarch64]);
        assert!(gate.is_supported(40));
        assert!(gate.is_supported(183));
        assert!(!gate.is_supported(62));
        let listed: Vec<_> = gate.supported().collect();
        assert_eq!(listed, vec![ElfMachine::Arm, ElfMachine::Aarch64]);
    }

    #[test]
    fn zero_and_negative_codes_are_unsupported() {
        let gate = ArchitectureGate::with_supported(ElfMachine::ALL);
        assert!(!gate.is_supported(0));
        assert!(!gate.is_supported(-1));
        assert!(!gate.is_supported(i32::MIN));
        assert!(!gate.is_supported(0x1_0000));
    }

    #[test]
    fn none_is_never_admitted() {
        let gate = ArchitectureGate::empty().with(ElfMachine::None);
        assert_eq!(gate, ArchitectureGate::empty());
        assert!(!gate.supports(ElfMachine::None));
    }

    #[test]
    fn check_distinguishes_unknown_from_unsupported() {
        let gate = ArchitectureGate::with_supported(&[ElfMachine::X86_64]);
        assert_eq!(gate.check(62), Ok(ElfMachine::X86_64));
        assert_eq!(gate.check(9), Err(GateError::Unknown { code: 9 }));
        assert_eq!(
            gate.check(40),
            Err(GateError::Unsupported {
                machine: ElfMachine::Arm
            })
        );
    }

    #[test]
    fn host_gate_admits_host_machine_only() {
        let gate = ArchitectureGate::host();
        match HOST_MACHINE {
            Some(host) => {
                assert!(gate.supports(host));
                assert_eq!(gate.supported().count(), 1);
            }
            None => assert_eq!(gate, ArchitectureGate::empty()),
        }
        assert_eq!(ArchitectureGate::default(), gate);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            GateError::Unknown { code: -3 }.to_string(),
            "unknown machine code -3"
        );
        assert_eq!(
            GateError::Unsupported {
                machine: ElfMachine::Sparc
            }
            .to_string(),
            "machine EM_SPARC (2) is not supported by this process"
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn lookup_is_pure(code in any::<i32>()) {
                let gate = ArchitectureGate::host();
                prop_assert_eq!(gate.is_supported(code), gate.is_supported(code));
            }

            #[test]
            fn only_enumerated_codes_pass(code in any::<i32>()) {
                let gate = ArchitectureGate::with_supported(ElfMachine::ALL);
                let known = u16::try_from(code)
                    .ok()
                    .and_then(ElfMachine::from_code)
                    .is_some();
                prop_assert_eq!(gate.is_supported(code), known && code != 0);
            }
        }
    }
}
