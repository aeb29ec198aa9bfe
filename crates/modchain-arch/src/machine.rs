//! The `e_machine` code table.

use std::fmt;

macro_rules! elf_machines {
    ($( $(#[$doc:meta])* $variant:ident = $code:literal => $name:literal, )*) => {
        /// Instruction-set architecture recorded in an ELF header's
        /// `e_machine` field.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum ElfMachine {
            $( $(#[$doc])* $variant = $code, )*
        }

        /// Dense position of each machine in the table, used as a bit index.
        #[repr(u8)]
        #[allow(dead_code)]
        enum Ordinal {
            $( $variant, )*
        }

        impl ElfMachine {
            /// Every recognised machine, in table order.
            pub const ALL: &'static [ElfMachine] = &[ $( ElfMachine::$variant, )* ];

            /// Look up a raw `e_machine` value.
            pub const fn from_code(code: u16) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$variant), )*
                    _ => None,
                }
            }

            /// Conventional `EM_*` name.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )*
                }
            }

            pub(crate) const fn ordinal(self) -> u32 {
                match self {
                    $( Self::$variant => Ordinal::$variant as u32, )*
                }
            }
        }
    };
}

elf_machines! {
    /// No machine.
    None = 0 => "EM_NONE",
    /// AT&T WE 32100.
    M32 = 1 => "EM_M32",
    /// SPARC.
    Sparc = 2 => "EM_SPARC",
    /// Intel 80386.
    I386 = 3 => "EM_386",
    /// Motorola 68000.
    M68k = 4 => "EM_68K",
    /// Motorola 88000.
    M88k = 5 => "EM_88K",
    /// Intel 80486.
    I486 = 6 => "EM_486",
    /// Intel 80860.
    I860 = 7 => "EM_860",
    /// MIPS R3000 big-endian.
    Mips = 8 => "EM_MIPS",
    /// MIPS R3000 little-endian; shares its code with `EM_MIPS_RS4_BE`.
    MipsRs3Le = 10 => "EM_MIPS_RS3_LE",
    /// HP PA-RISC.
    Parisc = 15 => "EM_PARISC",
    /// SPARC with enhanced instruction set.
    Sparc32Plus = 18 => "EM_SPARC32PLUS",
    /// PowerPC.
    Ppc = 20 => "EM_PPC",
    /// PowerPC 64-bit.
    Ppc64 = 21 => "EM_PPC64",
    /// IBM S/390.
    S390 = 22 => "EM_S390",
    /// ARM 32-bit.
    Arm = 40 => "EM_ARM",
    /// SuperH.
    Sh = 42 => "EM_SH",
    /// SPARC v9 64-bit.
    SparcV9 = 43 => "EM_SPARCV9",
    /// Renesas H8/300.
    H8300 = 46 => "EM_H8_300",
    /// Intel Itanium.
    Ia64 = 50 => "EM_IA_64",
    /// AMD x86-64.
    X86_64 = 62 => "EM_X86_64",
    /// Axis CRIS.
    Cris = 76 => "EM_CRIS",
    /// NEC V850.
    V850 = 87 => "EM_V850",
    /// Renesas M32R.
    M32r = 88 => "EM_M32R",
    /// ARM 64-bit.
    Aarch64 = 183 => "EM_AARCH64",
    /// RISC-V.
    RiscV = 243 => "EM_RISCV",
    /// Fujitsu FR-V.
    Frv = 0x5441 => "EM_FRV",
    /// DEC Alpha (unofficial code).
    Alpha = 0x9026 => "EM_ALPHA",
    /// Cygnus M32R (old code).
    CygnusM32r = 0x9041 => "EM_CYGNUS_M32R",
    /// Cygnus V850 (old code).
    CygnusV850 = 0x9080 => "EM_CYGNUS_V850",
    /// IBM S/390 (old code).
    S390Old = 0xA390 => "EM_S390_OLD",
}

impl ElfMachine {
    /// `EM_MIPS_RS4_BE` is numerically identical to `EM_MIPS_RS3_LE`.
    pub const MIPS_RS4_BE: ElfMachine = ElfMachine::MipsRs3Le;

    /// Raw `e_machine` value.
    pub const fn code(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for ElfMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

impl TryFrom<u16> for ElfMachine {
    type Error = u16;

    fn try_from(code: u16) -> Result<Self, u16> {
        Self::from_code(code).ok_or(code)
    }
}

/// Machine the running process was built for, if this crate recognises it.
#[cfg(target_arch = "x86")]
pub const HOST_MACHINE: Option<ElfMachine> = Some(ElfMachine::I386);
/// Machine the running process was built for, if this crate recognises it.
#[cfg(target_arch = "x86_64")]
pub const HOST_MACHINE: Option<ElfMachine> = Some(ElfMachine::X86_64);
/// Machine the running process was built for, if this crate recognises it.
#[cfg(target_arch = "arm")]
pub const HOST_MACHINE: Option<ElfMachine> = Some(ElfMachine::Arm);
/// Machine the running process was built for, if this crate recognises it.
#[cfg(target_arch = "aarch64")]
pub const HOST_MACHINE: Option<ElfMachine> = Some(ElfMachine::Aarch64);
/// Machine the running process was built for, if this crate recognises it.
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub const HOST_MACHINE: Option<ElfMachine> = Some(ElfMachine::RiscV);
/// Machine the running process was built for, if this crate recognises it.
#[cfg(any(target_arch = "mips", target_arch = "mips64"))]
pub const HOST_MACHINE: Option<ElfMachine> = Some(ElfMachine::Mips);
/// Machine the running process was built for, if this crate recognises it.
#[cfg(target_arch = "powerpc")]
pub const HOST_MACHINE: Option<ElfMachine> = Some(ElfMachine::Ppc);
/// Machine the running process was built for, if this crate recognises it.
#[cfg(target_arch = "powerpc64")]
pub const HOST_MACHINE: Option<ElfMachine> = Some(ElfMachine::Ppc64);
/// Machine the running process was built for, if this crate recognises it.
#[cfg(target_arch = "s390x")]
pub const HOST_MACHINE: Option<ElfMachine> = Some(ElfMachine::S390);
/// Machine the running process was built for, if this crate recognises it.
#[cfg(not(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "arm",
    target_arch = "aarch64",
    target_arch = "riscv32",
    target_arch = "riscv64",
    target_arch = "mips",
    target_arch = "mips64",
    target_arch = "powerpc",
    target_arch = "powerpc64",
    target_arch = "s390x",
)))]
pub const HOST_MACHINE: Option<ElfMachine> = None;
