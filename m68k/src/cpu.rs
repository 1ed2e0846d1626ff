use libc::c_int;
use m68k_sys::*;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A CPU model of the M68K family understood by the engine.
///
/// The discriminant of each variant is the engine's code for the model.
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cpu {
    /// The ColdFire MCF5206.
    M5206 = UC_CPU_M5206_CPU,
    /// The original 68000.
    M68000 = UC_CPU_M68000_CPU,
    /// The 68020.
    M68020 = UC_CPU_M68020_CPU,
    /// The 68030.
    M68030 = UC_CPU_M68030_CPU,
    /// The 68040.
    M68040 = UC_CPU_M68040_CPU,
    /// The 68060.
    M68060 = UC_CPU_M68060_CPU,
    /// The ColdFire MCF5208.
    M5208 = UC_CPU_M5208_CPU,
    /// The ColdFire V4e core.
    CFV4E = UC_CPU_CFV4E_CPU,
    /// Any model; the engine picks its generic profile.
    Any = UC_CPU_ANY_CPU,
}

impl Cpu {
    /// Every model, ordered by code.
    pub const ALL: [Cpu; 9] = [
        Cpu::M5206,
        Cpu::M68000,
        Cpu::M68020,
        Cpu::M68030,
        Cpu::M68040,
        Cpu::M68060,
        Cpu::M5208,
        Cpu::CFV4E,
        Cpu::Any,
    ];

    /// The number of models.
    pub const COUNT: usize = Cpu::ALL.len();

    /// Converts an engine code into a model.
    pub fn from_raw(raw: c_int) -> Result<Cpu> {
        if raw < 0 {
            return Err(Error::unknown_cpu(raw));
        }

        Cpu::ALL
            .get(raw as usize)
            .copied()
            .ok_or_else(|| Error::unknown_cpu(raw))
    }

    /// Returns the engine code of the model.
    pub fn as_raw(&self) -> c_int {
        *self as c_int
    }

    /// Returns the short name of the model, e.g. `M68040`.
    pub fn name(&self) -> &'static str {
        match self {
            Cpu::M5206 => "M5206",
            Cpu::M68000 => "M68000",
            Cpu::M68020 => "M68020",
            Cpu::M68030 => "M68030",
            Cpu::M68040 => "M68040",
            Cpu::M68060 => "M68060",
            Cpu::M5208 => "M5208",
            Cpu::CFV4E => "CFV4E",
            Cpu::Any => "ANY",
        }
    }

    /// Returns the name of the binding constant for the model, e.g. `UC_CPU_M68040_CPU`.
    pub fn const_name(&self) -> &'static str {
        match self {
            Cpu::M5206 => "UC_CPU_M5206_CPU",
            Cpu::M68000 => "UC_CPU_M68000_CPU",
            Cpu::M68020 => "UC_CPU_M68020_CPU",
            Cpu::M68030 => "UC_CPU_M68030_CPU",
            Cpu::M68040 => "UC_CPU_M68040_CPU",
            Cpu::M68060 => "UC_CPU_M68060_CPU",
            Cpu::M5208 => "UC_CPU_M5208_CPU",
            Cpu::CFV4E => "UC_CPU_CFV4E_CPU",
            Cpu::Any => "UC_CPU_ANY_CPU",
        }
    }
}

impl Default for Cpu {
    fn default() -> Cpu {
        Cpu::Any
    }
}

impl fmt::Display for Cpu {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.name())
    }
}

impl FromStr for Cpu {
    type Err = Error;

    /// Parses either the short name or the constant name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Cpu> {
        Cpu::ALL
            .iter()
            .copied()
            .find(|cpu| {
                s.eq_ignore_ascii_case(cpu.name()) || s.eq_ignore_ascii_case(cpu.const_name())
            })
            .ok_or_else(|| Error::unknown_name(s))
    }
}

impl TryFrom<c_int> for Cpu {
    type Error = Error;

    fn try_from(raw: c_int) -> Result<Cpu> {
        Cpu::from_raw(raw)
    }
}

impl From<Cpu> for c_int {
    fn from(cpu: Cpu) -> c_int {
        cpu.as_raw()
    }
}
