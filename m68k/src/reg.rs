use libc::c_int;
use m68k_sys::*;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// An identifier of an M68K register.
///
/// The discriminant of each variant is the engine's code for the register. `Invalid` and `Ending`
/// are sentinels rather than registers: `Invalid` is always 0, and `Ending` is one past the last
/// real register, which makes it the size of a table indexed by register code.
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Register {
    /// The invalid register.
    Invalid = UC_M68K_REG_INVALID,
    /// The address register A0.
    A0 = UC_M68K_REG_A0,
    /// The address register A1.
    A1 = UC_M68K_REG_A1,
    /// The address register A2.
    A2 = UC_M68K_REG_A2,
    /// The address register A3.
    A3 = UC_M68K_REG_A3,
    /// The address register A4.
    A4 = UC_M68K_REG_A4,
    /// The address register A5.
    A5 = UC_M68K_REG_A5,
    /// The address register A6.
    A6 = UC_M68K_REG_A6,
    /// The address register used as the stack pointer.
    A7 = UC_M68K_REG_A7,
    /// The data register D0.
    D0 = UC_M68K_REG_D0,
    /// The data register D1.
    D1 = UC_M68K_REG_D1,
    /// The data register D2.
    D2 = UC_M68K_REG_D2,
    /// The data register D3.
    D3 = UC_M68K_REG_D3,
    /// The data register D4.
    D4 = UC_M68K_REG_D4,
    /// The data register D5.
    D5 = UC_M68K_REG_D5,
    /// The data register D6.
    D6 = UC_M68K_REG_D6,
    /// The data register D7.
    D7 = UC_M68K_REG_D7,
    /// The status register.
    SR = UC_M68K_REG_SR,
    /// The program counter.
    PC = UC_M68K_REG_PC,
    /// The end-of-table marker.
    Ending = UC_M68K_REG_ENDING,
}

const ADDRESS: [Register; 8] = [
    Register::A0,
    Register::A1,
    Register::A2,
    Register::A3,
    Register::A4,
    Register::A5,
    Register::A6,
    Register::A7,
];

const DATA: [Register; 8] = [
    Register::D0,
    Register::D1,
    Register::D2,
    Register::D3,
    Register::D4,
    Register::D5,
    Register::D6,
    Register::D7,
];

impl Register {
    /// Every identifier including the sentinels, ordered by code.
    pub const ALL: [Register; 20] = [
        Register::Invalid,
        Register::A0,
        Register::A1,
        Register::A2,
        Register::A3,
        Register::A4,
        Register::A5,
        Register::A6,
        Register::A7,
        Register::D0,
        Register::D1,
        Register::D2,
        Register::D3,
        Register::D4,
        Register::D5,
        Register::D6,
        Register::D7,
        Register::SR,
        Register::PC,
        Register::Ending,
    ];

    /// The real registers, ordered by code.
    pub const REAL: [Register; 18] = [
        Register::A0,
        Register::A1,
        Register::A2,
        Register::A3,
        Register::A4,
        Register::A5,
        Register::A6,
        Register::A7,
        Register::D0,
        Register::D1,
        Register::D2,
        Register::D3,
        Register::D4,
        Register::D5,
        Register::D6,
        Register::D7,
        Register::SR,
        Register::PC,
    ];

    /// The code of `Ending`, suitable as the length of a table indexed by register code.
    pub const COUNT: usize = UC_M68K_REG_ENDING as usize;

    /// The stack pointer, an alias of `A7`.
    pub const SP: Register = Register::A7;

    /// Converts an engine code into a register identifier.
    ///
    /// Both sentinels are accepted; anything past `Ending` is not.
    pub fn from_raw(raw: c_int) -> Result<Register> {
        if raw < 0 {
            return Err(Error::unknown_register(raw));
        }

        Register::ALL
            .get(raw as usize)
            .copied()
            .ok_or_else(|| Error::unknown_register(raw))
    }

    /// Returns the engine code of the register.
    pub fn as_raw(&self) -> c_int {
        *self as c_int
    }

    /// Returns the address register `An`, if `n` is less than 8.
    pub fn address(n: usize) -> Option<Register> {
        ADDRESS.get(n).copied()
    }

    /// Returns the data register `Dn`, if `n` is less than 8.
    pub fn data(n: usize) -> Option<Register> {
        DATA.get(n).copied()
    }

    /// Determines if this is `Invalid` or `Ending`.
    pub fn is_sentinel(&self) -> bool {
        match self {
            Register::Invalid | Register::Ending => true,
            _ => false,
        }
    }

    /// Determines if this is one of `A0` through `A7`.
    pub fn is_address(&self) -> bool {
        ADDRESS.contains(self)
    }

    /// Determines if this is one of `D0` through `D7`.
    pub fn is_data(&self) -> bool {
        DATA.contains(self)
    }

    /// Returns the number of an address or data register within its bank.
    pub fn index(&self) -> Option<usize> {
        ADDRESS
            .iter()
            .position(|r| r == self)
            .or_else(|| DATA.iter().position(|r| r == self))
    }

    /// Returns the short name of the register, e.g. `D3`.
    pub fn name(&self) -> &'static str {
        match self {
            Register::Invalid => "INVALID",
            Register::A0 => "A0",
            Register::A1 => "A1",
            Register::A2 => "A2",
            Register::A3 => "A3",
            Register::A4 => "A4",
            Register::A5 => "A5",
            Register::A6 => "A6",
            Register::A7 => "A7",
            Register::D0 => "D0",
            Register::D1 => "D1",
            Register::D2 => "D2",
            Register::D3 => "D3",
            Register::D4 => "D4",
            Register::D5 => "D5",
            Register::D6 => "D6",
            Register::D7 => "D7",
            Register::SR => "SR",
            Register::PC => "PC",
            Register::Ending => "ENDING",
        }
    }

    /// Returns the name of the binding constant for the register, e.g. `UC_M68K_REG_D3`.
    pub fn const_name(&self) -> &'static str {
        match self {
            Register::Invalid => "UC_M68K_REG_INVALID",
            Register::A0 => "UC_M68K_REG_A0",
            Register::A1 => "UC_M68K_REG_A1",
            Register::A2 => "UC_M68K_REG_A2",
            Register::A3 => "UC_M68K_REG_A3",
            Register::A4 => "UC_M68K_REG_A4",
            Register::A5 => "UC_M68K_REG_A5",
            Register::A6 => "UC_M68K_REG_A6",
            Register::A7 => "UC_M68K_REG_A7",
            Register::D0 => "UC_M68K_REG_D0",
            Register::D1 => "UC_M68K_REG_D1",
            Register::D2 => "UC_M68K_REG_D2",
            Register::D3 => "UC_M68K_REG_D3",
            Register::D4 => "UC_M68K_REG_D4",
            Register::D5 => "UC_M68K_REG_D5",
            Register::D6 => "UC_M68K_REG_D6",
            Register::D7 => "UC_M68K_REG_D7",
            Register::SR => "UC_M68K_REG_SR",
            Register::PC => "UC_M68K_REG_PC",
            Register::Ending => "UC_M68K_REG_ENDING",
        }
    }
}

impl Default for Register {
    fn default() -> Register {
        Register::Invalid
    }
}

impl fmt::Display for Register {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.name())
    }
}

impl FromStr for Register {
    type Err = Error;

    /// Parses the short name, the constant name or `SP`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Register> {
        if s.eq_ignore_ascii_case("SP") {
            return Ok(Register::SP);
        }

        Register::ALL
            .iter()
            .copied()
            .find(|reg| {
                s.eq_ignore_ascii_case(reg.name()) || s.eq_ignore_ascii_case(reg.const_name())
            })
            .ok_or_else(|| Error::unknown_name(s))
    }
}

impl TryFrom<c_int> for Register {
    type Error = Error;

    fn try_from(raw: c_int) -> Result<Register> {
        Register::from_raw(raw)
    }
}

impl From<Register> for c_int {
    fn from(reg: Register) -> c_int {
        reg.as_raw()
    }
}
