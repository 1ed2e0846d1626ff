//! Typed identifiers for the M68K CPU models and registers of the [Unicorn] engine.
//!
//! The raw constants live in the `m68k-sys` crate. This crate wraps each group in an enum whose
//! discriminants are the engine's codes, so the values can be passed across the FFI boundary
//! unchanged while Rust code gets exhaustive matching.
//!
//! # Examples
//!
//! Sizing a register file by code and filling it:
//!
//! ```
//! use m68k::{Cpu, Register};
//!
//! let mut regs = [0u32; Register::COUNT];
//! regs[Register::PC.as_raw() as usize] = 0x400;
//! regs[Register::SP.as_raw() as usize] = 0x8000;
//!
//! for reg in Register::REAL.iter() {
//!     println!("{} = {:#x}", reg, regs[reg.as_raw() as usize]);
//! }
//!
//! let cpu: Cpu = "m68040".parse().unwrap();
//! assert_eq!(cpu.as_raw(), m68k_sys::UC_CPU_M68040_CPU);
//! assert_eq!(cpu.const_name(), "UC_CPU_M68040_CPU");
//! ```
//!
//! [Unicorn]: https://www.unicorn-engine.org/
#![doc(html_root_url = "https://docs.rs/m68k/0.1.0")]
#![warn(missing_docs)]

use std::result;

pub use crate::cpu::Cpu;
pub use crate::error::Error;
pub use crate::reg::Register;

mod cpu;
mod error;
mod reg;


/// The result type returned by functions in this crate.
pub type Result<T> = result::Result<T, Error>;
