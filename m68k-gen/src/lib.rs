//! Generates the M68K constant files shipped with the engine's language bindings.
//!
//! Every binding carries its own copy of the CPU model and register codes. This crate renders those
//! copies from the typed tables of the `m68k` crate so that they cannot drift apart.
//!
//! # Examples
//!
//! ```
//! use m68k_gen::Language;
//!
//! let mut out = vec![];
//! m68k_gen::render(Language::Python, &mut out).unwrap();
//! let out = String::from_utf8(out).unwrap();
//! assert!(out.contains("UC_M68K_REG_PC = 18\n"));
//! ```
#![doc(html_root_url = "https://docs.rs/m68k-gen/0.1.0")]
#![warn(missing_docs)]

#[macro_use]
extern crate log;

use libc::c_int;
use m68k::{Cpu, Register};
use std::error;
use std::fmt;
use std::io::{self, Write};
use std::result;
use std::str::FromStr;

#[cfg(test)]
mod test;

const BANNER: &str = "For Unicorn Engine. AUTO-GENERATED FILE, DO NOT EDIT";

/// The result type returned by functions in this crate.
pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
enum ErrorInner {
    Io(io::Error),
    UnknownLanguage(String),
}

/// The error type returned by functions in this crate.
#[derive(Debug)]
pub struct Error(ErrorInner);

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ErrorInner::Io(ref e) => fmt::Display::fmt(e, fmt),
            ErrorInner::UnknownLanguage(ref s) => write!(fmt, "unknown binding language `{}`", s),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.0 {
            ErrorInner::Io(ref e) => Some(e),
            ErrorInner::UnknownLanguage(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error(ErrorInner::Io(e))
    }
}

/// A binding language a constants file can be generated for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Language {
    /// A Python module of integer assignments.
    Python,
    /// A Java interface of `static final int` fields.
    Java,
    /// A Rust module with one `#[repr(C)]` enum per group.
    Rust,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Language; 3] = [Language::Python, Language::Java, Language::Rust];

    /// Returns the lowercase name used to select the language on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Java => "java",
            Language::Rust => "rust",
        }
    }

    /// Returns the file name the binding expects the constants in.
    pub fn file_name(&self) -> &'static str {
        match self {
            Language::Python => "m68k_const.py",
            Language::Java => "M68kConst.java",
            Language::Rust => "m68k_const.rs",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Language> {
        Language::ALL
            .iter()
            .copied()
            .find(|l| s.eq_ignore_ascii_case(l.name()))
            .ok_or_else(|| Error(ErrorInner::UnknownLanguage(s.to_string())))
    }
}

/// One group of constants.
pub struct Section {
    title: &'static str,
    type_name: &'static str,
    entries: Vec<Entry>,
}

impl Section {
    /// Returns the heading written above the group, e.g. `M68K registers`.
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Returns the name of the enum the Rust binding declares for the group.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the constants of the group, ordered by value.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// A single named constant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    name: &'static str,
    const_name: &'static str,
    value: c_int,
}

impl Entry {
    /// Returns the short name, e.g. `PC`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the full constant name, e.g. `UC_M68K_REG_PC`.
    pub fn const_name(&self) -> &'static str {
        self.const_name
    }

    /// Returns the engine code.
    pub fn value(&self) -> c_int {
        self.value
    }
}

/// Returns the CPU model and register groups, in the order the bindings list them.
pub fn sections() -> Vec<Section> {
    let cpus = Cpu::ALL
        .iter()
        .map(|cpu| Entry {
            name: cpu.name(),
            const_name: cpu.const_name(),
            value: cpu.as_raw(),
        })
        .collect();

    let regs = Register::ALL
        .iter()
        .map(|reg| Entry {
            name: reg.name(),
            const_name: reg.const_name(),
            value: reg.as_raw(),
        })
        .collect();

    vec![
        Section {
            title: "M68K CPU",
            type_name: "M68kCpuModel",
            entries: cpus,
        },
        Section {
            title: "M68K registers",
            type_name: "RegisterM68K",
            entries: regs,
        },
    ]
}

/// Writes the constants file for a language.
pub fn render<W>(language: Language, out: &mut W) -> Result<()>
where
    W: Write,
{
    let sections = sections();
    match language {
        Language::Python => render_python(&sections, out)?,
        Language::Java => render_java(&sections, out)?,
        Language::Rust => render_rust(&sections, out)?,
    }
    out.flush()?;
    Ok(())
}

fn render_python<W>(sections: &[Section], out: &mut W) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "# {} [{}]", BANNER, Language::Python.file_name())?;

    for section in sections {
        debug!("writing {} python constants for {}", section.entries.len(), section.title);
        write!(out, "\n# {}\n\n", section.title)?;
        for entry in &section.entries {
            writeln!(out, "{} = {}", entry.const_name, entry.value)?;
        }
    }

    Ok(())
}

fn render_java<W>(sections: &[Section], out: &mut W) -> io::Result<()>
where
    W: Write,
{
    write!(out, "// {}\n\npackage unicorn;\n\n", BANNER)?;
    writeln!(out, "public interface M68kConst {{")?;

    for section in sections {
        debug!("writing {} java constants for {}", section.entries.len(), section.title);
        write!(out, "\n// {}\n\n", section.title)?;
        for entry in &section.entries {
            writeln!(
                out,
                "   public static final int {} = {};",
                entry.const_name, entry.value
            )?;
        }
    }

    write!(out, "\n}}\n")
}

fn render_rust<W>(sections: &[Section], out: &mut W) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "#![allow(non_camel_case_types)]")?;
    writeln!(out, "// {}", BANNER)?;

    for section in sections {
        debug!("writing {} rust variants for {}", section.entries.len(), section.title);
        write!(out, "\n// {}\n", section.title)?;
        writeln!(out, "#[repr(C)]")?;
        writeln!(out, "#[derive(PartialEq, Debug, Clone, Copy)]")?;
        writeln!(out, "pub enum {} {{", section.type_name)?;
        for entry in &section.entries {
            writeln!(out, "    {} = {},", entry.name, entry.value)?;
        }
        writeln!(out, "}}")?;
    }

    Ok(())
}
