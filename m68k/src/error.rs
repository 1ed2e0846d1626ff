use libc::c_int;
use std::error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum ErrorInner {
    UnknownCpu(c_int),
    UnknownRegister(c_int),
    UnknownName(String),
}

/// An error converting a raw code or a name into an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error(ErrorInner);

impl Error {
    pub(crate) fn unknown_cpu(raw: c_int) -> Error {
        Error(ErrorInner::UnknownCpu(raw))
    }

    pub(crate) fn unknown_register(raw: c_int) -> Error {
        Error(ErrorInner::UnknownRegister(raw))
    }

    pub(crate) fn unknown_name(name: &str) -> Error {
        Error(ErrorInner::UnknownName(name.to_string()))
    }

    /// Returns the raw code which failed to convert, if the error came from a code.
    pub fn raw(&self) -> Option<c_int> {
        match self.0 {
            ErrorInner::UnknownCpu(raw) | ErrorInner::UnknownRegister(raw) => Some(raw),
            ErrorInner::UnknownName(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ErrorInner::UnknownCpu(raw) => write!(fmt, "unknown M68K CPU model code {}", raw),
            ErrorInner::UnknownRegister(raw) => write!(fmt, "unknown M68K register code {}", raw),
            ErrorInner::UnknownName(ref name) => write!(fmt, "unknown M68K name `{}`", name),
        }
    }
}

impl error::Error for Error {}
