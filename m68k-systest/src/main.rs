#![allow(bad_style)]

use libc::*;
use m68k_sys::*;

include!(concat!(env!("OUT_DIR"), "/all.rs"));
