//! Raw M68K constants of the Unicorn engine.
//!
//! The values mirror the `uc_cpu_m68k` and `uc_m68k_reg` enums of `unicorn/m68k.h` and must
//! never change, since callers persist and compare them across the FFI boundary.
#![doc(html_root_url = "https://docs.rs/m68k-sys/0.1.0")]
#![allow(bad_style)]

use libc::c_int;

macro_rules! c_enum {
    ($name:ident { $($variant:ident = $value:expr,)*}) => {
        pub type $name = c_int;

        $(
            pub const $variant: $name = $value;
        )*
    }
}

c_enum!(uc_cpu_m68k {
    UC_CPU_M5206_CPU = 0,
    UC_CPU_M68000_CPU = 1,
    UC_CPU_M68020_CPU = 2,
    UC_CPU_M68030_CPU = 3,
    UC_CPU_M68040_CPU = 4,
    UC_CPU_M68060_CPU = 5,
    UC_CPU_M5208_CPU = 6,
    UC_CPU_CFV4E_CPU = 7,
    UC_CPU_ANY_CPU = 8,
});

c_enum!(uc_m68k_reg {
    UC_M68K_REG_INVALID = 0,
    UC_M68K_REG_A0 = 1,
    UC_M68K_REG_A1 = 2,
    UC_M68K_REG_A2 = 3,
    UC_M68K_REG_A3 = 4,
    UC_M68K_REG_A4 = 5,
    UC_M68K_REG_A5 = 6,
    UC_M68K_REG_A6 = 7,
    UC_M68K_REG_A7 = 8,
    UC_M68K_REG_D0 = 9,
    UC_M68K_REG_D1 = 10,
    UC_M68K_REG_D2 = 11,
    UC_M68K_REG_D3 = 12,
    UC_M68K_REG_D4 = 13,
    UC_M68K_REG_D5 = 14,
    UC_M68K_REG_D6 = 15,
    UC_M68K_REG_D7 = 16,
    UC_M68K_REG_SR = 17,
    UC_M68K_REG_PC = 18,
    UC_M68K_REG_ENDING = 19,
});

#[cfg(test)]
mod test {
    #[test]
    fn links_key_leaves_engine_name_free() {
        // the engine's own -sys crate claims `unicorn`, and cargo allows one package per key
        let manifest = include_str!("../Cargo.toml");
        let links = manifest
            .lines()
            .find(|l| l.starts_with("links"))
            .unwrap();
        assert_eq!(links, r#"links = "unicorn-m68k""#);
    }
}
