use std::env;

fn main() {
    let mut cfg = ctest2::TestGenerator::new();

    let includedir = env::var_os("DEP_UNICORN_M68K_INCLUDEDIR").unwrap();
    cfg.include(includedir);

    cfg.header("unicorn/unicorn.h")
        .type_name(|t, _, _| t.to_string())
        // enums without negative values are unsigned under gcc and clang
        .skip_signededness(|t| match t {
            "uc_cpu_m68k" | "uc_m68k_reg" => true,
            _ => false,
        })
        .const_cname(|c| {
            // UC_CPU_M68040_CPU is spelled UC_CPU_M68K_M68040 in the header
            match c
                .strip_prefix("UC_CPU_")
                .and_then(|c| c.strip_suffix("_CPU"))
            {
                Some(model) => format!("UC_CPU_M68K_{}", model),
                None => c.to_string(),
            }
        })
        .generate("../m68k-sys/src/lib.rs", "all.rs");
}
