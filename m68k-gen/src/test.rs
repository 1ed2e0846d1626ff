use crate::{render, sections, Language};

const JAVA: &str = include_str!("../tests/M68kConst.java");

fn render_string(language: Language) -> String {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut out = vec![];
    render(language, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn java_matches_published_binding() {
    assert_eq!(render_string(Language::Java), JAVA);
}

#[test]
fn python() {
    let out = render_string(Language::Python);
    let mut lines = out.lines();

    assert_eq!(
        lines.next(),
        Some("# For Unicorn Engine. AUTO-GENERATED FILE, DO NOT EDIT [m68k_const.py]")
    );
    assert_eq!(lines.next(), Some(""));
    assert_eq!(lines.next(), Some("# M68K CPU"));
    assert_eq!(lines.next(), Some(""));
    assert_eq!(lines.next(), Some("UC_CPU_M5206_CPU = 0"));

    assert!(out.contains("UC_CPU_ANY_CPU = 8\n\n# M68K registers\n\nUC_M68K_REG_INVALID = 0\n"));
    assert!(out.ends_with("UC_M68K_REG_PC = 18\nUC_M68K_REG_ENDING = 19\n"));

    let assignments = out.lines().filter(|l| l.contains(" = ")).count();
    assert_eq!(assignments, 9 + 20);
}

#[test]
fn rust() {
    let out = render_string(Language::Rust);

    assert!(out.starts_with(
        "#![allow(non_camel_case_types)]\n// For Unicorn Engine. AUTO-GENERATED FILE, DO NOT EDIT\n"
    ));
    assert!(out.contains("pub enum M68kCpuModel {\n    M5206 = 0,\n"));
    assert!(out.contains("    ANY = 8,\n}\n"));
    assert!(out.contains("pub enum RegisterM68K {\n    INVALID = 0,\n    A0 = 1,\n"));
    assert!(out.ends_with("    PC = 18,\n    ENDING = 19,\n}\n"));
    assert_eq!(out.matches("#[repr(C)]").count(), 2);
}

#[test]
fn sections_are_contiguous() {
    let sections = sections();
    assert_eq!(sections.len(), 2);

    for section in &sections {
        for (i, entry) in section.entries().iter().enumerate() {
            assert_eq!(entry.value(), i as i32, "{}", entry.const_name());
            assert!(entry.const_name().contains(entry.name()));
        }
    }

    assert_eq!(sections[0].title(), "M68K CPU");
    assert_eq!(sections[1].type_name(), "RegisterM68K");
}

#[test]
fn language_names() {
    for language in Language::ALL.iter() {
        assert_eq!(language.name().parse::<Language>().unwrap(), *language);
    }
    assert_eq!("JAVA".parse::<Language>().unwrap(), Language::Java);

    let err = "cobol".parse::<Language>().unwrap_err();
    assert_eq!(err.to_string(), "unknown binding language `cobol`");
}
