use m68k::{Cpu, Register};
use std::collections::HashMap;

#[test]
fn register_file() {
    let mut regs = [0u32; Register::COUNT];
    for (i, reg) in Register::REAL.iter().enumerate() {
        regs[reg.as_raw() as usize] = i as u32 * 0x10;
    }

    for raw in 1..Register::COUNT as i32 {
        let reg = Register::from_raw(raw).unwrap();
        println!("{:>2} {:<6} {:#06x}", raw, reg, regs[raw as usize]);
        assert_eq!(regs[raw as usize], (raw as u32 - 1) * 0x10);
    }
    assert_eq!(regs[Register::Invalid.as_raw() as usize], 0);
}

#[test]
fn lookup_by_name() {
    let table = Cpu::ALL
        .iter()
        .map(|cpu| (cpu.const_name(), cpu.as_raw()))
        .chain(Register::ALL.iter().map(|r| (r.const_name(), r.as_raw())))
        .collect::<HashMap<_, _>>();

    assert_eq!(table.len(), Cpu::COUNT + Register::ALL.len());
    assert_eq!(table["UC_CPU_ANY_CPU"], 8);
    assert_eq!(table["UC_M68K_REG_INVALID"], 0);
    assert_eq!(table["UC_M68K_REG_ENDING"], 19);

    for (name, &raw) in &table {
        if name.starts_with("UC_CPU_") {
            assert_eq!(name.parse::<Cpu>().unwrap().as_raw(), raw);
        } else {
            assert_eq!(name.parse::<Register>().unwrap().as_raw(), raw);
        }
    }
}

#[test]
fn identifiers_are_shareable() {
    fn assert_copy<T: Send + Sync + Copy + 'static>() {}
    fn assert_send_sync<T: Send + Sync + 'static>() {}

    assert_copy::<Cpu>();
    assert_copy::<Register>();
    assert_send_sync::<m68k::Error>();
}
