use crate::procstate::MachineState;
use log::debug;

/*
 * System-control coprocessor, storage only. The register file is kept so
 * the BIOS can park SR/CAUSE/EPC values and read them back; none of the
 * status bits change interpreter behavior and no exception entry exists.
 */

pub const C0_BPC      : u32 = 3;
pub const C0_BDA      : u32 = 5;
pub const C0_JUMPDEST : u32 = 6;
pub const C0_DCIC     : u32 = 7;
pub const C0_BADVADDR : u32 = 8;
pub const C0_BDAM     : u32 = 9;
pub const C0_BPCM     : u32 = 11;
pub const C0_SR       : u32 = 12;
pub const C0_CAUSE    : u32 = 13;
pub const C0_EPC      : u32 = 14;
pub const C0_PRID     : u32 = 15;

// CPU revision identifier reported by retail units
const PRID_VALUE : u32 = 0x00000002;

pub fn store(ms : &mut MachineState, reg : u32, val : u32) {
    let reg = reg & 0x1f;

    match reg {
        C0_BADVADDR | C0_JUMPDEST | C0_PRID => { /* read-only */ }
        C0_SR | C0_CAUSE | C0_EPC => { ms.reg.cp0[reg as usize] = val; }
        _ => {
            ms.reg.cp0[reg as usize] = val;
            debug!("write CP0(pc: 0x{:>08x}, reg: {}, val: 0x{:>x})", ms.reg.pc, reg, val);
        }
    }
}

pub fn load(ms : &mut MachineState, reg : u32) -> u32 {
    let reg = reg & 0x1f;

    match reg {
        C0_PRID => PRID_VALUE,
        _ => ms.reg.cp0[reg as usize],
    }
}
