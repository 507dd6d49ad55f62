use crate::gte::Gte;
use crate::mem::MemRegion;
use crate::mips;

use log::info;

pub struct Reg {
    // GPR. r[0] always reads zero; the write path discards stores to it.
    pub r : [u32; 32],

    /*
     * pc is the address of the instruction about to execute, pc_next the
     * one after it. Branches and jumps only ever touch pc_next, which is
     * what makes the delay slot fall out for free.
     */
    pub pc      : u32,
    pub pc_next : u32,

    pub hi : u32,
    pub lo : u32,

    // pending load delay slot; load_reg == 0 means empty
    pub load_reg : usize,
    pub load_val : u32,

    pub cp0 : [u32; 32],
}

impl Reg {
    pub fn new() -> Self {
        Self {
            r : [0; 32],

            pc      : mips::EXCEPT_VECT_RESET,
            pc_next : mips::EXCEPT_VECT_RESET + 4,

            hi : 0,
            lo : 0,

            load_reg : 0,
            load_val : 0,

            cp0 : [0; 32],
        }
    }
}

pub struct EmuSetting {
    pub breakpoint    : u32,
    pub breakmask     : u32,
    pub runafterbreak : u64,
    pub breakcounter  : u64,
    pub nexec_insts   : u64,
    pub stopcount     : u64,
    pub debug : bool,
}

pub struct MachineState {
    pub reg : Reg,
    pub mem : MemRegion,
    pub gte : Gte,
    pub emu : EmuSetting,
}

pub fn log_print_reg32(reg : &Reg) {
    info!("PC = {:>08x}  PC_NEXT = {:>08x}  HI = {:>08x}  LO = {:>08x}", reg.pc, reg.pc_next, reg.hi, reg.lo);
    info!("r[ 0.. 7]={:>08x} {:>08x} {:>08x} {:>08x} {:>08x} {:>08x} {:>08x} {:>08x}", reg.r[ 0], reg.r[ 1], reg.r[ 2], reg.r[ 3], reg.r[ 4], reg.r[ 5], reg.r[ 6], reg.r[ 7]);
    info!("r[ 8..15]={:>08x} {:>08x} {:>08x} {:>08x} {:>08x} {:>08x} {:>08x} {:>08x}", reg.r[ 8], reg.r[ 9], reg.r[10], reg.r[11], reg.r[12], reg.r[13], reg.r[14], reg.r[15]);
    info!("r[16..23]={:>08x} {:>08x} {:>08x} {:>08x} {:>08x} {:>08x} {:>08x} {:>08x}", reg.r[16], reg.r[17], reg.r[18], reg.r[19], reg.r[20], reg.r[21], reg.r[22], reg.r[23]);
    info!("r[24..31]={:>08x} {:>08x} {:>08x} {:>08x} {:>08x} {:>08x} {:>08x} {:>08x}", reg.r[24], reg.r[25], reg.r[26], reg.r[27], reg.r[28], reg.r[29], reg.r[30], reg.r[31]);
}
