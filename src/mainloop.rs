use crate::procstate::{self, MachineState};
use crate::inst::Instruction;
use crate::mem;
use crate::exec;

use log::{error, info};

/*
 * One fetch/decode/execute step. The PC pipeline advances before execute,
 * so a taken branch lands in pc_next while the delay slot instruction is
 * already committed to run. Returns false on any fatal condition.
 */
pub fn cycle(ms : &mut MachineState) -> bool {
    let pointer : u32 = ms.reg.pc;

    let word : u32 = match mem::load_word(&mut ms.mem, pointer) {
        Ok(word) => word,
        Err(addr) => {
            error!("unknown memory region at address {:>08x} (instruction fetch)", addr);
            return false;
        }
    };
    let inst = Instruction::new(word);

    if ms.emu.debug {
        info!("cnt:{} PC:{:>08x}", ms.emu.nexec_insts, pointer);
    }

    ms.reg.pc = ms.reg.pc_next;
    ms.reg.pc_next = ms.reg.pc_next.wrapping_add(4);

    exec::exec(ms, &inst)
}

pub fn run_term(ms : &mut MachineState) -> bool {
    ms.emu.nexec_insts = 0;
    ms.emu.stopcount   = 0;

    while ms.emu.stopcount == 0 || (ms.emu.stopcount > 0 && ms.emu.stopcount >= ms.emu.nexec_insts) {
        let pointer : u32 = ms.reg.pc;

        if ((pointer & ms.emu.breakmask) == (ms.emu.breakpoint & ms.emu.breakmask) && ms.emu.stopcount == 0)
            || (ms.emu.breakcounter != 0 && ms.emu.breakcounter == ms.emu.nexec_insts) {
            info!("Breakpoint");
            info!("==================================");
            info!("pointer: {:>08x}  insts = {}", pointer, ms.emu.nexec_insts);
            procstate::log_print_reg32(&ms.reg);

            ms.emu.debug = true;
            ms.emu.stopcount = ms.emu.nexec_insts + ms.emu.runafterbreak;
        }

        if !cycle(ms) {
            procstate::log_print_reg32(&ms.reg);
            return false;
        }

        ms.emu.nexec_insts += 1;
    }

    info!("pointer 0x{:>x}", ms.reg.pc);
    true
}
