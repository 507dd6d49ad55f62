#![allow(dead_code)]

pub mod config;
pub mod mips;
pub mod inst;
mod exec_common;
pub mod mem;
pub mod procstate;
pub mod cp0;
pub mod gte;
pub mod exec;
pub mod mainloop;

pub mod exrps {
    use crate::gte::Gte;
    use crate::mainloop;
    use crate::mem::MemRegion;
    use crate::procstate::{EmuSetting, MachineState, Reg};

    pub use crate::config::BIOS_SIZE;

    pub fn run_term(ms: &mut MachineState) -> bool {
        mainloop::run_term(ms)
    }

    /// Builds a machine around the given 512 KiB BIOS image, with the PC
    /// pipeline pointing at the reset vector.
    pub fn generate_machine_state(bios: Box<[u8]>) -> MachineState {
        MachineState {
            reg: Reg::new(),
            mem: MemRegion::new(bios),
            gte: Gte::new(),
            emu: EmuSetting {
                breakpoint: 0,
                breakmask: 0xffffffff,
                runafterbreak: 0,
                breakcounter: 0,
                nexec_insts: 0,
                stopcount: 0,
                debug: false,
            },
        }
    }
}
