use crate::procstate::MachineState;
use crate::inst::Instruction;
use crate::mips;
use crate::mem;
use crate::cp0;
use crate::gte;

use crate::sign_ext8;
use crate::sign_ext16;
use crate::zero_ext16;
use crate::set_gpr;
use crate::commit_delayed_load;
use log::{error, info};

macro_rules! unknown_instruction{
    ( $inst:expr, $msg:expr ) =>
    {
        error!("unknown instruction (inst={:>08x}, {})", $inst, $msg);
        return false;
    }
}

pub const MIPS1_OP_SPECIAL : u32 = 0b000_000;
pub const MIPS1_OP_REGIMM  : u32 = 0b000_001;
pub const MIPS1_OP_J       : u32 = 0b000_010;
pub const MIPS1_OP_JAL     : u32 = 0b000_011;
pub const MIPS1_OP_BEQ     : u32 = 0b000_100;
pub const MIPS1_OP_BNE     : u32 = 0b000_101;
pub const MIPS1_OP_BLEZ    : u32 = 0b000_110;
pub const MIPS1_OP_BGTZ    : u32 = 0b000_111;
pub const MIPS1_OP_ADDI    : u32 = 0b001_000;
pub const MIPS1_OP_ADDIU   : u32 = 0b001_001;
pub const MIPS1_OP_SLTI    : u32 = 0b001_010;
pub const MIPS1_OP_SLTIU   : u32 = 0b001_011;
pub const MIPS1_OP_ANDI    : u32 = 0b001_100;
pub const MIPS1_OP_ORI     : u32 = 0b001_101;
pub const MIPS1_OP_XORI    : u32 = 0b001_110;
pub const MIPS1_OP_LUI     : u32 = 0b001_111;
pub const MIPS1_OP_COP0    : u32 = 0b010_000;
pub const MIPS1_OP_COP2    : u32 = 0b010_010;
pub const MIPS1_OP_LB      : u32 = 0b100_000;
pub const MIPS1_OP_LH      : u32 = 0b100_001;
pub const MIPS1_OP_LWL     : u32 = 0b100_010;
pub const MIPS1_OP_LW      : u32 = 0b100_011;
pub const MIPS1_OP_LBU     : u32 = 0b100_100;
pub const MIPS1_OP_LHU     : u32 = 0b100_101;
pub const MIPS1_OP_LWR     : u32 = 0b100_110;
pub const MIPS1_OP_SB      : u32 = 0b101_000;
pub const MIPS1_OP_SH      : u32 = 0b101_001;
pub const MIPS1_OP_SWL     : u32 = 0b101_010;
pub const MIPS1_OP_SW      : u32 = 0b101_011;
pub const MIPS1_OP_SWR     : u32 = 0b101_110;
pub const MIPS1_OP_LWC2    : u32 = 0b110_010;
pub const MIPS1_OP_SWC2    : u32 = 0b111_010;

/*
 * Executes one decoded instruction. The PC pipeline has already advanced,
 * so ms.reg.pc holds the delay slot address and branches only ever touch
 * pc_next. Source operands are captured before the pending load commits
 * (see commit_delayed_load! for the ordering contract).
 * Returns false on a fatal condition; the run loop stops there.
 */
pub fn exec(ms : &mut MachineState, inst : &Instruction) -> bool {
    let op    : u32 = inst.opcode;
    let rs    : usize = inst.rs as usize;
    let rt    : usize = inst.rt as usize;
    let rd    : usize = inst.rd as usize;
    let shamt : u32 = inst.shamt;
    let funct : u32 = inst.funct;
    let imm   : u32 = inst.imm16;

    let rs_val : u32 = ms.reg.r[rs];
    let rt_val : u32 = ms.reg.r[rt];
    commit_delayed_load!(ms);

    if inst.raw == 0 {
        if ms.emu.debug { info!("nop"); }
        return true;
    }

    match op {
        MIPS1_OP_SPECIAL =>
        {
            match funct {
                0x00 => // sll
                {
                    if ms.emu.debug { info!("sll {}, {}, 0x{:>x}", mips::REGSTR[rd], mips::REGSTR[rt], shamt); }
                    set_gpr!(ms, rd, rt_val << shamt);
                    return true;
                }
                0x02 => // srl
                {
                    if ms.emu.debug { info!("srl {}, {}, 0x{:>x}", mips::REGSTR[rd], mips::REGSTR[rt], shamt); }
                    set_gpr!(ms, rd, rt_val >> shamt);
                    return true;
                }
                0x03 => // sra
                {
                    if ms.emu.debug { info!("sra {}, {}, 0x{:>x}", mips::REGSTR[rd], mips::REGSTR[rt], shamt); }
                    set_gpr!(ms, rd, ((rt_val as i32) >> shamt) as u32);
                    return true;
                }
                0x04 => // sllv
                {
                    if ms.emu.debug { info!("sllv {}, {}, {}", mips::REGSTR[rd], mips::REGSTR[rt], mips::REGSTR[rs]); }
                    set_gpr!(ms, rd, rt_val << (rs_val & 0x1f));
                    return true;
                }
                0x06 => // srlv
                {
                    if ms.emu.debug { info!("srlv {}, {}, {}", mips::REGSTR[rd], mips::REGSTR[rt], mips::REGSTR[rs]); }
                    set_gpr!(ms, rd, rt_val >> (rs_val & 0x1f));
                    return true;
                }
                0x07 => // srav
                {
                    if ms.emu.debug { info!("srav {}, {}, {}", mips::REGSTR[rd], mips::REGSTR[rt], mips::REGSTR[rs]); }
                    set_gpr!(ms, rd, ((rt_val as i32) >> (rs_val & 0x1f)) as u32);
                    return true;
                }
                0x08 => // jr
                {
                    if ms.emu.debug { info!("jr {}(=0x{:>x})", mips::REGSTR[rs], rs_val); }
                    ms.reg.pc_next = rs_val;
                    return true;
                }
                0x09 => // jalr
                {
                    if ms.emu.debug { info!("jalr {}, {}(=0x{:>x})", mips::REGSTR[rd], mips::REGSTR[rs], rs_val); }
                    // pc holds the delay slot here; the return address skips it
                    set_gpr!(ms, rd, ms.reg.pc.wrapping_add(4));
                    ms.reg.pc_next = rs_val;
                    return true;
                }
                0x0c => // syscall
                {
                    if ms.emu.debug { info!("syscall"); }
                    // no exception model; falls through to the next instruction
                    return true;
                }
                0x0d => // break
                {
                    if ms.emu.debug { info!("break"); }
                    return true;
                }
                0x10 => // mfhi
                {
                    if ms.emu.debug { info!("mfhi {}", mips::REGSTR[rd]); }
                    set_gpr!(ms, rd, ms.reg.hi);
                    return true;
                }
                0x11 => // mthi
                {
                    if ms.emu.debug { info!("mthi {}", mips::REGSTR[rs]); }
                    ms.reg.hi = rs_val;
                    return true;
                }
                0x12 => // mflo
                {
                    if ms.emu.debug { info!("mflo {}", mips::REGSTR[rd]); }
                    set_gpr!(ms, rd, ms.reg.lo);
                    return true;
                }
                0x13 => // mtlo
                {
                    if ms.emu.debug { info!("mtlo {}", mips::REGSTR[rs]); }
                    ms.reg.lo = rs_val;
                    return true;
                }
                0x18 => // mult
                {
                    if ms.emu.debug { info!("mult {}, {}", mips::REGSTR[rs], mips::REGSTR[rt]); }
                    let mul_tmp : i64 = ((rs_val as i32) as i64) * ((rt_val as i32) as i64);
                    ms.reg.hi = ((mul_tmp as u64) >> 32) as u32;
                    ms.reg.lo =  (mul_tmp as u64)        as u32;
                    return true;
                }
                0x19 => // multu
                {
                    if ms.emu.debug { info!("multu {}, {}", mips::REGSTR[rs], mips::REGSTR[rt]); }
                    let mul_tmp : u64 = (rs_val as u64) * (rt_val as u64);
                    ms.reg.hi = (mul_tmp >> 32) as u32;
                    ms.reg.lo =  mul_tmp        as u32;
                    return true;
                }
                0x1a => // div
                {
                    if ms.emu.debug { info!("div {}, {}", mips::REGSTR[rs], mips::REGSTR[rt]); }
                    let n : i32 = rs_val as i32;
                    let d : i32 = rt_val as i32;
                    if d == 0 {
                        // zero divisor: quotient is -1 or +1 by the sign of the dividend
                        ms.reg.lo = if n >= 0 { 0xffffffff }else{ 1 };
                        ms.reg.hi = rs_val;
                    }else if rs_val == 0x80000000 && d == -1 {
                        // the one overflowing quotient
                        ms.reg.lo = 0x80000000;
                        ms.reg.hi = 0;
                    }else{
                        ms.reg.lo = (n / d) as u32;
                        ms.reg.hi = (n % d) as u32;
                    }
                    return true;
                }
                0x1b => // divu
                {
                    if ms.emu.debug { info!("divu {}, {}", mips::REGSTR[rs], mips::REGSTR[rt]); }
                    if rt_val == 0 {
                        ms.reg.lo = 0xffffffff;
                        ms.reg.hi = rs_val;
                    }else{
                        ms.reg.lo = rs_val / rt_val;
                        ms.reg.hi = rs_val % rt_val;
                    }
                    return true;
                }
                0x20 => // add
                {
                    if ms.emu.debug { info!("add {}, {}, {}", mips::REGSTR[rd], mips::REGSTR[rs], mips::REGSTR[rt]); }
                    match (rs_val as i32).checked_add(rt_val as i32) {
                        Some(res) => { set_gpr!(ms, rd, res as u32); }
                        None => { error!("integer overflow (inst={:>08x}, add)", inst.raw); return false; }
                    }
                    return true;
                }
                0x21 => // addu
                {
                    if ms.emu.debug { info!("addu {}, {}, {}", mips::REGSTR[rd], mips::REGSTR[rs], mips::REGSTR[rt]); }
                    set_gpr!(ms, rd, rs_val.wrapping_add(rt_val));
                    return true;
                }
                0x22 => // sub
                {
                    if ms.emu.debug { info!("sub {}, {}, {}", mips::REGSTR[rd], mips::REGSTR[rs], mips::REGSTR[rt]); }
                    match (rs_val as i32).checked_sub(rt_val as i32) {
                        Some(res) => { set_gpr!(ms, rd, res as u32); }
                        None => { error!("integer overflow (inst={:>08x}, sub)", inst.raw); return false; }
                    }
                    return true;
                }
                0x23 => // subu
                {
                    if ms.emu.debug { info!("subu {}, {}, {}", mips::REGSTR[rd], mips::REGSTR[rs], mips::REGSTR[rt]); }
                    set_gpr!(ms, rd, rs_val.wrapping_sub(rt_val));
                    return true;
                }
                0x24 => // and
                {
                    if ms.emu.debug { info!("and {}, {}, {}", mips::REGSTR[rd], mips::REGSTR[rs], mips::REGSTR[rt]); }
                    set_gpr!(ms, rd, rs_val & rt_val);
                    return true;
                }
                0x25 => // or
                {
                    if ms.emu.debug { info!("or {}, {}, {}", mips::REGSTR[rd], mips::REGSTR[rs], mips::REGSTR[rt]); }
                    set_gpr!(ms, rd, rs_val | rt_val);
                    return true;
                }
                0x26 => // xor
                {
                    if ms.emu.debug { info!("xor {}, {}, {}", mips::REGSTR[rd], mips::REGSTR[rs], mips::REGSTR[rt]); }
                    set_gpr!(ms, rd, rs_val ^ rt_val);
                    return true;
                }
                0x27 => // nor
                {
                    if ms.emu.debug { info!("nor {}, {}, {}", mips::REGSTR[rd], mips::REGSTR[rs], mips::REGSTR[rt]); }
                    set_gpr!(ms, rd, !(rs_val | rt_val));
                    return true;
                }
                0x2a => // slt
                {
                    if ms.emu.debug { info!("slt {}, {}, {}", mips::REGSTR[rd], mips::REGSTR[rs], mips::REGSTR[rt]); }
                    set_gpr!(ms, rd, if (rs_val as i32) < (rt_val as i32) { 1 }else{ 0 });
                    return true;
                }
                0x2b => // sltu
                {
                    if ms.emu.debug { info!("sltu {}, {}, {}", mips::REGSTR[rd], mips::REGSTR[rs], mips::REGSTR[rt]); }
                    set_gpr!(ms, rd, if rs_val < rt_val { 1 }else{ 0 });
                    return true;
                }
                _ =>
                {
                    unknown_instruction!(inst.raw, "op=0x00");
                }
            }
        }
        MIPS1_OP_REGIMM =>
        {
            match inst.rt {
                0x00 => // bltz
                {
                    if ms.emu.debug { info!("bltz {}, 0x{:>x}(={:>x})", mips::REGSTR[rs], imm, ms.reg.pc.wrapping_add(inst.imm16sx << 2)); }
                    if (rs_val as i32) < 0 {
                        ms.reg.pc_next = ms.reg.pc.wrapping_add(inst.imm16sx << 2);
                    }
                }
                0x01 => // bgez
                {
                    if ms.emu.debug { info!("bgez {}, 0x{:>x}(={:>x})", mips::REGSTR[rs], imm, ms.reg.pc.wrapping_add(inst.imm16sx << 2)); }
                    if (rs_val as i32) >= 0 {
                        ms.reg.pc_next = ms.reg.pc.wrapping_add(inst.imm16sx << 2);
                    }
                }
                0x10 => // bltzal
                {
                    if ms.emu.debug { info!("bltzal {}, 0x{:>x}(={:>x})", mips::REGSTR[rs], imm, ms.reg.pc.wrapping_add(inst.imm16sx << 2)); }
                    // the link lands even when the branch does not
                    set_gpr!(ms, 31, ms.reg.pc.wrapping_add(4));
                    if (rs_val as i32) < 0 {
                        ms.reg.pc_next = ms.reg.pc.wrapping_add(inst.imm16sx << 2);
                    }
                }
                0x11 => // bgezal
                {
                    if ms.emu.debug { info!("bgezal {}, 0x{:>x}(={:>x})", mips::REGSTR[rs], imm, ms.reg.pc.wrapping_add(inst.imm16sx << 2)); }
                    set_gpr!(ms, 31, ms.reg.pc.wrapping_add(4));
                    if (rs_val as i32) >= 0 {
                        ms.reg.pc_next = ms.reg.pc.wrapping_add(inst.imm16sx << 2);
                    }
                }
                _ =>
                {
                    unknown_instruction!(inst.raw, "op=0x01");
                }
            }
            return true;
        }
        MIPS1_OP_J => // j
        {
            ms.reg.pc_next = (ms.reg.pc & 0xf0000000) | (inst.target << 2);
            if ms.emu.debug { info!("j 0x{:>x}(={:>x})", inst.target, ms.reg.pc_next); }
            return true;
        }
        MIPS1_OP_JAL => // jal
        {
            set_gpr!(ms, 31, ms.reg.pc.wrapping_add(4));
            ms.reg.pc_next = (ms.reg.pc & 0xf0000000) | (inst.target << 2);
            if ms.emu.debug { info!("jal 0x{:>x}(={:>x})", inst.target, ms.reg.pc_next); }
            return true;
        }
        MIPS1_OP_BEQ => // beq
        {
            if ms.emu.debug { info!("beq {}, {}, 0x{:>x}(={:>x})", mips::REGSTR[rs], mips::REGSTR[rt], imm, ms.reg.pc.wrapping_add(inst.imm16sx << 2)); }
            if rs_val == rt_val {
                ms.reg.pc_next = ms.reg.pc.wrapping_add(inst.imm16sx << 2);
            }
            return true;
        }
        MIPS1_OP_BNE => // bne
        {
            if ms.emu.debug { info!("bne {}, {}, 0x{:>x}(={:>x})", mips::REGSTR[rs], mips::REGSTR[rt], imm, ms.reg.pc.wrapping_add(inst.imm16sx << 2)); }
            if rs_val != rt_val {
                ms.reg.pc_next = ms.reg.pc.wrapping_add(inst.imm16sx << 2);
            }
            return true;
        }
        MIPS1_OP_BLEZ => // blez
        {
            if ms.emu.debug { info!("blez {}, 0x{:>x}(={:>x})", mips::REGSTR[rs], imm, ms.reg.pc.wrapping_add(inst.imm16sx << 2)); }
            if (rs_val as i32) <= 0 {
                ms.reg.pc_next = ms.reg.pc.wrapping_add(inst.imm16sx << 2);
            }
            return true;
        }
        MIPS1_OP_BGTZ => // bgtz
        {
            if ms.emu.debug { info!("bgtz {}, 0x{:>x}(={:>x})", mips::REGSTR[rs], imm, ms.reg.pc.wrapping_add(inst.imm16sx << 2)); }
            if (rs_val as i32) > 0 {
                ms.reg.pc_next = ms.reg.pc.wrapping_add(inst.imm16sx << 2);
            }
            return true;
        }
        MIPS1_OP_ADDI => // addi
        {
            if ms.emu.debug { info!("addi {}, {}, 0x{:>x}", mips::REGSTR[rt], mips::REGSTR[rs], imm); }
            match (rs_val as i32).checked_add(inst.imm16sx as i32) {
                Some(res) => { set_gpr!(ms, rt, res as u32); }
                None => { error!("integer overflow (inst={:>08x}, addi)", inst.raw); return false; }
            }
            return true;
        }
        MIPS1_OP_ADDIU => // addiu
        {
            if ms.emu.debug { info!("addiu {}, {}, 0x{:>x}", mips::REGSTR[rt], mips::REGSTR[rs], imm); }
            set_gpr!(ms, rt, rs_val.wrapping_add(inst.imm16sx));
            return true;
        }
        MIPS1_OP_SLTI => // slti
        {
            if ms.emu.debug { info!("slti {}, {}, 0x{:>x}", mips::REGSTR[rt], mips::REGSTR[rs], imm); }
            set_gpr!(ms, rt, if (rs_val as i32) < (inst.imm16sx as i32) { 1 }else{ 0 });
            return true;
        }
        MIPS1_OP_SLTIU => // sltiu
        {
            if ms.emu.debug { info!("sltiu {}, {}, 0x{:>x}", mips::REGSTR[rt], mips::REGSTR[rs], imm); }
            // the immediate is sign-extended first, then both sides compare unsigned
            set_gpr!(ms, rt, if rs_val < inst.imm16sx { 1 }else{ 0 });
            return true;
        }
        MIPS1_OP_ANDI => // andi
        {
            if ms.emu.debug { info!("andi {}, {}, 0x{:>x}", mips::REGSTR[rt], mips::REGSTR[rs], imm); }
            set_gpr!(ms, rt, rs_val & zero_ext16!(imm));
            return true;
        }
        MIPS1_OP_ORI => // ori
        {
            if ms.emu.debug { info!("ori {}, {}, 0x{:>x}", mips::REGSTR[rt], mips::REGSTR[rs], imm); }
            set_gpr!(ms, rt, rs_val | zero_ext16!(imm));
            return true;
        }
        MIPS1_OP_XORI => // xori
        {
            if ms.emu.debug { info!("xori {}, {}, 0x{:>x}", mips::REGSTR[rt], mips::REGSTR[rs], imm); }
            set_gpr!(ms, rt, rs_val ^ zero_ext16!(imm));
            return true;
        }
        MIPS1_OP_LUI => // lui
        {
            if ms.emu.debug { info!("lui {}, 0x{:>x}", mips::REGSTR[rt], imm); }
            set_gpr!(ms, rt, imm << 16);
            return true;
        }
        MIPS1_OP_COP0 =>
        {
            match inst.rs {
                0x00 => // mfc0
                {
                    if ms.emu.debug { info!("mfc0 {}, $c{}", mips::REGSTR[rt], rd); }
                    let data : u32 = cp0::load(ms, inst.rd);
                    ms.reg.load_reg = rt;
                    ms.reg.load_val = data;
                }
                0x02 => // cfc0
                {
                    // coprocessor 0 has no control registers
                    if ms.emu.debug { info!("cfc0 {}, $c{}", mips::REGSTR[rt], rd); }
                }
                0x04 => // mtc0
                {
                    if ms.emu.debug { info!("mtc0 {}, $c{}", mips::REGSTR[rt], rd); }
                    cp0::store(ms, inst.rd, rt_val);
                }
                0x06 => // ctc0
                {
                    if ms.emu.debug { info!("ctc0 {}, $c{}", mips::REGSTR[rt], rd); }
                }
                0x10..=0x1f =>
                {
                    if funct == 0x10 { // rfe
                        if ms.emu.debug { info!("rfe"); }
                        // exception levels are not modeled
                    }else{
                        unknown_instruction!(inst.raw, "op=0x10");
                    }
                }
                _ =>
                {
                    unknown_instruction!(inst.raw, "op=0x10");
                }
            }
            return true;
        }
        MIPS1_OP_COP2 =>
        {
            // bit 25 set marks an imm25 GTE command; otherwise a register move
            if inst.raw & (1 << 25) != 0 {
                if ms.emu.debug { info!("cop2 0x{:>x} ({})", inst.raw & 0x01ffffff, gte::opcode_name(funct)); }
                return gte::execute(&mut ms.gte, inst);
            }
            match inst.rs {
                0x00 => // mfc2
                {
                    if ms.emu.debug { info!("mfc2 {}, $c{}", mips::REGSTR[rt], rd); }
                    ms.reg.load_reg = rt;
                    ms.reg.load_val = gte::read_data(&ms.gte, inst.rd);
                }
                0x02 => // cfc2
                {
                    if ms.emu.debug { info!("cfc2 {}, $c{}", mips::REGSTR[rt], rd); }
                    ms.reg.load_reg = rt;
                    ms.reg.load_val = gte::read_control(&ms.gte, inst.rd);
                }
                0x04 => // mtc2
                {
                    if ms.emu.debug { info!("mtc2 {}, $c{}", mips::REGSTR[rt], rd); }
                    gte::write_data(&mut ms.gte, inst.rd, rt_val);
                }
                0x06 => // ctc2
                {
                    if ms.emu.debug { info!("ctc2 {}, $c{}", mips::REGSTR[rt], rd); }
                    gte::write_control(&mut ms.gte, inst.rd, rt_val);
                }
                _ =>
                {
                    unknown_instruction!(inst.raw, "op=0x12");
                }
            }
            return true;
        }
        MIPS1_OP_LB => // lb
        {
            let addr : u32 = rs_val.wrapping_add(inst.imm16sx);
            if ms.emu.debug { info!("lb {}, 0x{:>x}({}) (=0x{:>x})", mips::REGSTR[rt], imm, mips::REGSTR[rs], addr); }
            match mem::load_byte(&mut ms.mem, addr) {
                Ok(data) => { ms.reg.load_reg = rt; ms.reg.load_val = sign_ext8!(data); }
                Err(addr) => { error!("unknown memory region at address {:>08x}", addr); return false; }
            }
            return true;
        }
        MIPS1_OP_LH => // lh
        {
            let addr : u32 = rs_val.wrapping_add(inst.imm16sx);
            if ms.emu.debug { info!("lh {}, 0x{:>x}({}) (=0x{:>x})", mips::REGSTR[rt], imm, mips::REGSTR[rs], addr); }
            match mem::load_halfword(&mut ms.mem, addr) {
                Ok(data) => { ms.reg.load_reg = rt; ms.reg.load_val = sign_ext16!(data); }
                Err(addr) => { error!("unknown memory region at address {:>08x}", addr); return false; }
            }
            return true;
        }
        MIPS1_OP_LWL => // lwl
        {
            let addr : u32 = rs_val.wrapping_add(inst.imm16sx);
            if ms.emu.debug { info!("lwl {}, 0x{:>x}({}) (=0x{:>x})", mips::REGSTR[rt], imm, mips::REGSTR[rs], addr); }
            match mem::load_word(&mut ms.mem, addr & !3) {
                Ok(data) =>
                {
                    // merges the high end of the register with memory, byte by byte
                    let merged : u32 = match addr & 3 {
                        0 => (rt_val & 0x00ffffff) | (data << 24),
                        1 => (rt_val & 0x0000ffff) | (data << 16),
                        2 => (rt_val & 0x000000ff) | (data <<  8),
                        _ => data,
                    };
                    ms.reg.load_reg = rt;
                    ms.reg.load_val = merged;
                }
                Err(addr) => { error!("unknown memory region at address {:>08x}", addr); return false; }
            }
            return true;
        }
        MIPS1_OP_LW => // lw
        {
            let addr : u32 = rs_val.wrapping_add(inst.imm16sx);
            if ms.emu.debug { info!("lw {}, 0x{:>x}({}) (=0x{:>x})", mips::REGSTR[rt], imm, mips::REGSTR[rs], addr); }
            match mem::load_word(&mut ms.mem, addr) {
                Ok(data) => { ms.reg.load_reg = rt; ms.reg.load_val = data; }
                Err(addr) => { error!("unknown memory region at address {:>08x}", addr); return false; }
            }
            return true;
        }
        MIPS1_OP_LBU => // lbu
        {
            let addr : u32 = rs_val.wrapping_add(inst.imm16sx);
            if ms.emu.debug { info!("lbu {}, 0x{:>x}({}) (=0x{:>x})", mips::REGSTR[rt], imm, mips::REGSTR[rs], addr); }
            match mem::load_byte(&mut ms.mem, addr) {
                Ok(data) => { ms.reg.load_reg = rt; ms.reg.load_val = data & 0xff; }
                Err(addr) => { error!("unknown memory region at address {:>08x}", addr); return false; }
            }
            return true;
        }
        MIPS1_OP_LHU => // lhu
        {
            let addr : u32 = rs_val.wrapping_add(inst.imm16sx);
            if ms.emu.debug { info!("lhu {}, 0x{:>x}({}) (=0x{:>x})", mips::REGSTR[rt], imm, mips::REGSTR[rs], addr); }
            match mem::load_halfword(&mut ms.mem, addr) {
                Ok(data) => { ms.reg.load_reg = rt; ms.reg.load_val = data & 0xffff; }
                Err(addr) => { error!("unknown memory region at address {:>08x}", addr); return false; }
            }
            return true;
        }
        MIPS1_OP_LWR => // lwr
        {
            let addr : u32 = rs_val.wrapping_add(inst.imm16sx);
            if ms.emu.debug { info!("lwr {}, 0x{:>x}({}) (=0x{:>x})", mips::REGSTR[rt], imm, mips::REGSTR[rs], addr); }
            match mem::load_word(&mut ms.mem, addr & !3) {
                Ok(data) =>
                {
                    let merged : u32 = match addr & 3 {
                        0 => data,
                        1 => (rt_val & 0xff000000) | (data >>  8),
                        2 => (rt_val & 0xffff0000) | (data >> 16),
                        _ => (rt_val & 0xffffff00) | (data >> 24),
                    };
                    ms.reg.load_reg = rt;
                    ms.reg.load_val = merged;
                }
                Err(addr) => { error!("unknown memory region at address {:>08x}", addr); return false; }
            }
            return true;
        }
        MIPS1_OP_SB => // sb
        {
            let addr : u32 = rs_val.wrapping_add(inst.imm16sx);
            if ms.emu.debug { info!("sb {}, 0x{:>x}({}) (=0x{:>x})", mips::REGSTR[rt], imm, mips::REGSTR[rs], addr); }
            match mem::store_byte(&mut ms.mem, addr, rt_val & 0xff) {
                Ok(()) => { }
                Err(addr) => { error!("unknown memory region at address {:>08x}", addr); return false; }
            }
            return true;
        }
        MIPS1_OP_SH => // sh
        {
            let addr : u32 = rs_val.wrapping_add(inst.imm16sx);
            if ms.emu.debug { info!("sh {}, 0x{:>x}({}) (=0x{:>x})", mips::REGSTR[rt], imm, mips::REGSTR[rs], addr); }
            match mem::store_halfword(&mut ms.mem, addr, rt_val & 0xffff) {
                Ok(()) => { }
                Err(addr) => { error!("unknown memory region at address {:>08x}", addr); return false; }
            }
            return true;
        }
        MIPS1_OP_SWL => // swl
        {
            let addr : u32 = rs_val.wrapping_add(inst.imm16sx);
            if ms.emu.debug { info!("swl {}, 0x{:>x}({}) (=0x{:>x})", mips::REGSTR[rt], imm, mips::REGSTR[rs], addr); }
            let current = match mem::load_word(&mut ms.mem, addr & !3) {
                Ok(data) => data,
                Err(addr) => { error!("unknown memory region at address {:>08x}", addr); return false; }
            };
            let merged : u32 = match addr & 3 {
                0 => (current & 0xffffff00) | (rt_val >> 24),
                1 => (current & 0xffff0000) | (rt_val >> 16),
                2 => (current & 0xff000000) | (rt_val >>  8),
                _ => rt_val,
            };
            match mem::store_word(&mut ms.mem, addr & !3, merged) {
                Ok(()) => { }
                Err(addr) => { error!("unknown memory region at address {:>08x}", addr); return false; }
            }
            return true;
        }
        MIPS1_OP_SW => // sw
        {
            let addr : u32 = rs_val.wrapping_add(inst.imm16sx);
            if ms.emu.debug { info!("sw {}, 0x{:>x}({}) (=0x{:>x})", mips::REGSTR[rt], imm, mips::REGSTR[rs], addr); }
            match mem::store_word(&mut ms.mem, addr, rt_val) {
                Ok(()) => { }
                Err(addr) => { error!("unknown memory region at address {:>08x}", addr); return false; }
            }
            return true;
        }
        MIPS1_OP_SWR => // swr
        {
            let addr : u32 = rs_val.wrapping_add(inst.imm16sx);
            if ms.emu.debug { info!("swr {}, 0x{:>x}({}) (=0x{:>x})", mips::REGSTR[rt], imm, mips::REGSTR[rs], addr); }
            let current = match mem::load_word(&mut ms.mem, addr & !3) {
                Ok(data) => data,
                Err(addr) => { error!("unknown memory region at address {:>08x}", addr); return false; }
            };
            let merged : u32 = match addr & 3 {
                0 => rt_val,
                1 => (current & 0x000000ff) | (rt_val <<  8),
                2 => (current & 0x0000ffff) | (rt_val << 16),
                _ => (current & 0x00ffffff) | (rt_val << 24),
            };
            match mem::store_word(&mut ms.mem, addr & !3, merged) {
                Ok(()) => { }
                Err(addr) => { error!("unknown memory region at address {:>08x}", addr); return false; }
            }
            return true;
        }
        MIPS1_OP_LWC2 => // lwc2
        {
            let addr : u32 = rs_val.wrapping_add(inst.imm16sx);
            if ms.emu.debug { info!("lwc2 $c{}, 0x{:>x}({}) (=0x{:>x})", rt, imm, mips::REGSTR[rs], addr); }
            match mem::load_word(&mut ms.mem, addr) {
                Ok(data) => { gte::write_data(&mut ms.gte, inst.rt, data); }
                Err(addr) => { error!("unknown memory region at address {:>08x}", addr); return false; }
            }
            return true;
        }
        MIPS1_OP_SWC2 => // swc2
        {
            let addr : u32 = rs_val.wrapping_add(inst.imm16sx);
            if ms.emu.debug { info!("swc2 $c{}, 0x{:>x}({}) (=0x{:>x})", rt, imm, mips::REGSTR[rs], addr); }
            let data : u32 = gte::read_data(&ms.gte, inst.rt);
            match mem::store_word(&mut ms.mem, addr, data) {
                Ok(()) => { }
                Err(addr) => { error!("unknown memory region at address {:>08x}", addr); return false; }
            }
            return true;
        }
        _ =>
        {
            unknown_instruction!(inst.raw, "primary opcode");
        }
    }
}
