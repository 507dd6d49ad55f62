use exrps1::exrps;
use exrps1::mainloop;
use exrps1::mem;
use exrps1::procstate::MachineState;

const BIOS_BASE : u32 = 0xbfc00000;

// Builds a machine whose BIOS image starts with the given program words.
fn machine_with_program(words : &[u32]) -> MachineState {
    let mut bios = vec![0u8; exrps::BIOS_SIZE as usize];
    for (i, word) in words.iter().enumerate() {
        bios[i * 4..i * 4 + 4].copy_from_slice(&word.to_le_bytes());
    }
    exrps::generate_machine_state(bios.into_boxed_slice())
}

fn step(ms : &mut MachineState, n : usize) {
    for _ in 0..n {
        assert!(mainloop::cycle(ms));
    }
}

fn rtype(funct : u32, rs : u32, rt : u32, rd : u32, shamt : u32) -> u32 {
    (rs << 21) | (rt << 16) | (rd << 11) | (shamt << 6) | funct
}

fn itype(op : u32, rs : u32, rt : u32, imm : u32) -> u32 {
    (op << 26) | (rs << 21) | (rt << 16) | (imm & 0xffff)
}

fn lui(rt : u32, imm : u32) -> u32 { itype(0x0f, 0, rt, imm) }
fn ori(rt : u32, rs : u32, imm : u32) -> u32 { itype(0x0d, rs, rt, imm) }
fn addiu(rt : u32, rs : u32, imm : u32) -> u32 { itype(0x09, rs, rt, imm) }
fn lw(rt : u32, rs : u32, imm : u32) -> u32 { itype(0x23, rs, rt, imm) }
fn sw(rt : u32, rs : u32, imm : u32) -> u32 { itype(0x2b, rs, rt, imm) }
fn beq(rs : u32, rt : u32, off : u32) -> u32 { itype(0x04, rs, rt, off) }
fn or(rd : u32, rs : u32, rt : u32) -> u32 { rtype(0x25, rs, rt, rd, 0) }
fn jr(rs : u32) -> u32 { rtype(0x08, rs, 0, 0, 0) }
fn jal(addr : u32) -> u32 { (0x03 << 26) | ((addr >> 2) & 0x03ffffff) }
fn mtc2(rt : u32, rd : u32) -> u32 { (0x12 << 26) | (0x04 << 21) | (rt << 16) | (rd << 11) }
fn mfc2(rt : u32, rd : u32) -> u32 { (0x12 << 26) | (0x00 << 21) | (rt << 16) | (rd << 11) }
fn nop() -> u32 { 0 }

#[test]
fn lui_ori_sw_hits_io_ports() {
    let mut ms = machine_with_program(&[
        lui(1, 0x1f80),
        ori(1, 1, 0x1010),
        addiu(2, 0, 0x42),
        sw(2, 1, 0),
    ]);
    step(&mut ms, 4);

    assert_eq!(mem::load_byte(&mut ms.mem, 0x1f801010).unwrap(), 0x42);
    assert_eq!(mem::load_word(&mut ms.mem, 0x1f801010).unwrap(), 0x42);
}

#[test]
fn branch_delay_slot_runs_once() {
    let mut ms = machine_with_program(&[
        addiu(1, 0, 1),
        beq(0, 0, 2),      // taken; target = this + 4 + (2 << 2)
        addiu(1, 1, 1),    // delay slot, executes
        addiu(1, 1, 100),  // skipped
        addiu(4, 0, 7),    // branch target
    ]);
    step(&mut ms, 4);

    assert_eq!(ms.reg.r[1], 2);
    assert_eq!(ms.reg.r[4], 7);
}

#[test]
fn branch_not_taken_falls_through() {
    let mut ms = machine_with_program(&[
        addiu(1, 0, 1),
        itype(0x05, 0, 0, 2), // bne $zero, $zero: never taken
        addiu(1, 1, 1),
        addiu(1, 1, 100),
    ]);
    step(&mut ms, 4);

    assert_eq!(ms.reg.r[1], 102);
}

#[test]
fn load_delay_is_one_instruction() {
    let mut ms = machine_with_program(&[
        lui(2, 0xbfc0),
        ori(2, 2, 0x0100),
        addiu(1, 0, 55),
        lw(1, 2, 0),
        or(3, 1, 0),       // still sees the pre-load value
        or(4, 1, 0),       // sees the loaded value
    ]);
    ms.mem.bios[0x100..0x104].copy_from_slice(&0xcafebabeu32.to_le_bytes());
    step(&mut ms, 6);

    assert_eq!(ms.reg.r[3], 55);
    assert_eq!(ms.reg.r[4], 0xcafebabe);
    assert_eq!(ms.reg.r[1], 0xcafebabe);
}

#[test]
fn write_in_load_delay_slot_wins() {
    let mut ms = machine_with_program(&[
        lui(2, 0xbfc0),
        lw(1, 2, 0x0100),
        addiu(1, 0, 9),    // overwrites the in-flight load
        nop(),
    ]);
    ms.mem.bios[0x100..0x104].copy_from_slice(&0xcafebabeu32.to_le_bytes());
    step(&mut ms, 4);

    assert_eq!(ms.reg.r[1], 9);
}

#[test]
fn jal_links_past_the_delay_slot() {
    let mut ms = machine_with_program(&[
        jal(BIOS_BASE + 0x0c),
        nop(),
        addiu(6, 0, 1),    // return point
        addiu(5, 0, 3),    // jump target
        jr(31),
        nop(),
    ]);
    step(&mut ms, 6);

    assert_eq!(ms.reg.r[31], BIOS_BASE + 8);
    assert_eq!(ms.reg.r[5], 3);
    assert_eq!(ms.reg.r[6], 1);
}

#[test]
fn bltzal_links_even_when_not_taken() {
    let mut ms = machine_with_program(&[
        addiu(1, 0, 5),
        itype(0x01, 1, 0x10, 4), // bltzal on a positive value
        nop(),
    ]);
    step(&mut ms, 3);

    assert_eq!(ms.reg.r[31], BIOS_BASE + 4 + 8);
    // fall-through: the branch was not taken
    assert_eq!(ms.reg.pc, BIOS_BASE + 12);
}

#[test]
fn gpr0_reads_zero_after_every_write_attempt() {
    let mut ms = machine_with_program(&[
        addiu(0, 0, 5),
        lui(0, 0x1234),
        or(0, 1, 2),
        lui(2, 0xbfc0),
        lw(0, 2, 0),       // delayed write into $zero is dropped too
        nop(),
        nop(),
    ]);
    for _ in 0..7 {
        assert!(mainloop::cycle(&mut ms));
        assert_eq!(ms.reg.r[0], 0);
    }
}

#[test]
fn sra_is_arithmetic_srl_is_logical() {
    let mut ms = machine_with_program(&[
        lui(1, 0x8000),
        rtype(0x03, 0, 1, 2, 4), // sra
        rtype(0x02, 0, 1, 3, 4), // srl
    ]);
    step(&mut ms, 3);

    assert_eq!(ms.reg.r[2], 0xf8000000);
    assert_eq!(ms.reg.r[3], 0x08000000);
}

#[test]
fn sltiu_sign_extends_then_compares_unsigned() {
    let mut ms = machine_with_program(&[
        addiu(1, 0, 5),
        itype(0x0b, 1, 2, 0xffff), // sltiu $2, $1, -1: 5 < 0xffffffff
        itype(0x0a, 1, 3, 0xffff), // slti  $3, $1, -1: signed, false
    ]);
    step(&mut ms, 3);

    assert_eq!(ms.reg.r[2], 1);
    assert_eq!(ms.reg.r[3], 0);
}

#[test]
fn mult_and_div_results() {
    let mut ms = machine_with_program(&[
        lui(1, 0x0001),            // 65536
        addiu(2, 0, 3),
        rtype(0x18, 1, 2, 0, 0),   // mult
    ]);
    step(&mut ms, 3);
    assert_eq!(ms.reg.lo, 196608);
    assert_eq!(ms.reg.hi, 0);

    let mut ms = machine_with_program(&[
        lui(1, 0x0001),
        addiu(3, 0, 0xffff),       // -1
        rtype(0x18, 1, 3, 0, 0),   // mult: -65536
    ]);
    step(&mut ms, 3);
    assert_eq!(ms.reg.lo, 0xffff0000);
    assert_eq!(ms.reg.hi, 0xffffffff);

    let mut ms = machine_with_program(&[
        addiu(4, 0, 7),
        addiu(5, 0, 2),
        rtype(0x1a, 4, 5, 0, 0),   // div: 7 / 2
    ]);
    step(&mut ms, 3);
    assert_eq!(ms.reg.lo, 3);
    assert_eq!(ms.reg.hi, 1);
}

#[test]
fn division_by_zero_is_defined() {
    let mut ms = machine_with_program(&[
        addiu(4, 0, 7),
        rtype(0x1a, 4, 0, 0, 0),   // div by zero, positive dividend
    ]);
    step(&mut ms, 2);
    assert_eq!(ms.reg.lo, 0xffffffff);
    assert_eq!(ms.reg.hi, 7);

    let mut ms = machine_with_program(&[
        addiu(4, 0, 0xffff),       // -1
        rtype(0x1a, 4, 0, 0, 0),   // div by zero, negative dividend
    ]);
    step(&mut ms, 2);
    assert_eq!(ms.reg.lo, 1);
    assert_eq!(ms.reg.hi, 0xffffffff);

    let mut ms = machine_with_program(&[
        addiu(4, 0, 7),
        rtype(0x1b, 4, 0, 0, 0),   // divu by zero
    ]);
    step(&mut ms, 2);
    assert_eq!(ms.reg.lo, 0xffffffff);
    assert_eq!(ms.reg.hi, 7);
}

#[test]
fn add_overflow_is_fatal() {
    let mut ms = machine_with_program(&[
        lui(1, 0x7fff),
        ori(1, 1, 0xffff),         // 0x7fffffff
        itype(0x08, 1, 2, 1),      // addi: overflows
    ]);
    step(&mut ms, 2);
    assert!(!mainloop::cycle(&mut ms));
}

#[test]
fn unknown_opcode_is_fatal() {
    let mut ms = machine_with_program(&[0xfc000000]);
    assert!(!mainloop::cycle(&mut ms));
}

#[test]
fn unmapped_address_is_fatal() {
    let mut ms = machine_with_program(&[
        lui(1, 0x1f90),    // hole between expansion 2 and expansion 3
        lw(2, 1, 0),
    ]);
    step(&mut ms, 1);
    assert!(!mainloop::cycle(&mut ms));
}

#[test]
fn lwr_lwl_assemble_an_unaligned_word() {
    let mut ms = machine_with_program(&[
        lui(2, 0xbfc0),
        itype(0x26, 2, 1, 0x101),  // lwr
        nop(),
        itype(0x22, 2, 1, 0x104),  // lwl
        nop(),
        nop(),
    ]);
    ms.mem.bios[0x100..0x104].copy_from_slice(&0x44332211u32.to_le_bytes());
    ms.mem.bios[0x104..0x108].copy_from_slice(&0x88776655u32.to_le_bytes());
    step(&mut ms, 6);

    // bytes 0x101..0x105, little-endian
    assert_eq!(ms.reg.r[1], 0x55443322);
}

#[test]
fn swr_swl_store_an_unaligned_word() {
    let mut ms = machine_with_program(&[
        lui(2, 0x8000),
        lui(1, 0xaabb),
        ori(1, 1, 0xccdd),
        itype(0x2e, 2, 1, 0x201),  // swr
        itype(0x2a, 2, 1, 0x204),  // swl
    ]);
    step(&mut ms, 5);

    assert_eq!(mem::load_byte(&mut ms.mem, 0x80000201).unwrap(), 0xdd);
    assert_eq!(mem::load_byte(&mut ms.mem, 0x80000202).unwrap(), 0xcc);
    assert_eq!(mem::load_byte(&mut ms.mem, 0x80000203).unwrap(), 0xbb);
    assert_eq!(mem::load_byte(&mut ms.mem, 0x80000204).unwrap(), 0xaa);
    assert_eq!(mem::load_word(&mut ms.mem, 0x80000201).unwrap(), 0xaabbccdd);
}

#[test]
fn nclip_through_coprocessor_moves() {
    let mut ms = machine_with_program(&[
        addiu(1, 0, 10),
        lui(2, 0x000a),
        mtc2(0, 12),               // SXY0 = (0, 0)
        mtc2(1, 13),               // SXY1 = (10, 0)
        mtc2(2, 14),               // SXY2 = (0, 10)
        0x4a000006,                // cop2 NCLIP
        mfc2(3, 24),               // MAC0
        nop(),
    ]);
    step(&mut ms, 8);

    assert_eq!(ms.gte.mac0, 100);
    assert_eq!(ms.reg.r[3], 100);
}

#[test]
fn mfc2_honors_the_load_delay() {
    let mut ms = machine_with_program(&[
        addiu(1, 0, 77),
        mtc2(1, 24),               // MAC0 = 77
        addiu(3, 0, 5),
        mfc2(3, 24),
        or(4, 3, 0),               // load still in flight
        or(5, 3, 0),
    ]);
    step(&mut ms, 6);

    assert_eq!(ms.reg.r[4], 5);
    assert_eq!(ms.reg.r[5], 77);
}

#[test]
fn stores_to_bios_are_discarded() {
    let mut ms = machine_with_program(&[
        lui(1, 0xbfc0),
        addiu(2, 0, 0x42),
        sw(2, 1, 0x0200),
    ]);
    step(&mut ms, 3);

    assert_eq!(mem::load_word(&mut ms.mem, 0xbfc00200).unwrap(), 0);
}

#[test]
fn breakpoint_counter_bounds_the_run() {
    // tight loop; the break counter plus run-after-break count ends it cleanly
    let mut ms = machine_with_program(&[
        (0x02 << 26) | ((BIOS_BASE >> 2) & 0x03ffffff), // j back to start
        nop(),
    ]);
    ms.emu.breakcounter = 3;
    ms.emu.runafterbreak = 2;

    assert!(exrps::run_term(&mut ms));
    assert!(ms.emu.nexec_insts >= 5);
}
