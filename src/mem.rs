use crate::config;

/*
 * Every region the bus knows about is a plain byte buffer owned here.
 * The BIOS buffer is handed in at construction and must be exactly 512 KiB;
 * everything else starts zeroed. All multi-byte accesses are little-endian
 * and there is no alignment requirement on any of them.
 */
pub struct MemRegion {
    pub main_ram   : Box<[u8]>,
    pub expansion1 : Box<[u8]>,
    pub scratchpad : Box<[u8]>,
    pub io_ports   : Box<[u8]>,
    pub expansion2 : Box<[u8]>,
    pub expansion3 : Box<[u8]>,
    pub bios       : Box<[u8]>,
    pub cache_ctrl : Box<[u8]>,
}

impl MemRegion {
    pub fn new(bios: Box<[u8]>) -> Self {
        assert!(bios.len() == config::BIOS_SIZE as usize, "BIOS image must be exactly 512 KiB");

        Self {
            main_ram:   vec![0u8; config::MAIN_RAM_SIZE   as usize].into_boxed_slice(),
            expansion1: vec![0u8; config::EXPANSION1_SIZE as usize].into_boxed_slice(),
            scratchpad: vec![0u8; config::SCRATCHPAD_SIZE as usize].into_boxed_slice(),
            io_ports:   vec![0u8; config::IO_PORTS_SIZE   as usize].into_boxed_slice(),
            expansion2: vec![0u8; config::EXPANSION2_SIZE as usize].into_boxed_slice(),
            expansion3: vec![0u8; config::EXPANSION3_SIZE as usize].into_boxed_slice(),
            bios,
            cache_ctrl: vec![0u8; config::CACHE_CTRL_SIZE as usize].into_boxed_slice(),
        }
    }
}

// phrased so the arithmetic cannot wrap for addresses near the top of the map
fn in_range(value : u32, width : u32, start : u32, size : u32) -> bool {
    value >= start && value - start <= size - width
}

/*
 * Maps a virtual address to (offset, region buffer).
 * Cache control lives above the segmented map and is matched unmasked;
 * everything else is matched after folding kseg0/kseg1 mirrors away.
 * An address outside every region is an error carrying the address itself;
 * the interpreter treats it as fatal.
 */
fn map(mem : &mut MemRegion, addr : u32, width : u32) -> Result<(usize, &mut [u8]), u32> {
    if in_range(addr, width, config::CACHE_CTRL_ADDR, config::CACHE_CTRL_SIZE) {
        return Ok(((addr - config::CACHE_CTRL_ADDR) as usize, &mut mem.cache_ctrl[..]));
    }

    let paddr : u32 = addr & config::SEGMENT_MASK;

    if in_range(paddr, width, config::MAIN_RAM_ADDR, config::MAIN_RAM_SIZE) {
        return Ok(((paddr - config::MAIN_RAM_ADDR) as usize, &mut mem.main_ram[..]));
    }
    if in_range(paddr, width, config::EXPANSION1_ADDR, config::EXPANSION1_SIZE) {
        return Ok(((paddr - config::EXPANSION1_ADDR) as usize, &mut mem.expansion1[..]));
    }
    if in_range(paddr, width, config::SCRATCHPAD_ADDR, config::SCRATCHPAD_SIZE) {
        return Ok(((paddr - config::SCRATCHPAD_ADDR) as usize, &mut mem.scratchpad[..]));
    }
    if in_range(paddr, width, config::IO_PORTS_ADDR, config::IO_PORTS_SIZE) {
        return Ok(((paddr - config::IO_PORTS_ADDR) as usize, &mut mem.io_ports[..]));
    }
    if in_range(paddr, width, config::EXPANSION2_ADDR, config::EXPANSION2_SIZE) {
        return Ok(((paddr - config::EXPANSION2_ADDR) as usize, &mut mem.expansion2[..]));
    }
    if in_range(paddr, width, config::EXPANSION3_ADDR, config::EXPANSION3_SIZE) {
        return Ok(((paddr - config::EXPANSION3_ADDR) as usize, &mut mem.expansion3[..]));
    }
    if in_range(paddr, width, config::BIOS_ADDR, config::BIOS_SIZE) {
        return Ok(((paddr - config::BIOS_ADDR) as usize, &mut mem.bios[..]));
    }

    Err(addr)
}

fn is_bios(addr : u32) -> bool {
    in_range(addr & config::SEGMENT_MASK, 1, config::BIOS_ADDR, config::BIOS_SIZE)
}

pub fn load_byte(mem : &mut MemRegion, addr : u32) -> Result<u32, u32> {
    let (offset, data) = map(mem, addr, 1)?;
    Ok(data[offset] as u32)
}

pub fn load_halfword(mem : &mut MemRegion, addr : u32) -> Result<u32, u32> {
    let (offset, data) = map(mem, addr, 2)?;
    Ok(((data[offset + 1] as u32) << 8) |
        (data[offset    ] as u32))
}

pub fn load_word(mem : &mut MemRegion, addr : u32) -> Result<u32, u32> {
    let (offset, data) = map(mem, addr, 4)?;
    Ok(((data[offset + 3] as u32) << 24) |
       ((data[offset + 2] as u32) << 16) |
       ((data[offset + 1] as u32) <<  8) |
        (data[offset    ] as u32))
}

pub fn store_byte(mem : &mut MemRegion, addr : u32, data : u32) -> Result<(), u32> {
    // ROM: the write is accepted and dropped
    if is_bios(addr) {
        return Ok(());
    }
    let (offset, region) = map(mem, addr, 1)?;
    region[offset] = data as u8;
    Ok(())
}

pub fn store_halfword(mem : &mut MemRegion, addr : u32, data : u32) -> Result<(), u32> {
    if is_bios(addr) {
        return Ok(());
    }
    let (offset, region) = map(mem, addr, 2)?;
    region[offset + 1] = (data >> 8) as u8;
    region[offset    ] =  data       as u8;
    Ok(())
}

pub fn store_word(mem : &mut MemRegion, addr : u32, data : u32) -> Result<(), u32> {
    if is_bios(addr) {
        return Ok(());
    }
    let (offset, region) = map(mem, addr, 4)?;
    region[offset + 3] = (data >> 24) as u8;
    region[offset + 2] = (data >> 16) as u8;
    region[offset + 1] = (data >>  8) as u8;
    region[offset    ] =  data        as u8;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    fn empty_bus() -> MemRegion {
        MemRegion::new(vec![0u8; config::BIOS_SIZE as usize].into_boxed_slice())
    }

    #[test]
    fn little_endian_composition() {
        let mut mem = empty_bus();

        // kseg0 mirror of main RAM; the BIOS region itself rejects stores
        let addr : u32 = 0x80001234;

        store_word(&mut mem, addr, 0xabcd1234).unwrap();
        store_halfword(&mut mem, addr + 4, 0x5a51).unwrap();
        store_byte(&mut mem, addr + 6, 0xea).unwrap();

        assert_eq!(load_word(&mut mem, addr).unwrap(), 0xabcd1234);
        assert_eq!(load_halfword(&mut mem, addr + 4).unwrap(), 0x5a51);
        assert_eq!(load_byte(&mut mem, addr + 6).unwrap(), 0xea);

        // misaligned accesses just pick up the bytes in between
        assert_eq!(load_word(&mut mem, addr + 1).unwrap(), 0x51abcd12);
        assert_eq!(load_halfword(&mut mem, addr + 5).unwrap(), 0xea5a);
        assert_eq!(load_byte(&mut mem, addr).unwrap(), 0x34);
    }

    #[test]
    fn byte_lanes_of_a_word() {
        let mut mem = empty_bus();
        let addr : u32 = 0x00000100;

        for k in 0..4 {
            store_byte(&mut mem, addr + k, 0xa0 + k).unwrap();
        }
        assert_eq!(load_word(&mut mem, addr).unwrap(), 0xa3a2a1a0);
    }

    #[test]
    fn round_trip_every_region() {
        let mut mem = empty_bus();

        for &addr in &[
            0x00000000u32, // main RAM
            0x1f000000,    // expansion 1
            0x1f800000,    // scratchpad
            0x1f801010,    // I/O ports
            0x1f802000,    // expansion 2
            0x1fa00000,    // expansion 3
            0xfffe0130,    // cache control
        ] {
            store_word(&mut mem, addr, 0xdeadbeef).unwrap();
            assert_eq!(load_word(&mut mem, addr).unwrap(), 0xdeadbeef);
            store_halfword(&mut mem, addr, 0x1234).unwrap();
            assert_eq!(load_halfword(&mut mem, addr).unwrap(), 0x1234);
            store_byte(&mut mem, addr, 0x56).unwrap();
            assert_eq!(load_byte(&mut mem, addr).unwrap(), 0x56);
        }
    }

    #[test]
    fn segment_mirrors_reach_the_same_ram() {
        let mut mem = empty_bus();

        store_word(&mut mem, 0x00000400, 0x11223344).unwrap();
        assert_eq!(load_word(&mut mem, 0x80000400).unwrap(), 0x11223344);
        assert_eq!(load_word(&mut mem, 0xa0000400).unwrap(), 0x11223344);
    }

    #[test]
    fn bios_reads_back_and_refuses_stores() {
        let mut bios = vec![0u8; config::BIOS_SIZE as usize];
        bios[0] = 0x3c;
        bios[1] = 0x08;
        let mut mem = MemRegion::new(bios.into_boxed_slice());

        assert_eq!(load_halfword(&mut mem, 0xbfc00000).unwrap(), 0x083c);

        store_word(&mut mem, 0xbfc00000, 0xffffffff).unwrap();
        assert_eq!(load_halfword(&mut mem, 0xbfc00000).unwrap(), 0x083c);
    }

    #[test]
    fn unmapped_address_reports_itself() {
        let mut mem = empty_bus();

        assert_eq!(load_word(&mut mem, 0x1f900000), Err(0x1f900000));
        assert_eq!(store_word(&mut mem, 0x40000000, 0), Err(0x40000000));
    }
}
