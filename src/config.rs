
#![allow(dead_code)]

// Physical memory map
// http://problemkaputt.de/psx-spx.htm#memorymap

pub const MAIN_RAM_ADDR   : u32 = 0x00000000;
pub const MAIN_RAM_SIZE   : u32 = 2048*1024;

pub const EXPANSION1_ADDR : u32 = 0x1f000000;
pub const EXPANSION1_SIZE : u32 = 8192*1024;

pub const SCRATCHPAD_ADDR : u32 = 0x1f800000;
pub const SCRATCHPAD_SIZE : u32 = 1*1024;

pub const IO_PORTS_ADDR   : u32 = 0x1f801000;
pub const IO_PORTS_SIZE   : u32 = 8*1024;

pub const EXPANSION2_ADDR : u32 = 0x1f802000;
pub const EXPANSION2_SIZE : u32 = 8*1024;

pub const EXPANSION3_ADDR : u32 = 0x1fa00000;
pub const EXPANSION3_SIZE : u32 = 2048*1024;

pub const BIOS_ADDR       : u32 = 0x1fc00000;
pub const BIOS_SIZE       : u32 = 512*1024;

// Cache control is outside the segmented map and is matched before masking
pub const CACHE_CTRL_ADDR : u32 = 0xfffe0000;
pub const CACHE_CTRL_SIZE : u32 = 512;

// kseg0/kseg1 mirrors collapse onto the low 512MB of physical space
pub const SEGMENT_MASK    : u32 = 0x1fffffff;
