#![allow(dead_code)]

// The reset vector sits in the kseg1 mirror of the BIOS ROM
pub const EXCEPT_VECT_RESET : u32 = 0xbfc00000;

pub const REGSTR : [&str; 32] = [
    //   0      1      2      3      4      5      6      7
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3",
    //   8      9     10     11     12     13     14     15
      "$t0", "$t1", "$t2", "$t3", "$t4", "$t5", "$t6", "$t7",
    //  16     17     18     19     20     21     22     23
      "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7",
    //  24     25     26     27     28     29     30     31
      "$t8", "$t9", "$k0", "$k1", "$gp", "$sp", "$fp", "$ra"
];
