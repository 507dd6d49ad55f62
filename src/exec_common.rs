
#[macro_export]
macro_rules! sign_ext16  { ( $x:expr ) => (( ($x as i16) as i32 ) as u32 ) }
#[macro_export]
macro_rules! zero_ext16  { ( $x:expr ) => (  ($x as u16) as u32 ) }
#[macro_export]
macro_rules! sign_ext8   { ( $x:expr ) => (( ($x as i8 ) as i32 ) as u32 ) }
#[macro_export]
macro_rules! zero_ext8   { ( $x:expr ) => (  ($x as u8 ) as u32 ) }

// GPR[0] is hardwired to zero; the write path is the one place that enforces it
#[macro_export]
macro_rules! set_gpr { ( $ms:expr, $idx:expr, $val:expr ) => (
    {
        let i : usize = $idx;
        if i != 0 {
            $ms.reg.r[i] = $val;
        }
    } ) }

/*
 * The load delay slot is a one-entry FIFO (load_reg, load_val).
 * Handlers capture their source operands first, then commit, then write,
 * so the instruction right after a load still reads the old register value
 * and its own write beats the commit. load_reg == 0 means the slot is empty
 * (a delayed write to $zero is dropped either way).
 */
#[macro_export]
macro_rules! commit_delayed_load { ( $ms:expr ) => (
    {
        let i : usize = $ms.reg.load_reg;
        if i != 0 {
            $ms.reg.r[i] = $ms.reg.load_val;
        }
        $ms.reg.load_reg = 0;
        $ms.reg.load_val = 0;
    } ) }
