#![allow(dead_code)]
extern crate log;
extern crate simplelog;

use simplelog::*;
use std::io;
use std::io::prelude::*;
use std::fs::File;
use std::process;
use log::{info, error};

use exrps1::exrps;
use clap::{arg, command, value_parser};
use std::path::PathBuf;

fn main() -> io::Result<()> {
    let matches = command!() // requires `cargo` feature
    .arg(arg!(
        -d --debug  "Turn instruction tracing on from the first cycle"
    ))
    .arg(
        arg!(
            -b --breakpoint [addr]  "Enable breakpoint (hexadecimal PC)"
        ).required(false)
        .value_parser(value_parser!(String)),
    )
    .arg(
        arg!(
            -r --run [insts]   "Specifies number of instruction execusions after break (in hexadecimal)"
        ).required(false)
        .value_parser(value_parser!(String)),
    )
    .arg(
        arg!(
            [FILE] "BIOS image file (exactly 512 KiB)"
        )
        .required(true)
        .value_parser(value_parser!(PathBuf)),
    )
    .get_matches();


    CombinedLogger::init(
        vec![
            TermLogger::new(LevelFilter::Debug, Config::default(), TerminalMode::Mixed, ColorChoice::Auto),
            WriteLogger::new(LevelFilter::Info, Config::default(), File::create("exrps1.log").unwrap()),
        ]
    ).unwrap();

    let mut bios : Vec<u8> = Vec::new();

    if let Some(file_path) = matches.get_one::<PathBuf>("FILE") {
        match File::open(file_path) {
            Ok(mut f) => {
                f.read_to_end(&mut bios)?;
            }
            _ => {
                error!("Can not open BIOS image file \"{}\"", file_path.display());
                process::exit(1);
            }
        }
    }

    if bios.len() != exrps::BIOS_SIZE as usize {
        error!("Error: BIOS image size must be exactly 512 KiB (got {} bytes)", bios.len());
        process::exit(1);
    }

    let mut ms = exrps::generate_machine_state(bios.into_boxed_slice());

    ms.emu.debug = matches.get_flag("debug");

    if let Some(breakpoint_str) = matches.get_one::<String>("breakpoint") {
        match u32::from_str_radix(breakpoint_str, 16) {
            Ok(addr) => {
                ms.emu.breakpoint = addr;
                info!("Breakpoint is enabled : 0x{:x}", addr);
            }
            _ => {
                error!("Breakpoint \"{}\" is incorrect and is ignored", breakpoint_str);
            }
        }
    }

    if let Some(run_str) = matches.get_one::<String>("run") {
        match u32::from_str_radix(run_str, 16) {
            Ok(ninstr) => {
                ms.emu.runafterbreak = ninstr as u64;
                info!("#instruction after break : 0x{:x}", ms.emu.runafterbreak);
            }
            _ => {
                error!("The specified number of instructions after break \"{}\" is incorrect and is ignored", run_str);
            }
        }
    }

    if !exrps::run_term(&mut ms) {
        process::exit(1);
    }

    Ok(())
}
