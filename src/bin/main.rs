#![allow(non_snake_case)]
use std::process::exit;

use quad_check::cmd;
use clap::Parser;

fn main() {
    let cmd = cmd::Cmd::parse();
    exit(match cmd.main() {
        Ok(..) => 0,
        Err(e) => {
            e.print_error();
            e.exit_code()
        }
    })
}
