//! Engine binary: reads CECP commands on stdin, writes replies on stdout.

use std::env;
use std::process::ExitCode;

use moxie::driver::{self, Strategy};

fn main() -> ExitCode {
    let strategy = match env::args().nth(1) {
        None => Strategy::Best,
        Some(arg) => match arg.parse() {
            Ok(strategy) => strategy,
            Err(e) => {
                eprintln!("{e}; expected one of: best, first, resign");
                return ExitCode::from(2);
            }
        },
    };

    driver::run(strategy);
    ExitCode::SUCCESS
}
