//! Passmith CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::debug;

use passmith::VERSION;
use passmith::cli::args::PassmithArgs;
use passmith::cli::commands::execute_command;

fn main() {
    let args = PassmithArgs::parse();

    Builder::new()
        .filter_level(args.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    debug!("passmith {VERSION}, {} worker threads available", num_cpus::get());

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        if e.is_validation() {
            eprintln!("Run 'passmith --help' for the accepted input formats.");
        }
        process::exit(e.exit_code());
    }
}
