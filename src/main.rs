use clap::Parser;

use chronon::cli::{ChrononCli, Command};
use chronon::commands;

fn main() -> anyhow::Result<()> {
    let args = ChrononCli::parse();

    match args.cmd {
        Command::Configure { p1, p2 } => commands::configure::run(p1, p2, &args.config),
        Command::Encode {
            message,
            base64,
            start,
            out,
        } => commands::encode::run(&message, base64, start, out.as_deref(), &args.config),
        Command::Decode { times, base64 } => commands::decode::run(&times, base64, &args.config),
        Command::Primes => {
            commands::primes::run();
            Ok(())
        }
    }
}
