use std::fs;

use abacus::run_script;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// abacus runs a keypad calculator from a keystroke script such as
/// `12 + 3 * 4 =` and prints the two display lines.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells abacus to read the script from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Logs every state change of the calculator to stderr.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match run_script(&script) {
        Ok(screen) => println!("{screen}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
