//! `bintext`: encode stdin to text, or decode and validate text from stdin.
//!
//! Usage:
//!   bintext <encode|decode|validate> [--type base64] [--log-level <level>]

use bintext_encode::cli::{parse_args, run, USAGE};
use std::io;

fn main() {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            std::process::exit(e.exit_code());
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(options.log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&options, io::stdin().lock(), io::stdout().lock()) {
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}
