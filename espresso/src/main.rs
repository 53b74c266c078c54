//! Toy EspressoScript interpreter.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use espresso_lib::config::Config;
use espresso_lib::reporter::Diagnostics;
use espresso_lib::{execute, read_source, Context};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "espresso", about = "EspressoScript interpreter")]
struct Args {
    /// Path to the script to execute.
    file: Option<PathBuf>,

    /// Report progress and timings on the standard error.
    #[arg(short, long)]
    verbose: bool,

    /// Report the constructs that were silently ignored.
    #[arg(short = 'W', long)]
    warnings: bool,
}

fn main() {
    let args = Args::parse();

    let Some(path) = args.file else {
        println!("{}", Args::command().render_usage());
        return;
    };

    let input = match read_source(&path) {
        Ok(input) => input,
        Err(err) => {
            if let Err(err) = Diagnostics::from(err).display() {
                eprintln!("{err}");
            }
            return;
        }
    };

    let filename = path.display().to_string();
    let config = Config {
        input: &input,
        filename: Some(&filename),
        warnings: args.warnings,
        verbose: args.verbose,
    };
    let ctx = Context::new(config);

    let result = execute(&ctx).map(|stdout| print!("{stdout}"));
    let displayed = match result {
        Ok(()) => ctx.reporter.display(),
        Err(err) => Diagnostics::from(err).display(),
    };
    if let Err(err) = displayed {
        eprintln!("{err}");
    }
}
