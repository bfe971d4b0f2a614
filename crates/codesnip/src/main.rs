//! `codesnip <file> [N-M] [options]`

use std::path::PathBuf;

use codesnip::{init_tracing, parse_args, run, Command, Outcome, SnipError, FONT_ENV_VAR, USAGE};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let font_env = std::env::var_os(FONT_ENV_VAR).map(PathBuf::from);

    let config = match parse_args(&args, font_env) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Ok(Command::Snip(config)) => config,
        Err(err) => fail(&err),
    };

    match run(&config) {
        Ok(Outcome::Rendered {
            path,
            width,
            height,
        }) => println!("wrote {} ({width}x{height})", path.display()),
        Ok(Outcome::Tokens(listing)) => print!("{listing}"),
        Err(err) => fail(&err),
    }
}

fn fail(err: &SnipError) -> ! {
    eprintln!("error: {err}");
    if err.is_usage() {
        eprintln!();
        eprintln!("{USAGE}");
    }
    std::process::exit(1);
}
