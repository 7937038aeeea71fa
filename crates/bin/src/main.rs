use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use commands::{load_document, read, save_document, write};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pathdoc=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(cli, &mut out) {
        Ok(code) => code,
        Err(e) => {
            let _ = out.flush();
            eprintln!("pathdoc: {e}");
            ExitCode::from(2)
        }
    }
}

/// Runs one command. Exit status 1 means the path was not found.
fn run(cli: Cli, out: &mut dyn Write) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let options = cli.options.to_options();

    let found = match cli.command {
        Commands::Get(args) => {
            let doc = load_document(&args.target.file, options)?;
            read::get(
                &doc,
                &args.target.path,
                args.default.as_deref(),
                cli.format,
                out,
            )?
        }
        Commands::Len(args) => {
            let doc = load_document(&args.file, options)?;
            read::len(&doc, &args.path, out)?
        }
        Commands::Contains(args) => {
            let doc = load_document(&args.file, options)?;
            read::contains(&doc, &args.path)
        }
        Commands::Set(args) => {
            let mut doc = load_document(&args.target.file, options)?;
            write::set(&mut doc, &args.target.path, &args.value, args.string)?;
            save_document(&doc, &args.target.file, args.in_place, out)?;
            true
        }
        Commands::Append(args) => {
            let mut doc = load_document(&args.target.file, options)?;
            write::append(&mut doc, &args.target.path, &args.value, args.string)?;
            save_document(&doc, &args.target.file, args.in_place, out)?;
            true
        }
        Commands::Remove(args) => {
            let mut doc = load_document(&args.target.file, options)?;
            write::remove(&mut doc, &args.target.path)?;
            save_document(&doc, &args.target.file, args.in_place, out)?;
            true
        }
    };

    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
