use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use tparse::cli::args::{Cli, Commands};
use tparse::cli::commands;
use tparse::config::Config;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Runs before loading so a broken file can be replaced.
    if let Commands::Init { force } = &cli.command {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::default_path()?,
        };
        print_output(&commands::init(&path, *force, cli.output.unwrap_or_default())?);
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Parse(args) => commands::parse(&args, &config, format)?,
        Commands::Export(args) => commands::export(&args, &config, format)?,
        Commands::Url(args) => commands::url(&args, &config, format)?,
        Commands::Send(args) => commands::send(&args, &config, format)?,
        Commands::Completions { shell } => commands::completions(shell),
        Commands::Init { .. } => String::new(),
    };

    print_output(&output);
    Ok(())
}

fn print_output(output: &str) {
    if !output.is_empty() {
        println!("{output}");
    }
}
