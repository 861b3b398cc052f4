use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use habitual::cli::args::{Cli, Commands};
use habitual::cli::commands;
use habitual::config::{ColorSetting, Config};
use habitual::error::HabitError;
use habitual::storage::Database;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), HabitError> {
    let cli = Cli::parse();

    // Completions need neither config nor a database.
    if let Commands::Completions { shell } = &cli.command {
        print!("{}", commands::completions(*shell));
        return Ok(());
    }

    let config = Config::load()?;
    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }
    let format = cli.output.unwrap_or(config.general.default_output);

    let db = Database::open()?;

    let output = match cli.command {
        Commands::Signup(args) => commands::signup(&db, &args, format)?,
        Commands::Login(args) => commands::login(&db, &args, format)?,
        Commands::Add(args) => commands::add(&db, &args, format)?,
        Commands::List(args) => commands::list(&db, &args, format)?,
        Commands::Delete { habit_id } => commands::delete(&db, habit_id, format)?,
        Commands::Done(args) => commands::done(&db, &args, format)?,
        Commands::Miss(args) => commands::miss(&db, &args, format)?,
        Commands::Streak { habit_id } => commands::streak(&db, habit_id, format)?,
        Commands::Report { user } => commands::report(&db, &config, &user, format)?,
        Commands::Completions { .. } => String::new(), // handled above
    };

    println!("{output}");
    Ok(())
}
