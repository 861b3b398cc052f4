use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::habits::Frequency;

#[derive(Parser)]
#[command(name = "habitual")]
#[command(about = "A habit tracker with streak and miss analytics")]
#[command(long_about = "habitual - a habit tracker for the command line

Track daily and weekly habits, check them off (or miss them), and get
streak and miss analytics over your history.

QUICK START:
  habitual signup --username dan --email dan@example.com --password ...
  habitual add --user dan \"Stretch\" --frequency daily
  habitual done 1                 Check off habit 1 for right now
  habitual report --user dan      Streaks and most-missed ranking

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  habitual <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output, or 'json' for
    /// machine-readable output suitable for scripting. When omitted, the
    /// configured default applies (pretty out of the box).
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a new user
    ///
    /// # Examples
    ///
    ///   habitual signup --username dan --email dan@example.com --password hunter2
    Signup(SignupArgs),

    /// Log in as an existing user
    ///
    /// Verifies the credentials and prints the session identity. Other
    /// commands scope to a user with --user; they do not require a
    /// standing login.
    Login(LoginArgs),

    /// Add a new habit
    ///
    /// # Examples
    ///
    ///   habitual add --user dan "Stretch" --frequency daily
    ///   habitual add --user dan "Review week" -f weekly -d "Sunday planning" --deadline "2024-12-31 22:00"
    #[command(alias = "a")]
    Add(AddArgs),

    /// List habits for a user
    ///
    /// Optionally filter by frequency period. An unknown period matches
    /// nothing rather than erroring.
    ///
    /// # Examples
    ///
    ///   habitual list --user dan
    ///   habitual list --user dan --period weekly
    #[command(alias = "ls")]
    List(ListArgs),

    /// Delete a habit and its logs
    #[command(alias = "rm")]
    Delete {
        /// Habit id to delete
        habit_id: i64,
    },

    /// Check off a habit (record a completion)
    ///
    /// # Examples
    ///
    ///   habitual done 1
    ///   habitual done 1 --at "2024-06-10 21:30" --note "after dinner"
    #[command(alias = "d")]
    Done(LogArgs),

    /// Record a miss for a habit
    ///
    /// Misses feed the most-missed ranking in reports; they never extend
    /// streaks.
    Miss(LogArgs),

    /// Show the current streak for a habit
    ///
    /// The unbroken run of consecutive days ending at the most recent
    /// check-off.
    Streak {
        /// Habit id to inspect
        habit_id: i64,
    },

    /// Analytics report for a user's habits
    ///
    /// Shows the habit with the longest historical streak, a ranking of
    /// the most missed habits, and the current streak per habit.
    ///
    /// # Examples
    ///
    ///   habitual report --user dan
    ///   habitual report --user dan -o json
    #[command(alias = "r")]
    Report {
        /// Username whose habits to analyze
        #[arg(long)]
        user: String,
    },

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   habitual completions bash > /etc/bash_completion.d/habitual
    ///   habitual completions zsh > ~/.zfunc/_habitual
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct SignupArgs {
    /// Desired username
    #[arg(long)]
    pub username: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Password (also readable from HABITUAL_PASSWORD)
    #[arg(long, env = "HABITUAL_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args)]
pub struct LoginArgs {
    /// Username
    #[arg(long)]
    pub username: String,

    /// Password (also readable from HABITUAL_PASSWORD)
    #[arg(long, env = "HABITUAL_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args)]
pub struct AddArgs {
    /// Username who owns the habit
    #[arg(long)]
    pub user: String,

    /// Habit name
    pub name: String,

    /// How often the habit is due
    #[arg(short, long, value_enum, default_value = "daily")]
    pub frequency: Frequency,

    /// Optional description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Optional deadline, e.g. "2024-12-31 22:00"
    #[arg(long)]
    pub deadline: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Username whose habits to list
    #[arg(long)]
    pub user: String,

    /// Only show habits with this frequency period (daily, weekly)
    #[arg(short, long)]
    pub period: Option<String>,
}

#[derive(Args)]
pub struct LogArgs {
    /// Habit id
    pub habit_id: i64,

    /// Timestamp for the event, e.g. "2024-06-10 21:30" (defaults to now)
    #[arg(long)]
    pub at: Option<String>,

    /// Optional free-text note
    #[arg(short, long)]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_done_with_at() {
        let cli = Cli::try_parse_from(["habitual", "done", "3", "--at", "2024-06-10 21:30"]).unwrap();
        match cli.command {
            Commands::Done(args) => {
                assert_eq!(args.habit_id, 3);
                assert_eq!(args.at.as_deref(), Some("2024-06-10 21:30"));
            },
            _ => panic!("expected done command"),
        }
    }

    #[test]
    fn test_parse_global_output_flag() {
        let cli = Cli::try_parse_from(["habitual", "list", "--user", "dan", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_output_flag_omitted_defers_to_config() {
        let cli = Cli::try_parse_from(["habitual", "list", "--user", "dan"]).unwrap();
        assert_eq!(cli.output, None);
    }

    #[test]
    fn test_parse_add_defaults_daily() {
        let cli = Cli::try_parse_from(["habitual", "add", "--user", "dan", "Stretch"]).unwrap();
        match cli.command {
            Commands::Add(args) => assert_eq!(args.frequency, Frequency::Daily),
            _ => panic!("expected add command"),
        }
    }
}
