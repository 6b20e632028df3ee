use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "daily-kit")]
#[command(about = "Small everyday helpers: date math, lottery tickets, phones and birthdays")]
pub struct CliConfig {
    /// Path to an optional TOML settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Days between DATE (YYYY-MM-DD) and today
    DaysSince {
        #[arg(allow_hyphen_values = true)]
        date: String,
    },
    /// Draw QUANTITY unique numbers from [MIN, MAX]
    Ticket {
        #[arg(allow_hyphen_values = true)]
        min: String,
        #[arg(allow_hyphen_values = true)]
        max: String,
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },
    /// Normalize one or more phone numbers
    Phone {
        #[arg(required = true, allow_hyphen_values = true)]
        phones: Vec<String>,
    },
    /// List greetings for birthdays in the coming week
    Birthdays {
        /// Users file (.json or .csv)
        users: PathBuf,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },
}
