use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttend
/// CLI application to track work location and office attendance with SQLite
#[derive(Parser)]
#[command(
    name = "rattend",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work-location CLI: track home/office days and check the office attendance quota using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Show the month grid with attendance figures
    Show {
        /// Month to display (YYYY-MM), defaults to the current month
        #[arg(long, short, value_name = "YYYY-MM")]
        month: Option<String>,

        /// Shift the displayed month by N months (may be negative)
        #[arg(long, value_name = "N", allow_hyphen_values = true)]
        shift: Option<i32>,

        #[arg(long = "summary", help = "Show only the attendance summary")]
        summary: bool,
    },

    /// Record where a day was worked, or adjust its minutes
    Set {
        /// Date of the day (YYYY-MM-DD)
        date: String,

        /// Work position (H = Home, O = Office, S = Sick/Vacation)
        #[arg(
            long = "pos",
            help = "Work position: H=Home, O=Office, S=Sick/Vacation"
        )]
        pos: Option<String>,

        /// Minutes worked that day (0..=1440)
        #[arg(long = "minutes", help = "Minutes worked that day")]
        minutes: Option<i32>,
    },

    /// Delete stored day records
    Clear {
        /// Clear a single month (YYYY-MM)
        #[arg(long, value_name = "YYYY-MM", conflicts_with = "all")]
        month: Option<String>,

        /// Clear every stored record
        #[arg(long)]
        all: bool,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Export a month grid
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Month to export (YYYY-MM), defaults to the current month
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
