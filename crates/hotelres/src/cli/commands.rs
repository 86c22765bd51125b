//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};

/// Reservation listing arguments.
#[derive(Debug, Args)]
pub struct ReservationsCommand {
    /// Keep rows where any column contains this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Keep reservations overlapping the window starting on this date
    #[arg(long, value_name = "DATE", requires = "to")]
    pub from: Option<NaiveDate>,

    /// End (exclusive) of the window
    #[arg(long, value_name = "DATE", requires = "from")]
    pub to: Option<NaiveDate>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Client listing arguments.
#[derive(Debug, Args)]
pub struct ClientsCommand {
    /// Only clients living in this city
    #[arg(long)]
    pub city: Option<String>,

    /// Keep rows where any column contains this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// List the cities clients live in instead of the clients
    #[arg(long, conflicts_with_all = ["city", "search"])]
    pub cities: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Availability check arguments.
#[derive(Debug, Args)]
pub struct AvailabilityCommand {
    /// First night (defaults to today)
    #[arg(short, long, value_name = "DATE")]
    pub arrival: Option<NaiveDate>,

    /// Day the room is vacated (defaults to the day after arrival)
    #[arg(short, long, value_name = "DATE")]
    pub departure: Option<NaiveDate>,

    /// Only rooms of this type (e.g. "Double")
    #[arg(short = 't', long, value_name = "NAME")]
    pub room_type: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// New client arguments.
#[derive(Debug, Args)]
pub struct AddClientCommand {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Street address
    #[arg(long)]
    pub address: String,

    /// City
    #[arg(long)]
    pub city: String,

    /// Postal code
    #[arg(long)]
    pub postal_code: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Phone number, digits only
    #[arg(long)]
    pub phone: String,

    /// Output the stored client as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// New reservation arguments.
#[derive(Debug, Args)]
pub struct BookCommand {
    /// Client id
    #[arg(long)]
    pub client: i64,

    /// Room number
    #[arg(long)]
    pub room: i64,

    /// Hotel id, when the room number exists in several hotels
    #[arg(long)]
    pub hotel: Option<i64>,

    /// First night
    #[arg(short, long, value_name = "DATE")]
    pub arrival: NaiveDate,

    /// Day the room is vacated
    #[arg(short, long, value_name = "DATE")]
    pub departure: NaiveDate,

    /// Output the receipt as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Arguments shared by the catalog listings.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Review commands.
#[derive(Debug, Subcommand)]
pub enum ReviewsCommand {
    /// List reviews, newest first
    List(ListCommand),

    /// Record a review
    Add {
        /// Client id
        #[arg(long)]
        client: i64,

        /// Score from 1 to 5
        #[arg(long)]
        rating: u8,

        /// Free-form comment
        #[arg(long, default_value = "")]
        comment: String,

        /// Day of the review (defaults to today)
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,
    },
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Database commands.
#[derive(Debug, Subcommand)]
pub enum DbCommand {
    /// Create the database and its schema
    Init,

    /// Load the demo hotels, rooms, clients and reservations
    Seed,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated values, one row per line
    Plain,
    /// Aligned table with a header
    #[default]
    Table,
    /// JSON array
    Json,
}
