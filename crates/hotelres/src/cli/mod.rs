//! Command-line interface for hotelres.
//!
//! This module provides the CLI structure and output rendering for the
//! `hotelres` binary. Each subcommand matches one desk task: listing
//! reservations or clients, checking availability, registering a client,
//! booking a room.

mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddClientCommand, AvailabilityCommand, BookCommand, ClientsCommand, ConfigCommand, DbCommand,
    ListCommand, OutputFormat, ReservationsCommand, ReviewsCommand, StatusCommand,
};

/// hotelres - Reservation desk for a hotel chain
///
/// Search reservations and clients, check which rooms are free for a stay,
/// register clients and book rooms without double-booking.
#[derive(Debug, Parser)]
#[command(name = "hotelres")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Database file to use instead of the configured one
    #[arg(long, global = true, value_name = "FILE")]
    pub database: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List reservations
    Reservations(ReservationsCommand),

    /// List clients
    Clients(ClientsCommand),

    /// Show rooms free for a stay
    Availability(AvailabilityCommand),

    /// Register a new client
    AddClient(AddClientCommand),

    /// Book a room for a client
    Book(BookCommand),

    /// List rooms with their type and hotel
    Rooms(ListCommand),

    /// List room types and nightly rates
    RoomTypes(ListCommand),

    /// List hotels
    Hotels(ListCommand),

    /// List extra services
    Services(ListCommand),

    /// List or record client reviews
    #[command(subcommand)]
    Reviews(ReviewsCommand),

    /// Show database statistics
    Status(StatusCommand),

    /// Create or seed the database
    #[command(subcommand)]
    Db(DbCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                2 => crate::logging::Verbosity::Debug,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Verbosity;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "hotelres");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&["hotelres", "-q", "status"]).verbosity(), Verbosity::Quiet);
        assert_eq!(parse(&["hotelres", "status"]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["hotelres", "-v", "status"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["hotelres", "-vv", "status"]).verbosity(), Verbosity::Debug);
        assert_eq!(parse(&["hotelres", "-vvvv", "status"]).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_availability_defaults() {
        let cli = parse(&["hotelres", "availability"]);
        let Command::Availability(cmd) = cli.command else {
            panic!("expected availability");
        };
        assert!(cmd.arrival.is_none());
        assert!(cmd.departure.is_none());
        assert_eq!(cmd.format, OutputFormat::Table);
    }

    #[test]
    fn test_parse_availability_with_type() {
        let cli = parse(&[
            "hotelres",
            "availability",
            "--arrival",
            "2025-07-01",
            "--departure",
            "2025-07-03",
            "-t",
            "Double",
            "-f",
            "json",
        ]);
        let Command::Availability(cmd) = cli.command else {
            panic!("expected availability");
        };
        assert_eq!(cmd.arrival, Some("2025-07-01".parse().unwrap()));
        assert_eq!(cmd.room_type.as_deref(), Some("Double"));
        assert_eq!(cmd.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        let result = Cli::try_parse_from(["hotelres", "availability", "--arrival", "01/07/2025"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_book() {
        let cli = parse(&[
            "hotelres",
            "book",
            "--client",
            "2",
            "--room",
            "305",
            "--arrival",
            "2026-03-01",
            "--departure",
            "2026-03-04",
        ]);
        let Command::Book(cmd) = cli.command else {
            panic!("expected book");
        };
        assert_eq!(cmd.client, 2);
        assert_eq!(cmd.room, 305);
        assert!(cmd.hotel.is_none());
        assert!(!cmd.json);
    }

    #[test]
    fn test_parse_book_requires_dates() {
        let result = Cli::try_parse_from(["hotelres", "book", "--client", "2", "--room", "305"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_reservation_window_needs_both_ends() {
        let result = Cli::try_parse_from(["hotelres", "reservations", "--from", "2025-07-01"]);
        assert!(result.is_err());

        let cli = parse(&[
            "hotelres",
            "reservations",
            "--from",
            "2025-07-01",
            "--to",
            "2025-08-01",
        ]);
        assert!(matches!(cli.command, Command::Reservations(_)));
    }

    #[test]
    fn test_parse_add_client() {
        let cli = parse(&[
            "hotelres",
            "add-client",
            "--name",
            "Ana Roux",
            "--address",
            "1 Place Bellecour",
            "--city",
            "Lyon",
            "--postal-code",
            "69002",
            "--email",
            "ana@email.fr",
            "--phone",
            "0478000000",
        ]);
        let Command::AddClient(cmd) = cli.command else {
            panic!("expected add-client");
        };
        assert_eq!(cmd.postal_code, "69002");
    }

    #[test]
    fn test_clients_cities_conflicts_with_filters() {
        let result = Cli::try_parse_from(["hotelres", "clients", "--cities", "--city", "Lyon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_global_database() {
        let cli = parse(&["hotelres", "rooms", "--database", "/tmp/desk.db"]);
        assert_eq!(cli.database, Some(PathBuf::from("/tmp/desk.db")));
    }

    #[test]
    fn test_parse_with_config() {
        let cli = parse(&["hotelres", "-c", "/custom/config.toml", "status"]);
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_nested_subcommands() {
        assert!(matches!(
            parse(&["hotelres", "db", "seed"]).command,
            Command::Db(DbCommand::Seed)
        ));
        assert!(matches!(
            parse(&["hotelres", "reviews", "add", "--client", "1", "--rating", "4"]).command,
            Command::Reviews(ReviewsCommand::Add { rating: 4, .. })
        ));
        assert!(matches!(
            parse(&["hotelres", "config", "path"]).command,
            Command::Config(ConfigCommand::Path)
        ));
    }
}
