//! `hotelres` - CLI for the hotel reservation desk
//!
//! This binary provides the command-line interface for searching
//! reservations and clients, checking room availability and booking rooms.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::process::ExitCode;

use anyhow::Context;
use chrono::{Days, Local, NaiveDate};
use clap::Parser;
use tracing::debug;

use hotelres::cli::output::{render, render_availability};
use hotelres::cli::{
    AddClientCommand, AvailabilityCommand, BookCommand, Cli, ClientsCommand, Command,
    ConfigCommand, DbCommand, ReservationsCommand, ReviewsCommand,
};
use hotelres::model::NewEvaluation;
use hotelres::{init_logging, search, BookingPolicy, BookingRequest, Config, NewClient, Stay, Storage};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Rejected input exits with 2, everything else with 1.
            if let Some(e) = err.downcast_ref::<hotelres::Error>() {
                if e.is_rejection() {
                    eprintln!("error: {e}");
                    return ExitCode::from(2);
                }
            }
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let mut config = Config::load_from(cli.config.clone()).context("loading configuration")?;
    if let Some(database) = cli.database {
        config.storage.database_path = Some(database);
    }

    let open = || open_storage(&config);

    // Execute the command
    match cli.command {
        Command::Reservations(cmd) => handle_reservations(&open()?, &cmd),
        Command::Clients(cmd) => handle_clients(&open()?, &cmd),
        Command::Availability(cmd) => handle_availability(&open()?, &cmd),
        Command::AddClient(cmd) => handle_add_client(&open()?, cmd),
        Command::Book(cmd) => handle_book(&mut open()?, &config, &cmd),
        Command::Rooms(cmd) => print(&render(&open()?.rooms()?, cmd.format)?),
        Command::RoomTypes(cmd) => print(&render(&open()?.room_types()?, cmd.format)?),
        Command::Hotels(cmd) => print(&render(&open()?.hotels()?, cmd.format)?),
        Command::Services(cmd) => print(&render(&open()?.services()?, cmd.format)?),
        Command::Reviews(cmd) => handle_reviews(&open()?, cmd),
        Command::Status(cmd) => handle_status(&open()?, cmd.json),
        Command::Db(cmd) => handle_db(&mut open()?, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn open_storage(config: &Config) -> anyhow::Result<Storage> {
    let path = config.database_path();
    let storage = Storage::open(&path)
        .with_context(|| format!("opening database {}", path.display()))?;
    storage.set_busy_timeout(config.busy_timeout())?;
    debug!("Using database {}", path.display());
    Ok(storage)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn print(text: &str) -> anyhow::Result<()> {
    if !text.is_empty() {
        println!("{text}");
    }
    Ok(())
}

fn handle_reservations(storage: &Storage, cmd: &ReservationsCommand) -> anyhow::Result<()> {
    let reservations = match (cmd.from, cmd.to) {
        (Some(from), Some(to)) => storage.reservations_overlapping(&Stay::new(from, to)?)?,
        _ => storage.reservations()?,
    };
    let reservations = search::filter(reservations, cmd.search.as_deref());

    print(&render(&reservations, cmd.format)?)
}

fn handle_clients(storage: &Storage, cmd: &ClientsCommand) -> anyhow::Result<()> {
    if cmd.cities {
        for city in storage.client_cities()? {
            println!("{city}");
        }
        return Ok(());
    }

    let clients = storage.clients(cmd.city.as_deref())?;
    let clients = search::filter(clients, cmd.search.as_deref());

    print(&render(&clients, cmd.format)?)
}

fn handle_availability(storage: &Storage, cmd: &AvailabilityCommand) -> anyhow::Result<()> {
    let arrival = cmd.arrival.unwrap_or_else(today);
    let departure = match cmd.departure {
        Some(departure) => departure,
        None => arrival
            .checked_add_days(Days::new(1))
            .context("arrival date is out of range")?,
    };
    let stay = Stay::new(arrival, departure)?;

    let rooms = storage.available_rooms(&stay, cmd.room_type.as_deref())?;
    let (out, notice) = render_availability(&stay, &rooms, cmd.format)?;
    if let Some(notice) = notice {
        eprintln!("{notice}");
    }
    print(&out)
}

fn handle_add_client(storage: &Storage, cmd: AddClientCommand) -> anyhow::Result<()> {
    let client = storage.insert_client(&NewClient {
        full_name: cmd.name,
        address: cmd.address,
        city: cmd.city,
        postal_code: cmd.postal_code,
        email: cmd.email,
        phone: cmd.phone,
    })?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&client)?);
    } else {
        println!("Registered client {}: {}", client.id, client.full_name);
    }
    Ok(())
}

fn handle_book(storage: &mut Storage, config: &Config, cmd: &BookCommand) -> anyhow::Result<()> {
    let stay = Stay::new(cmd.arrival, cmd.departure)?;
    let room = storage.room_by_number(cmd.room, cmd.hotel)?;
    let receipt = storage.book(
        &BookingRequest::new(cmd.client, room.id, stay),
        &BookingPolicy::from(&config.booking),
        today(),
    )?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&receipt)?);
    } else {
        println!("Reservation {} confirmed", receipt.reservation_id);
        println!("-----------------------");
        println!("Client:   {} ({})", receipt.client_name, receipt.client_id);
        println!(
            "Room:     {} ({}, {})",
            receipt.room_number, receipt.room_type, room.hotel_city
        );
        println!("Stay:     {} ({} nights)", receipt.stay, receipt.nights);
        println!(
            "Price:    {:.2} ({:.2} per night)",
            receipt.total_price, receipt.nightly_rate
        );
    }
    Ok(())
}

fn handle_reviews(storage: &Storage, cmd: ReviewsCommand) -> anyhow::Result<()> {
    match cmd {
        ReviewsCommand::List(list) => print(&render(&storage.evaluations()?, list.format)?),
        ReviewsCommand::Add {
            client,
            rating,
            comment,
            date,
        } => {
            let review = storage.add_evaluation(&NewEvaluation {
                client_id: client,
                date: date.unwrap_or_else(today),
                rating,
                comment,
            })?;
            println!("Recorded review {} from {}", review.id, review.client_name);
            Ok(())
        }
    }
}

fn handle_status(storage: &Storage, json: bool) -> anyhow::Result<()> {
    let stats = storage.stats()?;

    if json {
        let status = serde_json::json!({
            "database_path": storage.path(),
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("hotelres status");
        println!("---------------");
        println!("Database:       {}", storage.path().display());
        println!("Schema version: {}", stats.schema_version);
        println!("Size:           {} bytes", stats.db_size_bytes);
        println!("Hotels:         {}", stats.hotels);
        println!("Rooms:          {}", stats.rooms);
        println!("Clients:        {}", stats.clients);
        println!("Reservations:   {}", stats.reservations);
        println!("Reviews:        {}", stats.evaluations);
    }
    Ok(())
}

fn handle_db(storage: &mut Storage, cmd: &DbCommand) -> anyhow::Result<()> {
    match cmd {
        DbCommand::Init => {
            println!("Database ready at {}", storage.path().display());
        }
        DbCommand::Seed => {
            let inserted = storage.seed_demo_data()?;
            println!("Inserted {inserted} demo rows into {}", storage.path().display());
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:       {}", config.database_path().display());
                println!("  Busy timeout (ms):   {}", config.storage.busy_timeout_ms);
                println!();
                println!("[Booking]");
                if config.booking.max_stay_nights == 0 {
                    println!("  Max stay (nights):   unlimited");
                } else {
                    println!("  Max stay (nights):   {}", config.booking.max_stay_nights);
                }
                println!(
                    "  Past arrivals:       {}",
                    if config.booking.allow_past_arrivals {
                        "allowed"
                    } else {
                        "refused"
                    }
                );
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
