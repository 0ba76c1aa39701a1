#![allow(clippy::print_stdout)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use haven::domain::config::AppConfig;
use haven::domain::{AccountKind, SearchFilter, Shelter, ShelterKey, UserId};
use haven::features::directory::Directory;
use haven::features::identity::Accounts;
use haven::features::loader::{DirectoryLoader, JsonSource};
use haven::features::reservation::ReservationGate;
use haven::kernel::config::load_config;
use haven_logger::{LevelFilter, Logger};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "haven", about = "Shelter directory search and reservations", version)]
struct Cli {
    /// Configuration file (TOML); defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search shelters by name substring and demographic buckets.
    Search {
        /// Case-insensitive name substring; empty matches everything.
        #[arg(long, default_value = "")]
        name: String,
        /// Age bucket: children, young-adults, anyone, or Any.
        #[arg(long, default_value = "Any")]
        age: String,
        /// Gender bucket: men, women, or Any.
        #[arg(long, default_value = "Any")]
        gender: String,
    },
    /// Show one shelter record in full.
    Show { key: u32 },
    /// Reserve a bed at a shelter for a user.
    Reserve {
        key: u32,
        #[arg(long)]
        user: String,
    },
    /// Register an account and verify its credentials.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        admin: bool,
    },
    /// List feature slices compiled into this binary.
    Features,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg: AppConfig = match &cli.config {
        Some(path) => load_config(Some(path)).context("Critical: Configuration is malformed")?,
        None => load_config(Some("haven")).unwrap_or_default(),
    };

    let _log = init_logger(&cfg)?;

    match cli.command {
        Command::Search { name, age, gender } => {
            let directory = load_ready(&cfg).await?;
            run_search(&directory, &SearchFilter::from_selections(&name, &age, &gender));
        }
        Command::Show { key } => {
            let directory = load_ready(&cfg).await?;
            match directory.get(ShelterKey(key)) {
                Some(shelter) => print_shelter(&shelter),
                None => println!("No shelter with key {key}"),
            }
        }
        Command::Reserve { key, user } => {
            let directory = load_ready(&cfg).await?;
            run_reserve(directory, ShelterKey(key), &UserId::new(user));
        }
        Command::Register { name, username, email, password, admin } => {
            let kind = if admin { AccountKind::Admin } else { AccountKind::User };
            let accounts = Accounts::in_memory();
            let id = accounts.register(kind, &name, &username, &password, &email)?;
            let verified = accounts.login(&username, &password);
            println!("Registered {kind} account '{username}' (id {id}, verified: {verified})");
        }
        Command::Features => {
            for feature in haven::features::ENABLED {
                println!("{feature}");
            }
        }
    }

    Ok(())
}

fn init_logger(cfg: &AppConfig) -> anyhow::Result<Logger> {
    let level = cfg.logging.level.parse().unwrap_or(LevelFilter::INFO);
    let builder =
        Logger::builder().name(env!("CARGO_PKG_NAME")).console(cfg.logging.console).level(level);

    let logger = match &cfg.logging.path {
        Some(path) => builder.path(path).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}

/// Kicks off the background load and waits for the published snapshot.
async fn load_ready(cfg: &AppConfig) -> anyhow::Result<Directory> {
    let source = JsonSource::new(&cfg.directory.source);
    let mut handle = DirectoryLoader::spawn(source);
    let directory = handle
        .ready()
        .await
        .with_context(|| format!("Loading shelters from {}", cfg.directory.source.display()))?;
    Ok(directory)
}

fn run_search(directory: &Directory, filter: &SearchFilter) {
    let mut keys: Vec<ShelterKey> = directory.search(filter).into_iter().collect();
    keys.sort_unstable();

    if keys.is_empty() {
        println!("No shelters match.");
        return;
    }

    for key in keys {
        if let Some(shelter) = directory.get(key) {
            let space = if shelter.has_space() { "beds free" } else { "no known beds" };
            println!("{:>6}  {}  [{space}]", key.to_string(), shelter.name);
        }
    }
}

fn run_reserve(directory: Directory, key: ShelterKey, user: &UserId) {
    let gate = ReservationGate::in_memory(directory);
    match gate.reserve(user, key) {
        Ok(reservation) => println!(
            "Reserved shelter {} for {} at {}",
            reservation.shelter, reservation.user, reservation.reserved_at
        ),
        Err(err) => println!("Reservation failed: {err}"),
    }
}

fn print_shelter(shelter: &Shelter) {
    println!("{} ({})", shelter.name, shelter.key);
    if !shelter.address.is_empty() {
        println!("  address: {}", shelter.address);
    }
    if !shelter.phone.is_empty() {
        println!("  phone: {}", shelter.phone);
    }
    if !shelter.restrictions.is_empty() {
        println!("  restrictions: {}", shelter.restrictions);
    }
    if !shelter.notes.is_empty() {
        println!("  notes: {}", shelter.notes);
    }
    for capacity in &shelter.capacities {
        let fmt_count =
            |n: Option<u32>| n.map_or_else(|| "unknown".to_owned(), |v| v.to_string());
        println!(
            "  {}: {} of {} beds available",
            capacity.category,
            fmt_count(capacity.available),
            fmt_count(capacity.beds)
        );
    }
}
