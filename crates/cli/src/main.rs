//! `lightbnb` CLI entry-point.
//!
//! Available sub-commands:
//! - `migrate`        — run pending database migrations.
//! - `search`         — search property listings with optional filters.
//! - `user`           — look up a user by email or id.
//! - `reservations`   — list a guest's reservations.
//! - `add-property`   — insert a property from a JSON file.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use db::models::NewProperty;
use db::FilterOptions;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "lightbnb",
    about = "Data-access CLI for the lightbnb rental-listing schema",
    version
)]
struct Cli {
    /// Postgres connection string.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run pending database migrations.
    Migrate,
    /// Search property listings with optional filters.
    Search {
        /// Substring match on the city name (case-sensitive).
        #[arg(long)]
        city: Option<String>,
        /// Only listings owned by this user.
        #[arg(long)]
        owner_id: Option<i64>,
        /// Minimum nightly price, in dollars.
        #[arg(long)]
        min_price: Option<f64>,
        /// Maximum nightly price, in dollars.
        #[arg(long)]
        max_price: Option<f64>,
        /// Only listings whose average rating is strictly above this.
        #[arg(long)]
        min_rating: Option<f64>,
        /// Maximum number of rows to return.
        #[arg(long)]
        limit: Option<i64>,
    },
    /// Look up a user by email or id.
    User {
        #[arg(long, conflicts_with = "id", required_unless_present = "id")]
        email: Option<String>,
        #[arg(long)]
        id: Option<i32>,
    },
    /// List a guest's reservations, soonest first.
    Reservations {
        #[arg(long)]
        guest_id: i32,
        #[arg(long)]
        limit: Option<i64>,
    },
    /// Insert a property described by a JSON file, printing the new id.
    AddProperty {
        /// Path to a JSON file matching the NewProperty shape.
        path: std::path::PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let pool = db::pool::create_pool(&cli.database_url, 5)
        .await
        .context("failed to connect to database")?;

    match cli.command {
        Command::Migrate => {
            db::pool::run_migrations(&pool).await?;
            info!("Migrations applied successfully");
        }
        Command::Search {
            city,
            owner_id,
            min_price,
            max_price,
            min_rating,
            limit,
        } => {
            let options = FilterOptions {
                city,
                owner_id,
                minimum_price_per_night: min_price,
                maximum_price_per_night: max_price,
                minimum_rating: min_rating,
            };
            let rows = db::repository::properties::search_properties(&pool, &options, limit).await?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Command::User { email, id } => {
            let user = match (email, id) {
                (Some(email), None) => {
                    db::repository::users::get_user_by_email(&pool, &email).await?
                }
                (None, Some(id)) => db::repository::users::get_user_by_id(&pool, id).await?,
                _ => bail!("pass exactly one of --email or --id"),
            };
            match user {
                Some(user) => println!("{}", serde_json::to_string_pretty(&user)?),
                None => bail!("no such user"),
            }
        }
        Command::Reservations { guest_id, limit } => {
            let rows =
                db::repository::reservations::reservations_for_guest(&pool, guest_id, limit)
                    .await?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Command::AddProperty { path } => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read file {}", path.display()))?;
            let property: NewProperty =
                serde_json::from_str(&content).context("invalid property JSON")?;
            let id = db::repository::properties::create_property(&pool, &property).await?;
            println!("Created property {id}");
        }
    }

    Ok(())
}
