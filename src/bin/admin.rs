//! CLI administration tool for hbnb.
//!
//! Provides commands for bootstrapping administrators, viewing statistics,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create an administrator (interactive)
//! cargo run --bin admin -- superuser create
//!
//! # List all users
//! cargo run --bin admin -- user list
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection string

use hbnb::application::facade::Facade;
use hbnb::config::{Config, mask_connection_string};
use hbnb::domain::entities::UserRegistration;
use hbnb::domain::repositories::{
    AmenityRepository, PlaceRepository, ReviewRepository, UserRepository,
};
use hbnb::infrastructure::persistence::{
    PgAmenityRepository, PgPlaceRepository, PgReviewRepository, PgUserRepository,
};
use hbnb::server::run_migrations;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use rand::Rng;
use rand::distr::Alphanumeric;
use sqlx::PgPool;
use std::sync::Arc;

const GENERATED_PASSWORD_LEN: usize = 20;

/// CLI tool for managing hbnb.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage administrator accounts
    Superuser {
        #[command(subcommand)]
        action: SuperuserAction,
    },

    /// Inspect users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum SuperuserAction {
    /// Create a new administrator
    Create {
        #[arg(short, long)]
        email: Option<String>,

        /// Password (prompted for, or generated when left empty)
        #[arg(short, long)]
        password: Option<String>,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// List all users
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Superuser { action } => handle_superuser_action(action, &pool).await?,
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn facade(pool: &PgPool) -> Facade {
    let pool = Arc::new(pool.clone());
    Facade::new(
        Arc::new(PgUserRepository::new(pool.clone())),
        Arc::new(PgPlaceRepository::new(pool.clone())),
        Arc::new(PgAmenityRepository::new(pool.clone())),
        Arc::new(PgReviewRepository::new(pool)),
    )
}

async fn handle_superuser_action(action: SuperuserAction, pool: &PgPool) -> Result<()> {
    match action {
        SuperuserAction::Create {
            email,
            password,
            first_name,
            last_name,
            yes,
        } => create_superuser(pool, email, password, first_name, last_name, yes).await,
    }
}

/// Creates an administrator with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for email and names (or use provided)
/// 2. Prompt for a password; an empty answer generates one
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Register through the facade, which hashes the password
async fn create_superuser(
    pool: &PgPool,
    email: Option<String>,
    password: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create administrator".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let first_name = match first_name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("First name")
            .with_initial_text("Admin")
            .interact_text()?,
    };
    let last_name = match last_name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Last name")
            .with_initial_text("HBnB")
            .interact_text()?,
    };

    let password = match password {
        Some(p) => p,
        None if skip_confirm => String::new(),
        None => Password::new()
            .with_prompt("Password (leave empty to generate)")
            .allow_empty_password(true)
            .interact()?,
    };
    let generated = password.is_empty();
    let password = if generated {
        generate_password()
    } else {
        password
    };

    println!();
    println!("{}", "Administrator details:".bright_white().bold());
    println!("  Name:  {} {}", first_name.cyan(), last_name.cyan());
    println!("  Email: {}", email.cyan());
    if generated {
        println!("  Password: {}", password.bright_yellow().bold());
        println!();
        println!(
            "{}",
            "⚠️  IMPORTANT: Save this password now! It is stored hashed."
                .red()
                .bold()
        );
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this administrator?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let user = facade(pool)
        .register_user(UserRegistration {
            first_name,
            last_name,
            email,
            password,
            is_admin: true,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create administrator: {}", e))?;

    println!("{}", "✅ Administrator created!".green().bold());
    println!("  ID: {}", user.id.to_string().bright_black());
    println!();
    println!("{}", "Log in with:".bright_white());
    println!(
        "  curl -X POST -H \"Content-Type: application/json\" \\\n    -d '{{\"email\":\"{}\",\"password\":\"...\"}}' \\\n    http://localhost:5000/api/v1/auth/login",
        user.email
    );
    println!();

    Ok(())
}

async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    match action {
        UserAction::List => list_users(pool).await,
    }
}

/// Lists all users with role indicators.
async fn list_users(pool: &PgPool) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = facade(pool)
        .get_all_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin superuser create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<36} {:<25} {:<30} {:<6}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Role".bright_white().bold()
    );
    println!("  {}", "─".repeat(100).bright_black());

    for user in &users {
        let role = if user.is_admin {
            "ADMIN".yellow()
        } else {
            "USER".green()
        };

        println!(
            "  {:<36} {:<25} {:<30} {}",
            user.id.to_string().bright_black(),
            user.full_name().cyan(),
            user.email,
            role
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Displays entity counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let pool = Arc::new(pool.clone());
    let users = PgUserRepository::new(pool.clone()).count().await;
    let places = PgPlaceRepository::new(pool.clone()).count().await;
    let amenities = PgAmenityRepository::new(pool.clone()).count().await;
    let reviews = PgReviewRepository::new(pool).count().await;

    for (label, count) in [
        ("Users:", users),
        ("Places:", places),
        ("Amenities:", amenities),
        ("Reviews:", reviews),
    ] {
        let count = count.map_err(|e| anyhow::anyhow!("Failed to count: {}", e))?;
        println!(
            "  {:<11} {}",
            label,
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            run_migrations(pool).await?;

            println!("{}", "✅ Schema up to date".green().bold());
        }
    }

    Ok(())
}

/// Generates a random alphanumeric password.
fn generate_password() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_PASSWORD_LEN)
        .map(char::from)
        .collect()
}
