//! SalesSavvy admin CLI - user administration and order item queries.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use admin_service_lib::config::AdminServiceConfig;
use admin_service_lib::{AdminApp, MigrateAction};

#[derive(Parser)]
#[command(name = "salessavvy-admin")]
#[command(about = "SalesSavvy administration tool")]
struct Cli {
    /// Database URL (overrides SALESSAVVY_DATABASE_URL / DATABASE_URL)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// User administration
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Order item queries
    OrderItems {
        #[command(subcommand)]
        action: OrderItemCommands,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[derive(Subcommand)]
enum UserCommands {
    /// Show a user
    Show { id: i32 },
    /// Change username, email or role and revoke the user's sessions
    Modify {
        id: i32,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// CUSTOMER or ADMIN
        #[arg(long)]
        role: Option<String>,
    },
}

#[derive(Subcommand)]
enum OrderItemCommands {
    /// Items of one order
    ByOrder { order_id: String },
    /// Items from a user's successful orders
    Successful { user_id: i32 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AdminServiceConfig::from_env();
    if let Some(url) = cli.database_url {
        config = config.with_database_url(url);
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.service.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    tracing::debug!(service = %config.service.service_name, "Configuration loaded");

    match cli.command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            admin_service_lib::run_migrations(&config, migrate_action).await?;
        }
        Commands::User { action } => {
            let app = AdminApp::connect(&config).await?;
            let user = match action {
                UserCommands::Show { id } => app.users().get_user_by_id(id).await,
                UserCommands::Modify {
                    id,
                    username,
                    email,
                    role,
                } => app.users().modify_user(id, username, email, role).await,
            }
            .unwrap_or_else(|err| fail(err));
            print_json(&user)?;
        }
        Commands::OrderItems { action } => {
            let app = AdminApp::connect(&config).await?;
            let items = match action {
                OrderItemCommands::ByOrder { order_id } => {
                    app.order_items().find_by_order_id(&order_id).await
                }
                OrderItemCommands::Successful { user_id } => {
                    app.order_items()
                        .find_successful_order_items_by_user_id(user_id)
                        .await
                }
            }
            .unwrap_or_else(|err| fail(err));
            print_json(&items)?;
        }
    }

    Ok(())
}

/// Log the error with its code, print the user-facing message and exit.
fn fail(err: common::AppError) -> ! {
    if err.is_client_error() {
        tracing::warn!(code = err.code(), "{}", err);
    } else {
        tracing::error!(code = err.code(), "{}", err);
    }
    eprintln!("{}", error_line(&err));
    std::process::exit(1)
}

fn error_line(err: &common::AppError) -> String {
    format!("Error: {}", err.user_message())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
