//! Commerce CLI
//!
//! Command-line interface for the Commerce API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use commerce_client::CommerceClient;
use commerce_types::{OrderId, PaymentId, PaymentStatus, UserId};

#[derive(Parser)]
#[command(name = "commerce")]
#[command(author, version, about = "Commerce API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Commerce API
    #[arg(
        long,
        env = "COMMERCE_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Payment operations
    Payment {
        #[command(subcommand)]
        action: PaymentCommands,
    },
    /// User operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum PaymentCommands {
    /// Create a new payment
    Create {
        /// Order ID the payment belongs to
        #[arg(long)]
        order: i64,
        /// Mark the payment as already paid
        #[arg(long)]
        paid: bool,
        /// Status (NOT_STARTED, IN_PROGRESS, COMPLETED)
        #[arg(long, default_value = "NOT_STARTED")]
        status: String,
    },
    /// Get payment details, including the order when available
    Get {
        /// Payment ID
        id: String,
    },
    /// List all payments
    List,
    /// Update a payment's paid flag and status
    Update {
        /// Payment ID
        id: String,
        /// Mark the payment as paid
        #[arg(long)]
        paid: bool,
        /// Status (NOT_STARTED, IN_PROGRESS, COMPLETED)
        #[arg(long)]
        status: String,
    },
    /// Delete a payment
    Delete {
        /// Payment ID
        id: String,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Create a new user
    Create {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
    },
    /// Get user details
    Get {
        /// User ID
        id: String,
    },
    /// List all users
    List,
    /// Update a user's profile
    Update {
        /// User ID
        id: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
    },
    /// Delete a user
    Delete {
        /// User ID
        id: String,
    },
}

fn parse_status(s: &str) -> Result<PaymentStatus> {
    s.to_uppercase().parse().map_err(|_| {
        anyhow::anyhow!(
            "Unknown payment status: {}. Supported: NOT_STARTED, IN_PROGRESS, COMPLETED",
            s
        )
    })
}

fn parse_payment_id(s: &str) -> Result<PaymentId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid payment ID: {}", s))
}

fn parse_user_id(s: &str) -> Result<UserId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid user ID: {}", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = CommerceClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Payment { action } => match action {
            PaymentCommands::Create {
                order,
                paid,
                status,
            } => {
                let status = parse_status(&status)?;
                let payment = client
                    .create_payment(OrderId::new(order), paid, status)
                    .await?;
                println!("{}", serde_json::to_string_pretty(&payment)?);
            }
            PaymentCommands::Get { id } => {
                let payment_id = parse_payment_id(&id)?;
                let payment = client.get_payment(payment_id).await?;
                println!("{}", serde_json::to_string_pretty(&payment)?);
            }
            PaymentCommands::List => {
                let payments = client.list_payments().await?;
                println!("{}", serde_json::to_string_pretty(&payments)?);
            }
            PaymentCommands::Update { id, paid, status } => {
                let payment_id = parse_payment_id(&id)?;
                let status = parse_status(&status)?;
                let payment = client.update_payment(payment_id, paid, status).await?;
                println!("{}", serde_json::to_string_pretty(&payment)?);
            }
            PaymentCommands::Delete { id } => {
                let payment_id = parse_payment_id(&id)?;
                client.delete_payment(payment_id).await?;
                println!("✓ Payment deleted");
            }
        },

        Commands::User { action } => match action {
            UserCommands::Create {
                first_name,
                last_name,
                email,
            } => {
                let user = client.create_user(&first_name, &last_name, &email).await?;
                println!("{}", serde_json::to_string_pretty(&user)?);
            }
            UserCommands::Get { id } => {
                let user_id = parse_user_id(&id)?;
                let user = client.get_user(user_id).await?;
                println!("{}", serde_json::to_string_pretty(&user)?);
            }
            UserCommands::List => {
                let users = client.list_users().await?;
                println!("{}", serde_json::to_string_pretty(&users)?);
            }
            UserCommands::Update {
                id,
                first_name,
                last_name,
                email,
            } => {
                let user_id = parse_user_id(&id)?;
                let user = client
                    .update_user(user_id, &first_name, &last_name, &email)
                    .await?;
                println!("{}", serde_json::to_string_pretty(&user)?);
            }
            UserCommands::Delete { id } => {
                let user_id = parse_user_id(&id)?;
                client.delete_user(user_id).await?;
                println!("✓ User deleted");
            }
        },
    }

    Ok(())
}
