use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use healthdesk_cli::{AdminOutcome, create_admin};
use healthdesk_db::{init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "healthdesk-cli")]
#[command(about = "Healthdesk CLI - Administrative tools for Healthdesk", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an administrator account, or promote an existing user
    CreateAdmin {
        /// Username of the administrator
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let pool = init_db_pool().await?;
    run_migrations(&pool).await?;

    match cli.command {
        Commands::CreateAdmin { username, password } => {
            let username = match username {
                Some(username) => username,
                None => Input::new().with_prompt("Username").interact_text()?,
            };

            let password = match password {
                Some(password) => password,
                None => Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords don't match")
                    .interact()?,
            };

            match create_admin(&pool, &username, &password).await? {
                AdminOutcome::Created { user_id } => {
                    println!("\n✅ Administrator created successfully!");
                    println!("   Username: {}", username);
                    println!("   User id: {}", user_id);
                }
                AdminOutcome::Promoted { user_id } => {
                    println!("\n✅ Existing user promoted to administrator.");
                    println!("   Username: {}", username);
                    println!("   User id: {}", user_id);
                    println!("   The existing password was kept.");
                }
            }
        }
    }

    Ok(())
}
