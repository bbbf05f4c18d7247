// medipal-db - database access layer for the MediPal medicine reminder app
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use medipal_db_lib::{db::NewMedicine, Database, DbConfig, Result};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up a .env file if there is one
    dotenvy::dotenv().ok();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let command = &args[1];

    match command.as_str() {
        "check" => handle_check().await,
        "add" => handle_add(&args[2..]).await,
        "version" | "-v" | "--version" => {
            println!("medipal-db v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    }
}

// Connectivity check. Failures land on the console and never get past it,
// so the process exits normally on both paths.
async fn handle_check() -> Result<()> {
    match run_check().await {
        Ok(database) => {
            println!("✓ Connected to database '{}'", database);
        }
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
        }
    }

    Ok(())
}

async fn run_check() -> Result<String> {
    let config = DbConfig::from_env()?;
    println!("Checking {}", config.redacted_url());

    let db = Database::connect(&config).await?;
    db.ping().await?;
    db.close().await;

    Ok(config.database)
}

// Saves one medicine record. Failure prints the full error, success a
// one-line confirmation.
async fn handle_add(args: &[String]) -> Result<()> {
    if args.len() < 3 {
        eprintln!("Error: 'add' needs a name, a dosage, and a reminder time");
        eprintln!("Example: medipal-db add Paracetamol 500mg 08:00");
        return Ok(());
    }

    // Values go to the database verbatim. The schema decides what's valid.
    let input = NewMedicine {
        name: args[0].clone(),
        dosage: args[1].clone(),
        reminder_time: args[2].clone(),
    };

    match run_add(input).await {
        Ok(()) => {
            println!("✓ Medicine saved");
        }
        Err(e) => {
            eprintln!("✗ Failed to save medicine: {:?}", e);
        }
    }

    Ok(())
}

async fn run_add(input: NewMedicine) -> Result<()> {
    let config = DbConfig::from_env()?;
    let db = Database::connect(&config).await?;

    db.save_medicine(input).await?;
    db.close().await;

    Ok(())
}

fn print_usage() {
    println!(
        r#"medipal-db v{} - MediPal database access layer

USAGE:
    medipal-db <COMMAND> [ARGS]

COMMANDS:
    check                        Check connectivity to the MediPal database
    add <name> <dosage> <time>   Save a medicine record
    version                      Show version
    help                         Show this help

EXAMPLES:
    medipal-db check
    medipal-db add Paracetamol 500mg 08:00

CONFIGURATION:
    Connection parameters come from MEDIPAL_DB_HOST, MEDIPAL_DB_PORT,
    MEDIPAL_DB_NAME, MEDIPAL_DB_USER and MEDIPAL_DB_PASSWORD (a .env file
    works too). Unset variables fall back to a local MySQL instance
    (localhost:3306, database medipal_db).
"#,
        env!("CARGO_PKG_VERSION")
    );
}
