//! Splitwise CLI - list categories and record expenses from a terminal.
//!
//! Reads the API token from `SPLITWISE_TOKEN` (a `.env` file is honored)
//! or from the OS keychain after `splitwise login`.

use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use splitwise_core::auth::{AuthProvider, EnvToken, KeyringToken, DEFAULT_TOKEN_VAR};
use splitwise_core::models::CreateExpenseDto;
use splitwise_core::{Config, SplitwiseClient};

/// Keychain account used when none is configured
const DEFAULT_ACCOUNT: &str = "default";

const USAGE: &str = "\
Usage:
  splitwise categories
  splitwise create <group_id|-> <cost> <description> [currency]
  splitwise login [account]
  splitwise logout [account]";

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = Config::load()?;

    match args.first().map(String::as_str) {
        Some("categories") => list_categories(&config).await,
        Some("create") => create_expense(&config, &args[1..]).await,
        Some("login") => login(&mut config, args.get(1)),
        Some("logout") => logout(&config, args.get(1)),
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }
}

fn keyring_account(config: &Config, arg: Option<&String>) -> String {
    arg.cloned()
        .or_else(|| config.keyring_account.clone())
        .unwrap_or_else(|| DEFAULT_ACCOUNT.to_string())
}

/// Prefer the environment token, fall back to the keychain
fn build_client(config: &Config) -> Result<SplitwiseClient> {
    let env = EnvToken::default();
    let client = if env.token().is_ok() {
        info!(var = DEFAULT_TOKEN_VAR, "Using token from environment");
        SplitwiseClient::with_config(config.client_config(), env)?
    } else {
        let keyring = KeyringToken::new(keyring_account(config, None));
        info!(account = keyring.account(), "Using token from keychain");
        SplitwiseClient::with_config(config.client_config(), keyring)?
    };
    Ok(client)
}

async fn list_categories(config: &Config) -> Result<()> {
    let client = build_client(config)?;
    let categories = client
        .categories()
        .await
        .context("Failed to fetch categories")?;

    for category in categories {
        println!("{:>4}  {}", category.id, category.name);
        for sub in category.subcategories {
            println!("{:>4}    {}", sub.id, sub.name);
        }
    }
    Ok(())
}

async fn create_expense(config: &Config, args: &[String]) -> Result<()> {
    let (group_id, cost, description) = match args {
        [group_id, cost, description, ..] => (group_id, cost, description),
        _ => anyhow::bail!("create needs <group_id> <cost> <description>\n{}", USAGE),
    };
    let group_id: i64 = if group_id == "-" {
        config
            .default_group_id
            .ok_or_else(|| anyhow::anyhow!("No default_group_id in config"))?
    } else {
        group_id
            .parse()
            .with_context(|| format!("Invalid group id: {}", group_id))?
    };

    let mut dto = CreateExpenseDto::split_equally(group_id, cost.as_str(), description.as_str());
    dto.currency_code = args.get(3).cloned().or_else(|| config.currency_code.clone());

    let client = build_client(config)?;
    let expenses = client
        .create_expense(&dto)
        .await
        .context("Failed to create expense")?;

    for expense in expenses {
        println!("{}  {} {}  {}", expense.id, expense.cost, expense.currency_code, expense.description);
    }
    Ok(())
}

fn login(config: &mut Config, account: Option<&String>) -> Result<()> {
    let account = keyring_account(config, account);
    let token = rpassword::prompt_password("Splitwise API token: ")?;
    let token = token.trim();
    if token.is_empty() {
        anyhow::bail!("Empty token, nothing stored");
    }

    KeyringToken::new(account.clone())
        .store(token)
        .context("Failed to store token in keychain")?;

    config.keyring_account = Some(account.clone());
    config.save().context("Failed to save config")?;
    println!("Token stored for {}", account);
    Ok(())
}

fn logout(config: &Config, account: Option<&String>) -> Result<()> {
    let keyring = KeyringToken::new(keyring_account(config, account));
    if !keyring.has_token() {
        println!("No token stored for {}", keyring.account());
        return Ok(());
    }
    keyring
        .delete()
        .context("Failed to delete token from keychain")?;
    println!("Token removed for {}", keyring.account());
    Ok(())
}
