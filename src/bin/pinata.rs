//! CLI binary for pinata-client crate.

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use pinata_client::{Metadata, MetadataValue, PinataClient, PinataError, DEFAULT_BASE_URL};
use reqwest::Response;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "pinata")]
#[command(author, version, about = "Talk to the Pinata pinning API")]
struct Cli {
    /// Pinata API key
    #[arg(long, env = "PINATA_API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,

    /// Pinata API secret
    #[arg(long, env = "PINATA_SECRET_KEY", default_value = "", hide_env_values = true)]
    secret_key: String,

    /// API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the credentials are accepted
    TestAuth,

    /// Pin a content hash
    Pin {
        /// The content hash to pin
        hash: String,

        /// Metadata name
        #[arg(short, long)]
        name: Option<String>,

        /// Metadata key/value pair (numbers are stored as numbers)
        #[arg(long = "kv", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        keyvalues: Vec<(String, MetadataValue)>,

        /// Store the current UTC time under this key
        #[arg(long = "timestamp", value_name = "KEY")]
        timestamps: Vec<String>,
    },
}

fn parse_key_value(s: &str) -> Result<(String, MetadataValue), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got: {}", s))?;
    if key.is_empty() {
        return Err(format!("empty key in: {}", s));
    }

    let value = if let Ok(i) = value.parse::<i64>() {
        MetadataValue::Integer(i)
    } else if let Some(f) = value.parse::<f64>().ok().filter(|f| f.is_finite()) {
        MetadataValue::Float(f)
    } else {
        MetadataValue::String(value.to_string())
    };
    Ok((key.to_string(), value))
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "pinata_client=debug,pinata=debug,warn"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), PinataError> {
    let mut client = PinataClient::with_timeout(
        cli.api_key,
        cli.secret_key,
        Duration::from_secs(cli.timeout),
    );
    client.set_base_url(cli.base_url);

    let response = match cli.command {
        Commands::TestAuth => client.test_authentication().await?,

        Commands::Pin {
            hash,
            name,
            keyvalues,
            timestamps,
        } => {
            let mut metadata = Metadata::with_name(name.unwrap_or_default());
            for (key, value) in keyvalues {
                metadata.set_key_value(key, value);
            }
            let now = chrono::Utc::now();
            for key in timestamps {
                metadata.set_key_value(key, now);
            }
            client
                .pin_hash_to_ipfs_with_metadata(&hash, &metadata)
                .await?
        }
    };

    print_body(response).await
}

async fn print_body(response: Response) -> Result<(), PinataError> {
    let status = response.status();
    if !status.is_success() {
        warn!(%status, "pinata returned a non-success status");
    }
    let body = response.text().await.map_err(PinataError::Transport)?;
    println!("{}", body);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value_types() {
        assert_eq!(
            parse_key_value("int_thing=123").unwrap(),
            ("int_thing".to_string(), MetadataValue::Integer(123))
        );
        assert_eq!(
            parse_key_value("float_thing=123.456").unwrap(),
            ("float_thing".to_string(), MetadataValue::Float(123.456))
        );
        assert_eq!(
            parse_key_value("string_thing=much_awesome").unwrap(),
            (
                "string_thing".to_string(),
                MetadataValue::String("much_awesome".to_string())
            )
        );
    }

    #[test]
    fn test_parse_key_value_keeps_non_finite_as_string() {
        assert_eq!(
            parse_key_value("k=NaN").unwrap().1,
            MetadataValue::String("NaN".to_string())
        );
    }

    #[test]
    fn test_parse_key_value_splits_on_first_equals() {
        assert_eq!(
            parse_key_value("k=a=b").unwrap().1,
            MetadataValue::String("a=b".to_string())
        );
    }

    #[test]
    fn test_parse_key_value_errors() {
        assert!(parse_key_value("no-equals").is_err());
        assert!(parse_key_value("=value").is_err());
    }

    #[test]
    fn test_cli_parses_pin() {
        let cli = Cli::try_parse_from([
            "pinata",
            "--api-key",
            "k",
            "--secret-key",
            "s",
            "pin",
            "QmHash",
            "--name",
            "such_wow",
            "--kv",
            "a=1",
            "--timestamp",
            "when",
        ])
        .unwrap();

        assert_eq!(cli.api_key, "k");
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        match cli.command {
            Commands::Pin {
                hash,
                name,
                keyvalues,
                timestamps,
            } => {
                assert_eq!(hash, "QmHash");
                assert_eq!(name.as_deref(), Some("such_wow"));
                assert_eq!(keyvalues, vec![("a".to_string(), MetadataValue::Integer(1))]);
                assert_eq!(timestamps, vec!["when".to_string()]);
            }
            Commands::TestAuth => panic!("expected pin command"),
        }
    }
}
