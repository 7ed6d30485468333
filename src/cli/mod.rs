//! Command-line interface: run the HTTP server or perform one-shot lookups.

use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::entities;
use crate::sources::DEFAULT_TIMEOUT;
use crate::sources::openfda::OpenFdaClient;

#[derive(Parser, Debug)]
#[command(
    name = "drug-checker",
    version,
    about = "Drug label lookup relay over openFDA",
    after_help = "Environment:\n  DRUG_CHECKER_OPENFDA_BASE  override the openFDA base URL\n  OPENFDA_API_KEY            optional openFDA API key\n  RUST_LOG                   log filter (e.g. drug_checker=debug)"
)]
pub struct Cli {
    /// Upstream request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },

    /// Look up a drug label by brand or generic name and print it as JSON
    Drug {
        /// Drug name, e.g. "tylenol"
        name: String,
    },

    /// Print the placeholder interaction summary for the given drugs
    Interactions {
        /// Drug names
        #[arg(required = true)]
        drugs: Vec<String>,
    },
}

/// Pretty-printed JSON for terminal output.
fn render_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Runs a one-shot command and returns its rendered output.
///
/// # Errors
///
/// Returns an error for invalid input, upstream failures, or when called with `serve`.
pub async fn run(cli: Cli) -> anyhow::Result<String> {
    let timeout = cli.timeout();
    match cli.command {
        Commands::Drug { name } => {
            let client = OpenFdaClient::new(timeout)?;
            let resp = entities::drug::lookup(&client, &name).await?;
            render_json(&resp)
        }
        Commands::Interactions { drugs } => {
            let resp = entities::interactions::summarize(&drugs)?;
            render_json(&resp)
        }
        Commands::Serve { .. } => Err(anyhow::anyhow!(
            "`serve` runs the HTTP server and has no one-shot output"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_serve_defaults() {
        let cli = Cli::try_parse_from(["drug-checker", "serve"]).unwrap();
        assert_eq!(cli.timeout(), Duration::from_secs(20));
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 8000);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_global_timeout_after_subcommand() {
        let cli =
            Cli::try_parse_from(["drug-checker", "drug", "tylenol", "--timeout-secs", "5"]).unwrap();
        assert_eq!(cli.timeout(), Duration::from_secs(5));
        assert!(matches!(cli.command, Commands::Drug { ref name } if name == "tylenol"));
    }

    #[test]
    fn interactions_requires_at_least_one_drug() {
        assert!(Cli::try_parse_from(["drug-checker", "interactions"]).is_err());
    }

    #[tokio::test]
    async fn run_interactions_renders_pretty_json() {
        let cli = Cli::try_parse_from(["drug-checker", "interactions", "warfarin", "aspirin"])
            .unwrap();
        let out = run(cli).await.unwrap();
        assert!(out.contains('\n'));
        assert!(out.contains("\"summary\""));
        assert!(out.contains("- warfarin\\n- aspirin"));
    }

    #[test]
    fn render_json_omits_absent_label_fields() {
        let out = render_json(&entities::drug::DrugLookupResponse::not_found("zzzznotadrug"))
            .unwrap();
        assert!(out.contains("\"found\": false"));
        assert!(out.contains("\"display_name\": \"zzzznotadrug\""));
        assert!(!out.contains("brand_names"));
    }

    #[tokio::test]
    async fn run_drug_rejects_blank_name() {
        let cli = Cli::try_parse_from(["drug-checker", "drug", "  "]).unwrap();
        let err = run(cli).await.unwrap_err();
        assert!(
            err.downcast_ref::<crate::error::DrugCheckerError>()
                .is_some_and(|e| matches!(e, crate::error::DrugCheckerError::InvalidArgument(_)))
        );
    }
}
