//! sas-token - Generate a Shared Access Signature for device provisioning.

use anyhow::{bail, Context, Result};
use clap::Parser;
use dps_tools::sas::{
    generate_sas_token_at, generate_signing_key, registration_uri, SasToken, SystemTimeSource,
    DEFAULT_KEY_BYTES,
};
use dps_tools::{default_filter, init_tracing, TokenConfig};
use serde::Serialize;
use std::io::{self, Write};

/// Generate a SharedAccessSignature token
#[derive(Parser)]
#[command(name = "sas-token")]
#[command(version, about = "Generate a SharedAccessSignature token", long_about = None)]
struct Cli {
    /// Resource URI to authorize
    #[arg(long, conflicts_with_all = ["scope_id", "registration_id"])]
    uri: Option<String>,

    /// ID scope; builds `<scope>/registrations/<registration id>`
    #[arg(long, requires = "registration_id")]
    scope_id: Option<String>,

    /// Registration ID of the device
    #[arg(long, requires = "scope_id")]
    registration_id: Option<String>,

    /// Base64 signing key (default: $SAS_SIGNING_KEY)
    #[arg(long)]
    key: Option<String>,

    /// Shared access policy name (default: $SAS_POLICY_NAME)
    #[arg(long)]
    policy_name: Option<String>,

    /// Lifetime in seconds (default: $SAS_EXPIRY_SECS or 3600)
    #[arg(long, allow_negative_numbers = true)]
    expiry: Option<i64>,

    /// Print the token and its fields as JSON
    #[arg(long)]
    json: bool,

    /// Log the signing payload and token to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print a new random base64 signing key and exit
    #[arg(long, conflicts_with_all = ["uri", "scope_id", "json"])]
    generate_key: bool,

    /// Key size in bytes for --generate-key
    #[arg(long, default_value_t = DEFAULT_KEY_BYTES)]
    key_bytes: usize,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    token: String,
    #[serde(flatten)]
    fields: &'a SasToken,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(default_filter(cli.verbose));
    run(cli, TokenConfig::from_env(), &mut io::stdout().lock())
}

/// Resolve the resource URI and config, then write one line to `out`.
fn run(cli: Cli, env: TokenConfig, out: &mut impl Write) -> Result<()> {
    if cli.generate_key {
        writeln!(out, "{}", generate_signing_key(cli.key_bytes))?;
        return Ok(());
    }

    let uri = match (cli.uri, cli.scope_id, cli.registration_id) {
        (Some(uri), _, _) => uri,
        (None, Some(scope_id), Some(registration_id)) => {
            registration_uri(&scope_id, &registration_id)
        }
        _ => bail!("either --uri or --scope-id with --registration-id is required"),
    };

    let config = env.with_overrides(cli.key, cli.policy_name, cli.expiry);
    let key = config.require_key()?;

    let token = generate_sas_token_at(
        &uri,
        key,
        config.policy_name.as_deref(),
        config.expiry_secs,
        &SystemTimeSource,
    )
    .context("failed to generate SAS token")?;

    if cli.json {
        let output = JsonOutput {
            token: token.to_string(),
            fields: &token,
        };
        writeln!(out, "{}", serde_json::to_string(&output)?)?;
    } else {
        writeln!(out, "{token}")?;
    }
    Ok(())
}
