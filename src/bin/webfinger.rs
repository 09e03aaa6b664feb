//! Look up a WebFinger resource and print its JRD.
//!
//! ```text
//! webfinger acct:alice@example.com
//! webfinger --rel self --rel http://webfinger.net/rel/avatar alice@example.com
//! webfinger --legacy --insecure bob@localhost:8080
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use webfinger::{Client, ClientConfig, Resource, DEFAULT_TIMEOUT_SECS};

#[derive(Debug, Parser)]
#[command(name = "webfinger", version, about = "Resolve a WebFinger resource to its JRD")]
struct Args {
    /// Resource to look up (`acct:user@host` or `user@host`)
    resource: String,

    /// Also try plain http:// endpoints after https:// ones
    #[arg(long, env = "WEBFINGER_INSECURE")]
    insecure: bool,

    /// Link relation to request; may be repeated
    #[arg(long = "rel", env = "WEBFINGER_REL", value_delimiter = ',')]
    rels: Vec<String>,

    /// Skip RFC 7033 lookup and use host-meta discovery only
    #[arg(long, env = "WEBFINGER_LEGACY")]
    legacy: bool,

    /// Per-request timeout in seconds
    #[arg(long, env = "WEBFINGER_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// User-Agent header sent with every request
    #[arg(long, env = "WEBFINGER_USER_AGENT")]
    user_agent: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(args).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<String, Box<dyn std::error::Error>> {
    let mut config = ClientConfig::default()
        .allow_insecure(args.insecure)
        .timeout_secs(args.timeout);
    if let Some(user_agent) = args.user_agent {
        config = config.user_agent(user_agent);
    }

    let client = Client::new(config)?;
    let jrd = if args.legacy {
        let resource = Resource::parse(&args.resource)?;
        client.legacy_get_jrd(&resource).await?
    } else {
        let rels: Vec<&str> = args.rels.iter().map(String::as_str).collect();
        client.lookup(&args.resource, &rels).await?
    };

    Ok(serde_json::to_string_pretty(&jrd)?)
}
