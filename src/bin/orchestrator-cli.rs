use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "orchestrator-cli")]
#[command(about = "Command-line client for the webhook orchestrator", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5001")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the service descriptor
    Info,
    /// Check service health and webhook reachability
    Health,
    /// Forward a JSON payload to the webhook
    Execute {
        /// Inline JSON payload
        #[arg(conflicts_with = "file")]
        payload: Option<String>,

        /// Read the payload from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Info => {
            let res = client.get(format!("{}/", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Health => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Execute { payload, file } => {
            let raw = match (payload, file) {
                (Some(inline), _) => inline,
                (None, Some(path)) => std::fs::read_to_string(path)?,
                (None, None) => "null".to_string(),
            };
            // Validate locally so typos fail before reaching the service.
            let body: Value = serde_json::from_str(&raw)?;

            let mut headers = HeaderMap::new();
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

            let res = client
                .post(format!("{}/api/execute", cli.url))
                .headers(headers)
                .body(serde_json::to_vec(&body)?)
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: orchestrator returned status {}", status);
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
