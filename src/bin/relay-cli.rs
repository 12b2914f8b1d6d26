use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use api_relay::relay::DATA_PATH;

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Command line client for the API relay", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch data through the relay
    Fetch,
    /// Send a new post through the relay
    Submit {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
        #[arg(long)]
        user_id: i64,
    },
    /// Print the relay's OpenAPI document
    Docs {
        #[arg(long, default_value = "/api-docs")]
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Fetch => client.get(format!("{base}{DATA_PATH}")).send().await?,
        Commands::Submit { title, body, user_id } => {
            client
                .post(format!("{base}{DATA_PATH}"))
                .json(&json!({ "title": title, "body": body, "userId": user_id }))
                .send()
                .await?
        }
        Commands::Docs { path } => {
            let path = path.trim_end_matches('/');
            client.get(format!("{base}{path}/openapi.json")).send().await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: relay returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        std::process::exit(1);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
