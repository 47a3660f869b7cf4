use std::collections::HashMap;

use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde_json::Value;

use edge_cache_demo::edge::{classify_with, HeaderProfile};

/// Response headers worth showing when probing a caching policy.
const CACHE_HEADERS: &[&str] = &[
    "cache-control",
    "cdn-cache-control",
    "cloudflare-cdn-cache-control",
    "x-cache-strategy",
    "x-generated-at",
    "x-request-id",
    "age",
    "cf-cache-status",
    "edge-cache-outcome",
];

#[derive(Parser)]
#[command(name = "edge-probe")]
#[command(about = "Probe the edge cache demo and inspect caching headers", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    /// Extra request header, as `name: value` (repeatable). Useful to fake edge headers.
    #[arg(short = 'H', long = "header", global = true)]
    headers: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// GET /api/hello
    Hello,
    /// GET (or POST) /api/cache
    Cache {
        #[arg(long)]
        post: bool,
    },
    /// GET /api/strategies?strategy=<name>
    Strategy { name: String },
    /// GET any path and show its caching headers
    Page { path: String },
    /// Classify the given -H headers locally, without a server
    Classify {
        #[arg(long, default_value = "generic")]
        profile: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let pairs = parse_headers(&cli.headers)?;

    if let Commands::Classify { profile } = &cli.command {
        let profile: HeaderProfile = profile.parse()?;
        let map: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        let info = classify_with(&map, &profile.names());
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    let mut headers = HeaderMap::new();
    for (name, value) in &pairs {
        headers.insert(
            HeaderName::from_bytes(name.as_bytes())?,
            HeaderValue::from_str(value)?,
        );
    }

    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');
    let request = match cli.command {
        Commands::Hello => client.get(format!("{}/api/hello", base)),
        Commands::Cache { post: false } => client.get(format!("{}/api/cache", base)),
        Commands::Cache { post: true } => client.post(format!("{}/api/cache", base)),
        Commands::Strategy { name } => client
            .get(format!("{}/api/strategies", base))
            .query(&[("strategy", name)]),
        Commands::Page { path } => {
            let path = path.trim_start_matches('/');
            client.get(format!("{}/{}", base, path))
        }
        Commands::Classify { .. } => unreachable!("handled above"),
    };

    let res = request.headers(headers).send().await?;
    print_response(res).await
}

/// Split `name: value` arguments.
fn parse_headers(raw: &[String]) -> Result<Vec<(String, String)>, String> {
    raw.iter()
        .map(|h| {
            h.split_once(':')
                .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
                .filter(|(k, _)| !k.is_empty())
                .ok_or_else(|| format!("invalid header '{}', expected 'name: value'", h))
        })
        .collect()
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    println!("{} {}", res.status(), res.url());
    for name in CACHE_HEADERS {
        if let Some(value) = res.headers().get(*name) {
            println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
        }
    }
    println!();

    let is_json = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));

    if is_json {
        let json: Value = res.json().await?;
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        let text = res.text().await?;
        println!("({} bytes of body)", text.len());
    }
    Ok(())
}
