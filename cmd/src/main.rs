use std::{net::SocketAddr, path::PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use flot_timeseries::params::DEFINITIONS;
use tracing_subscriber::EnvFilter;

mod api;
mod http;

#[derive(Debug, Parser)]
#[command(version, about = "Renders query results as flot time series charts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the result rows stored in a JSON file
    Render {
        #[arg(help = r#"JSON file with an array of result rows

Example:
    [{"subject": "Page 1", "fields": [
        {"label": "Date", "values": [{"type": "time", "value": "2012-01-01T00:00:00Z"}]},
        {"label": "Visitors", "values": [{"type": "number", "value": 10}]}
    ]}]"#)]
        rows: PathBuf,
        /// Printer parameter, e.g. `-p layout=bar -p group=property`
        #[arg(short, long = "param", value_parser = flot_cmd::parse_param)]
        params: Vec<(String, String)>,
        /// Print a complete HTML document instead of the chart only
        #[arg(long, conflicts_with = "json")]
        page: bool,
        /// Print the rendered parts as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the parameters understood by the printer
    Params,
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value = "0.0.0.0:5080")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {
        Command::Render {
            rows,
            params,
            page,
            json,
        } => {
            let start_time = time::Instant::now();
            let title = rows.display().to_string();
            let rows = flot_cmd::load_rows(&rows)?;
            tracing::info!(rows = rows.len(), "load time: {}", start_time.elapsed());

            let rendered = flot_cmd::render(rows, params)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&rendered)?);
            } else if page {
                print!("{}", flot_cmd::page_html(&title, &rendered));
            } else {
                println!("{}", rendered.html);
            }
        }
        Command::Params => {
            for def in DEFINITIONS {
                let values = if def.values.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", def.values.join(", "))
                };
                println!(
                    "{:<12}{:<9}default {:<10}{}{values}",
                    def.name,
                    def.kind,
                    format!("{:?}", def.default),
                    def.description(),
                );
            }
        }
        Command::Serve { addr } => http::server(addr).await?,
    }
    Ok(())
}
