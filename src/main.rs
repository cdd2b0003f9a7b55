use clap::{Parser, Subcommand};
use dotenv::dotenv;
use screener_bridge::config::AppConfig;
use screener_bridge::voice::{DisabledProvider, ElevenLabsProvider, SessionProvider};
use screener_bridge::{screener, server};

use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Port to listen on (overrides the PORT env var)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Convert a SQL-like filter to a screener.in URL and print it
    Convert {
        /// The filter text, conditions joined by AND
        #[arg(short, long)]
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Serve { port } => {
            let mut config = AppConfig::from_env()?;
            if let Some(port) = port {
                config.port = port;
            }

            let provider: Arc<dyn SessionProvider> = match ElevenLabsProvider::new() {
                Ok(provider) => Arc::new(provider),
                Err(e) => {
                    log::warn!("Voice sessions disabled: {}", e);
                    Arc::new(DisabledProvider)
                }
            };

            server::serve(config, provider).await?;
        }
        Commands::Convert { query } => {
            println!("{}", screener::translate(&query));
        }
    }

    Ok(())
}
