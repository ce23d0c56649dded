//! currencyapi CLI
//!
//! Looks up exchange rates and conversions on currencyapi.com from the
//! command line. Responses are printed as JSON on stdout, logs go to stderr.

mod config;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use currencyapi_cache::MemoryCache;
use currencyapi_client::{DefaultRequestFactory, ReqwestHttpClient};
use currencyapi_service::CurrencyApiService;
use currencyapi_service::config::DEFAULT_BASE_URL;
use currencyapi_types::Request;

#[derive(Parser)]
#[command(name = "currencyapi")]
#[command(author, version, about = "currencyapi.com exchange rate client", long_about = None)]
struct Cli {
    /// Base URL of the currencyapi.com API
    #[arg(long, env = "CURRENCYAPI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Query(Query),
    /// Check whether the configured plan can serve a request, without calling the API
    Supports {
        #[command(subcommand)]
        query: Query,
    },
}

#[derive(Subcommand)]
enum Query {
    /// Exchange rate from BASE to QUOTE
    Rate {
        base: String,
        quote: String,
        /// Historical date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Convert AMOUNT from BASE to QUOTE (paid plans only)
    Convert {
        amount: Decimal,
        base: String,
        quote: String,
        /// Historical date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

impl Query {
    fn into_request(self) -> Request {
        match self {
            Query::Rate { base, quote, date } => {
                let (base, quote) = (base.to_uppercase(), quote.to_uppercase());
                match date {
                    Some(date) => Request::historical_rate(base, quote, date),
                    None => Request::current_rate(base, quote),
                }
            }
            Query::Convert {
                amount,
                base,
                quote,
                date,
            } => {
                let (base, quote) = (base.to_uppercase(), quote.to_uppercase());
                match date {
                    Some(date) => Request::historical_conversion(amount, base, quote, date),
                    None => Request::current_conversion(amount, base, quote),
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,currencyapi_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = config::Config::from_env()?;
    let service_config = config.service_config().with_base_url(cli.base_url);

    tracing::debug!(?service_config, "configuration loaded");

    let service = CurrencyApiService::new(
        service_config,
        MemoryCache::new(),
        ReqwestHttpClient::new()?,
        DefaultRequestFactory,
    );

    match cli.command {
        Commands::Supports { query } => {
            let request = query.into_request();
            let supported = service.supports(&request);
            let output = serde_json::json!({ "request": request, "supported": supported });
            println!("{}", serde_json::to_string_pretty(&output)?);
            if !supported {
                std::process::exit(1);
            }
        }

        Commands::Query(query) => {
            let response = service.send(&query.into_request()).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            if response.is_error() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
