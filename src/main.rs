use clap::Parser;
use miette::{IntoDiagnostic, Result};
use minibank::application::engine::AccountEngine;
use minibank::domain::ports::CurrencyConverterBox;
use minibank::infrastructure::fixed::FixedRateConverter;
use minibank::infrastructure::frankfurter::{DEFAULT_API_URL, FrankfurterConverter};
use minibank::interfaces::csv::account_writer::AccountWriter;
use minibank::interfaces::csv::action_reader::ActionReader;
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input actions CSV file
    input: PathBuf,

    /// Base URL of the currency conversion API
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Fixed conversion rate (CUR=RATE, repeatable). When given, no network
    /// calls are made.
    #[arg(long = "rate", value_name = "CUR=RATE")]
    rates: Vec<String>,
}

fn parse_rate(spec: &str) -> Result<(String, Decimal)> {
    let (currency, rate) = spec
        .split_once('=')
        .ok_or_else(|| miette::miette!("invalid rate '{spec}', expected CUR=RATE"))?;
    let rate = rate.parse::<Decimal>().into_diagnostic()?;
    Ok((currency.to_string(), rate))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let converter: CurrencyConverterBox = if cli.rates.is_empty() {
        Box::new(FrankfurterConverter::with_base_url(cli.api_url))
    } else {
        let mut fixed = FixedRateConverter::new();
        for spec in &cli.rates {
            let (currency, rate) = parse_rate(spec)?;
            fixed = fixed.with_rate(&currency, rate);
        }
        Box::new(fixed)
    };

    let mut engine = AccountEngine::new(converter);

    // Process actions
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = ActionReader::new(file);
    for action_result in reader.actions() {
        match action_result {
            Ok(action) => {
                if let Err(e) = engine.dispatch(action).await {
                    eprintln!("Error processing action: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading action: {}", e);
            }
        }
    }

    // Output final state
    let account = engine.into_account();
    let stdout = io::stdout();
    let mut writer = AccountWriter::new(stdout.lock());
    writer.write_account(&account).into_diagnostic()?;

    Ok(())
}
