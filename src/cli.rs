//! Command line front end for the flight rewards engine.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use flight_rewards::calculation::{RedemptionValuator, RewardEngine};
use flight_rewards::config::ConfigLoader;
use flight_rewards::error::EngineError;
use flight_rewards::models::{CarrierTrip, Itinerary, Redemption, Segment, TierStatus};
use flight_rewards::telemetry::{self, TelemetryError};

#[derive(Parser, Debug)]
#[command(
    name = "flyrewards",
    about = "Calculate reward points, tier points and redemption value for BA flights",
    version
)]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report what a paid trip earns
    Earn(EarnArgs),
    /// Value an award redemption against the cash fare
    Redeem(RedeemArgs),
}

#[derive(Args, Debug)]
struct EarnArgs {
    /// A segment as STOPS:FARE, e.g. LHR-JFK:Y or LHR-CDG-NCE:Q (repeatable)
    #[arg(long = "segment", short = 's', required = true)]
    segments: Vec<SegmentArg>,

    /// Ticket price in pounds
    #[arg(long)]
    price: Decimal,

    /// Tier status of the traveller
    #[arg(long, default_value = "blue")]
    status: TierStatus,

    /// Directory holding program.yaml and airports.yaml
    #[arg(long, default_value = "./config/ba")]
    config: PathBuf,
}

#[derive(Args, Debug)]
struct RedeemArgs {
    /// Points needed for the award booking
    #[arg(long)]
    points: u64,

    /// Cash co-payment in pounds
    #[arg(long, default_value = "0")]
    cash: Decimal,

    /// Cash fare for the same flight in pounds
    #[arg(long)]
    price: Decimal,
}

/// A segment as written on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SegmentArg {
    stops: Vec<String>,
    fare_code: String,
}

impl FromStr for SegmentArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (route, fare_code) = s
            .rsplit_once(':')
            .ok_or_else(|| format!("expected STOPS:FARE, got '{}'", s))?;
        let stops: Vec<String> = route.split('-').map(|stop| stop.trim().to_string()).collect();
        if stops.len() < 2 {
            return Err(format!("expected at least two stops in '{}'", route));
        }
        Ok(Self {
            stops,
            fare_code: fare_code.trim().to_string(),
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}

pub(crate) fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level)?;

    let output = match cli.command {
        Command::Earn(args) => earn(args)?,
        Command::Redeem(args) => redeem(args)?,
    };
    println!("{output}");
    Ok(())
}

fn earn(args: EarnArgs) -> Result<String, CliError> {
    let config = ConfigLoader::load(&args.config)?;

    let segments = args
        .segments
        .into_iter()
        .map(|arg| Segment::new(arg.stops, &arg.fare_code))
        .collect::<Result<Vec<_>, _>>()?;
    let trip = CarrierTrip::new(Itinerary::new(segments)?, args.price, args.status)?;
    debug!(segments = trip.itinerary().segments().len(), "Parsed trip");

    let report = RewardEngine::new(&trip, config.airports(), config.rules()).report()?;
    Ok(serde_json::to_string_pretty(&report)?)
}

fn redeem(args: RedeemArgs) -> Result<String, CliError> {
    let redemption = Redemption::new(args.points, args.cash)?;
    let valuation = RedemptionValuator::default().valuate(&redemption, args.price);
    Ok(serde_json::to_string_pretty(&valuation)?)
}
