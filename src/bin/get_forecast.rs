use anyhow::{Context, Result};
use argh::FromArgs;
use std::io::Write;

use weather_forecast_skill::{formatters, ForecastFetcher};

#[derive(FromArgs)]
/// Get the National Weather Service forecast for a US coordinate.
struct Args {
    /// latitude in decimal degrees
    #[argh(option)]
    lat: f64,

    /// longitude in decimal degrees
    #[argh(option)]
    lon: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    weather_forecast_skill::init_logging();

    let args: Args = argh::from_env();

    let result = match ForecastFetcher::new() {
        Ok(fetcher) => fetcher.get_forecast(args.lat, args.lon).await,
        Err(e) => Err(e),
    };

    let json = formatters::render(&result)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write result to stdout")?;
    stdout.flush().context("failed to flush stdout")
}
