use anyhow::{Context, Result};
use argh::FromArgs;
use std::io::Write;

use weather_forecast_skill::{formatters, Geocoder};

const USAGE: &str = "Usage: geocode <city name>";

#[derive(FromArgs)]
/// Resolve a US city name to coordinates.
struct Args {
    /// city name, e.g. `Seattle` or `New York, NY`; multiple words are joined with spaces
    #[argh(positional)]
    city: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    weather_forecast_skill::init_logging();

    let args: Args = argh::from_env();
    let city = args.city.join(" ");
    if city.trim().is_empty() {
        print_json(&formatters::render_error(USAGE)?)?;
        std::process::exit(1);
    }

    let result = match Geocoder::new() {
        Ok(geocoder) => geocoder.geocode_city(&city).await,
        Err(e) => Err(e),
    };

    print_json(&formatters::render(&result)?)
}

fn print_json(json: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write result to stdout")?;
    stdout.flush().context("failed to flush stdout")
}
