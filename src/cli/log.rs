use chrono::Local;
use std::io;
use std::path::PathBuf;

use crate::cli::prompt;
use crate::config;
use crate::error::{BikelogError, Result};
use crate::logger::RideLogger;
use crate::models::{parse_date, Distance, RideEntry};

/// Record a ride in its year's log file
pub fn run(
    config_path: Option<PathBuf>,
    date: Option<String>,
    rider: Option<String>,
    bike: Option<String>,
    distance: Option<String>,
    yes: bool,
) -> Result<()> {
    let distance = distance.ok_or_else(|| {
        BikelogError::MissingArgument(
            "--distance is required (use 'bikelog list-bikes' or 'bikelog list-riders' to see available options)"
                .to_string(),
        )
    })?;
    let rider = rider.ok_or_else(|| {
        BikelogError::MissingArgument(
            "--rider is required (use 'bikelog list-riders' to see available riders)".to_string(),
        )
    })?;
    let bike = bike.ok_or_else(|| {
        BikelogError::MissingArgument(
            "--bike is required (use 'bikelog list-bikes' to see available bikes)".to_string(),
        )
    })?;

    // Parse date (default to today)
    let ride_date = match date {
        Some(date_str) => parse_date(&date_str)?,
        None => Local::now().date_naive(),
    };
    let distance: Distance = distance.parse()?;

    let config = config::load_or_default(config_path)?;
    let logger = RideLogger::new(&config);
    let entry = RideEntry::new(ride_date, rider, distance, bike);

    if !yes {
        let mut input = io::stdin().lock();
        let mut out = io::stdout();
        for (kind, value) in logger.unknown_values(&entry) {
            if !prompt::confirm_unknown(&mut input, &mut out, logger.options(kind), value)? {
                println!("Ride not logged.");
                return Ok(());
            }
        }
    }

    let path = logger.append(&entry, true)?;

    println!(
        "✓ Logged ride: {} - {} rode {} miles on {}",
        entry.formatted_date(),
        entry.rider(),
        entry.distance(),
        entry.bike()
    );
    println!("  Saved to {}", path.display());

    Ok(())
}
