use chrono::{Datelike, NaiveDate};
use csv::StringRecord;
use std::fmt;
use std::str::FromStr;

use crate::error::{BikelogError, Result};

/// Column names written as the first line of every log file
pub const HEADER: [&str; 5] = ["Date", "Name", "Distance", "Bike", "Comment"];

/// Ride distance in miles
///
/// Keeps the text as typed so the log shows exactly what the rider entered.
#[derive(Debug, Clone, PartialEq)]
pub struct Distance {
    miles: f64,
    raw: String,
}

impl Distance {
    pub fn miles(&self) -> f64 {
        self.miles
    }
}

impl FromStr for Distance {
    type Err = BikelogError;

    fn from_str(s: &str) -> Result<Self> {
        let raw = s.trim();
        let miles: f64 = raw
            .parse()
            .map_err(|_| BikelogError::InvalidDistance(s.to_string()))?;

        if !miles.is_finite() || miles <= 0.0 {
            return Err(BikelogError::InvalidDistance(s.to_string()));
        }

        Ok(Self {
            miles,
            raw: raw.to_string(),
        })
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A single logged ride
#[derive(Debug, Clone, PartialEq)]
pub struct RideEntry {
    date: NaiveDate,
    rider: String,
    distance: Distance,
    bike: String,
    comment: Option<String>,
}

impl RideEntry {
    pub fn new(
        date: NaiveDate,
        rider: impl Into<String>,
        distance: Distance,
        bike: impl Into<String>,
    ) -> Self {
        Self {
            date,
            rider: rider.into(),
            distance,
            bike: bike.into(),
            comment: None,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn rider(&self) -> &str {
        &self.rider
    }

    pub fn distance(&self) -> &Distance {
        &self.distance
    }

    pub fn bike(&self) -> &str {
        &self.bike
    }

    /// Date as written to the log: month/day/year without leading zeros
    pub fn formatted_date(&self) -> String {
        self.date.format("%-m/%-d/%Y").to_string()
    }

    /// CSV row for this entry, in `HEADER` column order
    pub fn to_record(&self) -> StringRecord {
        StringRecord::from(vec![
            self.formatted_date(),
            self.rider.clone(),
            self.distance.to_string(),
            self.bike.clone(),
            self.comment.clone().unwrap_or_default(),
        ])
    }
}

/// Parse a `YYYY-MM-DD` date from the command line
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| BikelogError::InvalidDate(input.to_string()))
}
