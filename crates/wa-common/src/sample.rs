//! Observation samples and their input wire formats.
//!
//! Two JSON shapes are accepted for each element of the input array:
//!
//! ```json
//! {"time_label": "15:00", "hour": 15, "minute": 0, "speed": 22, "direction": "GD", "temperature": 9}
//! ```
//!
//! and the nested record emitted by the hourly forecast scraper:
//!
//! ```json
//! {"zaman": {"tam": "15:00", "saat": 15, "dakika": 0}, "sicaklik": 9, "ruzgar": {"yon": "GD", "hiz": 22}}
//! ```
//!
//! Values are passed through uninterpreted; the engine performs no range checks.

use crate::direction::Direction;
use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One wind observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Sample {
    /// Display label for the observation time (`"15:00"`).
    pub time_label: String,
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Minute of hour, 0-59.
    pub minute: u8,
    /// Wind speed in the source unit.
    pub speed: f64,
    #[schemars(with = "String")]
    pub direction: Direction,
    pub temperature: f64,
}

impl Sample {
    pub fn new(
        time_label: impl Into<String>,
        hour: u8,
        minute: u8,
        speed: f64,
        direction: impl Into<Direction>,
        temperature: f64,
    ) -> Self {
        Self {
            time_label: time_label.into(),
            hour,
            minute,
            speed,
            direction: direction.into(),
            temperature,
        }
    }

    /// Sample on the hour, labelled `HH:00`.
    pub fn hourly(hour: u8, speed: f64, direction: impl Into<Direction>, temperature: f64) -> Self {
        Self::new(format!("{:02}:00", hour), hour, 0, speed, direction, temperature)
    }

    /// Minutes since midnight.
    pub fn minute_of_day(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }
}

#[derive(Debug, Deserialize)]
struct ScrapedTime {
    #[serde(rename = "tam")]
    label: String,
    #[serde(rename = "saat")]
    hour: u8,
    #[serde(rename = "dakika", default)]
    minute: u8,
}

#[derive(Debug, Deserialize)]
struct ScrapedWind {
    #[serde(rename = "yon")]
    direction: Direction,
    #[serde(rename = "hiz")]
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ScrapedObservation {
    #[serde(rename = "zaman")]
    time: ScrapedTime,
    #[serde(rename = "ruzgar")]
    wind: ScrapedWind,
    #[serde(rename = "sicaklik")]
    temperature: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SampleInput {
    Flat(Sample),
    Scraped(ScrapedObservation),
}

impl From<SampleInput> for Sample {
    fn from(input: SampleInput) -> Self {
        match input {
            SampleInput::Flat(sample) => sample,
            SampleInput::Scraped(obs) => Sample {
                time_label: obs.time.label,
                hour: obs.time.hour,
                minute: obs.time.minute,
                speed: obs.wind.speed,
                direction: obs.wind.direction,
                temperature: obs.temperature,
            },
        }
    }
}

/// Parse a JSON array of observations in either accepted shape.
///
/// An empty array parses successfully; emptiness is reported by the engine.
pub fn parse_samples(json: &str) -> Result<Vec<Sample>> {
    let inputs: Vec<serde_json::Value> = serde_json::from_str(json)?;
    inputs
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            serde_json::from_value::<SampleInput>(value)
                .map(Sample::from)
                .map_err(|e| Error::InvalidInput(format!("observation {}: {}", i, e)))
        })
        .collect()
}
