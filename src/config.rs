//! Simulation configuration.
//!
//! Loaded from a JSON file (`cpu-sched run --config FILE`) with missing
//! fields defaulted; command-line flags override file values.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SchedError, SchedResult};
use crate::scheduler::round_robin;

/// Quantum used when the caller does not supply one.
pub const DEFAULT_TIME_QUANTUM: i64 = 3;

/// Output rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable report.
    #[default]
    Text,
    /// Pretty-printed JSON of the result records.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Settings for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round Robin time quantum.
    pub time_quantum: i64,
    /// Report format.
    pub format: OutputFormat,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_quantum: DEFAULT_TIME_QUANTUM,
            format: OutputFormat::Text,
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time quantum.
    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.time_quantum = time_quantum;
        self
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Rejects a non-positive quantum.
    pub fn validate(&self) -> SchedResult<()> {
        round_robin::validate_quantum(self.time_quantum).map(|_| ())
    }

    /// Validates and returns the configuration.
    pub fn validated(self) -> SchedResult<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Reads and validates a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> SchedResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| SchedError::io(path, e))?;
        Self::try_from(text.as_str())
    }
}

impl TryFrom<&str> for SimulationConfig {
    type Error = SchedError;

    /// Parses a JSON configuration object; missing fields take defaults.
    fn try_from(json: &str) -> Result<Self, Self::Error> {
        let config: Self = serde_json::from_str(json).map_err(|e| SchedError::Parse {
            line: e.line(),
            message: e.to_string(),
        })?;
        config.validated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SimulationConfig::new();
        assert_eq!(c.time_quantum, 3);
        assert_eq!(c.format, OutputFormat::Text);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builder_and_validation() {
        let c = SimulationConfig::new()
            .with_time_quantum(0)
            .with_format(OutputFormat::Json);
        assert!(matches!(
            c.validate(),
            Err(SchedError::InvalidTimeQuantum(0))
        ));
        assert!(SimulationConfig::new().with_time_quantum(5).validated().is_ok());
    }

    #[test]
    fn test_from_json() {
        let c = SimulationConfig::try_from(r#"{"time_quantum": 4}"#).unwrap();
        assert_eq!(c.time_quantum, 4);
        assert_eq!(c.format, OutputFormat::Text);

        let c = SimulationConfig::try_from(r#"{"format": "json"}"#).unwrap();
        assert_eq!(c.time_quantum, DEFAULT_TIME_QUANTUM);
        assert_eq!(c.format, OutputFormat::Json);

        assert!(SimulationConfig::try_from(r#"{"time_quantum": -2}"#).is_err());
        assert!(SimulationConfig::try_from("not json").is_err());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sim.json");
        fs::write(&path, r#"{"time_quantum": 5, "format": "json"}"#).unwrap();
        let c = SimulationConfig::load(&path).unwrap();
        assert_eq!(
            c,
            SimulationConfig::new()
                .with_time_quantum(5)
                .with_format(OutputFormat::Json)
        );

        fs::write(&path, r#"{"time_quantum": 0}"#).unwrap();
        assert!(matches!(
            SimulationConfig::load(&path),
            Err(SchedError::InvalidTimeQuantum(0))
        ));

        let missing = dir.path().join("absent.json");
        assert!(matches!(
            SimulationConfig::load(&missing),
            Err(SchedError::Io { .. })
        ));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
