//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "kriya-meditation")]
#[command(about = "A meditation timer and Kriya Yoga library served over HTTP")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20610")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Milliseconds between countdown ticks
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Interval between countdown ticks
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["kriya-meditation"]).unwrap();
        assert_eq!(config.address(), "0.0.0.0:20610");
        assert_eq!(config.tick_period(), Duration::from_secs(1));
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn overrides() {
        let config = Config::try_parse_from([
            "kriya-meditation", "-p", "8080", "--host", "127.0.0.1", "--tick-ms", "50", "-v",
        ])
        .unwrap();
        assert_eq!(config.address(), "127.0.0.1:8080");
        assert_eq!(config.tick_period(), Duration::from_millis(50));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn rejects_zero_tick_period() {
        assert!(Config::try_parse_from(["kriya-meditation", "--tick-ms", "0"]).is_err());
    }
}
