use clap::ValueEnum;
use std::fmt;

/// How a command prints its result on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Container markup for render commands, tab-separated rows for listings
    Plain,
    /// One pretty-printed JSON document
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Verbosity of the postgrid crates on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Crates whose events follow `--log-level`; everything else stays at warn
const LOG_TARGETS: &[&str] = &["postgrid", "postgrid_runtime", "postgrid_engine"];

impl LogLevel {
    /// Filter directive for `tracing_subscriber::EnvFilter`.
    /// HTTP client internals are only shown at warn or above.
    pub fn directive(self) -> String {
        let mut directive = match self {
            LogLevel::Error => "error".to_string(),
            _ => "warn".to_string(),
        };
        for target in LOG_TARGETS {
            directive.push_str(&format!(",{}={}", target, self));
        }
        directive
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
