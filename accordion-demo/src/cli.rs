use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Nested expansion groups in the terminal.
#[derive(Debug, Parser)]
#[command(name = "accordion-demo", version, about)]
pub struct Args {
    /// Who owns the inner group's open items
    #[arg(long, value_enum, default_value_t = Mode::Lifted)]
    pub mode: Mode,

    /// Log file path (defaults to the platform cache directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, default_value = "debug")]
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// The embedder keeps the inner open items; they survive the outer
    /// item closing.
    Lifted,
    /// The inner group keeps its own open items and starts over when the
    /// outer item reopens.
    Uncontrolled,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Lifted => write!(f, "lifted"),
            Mode::Uncontrolled => write!(f, "uncontrolled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["accordion-demo"]).unwrap();
        assert_eq!(args.mode, Mode::Lifted);
        assert_eq!(args.log_file, None);
        assert_eq!(args.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_explicit_options() {
        let args = Args::try_parse_from([
            "accordion-demo",
            "--mode",
            "uncontrolled",
            "--log-file",
            "/tmp/demo.log",
            "--log-level",
            "trace",
        ])
        .unwrap();
        assert_eq!(args.mode, Mode::Uncontrolled);
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/demo.log")));
        assert_eq!(args.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Args::try_parse_from(["accordion-demo", "--mode", "shared"]).is_err());
    }
}
