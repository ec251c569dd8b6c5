use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "whitted")]
#[command(about = "Render a JSON scene with a Whitted-style ray tracer")]
pub struct Args {
    /// Scene file (JSON)
    pub scene: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 640, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 480, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Anti-aliasing multiplier (rays per pixel axis), overrides the scene file
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub aa: Option<u32>,

    /// Enable ambient (indirect) lighting, overrides the scene file
    #[arg(long)]
    pub ambient: bool,

    /// Maximum recursion depth
    #[arg(long, default_value_t = 4)]
    pub max_depth: u32,

    /// Hemisphere samples per ambient-lit hit
    #[arg(long, default_value_t = 8)]
    pub samples: u32,

    /// Seed for ambient sampling
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Worker threads (defaults to one per core)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Render on the calling thread only
    #[arg(long, conflicts_with = "threads")]
    pub single_threaded: bool,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["whitted", "scene.json"]).unwrap();
        assert_eq!(args.scene, PathBuf::from("scene.json"));
        assert_eq!(args.output, PathBuf::from("output.png"));
        assert_eq!(args.max_depth, 4);
        assert_eq!(args.samples, 8);
        assert!(args.aa.is_none());
        assert!(!args.ambient);
        assert!(!args.single_threaded);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "whitted", "scene.json", "-o", "out.png", "--width", "32", "--height", "16", "--aa",
            "3", "--ambient", "--seed", "7", "--threads", "2", "--log-level", "debug",
        ])
        .unwrap();
        assert_eq!(args.output, PathBuf::from("out.png"));
        assert_eq!((args.width, args.height), (32, 16));
        assert_eq!(args.aa, Some(3));
        assert!(args.ambient);
        assert_eq!(args.seed, 7);
        assert_eq!(args.threads, Some(2));
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }

    #[test]
    fn test_rejects_zero_aa() {
        assert!(Args::try_parse_from(["whitted", "scene.json", "--aa", "0"]).is_err());
    }

    #[test]
    fn test_requires_scene() {
        assert!(Args::try_parse_from(["whitted"]).is_err());
    }
}
