//! CLI argument parsing for hoi

use crate::analysis::AppendPolicy;
use crate::structs::BoundingBoxFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

/// Output format for commands without a tabular report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InspectFormat {
    Text,
    Json,
}

/// Bounding box format as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BoxFormatArg {
    Xyxy,
    Xywh,
    Cxcywh,
}

impl From<BoxFormatArg> for BoundingBoxFormat {
    fn from(arg: BoxFormatArg) -> Self {
        match arg {
            BoxFormatArg::Xyxy => BoundingBoxFormat::Xyxy,
            BoxFormatArg::Xywh => BoundingBoxFormat::Xywh,
            BoxFormatArg::Cxcywh => BoundingBoxFormat::Cxcywh,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "hoi")]
#[command(version)]
#[command(about = "Human-object interaction dataset inspection and action co-occurrence analysis", long_about = None)]
pub struct Cli {
    /// Enable debug tracing on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to a hoi.toml configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count action co-occurrence patterns over the whole dataset
    Analyze {
        /// Dataset directory (defaults to the configured path)
        dataset: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// When samples are appended to the DSST/SSDT collections (overrides hoi.toml)
        #[arg(long, value_enum)]
        append_policy: Option<AppendPolicy>,

        /// Include the sample ids of every collection in the report
        #[arg(long)]
        list_samples: bool,
    },

    /// Show dataset size, splits, categories and verbs
    Info {
        /// Dataset directory (defaults to the configured path)
        dataset: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: InspectFormat,
    },

    /// Print the entities and actions of one sample
    Show {
        /// Dataset directory (defaults to the configured path)
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Sample id
        id: String,

        /// Bounding box format to print
        #[arg(long, value_enum, default_value = "xyxy")]
        bbox_format: BoxFormatArg,

        /// Convert boxes to pixels for an image of this size (e.g. 640x480)
        #[arg(long, value_name = "WxH", value_parser = parse_image_size)]
        image_size: Option<(u32, u32)>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: InspectFormat,
    },
}

/// Parse a `WIDTHxHEIGHT` image size
pub fn parse_image_size(s: &str) -> Result<(u32, u32), String> {
    let (width, height) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("Invalid image size '{}': expected WIDTHxHEIGHT", s))?;

    let parse = |v: &str| {
        v.trim()
            .parse::<u32>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| format!("Invalid image size '{}': dimensions must be positive integers", s))
    };

    Ok((parse(width)?, parse(height)?))
}
