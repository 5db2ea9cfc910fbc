use anyhow::{Context, Result};
use clap::Parser;
use hoi::analysis::{AppendPolicy, CooccurrenceAnalyzer};
use hoi::cli::{Cli, Commands, InspectFormat, OutputFormat};
use hoi::config::HoiConfig;
use hoi::csv_output::CsvReport;
use hoi::datasets::{Dataset, H2ODataset};
use hoi::json_output::{JsonDatasetInfo, JsonReport, JsonSample};
use hoi::structs::{BoundingBoxFormat, Entity};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn load_config(path: Option<&Path>) -> Result<HoiConfig> {
    match path {
        Some(path) => HoiConfig::from_file(path),
        None => Ok(HoiConfig::default()),
    }
}

fn open_dataset(path: &Path) -> Result<H2ODataset> {
    H2ODataset::open(path)
        .with_context(|| format!("Failed to load H2O dataset from {}", path.display()))
}

fn run_analyze(
    dataset: &H2ODataset,
    policy: AppendPolicy,
    format: OutputFormat,
    list_samples: bool,
) -> Result<()> {
    let report = CooccurrenceAnalyzer::new(policy).analyze(dataset);

    match format {
        OutputFormat::Text => print!("{}", report.to_report_string(list_samples)),
        OutputFormat::Json => {
            println!("{}", JsonReport::from_report(&report, list_samples).to_json()?)
        }
        OutputFormat::Csv => print!("{}", CsvReport::new(&report).to_csv(list_samples)),
    }
    Ok(())
}

fn print_dataset_info(dataset: &H2ODataset, format: InspectFormat) -> Result<()> {
    let info = JsonDatasetInfo::from_dataset(dataset);

    match format {
        InspectFormat::Json => println!("{}", info.to_json()?),
        InspectFormat::Text => {
            println!("=== H2O Dataset ===");
            println!("Root: {}", dataset.root().display());
            println!("Samples: {}", info.samples);
            for split in &info.splits {
                println!("  {:<10} {:>8}", split.name, split.samples);
            }
            println!();
            println!(
                "Categories ({}): {}",
                info.categories.len(),
                info.categories.join(", ")
            );
            println!("Verbs ({}): {}", info.verbs.len(), info.verbs.join(", "));
        }
    }
    Ok(())
}

fn print_sample(
    dataset: &H2ODataset,
    id: &str,
    bbox_format: BoundingBoxFormat,
    image_size: Option<(u32, u32)>,
    format: InspectFormat,
) -> Result<()> {
    let Some(sample) = dataset.get(id) else {
        anyhow::bail!("Sample '{}' not found in {}", id, dataset.root().display());
    };

    let entities: Vec<Entity> = sample
        .entities
        .iter()
        .map(|entity| {
            let bbox = match image_size {
                Some(size) => entity.bbox.denormalize(size),
                None => entity.bbox,
            };
            Entity {
                bbox: bbox.convert(bbox_format),
                category: entity.category.clone(),
            }
        })
        .collect();

    match format {
        InspectFormat::Json => println!("{}", JsonSample::new(id, sample, entities).to_json()?),
        InspectFormat::Text => {
            println!("=== Sample {} ===", id);
            println!("Image: {}", sample.image_path.display());
            println!("Splits: {}", sample.splits.join(", "));
            println!();
            println!("Entities ({}):", entities.len());
            for (index, entity) in entities.iter().enumerate() {
                let [a, b, c, d] = entity.bbox.coordinates;
                println!(
                    "  [{}] {:<16} {} ({:.4}, {:.4}, {:.4}, {:.4})",
                    index, entity.category, entity.bbox.format, a, b, c, d
                );
            }
            println!();
            println!("Actions ({}):", sample.actions.len());
            for action in &sample.actions {
                let target = action
                    .target
                    .map_or_else(|| "-".to_string(), |t| t.to_string());
                let instrument = action
                    .instrument
                    .map_or_else(|| "-".to_string(), |i| i.to_string());
                println!(
                    "  {:<16} subject={} target={} instrument={}",
                    action.verb, action.subject, target, instrument
                );
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = load_config(args.config.as_deref())?;
    let dataset_path =
        |explicit: Option<PathBuf>| explicit.unwrap_or_else(|| config.dataset.path.clone());

    match args.command {
        Commands::Analyze {
            dataset,
            format,
            append_policy,
            list_samples,
        } => {
            let dataset = open_dataset(&dataset_path(dataset))?;
            let policy = append_policy.unwrap_or(config.analysis.append_policy);
            run_analyze(&dataset, policy, format, list_samples)?;
        }
        Commands::Info { dataset, format } => {
            let dataset = open_dataset(&dataset_path(dataset))?;
            print_dataset_info(&dataset, format)?;
        }
        Commands::Show {
            dataset,
            id,
            bbox_format,
            image_size,
            format,
        } => {
            let dataset = open_dataset(&dataset_path(dataset))?;
            print_sample(&dataset, &id, bbox_format.into(), image_size, format)?;
        }
    }

    Ok(())
}
