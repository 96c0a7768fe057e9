use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use bg_app::{AppError, AppResult, WorldModel};
use bg_core::Year;
use bg_data::DatasetSource;

#[derive(Parser)]
#[command(name = "bg-cli")]
#[command(about = "Bordergraph CLI - historical border graph analysis tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate dataset file syntax and structure
    Validate {
        /// Path to the dataset file (YAML or JSON)
        dataset_path: PathBuf,
    },
    /// Build the graph for a year and print degree and connectivity stats
    Stats {
        /// Path to the dataset file (YAML or JSON)
        dataset_path: PathBuf,
        /// Year of interest (borders are cumulative up to this year)
        year: Year,
    },
    /// Build the graph for a year and list the countries reachable from one
    Reach {
        /// Path to the dataset file (YAML or JSON)
        dataset_path: PathBuf,
        /// Year of interest (borders are cumulative up to this year)
        year: Year,
        /// Short code of the start country, e.g. USA
        code: String,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { dataset_path } => cmd_validate(&dataset_path),
        Commands::Stats { dataset_path, year } => cmd_stats(&dataset_path, year),
        Commands::Reach {
            dataset_path,
            year,
            code,
        } => cmd_reach(&dataset_path, year, &code),
    }
}

fn open_source(path: &Path) -> AppResult<DatasetSource> {
    let source = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => DatasetSource::open_json(path)?,
        _ => DatasetSource::open_yaml(path)?,
    };
    Ok(source)
}

fn cmd_validate(path: &Path) -> AppResult<()> {
    let source = open_source(path)?;
    let dataset = source.dataset();
    println!(
        "Dataset '{}' is valid: {} countries, {} border records",
        dataset.name,
        dataset.countries.len(),
        dataset.borders.len()
    );
    Ok(())
}

fn cmd_stats(path: &Path, year: Year) -> AppResult<()> {
    let mut model = WorldModel::new(open_source(path)?);
    let summary = model.build_year(year)?;

    println!(
        "Built graph for {}: {} vertices, {} edges ({} records skipped)",
        summary.year, summary.vertex_count, summary.edge_count, summary.skipped_records
    );

    println!("\nDegree per country:");
    for (country, degree) in model.degrees()? {
        println!("{degree:>4}  {country}");
    }

    println!(
        "\nConnected components: {}",
        model.connected_component_count()?
    );
    Ok(())
}

fn cmd_reach(path: &Path, year: Year, code: &str) -> AppResult<()> {
    let mut model = WorldModel::new(open_source(path)?);
    model.build_year(year)?;

    let start = model
        .find_by_code(code)
        .cloned()
        .ok_or_else(|| AppError::CountryNotFound {
            code: code.to_string(),
        })?;

    let reachable = model.reachable_from(start.id)?;
    println!("Reachable countries from {}: {}", start, reachable.len());
    for country in reachable {
        println!("  {country}");
    }
    Ok(())
}
