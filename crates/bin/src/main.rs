//! Hobart CLI binary.
//!
//! Scores snapshot files, ranks directories of snapshots and writes
//! markdown research reports.

mod error;
mod format;
mod integration;

use clap::{Parser, Subcommand};
use error::CliError;
use format::{OutputFormat, to_json};
use hobart::{ScoredUniverse, Universe, UniverseEntry};
use hobart_data::FinancialSnapshot;
use hobart_data::files::read_snapshot;
use hobart_factors::{ComponentKind, MoatFactor, Scorecard, ScorecardEngine, available_components};
use hobart_output::{
    ExportFormat, Exporter, RankingExport, ReportBuilder, ReportKind, ScorecardExport, fmt_score,
    render_peers_report, render_sector_report, render_stock_report,
};
use hobart_rank::{Allocation, RankedEntity};
use integration::config::{CliConfig, load_config};
use integration::logging::init_logging;
use integration::report_dir::resolve_report_dir;
use integration::snapshot_loader::load_snapshot_dir;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "hobart")]
#[command(about = "Hobart: fundamentals scorecards and research reports", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file with scoring and ranking parameters
    #[arg(long, global = true, env = "HOBART_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single snapshot file
    Score {
        /// Snapshot JSON file
        snapshot: PathBuf,

        /// Output format: text, csv, json or pretty
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Rank every snapshot in a directory
    Rank {
        /// Directory of snapshot JSON files
        dir: PathBuf,

        /// Number of positions in the allocation
        #[arg(long, default_value = "8")]
        top: usize,

        /// Output format: text, csv, json or pretty
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Write a markdown research report
    Report {
        #[command(subcommand)]
        kind: ReportCommand,

        /// Output directory (default: HOBART_REPORT_DIR or the data dir)
        #[arg(long, global = true)]
        out: Option<PathBuf>,
    },

    /// List scoring components and their default weights
    Components {
        /// Output format: text, csv, json or pretty
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Subcommand)]
enum ReportCommand {
    /// Single-stock scorecard report
    Stock {
        /// Snapshot JSON file
        snapshot: PathBuf,
    },

    /// Sector report across a directory of snapshots
    Sector {
        /// Directory of snapshot JSON files
        dir: PathBuf,

        /// Report title
        #[arg(long, default_value = "AI Infrastructure Sector Report")]
        title: String,
    },

    /// Peer comparison across a directory of snapshots
    Peers {
        /// Directory of snapshot JSON files
        dir: PathBuf,

        /// Report title (default: the symbols joined with "vs")
        #[arg(long)]
        title: Option<String>,
    },
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Score { snapshot, format } => score_snapshot(&snapshot, format, &config),
        Commands::Rank { dir, top, format } => rank_directory(&dir, top, format, &config),
        Commands::Report { kind, out } => {
            let dir = resolve_report_dir(out);
            let path = match kind {
                ReportCommand::Stock { snapshot } => stock_report(&snapshot, &dir, &config)?,
                ReportCommand::Sector { dir: input, title } => {
                    sector_report(&input, &title, &dir, &config)?
                }
                ReportCommand::Peers { dir: input, title } => {
                    peers_report(&input, title, &dir, &config)?
                }
            };
            println!("{}", path.display());
            Ok(())
        }
        Commands::Components { format } => list_components(format),
    }
}

fn score_snapshot(path: &Path, format: OutputFormat, config: &CliConfig) -> Result<(), CliError> {
    let entry = UniverseEntry::score(read_snapshot(path)?, &engine(config));

    match format {
        OutputFormat::Text => print_scorecard(&entry),
        OutputFormat::Export(ExportFormat::Csv) => {
            let record = ScorecardExport::from(&entry.scorecard);
            print!("{}", record.export_to_string(ExportFormat::Csv)?);
        }
        OutputFormat::Export(export) => println!("{}", to_json(&entry.scorecard, export)?),
    }
    Ok(())
}

fn rank_directory(
    dir: &Path,
    top: usize,
    format: OutputFormat,
    config: &CliConfig,
) -> Result<(), CliError> {
    let universe = load_universe(dir, config)?;
    let ranked = universe.rank(&config.ranking);
    let allocations = universe.allocate(top, &config.ranking);

    match format {
        OutputFormat::Text => print_ranking(&universe, &ranked, &allocations),
        OutputFormat::Export(export) => {
            let records: Vec<RankingExport> = ranked.iter().map(RankingExport::from).collect();
            let output = records.export_to_string(export)?;
            print!("{}", output);
            if export != ExportFormat::Csv {
                println!();
            }
        }
    }
    Ok(())
}

fn stock_report(path: &Path, out: &Path, config: &CliConfig) -> Result<PathBuf, CliError> {
    let engine = engine(config);
    let entry = UniverseEntry::score(read_snapshot(path)?, &engine);

    let body = render_stock_report(
        &entry.snapshot,
        &entry.scorecard,
        entry.layer,
        engine.weights(),
    )?;
    let report = ReportBuilder::new()
        .title(format!(
            "{} ({}) Scorecard",
            entry.snapshot.display_name(),
            entry.symbol()
        ))
        .kind(ReportKind::Stock)
        .symbol(entry.symbol())
        .body(body)
        .build()?;

    Ok(report.write_once(out)?)
}

fn sector_report(
    dir: &Path,
    title: &str,
    out: &Path,
    config: &CliConfig,
) -> Result<PathBuf, CliError> {
    let universe = load_universe(dir, config)?;
    let ranked = universe.rank(&config.ranking);
    let allocations = universe.allocate(config.ranking.max_positions, &config.ranking);

    let body = render_sector_report(&universe.summaries(), &ranked, &allocations)?;
    let report = ReportBuilder::new()
        .title(title)
        .kind(ReportKind::Sector)
        .symbols(universe.symbols())
        .body(body)
        .build()?;

    Ok(report.write_once(out)?)
}

fn peers_report(
    dir: &Path,
    title: Option<String>,
    out: &Path,
    config: &CliConfig,
) -> Result<PathBuf, CliError> {
    let universe = load_universe(dir, config)?;
    let ranked = universe.rank(&config.ranking);
    let title = title.unwrap_or_else(|| universe.symbols().join(" vs "));

    let body = render_peers_report(&universe.summaries(), &ranked)?;
    let report = ReportBuilder::new()
        .title(title)
        .kind(ReportKind::Peers)
        .symbols(universe.symbols())
        .body(body)
        .build()?;

    Ok(report.write_once(out)?)
}

fn list_components(format: OutputFormat) -> Result<(), CliError> {
    let components = available_components();

    if let OutputFormat::Export(export) = format {
        println!("{}", to_json(&components, export)?);
        return Ok(());
    }

    println!("\n{:<20} {:<15} {:>8}  Description", "Name", "Slot", "Weight");
    println!("{}", "─".repeat(80));
    for info in &components {
        let weight = info
            .default_weight
            .map_or_else(|| "-".to_string(), |w| format!("{:.2}", w));
        println!(
            "{:<20} {:<15} {:>8}  {}",
            info.name,
            info.kind.label(),
            weight,
            info.description
        );
    }
    Ok(())
}

fn engine(config: &CliConfig) -> ScorecardEngine {
    ScorecardEngine::new(config.scoring.clone())
}

fn load_universe(dir: &Path, config: &CliConfig) -> Result<ScoredUniverse, CliError> {
    let snapshots: Vec<FinancialSnapshot> = load_snapshot_dir(dir)?;
    if snapshots.is_empty() {
        return Err(CliError::EmptyDirectory(dir.to_path_buf()));
    }

    let universe = ScoredUniverse::new(snapshots, &engine(config));
    let unscored = universe
        .entries()
        .iter()
        .filter(|entry| !entry.scorecard.has_composite())
        .count();
    if unscored > 0 {
        warn!(unscored, "some snapshots have insufficient data for a composite");
    }
    info!(symbols = universe.size(), "scored universe");
    Ok(universe)
}

fn print_scorecard(entry: &UniverseEntry) {
    let scorecard: &Scorecard = &entry.scorecard;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!(
        "║{:^62}║",
        format!("SCORECARD: {}", entry.snapshot.display_name())
    );
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Symbol: {}", entry.symbol());
    println!("Layer:  {}\n", entry.layer);

    for kind in ComponentKind::ALL {
        println!(
            "  {:<16} {:>8}",
            kind.label(),
            fmt_score(scorecard.components.get(kind))
        );
    }

    println!("\nMoat details:");
    for factor in MoatFactor::ALL {
        println!(
            "  {:<20} {:>8}",
            factor.label(),
            fmt_score(scorecard.moat_details.get(factor))
        );
    }

    println!("\n  {:<16} {:>8}", "Composite", fmt_score(scorecard.composite));
}

fn print_ranking(universe: &ScoredUniverse, ranked: &[RankedEntity], allocations: &[Allocation]) {
    println!(
        "\n{:>4}  {:<8} {:<28} {:>9} {:>10}  Tier",
        "Rank", "Symbol", "Layer", "Composite", "Percentile"
    );
    println!("{}", "─".repeat(80));
    for entity in ranked {
        let layer = universe
            .get(&entity.symbol)
            .map_or_else(String::new, |entry| entry.layer.to_string());
        let rank = entity
            .rank
            .map_or_else(|| "-".to_string(), |rank| rank.to_string());
        let percentile = entity
            .percentile
            .map_or_else(|| "n/a".to_string(), |p| format!("{:.2}", p));
        println!(
            "{:>4}  {:<8} {:<28} {:>9} {:>10}  {}",
            rank,
            entity.symbol,
            layer,
            fmt_score(entity.composite),
            percentile,
            entity.tier
        );
    }

    if allocations.is_empty() {
        return;
    }
    println!("\nAllocation:");
    for allocation in allocations {
        println!("  {:<8} {:>6.2}%", allocation.symbol, allocation.weight);
    }
}
