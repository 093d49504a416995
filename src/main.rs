mod input;
mod logging;
mod model;
mod panels;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::input::cache::DatasetCache;
use crate::input::{Dataset, LoadError};
use crate::model::selection::{FilterSelection, SelectionFile, SelectionFileError};
use crate::pipeline::stage1_filter::filter_records;
use crate::pipeline::stage4_lookup::company_options;
use crate::pipeline::stage5_present::present;
use crate::pipeline::stage6_report::{ReportError, ReportInput, write_reports};
use crate::pipeline::{DEFAULT_TOP_N, RankScope, ViewParams, compute_views};

#[derive(Parser, Debug)]
#[command(
    name = "g2000-report",
    version,
    about = "Filter, rank and correlate Forbes Global 2000 company financials"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Debug-level logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute every dashboard panel and write the report artifacts
    Run(RunArgs),
    /// Print the filter domains and the company options of a selection
    Options(OptionsArgs),
}

#[derive(Args, Debug, Clone)]
struct FilterArgs {
    /// Country to keep; repeat for several. Default: all observed countries
    #[arg(long = "country", value_name = "COUNTRY")]
    countries: Option<Vec<String>>,

    /// Industry to keep; repeat for several. Default: all observed industries
    #[arg(long = "industry", value_name = "INDUSTRY")]
    industries: Option<Vec<String>>,

    /// JSON selection document ({"countries": [...], "industries": [...], "company": "..."})
    #[arg(long, value_name = "FILE")]
    selection: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Input CSV (optionally .gz)
    #[arg(long)]
    input: PathBuf,

    /// Output directory
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    filters: FilterArgs,

    /// Company for the KPI panel. Default: first company in the filtered set
    #[arg(long)]
    company: Option<String>,

    /// Entries per ranking panel
    #[arg(long, default_value_t = DEFAULT_TOP_N as u32, value_parser = clap::value_parser!(u32).range(1..))]
    top_n: u32,

    /// Record set the ranking panels are computed from
    #[arg(long, value_enum, default_value_t = RankScope::Full)]
    rank_scope: RankScope,
}

#[derive(Args, Debug, Clone)]
struct OptionsArgs {
    /// Input CSV (optionally .gz)
    #[arg(long)]
    input: PathBuf,

    #[command(flatten)]
    filters: FilterArgs,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    SelectionFile(#[from] SelectionFileError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Run(args) => run_report(args),
        Command::Options(args) => print_options(args),
    }
}

fn run_report(args: RunArgs) -> Result<(), AppError> {
    let cache = DatasetCache::new(&args.input);
    let dataset = cache.get_or_load()?;

    let (selection, file_company) = resolve_selection(&dataset, &args.filters)?;
    let company = args.company.or(file_company);
    let params = ViewParams {
        top_n: args.top_n as usize,
        rank_scope: args.rank_scope,
    };

    let views = compute_views(&dataset, &selection, company.as_deref(), &params);
    let panels = present(&views);

    let input = ReportInput {
        dataset: &dataset,
        selection: &selection,
        views: &views,
        panels: &panels,
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&input, &args.out)?;
    Ok(())
}

fn print_options(args: OptionsArgs) -> Result<(), AppError> {
    let cache = DatasetCache::new(&args.input);
    let dataset = cache.get_or_load()?;
    let (selection, _) = resolve_selection(&dataset, &args.filters)?;

    let filtered = filter_records(&dataset.records, &selection);
    let companies = company_options(&filtered);

    println!("countries ({}):", dataset.countries.len());
    for country in &dataset.countries {
        println!("  {}", country);
    }
    println!("industries ({}):", dataset.industries.len());
    for industry in &dataset.industries {
        println!("  {}", industry);
    }
    println!("companies in selection ({}):", companies.len());
    for company in companies {
        println!("  {}", company);
    }
    Ok(())
}

/// Selection file first, then command-line flags override the fields they name.
fn resolve_selection(
    dataset: &Dataset,
    filters: &FilterArgs,
) -> Result<(FilterSelection, Option<String>), AppError> {
    let file = match &filters.selection {
        Some(path) => SelectionFile::read(path)?,
        None => SelectionFile::default(),
    };
    let countries = filters.countries.clone().or(file.countries);
    let industries = filters.industries.clone().or(file.industries);
    let selection = FilterSelection::from_parts(dataset, countries, industries);
    Ok((selection, file.company))
}

#[cfg(test)]
#[path = "../tests/src_inline/fixtures.rs"]
mod fixtures;

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
