use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use naming_core::calendar::{BirthMoment, hour_period, hour_periods};
use naming_core::chart::compute_chart;
use naming_core::config::NamingConfig;
use naming_core::corpus::CollectionId;
use naming_core::elements::{parse_element, relations};
use naming_core::ingest::build_corpus_dir;
use naming_core::logger::init_logger;
use naming_core::search::NameSearch;
use naming_core::validate::{validate_birth, validate_surname};
use naming_core::{Element, NameSource, SourceInfo};

#[derive(Parser)]
#[command(
    name = "naming",
    about = "Bazi five-element analysis and classical-poetry name candidates"
)]
struct Cli {
    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Four pillars and five-element profile for a birth moment
    Profile {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        #[arg(long)]
        day: u32,
        /// Hour of day, 0-23
        #[arg(long)]
        hour: u32,
        /// Checked and echoed back when given, e.g. 王
        #[arg(long)]
        surname: Option<String>,
    },
    /// Name candidates from 诗经 / 楚辞
    Search {
        /// Filter poems by this text, e.g. 君子
        keyword: Option<String>,
        /// Collection to search; overrides --gender
        #[arg(long, value_enum)]
        source: Option<SourceArg>,
        /// Route to a collection by gender (female → 诗经 by default)
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Poem counts per collection
    Stats,
    /// The twelve two-hour periods, or the one containing --at
    Hours {
        #[arg(long)]
        at: Option<u32>,
    },
    /// 生 / 克 relations of one element (金木水火土), or of all five
    Elements {
        element: Option<String>,
    },
    /// Known classical sources for names
    Sources,
    /// Build corpus documents from raw chinese-poetry JSON
    Build {
        /// Directory containing shijing.json and chuci.json (any depth)
        raw: PathBuf,
        #[arg(long, default_value = "data")]
        out: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceArg {
    Shijing,
    Chuci,
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => NamingConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => NamingConfig::default(),
    };

    match cli.command {
        Command::Profile {
            year,
            month,
            day,
            hour,
            surname,
        } => run_profile(&config, BirthMoment::new(year, month, day, hour), surname),
        Command::Search {
            keyword,
            source,
            gender,
            limit,
        } => run_search(&config, keyword.as_deref(), source, gender.as_deref(), limit),
        Command::Stats => run_stats(&config),
        Command::Hours { at: Some(hour) } => print_json(&hour_period(hour)?),
        Command::Hours { at: None } => print_json(&hour_periods()),
        Command::Elements { element } => run_elements(element.as_deref()),
        Command::Sources => {
            let sources: Vec<SourceInfo> = NameSource::ALL.into_iter().map(SourceInfo::from).collect();
            print_json(&sources)
        }
        Command::Build { raw, out } => run_build(&raw, &out),
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  COMMANDS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
struct ProfileOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    surname: Option<String>,
    #[serde(flatten)]
    chart: naming_core::ChartReport,
}

fn run_profile(config: &NamingConfig, moment: BirthMoment, surname: Option<String>) -> Result<()> {
    if let Some(s) = &surname {
        validate_surname(s)?;
    }
    validate_birth(&moment, chrono::Local::now().date_naive())?;

    let chart = compute_chart(&config.calendar(), &moment)?;
    tracing::debug!(
        year = %chart.year_gan_zhi,
        month = %chart.month_gan_zhi,
        day = %chart.day_gan_zhi,
        hour = %chart.hour_gan_zhi,
        "computed pillars"
    );
    print_json(&ProfileOutput { surname, chart })
}

fn run_search(
    config: &NamingConfig,
    keyword: Option<&str>,
    source: Option<SourceArg>,
    gender: Option<&str>,
    limit: Option<usize>,
) -> Result<()> {
    let index = config.load_corpus().context("loading corpus")?;
    let search = NameSearch::new(&index).with_routing(config.routing.clone());
    let limit = limit.unwrap_or(config.search.default_limit);

    let results = match (source, gender) {
        (Some(SourceArg::Shijing), _) => {
            search.search_collection(CollectionId::Shijing, keyword, limit)
        }
        (Some(SourceArg::Chuci), _) => search.search_collection(CollectionId::Chuci, keyword, limit),
        (Some(SourceArg::All), _) | (None, None) => search.search_all(keyword, limit),
        (None, Some(g)) => search.search_by_gender(g, keyword, limit),
    };
    tracing::info!(candidates = results.len(), "search complete");
    print_json(&results)
}

fn run_stats(config: &NamingConfig) -> Result<()> {
    let index = config.load_corpus().context("loading corpus")?;
    print_json(&index.stats())
}

fn run_elements(element: Option<&str>) -> Result<()> {
    match element {
        Some(e) => print_json(&relations(parse_element(e)?)),
        None => print_json(&Element::ALL.map(relations)),
    }
}

fn run_build(raw: &std::path::Path, out: &std::path::Path) -> Result<()> {
    let stats = build_corpus_dir(raw, out)
        .with_context(|| format!("building corpus from {}", raw.display()))?;
    print_json(&stats)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
