//! procmine - process discovery and analytics for XES event logs.
//!
//! Loads one log, runs one analysis and prints the result as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Overview: activities, cycle time, bottlenecks, happy path, variants
//! procmine summary orders.xes
//!
//! # Alpha-mined net as graph nodes and edges
//! procmine net orders.xes
//!
//! # Neighbours of a transition in the discovered net
//! procmine transition orders.xes "Approve"
//!
//! # DFG of the traces that repeat an activity
//! procmine -v --config analysis.toml rework orders.xes "Check"
//! ```

use clap::{Args, Parser, Subcommand};
use procmine::analytics::{
    dfg_for_variant_name, filter_by_variants, transition_context, ProcessAnalyzer,
};
use procmine::config::AnalysisConfig;
use procmine::discovery::build_dfg;
use procmine::import::load_log_with_options;
use procmine::presentation::{
    dfg_graph, dfg_view, happy_path_graph, net_graph, variant_cases_table, GraphData, LogTable,
    Summary, VariantsReport,
};
use procmine::MiningError;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// CLI error type.
#[derive(Error, Debug)]
enum CliError {
    /// Analysis failed.
    #[error("{0}")]
    Mining(#[from] MiningError),

    /// Output could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

/// Process discovery and trace analytics for XES event logs
#[derive(Parser)]
#[command(name = "procmine")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// TOML analysis configuration
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct LogArg {
    /// XES event log
    log: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Overview of the log
    Summary(LogArg),

    /// Sorted activities with the number of cases containing each
    Activities(LogArg),

    /// Directly-follows graph with start/end nodes and the happy-path view
    Dfg(LogArg),

    /// Alpha-mined Petri net
    Net(LogArg),

    /// Ranked variants
    Variants(LogArg),

    /// Most frequent variant
    HappyPath(LogArg),

    /// Net neighbours of a transition
    Transition {
        #[command(flatten)]
        input: LogArg,
        /// Transition label
        label: String,
    },

    /// Predecessor/successor statistics of an activity
    TransitionInfo {
        #[command(flatten)]
        input: LogArg,
        /// Activity name
        activity: String,
    },

    /// Edge frequencies of one variant, keyed "A -> B"
    VariantDfg {
        #[command(flatten)]
        input: LogArg,
        /// Variant as "A -> B -> C"
        variant: String,
    },

    /// DFG of the variants containing (or lacking) an activity
    FilterVariants {
        #[command(flatten)]
        input: LogArg,
        /// Activity name
        activity: String,
        /// Keep variants without the activity instead
        #[arg(long)]
        exclude: bool,
    },

    /// DFG of the traces repeating an activity
    Rework {
        #[command(flatten)]
        input: LogArg,
        /// Activity name
        activity: String,
    },

    /// DFG of the sub-traces between two activities
    Between {
        #[command(flatten)]
        input: LogArg,
        /// Opening activity
        from: String,
        /// Closing activity
        to: String,
    },

    /// Number of cases containing an activity
    CaseCount {
        #[command(flatten)]
        input: LogArg,
        /// Activity name
        activity: String,
    },

    /// Events as a table
    Table {
        #[command(flatten)]
        input: LogArg,
        /// Only the cases of this variant ("A -> B"), without activity and
        /// timestamp columns
        #[arg(long)]
        variant: Option<String>,
    },
}

impl Commands {
    fn log_path(&self) -> &PathBuf {
        match self {
            Commands::Summary(input)
            | Commands::Activities(input)
            | Commands::Dfg(input)
            | Commands::Net(input)
            | Commands::Variants(input)
            | Commands::HappyPath(input) => &input.log,
            Commands::Transition { input, .. }
            | Commands::TransitionInfo { input, .. }
            | Commands::VariantDfg { input, .. }
            | Commands::FilterVariants { input, .. }
            | Commands::Rework { input, .. }
            | Commands::Between { input, .. }
            | Commands::CaseCount { input, .. }
            | Commands::Table { input, .. } => &input.log,
        }
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct ActivitiesOutput {
    activities: Vec<String>,
    case_counts: std::collections::BTreeMap<String, usize>,
}

#[derive(Serialize)]
struct HappyPathOutput {
    path: Vec<String>,
    percentage: f64,
    graph: GraphData,
}

#[derive(Serialize)]
struct CaseCountOutput {
    case_count: usize,
}

fn run(cli: Cli) -> CliResult<()> {
    let config = match &cli.config {
        Some(path) => AnalysisConfig::from_file(path)?,
        None => AnalysisConfig::default(),
    };
    let log = load_log_with_options(cli.command.log_path(), &config.import)?;
    let layout = config.layout.clone();
    let analyzer = ProcessAnalyzer::with_config(log, config);

    match cli.command {
        Commands::Summary(_) => print_json(&Summary::from_analyzer(&analyzer)),

        Commands::Activities(_) => print_json(&ActivitiesOutput {
            activities: analyzer.activities().into_iter().collect(),
            case_counts: analyzer.activity_case_counts(),
        }),

        Commands::Dfg(_) => print_json(&dfg_view(&analyzer.dfg(), &analyzer.happy_path(), &layout)),

        Commands::Net(_) => print_json(&net_graph(&analyzer.discover()?, &layout)),

        Commands::Variants(_) => print_json(&VariantsReport::new(analyzer.ranked_variants())),

        Commands::HappyPath(_) => {
            let path = analyzer.happy_path();
            print_json(&HappyPathOutput {
                graph: happy_path_graph(&path),
                percentage: analyzer.happy_path_percentage(),
                path,
            })
        }

        Commands::Transition { label, .. } => {
            let discovered = analyzer.discover()?;
            print_json(&transition_context(&discovered.net, &label)?)
        }

        Commands::TransitionInfo { activity, .. } => {
            print_json(&analyzer.transition_info(&activity))
        }

        Commands::VariantDfg { variant, .. } => {
            print_json(&dfg_for_variant_name(analyzer.log(), &variant).to_string_keys())
        }

        Commands::FilterVariants {
            activity, exclude, ..
        } => {
            let kept = analyzer.filter_variants_by_activity(&activity, !exclude);
            let filtered = filter_by_variants(analyzer.log(), &kept);
            print_json(&dfg_graph(&build_dfg(&filtered), &layout))
        }

        Commands::Rework { activity, .. } => {
            print_json(&dfg_graph(&analyzer.rework_dfg(&activity), &layout))
        }

        Commands::Between { from, to, .. } => {
            print_json(&dfg_graph(&analyzer.between_dfg(&from, &to), &layout))
        }

        Commands::CaseCount { activity, .. } => print_json(&CaseCountOutput {
            case_count: analyzer.case_count(&activity),
        }),

        Commands::Table { variant, .. } => match variant {
            Some(variant) => print_json(&variant_cases_table(analyzer.log(), &variant)),
            None => print_json(&LogTable::from_log(analyzer.log())),
        },
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
