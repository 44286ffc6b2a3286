//! unimin CLI: dichotomy and golden-section line searches from the terminal.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use unimin_report::{
    COMPARISON_FILE, DICHOTOMY_FILE, GOLDEN_SECTION_FILE, TableStyle, comparison_table,
    iteration_table, write_json, write_table,
};
use unimin_solvers::{
    dichotomy, golden_section,
    search::{Config, SearchResult},
    sweep,
};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "unimin")]
#[command(about = "Minimize unimodal functions with dichotomy and golden-section search")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one search and print its iteration table.
    Search(SearchArgs),

    /// Compare evaluation counts of both methods for ε = 1e-2 … 1e-8.
    Sweep(SweepArgs),

    /// Write both iteration tables and the comparison table to a directory.
    Report(ReportArgs),
}

#[derive(Debug, Clone, Args)]
struct ProblemArgs {
    /// Objective function to minimize.
    #[arg(long, value_enum, default_value_t = ObjectiveArg::ShiftedSquare)]
    objective: ObjectiveArg,

    /// Lower bound of the search interval.
    #[arg(long, default_value_t = -2.0, allow_negative_numbers = true)]
    a: f64,

    /// Upper bound of the search interval.
    #[arg(long, default_value_t = 20.0, allow_negative_numbers = true)]
    b: f64,

    /// Iteration guard for each search.
    #[arg(long, default_value_t = 1000)]
    max_iters: usize,
}

impl ProblemArgs {
    fn bracket(&self) -> [f64; 2] {
        [self.a, self.b]
    }

    fn config(&self) -> CliResult<Config> {
        Ok(Config::new(self.max_iters)?)
    }
}

#[derive(Debug, Clone, Args)]
struct SearchArgs {
    #[command(flatten)]
    problem: ProblemArgs,

    /// Search method.
    #[arg(long, value_enum)]
    method: MethodArg,

    /// Target interval width.
    #[arg(long, default_value_t = 0.1)]
    epsilon: f64,

    /// Number of decimals in the table.
    #[arg(long, default_value_t = 6)]
    decimals: usize,

    /// Path to write the full search result (JSON).
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
struct SweepArgs {
    #[command(flatten)]
    problem: ProblemArgs,

    /// Path to write the comparison rows (JSON).
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
struct ReportArgs {
    #[command(flatten)]
    problem: ProblemArgs,

    /// Target interval width for the iteration tables.
    #[arg(long, default_value_t = 0.1)]
    epsilon: f64,

    /// Number of decimals in the iteration tables.
    #[arg(long, default_value_t = 6)]
    decimals: usize,

    /// Directory that receives the report files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MethodArg {
    Dichotomy,
    GoldenSection,
}

impl MethodArg {
    fn name(self) -> &'static str {
        match self {
            Self::Dichotomy => "Dichotomy",
            Self::GoldenSection => "Golden section",
        }
    }

    fn run(self, problem: &ProblemArgs, epsilon: f64) -> CliResult<SearchResult> {
        let objective = problem.objective;
        let f = |x: f64| objective.value(x);
        let config = problem.config()?;

        let result = match self {
            Self::Dichotomy => dichotomy::minimize_unobserved(&f, problem.bracket(), epsilon, &config)?,
            Self::GoldenSection => {
                golden_section::minimize_unobserved(&f, problem.bracket(), epsilon, &config)?
            }
        };
        Ok(result)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ObjectiveArg {
    /// (x - 1)²
    ShiftedSquare,
    /// (x - 1)⁴
    ShiftedQuartic,
    /// |x - 1|
    ShiftedAbs,
    /// -cos(x), unimodal on [-3, 3]
    Cosine,
}

impl ObjectiveArg {
    fn value(self, x: f64) -> f64 {
        match self {
            Self::ShiftedSquare => (x - 1.0).powi(2),
            Self::ShiftedQuartic => (x - 1.0).powi(4),
            Self::ShiftedAbs => (x - 1.0).abs(),
            Self::Cosine => -x.cos(),
        }
    }
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => run_search(&args),
        Commands::Sweep(args) => run_sweep(&args),
        Commands::Report(args) => run_report(&args),
    }
}

// ── search ────────────────────────────────────────────────────────────

fn run_search(args: &SearchArgs) -> CliResult<()> {
    let result = args.method.run(&args.problem, args.epsilon)?;

    let style = TableStyle::new()
        .title(args.method.name())
        .decimals(args.decimals);
    print!("{}", iteration_table(&result.iterations, &style));
    println!("{}", summary(args.method, &result));

    if let Some(path) = &args.json {
        write_json(path, &result)?;
        tracing::info!("Search result written to {}", path.display());
    }

    Ok(())
}

fn summary(method: MethodArg, result: &SearchResult) -> String {
    let [a, b] = result.bracket;
    format!(
        "{}: {:?} after {} iterations and {} evaluations, x ≈ {} in [{a}, {b}] (width {})",
        method.name(),
        result.status,
        result.iteration_count(),
        result.eval_count,
        result.x(),
        result.width(),
    )
}

// ── sweep ─────────────────────────────────────────────────────────────

fn sweep_rows(problem: &ProblemArgs) -> CliResult<Vec<sweep::PrecisionSweepRow>> {
    let objective = problem.objective;
    let f = |x: f64| objective.value(x);
    let rows = sweep::compare(
        &f,
        problem.bracket(),
        &sweep::default_precisions(),
        &problem.config()?,
    )?;
    Ok(rows)
}

fn run_sweep(args: &SweepArgs) -> CliResult<()> {
    let rows = sweep_rows(&args.problem)?;

    print!("{}", comparison_table(&rows, &TableStyle::new()));

    if let Some(path) = &args.json {
        write_json(path, &rows)?;
        tracing::info!("Sweep rows written to {}", path.display());
    }

    Ok(())
}

// ── report ────────────────────────────────────────────────────────────

fn run_report(args: &ReportArgs) -> CliResult<()> {
    std::fs::create_dir_all(&args.out_dir)?;

    for (method, file) in [
        (MethodArg::Dichotomy, DICHOTOMY_FILE),
        (MethodArg::GoldenSection, GOLDEN_SECTION_FILE),
    ] {
        let result = method.run(&args.problem, args.epsilon)?;
        let style = TableStyle::new()
            .title(method.name())
            .decimals(args.decimals);
        write_report_file(
            &args.out_dir.join(file),
            &iteration_table(&result.iterations, &style),
        )?;
    }

    let rows = sweep_rows(&args.problem)?;
    write_report_file(
        &args.out_dir.join(COMPARISON_FILE),
        &comparison_table(&rows, &TableStyle::new().title("Precision comparison")),
    )?;

    Ok(())
}

fn write_report_file(path: &Path, table: &unimin_report::Table) -> CliResult<()> {
    write_table(path, table)?;
    tracing::info!("Table written to {}", path.display());
    Ok(())
}
