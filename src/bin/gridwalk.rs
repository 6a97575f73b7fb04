use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gridwalk", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print path counts for grid sizes 1..=max.
    Count(CountArgs),
    /// List every path across an NxN grid in R/D notation.
    Paths(PathsArgs),
    /// Print the geometry of one path as JSON.
    Trace(TraceArgs),
    /// Build a storyboard and write it as JSON.
    Storyboard(StoryboardArgs),
}

#[derive(Parser, Debug)]
struct CountArgs {
    /// Largest grid side length to report.
    #[arg(long, default_value_t = 6)]
    max: usize,
}

#[derive(Parser, Debug)]
struct PathsArgs {
    /// Grid side length.
    #[arg(long)]
    n: usize,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Grid side length.
    #[arg(long)]
    n: usize,

    /// Moves in R/D notation, e.g. RRDD.
    #[arg(long)]
    moves: gridwalk::MoveSequence,

    /// Side length of one cell.
    #[arg(long, default_value_t = 2.0)]
    cell_side: f64,

    /// Endpoint offset as a fraction of the cell side.
    #[arg(long, default_value_t = gridwalk::DEFAULT_OFFSET_FRACTION)]
    offset: f64,
}

#[derive(Parser, Debug)]
struct StoryboardArgs {
    /// Storyboard config JSON. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Count(args) => cmd_count(args),
        Command::Paths(args) => cmd_paths(args),
        Command::Trace(args) => cmd_trace(args),
        Command::Storyboard(args) => cmd_storyboard(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_count(args: CountArgs) -> anyhow::Result<()> {
    println!("{:>3}  {:>13}  {:>12}", "n", "C(2(n-1),n-1)", "enumerated");
    for n in 1..=args.max {
        let closed = gridwalk::count_paths(n)?;
        let listed = gridwalk::enumerate_paths(n)?.len();
        println!("{n:>3}  {closed:>13}  {listed:>12}");
    }
    Ok(())
}

fn cmd_paths(args: PathsArgs) -> anyhow::Result<()> {
    let paths = gridwalk::enumerate_paths(args.n)
        .with_context(|| format!("enumerate paths for n={}", args.n))?;
    for p in &paths {
        println!("{p}");
    }
    eprintln!("{} paths", paths.len());
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let grid = gridwalk::SquareGrid::new(args.n, args.cell_side)?;
    let geometry = gridwalk::rasterize(&grid, &args.moves, args.offset)
        .with_context(|| format!("rasterize '{}' on a {1}x{1} grid", args.moves, args.n))?;
    println!("{}", serde_json::to_string_pretty(&geometry)?);
    Ok(())
}

fn cmd_storyboard(args: StoryboardArgs) -> anyhow::Result<()> {
    let cfg = match &args.config {
        Some(path) => gridwalk::StoryboardConfig::from_path(path)?,
        None => gridwalk::StoryboardConfig::default(),
    };
    let storyboard = gridwalk::Storyboard::build(&cfg)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, storyboard.to_json_pretty()?)
        .with_context(|| format!("write storyboard '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} strokes, {} frames)",
        args.out.display(),
        storyboard.stroke_count(),
        storyboard.duration.0
    );
    Ok(())
}
