use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;

use wordseek::engine::{SearchEngine, SearchReport, StepStatus};
use wordseek::errors::PuzzleError;
use wordseek::grid::{Grid, GridConfig, RowPolicy, DEFAULT_DIMENSION};
use wordseek::word_list::WordList;

/// Word-search solver: finds every listed word in the grid, then reads the unused letters
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Path to the word list (one word per line)
    words: String,

    /// Path to the letter grid (one row per line)
    grid: String,

    /// Grid dimension N (the grid is N×N)
    #[arg(short, long, default_value_t = DEFAULT_DIMENSION)]
    dimension: usize,

    /// Accept rows shorter than N, leaving the missing cells as '*'
    #[arg(long)]
    pad_short_rows: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Step through the search with this many milliseconds between steps
    #[arg(long)]
    step_delay_ms: Option<u64>,
}

/// Entry point of the wordseek CLI.
///
/// Delegates to [`try_main`], printing any error with its code and help
/// text before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("WORDSEEK_DEBUG").is_ok();
    wordseek::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Load both inputs, run the search, print the results.
///
/// Results go to stdout; timings go to stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let row_policy = if cli.pad_short_rows { RowPolicy::PadWithFiller } else { RowPolicy::Strict };
    let config = GridConfig::with_dimension(cli.dimension).row_policy(row_policy);

    let words = WordList::load_from_path(&cli.words)?;
    let grid = Grid::load_from_path(config, &cli.grid)?;
    log::info!("Loaded {} words and a {}x{} grid", words.len(), grid.dimension(), grid.dimension());

    let mut engine = SearchEngine::new(grid, words);

    let t_search = Instant::now();
    let report = match cli.step_delay_ms {
        Some(ms) => step_through(&mut engine, Duration::from_millis(ms))?,
        None => engine.run()?,
    };
    let search_secs = t_search.elapsed().as_secs_f64();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    eprintln!(
        "Found {}/{} words in {:.3}s.",
        report.found_count(),
        report.words.len(),
        search_secs
    );

    Ok(())
}

/// Drive the engine one step at a time, announcing each word as it resolves.
fn step_through(engine: &mut SearchEngine, delay: Duration) -> Result<SearchReport, PuzzleError> {
    loop {
        match engine.step()? {
            StepStatus::WordFound(index) => {
                if let Ok(Some(p)) = engine.placement(index) {
                    eprintln!("found  {:<16} {p}", word_text(engine, index));
                }
            }
            StepStatus::WordExhausted(index) => {
                eprintln!("missed {}", word_text(engine, index));
            }
            StepStatus::AllDone => return Ok(engine.report()),
            StepStatus::InProgress => {}
        }
        thread::sleep(delay);
    }
}

fn word_text(engine: &SearchEngine, index: usize) -> &str {
    engine.word_list().get(index).map_or("", |w| w.text.as_str())
}

fn print_report(report: &SearchReport) {
    println!("Words:");
    for word in &report.words {
        match &word.placement {
            Some(p) => println!("  ✓ {:<16} {p}", word.text),
            None => println!("  ✗ {}", word.text),
        }
    }

    println!();
    println!("Letter tally:");
    for (letter, count) in report.tally.alphabet() {
        println!("  {letter} : {count}");
    }

    println!();
    println!("Solution: {}", report.solution);
}
