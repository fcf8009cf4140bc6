//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from `PuzzleError` via its `code()`, `description()`, `details()`,
//! and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::io;
use std::path::PathBuf;

use wordseek::errors::PuzzleError;

/// One instance of every `PuzzleError` variant, in code order
fn all_puzzle_error_variants() -> Vec<PuzzleError> {
    vec![
        PuzzleError::MalformedGridRowCount { found: 19, expected: 20 },
        PuzzleError::MalformedGridRowLength { row: 4, len: 21, dimension: 20 },
        PuzzleError::CoordinateOutOfRange { row: 20, col: 3, dimension: 20 },
        PuzzleError::WordIndexOutOfRange { index: 12, len: 12 },
        PuzzleError::EmptyWordList,
        PuzzleError::EmptyGrid,
        PuzzleError::WordAlreadyFound { index: 3 },
        PuzzleError::InvalidDimension { dimension: 0 },
        PuzzleError::Io {
            path: PathBuf::from("words.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Puzzle Errors\n");
    println!("Errors raised while loading a word list or grid, or by invalid calls into the search engine. A word that is not in the grid is never an error.\n");

    for error in all_puzzle_error_variants() {
        println!("### {}: {}\n", error.code(), error.description());
        println!("**Details:** {}\n", error.details());

        if let Some(help_text) = error.help() {
            println!("**How to fix:**");
            println!("```");
            println!("{help_text}");
            println!("```\n");
        }

        println!("**Example error message:**");
        println!("```");
        println!("{error}");
        println!("```\n");

        println!("**Detailed format:**");
        println!("```");
        println!("{}", error.display_detailed());
        println!("```\n");

        println!("---\n");
    }

    println!("## Error Display Formats\n");
    println!("### Simple Format");
    println!("```");
    println!("Error: <message>");
    println!("```\n");
    println!("### Detailed Format (via `display_detailed()`)");
    println!("```");
    println!("<message> (<code>)");
    println!("<help text if available>");
    println!("```\n");
}
