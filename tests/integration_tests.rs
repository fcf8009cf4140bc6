//! Integration tests for the wordseek puzzle solver.
//!
//! These tests drive the full pipeline from raw text through loading, searching
//! and solution extraction, using a fixture puzzle and synthetic reference-size grids.

use std::collections::HashSet;
use std::fs;

use wordseek::direction::Direction;
use wordseek::engine::{solve_puzzle, SearchEngine, SearchReport, StepStatus};
use wordseek::errors::{ErrorKind, PuzzleError};
use wordseek::grid::{Coord, Grid, GridConfig, RowPolicy};
use wordseek::word_list::WordList;

const FIXTURE_DIMENSION: usize = 8;

fn load_fixture(name: &str) -> String {
    fs::read_to_string(format!("tests/fixtures/{name}")).expect("Failed to read fixture")
}

fn fixture_engine() -> SearchEngine {
    let words = WordList::parse_from_str(&load_fixture("rust_words.txt")).unwrap();
    let grid = Grid::parse_from_str(GridConfig::with_dimension(FIXTURE_DIMENSION), &load_fixture("rust_grid.txt")).unwrap();
    SearchEngine::new(grid, words)
}

/// A 20×20 grid whose first row starts with `first_row` and is otherwise all `X`.
fn reference_grid(first_row: &str) -> Grid {
    let mut rows = vec!["X".repeat(20); 20];
    rows[0] = format!("{first_row:X<20}");
    Grid::load(GridConfig::default(), &rows).unwrap()
}

fn found_texts(report: &SearchReport) -> Vec<&str> {
    report.words.iter().filter(|w| w.found).map(|w| w.text.as_str()).collect()
}

#[cfg(test)]
mod fixture_puzzle {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_words_loaded_in_order_and_uppercased() {
        let engine = fixture_engine();
        let texts: Vec<&str> = engine.word_list().iter().map(|w| w.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["BORROW", "CARGO", "CRATE", "TRAIT", "MATCH", "ENUM", "TRY", "SELF", "IMPL", "PYTHON"]
        );
    }

    #[test]
    fn test_solution_word() {
        let report = fixture_engine().run().unwrap();
        assert!(report.complete);
        assert_eq!(report.solution, "FEARLESSCONCURRENCYRUST");
    }

    #[test]
    fn test_found_and_missing_words() {
        let report = fixture_engine().run().unwrap();
        assert_eq!(report.found_count(), 9);
        let missing: Vec<&str> = report.words.iter().filter(|w| !w.found).map(|w| w.text.as_str()).collect();
        assert_eq!(missing, vec!["PYTHON"]);
        assert!(report.words[9].placement.is_none());
    }

    #[test]
    fn test_placements() {
        let engine = {
            let mut e = fixture_engine();
            e.run().unwrap();
            e
        };
        let summary: Vec<(usize, Coord, Direction, Coord)> = engine
            .placements()
            .map(|p| (p.word_index, p.start, p.direction, p.end()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (0, Coord::new(0, 0), Direction::East, Coord::new(0, 5)),
                (1, Coord::new(7, 7), Direction::NorthWest, Coord::new(3, 3)),
                (2, Coord::new(2, 0), Direction::South, Coord::new(6, 0)),
                (3, Coord::new(7, 1), Direction::East, Coord::new(7, 5)),
                (4, Coord::new(1, 7), Direction::South, Coord::new(5, 7)),
                (5, Coord::new(6, 1), Direction::NorthEast, Coord::new(3, 4)),
                (6, Coord::new(2, 4), Direction::West, Coord::new(2, 2)),
                (7, Coord::new(1, 1), Direction::East, Coord::new(1, 4)),
                (8, Coord::new(0, 6), Direction::South, Coord::new(3, 6)),
            ]
        );
    }

    #[test]
    fn test_tally() {
        let report = fixture_engine().run().unwrap();
        let tally: Vec<(char, usize)> = report.tally.iter().collect();
        assert_eq!(
            tally,
            vec![
                ('A', 4), ('B', 1), ('C', 3), ('E', 3), ('F', 1), ('G', 1), ('H', 1),
                ('I', 2), ('L', 2), ('M', 3), ('N', 1), ('O', 3), ('P', 1), ('R', 6),
                ('S', 1), ('T', 5), ('U', 1), ('W', 1), ('Y', 1),
            ]
        );
        assert_eq!(report.tally.total(), 41);
    }

    #[test]
    fn test_paths_spell_their_words() {
        let mut engine = fixture_engine();
        engine.run().unwrap();
        for p in engine.placements() {
            let spelled: String = p
                .path
                .iter()
                .map(|c| engine.grid().cell_at(c.row, c.col).unwrap().letter)
                .collect();
            assert_eq!(spelled, engine.word_list().get(p.word_index).unwrap().text);
        }
    }

    #[test]
    fn test_solve_puzzle_matches_engine() {
        let report = solve_puzzle(
            GridConfig::with_dimension(FIXTURE_DIMENSION),
            &load_fixture("rust_words.txt"),
            &load_fixture("rust_grid.txt"),
        )
        .unwrap();
        assert_eq!(report, fixture_engine().run().unwrap());
    }

    #[test]
    fn test_json_report_shape() {
        let report = fixture_engine().run().unwrap();
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["solution"], "FEARLESSCONCURRENCYRUST");
        assert_eq!(json["dimension"], 8);
        assert_eq!(json["tally"]["R"], 6);
        assert_eq!(json["words"][0]["placement"]["direction"], "East");
        assert_eq!(json["words"][0]["placement"]["start"]["row"], 0);
        assert!(json["words"][9].get("placement").is_none());
    }
}

#[cfg(test)]
mod scenarios {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scenario_a_single_word_heading_east() {
        let grid = reference_grid("CATDOG");
        let mut engine = SearchEngine::new(grid, WordList::load(["CAT"]).unwrap());
        let report = engine.run().unwrap();

        let p = report.words[0].placement.as_ref().unwrap();
        assert_eq!(p.start, Coord::new(0, 0));
        assert_eq!(p.end(), Coord::new(0, 2));
        assert_eq!(p.direction, Direction::East);

        let tally: Vec<(char, usize)> = report.tally.iter().collect();
        assert_eq!(tally, vec![('A', 1), ('C', 1), ('T', 1)]);

        assert_eq!(report.solution.len(), 397);
        assert!(report.solution.starts_with("DOGXXX"));
    }

    #[test]
    fn test_scenario_b_missing_word() {
        let grid = reference_grid("CATDOG");
        let mut engine = SearchEngine::new(grid, WordList::load(["XYZ"]).unwrap());
        let report = engine.run().unwrap();

        assert!(!report.words[0].found);
        assert!(report.words[0].placement.is_none());
        assert!(engine.grid().cells().all(|(_, c)| !c.highlighted));
        assert!(report.tally.is_empty());
        assert_eq!(report.solution.len(), 400);
    }

    #[test]
    fn test_scenario_c_empty_word_list() {
        let grid = reference_grid("CATDOG");
        let expected: String = grid.cells().map(|(_, c)| c.letter).collect();
        let mut engine = SearchEngine::new(grid, WordList::default());
        let report = engine.run().unwrap();

        assert!(report.words.is_empty());
        assert!(report.tally.is_empty());
        assert_eq!(report.solution, expected);
    }

    #[test]
    fn test_lowercase_grid_matches_words() {
        let report = solve_puzzle(GridConfig::with_dimension(2), "AB", "ab\ncd").unwrap();
        assert_eq!(found_texts(&report), vec!["AB"]);
        assert_eq!(report.solution, "CD");
    }
}

#[cfg(test)]
mod properties {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_determinism() {
        let first = fixture_engine().run().unwrap();
        for _ in 0..5 {
            assert_eq!(fixture_engine().run().unwrap(), first);
        }
    }

    #[test]
    fn test_highlighted_and_solution_partition_the_grid() {
        let mut engine = fixture_engine();
        let report = engine.run().unwrap();

        let highlighted: HashSet<Coord> = engine
            .grid()
            .cells()
            .filter(|(_, c)| c.highlighted)
            .map(|(coord, _)| coord)
            .collect();
        let on_paths: HashSet<Coord> = engine.placements().flat_map(|p| p.path.iter().copied()).collect();
        assert_eq!(highlighted, on_paths);

        let leftover: String = engine
            .grid()
            .cells()
            .filter(|(coord, _)| !highlighted.contains(coord))
            .map(|(_, c)| c.letter)
            .collect();
        assert_eq!(leftover, report.solution);
        assert_eq!(highlighted.len() + report.solution.chars().count(), engine.grid().len());
    }

    #[test]
    fn test_tally_sum_equals_path_lengths() {
        let mut engine = fixture_engine();
        let report = engine.run().unwrap();
        let path_letters: usize = engine.placements().map(|p| p.path.len()).sum();
        assert_eq!(report.tally.total(), path_letters);
    }

    #[test]
    fn test_step_and_run_agree() {
        let expected = fixture_engine().run().unwrap();

        let mut stepped = fixture_engine();
        let mut found = Vec::new();
        let mut exhausted = Vec::new();
        let mut steps = 0;
        loop {
            steps += 1;
            match stepped.step().unwrap() {
                StepStatus::WordFound(i) => found.push(i),
                StepStatus::WordExhausted(i) => exhausted.push(i),
                StepStatus::AllDone => break,
                StepStatus::InProgress => {}
            }
        }

        assert_eq!(stepped.report(), expected);
        assert_eq!(found, (0..9).collect::<Vec<_>>());
        assert_eq!(exhausted, vec![9]);
        // at least one step per grid cell in the solution sweep
        assert!(steps > 64);
    }

    #[test]
    fn test_restart_reproduces_results() {
        let mut engine = fixture_engine();
        let first = engine.run().unwrap();
        engine.reset();
        assert!(!engine.report().complete);
        assert_eq!(engine.run().unwrap(), first);
    }

    #[test]
    fn test_tie_break_row_major_then_direction() {
        // "ON" fits at (1,1) heading SE and E, and at (2,1) heading E
        let rows = ["XXXX", "XONX", "XONX", "XXXX"];
        let grid = Grid::load(GridConfig::with_dimension(4), rows).unwrap();
        let mut engine = SearchEngine::new(grid, WordList::load(["on"]).unwrap());
        engine.run().unwrap();
        let p = engine.placement(0).unwrap().unwrap();
        assert_eq!(p.start, Coord::new(1, 1));
        assert_eq!(p.direction, Direction::SouthEast);
    }
}

#[cfg(test)]
mod loading_errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_row_too_long() {
        let err = solve_puzzle(GridConfig::with_dimension(2), "AB", "ABC\nDE").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedGrid);
        assert_eq!(err.code(), "W002");
    }

    #[test]
    fn test_too_few_rows() {
        let config = GridConfig::default().row_policy(RowPolicy::PadWithFiller);
        let err = solve_puzzle(config, "AB", &load_fixture("rust_grid.txt")).unwrap_err();
        assert!(matches!(err, PuzzleError::MalformedGridRowCount { found: 8, expected: 20 }));
    }

    #[test]
    fn test_short_rows_padded_reach_the_solution() {
        let config = GridConfig::with_dimension(3).row_policy(RowPolicy::PadWithFiller);
        let report = solve_puzzle(config, "cat", "CAT\nNO\nW").unwrap();
        assert_eq!(found_texts(&report), vec!["CAT"]);
        assert_eq!(report.solution, "NO*W**");
    }

    #[test]
    fn test_empty_inputs() {
        let err = solve_puzzle(GridConfig::with_dimension(2), "\n\n", "AB\nCD").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyInput);
        let err = solve_puzzle(GridConfig::with_dimension(2), "AB", "\r\n").unwrap_err();
        assert!(matches!(err, PuzzleError::EmptyGrid));
    }

    #[test]
    fn test_missing_file() {
        let err = WordList::load_from_path("tests/fixtures/does_not_exist.txt").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("does_not_exist.txt"));
    }

    #[test]
    fn test_load_from_path() {
        let grid = Grid::load_from_path(GridConfig::with_dimension(FIXTURE_DIMENSION), "tests/fixtures/rust_grid.txt").unwrap();
        assert_eq!(grid.cell_at(7, 7).unwrap().letter, 'C');
        assert_eq!(WordList::load_from_path("tests/fixtures/rust_words.txt").unwrap().len(), 10);
    }
}
