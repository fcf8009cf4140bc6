// Reusable library API — used by the CLI and the error-docs generator
pub mod direction;
pub mod engine;
pub mod errors;
pub mod grid;
pub mod letters;
pub mod log;
pub mod word_list;
