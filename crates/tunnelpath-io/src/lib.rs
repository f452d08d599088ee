//! Text formats around the tunnelpath search: problem files in, reports out,
//! and batch generation of problem files from bare mazes.

pub mod batch;
pub mod error;
pub mod problem;
pub mod report;

pub use batch::{Variant, generate};
pub use error::ProblemError;
pub use problem::{Problem, parse_board, parse_dimensions, parse_order};
pub use report::Report;
