//! Text input and result output for the command line tool
//!
//! Nothing here is needed to use the solver as a library; these are thin wrappers that
//! only go through the public graph and solver operations.

pub mod reader;
pub mod report;

pub use reader::{Problem, TokenReader};
pub use report::{format_path, QueryReport, DEFAULT_SEPARATOR};
