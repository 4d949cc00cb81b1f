// Crate root: declare modules and control visibility
pub mod compare;
pub mod full_output;
pub mod labels;
pub mod report;
pub mod run;
pub mod symbols;

// Re-export commonly used API from the library for binaries/tests
pub use compare::{compare, Comparison, Mismatch};
pub use symbols::{normalize_address, CliSymbolTable, ExpectedSymbolList};
