// Copyright (c) 2026 Symcompare Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The compare pipeline: parse both listings, compare, check the reserved
//! symbol, report.

use anyhow::Result;
use clap::{Args, ValueEnum};
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::compare::{compare, Comparison};
use crate::full_output;
use crate::labels::{read_cli_labels, read_expected_labels};
use crate::report::{JsonReport, ReservedStatus, Summary, TextReporter};
use crate::symbols::{CliSymbolTable, ExpectedSymbolList};

pub const DEFAULT_CLI_LABELS: &str = "cli_labels_raw.txt";
pub const DEFAULT_EXPECTED: &str = "expected_labels.txt";
pub const DEFAULT_FULL_OUTPUT: &str = "cli_output_all.txt";
pub const DEFAULT_RESERVED: &str = "_start";

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Raw symbol output captured from the ELF viewer
    #[arg(short = 'c', long = "cli-labels", default_value = DEFAULT_CLI_LABELS)]
    pub cli_labels: PathBuf,

    /// Reference listing, one `ADDRESS NAME` per line
    #[arg(short = 'e', long = "expected", default_value = DEFAULT_EXPECTED)]
    pub expected: PathBuf,

    /// Full viewer output, searched when the reserved symbol is missing
    #[arg(short = 'a', long = "full-output", default_value = DEFAULT_FULL_OUTPUT)]
    pub full_output: PathBuf,

    /// Directory that relative input paths are resolved against
    #[arg(short = 'C', long = "dir")]
    pub dir: Option<PathBuf>,

    /// Symbol that must be present in the CLI listing
    #[arg(short = 'r', long = "reserved", default_value = DEFAULT_RESERVED)]
    pub reserved: String,

    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with status 1 if any mismatch or missing symbol was found
    #[arg(long = "fail-on-diff", default_value_t = false)]
    pub fail_on_diff: bool,

    /// Enable debug output
    #[arg(short = 'd', long = "debug", default_value_t = false)]
    pub debug: bool,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            cli_labels: PathBuf::from(DEFAULT_CLI_LABELS),
            expected: PathBuf::from(DEFAULT_EXPECTED),
            full_output: PathBuf::from(DEFAULT_FULL_OUTPUT),
            dir: None,
            reserved: DEFAULT_RESERVED.to_string(),
            format: OutputFormat::Text,
            fail_on_diff: false,
            debug: false,
        }
    }
}

impl CompareArgs {
    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    pub fn cli_labels_path(&self) -> PathBuf {
        self.resolve(&self.cli_labels)
    }

    pub fn expected_path(&self) -> PathBuf {
        self.resolve(&self.expected)
    }

    pub fn full_output_path(&self) -> PathBuf {
        self.resolve(&self.full_output)
    }
}

/// What a run found, for the caller to turn into an exit status.
#[derive(Debug)]
pub struct Outcome {
    pub comparison: Comparison,
    pub reserved: ReservedStatus,
    pub summary: Summary,
}

impl Outcome {
    pub fn has_differences(&self) -> bool {
        self.comparison.has_differences()
    }
}

pub fn summarize(expected: &ExpectedSymbolList, cli: &CliSymbolTable) -> Summary {
    Summary {
        expected_symbols: expected.non_blank_lines,
        found_in_cli: expected.count_found_in(cli),
    }
}

pub fn run<W: Write>(args: &CompareArgs, out: W) -> Result<Outcome> {
    let cli = read_cli_labels(&args.cli_labels_path())?;
    let expected = read_expected_labels(&args.expected_path())?;
    let comparison = compare(&expected, &cli);
    let summary = summarize(&expected, &cli);
    let present = cli.has_symbol_by_name(&args.reserved);

    let outcome = match args.format {
        OutputFormat::Text => {
            let mut reporter = TextReporter::new(out);
            reporter.header()?;
            reporter.comparison(&comparison)?;

            let mut matches = Vec::new();
            if !present {
                reporter.reserved_missing(&args.reserved)?;
                matches = full_output::search_file(&args.full_output_path(), &args.reserved)?;
                for line in &matches {
                    reporter.found_in_full_output(line)?;
                }
            }
            reporter.summary(&summary)?;
            Outcome {
                comparison,
                reserved: ReservedStatus {
                    name: args.reserved.clone(),
                    present,
                    full_output_matches: matches,
                },
                summary,
            }
        }
        OutputFormat::Json => {
            let matches = if present {
                Vec::new()
            } else {
                full_output::search_file(&args.full_output_path(), &args.reserved)?
            };
            let reserved = ReservedStatus {
                name: args.reserved.clone(),
                present,
                full_output_matches: matches,
            };
            JsonReport::new(&comparison, &reserved, summary).write_to(out)?;
            Outcome {
                comparison,
                reserved,
                summary,
            }
        }
    };

    info!(
        "{} mismatch(es), {} missing, {} present: {}",
        outcome.comparison.mismatches.len(),
        outcome.comparison.missing.len(),
        outcome.reserved.name,
        outcome.reserved.present
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_only_applies_to_relative_paths() {
        let args = CompareArgs {
            dir: Some(PathBuf::from("/work")),
            full_output: PathBuf::from("/abs/all.txt"),
            ..Default::default()
        };
        assert_eq!(args.cli_labels_path(), PathBuf::from("/work/cli_labels_raw.txt"));
        assert_eq!(args.full_output_path(), PathBuf::from("/abs/all.txt"));
    }

    #[test]
    fn defaults_use_working_directory_names() {
        let args = CompareArgs::default();
        assert_eq!(args.expected_path(), PathBuf::from("expected_labels.txt"));
        assert_eq!(args.reserved, "_start");
        assert_eq!(args.format, OutputFormat::Text);
    }
}
