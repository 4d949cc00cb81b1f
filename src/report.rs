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

use std::io::{self, Write};

use serde::Serialize;

use crate::compare::{Comparison, Mismatch};

/// Writes the text report one section at a time, so that whatever was
/// already printed stays on screen if a later input file cannot be read.
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn header(&mut self) -> io::Result<()> {
        writeln!(self.out, "Comparison Results:")?;
        writeln!(self.out, "==================")?;
        writeln!(self.out)
    }

    pub fn mismatches(&mut self, mismatches: &[Mismatch]) -> io::Result<()> {
        for m in mismatches {
            writeln!(self.out, "MISMATCH: {}", m.name)?;
            writeln!(self.out, "  Expected: {}", m.expected)?;
            writeln!(self.out, "  CLI:      {}", m.cli)?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    pub fn missing(&mut self, missing: &[String]) -> io::Result<()> {
        if missing.is_empty() {
            return Ok(());
        }
        writeln!(self.out, "Missing in CLI output:")?;
        for item in missing {
            writeln!(self.out, "  {}", item)?;
        }
        writeln!(self.out)
    }

    pub fn comparison(&mut self, cmp: &Comparison) -> io::Result<()> {
        self.mismatches(&cmp.mismatches)?;
        self.missing(&cmp.missing)
    }

    pub fn reserved_missing(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "Note: {} symbol missing from CLI output", name)
    }

    pub fn found_in_full_output(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "Found in full output: {}", line)
    }

    pub fn summary(&mut self, summary: &Summary) -> io::Result<()> {
        writeln!(self.out, "\nSummary:")?;
        writeln!(self.out, "Expected symbols: {}", summary.expected_symbols)?;
        writeln!(self.out, "Found in CLI: {}", summary.found_in_cli)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Non-blank lines of the expected file.
    pub expected_symbols: usize,
    /// Distinct CLI names that also appear in the expected file.
    pub found_in_cli: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReservedStatus {
    pub name: String,
    pub present: bool,
    pub full_output_matches: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub mismatches: &'a [Mismatch],
    pub missing: &'a [String],
    pub reserved: &'a ReservedStatus,
    pub summary: Summary,
}

impl<'a> JsonReport<'a> {
    pub fn new(cmp: &'a Comparison, reserved: &'a ReservedStatus, summary: Summary) -> Self {
        Self {
            mismatches: &cmp.mismatches,
            missing: &cmp.missing,
            reserved,
            summary,
        }
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut out, self)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}
