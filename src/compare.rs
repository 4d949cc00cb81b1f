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

use log::debug;
use serde::Serialize;

use crate::symbols::{CliSymbolTable, ExpectedSymbolList};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mismatch {
    pub name: String,
    pub expected: String,
    pub cli: String,
}

#[derive(Debug, Default)]
pub struct Comparison {
    /// In expected-list order, one per offending expected entry.
    pub mismatches: Vec<Mismatch>,
    /// `"{address} {name}"` for every expected entry the CLI table lacks.
    pub missing: Vec<String>,
    pub matched: usize,
}

impl Comparison {
    pub fn has_differences(&self) -> bool {
        !self.mismatches.is_empty() || !self.missing.is_empty()
    }
}

/// Walk the expected list in order and check each entry against the CLI table.
/// Addresses are compared as strings, exactly as they were normalized.
pub fn compare(expected: &ExpectedSymbolList, cli: &CliSymbolTable) -> Comparison {
    let mut result = Comparison::default();
    for symbol in expected.iter() {
        match cli.get_by_name(&symbol.name) {
            Some(cli_addr) if cli_addr != symbol.address => {
                result.mismatches.push(Mismatch {
                    name: symbol.name.clone(),
                    expected: symbol.address.clone(),
                    cli: cli_addr.to_string(),
                });
            }
            Some(_) => result.matched += 1,
            None => result
                .missing
                .push(format!("{} {}", symbol.address, symbol.name)),
        }
    }
    debug!(
        "compared {} expected entries: {} matched, {} mismatched, {} missing",
        expected.entries.len(),
        result.matched,
        result.mismatches.len(),
        result.missing.len()
    );
    result
}
