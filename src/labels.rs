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

//! Parsers for the two label listings.
//!
//! The CLI listing is raw symbol output from the ELF viewer: one record per
//! line with the value in field 2 and the symbol name in field 9. The
//! expected listing is simply `ADDRESS NAME` per line.
//!
//! Both parsers only look at field counts. Anything that is too short is
//! skipped without complaint.

use anyhow::{Context, Result};
use log::{debug, trace};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::symbols::{
    normalize_address, CliSymbolTable, ExpectedSymbol, ExpectedSymbolList, SymbolEntry,
};

const CLI_MIN_FIELDS: usize = 9;
const CLI_ADDRESS_FIELD: usize = 1;
const CLI_NAME_FIELD: usize = 8;

const EXPECTED_MIN_FIELDS: usize = 2;

/// Calls `f` with each line of `reader`, trailing CR/LF removed.
/// Invalid UTF-8 is replaced rather than rejected.
pub(crate) fn for_each_line<R, F>(mut reader: R, mut f: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(&str),
{
    let mut buf: Vec<u8> = Vec::with_capacity(1024);
    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf)?;
        if n == 0 {
            break; // EOF
        }
        while buf
            .last()
            .map(|b| *b == b'\n' || *b == b'\r')
            .unwrap_or(false)
        {
            buf.pop();
        }
        let line = String::from_utf8_lossy(&buf);
        f(line.as_ref());
    }
    Ok(())
}

pub fn parse_cli_line(line: &str) -> Option<SymbolEntry> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() < CLI_MIN_FIELDS {
        return None;
    }
    Some(SymbolEntry {
        name: words[CLI_NAME_FIELD].to_string(),
        address: normalize_address(words[CLI_ADDRESS_FIELD]),
    })
}

pub fn parse_expected_line(line: &str) -> Option<ExpectedSymbol> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() < EXPECTED_MIN_FIELDS {
        return None;
    }
    Some(ExpectedSymbol {
        address: words[0].to_uppercase(),
        name: words[1].to_string(),
    })
}

pub fn parse_cli_labels<R: BufRead>(reader: R) -> Result<CliSymbolTable> {
    let mut table = CliSymbolTable::new();
    let mut records = 0usize;
    let mut skipped = 0usize;
    for_each_line(reader, |line| match parse_cli_line(line) {
        Some(entry) => {
            records += 1;
            table.insert(entry);
        }
        None => {
            trace!("skipping cli line: {:?}", line);
            skipped += 1;
        }
    })?;
    debug!(
        "cli labels: {} records, {} unique names, {} lines skipped",
        records,
        table.len(),
        skipped
    );
    Ok(table)
}

pub fn parse_expected_labels<R: BufRead>(reader: R) -> Result<ExpectedSymbolList> {
    let mut list = ExpectedSymbolList::new();
    let mut skipped = 0usize;
    for_each_line(reader, |line| {
        if !line.trim().is_empty() {
            list.non_blank_lines += 1;
        }
        match parse_expected_line(line) {
            Some(symbol) => list.push(symbol),
            None => {
                trace!("skipping expected line: {:?}", line);
                skipped += 1;
            }
        }
    })?;
    debug!(
        "expected labels: {} entries, {} non-blank lines, {} lines skipped",
        list.entries.len(),
        list.non_blank_lines,
        skipped
    );
    Ok(list)
}

pub(crate) fn open(path: &Path) -> Result<BufReader<File>> {
    debug!("reading {}", path.display());
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Ok(BufReader::with_capacity(64 * 1024, file))
}

pub fn read_cli_labels(path: &Path) -> Result<CliSymbolTable> {
    parse_cli_labels(open(path)?).with_context(|| format!("failed to read {}", path.display()))
}

pub fn read_expected_labels(path: &Path) -> Result<ExpectedSymbolList> {
    parse_expected_labels(open(path)?)
        .with_context(|| format!("failed to read {}", path.display()))
}
