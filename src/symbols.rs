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

use std::collections::{HashMap, HashSet};

/// Strip leading zeros (keeping at least one digit) and uppercase.
/// `"0000000000401000"` becomes `"401000"`, `"000"` becomes `"0"`.
pub fn normalize_address(raw: &str) -> String {
    let stripped = raw.trim_start_matches('0');
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_uppercase()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolEntry {
    pub name: String,
    pub address: String,
}

/// Symbols as reported by the ELF viewer. One address per name; a later
/// insert for the same name replaces the earlier one.
#[derive(Debug, Default)]
pub struct CliSymbolTable {
    symbols_by_name: HashMap<String, String>,
}

impl CliSymbolTable {
    pub fn new() -> Self {
        Self {
            symbols_by_name: HashMap::new(),
        }
    }

    pub fn insert(&mut self, entry: SymbolEntry) {
        self.symbols_by_name.insert(entry.name, entry.address);
    }

    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        self.symbols_by_name.get(name).map(|s| s.as_str())
    }

    pub fn has_symbol_by_name(&self, name: &str) -> bool {
        self.symbols_by_name.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.symbols_by_name.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.symbols_by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols_by_name.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedSymbol {
    pub address: String,
    pub name: String,
}

/// Reference symbols in file order. Duplicates are kept.
#[derive(Debug, Default)]
pub struct ExpectedSymbolList {
    pub entries: Vec<ExpectedSymbol>,
    /// Lines that are not entirely whitespace, whether or not they parsed.
    pub non_blank_lines: usize,
}

impl ExpectedSymbolList {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            non_blank_lines: 0,
        }
    }

    pub fn push(&mut self, symbol: ExpectedSymbol) {
        self.entries.push(symbol);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExpectedSymbol> {
        self.entries.iter()
    }

    pub fn name_set(&self) -> HashSet<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Number of distinct names in `table` that also appear in this list.
    pub fn count_found_in(&self, table: &CliSymbolTable) -> usize {
        let names = self.name_set();
        table.names().filter(|n| names.contains(n)).count()
    }
}
