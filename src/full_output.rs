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

use anyhow::{Context, Result};
use log::debug;
use std::io::BufRead;
use std::path::Path;

use crate::labels::{for_each_line, open};

/// Binding column value the full symbol dump uses for global symbols.
pub const GLOBAL_MARKER: &str = "GLOBAL";

/// Every line of `reader` mentioning both `name` and `GLOBAL`, trimmed.
/// These are plain substring tests, so `_start` also hits `__start_foo`.
pub fn find_global_lines<R: BufRead>(reader: R, name: &str) -> Result<Vec<String>> {
    let mut found = Vec::new();
    for_each_line(reader, |line| {
        if line.contains(name) && line.contains(GLOBAL_MARKER) {
            found.push(line.trim().to_string());
        }
    })?;
    Ok(found)
}

pub fn search_file(path: &Path, name: &str) -> Result<Vec<String>> {
    let found = find_global_lines(open(path)?, name)
        .with_context(|| format!("failed to read {}", path.display()))?;
    debug!(
        "{}: {} global line(s) mention {}",
        path.display(),
        found.len(),
        name
    );
    Ok(found)
}
