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

use anyhow::Result;
use clap::Parser;
use flexi_logger::Logger;

use symcompare::run::{run, CompareArgs};

/// Compare the ELF viewer's symbol output against a reference listing.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: CompareArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --debug
    let level = if cli.args.debug { "debug" } else { "warn" };
    let _logger = Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .start()?;

    let stdout = std::io::stdout();
    let outcome = run(&cli.args, stdout.lock())?;
    if cli.args.fail_on_diff && outcome.has_differences() {
        std::process::exit(1);
    }
    Ok(())
}
