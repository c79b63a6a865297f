// Copyright (c) 2023 the Hearth contributors.
// SPDX-License-Identifier: Apache-2.0
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

use clap::Parser;
use skin_font::config::GeneratorConfig;
use tracing::debug;

/// Draws the UI skin bitmap font sheet and writes it to its asset path.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Args {}

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();
    skin_font::init_logging();

    let config = GeneratorConfig::default();
    debug!("Generating with {:?}", config);

    let report = skin_font::generate(&config)?;
    println!("Created {}", report.output_path.display());
    Ok(())
}
