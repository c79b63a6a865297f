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

use std::path::PathBuf;

use tracing::{debug, info, Level};
use tracing_subscriber::prelude::*;

use canvas::{Canvas, WHITE};
use config::GeneratorConfig;
use error::SkinFontResult;
use font::{FontResolver, FontSource};
use raster::GlyphFootprint;

/// RGBA pixel storage and blending.
pub mod canvas;

/// Hard-coded paths and font sizes.
pub mod config;

pub mod error;

/// Font loading with fallback to the bundled face.
pub mod font;

/// The fixed character grid.
pub mod layout;

/// Glyph drawing onto the canvas.
pub mod raster;

#[cfg(test)]
mod scratch;

/// PNG output.
pub mod writer;

/// Helper function to set up console logging with reasonable defaults.
pub fn init_logging() {
    let filter = tracing_subscriber::filter::Targets::new()
        .with_target("skin_font", Level::DEBUG)
        .with_default(Level::INFO);

    let format = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}

/// What a generator run produced.
#[derive(Debug)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    pub font: FontSource,
    pub glyphs: Vec<GlyphFootprint>,
}

/// Draws the full sheet and writes it to the configured output path.
pub fn generate(config: &GeneratorConfig) -> SkinFontResult<GenerationReport> {
    let mut canvas = Canvas::sheet();

    let font = FontResolver::resolve(&config.fonts);
    debug!("Resolved font: {:?}", font.source);

    let glyphs = raster::rasterize(&mut canvas, &font, layout::cells(), WHITE);
    info!("Drew {} glyphs", glyphs.len());

    writer::write_png(&canvas, &config.output_path)?;

    Ok(GenerationReport {
        output_path: config.output_path.clone(),
        font: font.source,
        glyphs,
    })
}
