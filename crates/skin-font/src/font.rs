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

use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use tracing::{debug, warn};

use crate::error::{SkinFontError, SkinFontResult};

/// A font file to try, and the size to use it at.
#[derive(Clone, Debug)]
pub struct FontCandidate {
    pub path: PathBuf,
    pub px_per_em: f32,
}

impl FontCandidate {
    pub fn new(path: impl Into<PathBuf>, px_per_em: f32) -> Self {
        Self {
            path: path.into(),
            px_per_em,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FontSource {
    File(PathBuf),
    BuiltIn,
}

/// A loaded face at a fixed pixel size.
#[derive(Clone)]
pub struct ResolvedFont {
    pub font: FontArc,
    pub scale: PxScale,
    pub px_per_em: f32,
    pub source: FontSource,
}

impl ResolvedFont {
    pub const BUILTIN_PX_PER_EM: f32 = 10.0;

    /// Loads a font file at the given size.
    pub fn load(path: &Path, px_per_em: f32) -> SkinFontResult<Self> {
        let data = std::fs::read(path).map_err(|source| SkinFontError::Io {
            path: path.to_owned(),
            source,
        })?;

        let font = FontArc::try_from_vec(data).map_err(|source| SkinFontError::InvalidFont {
            path: path.to_owned(),
            source,
        })?;

        let scale = px_scale(&font, px_per_em).ok_or_else(|| SkinFontError::MissingUnitsPerEm {
            path: path.to_owned(),
        })?;

        Ok(Self {
            font,
            scale,
            px_per_em,
            source: FontSource::File(path.to_owned()),
        })
    }

    /// The Noto Sans face compiled into the binary.
    ///
    /// Panics if the bundled font fails to parse.
    pub fn builtin() -> Self {
        let font = FontArc::try_from_slice(notosans::REGULAR_TTF)
            .expect("bundled Noto Sans failed to parse");
        let scale = px_scale(&font, Self::BUILTIN_PX_PER_EM)
            .expect("bundled Noto Sans has no units-per-em");

        Self {
            font,
            scale,
            px_per_em: Self::BUILTIN_PX_PER_EM,
            source: FontSource::BuiltIn,
        }
    }

    /// Distance from the top of a line to the baseline, in pixels.
    pub fn ascent(&self) -> f32 {
        self.font.as_scaled(self.scale).ascent()
    }
}

/// Sizes are pixels per em. ab_glyph scales by line height, so convert.
fn px_scale(font: &FontArc, px_per_em: f32) -> Option<PxScale> {
    let units_per_em = font.units_per_em()?;
    Some(PxScale::from(px_per_em * font.height_unscaled() / units_per_em))
}

pub struct FontResolver;

impl FontResolver {
    /// Tries each candidate in order and falls back to the built-in font.
    /// Never fails.
    pub fn resolve(candidates: &[FontCandidate]) -> ResolvedFont {
        for candidate in candidates {
            match ResolvedFont::load(&candidate.path, candidate.px_per_em) {
                Ok(font) => {
                    debug!("Using font {:?} at {}px/em", font.source, font.px_per_em);
                    return font;
                }
                Err(err) => debug!("Skipping font candidate: {}", err),
            }
        }

        let font = ResolvedFont::builtin();
        warn!(
            "No font candidates loaded; falling back to built-in font at {}px/em",
            font.px_per_em
        );
        font
    }
}
