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

use std::fmt;
use std::fmt::Formatter;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum SkinFontError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Encoding(png::EncodingError),
    InvalidFont {
        path: PathBuf,
        source: ab_glyph::InvalidFont,
    },
    /// The face has no `head` table, so it can't be scaled to a pixel size.
    MissingUnitsPerEm {
        path: PathBuf,
    },
}

impl fmt::Display for SkinFontError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SkinFontError::Io { path, source } => {
                write!(f, "i/o error at {}: {}", path.display(), source)
            }
            SkinFontError::Encoding(err) => {
                write!(f, "png encoding error: {}", err)
            }
            SkinFontError::InvalidFont { path, source } => {
                write!(f, "invalid font at {}: {}", path.display(), source)
            }
            SkinFontError::MissingUnitsPerEm { path } => {
                write!(f, "font at {} has no units-per-em", path.display())
            }
        }
    }
}

impl std::error::Error for SkinFontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SkinFontError::Io { source, .. } => Some(source),
            SkinFontError::Encoding(err) => Some(err),
            SkinFontError::InvalidFont { source, .. } => Some(source),
            SkinFontError::MissingUnitsPerEm { .. } => None,
        }
    }
}

impl From<png::EncodingError> for SkinFontError {
    fn from(err: png::EncodingError) -> Self {
        SkinFontError::Encoding(err)
    }
}

pub type SkinFontResult<T> = Result<T, SkinFontError>;
