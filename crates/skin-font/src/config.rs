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

use crate::font::FontCandidate;

#[cfg(windows)]
mod paths {
    pub const PRIMARY_FONT: &str = r"C:\Windows\Fonts\consola.ttf";
    pub const SECONDARY_FONT: &str = r"C:\Windows\Fonts\arial.ttf";
    pub const OUTPUT: &str = r"c:\Users\Styx\Desktop\Final-Project\Chromashift\assets\ui\ctm.uiskin.png";
}

#[cfg(not(windows))]
mod paths {
    pub const PRIMARY_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf";
    pub const SECONDARY_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";
    pub const OUTPUT: &str = "/tmp/ctm.uiskin.png";
}

pub const PRIMARY_FONT_PX_PER_EM: f32 = 10.0;
pub const SECONDARY_FONT_PX_PER_EM: f32 = 8.0;

/// Where the sheet is written and which fonts are tried before the bundled
/// one.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub output_path: PathBuf,
    pub fonts: Vec<FontCandidate>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(paths::OUTPUT),
            fonts: vec![
                FontCandidate::new(paths::PRIMARY_FONT, PRIMARY_FONT_PX_PER_EM),
                FontCandidate::new(paths::SECONDARY_FONT, SECONDARY_FONT_PX_PER_EM),
            ],
        }
    }
}
