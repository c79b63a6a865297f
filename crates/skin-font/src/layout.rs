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

use glam::UVec2;

pub const CELL_WIDTH: u32 = 8;
pub const CELL_HEIGHT: u32 = 10;
pub const COLUMNS: u32 = 16;

/// Baseline of the first (lowest) row. Each later row sits one cell higher.
pub const BOTTOM_BASELINE: u32 = 118;

/// One row of the sheet: the y coordinate its glyphs hang from and the
/// characters in it, left to right.
#[derive(Copy, Clone, Debug)]
pub struct GlyphRow {
    pub baseline: u32,
    pub chars: &'static str,
}

/// The sheet's rows in drawing order. Rows fill the sheet from the bottom up.
pub const ROWS: [GlyphRow; 4] = [
    GlyphRow {
        baseline: BOTTOM_BASELINE,
        chars: "abcdefghijklmnop",
    },
    GlyphRow {
        baseline: BOTTOM_BASELINE - CELL_HEIGHT,
        chars: "qrstuvwxyz123456",
    },
    GlyphRow {
        baseline: BOTTOM_BASELINE - 2 * CELL_HEIGHT,
        chars: "7890#.!?:*%()-+",
    },
    GlyphRow {
        baseline: BOTTOM_BASELINE - 3 * CELL_HEIGHT,
        chars: "\\=/><",
    },
];

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GlyphCell {
    pub ch: char,
    pub row: usize,
    pub column: u32,
    /// Top-left draw position of the glyph.
    pub origin: UVec2,
}

impl GlyphCell {
    pub fn new(ch: char, row: usize, column: u32) -> Self {
        Self {
            ch,
            row,
            column,
            origin: UVec2::new((column % COLUMNS) * CELL_WIDTH, ROWS[row].baseline),
        }
    }
}

/// Every cell of the sheet, row by row, left to right.
pub fn cells() -> impl Iterator<Item = GlyphCell> {
    ROWS.iter().enumerate().flat_map(|(row, glyph_row)| {
        glyph_row
            .chars
            .chars()
            .enumerate()
            .map(move |(column, ch)| GlyphCell::new(ch, row, column as u32))
    })
}
