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

use ab_glyph::{point, Font};
use glam::UVec2;
use tracing::trace;

use crate::canvas::{Canvas, Rgba};
use crate::font::ResolvedFont;
use crate::layout::GlyphCell;

/// Where a drawn glyph actually landed on the canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GlyphFootprint {
    pub ch: char,
    pub origin: UVec2,
    /// Inclusive top-left of the painted pixels.
    pub min: UVec2,
    /// Exclusive bottom-right of the painted pixels.
    pub max: UVec2,
    pub pixels: u32,
}

/// Draws `ch` with its ascender line at `origin.y` and its pen position at
/// `origin.x`.
///
/// Returns `None` if the glyph has no outline or lies entirely off the canvas.
pub fn draw_glyph(
    canvas: &mut Canvas,
    font: &ResolvedFont,
    ch: char,
    origin: UVec2,
    color: Rgba,
) -> Option<GlyphFootprint> {
    let position = point(origin.x as f32, origin.y as f32 + font.ascent());
    let glyph = font
        .font
        .glyph_id(ch)
        .with_scale_and_position(font.scale, position);
    let outlined = font.font.outline_glyph(glyph)?;
    let bounds = outlined.px_bounds();
    let left = bounds.min.x as i64;
    let top = bounds.min.y as i64;

    let mut min = UVec2::new(u32::MAX, u32::MAX);
    let mut max = UVec2::ZERO;
    let mut pixels = 0;
    outlined.draw(|x, y, coverage| {
        let px = left + x as i64;
        let py = top + y as i64;
        if px < 0 || py < 0 {
            return;
        }

        let (px, py) = (px as u32, py as u32);
        if canvas.blend(px, py, color, coverage) {
            min = min.min(UVec2::new(px, py));
            max = max.max(UVec2::new(px + 1, py + 1));
            pixels += 1;
        }
    });

    if pixels == 0 {
        return None;
    }

    Some(GlyphFootprint {
        ch,
        origin,
        min,
        max,
        pixels,
    })
}

/// Draws every cell in order and reports the glyphs that left a mark.
pub fn rasterize(
    canvas: &mut Canvas,
    font: &ResolvedFont,
    cells: impl IntoIterator<Item = GlyphCell>,
    color: Rgba,
) -> Vec<GlyphFootprint> {
    cells
        .into_iter()
        .filter_map(|cell| {
            let footprint = draw_glyph(canvas, font, cell.ch, cell.origin, color);
            if footprint.is_none() {
                trace!("{:?} (row {}, column {}) left no mark", cell.ch, cell.row, cell.column);
            }
            footprint
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{TRANSPARENT, WHITE};
    use crate::layout;

    fn sheet() -> (Canvas, Vec<GlyphFootprint>) {
        let font = ResolvedFont::builtin();
        let mut canvas = Canvas::sheet();
        let footprints = rasterize(&mut canvas, &font, layout::cells(), WHITE);
        (canvas, footprints)
    }

    #[test]
    fn every_glyph_leaves_a_mark() {
        let (_, footprints) = sheet();
        assert_eq!(footprints.len(), 52);

        let drawn: String = footprints.iter().map(|f| f.ch).collect();
        let expected: String = layout::cells().map(|c| c.ch).collect();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn glyphs_stay_near_their_cells() {
        let font = ResolvedFont::builtin();
        for cell in layout::cells() {
            let mut canvas = Canvas::sheet();
            let footprint = draw_glyph(&mut canvas, &font, cell.ch, cell.origin, WHITE)
                .unwrap_or_else(|| panic!("{:?} drew nothing", cell.ch));

            // anti-aliasing may bleed one pixel past either side of the cell
            assert!(footprint.min.x + 1 >= cell.origin.x, "{:?}", footprint);
            assert!(footprint.max.x <= cell.origin.x + layout::CELL_WIDTH + 1, "{:?}", footprint);
            assert!(footprint.min.y >= cell.origin.y, "{:?}", footprint);
        }
    }

    #[test]
    fn uncovered_pixels_stay_transparent() {
        let (canvas, footprints) = sheet();

        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                let inside = footprints
                    .iter()
                    .any(|f| x >= f.min.x && x < f.max.x && y >= f.min.y && y < f.max.y);
                if !inside {
                    assert_eq!(canvas.pixel(x, y), Some(TRANSPARENT), "({}, {})", x, y);
                }
            }
        }

        // nothing hangs above the top row
        for y in 0..layout::ROWS[3].baseline {
            for x in 0..canvas.width() {
                assert_eq!(canvas.pixel(x, y).unwrap()[3], 0, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn painted_pixels_are_white() {
        let (canvas, _) = sheet();
        let painted: Vec<_> = canvas.pixels().iter().filter(|p| p[3] > 0).collect();
        assert!(!painted.is_empty());
        assert!(painted.iter().all(|p| p[..3] == [255, 255, 255]));
        assert!(painted.iter().any(|p| p[3] > 128));
    }

    #[test]
    fn rasterizing_is_deterministic() {
        let (first, _) = sheet();
        let (second, _) = sheet();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn off_canvas_glyph_draws_nothing() {
        let font = ResolvedFont::builtin();
        let mut canvas = Canvas::new(8, 8);
        assert_eq!(draw_glyph(&mut canvas, &font, 'a', UVec2::new(64, 64), WHITE), None);
        assert!(canvas.pixels().iter().all(|p| *p == TRANSPARENT));
    }

    #[test]
    fn space_has_no_outline() {
        let font = ResolvedFont::builtin();
        let mut canvas = Canvas::sheet();
        assert_eq!(draw_glyph(&mut canvas, &font, ' ', UVec2::ZERO, WHITE), None);
    }
}
