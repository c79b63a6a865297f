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

/// An RGBA8 pixel.
pub type Rgba = [u8; 4];

pub const TRANSPARENT: Rgba = [0, 0, 0, 0];
pub const WHITE: Rgba = [255, 255, 255, 255];

/// A mutable RGBA8 pixel grid, stored row-major with straight alpha.
pub struct Canvas {
    pixels: Vec<Rgba>,
    width: u32,
    height: u32,
}

impl Canvas {
    pub const SIZE: u32 = 128;

    /// Allocates a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![TRANSPARENT; width as usize * height as usize],
            width,
            height,
        }
    }

    /// The 128x128 sheet the skin font is drawn on.
    pub fn sheet() -> Self {
        Self::new(Self::SIZE, Self::SIZE)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    #[cfg(test)]
    pub(crate) fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Composites `color`, scaled by `coverage`, over the pixel at (x, y)
    /// using the source-over operator. Out-of-bounds writes are ignored.
    ///
    /// Returns true if the pixel was touched.
    pub fn blend(&mut self, x: u32, y: u32, color: Rgba, coverage: f32) -> bool {
        let Some(idx) = self.index(x, y) else {
            return false;
        };

        let coverage = coverage.clamp(0.0, 1.0);
        let src_a = color[3] as f32 / 255.0 * coverage;
        if src_a <= 0.0 {
            return false;
        }

        let dst = self.pixels[idx];
        let dst_a = dst[3] as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if to_u8(out_a) == 0 {
            return false;
        }

        let mut out = [0u8; 4];
        for channel in 0..3 {
            let src_c = color[channel] as f32 / 255.0;
            let dst_c = dst[channel] as f32 / 255.0;
            let c = (src_c * src_a + dst_c * dst_a * (1.0 - src_a)) / out_a;
            out[channel] = to_u8(c);
        }
        out[3] = to_u8(out_a);

        self.pixels[idx] = out;
        true
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            None
        } else {
            let idx = y as usize * self.width as usize + x as usize;
            (idx < self.pixels.len()).then_some(idx)
        }
    }
}

fn to_u8(f: f32) -> u8 {
    (f * 255.0).round().clamp(0.0, 255.0) as u8
}
