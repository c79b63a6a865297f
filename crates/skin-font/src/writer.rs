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

use std::path::Path;

use tracing::info;

use crate::canvas::Canvas;
use crate::error::{SkinFontError, SkinFontResult};

/// Encodes the canvas as an 8-bit RGBA PNG.
pub fn encode_png(canvas: &Canvas) -> SkinFontResult<Vec<u8>> {
    let mut output = Vec::new();
    let mut encoder = png::Encoder::new(&mut output, canvas.width(), canvas.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(canvas.as_bytes())?;
    writer.finish()?;
    Ok(output)
}

/// Encodes the canvas and writes it to `path`, replacing whatever is there.
/// Parent directories are not created.
pub fn write_png(canvas: &Canvas, path: &Path) -> SkinFontResult<()> {
    let data = encode_png(canvas)?;
    info!("Writing {}x{} sheet to {:?}", canvas.width(), canvas.height(), path);
    std::fs::write(path, data).map_err(|source| SkinFontError::Io {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::WHITE;
    use crate::scratch::ScratchDir;
    use std::fs::{self, File};

    #[test]
    fn written_png_matches_canvas() {
        let mut canvas = Canvas::sheet();
        canvas.blend(3, 5, WHITE, 1.0);
        canvas.blend(127, 127, WHITE, 0.25);

        let dir = ScratchDir::new("writer");
        let path = dir.join("sheet.png");
        write_png(&canvas, &path).unwrap();

        let decoder = png::Decoder::new(File::open(&path).unwrap());
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();

        assert_eq!((info.width, info.height), (128, 128));
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert_eq!(info.bit_depth, png::BitDepth::Eight);
        assert_eq!(&buf[..info.buffer_size()], canvas.as_bytes());
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = ScratchDir::new("overwrite");
        let path = dir.join("sheet.png");
        fs::write(&path, b"stale").unwrap();

        let canvas = Canvas::sheet();
        write_png(&canvas, &path).unwrap();

        let written = fs::read(&path).unwrap();
        assert_eq!(written, encode_png(&canvas).unwrap());
        assert_eq!(&written[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = ScratchDir::new("missing");
        let path = dir.join("not-created").join("sheet.png");
        let err = write_png(&Canvas::sheet(), &path).unwrap_err();
        match err {
            SkinFontError::Io { path: err_path, .. } => assert_eq!(err_path, path),
            other => panic!("unexpected error: {}", other),
        }
        assert!(!path.exists());
    }
}
