// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::path::Path;

use shape_bench_core::{BenchError, Surface};

/// An image output error.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// PNG encoding failed.
    #[error("failed to encode PNG: {0}")]
    Encoding(#[from] png::EncodingError),

    /// Writing failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<ImageError> for BenchError {
    fn from(e: ImageError) -> Self {
        match e {
            ImageError::Io(e) => BenchError::Io(e),
            e @ ImageError::Encoding(_) => BenchError::Image(Box::new(e)),
        }
    }
}

/// Encodes surface's visible pixels into a non-premultiplied RGBA PNG.
pub fn encode_png(surface: &Surface) -> Result<Vec<u8>, ImageError> {
    // Demultiplied copy of the visible area.
    let mut rgba = Vec::with_capacity(surface.width() as usize * surface.height() as usize * 4);
    for row in surface.rows() {
        for pixel in row {
            rgba.extend_from_slice(&demultiply(*pixel));
        }
    }

    let mut data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut data, surface.width(), surface.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&rgba)?;
    }

    Ok(data)
}

/// Saves surface as a PNG file.
pub fn save_png<P: AsRef<Path>>(surface: &Surface, path: P) -> Result<(), ImageError> {
    let data = encode_png(surface)?;
    std::fs::write(path, data)?;
    Ok(())
}

/// Converts a premultiplied `0xAARRGGBB` word into RGBA bytes.
fn demultiply(pixel: u32) -> [u8; 4] {
    let a = (pixel >> 24) as u8;
    let unmul = |c: u32| -> u8 {
        let c = (c & 0xFF) as u8;
        match a {
            0 => 0,
            255 => c,
            _ => ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8,
        }
    };

    [unmul(pixel >> 16), unmul(pixel >> 8), unmul(pixel), a]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demultiply_pixels() {
        assert_eq!(demultiply(0xFF10_2030), [0x10, 0x20, 0x30, 0xFF]);
        assert_eq!(demultiply(0x0000_0000), [0, 0, 0, 0]);
        assert_eq!(demultiply(0x8080_0000), [0xFF, 0, 0, 0x80]);
    }

    fn encoding_error() -> png::EncodingError {
        let mut data = Vec::new();
        let mut writer = png::Encoder::new(&mut data, 2, 2).write_header().unwrap();
        // A 2x2 grayscale image needs 4 bytes.
        writer.write_image_data(&[0; 3]).unwrap_err()
    }

    #[test]
    fn encoding_error_keeps_its_type() {
        let err = BenchError::from(ImageError::from(encoding_error()));
        match err {
            BenchError::Image(ref source) => {
                let image = source.downcast_ref::<ImageError>().unwrap();
                assert!(matches!(image, ImageError::Encoding(_)));
            }
            ref e => panic!("unexpected {:?}", e),
        }

        assert!(err.to_string().starts_with("failed to encode PNG"));
    }

    #[test]
    fn io_error_stays_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = BenchError::from(ImageError::from(io));
        assert!(matches!(err, BenchError::Io(_)));
    }
}
