// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::random::premultiply_u8;
use crate::{BenchError, BenchResult, PixelFormat};

/// Number of sprites a [`SpriteSet`] holds.
pub const NUM_SPRITES: usize = 4;

/// A driver-owned pixel buffer.
///
/// Rows are `stride` pixels apart. Pixels past `width` in a row are padding
/// and belong to nobody.
#[derive(Clone, PartialEq, Debug)]
pub struct Surface {
    width: u32,
    height: u32,
    stride: u32,
    format: PixelFormat,
    data: Vec<u32>,
}

impl Surface {
    /// Creates a new tightly packed surface filled with transparent black.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> BenchResult<Self> {
        Self::with_stride(width, height, width, format)
    }

    /// Creates a new surface with `stride` pixels per row.
    ///
    /// Returns an error when the size is zero, `stride` is smaller than `width`,
    /// or the buffer size overflows.
    pub fn with_stride(
        width: u32,
        height: u32,
        stride: u32,
        format: PixelFormat,
    ) -> BenchResult<Self> {
        if width == 0 || height == 0 {
            return Err(BenchError::surface(format!(
                "{}x{} surface is empty",
                width, height
            )));
        }

        if stride < width {
            return Err(BenchError::surface(format!(
                "stride {} is smaller than width {}",
                stride, width
            )));
        }

        let len = (stride as usize)
            .checked_mul(height as usize)
            .filter(|n| n.checked_mul(format.bytes_per_pixel()).is_some())
            .ok_or_else(|| BenchError::surface("surface size overflows"))?;

        Ok(Surface {
            width,
            height,
            stride,
            format,
            data: vec![0; len],
        })
    }

    /// Returns surface's width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns surface's height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns surface's stride in pixels.
    #[inline]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Returns surface's pixel format.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Checks that rows have no padding.
    #[inline]
    pub fn is_packed(&self) -> bool {
        self.stride == self.width
    }

    /// Returns the whole buffer, padding included.
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Returns the whole mutable buffer, padding included.
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Returns exactly `width * height` pixels.
    ///
    /// Returns `None` when rows are padded.
    pub fn packed_pixels(&self) -> Option<&[u32]> {
        if self.is_packed() {
            Some(&self.data)
        } else {
            None
        }
    }

    /// Returns exactly `width * height` mutable pixels.
    ///
    /// Returns `None` when rows are padded.
    pub fn packed_pixels_mut(&mut self) -> Option<&mut [u32]> {
        if self.is_packed() {
            Some(&mut self.data)
        } else {
            None
        }
    }

    /// Fills every pixel, padding included.
    pub fn fill(&mut self, pixel: u32) {
        self.data.fill(pixel);
    }

    /// Returns a pixel at the specified position.
    ///
    /// Returns `None` when position is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = y as usize * self.stride as usize + x as usize;
        self.data.get(idx).copied()
    }

    /// Iterates over visible rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        let width = self.width as usize;
        self.data
            .chunks(self.stride as usize)
            .map(move |row| &row[..width])
    }
}

/// Driver-owned sprites used by pattern styles.
#[derive(Clone, PartialEq, Debug)]
pub struct SpriteSet {
    sprites: [Surface; NUM_SPRITES],
}

impl SpriteSet {
    /// Generates `size`x`size` premultiplied sprites.
    ///
    /// The output depends only on `size`.
    pub fn generate(size: u32) -> BenchResult<Self> {
        let sprites = [
            sprite(size, checker)?,
            sprite(size, rings)?,
            sprite(size, stripes)?,
            sprite(size, disc)?,
        ];

        Ok(SpriteSet { sprites })
    }

    /// Returns a sprite.
    ///
    /// Slots wrap around, so any index is valid.
    pub fn get(&self, index: usize) -> &Surface {
        &self.sprites[index % NUM_SPRITES]
    }

    /// Returns sprites' size.
    pub fn size(&self) -> u32 {
        self.sprites[0].width()
    }

    /// Iterates over all sprites.
    pub fn iter(&self) -> core::slice::Iter<Surface> {
        self.sprites.iter()
    }
}

fn sprite(size: u32, shader: fn(f64, f64) -> [u8; 4]) -> BenchResult<Surface> {
    let mut surface = Surface::new(size, size, PixelFormat::Prgb32)?;
    let scale = 1.0 / f64::from(size);
    let width = size as usize;
    for (idx, pixel) in surface.data_mut().iter_mut().enumerate() {
        let x = ((idx % width) as f64 + 0.5) * scale;
        let y = ((idx / width) as f64 + 0.5) * scale;
        let [a, r, g, b] = shader(x, y);
        *pixel = pack_premultiplied(a, r, g, b);
    }

    Ok(surface)
}

fn pack_premultiplied(a: u8, r: u8, g: u8, b: u8) -> u32 {
    u32::from(a) << 24
        | u32::from(premultiply_u8(r, a)) << 16
        | u32::from(premultiply_u8(g, a)) << 8
        | u32::from(premultiply_u8(b, a))
}

fn unit_to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

fn checker(x: f64, y: f64) -> [u8; 4] {
    let cell = ((x * 4.0) as u32 + (y * 4.0) as u32) % 2;
    if cell == 0 {
        [0xFF, 0xE0, 0x40, 0x30]
    } else {
        [0xFF, 0x30, 0x60, 0xE0]
    }
}

fn rings(x: f64, y: f64) -> [u8; 4] {
    let d = ((x - 0.5).powi(2) + (y - 0.5).powi(2)).sqrt();
    let t = (d * 24.0).sin() * 0.5 + 0.5;
    [0xFF, unit_to_u8(t), unit_to_u8(1.0 - t), 0x80]
}

fn stripes(x: f64, y: f64) -> [u8; 4] {
    let band = ((x + y) * 6.0) as u32 % 2;
    let a = if band == 0 { 0xFF } else { 0x80 };
    [a, unit_to_u8(x), 0xC0, unit_to_u8(y)]
}

fn disc(x: f64, y: f64) -> [u8; 4] {
    let d = ((x - 0.5).powi(2) + (y - 0.5).powi(2)).sqrt() * 2.0;
    [unit_to_u8(1.0 - d), 0x20, unit_to_u8(1.0 - d * 0.5), 0xFF]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zeroed_and_packed() {
        let surface = Surface::new(16, 8, PixelFormat::Prgb32).unwrap();
        assert!(surface.is_packed());
        assert_eq!(surface.packed_pixels().unwrap().len(), 16 * 8);
        assert!(surface.data().iter().all(|p| *p == 0));
    }

    #[test]
    fn padded_rows() {
        let mut surface = Surface::with_stride(10, 4, 12, PixelFormat::Prgb32).unwrap();
        assert!(!surface.is_packed());
        assert!(surface.packed_pixels().is_none());
        assert!(surface.packed_pixels_mut().is_none());
        assert_eq!(surface.data().len(), 12 * 4);
        assert_eq!(surface.rows().count(), 4);
        assert!(surface.rows().all(|row| row.len() == 10));
    }

    #[test]
    fn invalid_sizes() {
        assert!(Surface::new(0, 10, PixelFormat::Prgb32).is_err());
        assert!(Surface::new(10, 0, PixelFormat::Prgb32).is_err());
        assert!(Surface::with_stride(10, 10, 9, PixelFormat::Prgb32).is_err());
    }

    #[test]
    fn pixel_access() {
        let mut surface = Surface::with_stride(4, 4, 8, PixelFormat::Prgb32).unwrap();
        surface.data_mut()[8 + 3] = 0xFF00_FF00;
        assert_eq!(surface.pixel(3, 1), Some(0xFF00_FF00));
        assert_eq!(surface.pixel(4, 1), None);
        assert_eq!(surface.pixel(0, 4), None);

        surface.fill(0x8080_8080);
        assert_eq!(surface.pixel(0, 0), Some(0x8080_8080));
    }

    #[test]
    fn sprites_are_premultiplied() {
        let sprites = SpriteSet::generate(32).unwrap();
        assert_eq!(sprites.size(), 32);
        assert_eq!(sprites.iter().count(), NUM_SPRITES);
        for sprite in sprites.iter() {
            for p in sprite.data() {
                let a = p >> 24;
                assert!((p >> 16) & 0xFF <= a);
                assert!((p >> 8) & 0xFF <= a);
                assert!(p & 0xFF <= a);
            }
        }
    }

    #[test]
    fn sprites_are_deterministic() {
        let a = SpriteSet::generate(16).unwrap();
        let b = SpriteSet::generate(16).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.get(0), b.get(1));
        assert_eq!(a.get(5), b.get(1));
    }
}
