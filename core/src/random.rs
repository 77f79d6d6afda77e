// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Point, Rect, RectI, Size, SizeI};

/// A non-premultiplied `0xAARRGGBB` color.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Rgba32(pub u32);

impl Rgba32 {
    /// Returns the alpha component.
    #[inline]
    pub fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Returns the red component.
    #[inline]
    pub fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Returns the green component.
    #[inline]
    pub fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Returns the blue component.
    #[inline]
    pub fn b(self) -> u8 {
        self.0 as u8
    }

    /// Returns a premultiplied `0xAARRGGBB` word.
    pub fn premultiplied(self) -> u32 {
        let a = u32::from(self.a());
        let mul = |c: u8| premultiply_u8(c, self.a()) as u32;
        (a << 24) | (mul(self.r()) << 16) | (mul(self.g()) << 8) | mul(self.b())
    }
}

/// Returns `c * a / 255`, rounded.
#[inline]
pub(crate) fn premultiply_u8(c: u8, a: u8) -> u8 {
    let prod = u32::from(c) * u32::from(a) + 128;
    ((prod + (prod >> 8)) >> 8) as u8
}

/// A seeded, resettable random generator.
///
/// Two generators with the same seed produce the same sequence,
/// which makes workloads identical across modules.
#[derive(Clone, Debug)]
pub struct BenchRandom {
    seed: u64,
    rng: StdRng,
}

impl BenchRandom {
    /// Creates a new generator.
    pub fn new(seed: u64) -> Self {
        BenchRandom {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns generator's seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rewinds the generator to the start of its sequence.
    pub fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    /// Returns a random `u32`.
    pub fn next_u32(&mut self) -> u32 {
        self.rng.gen()
    }

    /// Returns a random number in the `min..max` range.
    ///
    /// Returns `min` when the range is empty.
    pub fn next_f64(&mut self, min: f64, max: f64) -> f64 {
        if min < max {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }

    /// Returns a random number in the `min..max` range.
    ///
    /// Returns `min` when the range is empty.
    pub fn next_i32(&mut self, min: i32, max: i32) -> i32 {
        if min < max {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }

    /// Returns a random color with alpha of at least `0x55`.
    pub fn next_rgba32(&mut self) -> Rgba32 {
        Rgba32(self.next_u32() | 0x5500_0000)
    }

    /// Returns a random point inside `bounds`.
    pub fn next_point(&mut self, bounds: SizeI) -> Point {
        let bounds = bounds.to_size();
        let x = self.next_f64(0.0, bounds.w);
        let y = self.next_f64(0.0, bounds.h);
        Point::new(x, y)
    }

    /// Returns a random `w`x`h` rectangle with integer position inside `bounds`.
    pub fn next_rect_i(&mut self, bounds: SizeI, w: i32, h: i32) -> RectI {
        let x = self.next_i32(0, bounds.w - w);
        let y = self.next_i32(0, bounds.h - h);
        RectI::new(x, y, w, h)
    }

    /// Returns a random `w`x`h` rectangle inside `bounds`.
    pub fn next_rect(&mut self, bounds: Size, w: f64, h: f64) -> Rect {
        let x = self.next_f64(0.0, bounds.w - w);
        let y = self.next_f64(0.0, bounds.h - h);
        Rect::new(x, y, w, h)
    }
}

/// Driver-owned generators used by drawing hooks.
#[derive(Clone, Debug)]
pub struct BenchRandoms {
    /// Coordinates.
    pub coord: BenchRandom,
    /// Colors.
    pub color: BenchRandom,
    /// Auxiliary scalars, like corner radii.
    pub extra: BenchRandom,
}

impl Default for BenchRandoms {
    fn default() -> Self {
        BenchRandoms::new(0x19AE_0DDA_E3FA_7391)
    }
}

impl BenchRandoms {
    /// Creates generators derived from a single seed.
    ///
    /// Each generator gets its own seed, so sequences are independent.
    pub fn new(seed: u64) -> Self {
        BenchRandoms {
            coord: BenchRandom::new(seed),
            color: BenchRandom::new(seed ^ 0x94BA_2B40_8B65_7C11),
            extra: BenchRandom::new(seed ^ 0x3B7A_5F2E_19D8_C6A3),
        }
    }

    /// Rewinds all generators.
    pub fn reset(&mut self) {
        self.coord.reset();
        self.color.reset();
        self.extra.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_replays_sequence() {
        let mut rnd = BenchRandom::new(42);
        let first: Vec<u32> = (0..16).map(|_| rnd.next_u32()).collect();
        rnd.reset();
        let second: Vec<u32> = (0..16).map(|_| rnd.next_u32()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn generators_are_independent() {
        let mut rnds = BenchRandoms::default();
        let a = rnds.coord.next_u32();
        let b = rnds.color.next_u32();
        let c = rnds.extra.next_u32();
        assert!(a != b || b != c);
    }

    #[test]
    fn empty_ranges() {
        let mut rnd = BenchRandom::new(1);
        assert_eq!(rnd.next_f64(5.0, 5.0), 5.0);
        assert_eq!(rnd.next_f64(5.0, 1.0), 5.0);
        assert_eq!(rnd.next_i32(3, 3), 3);
        assert_eq!(rnd.next_rect_i(SizeI::new(8, 8), 16, 16), RectI::new(0, 0, 16, 16));
    }

    #[test]
    fn rects_stay_inside_bounds() {
        let mut rnd = BenchRandom::new(7);
        let bounds = SizeI::new(100, 50);
        for _ in 0..1000 {
            let r = rnd.next_rect_i(bounds, 10, 10);
            assert!(r.x >= 0 && r.x + r.w <= bounds.w);
            assert!(r.y >= 0 && r.y + r.h <= bounds.h);

            let r = rnd.next_rect(bounds.to_size(), 10.5, 10.5);
            assert!(r.x >= 0.0 && r.x + r.w <= 100.0);
            assert!(r.y >= 0.0 && r.y + r.h <= 50.0);
        }
    }

    #[test]
    fn colors_are_never_too_transparent() {
        let mut rnd = BenchRandom::new(9);
        for _ in 0..1000 {
            assert!(rnd.next_rgba32().a() >= 0x55);
        }
    }

    #[test]
    fn premultiply() {
        assert_eq!(Rgba32(0xFF10_2030).premultiplied(), 0xFF10_2030);
        assert_eq!(Rgba32(0x00FF_FFFF).premultiplied(), 0);
        assert_eq!(Rgba32(0x80FF_0000).premultiplied(), 0x8080_0000);
    }
}
