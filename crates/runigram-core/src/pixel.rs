/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single RGB pixel
use core::fmt::{Display, Formatter};

/// A three channel color value.
///
/// Channels are conceptually in `0..=255` but this is not enforced,
/// blending with an alpha outside `0.0..=1.0` or decoding an image
/// whose samples exceed the max value will happily produce values
/// outside that range. Use [`Pixel::clamped`] when an in-range value
/// is required.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Pixel {
    r: i32,
    g: i32,
    b: i32
}

impl Pixel {
    /// Create a new pixel from its red, green and blue channels
    #[must_use]
    pub const fn new(r: i32, g: i32, b: i32) -> Pixel {
        Pixel { r, g, b }
    }

    /// Create a pixel whose three channels are all `value`
    #[must_use]
    pub const fn gray(value: i32) -> Pixel {
        Pixel::new(value, value, value)
    }

    #[must_use]
    pub const fn r(&self) -> i32 {
        self.r
    }

    #[must_use]
    pub const fn g(&self) -> i32 {
        self.g
    }

    #[must_use]
    pub const fn b(&self) -> i32 {
        self.b
    }

    /// Return the channels in `[r, g, b]` order
    #[must_use]
    pub const fn channels(&self) -> [i32; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns true if all three channels hold the same value
    #[must_use]
    pub const fn is_gray(&self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Return a copy of this pixel with every channel clamped to `0..=255`
    #[must_use]
    pub fn clamped(&self) -> Pixel {
        Pixel::new(
            self.r.clamp(0, 255),
            self.g.clamp(0, 255),
            self.b.clamp(0, 255)
        )
    }
}

impl From<[i32; 3]> for Pixel {
    fn from([r, g, b]: [i32; 3]) -> Self {
        Pixel::new(r, g, b)
    }
}

impl From<(i32, i32, i32)> for Pixel {
    fn from((r, g, b): (i32, i32, i32)) -> Self {
        Pixel::new(r, g, b)
    }
}

impl Display for Pixel {
    /// Print the pixel as `(rrr,ggg,bbb)`, each channel right aligned
    /// to three characters
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "({:>3},{:>3},{:>3})", self.r, self.g, self.b)
    }
}
