/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert an RGB image to grayscale
use runigram_core::errors::GridErrors;
use runigram_core::grid::ImageGrid;
use runigram_core::pixel::Pixel;

use crate::traits::OperationsTrait;

/// Convert RGB data to grayscale
///
/// Every output pixel carries the luminance of the input
/// pixel in all three channels.
#[derive(Default, Copy, Clone)]
pub struct RgbToGrayScale;

impl RgbToGrayScale {
    #[must_use]
    pub fn new() -> RgbToGrayScale {
        RgbToGrayScale
    }
}

impl OperationsTrait for RgbToGrayScale {
    fn name(&self) -> &'static str {
        "RGB to Grayscale"
    }

    fn execute_impl(&self, image: &ImageGrid) -> Result<ImageGrid, GridErrors> {
        Ok(gray_scaled(image))
    }
}

/// Luminance weights in thousandths, they sum to exactly 1000
const WEIGHT_R: i64 = 299;
const WEIGHT_G: i64 = 587;
const WEIGHT_B: i64 = 114;

/// Luminance of a pixel as a gray pixel
///
/// `lum = 0.299 * r + 0.587 * g + 0.114 * b` truncated toward zero.
///
/// The sum is done exactly in fixed point, so a gray pixel maps to
/// itself. In `f64` the weights add up to slightly less than one and
/// e.g. `(1, 1, 1)` would come out as `0`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn luminance(pixel: Pixel) -> Pixel {
    let weighted = WEIGHT_R * i64::from(pixel.r())
        + WEIGHT_G * i64::from(pixel.g())
        + WEIGHT_B * i64::from(pixel.b());

    // integer division truncates toward zero, and |weighted / 1000| <= i32::MAX
    let lum = (weighted / 1000) as i32;

    Pixel::gray(lum)
}

/// Apply [`luminance`] to every pixel of `image`
#[must_use]
pub fn gray_scaled(image: &ImageGrid) -> ImageGrid {
    image.map(|pixel| luminance(*pixel))
}
