/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Alpha blend two pixels or two images
//!
//! Each channel of the result is `alpha * v1 + (1 - alpha) * v2`
//! truncated toward zero.
//!
//! Alpha is not validated, values outside `0.0..=1.0` extrapolate and can
//! produce channels outside `0..=255`. Nothing is clamped here, run
//! [`Clamp`](crate::clamp::Clamp) afterwards if that is needed.
use std::borrow::Cow;

use runigram_core::errors::GridErrors;
use runigram_core::grid::ImageGrid;
use runigram_core::log::debug;
use runigram_core::pixel::Pixel;

use crate::resize::scaled;
use crate::traits::OperationsTrait;

/// Create a blend image filter which
/// can blend two images based on a configurable alpha
///
/// The image passed to [`execute`](OperationsTrait::execute) is the first
/// operand and decides the output dimensions, the image stored in the
/// filter is resized to match it when they differ.
pub struct Blend<'src> {
    image: &'src ImageGrid,
    alpha: f64
}

impl<'src> Blend<'src> {
    /// Create a new blend filter
    ///
    /// # Arguments
    /// - image: The second operand, weighted by `1 - alpha`
    /// - alpha: Weight of the image being executed on
    #[must_use]
    pub fn new(image: &'src ImageGrid, alpha: f64) -> Blend<'src> {
        Blend { image, alpha }
    }
}

impl OperationsTrait for Blend<'_> {
    fn name(&self) -> &'static str {
        "Blend"
    }

    fn execute_impl(&self, image: &ImageGrid) -> Result<ImageGrid, GridErrors> {
        blend_grids(image, self.image, self.alpha)
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn blend_channel(v1: i32, v2: i32, alpha: f64) -> i32 {
    let (v1, v2) = (f64::from(v1), f64::from(v2));
    // same as alpha * v1 + (1 - alpha) * v2, but exact when v1 == v2
    (v2 + alpha * (v1 - v2)) as i32
}

/// Blend two pixels, each channel is `alpha * c1 + (1 - alpha) * c2`
/// truncated toward zero.
///
/// `alpha = 1.0` returns `c1`, `alpha = 0.0` returns `c2`.
#[must_use]
pub fn blend_pixels(c1: Pixel, c2: Pixel, alpha: f64) -> Pixel {
    Pixel::new(
        blend_channel(c1.r(), c2.r(), alpha),
        blend_channel(c1.g(), c2.g(), alpha),
        blend_channel(c1.b(), c2.b(), alpha)
    )
}

/// Return `image2` resized to the dimensions of `image1`, borrowing it
/// when they already match
///
/// # Errors
/// Not for well formed grids, the resize target comes from `image1`
pub fn matched_to<'a>(image1: &ImageGrid, image2: &'a ImageGrid) -> Result<Cow<'a, ImageGrid>, GridErrors> {
    if image1.same_dimensions(image2) {
        return Ok(Cow::Borrowed(image2));
    }
    debug!(
        "Resizing {}x{} image to {}x{} before blending",
        image2.cols(),
        image2.rows(),
        image1.cols(),
        image1.rows()
    );
    Ok(Cow::Owned(scaled(image2, image1.cols(), image1.rows())?))
}

/// Blend two images pixel by pixel with [`blend_pixels`]
///
/// `image1` decides the output dimensions, if `image2` differs it is first
/// resized with nearest neighbor [`scaled`]. The caller's `image2` is left
/// untouched.
///
/// # Errors
/// [`GridErrors::DimensionsMisMatch`] if the operands still differ after resizing
pub fn blend_grids(image1: &ImageGrid, image2: &ImageGrid, alpha: f64) -> Result<ImageGrid, GridErrors> {
    let image2 = matched_to(image1, image2)?;

    blend_same_size(image1, &image2, alpha)
}

fn blend_same_size(image1: &ImageGrid, image2: &ImageGrid, alpha: f64) -> Result<ImageGrid, GridErrors> {
    if !image1.same_dimensions(image2) {
        return Err(GridErrors::DimensionsMisMatch(
            image1.pixels().len(),
            image2.pixels().len()
        ));
    }
    Ok(blend_matched(image1, image2, alpha))
}

/// Blend two images, `image2` must be at least as large as `image1`
/// in both directions
pub(crate) fn blend_matched(image1: &ImageGrid, image2: &ImageGrid, alpha: f64) -> ImageGrid {
    image1.remap(|row, col| blend_pixels(image1.pixel(row, col), image2.pixel(row, col), alpha))
}
