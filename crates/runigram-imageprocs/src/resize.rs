/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Resize an image to new dimensions
use runigram_core::errors::GridErrors;
use runigram_core::grid::ImageGrid;

use crate::traits::OperationsTrait;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ResizeMethod {
    /// Copy the nearest source pixel, no interpolation.
    ///
    /// Downsampling drops rows and columns, upsampling
    /// duplicates them.
    NearestNeighbor
}

/// Resize an image to a new width and height
pub struct Resize {
    new_width:  usize,
    new_height: usize,
    method:     ResizeMethod
}

impl Resize {
    /// Create a new resize operation
    ///
    /// # Arguments
    /// - new_width: The new image width
    /// - new_height: The new image height.
    /// - method: The resize method to use
    #[must_use]
    pub fn new(new_width: usize, new_height: usize, method: ResizeMethod) -> Resize {
        Resize {
            new_width,
            new_height,
            method
        }
    }
}

impl OperationsTrait for Resize {
    fn name(&self) -> &'static str {
        "Resize"
    }

    fn execute_impl(&self, image: &ImageGrid) -> Result<ImageGrid, GridErrors> {
        match self.method {
            ResizeMethod::NearestNeighbor => scaled(image, self.new_width, self.new_height)
        }
    }
}

/// Map an output coordinate back to the input coordinate it copies from
///
/// This is `floor(position * (in_size / out_size))` with the ratio computed
/// in floating point first, the multiplication order matters for which
/// source index gets picked.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn source_index(position: usize, scale: f64) -> usize {
    (position as f64 * scale) as usize
}

/// Resize `image` to exactly `new_width` columns and `new_height` rows
/// using nearest neighbor sampling.
///
/// For output position `(i, j)` the pixel is copied from
/// `(floor(i * rows / new_height), floor(j * cols / new_width))`.
///
/// # Errors
/// [`GridErrors::ZeroDimensions`] if `new_width` or `new_height` is zero
#[allow(clippy::cast_precision_loss)]
pub fn scaled(image: &ImageGrid, new_width: usize, new_height: usize) -> Result<ImageGrid, GridErrors> {
    if new_width == 0 || new_height == 0 {
        return Err(GridErrors::ZeroDimensions(new_width, new_height));
    }
    let h_scale = image.rows() as f64 / new_height as f64;
    let w_scale = image.cols() as f64 / new_width as f64;

    // resolve columns once, every output row uses the same mapping
    let source_cols: Vec<usize> = (0..new_width)
        .map(|j| source_index(j, w_scale))
        .collect();

    ImageGrid::from_fn(new_width, new_height, |i, j| {
        image.pixel(source_index(i, h_scale), source_cols[j])
    })
}
