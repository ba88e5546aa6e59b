/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Clamp channels into the displayable range
//!
//! None of the other operations clamp, blending with an out of range alpha
//! or decoding an image with samples above its max value keeps the raw
//! values. This is the opt-in step that brings them back into `0..=255`.
use runigram_core::errors::GridErrors;
use runigram_core::grid::ImageGrid;

use crate::traits::OperationsTrait;

#[derive(Default, Copy, Clone)]
pub struct Clamp;

impl Clamp {
    #[must_use]
    pub fn new() -> Clamp {
        Clamp
    }
}

impl OperationsTrait for Clamp {
    fn name(&self) -> &'static str {
        "Clamp"
    }

    fn execute_impl(&self, image: &ImageGrid) -> Result<ImageGrid, GridErrors> {
        Ok(clamp_channels(image))
    }
}

/// Clamp every channel of every pixel to `0..=255`
#[must_use]
pub fn clamp_channels(image: &ImageGrid) -> ImageGrid {
    image.map(|pixel| pixel.clamped())
}
