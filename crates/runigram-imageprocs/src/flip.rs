/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Flip filter: Reflect an image around one of its central axes.
//!
//! Both directions are their own inverse, flipping twice
//! gives back the original pixels.
use runigram_core::errors::GridErrors;
use runigram_core::grid::ImageGrid;

use crate::traits::OperationsTrait;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FlipDirection {
    /// Creates a horizontal mirror image by reflecting the pixels around the central y-axis
    ///```text
    ///old image     new image
    ///┌─────────┐   ┌──────────┐
    ///│a b c d e│   │e d c b a │
    ///│f g h i j│   │j i h g f │
    ///└─────────┘   └──────────┘
    ///```
    Horizontal,

    /// Creates a vertical mirror image by reflecting the pixels around the central x-axis
    ///
    /// ```text
    ///old image     new image
    /// ┌─────────┐   ┌──────────┐
    /// │a b c d e│   │f g h i j │
    /// │f g h i j│   │a b c d e │
    /// └─────────┘   └──────────┘
    /// ```
    Vertical
}

/// Flip an image to a certain direction
pub struct Flip {
    flip_direction: FlipDirection
}

impl Flip {
    /// Create a new flip operation
    #[must_use]
    pub fn new(flip_direction: FlipDirection) -> Flip {
        Self { flip_direction }
    }
}

impl OperationsTrait for Flip {
    fn name(&self) -> &'static str {
        "Flip"
    }

    fn execute_impl(&self, image: &ImageGrid) -> Result<ImageGrid, GridErrors> {
        match self.flip_direction {
            FlipDirection::Horizontal => Ok(flipped_horizontally(image)),
            FlipDirection::Vertical => Ok(flipped_vertically(image))
        }
    }
}

/// Return a copy of `image` where `result[i][j] = image[i][cols - 1 - j]`
#[must_use]
pub fn flipped_horizontally(image: &ImageGrid) -> ImageGrid {
    let last_col = image.cols() - 1;

    image.remap(|row, col| image.pixel(row, last_col - col))
}

/// Return a copy of `image` where `result[i][j] = image[rows - 1 - i][j]`
#[must_use]
pub fn flipped_vertically(image: &ImageGrid) -> ImageGrid {
    let last_row = image.rows() - 1;

    image.remap(|row, col| image.pixel(last_row - row, col))
}


#[cfg(feature = "benchmarks")]
#[cfg(test)]
mod benchmarks {
    extern crate test;

    use runigram_core::grid::ImageGrid;
    use runigram_core::pixel::Pixel;

    #[bench]
    fn flip_horizontal_scalar(b: &mut test::Bencher) {
        use crate::flip::flipped_horizontally;

        let image = ImageGrid::fill(Pixel::gray(128), 800, 800).unwrap();

        b.iter(|| flipped_horizontally(&image));
    }

    #[bench]
    fn flip_vertical_scalar(b: &mut test::Bencher) {
        use crate::flip::flipped_vertically;

        let image = ImageGrid::fill(Pixel::gray(128), 800, 800).unwrap();

        b.iter(|| flipped_vertically(&image));
    }
}
