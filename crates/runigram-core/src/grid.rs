/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A rectangular grid of pixels
//!
//! Pixels are stored row-major in one contiguous buffer, so every row
//! has the same length by construction. Position `(0, 0)` is the top
//! left pixel, rows grow downwards and columns grow to the right.
//!
//! ```text
//!         col 0   col 1   col 2
//! row 0 ┌───────┬───────┬───────┐
//!       │ (0,0) │ (0,1) │ (0,2) │
//! row 1 ├───────┼───────┼───────┤
//!       │ (1,0) │ (1,1) │ (1,2) │
//!       └───────┴───────┴───────┘
//! ```
use core::fmt::{Display, Formatter};

use crate::errors::GridErrors;
use crate::pixel::Pixel;

/// A non-empty, rectangular, row-major grid of [`Pixel`]s
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImageGrid {
    width:  usize,
    height: usize,
    pixels: Vec<Pixel>
}

impl ImageGrid {
    /// Create a grid from row-major pixels
    ///
    /// # Errors
    /// - [`GridErrors::ZeroDimensions`] if width or height is zero
    /// - [`GridErrors::DimensionsMisMatch`] if `pixels.len() != width * height`
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<ImageGrid, GridErrors> {
        if width == 0 || height == 0 {
            return Err(GridErrors::ZeroDimensions(width, height));
        }
        let expected = pixel_count(width, height)?;

        if pixels.len() != expected {
            return Err(GridErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        Ok(ImageGrid {
            width,
            height,
            pixels
        })
    }

    /// Create a grid from a list of rows
    ///
    /// # Errors
    /// - [`GridErrors::ZeroDimensions`] if there are no rows or the first row is empty
    /// - [`GridErrors::JaggedRows`] if any row differs in length from the first
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<ImageGrid, GridErrors> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if width == 0 || height == 0 {
            return Err(GridErrors::ZeroDimensions(width, height));
        }
        let mut pixels = Vec::with_capacity(pixel_count(width, height)?);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridErrors::JaggedRows {
                    row,
                    expected: width,
                    found: values.len()
                });
            }
            pixels.extend(values);
        }
        ImageGrid::new(width, height, pixels)
    }

    /// Create a grid where every pixel is `pixel`
    ///
    /// # Errors
    /// If width or height is zero or `width * height` overflows
    pub fn fill(pixel: Pixel, width: usize, height: usize) -> Result<ImageGrid, GridErrors> {
        if width == 0 || height == 0 {
            return Err(GridErrors::ZeroDimensions(width, height));
        }
        let count = pixel_count(width, height)?;

        ImageGrid::new(width, height, vec![pixel; count])
    }

    /// Create a grid by calling `func(row, col)` for every position, in row-major order
    ///
    /// # Errors
    /// If width or height is zero or `width * height` overflows
    pub fn from_fn<F>(width: usize, height: usize, mut func: F) -> Result<ImageGrid, GridErrors>
    where
        F: FnMut(usize, usize) -> Pixel
    {
        if width == 0 || height == 0 {
            return Err(GridErrors::ZeroDimensions(width, height));
        }
        let mut pixels = Vec::with_capacity(pixel_count(width, height)?);

        for row in 0..height {
            for col in 0..width {
                pixels.push(func(row, col));
            }
        }
        ImageGrid::new(width, height, pixels)
    }

    /// Number of rows, i.e the image height
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.height
    }

    /// Number of columns, i.e the image width
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.width
    }

    /// Return `(width, height)`
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns true if both grids have the same number of rows and columns
    #[must_use]
    pub fn same_dimensions(&self, other: &ImageGrid) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Return the pixel at `(row, col)` or `None` if out of bounds
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.pixels.get(row * self.width + col).copied()
    }

    /// Return the pixel at `(row, col)`
    ///
    /// # Panics
    /// If the position is out of bounds
    #[must_use]
    pub fn pixel(&self, row: usize, col: usize) -> Pixel {
        self.row(row)[col]
    }

    /// Return the pixels of row `row`
    ///
    /// # Panics
    /// If `row >= self.rows()`
    #[must_use]
    pub fn row(&self, row: usize) -> &[Pixel] {
        let start = row * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Iterate over rows from top to bottom
    pub fn rows_iter(&self) -> impl DoubleEndedIterator<Item = &[Pixel]> + ExactSizeIterator {
        self.pixels.chunks_exact(self.width)
    }

    /// All pixels in row-major order
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Create a new grid of the same dimensions whose pixel at `(row, col)`
    /// is `func(row, col)`
    #[must_use]
    pub fn remap<F>(&self, mut func: F) -> ImageGrid
    where
        F: FnMut(usize, usize) -> Pixel
    {
        let mut pixels = Vec::with_capacity(self.pixels.len());

        for row in 0..self.height {
            for col in 0..self.width {
                pixels.push(func(row, col));
            }
        }
        ImageGrid {
            width: self.width,
            height: self.height,
            pixels
        }
    }

    /// Create a new grid of the same dimensions by mapping every pixel through `func`
    #[must_use]
    pub fn map<F>(&self, func: F) -> ImageGrid
    where
        F: FnMut(&Pixel) -> Pixel
    {
        ImageGrid {
            width:  self.width,
            height: self.height,
            pixels: self.pixels.iter().map(func).collect()
        }
    }
}

fn pixel_count(width: usize, height: usize) -> Result<usize, GridErrors> {
    width
        .checked_mul(height)
        .ok_or(GridErrors::InvalidArgument("Grid dimensions overflow"))
}

impl Display for ImageGrid {
    /// Print one line per row, each pixel followed by two spaces
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for row in self.rows_iter() {
            for pixel in row {
                write!(f, "{pixel}  ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
