#![cfg_attr(feature = "benchmarks", feature(test))]
/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for runigram image grids
//!
//! Every routine reads its input grid and returns a new one, nothing is
//! modified in place. Each one is available as a plain function and as an
//! operation implementing [`OperationsTrait`](traits::OperationsTrait).
//!
//! # Example
//! - Flip an image and convert it to grayscale
//! ```
//! use runigram_core::grid::ImageGrid;
//! use runigram_core::pixel::Pixel;
//! use runigram_imageprocs::flip::{Flip, FlipDirection};
//! use runigram_imageprocs::grayscale::RgbToGrayScale;
//! use runigram_imageprocs::traits::OperationsTrait;
//!
//! let image = ImageGrid::fill(Pixel::new(255, 0, 0), 10, 10).unwrap();
//! let flipped = Flip::new(FlipDirection::Horizontal).execute(&image).unwrap();
//! let gray = RgbToGrayScale::new().execute(&flipped).unwrap();
//!
//! assert_eq!(gray.pixel(0, 0), Pixel::gray(76));
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]

pub mod blend;
pub mod clamp;
pub mod flip;
pub mod grayscale;
pub mod morph;
pub mod resize;
pub mod traits;
