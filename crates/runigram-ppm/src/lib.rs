/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A plain text Portable Pixmap decoder
//!
//! This reads the ascii `P3` family of netpbm images into a
//! [`ImageGrid`](runigram_core::grid::ImageGrid).
//!
//! The format is a whitespace separated stream of tokens
//!
//! ```text
//! <magic> <width> <height> <maxval> <r0> <g0> <b0> <r1> <g1> <b1> ...
//! ```
//! with pixel triples in row-major order. `#` starts a comment which runs to
//! the end of the line.
//!
//! The max value is read but not used to rescale samples, and samples are
//! stored as they appear unless [strict mode](runigram_core::options::DecoderOptions::strict_mode)
//! is enabled.
//!
//! # Example
//! ```
//! use runigram_ppm::PPMDecoder;
//!
//! let mut decoder = PPMDecoder::new(b"P3 1 1 255 12 34 56");
//! let grid = decoder.decode().unwrap();
//!
//! assert_eq!(grid.dimensions(), (1, 1));
//! assert_eq!(grid.pixel(0, 0).channels(), [12, 34, 56]);
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(clippy::module_name_repetitions)]

pub use decoder::*;
pub use runigram_core;

mod decoder;
