/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all runigram crates
//!
//! It currently contains
//!
//! - The [`Pixel`](pixel::Pixel) value type and the [`ImageGrid`](grid::ImageGrid)
//!   it is stored in
//! - Errors raised when a grid precondition is violated
//! - Decoder options
//! - A byte reader used by the decoders
//! - A logging shim
//!
//! # Features
//!  - `log`: Forward the logging shim to the `log` crate, otherwise
//!     all logging compiles to nothing.
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(clippy::module_name_repetitions, clippy::missing_panics_doc)]

pub mod bytestream;
pub mod errors;
pub mod grid;
pub mod log;
pub mod options;
pub mod pixel;
