/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! Options shared by the decoders. Fields are public to avoid the
//! getter and setter boilerplate, the `set_*` methods are there for
//! builder style construction.

/// Decoder options
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    pub max_width:   usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    pub max_height:  usize,
    /// Treat inputs that are merely suspicious as errors
    ///
    /// When false the magic token is only checked for presence and
    /// channel values are stored as they appear in the file.
    ///
    /// When true the magic token must be `P3` and every channel must
    /// lie between zero and the declared max value.
    ///
    /// - Default value: false
    pub strict_mode: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions {
            max_width:   1 << 14,
            max_height:  1 << 14,
            strict_mode: false
        }
    }
}

impl DecoderOptions {
    /// Set the maximum width an image may have
    #[must_use]
    pub const fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set the maximum height an image may have
    #[must_use]
    pub const fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should be strict about its input
    #[must_use]
    pub const fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }

    #[must_use]
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    #[must_use]
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    #[must_use]
    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }
}
