/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors raised when an operation's preconditions on a grid are not met
use core::fmt::{Debug, Display, Formatter};

/// Precondition violations for grid construction and grid operations
pub enum GridErrors {
    /// A grid or a requested output had a zero width or height
    ///
    /// (width, height)
    ZeroDimensions(usize, usize),
    /// Number of pixels does not match the requested dimensions
    ///
    /// (expected, found)
    DimensionsMisMatch(usize, usize),
    /// A row had a different length from the first row
    JaggedRows {
        row:      usize,
        expected: usize,
        found:    usize
    },
    InvalidArgument(&'static str),
    /// A renderer failed to paint a frame
    RenderError(String)
}

impl Debug for GridErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroDimensions(width, height) => {
                writeln!(
                    f,
                    "Grid dimensions must be non-zero, found width {width} and height {height}"
                )
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} pixels but found {found}"
                )
            }
            Self::JaggedRows {
                row,
                expected,
                found
            } => {
                writeln!(
                    f,
                    "Row {row} has {found} pixels but the first row has {expected}"
                )
            }
            Self::InvalidArgument(reason) => writeln!(f, "Invalid argument: {reason}"),
            Self::RenderError(reason) => writeln!(f, "Could not render frame: {reason}")
        }
    }
}

impl Display for GridErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for GridErrors {}
