/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use runigram_core::errors::GridErrors;
use runigram_ppm::PPMDecodeErrors;

/// Errors that can stop a command line run
pub enum CliErrors {
    DecodeErrors(PPMDecodeErrors),
    GridErrors(GridErrors),
    IoErrors(std::io::Error),
    Generic(String)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeErrors(err) => writeln!(f, "Could not decode image: {err:?}"),
            Self::GridErrors(err) => writeln!(f, "Could not process image: {err:?}"),
            Self::IoErrors(err) => writeln!(f, "I/O error: {err}"),
            Self::Generic(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for CliErrors {}

impl From<PPMDecodeErrors> for CliErrors {
    fn from(value: PPMDecodeErrors) -> Self {
        CliErrors::DecodeErrors(value)
    }
}

impl From<GridErrors> for CliErrors {
    fn from(value: GridErrors) -> Self {
        CliErrors::GridErrors(value)
    }
}

impl From<std::io::Error> for CliErrors {
    fn from(value: std::io::Error) -> Self {
        CliErrors::IoErrors(value)
    }
}
