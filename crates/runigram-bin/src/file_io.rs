/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;

use log::debug;
use runigram_core::grid::ImageGrid;
use runigram_core::options::DecoderOptions;

use crate::errors::CliErrors;

/// Decode the image stored at `file_path`
pub fn read_image<P: AsRef<OsStr> + ?Sized>(
    file_path: &P, options: DecoderOptions
) -> Result<ImageGrid, CliErrors> {
    let file_path = file_path.as_ref();
    debug!("Treating {:?} as a plain text ppm file", file_path);

    let image = runigram_ppm::read_file(file_path, options)?;

    debug!("Decoded {}x{} image", image.cols(), image.rows());
    Ok(image)
}
