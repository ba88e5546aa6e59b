/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use runigram_core::options::DecoderOptions;
use runigram_ppm::read_file;

use crate::{ppm_path, read_manifest, DecodeEntry};

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_ppm() {
    let entries: Vec<DecodeEntry> = read_manifest("ppm.json");

    let default_path = ppm_path();
    let mut error = false;

    for entry in &entries {
        let file_name = default_path.join(&entry.name);

        let result = read_file(&file_name, DecoderOptions::default());

        match (entry.error, result) {
            (true, Ok(_)) => {
                eprintln!("Expected {:?} to fail decoding but it succeeded", file_name);
                error = true;
            }
            (false, Err(err)) => {
                eprintln!("Could not decode {:?}: {:?}", file_name, err);
                error = true;
            }
            (false, Ok(grid)) => {
                let pixels = grid.pixels();
                let first = pixels.first().map(|p| p.channels());
                let last = pixels.last().map(|p| p.channels());

                if Some(grid.cols()) != entry.width
                    || Some(grid.rows()) != entry.height
                    || first != entry.first
                    || last != entry.last
                {
                    eprintln!(
                        "Mismatch for file {:?}\nFound {}x{} first {:?} last {:?}\nConfig:{:#?}",
                        file_name,
                        grid.cols(),
                        grid.rows(),
                        first,
                        last,
                        entry
                    );
                    error = true;
                }
            }
            (true, Err(_)) => {}
        }
    }
    if error {
        panic!("Fatal error occurred");
    }
}

#[test]
fn test_missing_file() {
    let result = read_file(
        ppm_path().join("does-not-exist.ppm"),
        DecoderOptions::default()
    );

    assert!(matches!(result, Err(runigram_ppm::PPMDecodeErrors::IoError(_))));
}
