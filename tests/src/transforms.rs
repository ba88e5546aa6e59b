/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use runigram_core::grid::ImageGrid;
use runigram_imageprocs::blend::blend_grids;
use runigram_imageprocs::clamp::clamp_channels;
use runigram_imageprocs::flip::{flipped_horizontally, flipped_vertically};
use runigram_imageprocs::grayscale::gray_scaled;
use runigram_imageprocs::morph::morph_frames;
use runigram_imageprocs::resize::scaled;

use crate::{decode_sample, ppm_path, read_manifest, JsonFlipDirection, JsonOperation, TransformEntry};

fn run_operation(image: &ImageGrid, operation: &JsonOperation) -> ImageGrid {
    let load = |name: &str| decode_sample(&ppm_path().join(name));

    match operation {
        JsonOperation::Flip { direction } => match direction {
            JsonFlipDirection::Horizontal => flipped_horizontally(image),
            JsonFlipDirection::Vertical => flipped_vertically(image)
        },
        JsonOperation::Grayscale => gray_scaled(image),
        JsonOperation::Scale { width, height } => scaled(image, *width, *height).unwrap(),
        JsonOperation::Blend { other, alpha } => blend_grids(image, &load(other), *alpha).unwrap(),
        JsonOperation::BlendClamped { other, alpha } => {
            clamp_channels(&blend_grids(image, &load(other), *alpha).unwrap())
        }
        JsonOperation::Morph {
            target,
            steps,
            frame
        } => {
            let target = load(target);
            let frame = morph_frames(image, &target, *steps)
                .unwrap()
                .nth(*frame)
                .unwrap();
            frame
        }
    }
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_transforms() {
    let entries: Vec<TransformEntry> = read_manifest("transforms.json");

    let default_path = ppm_path();
    let mut error = false;

    for entry in &entries {
        let image = decode_sample(&default_path.join(&entry.name));
        let expected = decode_sample(&default_path.join("expected").join(&entry.expected));

        let result = run_operation(&image, &entry.operation);

        if result != expected {
            error = true;
            eprintln!(
                "Output mismatch for {}\nExpected\n{}\nFound\n{}\nConfig:{:#?}",
                entry.name, expected, result, entry
            );
        }
    }
    if error {
        panic!("Fatal error occurred");
    }
}
