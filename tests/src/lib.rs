/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use runigram_core::grid::ImageGrid;
use runigram_core::options::DecoderOptions;
use runigram_ppm::PPMDecoder;
use serde::de::DeserializeOwned;
use serde::Deserialize;

mod ppm;
mod transforms;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonFlipDirection {
    Horizontal,
    Vertical
}

/// An operation to run on a sample image, as stored in `transforms.json`
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum JsonOperation {
    Flip { direction: JsonFlipDirection },
    Grayscale,
    Scale { width: usize, height: usize },
    Blend { other: String, alpha: f64 },
    /// Blend followed by a clamp to `0..=255`
    BlendClamped { other: String, alpha: f64 },
    /// Frame `frame` of a morph into `target` over `steps` steps
    Morph {
        target: String,
        steps:  usize,
        frame:  usize
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct DecodeEntry {
    pub name:   String,
    pub width:  Option<usize>,
    pub height: Option<usize>,
    pub first:  Option<[i32; 3]>,
    pub last:   Option<[i32; 3]>,
    pub error:  bool
}

#[derive(Clone, Debug, Deserialize)]
pub struct TransformEntry {
    pub name:      String,
    pub operation: JsonOperation,
    pub expected:  String
}

pub fn sample_path() -> PathBuf {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"));
    // get parent path
    path.parent().unwrap().to_owned()
}

pub fn ppm_path() -> PathBuf {
    sample_path().join("test-images/ppm")
}

/// Read a json manifest from this crate's `tests` directory
fn read_manifest<T: DeserializeOwned>(name: &str) -> Vec<T> {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join(name);

    let json_file = read(file).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

fn decode_sample(path: &Path) -> ImageGrid {
    let contents = read(path).unwrap();

    PPMDecoder::new_with_options(DecoderOptions::default(), &contents)
        .decode()
        .unwrap()
}
