/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use runigram_core::grid::ImageGrid;
use runigram_core::pixel::Pixel;
use runigram_imageprocs::blend::blend_grids;
use runigram_imageprocs::flip::{Flip, FlipDirection};
use runigram_imageprocs::grayscale::RgbToGrayScale;
use runigram_imageprocs::morph::morph_frames;
use runigram_imageprocs::resize::{Resize, ResizeMethod};
use runigram_imageprocs::traits::OperationsTrait;

const WIDTH: usize = 800;
const HEIGHT: usize = 600;

fn sample_image() -> ImageGrid {
    ImageGrid::from_fn(WIDTH, HEIGHT, |row, col| {
        Pixel::new((row % 256) as i32, (col % 256) as i32, ((row ^ col) % 256) as i32)
    })
    .unwrap()
}

fn bench_operation(c: &mut Criterion, group_name: &str, operation: &dyn OperationsTrait) {
    let image = sample_image();

    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements((WIDTH * HEIGHT) as u64));

    group.bench_function("runigram", |b| {
        b.iter(|| black_box(operation.execute(&image).unwrap()))
    });
}

fn bench_flip(c: &mut Criterion) {
    bench_operation(c, "imageprocs: flip horizontal", &Flip::new(FlipDirection::Horizontal));
    bench_operation(c, "imageprocs: flip vertical", &Flip::new(FlipDirection::Vertical));
}

fn bench_grayscale(c: &mut Criterion) {
    bench_operation(c, "imageprocs: grayscale", &RgbToGrayScale::new());
}

fn bench_resize(c: &mut Criterion) {
    bench_operation(
        c,
        "imageprocs: resize 800x600 -> 400x300",
        &Resize::new(WIDTH / 2, HEIGHT / 2, ResizeMethod::NearestNeighbor)
    );
    bench_operation(
        c,
        "imageprocs: resize 800x600 -> 1600x1200",
        &Resize::new(WIDTH * 2, HEIGHT * 2, ResizeMethod::NearestNeighbor)
    );
}

fn bench_blend(c: &mut Criterion) {
    let image = sample_image();
    let other = ImageGrid::fill(Pixel::new(20, 40, 60), WIDTH / 3, HEIGHT / 3).unwrap();

    let mut group = c.benchmark_group("imageprocs: blend");
    group.throughput(Throughput::Elements((WIDTH * HEIGHT) as u64));

    group.bench_function("same size", |b| {
        b.iter(|| black_box(blend_grids(&image, &image, 0.4).unwrap()))
    });
    group.bench_function("resized operand", |b| {
        b.iter(|| black_box(blend_grids(&image, &other, 0.4).unwrap()))
    });
}

fn bench_morph(c: &mut Criterion) {
    let image = sample_image();
    let other = ImageGrid::fill(Pixel::new(20, 40, 60), WIDTH / 3, HEIGHT / 3).unwrap();

    let mut group = c.benchmark_group("imageprocs: morph");
    group.throughput(Throughput::Elements((WIDTH * HEIGHT * 11) as u64));

    group.bench_function("10 steps", |b| {
        b.iter(|| {
            for frame in morph_frames(&image, &other, 10).unwrap() {
                black_box(frame);
            }
        })
    });
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(5))
      };
    targets=bench_flip,bench_grayscale,bench_resize,bench_blend,bench_morph);

criterion_main!(benches);
