/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;
use std::time::Duration;

use clap::ArgMatches;
use log::{debug, info};
use runigram_core::grid::ImageGrid;
use runigram_imageprocs::blend::Blend;
use runigram_imageprocs::flip::Flip;
use runigram_imageprocs::grayscale::RgbToGrayScale;
use runigram_imageprocs::morph::{Morph, Renderer};
use runigram_imageprocs::resize::{Resize, ResizeMethod};
use runigram_imageprocs::traits::OperationsTrait;

use crate::cmd_args::FlipOptions;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CliErrors;
use crate::file_io::read_image;
use crate::renderer::TextRenderer;

fn get_arg<T>(args: &ArgMatches, name: &str) -> Result<T, CliErrors>
where
    T: Clone + Send + Sync + 'static
{
    args.get_one::<T>(name)
        .cloned()
        .ok_or_else(|| CliErrors::Generic(format!("Missing argument --{name}")))
}

/// Print a single image on the renderer
fn show<R: Renderer>(image: &ImageGrid, renderer: &mut R) -> Result<(), CliErrors> {
    renderer.configure_canvas(image.rows(), image.cols())?;
    renderer.render_frame(image)?;
    Ok(())
}

fn run_operation<R: Renderer>(
    operation: &dyn OperationsTrait, image: &ImageGrid, renderer: &mut R
) -> Result<(), CliErrors> {
    debug!("Executing {}", operation.name());

    let result = operation.execute(image)?;

    show(&result, renderer)
}

pub(crate) fn create_and_exec_workflow_from_cmd<W: Write>(
    args: &ArgMatches, cmd_opts: &CmdOptions, out: &mut W
) -> Result<(), CliErrors> {
    info!("Creating workflows from input");

    let in_file = get_arg::<String>(args, "in")?;
    let image = read_image(&in_file, cmd_opts.decoder_options)?;

    let mut renderer = TextRenderer::new(out).set_clamp(cmd_opts.clamp);

    match args.subcommand() {
        Some(("print", _)) => show(&image, &mut renderer),
        Some(("flip", sub)) => {
            let direction = get_arg::<FlipOptions>(sub, "direction")?;

            run_operation(&Flip::new(direction.into()), &image, &mut renderer)
        }
        Some(("grayscale", _)) => run_operation(&RgbToGrayScale::new(), &image, &mut renderer),
        Some(("scale", sub)) => {
            let width = get_arg::<usize>(sub, "width")?;
            let height = get_arg::<usize>(sub, "height")?;

            let resize = Resize::new(width, height, ResizeMethod::NearestNeighbor);

            run_operation(&resize, &image, &mut renderer)
        }
        Some(("blend", sub)) => {
            let other = read_image(&get_arg::<String>(sub, "with")?, cmd_opts.decoder_options)?;
            let alpha = get_arg::<f64>(sub, "alpha")?;

            run_operation(&Blend::new(&other, alpha), &image, &mut renderer)
        }
        Some(("morph", sub)) => {
            let target = read_image(&get_arg::<String>(sub, "target")?, cmd_opts.decoder_options)?;
            let steps = get_arg::<usize>(sub, "steps")?;
            let delay = Duration::from_millis(get_arg::<u64>(sub, "delay")?);

            let frames = Morph::new(steps)
                .set_delay(delay)
                .run(&image, &target, &mut renderer)?;

            info!("Rendered {} frames", frames);
            Ok(())
        }
        Some((name, _)) => Err(CliErrors::Generic(format!("Unknown command {name}"))),
        None => Err(CliErrors::Generic("No command given".to_string()))
    }
}
