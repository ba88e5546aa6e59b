/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub(crate) mod help_strings;

use clap::builder::PossibleValue;
use clap::{value_parser, Arg, ArgAction, Command, ValueEnum};
use runigram_imageprocs::flip::FlipDirection;

use crate::cmd_args::help_strings::{BLEND_HELP, MORPH_HELP, SCALE_HELP};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum FlipOptions {
    Horizontal,
    Vertical
}

impl ValueEnum for FlipOptions {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Horizontal, Self::Vertical]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Horizontal => PossibleValue::new("horizontal").alias("h"),
            Self::Vertical => PossibleValue::new("vertical").alias("v")
        })
    }
}

impl From<FlipOptions> for FlipDirection {
    fn from(value: FlipOptions) -> Self {
        match value {
            FlipOptions::Horizontal => FlipDirection::Horizontal,
            FlipOptions::Vertical => FlipDirection::Vertical
        }
    }
}

fn print_cmd() -> Command {
    Command::new("print").about("Decode the image and print its pixels")
}

fn flip_cmd() -> Command {
    Command::new("flip")
        .about("Flip the image around its horizontal or vertical axis")
        .arg(Arg::new("direction")
            .long("direction")
            .short('d')
            .help("Axis to reflect pixels around")
            .default_value("horizontal")
            .value_parser(value_parser!(FlipOptions)))
}

fn grayscale_cmd() -> Command {
    Command::new("grayscale").about("Convert the image to grayscale using its luminance")
}

fn scale_cmd() -> Command {
    Command::new("scale")
        .about("Resize the image using nearest neighbor sampling")
        .long_about(SCALE_HELP)
        .arg(Arg::new("width")
            .long("width")
            .help("Width of the new image")
            .required(true)
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("height")
            .long("height")
            .help("Height of the new image")
            .required(true)
            .value_parser(value_parser!(usize)))
}

fn blend_cmd() -> Command {
    Command::new("blend")
        .about("Blend the image with a second image")
        .long_about(BLEND_HELP)
        .arg(Arg::new("with")
            .long("with")
            .help("Second image to blend with")
            .required(true))
        .arg(Arg::new("alpha")
            .long("alpha")
            .help("Weight of the input image")
            .default_value("0.5")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f64)))
}

fn morph_cmd() -> Command {
    Command::new("morph")
        .about("Morph the image into a target image, printing every frame")
        .long_about(MORPH_HELP)
        .arg(Arg::new("target")
            .long("target")
            .help("Image to morph into")
            .required(true))
        .arg(Arg::new("steps")
            .long("steps")
            .help("Number of steps, the morph shows steps + 1 frames")
            .default_value("10")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("delay")
            .long("delay")
            .help("Pause after each frame in milliseconds")
            .default_value("500")
            .value_parser(value_parser!(u64)))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("runigram")
        .about("Decode plain text PPM images and run simple transforms on them")
        .subcommand_required(true)
        .subcommand_precedence_over_arg(true)
        .subcommand(print_cmd())
        .subcommand(flip_cmd())
        .subcommand(grayscale_cmd())
        .subcommand(scale_cmd())
        .subcommand(blend_cmd())
        .subcommand(morph_cmd())
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read data from")
            .long("input")
            .required(true))
        .arg(Arg::new("clamp")
            .long("clamp")
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Clamp channels to 0..=255 before printing"))
        .arg(Arg::new("debug")
            .long("debug")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum width of images the decoder accepts")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum height of images the decoder accepts")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("strict")
            .long("strict")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Require a P3 marker and samples within the max value"))
}
