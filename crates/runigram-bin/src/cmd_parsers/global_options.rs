/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, warn, Level};
use runigram_core::options::DecoderOptions;

use crate::cmd_parsers::get_decoder_options;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub decoder_options: DecoderOptions,
    pub clamp:           bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            decoder_options: DecoderOptions::default(),
            clamp:           false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    cmd_options.decoder_options = get_decoder_options(options);

    if options.value_source("strict") == Some(ValueSource::CommandLine) {
        info!("Decoding in strict mode");
    }
    if options.get_flag("clamp") {
        info!("Clamping channels before output");
        cmd_options.clamp = true;
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        // a logger was already installed, keep using it
        warn!("Could not set up logger: {err}");
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
