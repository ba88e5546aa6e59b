/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A renderer that writes frames as text
use std::fmt::Write as _;
use std::io::Write;
use std::time::Duration;

use log::{debug, info};
use runigram_core::errors::GridErrors;
use runigram_core::grid::ImageGrid;
use runigram_imageprocs::clamp::clamp_channels;
use runigram_imageprocs::morph::Renderer;

/// Write every frame as rows of `(r,g,b)` triples
///
/// A frame is formatted completely before anything is written, then
/// written and flushed in one go. Frames are separated by an empty line.
pub struct TextRenderer<W: Write> {
    writer:        W,
    canvas:        Option<(usize, usize)>,
    frames:        usize,
    clamp:         bool,
    pause_enabled: bool
}

impl<W: Write> TextRenderer<W> {
    pub fn new(writer: W) -> TextRenderer<W> {
        TextRenderer {
            writer,
            canvas: None,
            frames: 0,
            clamp: false,
            pause_enabled: true
        }
    }

    /// Clamp channels to `0..=255` before writing them
    #[must_use]
    pub fn set_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Whether [`Renderer::pause`] actually sleeps
    #[must_use]
    pub fn set_pause_enabled(mut self, yes: bool) -> Self {
        self.pause_enabled = yes;
        self
    }

    /// Number of frames written so far
    pub const fn frames(&self) -> usize {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn configure_canvas(&mut self, rows: usize, cols: usize) -> Result<(), GridErrors> {
        if rows == 0 || cols == 0 {
            return Err(GridErrors::ZeroDimensions(cols, rows));
        }
        info!("Canvas is {} rows by {} columns", rows, cols);
        self.canvas = Some((rows, cols));
        Ok(())
    }

    fn render_frame(&mut self, grid: &ImageGrid) -> Result<(), GridErrors> {
        if let Some((rows, cols)) = self.canvas {
            if (rows, cols) != (grid.rows(), grid.cols()) {
                return Err(GridErrors::RenderError(format!(
                    "frame is {}x{} but the canvas is {cols}x{rows}",
                    grid.cols(),
                    grid.rows()
                )));
            }
        }
        let mut buffer = String::new();

        if self.frames > 0 {
            buffer.push('\n');
        }
        let result = if self.clamp {
            write!(buffer, "{}", clamp_channels(grid))
        } else {
            write!(buffer, "{grid}")
        };
        result.map_err(|err| GridErrors::RenderError(err.to_string()))?;

        let io_error = |err: std::io::Error| GridErrors::RenderError(err.to_string());

        self.writer.write_all(buffer.as_bytes()).map_err(io_error)?;
        self.writer.flush().map_err(io_error)?;

        self.frames += 1;
        debug!("Rendered frame {}", self.frames);

        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        if self.pause_enabled {
            std::thread::sleep(duration);
        }
    }
}
