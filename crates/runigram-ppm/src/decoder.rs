/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use runigram_core::bytestream::ZByteReader;
use runigram_core::errors::GridErrors;
use runigram_core::grid::ImageGrid;
use runigram_core::log::{info, trace};
use runigram_core::options::DecoderOptions;
use runigram_core::pixel::Pixel;

/// The only magic token accepted in strict mode
const PLAIN_PPM_MAGIC: &[u8] = b"P3";

/// An instance of a plain text PPM decoder
///
/// The decoder reads the header and then `width * height` rgb triples
/// in row-major order.
pub struct PPMDecoder<'a> {
    width:           usize,
    height:          usize,
    max_value:       i32,
    decoded_headers: bool,
    reader:          ZByteReader<'a>,
    options:         DecoderOptions
}

/// Errors raised when the input is not a well formed image
pub enum PPMDecodeErrors {
    Generic(String),
    InvalidHeader(String),
    /// A token that should have been an integer was not
    InvalidInteger(String),
    /// The stream ended while reading the named header field
    UnexpectedEof(&'static str),
    /// The stream ended in pixel data
    ///
    /// (expected samples, samples read)
    NotEnoughData(usize, usize),
    /// (maximum allowed, found)
    LargeDimensions(usize, usize),
    IoError(std::io::Error),
    GridError(GridErrors)
}

impl Debug for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generic(val) => {
                writeln!(f, "{val}")
            }
            Self::InvalidHeader(val) => {
                writeln!(f, "Invalid header, reason: {val}")
            }
            Self::InvalidInteger(val) => {
                writeln!(f, "Expected an integer but found `{val}`")
            }
            Self::UnexpectedEof(field) => {
                writeln!(f, "Stream ended before the {field} could be read")
            }
            Self::NotEnoughData(expected, found) => {
                writeln!(
                    f,
                    "Not enough pixel data, expected {expected} samples but found {found}"
                )
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::IoError(err) => {
                writeln!(f, "I/O error: {err}")
            }
            Self::GridError(err) => {
                writeln!(f, "{err:?}")
            }
        }
    }
}

impl Display for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMDecodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            Self::GridError(err) => Some(err),
            _ => None
        }
    }
}

impl From<std::io::Error> for PPMDecodeErrors {
    fn from(value: std::io::Error) -> Self {
        PPMDecodeErrors::IoError(value)
    }
}

impl From<GridErrors> for PPMDecodeErrors {
    fn from(value: GridErrors) -> Self {
        PPMDecodeErrors::GridError(value)
    }
}

impl<'a> PPMDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data: PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use runigram_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    #[must_use]
    pub fn new(data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: PPM encoded data.
    /// # Example
    /// ```
    /// use runigram_core::options::DecoderOptions;
    /// use runigram_ppm::PPMDecoder;
    ///
    /// let options = DecoderOptions::default().set_strict_mode(true);
    /// let mut decoder = PPMDecoder::new_with_options(options, b"P6 1 1 255 0 0 0");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    #[must_use]
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder {
            width: 0,
            height: 0,
            max_value: 0,
            decoded_headers: false,
            reader: ZByteReader::new(data),
            options
        }
    }

    /// Read PPM headers and store them in internal state
    ///
    /// # Errors
    /// If the header is missing, truncated or holds invalid values
    pub fn read_headers(&mut self) -> Result<(), PPMDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        skip_spaces(&mut self.reader);

        let magic = get_bytes_until_whitespace(&mut self.reader);

        if magic.is_empty() {
            return Err(PPMDecodeErrors::InvalidHeader(
                "missing format marker".to_string()
            ));
        }
        if self.options.get_strict_mode() && magic != PLAIN_PPM_MAGIC {
            let msg = format!(
                "Expected format marker `P3` but found `{}`",
                String::from_utf8_lossy(magic)
            );
            return Err(PPMDecodeErrors::InvalidHeader(msg));
        }
        trace!("Format marker: {}", String::from_utf8_lossy(magic));

        self.width = self.read_dimension("width", self.options.get_max_width())?;
        self.height = self.read_dimension("height", self.options.get_max_height())?;

        info!("Width: {}, height: {}", self.width, self.height);

        // read but not applied, samples are kept as they are in the file
        self.max_value = self.read_integer("max value")?;

        info!("Max value: {}", self.max_value);

        self.decoded_headers = true;

        Ok(())
    }

    /// Return image dimensions as `(width, height)` or none if headers
    /// aren't decoded
    #[must_use]
    pub const fn get_dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Return the declared max value or none if headers aren't decoded
    #[must_use]
    pub const fn get_max_value(&self) -> Option<i32> {
        if self.decoded_headers {
            Some(self.max_value)
        } else {
            None
        }
    }

    /// Decode a plain text ppm image into a grid
    ///
    /// # Errors
    /// - The header is malformed
    /// - The stream ends before `width * height` triples are read
    /// - A sample is not an integer
    /// - In strict mode, a sample lies outside `0..=max value`
    pub fn decode(&mut self) -> Result<ImageGrid, PPMDecodeErrors> {
        self.read_headers()?;

        let num_pixels = self.width.saturating_mul(self.height);
        let expected_samples = num_pixels.saturating_mul(3);
        // a pixel takes at least six bytes of input
        let mut pixels = Vec::with_capacity(num_pixels.min(self.reader.remaining() / 6 + 1));
        let mut samples_read = 0;

        for _ in 0..num_pixels {
            let mut channels = [0_i32; 3];

            for channel in &mut channels {
                skip_spaces(&mut self.reader);

                if self.reader.eof() {
                    return Err(PPMDecodeErrors::NotEnoughData(
                        expected_samples,
                        samples_read
                    ));
                }
                *channel = self.parse_token()?;

                if self.options.get_strict_mode() && !(0..=self.max_value).contains(&*channel) {
                    let msg = format!(
                        "Sample {} at position {samples_read} is outside 0..={}",
                        *channel, self.max_value
                    );
                    return Err(PPMDecodeErrors::Generic(msg));
                }
                samples_read += 1;
            }
            pixels.push(Pixel::from(channels));
        }
        trace!("Read {} samples", samples_read);

        Ok(ImageGrid::new(self.width, self.height, pixels)?)
    }

    fn read_dimension(&mut self, field: &'static str, max: usize) -> Result<usize, PPMDecodeErrors> {
        let value: i64 = self.read_integer(field)?;

        let value = usize::try_from(value)
            .ok()
            .filter(|x| *x > 0)
            .ok_or_else(|| {
                PPMDecodeErrors::InvalidHeader(format!("{field} must be positive, found {value}"))
            })?;

        if value > max {
            return Err(PPMDecodeErrors::LargeDimensions(max, value));
        }
        Ok(value)
    }

    fn read_integer<T: FromStr>(&mut self, field: &'static str) -> Result<T, PPMDecodeErrors> {
        skip_spaces(&mut self.reader);

        if self.reader.eof() {
            return Err(PPMDecodeErrors::UnexpectedEof(field));
        }
        self.parse_token()
    }

    fn parse_token<T: FromStr>(&mut self) -> Result<T, PPMDecodeErrors> {
        let token = get_bytes_until_whitespace(&mut self.reader);

        std::str::from_utf8(token)
            .ok()
            .and_then(|x| x.parse::<T>().ok())
            .ok_or_else(|| {
                PPMDecodeErrors::InvalidInteger(String::from_utf8_lossy(token).into_owned())
            })
    }
}

/// Read and decode the plain text PPM image at `path`
///
/// The file is read fully into memory and closed before decoding starts,
/// on both success and failure.
///
/// # Errors
/// If the file cannot be read or is not a well formed image
pub fn read_file<P: AsRef<Path>>(
    path: P, options: DecoderOptions
) -> Result<ImageGrid, PPMDecodeErrors> {
    let path = path.as_ref();
    info!("Reading {:?}", path);

    let data = {
        let mut reader = BufReader::new(File::open(path)?);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        data
    };
    PPMDecoder::new_with_options(options, &data).decode()
}

/// Skip all whitespace characters and comments
/// until one hits a character that isn't a space or
/// we reach eof
fn skip_spaces(byte_stream: &mut ZByteReader) {
    while let Some(mut byte) = byte_stream.peek_u8() {
        if byte == b'#' {
            // skip the whole comment
            while byte != b'\n' && !byte_stream.eof() {
                byte = byte_stream.get_u8();
            }
        } else if byte.is_ascii_whitespace() {
            byte_stream.skip(1);
        } else {
            break;
        }
    }
}

/// Return a reference to all bytes preceding a whitespace or comment
///
/// The terminating byte is not consumed.
fn get_bytes_until_whitespace<'a>(z: &mut ZByteReader<'a>) -> &'a [u8] {
    let start = z.get_position();

    while let Some(byte) = z.peek_u8() {
        if byte.is_ascii_whitespace() || byte == b'#' {
            break;
        }
        z.skip(1);
    }
    z.get_slice(start, z.get_position()).unwrap_or_default()
}
