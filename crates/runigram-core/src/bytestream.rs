/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple in-memory byte reader
//!
//! Reads past the end of the stream return zero instead of panicking,
//! callers are expected to check [`ZByteReader::eof`] before reading.

/// A cursor over an in-memory byte slice
pub struct ZByteReader<'a> {
    stream:   &'a [u8],
    position: usize
}

impl<'a> ZByteReader<'a> {
    /// Create a new reader positioned at the start of `stream`
    #[must_use]
    pub const fn new(stream: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream,
            position: 0
        }
    }

    /// Returns true if there are no more bytes to read
    #[inline]
    #[must_use]
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }

    /// Number of bytes left in the stream
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }

    #[inline]
    #[must_use]
    pub const fn get_position(&self) -> usize {
        self.position
    }

    /// Read a single byte, returning 0 if the stream is exhausted
    #[inline]
    pub fn get_u8(&mut self) -> u8 {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }

    /// Look at the next byte without consuming it
    #[inline]
    #[must_use]
    pub fn peek_u8(&self) -> Option<u8> {
        self.stream.get(self.position).copied()
    }

    /// Move the position forward by `num` bytes
    #[inline]
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num).min(self.stream.len());
    }

    /// Return bytes in `start..end` without moving the position
    #[must_use]
    pub fn get_slice(&self, start: usize, end: usize) -> Option<&'a [u8]> {
        self.stream.get(start..end)
    }
}
