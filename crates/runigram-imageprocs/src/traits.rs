/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The trait shared by all image operations
use runigram_core::errors::GridErrors;
use runigram_core::grid::ImageGrid;
use runigram_core::log::trace;

/// An operation that produces a new grid from an existing one
///
/// Operations never modify their input, the result is always a freshly
/// allocated grid.
pub trait OperationsTrait {
    /// Name of the operation, used in logs and error messages
    fn name(&self) -> &'static str;

    /// Run the operation
    ///
    /// # Errors
    /// Operation specific, see the implementor
    fn execute_impl(&self, image: &ImageGrid) -> Result<ImageGrid, GridErrors>;

    /// Run the operation, logging its name and the input dimensions
    ///
    /// This is the method callers should use, implementors should
    /// override [`execute_impl`](OperationsTrait::execute_impl) instead.
    ///
    /// # Errors
    /// Whatever `execute_impl` returns
    fn execute(&self, image: &ImageGrid) -> Result<ImageGrid, GridErrors> {
        let (width, height) = image.dimensions();
        trace!("Running {} on a {}x{} grid", self.name(), width, height);

        let result = self.execute_impl(image)?;

        trace!(
            "{} finished, output is {}x{}",
            self.name(),
            result.cols(),
            result.rows()
        );
        Ok(result)
    }
}
