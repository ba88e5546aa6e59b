/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Morph one image into another
//!
//! A morph over `n` steps produces `n + 1` frames, frame `k` being
//! the blend of source and target with `alpha = (n - k) / n`. The first
//! frame is the source and the last frame is the target, resized to the
//! source dimensions.
//!
//! Frames can be pulled one at a time through [`morph_frames`], or handed
//! to a [`Renderer`] with a pause between them through [`Morph::run`].
use std::borrow::Cow;
use std::time::Duration;

use runigram_core::errors::GridErrors;
use runigram_core::grid::ImageGrid;
use runigram_core::log::{debug, info};

use crate::blend::{blend_matched, matched_to};

/// Something that can display frames of a morph
///
/// The morph owns no display state, everything about the surface
/// being drawn to belongs to the renderer.
pub trait Renderer {
    /// Prepare a surface of `rows` by `cols` pixels
    ///
    /// # Errors
    /// If the surface cannot be created
    fn configure_canvas(&mut self, rows: usize, cols: usize) -> Result<(), GridErrors>;

    /// Draw every pixel of `grid` and present the result
    ///
    /// Nothing drawn should become visible before the whole frame is done.
    ///
    /// # Errors
    /// If the frame cannot be drawn or presented
    fn render_frame(&mut self, grid: &ImageGrid) -> Result<(), GridErrors>;

    /// Block the calling thread for `duration`
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Iterator over the frames of a morph
///
/// Created by [`morph_frames`] or [`Morph::frames`].
pub struct MorphFrames<'a> {
    source: &'a ImageGrid,
    target: Cow<'a, ImageGrid>,
    steps:  usize,
    total:  usize,
    next:   usize
}

impl MorphFrames<'_> {
    /// Total number of frames, `steps + 1`
    #[must_use]
    pub const fn len_total(&self) -> usize {
        self.total
    }

    /// The target after it was resized to the source's dimensions
    #[must_use]
    pub fn target(&self) -> &ImageGrid {
        &self.target
    }
}

impl Iterator for MorphFrames<'_> {
    type Item = ImageGrid;

    #[allow(clippy::cast_precision_loss)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let alpha = (self.steps - self.next) as f64 / self.steps as f64;
        debug!("Morph frame {}/{}, alpha {}", self.next, self.steps, alpha);

        self.next += 1;

        Some(blend_matched(self.source, &self.target, alpha))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MorphFrames<'_> {}

/// Return the frames of a morph from `source` to `target` in `steps` steps
///
/// `target` is resized to the dimensions of `source` once, here, and
/// not for every frame.
///
/// # Errors
/// - [`GridErrors::InvalidArgument`] if `steps` is zero or `steps + 1`
///   frames cannot be counted
pub fn morph_frames<'a>(
    source: &'a ImageGrid, target: &'a ImageGrid, steps: usize
) -> Result<MorphFrames<'a>, GridErrors> {
    if steps == 0 {
        return Err(GridErrors::InvalidArgument(
            "A morph needs at least one step"
        ));
    }
    let total = steps
        .checked_add(1)
        .ok_or(GridErrors::InvalidArgument("Too many morph steps"))?;
    let target = matched_to(source, target)?;

    Ok(MorphFrames {
        source,
        target,
        steps,
        total,
        next: 0
    })
}

/// Morph `source` into `target` in `steps` steps, showing each frame on
/// `renderer` with the default delay between frames
///
/// # Errors
/// See [`Morph::run`]
pub fn morph<R: Renderer + ?Sized>(
    source: &ImageGrid, target: &ImageGrid, steps: usize, renderer: &mut R
) -> Result<(), GridErrors> {
    Morph::new(steps).run(source, target, renderer).map(|_| ())
}

/// A morph animation
///
/// Once [`run`](Morph::run) starts it goes through every frame,
/// there is no way to stop it halfway apart from a renderer error.
#[derive(Copy, Clone, Debug)]
pub struct Morph {
    steps: usize,
    delay: Duration
}

impl Morph {
    /// Pause between two frames unless changed with [`Morph::set_delay`]
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

    /// Create a new morph with `steps` steps
    #[must_use]
    pub fn new(steps: usize) -> Morph {
        Morph {
            steps,
            delay: Morph::DEFAULT_DELAY
        }
    }

    /// Set the pause after each frame
    #[must_use]
    pub fn set_delay(mut self, delay: Duration) -> Morph {
        self.delay = delay;
        self
    }

    #[must_use]
    pub const fn get_delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub const fn get_steps(&self) -> usize {
        self.steps
    }

    /// Return the frames of this morph without rendering them
    ///
    /// # Errors
    /// See [`morph_frames`]
    pub fn frames<'a>(
        &self, source: &'a ImageGrid, target: &'a ImageGrid
    ) -> Result<MorphFrames<'a>, GridErrors> {
        morph_frames(source, target, self.steps)
    }

    /// Configure the renderer's canvas for `source`, then render every frame
    /// followed by a pause of [`get_delay`](Morph::get_delay)
    ///
    /// Returns the number of frames rendered.
    ///
    /// # Errors
    /// - [`GridErrors::InvalidArgument`] if the morph has zero steps
    /// - Any error returned by the renderer, which stops the morph
    pub fn run<R: Renderer + ?Sized>(
        &self, source: &ImageGrid, target: &ImageGrid, renderer: &mut R
    ) -> Result<usize, GridErrors> {
        let frames = self.frames(source, target)?;

        info!(
            "Morphing {}x{} image over {} frames",
            source.cols(),
            source.rows(),
            frames.len_total()
        );
        renderer.configure_canvas(source.rows(), source.cols())?;

        let mut rendered = 0;

        for frame in frames {
            renderer.render_frame(&frame)?;
            renderer.pause(self.delay);
            rendered += 1;
        }
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use runigram_core::errors::GridErrors;
    use runigram_core::grid::ImageGrid;
    use runigram_core::pixel::Pixel;

    use crate::morph::{morph, morph_frames, Morph, Renderer};
    use crate::resize::scaled;

    #[derive(Default)]
    struct RecordingRenderer {
        canvas:     Option<(usize, usize)>,
        frames:     Vec<ImageGrid>,
        pauses:     Vec<Duration>,
        fail_after: Option<usize>
    }

    impl Renderer for RecordingRenderer {
        fn configure_canvas(&mut self, rows: usize, cols: usize) -> Result<(), GridErrors> {
            self.canvas = Some((rows, cols));
            Ok(())
        }

        fn render_frame(&mut self, grid: &ImageGrid) -> Result<(), GridErrors> {
            if self.fail_after == Some(self.frames.len()) {
                return Err(GridErrors::RenderError("surface lost".to_string()));
            }
            self.frames.push(grid.clone());
            Ok(())
        }

        fn pause(&mut self, duration: Duration) {
            self.pauses.push(duration);
        }
    }

    fn source() -> ImageGrid {
        ImageGrid::from_fn(4, 3, |row, col| Pixel::new(row as i32 * 60, col as i32 * 60, 200)).unwrap()
    }

    fn target() -> ImageGrid {
        ImageGrid::from_rows(vec![
            vec![Pixel::new(0, 0, 0), Pixel::new(250, 250, 250)],
            vec![Pixel::new(90, 10, 30), Pixel::new(5, 15, 25)],
        ])
        .unwrap()
    }

    #[test]
    fn test_frame_count_and_endpoints() {
        let (source, target) = (source(), target());
        let frames: Vec<ImageGrid> = morph_frames(&source, &target, 4).unwrap().collect();

        assert_eq!(frames.len(), 5);
        assert_eq!(frames[0], source);
        assert_eq!(frames[4], scaled(&target, 4, 3).unwrap());
        assert!(frames.iter().all(|f| f.same_dimensions(&source)));
    }

    #[test]
    fn test_middle_frame_values() {
        let source = ImageGrid::fill(Pixel::new(7, 200, 0), 1, 1).unwrap();
        let target = ImageGrid::fill(Pixel::new(1, 20, 90), 1, 1).unwrap();
        let frames = morph_frames(&source, &target, 3).unwrap();

        assert_eq!(frames.len(), 4);

        let pixels: Vec<Pixel> = frames.map(|frame| frame.pixel(0, 0)).collect();

        // alpha = 2/3 on (7, 1) gives 5, a float cast of 7 * a + 1 * (1 - a) gives 4
        assert_eq!(
            pixels,
            [
                Pixel::new(7, 200, 0),
                Pixel::new(5, 140, 30),
                Pixel::new(3, 80, 60),
                Pixel::new(1, 20, 90)
            ]
        );
    }

    #[test]
    fn test_frame_count_overflow_rejected() {
        let image = ImageGrid::fill(Pixel::gray(1), 1, 1).unwrap();

        assert!(matches!(
            morph_frames(&image, &image, usize::MAX),
            Err(GridErrors::InvalidArgument(_))
        ));

        let mut frames = morph_frames(&image, &image, usize::MAX - 1).unwrap();
        assert_eq!(frames.len_total(), usize::MAX);
        assert_eq!(frames.size_hint(), (usize::MAX, Some(usize::MAX)));
        assert_eq!(frames.next(), Some(image.clone()));
        assert_eq!(frames.len(), usize::MAX - 1);
    }

    #[test]
    fn test_target_resized_once() {
        let (source, target) = (source(), target());
        let frames = morph_frames(&source, &target, 2).unwrap();

        assert_eq!(frames.target().dimensions(), (4, 3));
        // caller's target is untouched
        assert_eq!(target.dimensions(), (2, 2));
    }

    #[test]
    fn test_run_renders_and_pauses() {
        let (source, target) = (source(), target());
        let mut renderer = RecordingRenderer::default();

        let morph = Morph::new(2).set_delay(Duration::from_millis(20));

        assert_eq!(morph.get_steps(), 2);
        assert_eq!(morph.get_delay(), Duration::from_millis(20));

        let rendered = morph.run(&source, &target, &mut renderer).unwrap();

        assert_eq!(rendered, 3);
        assert_eq!(renderer.canvas, Some((3, 4)));
        assert_eq!(renderer.frames.len(), 3);
        assert_eq!(renderer.frames[0], source);
        assert_eq!(renderer.pauses, vec![Duration::from_millis(20); 3]);
    }

    #[test]
    fn test_default_delay() {
        let image = ImageGrid::fill(Pixel::gray(1), 1, 1).unwrap();
        let mut renderer = RecordingRenderer::default();

        morph(&image, &image, 1, &mut renderer).unwrap();

        assert_eq!(renderer.frames.len(), 2);
        assert_eq!(renderer.pauses, vec![Duration::from_millis(500); 2]);
    }

    #[test]
    fn test_zero_steps_rejected() {
        let (source, target) = (source(), target());
        let mut renderer = RecordingRenderer::default();

        assert!(matches!(
            morph_frames(&source, &target, 0),
            Err(GridErrors::InvalidArgument(_))
        ));
        assert!(morph(&source, &target, 0, &mut renderer).is_err());
        assert_eq!(renderer.canvas, None);
    }

    #[test]
    fn test_renderer_error_stops_morph() {
        let (source, target) = (source(), target());
        let mut renderer = RecordingRenderer {
            fail_after: Some(2),
            ..RecordingRenderer::default()
        };

        let result = morph(&source, &target, 5, &mut renderer);

        assert!(matches!(result, Err(GridErrors::RenderError(_))));
        assert_eq!(renderer.frames.len(), 2);
        assert_eq!(renderer.pauses.len(), 2);
    }
}
