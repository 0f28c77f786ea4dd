//! Frame capture and looping GIF output

use std::{borrow::Cow, io::Write};

use crate::{Error, Grid, error::Result};

/// Dead cells are white (index 0), alive cells black (index 1)
const PALETTE: [u8; 6] = [0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00];

/// Writes one GIF frame per captured generation
pub struct GifRecorder<W: Write> {
    encoder: gif::Encoder<W>,
    width: u16,
    height: u16,
    delay: u16,
    pixels: Vec<u8>,
    frames: usize,
}

impl<W: Write> GifRecorder<W> {
    /// Starts an infinitely looping animation of `width` by `height` pixels
    ///
    /// `delay` is the time each frame is shown, in hundredths of a second
    pub fn new(writer: W, width: usize, height: usize, delay: u16) -> Result<Self> {
        let width = gif_dimension("width", width)?;
        let height = gif_dimension("height", height)?;

        let mut encoder = gif::Encoder::new(writer, width, height, &PALETTE)?;
        encoder.set_repeat(gif::Repeat::Infinite)?;
        Ok(Self {
            encoder,
            width,
            height,
            delay,
            pixels: Vec::with_capacity(width as usize * height as usize),
            frames: 0,
        })
    }

    /// Appends the current generation of `grid` as a frame
    ///
    /// `grid` must have the dimensions this recorder was created with
    pub fn capture(&mut self, grid: &Grid) -> Result<()> {
        debug_assert_eq!(
            grid.dimensions(),
            (self.width as usize, self.height as usize),
            "grid does not match the animation size"
        );

        self.pixels.clear();
        for row in grid.rows() {
            self.pixels.extend(row.iter().map(|&alive| u8::from(alive)));
        }

        let mut frame = gif::Frame::default();
        frame.width = self.width;
        frame.height = self.height;
        frame.delay = self.delay;
        frame.buffer = Cow::Borrowed(&self.pixels);
        self.encoder.write_frame(&frame)?;

        self.frames += 1;
        Ok(())
    }

    #[inline]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Writes the GIF trailer and hands back the underlying writer
    pub fn finish(self) -> Result<W> {
        Ok(self.encoder.into_inner()?)
    }
}

fn gif_dimension(name: &'static str, value: usize) -> Result<u16> {
    match u16::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(Error::InvalidDimension {
            name,
            value: value as i64,
            max: u16::MAX,
        }),
    }
}
