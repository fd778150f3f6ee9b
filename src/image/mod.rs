//! Owned grayscale pixel buffers.
//!
//! `PixelBuffer` stores `width * height` levels in row-major order
//! (`index = y * width + x`) together with the maxval that represents white.
//! Every stored level is at most maxval; the constructors check this and the
//! operations in this crate preserve it.

use crate::util::{GrayKitError, GrayKitResult};

pub mod access;
#[cfg(feature = "image-io")]
pub mod io;
pub mod pgm;

/// Largest maxval an 8-bit buffer can carry.
pub const PIX_MAX: u8 = 255;

/// Owned grayscale image with an explicit maxval.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
    maxval: u8,
}

impl PixelBuffer {
    /// Creates a black image (all levels zero).
    ///
    /// Zero width or height is allowed and yields an empty image. Fails with
    /// [`GrayKitError::Allocation`] when the pixel storage cannot be reserved.
    pub fn new(width: usize, height: usize, maxval: u8) -> GrayKitResult<Self> {
        check_maxval(u32::from(maxval))?;
        let len = pixel_count(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| GrayKitError::Allocation { width, height })?;
        data.resize(len, 0);
        Ok(Self {
            data,
            width,
            height,
            maxval,
        })
    }

    /// Wraps existing row-major data, validating length and levels.
    pub fn from_vec(data: Vec<u8>, width: usize, height: usize, maxval: u8) -> GrayKitResult<Self> {
        check_maxval(u32::from(maxval))?;
        let needed = pixel_count(width, height)?;
        if data.len() != needed {
            return Err(GrayKitError::BufferLength {
                needed,
                got: data.len(),
            });
        }
        if let Some(index) = data.iter().position(|&v| v > maxval) {
            return Err(GrayKitError::LevelAboveMaxval {
                index,
                level: data[index],
                maxval,
            });
        }
        Ok(Self {
            data,
            width,
            height,
            maxval,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the gray level of pure white.
    pub fn maxval(&self) -> u8 {
        self.maxval
    }

    /// Returns the number of pixels.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true when the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the row-major pixel levels.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns a contiguous slice for row `y`.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.data.get(start..start + self.width)
    }

    /// Consumes the image and returns its pixel levels.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Returns true if pixel `(x, y)` lies inside the image.
    pub fn valid_pos(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Returns true if the rectangle `(x, y, w, h)` lies completely inside the
    /// image.
    pub fn valid_rect(&self, x: usize, y: usize, w: usize, h: usize) -> bool {
        Region::new(x, y, w, h).fits_in(self)
    }

    pub(crate) fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Creates a black image with the same dimensions and maxval.
    pub(crate) fn blank_like(&self) -> GrayKitResult<Self> {
        Self::new(self.width, self.height, self.maxval)
    }
}

/// Axis-aligned rectangle addressed by its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    /// Left column.
    pub x: usize,
    /// Top row.
    pub y: usize,
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
}

impl Region {
    /// Creates a region.
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true when the region lies completely inside `image`.
    pub fn fits_in(&self, image: &PixelBuffer) -> bool {
        let fits_x = self
            .x
            .checked_add(self.width)
            .is_some_and(|end| end <= image.width());
        let fits_y = self
            .y
            .checked_add(self.height)
            .is_some_and(|end| end <= image.height());
        fits_x && fits_y
    }
}

fn check_maxval(maxval: u32) -> GrayKitResult<()> {
    if maxval == 0 || maxval > u32::from(PIX_MAX) {
        return Err(GrayKitError::InvalidMaxval { maxval });
    }
    Ok(())
}

fn pixel_count(width: usize, height: usize) -> GrayKitResult<usize> {
    width
        .checked_mul(height)
        .filter(|&n| n <= isize::MAX as usize)
        .ok_or(GrayKitError::InvalidDimensions { width, height })
}

pub(crate) fn parse_maxval(maxval: u32) -> GrayKitResult<u8> {
    check_maxval(maxval)?;
    Ok(maxval as u8)
}
