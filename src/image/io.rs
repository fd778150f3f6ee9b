//! Conversions to and from the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Images coming from the
//! `image` crate always carry maxval 255.

use crate::image::{PixelBuffer, PIX_MAX};
use crate::util::{GrayKitError, GrayKitResult};
use std::path::Path;

/// Creates an owned pixel buffer from a grayscale image buffer.
pub fn from_gray_image(img: &image::GrayImage) -> GrayKitResult<PixelBuffer> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    PixelBuffer::from_vec(img.as_raw().clone(), width, height, PIX_MAX)
}

/// Converts a pixel buffer into an `image::GrayImage`.
///
/// Levels are copied unchanged; a maxval below 255 is not rescaled.
pub fn to_gray_image(buffer: &PixelBuffer) -> GrayKitResult<image::GrayImage> {
    let width = u32::try_from(buffer.width()).map_err(|_| GrayKitError::InvalidDimensions {
        width: buffer.width(),
        height: buffer.height(),
    })?;
    let height = u32::try_from(buffer.height()).map_err(|_| GrayKitError::InvalidDimensions {
        width: buffer.width(),
        height: buffer.height(),
    })?;
    image::GrayImage::from_raw(width, height, buffer.as_slice().to_vec()).ok_or(
        GrayKitError::InvalidDimensions {
            width: buffer.width(),
            height: buffer.height(),
        },
    )
}

/// Loads any format the `image` crate decodes and converts it to grayscale.
pub fn load_gray_image<P: AsRef<Path>>(path: P) -> GrayKitResult<PixelBuffer> {
    let img = image::open(path).map_err(|err| GrayKitError::ImageIo {
        reason: err.to_string(),
    })?;
    from_gray_image(&img.to_luma8())
}
