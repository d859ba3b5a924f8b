//! Image decoding and sizing for embedded pictures.

use crate::error::{Error, Result};
use crate::model::{Document, ImageRef, Resource};
use image::{ImageFormat, ImageReader, Limits};
use std::io::Cursor;

/// Largest accepted side of an embedded image, in pixels.
///
/// Large enough for an A0 sheet scanned at 600 dpi.
pub const MAX_IMAGE_SIDE: u32 = 32_768;

/// A display bounding box in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Maximum width in pixels
    pub width: u32,
    /// Maximum height in pixels
    pub height: u32,
}

impl BoundingBox {
    /// Creates a bounding box.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Scales `(width, height)` to fit inside the box, keeping the aspect ratio.
    ///
    /// Images are scaled up as well as down so every logo or plan fills its slot.
    pub fn fit(&self, width: u32, height: u32) -> (u32, u32) {
        if width == 0 || height == 0 {
            return (self.width, self.height);
        }
        let scale = f64::min(
            f64::from(self.width) / f64::from(width),
            f64::from(self.height) / f64::from(height),
        );
        let fitted_w = (f64::from(width) * scale).round().max(1.0) as u32;
        let fitted_h = (f64::from(height) * scale).round().max(1.0) as u32;
        (fitted_w, fitted_h)
    }
}

/// Returns the MIME type for a supported raster format.
fn mime_type(format: ImageFormat) -> Option<&'static str> {
    match format {
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::Gif => Some("image/gif"),
        ImageFormat::Bmp => Some("image/bmp"),
        _ => None,
    }
}

/// Decodes image bytes into a resource.
///
/// The whole image is decoded so corrupt data is caught here rather than
/// by the word processor opening the file. `label` names the image in errors
/// (e.g. "logo").
pub fn decode_image(label: &str, data: &[u8]) -> Result<Resource> {
    if data.is_empty() {
        return Err(Error::image_decode(label, "no image data"));
    }

    let format = image::guess_format(data).map_err(|e| Error::image_decode(label, e))?;
    let mime = mime_type(format).ok_or_else(|| {
        Error::image_decode(label, format!("unsupported image format {:?}", format))
    })?;

    // Plan scans can exceed the default allocation cap; bound the
    // dimensions instead
    let mut limits = Limits::no_limits();
    limits.max_image_width = Some(MAX_IMAGE_SIDE);
    limits.max_image_height = Some(MAX_IMAGE_SIDE);
    let mut reader = ImageReader::with_format(Cursor::new(data), format);
    reader.limits(limits);
    let decoded = reader.decode().map_err(|e| Error::image_decode(label, e))?;

    log::debug!(
        "Decoded {} image: {} {}x{}",
        label,
        mime,
        decoded.width(),
        decoded.height()
    );

    Ok(Resource::image(
        data.to_vec(),
        mime,
        decoded.width(),
        decoded.height(),
    ))
}

/// Decodes `data`, registers it in `document` and returns a reference
/// sized to fit `bounds`.
pub fn embed_image(
    document: &mut Document,
    label: &str,
    data: &[u8],
    bounds: BoundingBox,
) -> Result<ImageRef> {
    let resource = decode_image(label, data)?;
    let (width, height) = bounds.fit(resource.width, resource.height);
    let id = document.add_resource(resource);
    Ok(ImageRef::new(id, width, height))
}
