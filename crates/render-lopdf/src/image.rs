use furips_render_core::RenderError;
use furips_types::Rect;
use lopdf::{Stream, dictionary};

/// A decoded raster ready to be registered as an image XObject.
pub(crate) struct ImageXObject {
    pub stream: Stream,
    pub width: u32,
    pub height: u32,
}

/// Decodes PNG/JPEG bytes into an uncompressed DeviceRGB image stream.
pub(crate) fn decode_rgb(encoded: &[u8]) -> Result<ImageXObject, RenderError> {
    if encoded.is_empty() {
        return Err(RenderError::Image("empty image data".into()));
    }
    let decoded = ::image::load_from_memory(encoded)
        .map_err(|e| RenderError::Image(format!("failed to decode image ({} bytes): {}", encoded.len(), e)))?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(RenderError::Image("image has no pixels".into()));
    }

    let dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => width as i64,
        "Height" => height as i64,
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8_i64,
    };
    Ok(ImageXObject {
        stream: Stream::new(dict, rgb.into_raw()),
        width,
        height,
    })
}

/// Largest rectangle with the image's aspect ratio that fits in `frame`, centred.
pub(crate) fn fit_contain(frame: Rect, width: u32, height: u32) -> Rect {
    let img_aspect = width as f32 / height as f32;
    let frame_aspect = if frame.height > 0.0 {
        frame.width / frame.height
    } else {
        f32::INFINITY
    };

    let (w, h) = if img_aspect > frame_aspect {
        (frame.width, frame.width / img_aspect)
    } else {
        (frame.height * img_aspect, frame.height)
    };
    Rect::new(
        frame.x + (frame.width - w) / 2.0,
        frame.y + (frame.height - h) / 2.0,
        w,
        h,
    )
}
