//! Webcam frame decoding: dataURL or raw base64 in, RGB pixels out.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::RgbImage;

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("unsupported or corrupt image data: {0}")]
    Image(#[from] image::ImageError),
}

/// Decodes a `data:image/...;base64,<payload>` dataURL or a bare base64
/// string into an RGB frame. Everything up to the first comma is treated as
/// the dataURL prefix and stripped.
pub fn decode_frame(input: &str) -> Result<RgbImage, FrameError> {
    let payload = match input.split_once(',') {
        Some((_, rest)) => rest,
        None => input,
    };
    let bytes = BASE64.decode(payload.trim())?;
    let decoded = image::load_from_memory(&bytes)?;
    Ok(decoded.to_rgb8())
}

/// Re-encodes a frame as PNG, for shipping to the remote detector.
pub fn encode_png(frame: &RgbImage) -> Result<Vec<u8>, FrameError> {
    let mut buf = Cursor::new(Vec::new());
    frame.write_to(&mut buf, image::ImageFormat::Png)?;
    Ok(buf.into_inner())
}
