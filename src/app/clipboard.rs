use super::SwatchpickApp;
use crate::config::AppConfig;
use crate::image::{ImageMeta, human_readable_bytes};
use arboard::{Clipboard, Error as ClipboardError};
use image::RgbaImage;

struct ClipboardCapture {
    image: RgbaImage,
    byte_len: usize,
}

struct ValidatedClipboardSize {
    width: u32,
    height: u32,
    expected_len: usize,
}

impl SwatchpickApp {
    pub(crate) fn paste_image_from_clipboard(&mut self) {
        self.pending_image_task = None;
        match capture_clipboard_image(&self.config) {
            Ok(captured) => {
                let meta = ImageMeta::from_clipboard(u64::try_from(captured.byte_len).ok());
                self.finish_loaded_image(captured.image, meta);
            }
            Err(err) => {
                log::warn!("{err}");
                self.set_status(err);
            }
        }
    }

    pub(crate) fn copy_current_hex(&mut self) {
        let Some(pick) = self.session.last_pick() else {
            self.set_status("Pick a color before copying.");
            return;
        };
        let hex = pick.rgb.to_hex();
        let result = Clipboard::new().and_then(|mut clipboard| clipboard.set_text(hex.clone()));
        match result {
            Ok(()) => self.set_status(format!("Copied {hex}")),
            Err(err) => {
                let msg = format!("Copy failed: {err}");
                log::warn!("{msg}");
                self.set_status(msg);
            }
        }
    }
}

fn capture_clipboard_image(cfg: &AppConfig) -> Result<ClipboardCapture, String> {
    let mut clipboard = Clipboard::new().map_err(format_clipboard_error)?;
    let data = clipboard.get_image().map_err(format_clipboard_error)?;
    let size = validate_clipboard_image(cfg, data.width, data.height)?;
    let mut bytes = data.bytes.into_owned();
    if bytes.len() < size.expected_len {
        return Err("Paste failed: clipboard image data is truncated.".to_string());
    }
    bytes.truncate(size.expected_len);
    let image = RgbaImage::from_raw(size.width, size.height, bytes)
        .ok_or_else(|| "Paste failed: clipboard image has an unexpected layout.".to_string())?;
    Ok(ClipboardCapture {
        image,
        byte_len: size.expected_len,
    })
}

fn validate_clipboard_image(
    cfg: &AppConfig,
    width: usize,
    height: usize,
) -> Result<ValidatedClipboardSize, String> {
    if width == 0 || height == 0 {
        return Err("Paste failed: clipboard image is empty.".to_string());
    }
    let limits = cfg.effective_image_limits();
    let width_u32 = u32::try_from(width).unwrap_or(u32::MAX);
    let height_u32 = u32::try_from(height).unwrap_or(u32::MAX);
    if width_u32 > limits.image_dim || height_u32 > limits.image_dim {
        return Err(format!(
            "Paste failed: clipboard image {width}x{height} exceeds the per-side limit ({} px).",
            limits.image_dim
        ));
    }

    let total_pixels = u64::from(width_u32) * u64::from(height_u32);
    if total_pixels > limits.total_pixels {
        return Err(format!(
            "Paste failed: clipboard image too large: {width}x{height} (~{} MP) exceeds limit (~{} MP).",
            total_pixels / 1_000_000,
            limits.total_pixels / 1_000_000
        ));
    }

    let rgba_bytes = total_pixels * 4;
    if rgba_bytes > limits.alloc_bytes {
        return Err(format!(
            "Paste failed: clipboard image needs about {} of RGBA data, over the configured limit ({}).",
            human_readable_bytes(rgba_bytes),
            human_readable_bytes(limits.alloc_bytes)
        ));
    }

    let expected_len = usize::try_from(rgba_bytes).map_err(|_| {
        "Paste failed: clipboard image does not fit in available memory.".to_string()
    })?;

    Ok(ValidatedClipboardSize {
        width: width_u32,
        height: height_u32,
        expected_len,
    })
}

fn format_clipboard_error(err: ClipboardError) -> String {
    match err {
        ClipboardError::ContentNotAvailable => {
            "Paste failed: clipboard does not contain an image.".to_string()
        }
        ClipboardError::ClipboardNotSupported => {
            "Paste failed: clipboard access is not supported in this environment.".to_string()
        }
        ClipboardError::ClipboardOccupied => {
            "Paste failed: clipboard is busy; try again in a moment.".to_string()
        }
        ClipboardError::ConversionFailure => {
            "Paste failed: clipboard image could not be converted.".to_string()
        }
        ClipboardError::Unknown { description } => {
            format!("Paste failed: {description}")
        }
        _ => {
            format!("Paste failed: {err}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_clipboard_image_is_rejected() {
        let err = validate_clipboard_image(&AppConfig::default(), 0, 10)
            .err()
            .expect("empty image rejected");
        assert!(err.contains("empty"));
    }

    #[test]
    fn oversized_side_is_rejected() {
        let err = validate_clipboard_image(&AppConfig::default(), 20_000, 10)
            .err()
            .expect("wide image rejected");
        assert!(err.contains("per-side limit"));
    }

    #[test]
    fn valid_size_computes_rgba_length() {
        let size = validate_clipboard_image(&AppConfig::default(), 40, 30).expect("valid size");
        assert_eq!((size.width, size.height), (40, 30));
        assert_eq!(size.expected_len, 40 * 30 * 4);
    }
}
