use crate::config::AppConfig;
use anyhow::Context as _;
use image::{GenericImageView, ImageReader, Limits, RgbaImage};
use std::io::{BufRead, Cursor, Read, Seek};
use std::path::Path;

fn decode_reader_to_rgba<R>(cfg: &AppConfig, mut reader: ImageReader<R>) -> anyhow::Result<RgbaImage>
where
    R: Read + Seek + BufRead,
{
    let il = cfg.effective_image_limits();
    let mut limits = Limits::default();
    limits.max_image_width = Some(il.image_dim);
    limits.max_image_height = Some(il.image_dim);
    limits.max_alloc = Some(il.alloc_bytes);
    reader.limits(limits);
    let img = reader.decode().context("Failed to decode image data")?;

    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        anyhow::bail!("Image is empty ({w}x{h})");
    }
    let total_pixels = u64::from(w) * u64::from(h);
    if total_pixels > il.total_pixels {
        anyhow::bail!(
            "Image too large: {}x{} (~{} MP) exceeds limit (~{} MP)",
            w,
            h,
            total_pixels / 1_000_000,
            il.total_pixels / 1_000_000
        );
    }

    Ok(img.to_rgba8())
}

/// Load and decode an image from a filesystem path using configured limits.
pub fn decode_image_from_path(cfg: &AppConfig, path: &Path) -> anyhow::Result<RgbaImage> {
    let reader = ImageReader::open(path)
        .with_context(|| format!("Failed to read {}", path.display()))?
        .with_guessed_format()
        .context("Failed to detect image format")?;
    decode_reader_to_rgba(cfg, reader)
}

/// Load and decode an image from raw bytes using configured limits.
pub fn decode_image_from_bytes(cfg: &AppConfig, bytes: Vec<u8>) -> anyhow::Result<RgbaImage> {
    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .context("Failed to detect image format")?;
    decode_reader_to_rgba(cfg, reader)
}
