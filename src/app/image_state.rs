use crate::image::{ImageMeta, Surface};
use egui::TextureHandle;
use image::RgbaImage;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

pub enum ImageLoadRequest {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

pub struct PendingImageTask {
    pub(super) rx: Receiver<ImageLoadResult>,
    pub(super) meta: PendingImageMeta,
}

pub enum ImageLoadResult {
    Success(RgbaImage),
    Error(String),
}

#[derive(Clone)]
pub enum PendingImageMeta {
    Path { path: PathBuf },
    DroppedBytes { name: Option<String>, byte_len: usize },
}

impl PendingImageMeta {
    pub(super) fn description(&self) -> String {
        match self {
            Self::Path { path } => path
                .file_name()
                .and_then(|s| s.to_str())
                .map_or_else(|| path.display().to_string(), str::to_string),
            Self::DroppedBytes { name, .. } => name
                .as_deref()
                .map_or_else(|| "dropped bytes".to_string(), str::to_string),
        }
    }

    pub(super) fn into_image_meta(self) -> ImageMeta {
        match self {
            Self::Path { path } => ImageMeta::from_path(&path),
            Self::DroppedBytes { name, byte_len } => {
                ImageMeta::from_dropped_bytes(name.as_deref(), byte_len)
            }
        }
    }
}

/// Surface plus the texture it is displayed through.
pub struct LoadedSurface {
    pub(super) surface: Surface,
    pub(super) texture: TextureHandle,
}

#[derive(Default)]
pub struct ImageState {
    /// Decoded image at full resolution; surfaces are rebuilt from it.
    pub(super) source: Option<RgbaImage>,
    pub(super) surface: Option<LoadedSurface>,
    pub(super) meta: Option<ImageMeta>,
}
