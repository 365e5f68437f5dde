use super::image_state::{
    ImageLoadRequest, ImageLoadResult, LoadedSurface, PendingImageMeta, PendingImageTask,
};
use super::SwatchpickApp;
use crate::image::{ImageMeta, Surface, decode_image_from_bytes, decode_image_from_path, fit_scale, fitted_size};
use egui::{Context, TextureOptions, Vec2};
use image::RgbaImage;
use std::path::Path;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;

impl SwatchpickApp {
    pub(crate) fn start_loading_image_from_path(&mut self, path: std::path::PathBuf) {
        self.remember_image_dir_from_path(&path);
        let meta = PendingImageMeta::Path { path: path.clone() };
        self.start_image_load(ImageLoadRequest::Path(path), meta);
    }

    pub(crate) fn start_loading_image_from_bytes(&mut self, name: Option<String>, bytes: Vec<u8>) {
        let meta = PendingImageMeta::DroppedBytes {
            name,
            byte_len: bytes.len(),
        };
        self.start_image_load(ImageLoadRequest::Bytes(bytes), meta);
    }

    /// Decode off the UI thread. The result is consumed once by
    /// [`Self::poll_image_loader`]; a newer request replaces an older one.
    fn start_image_load(&mut self, request: ImageLoadRequest, meta: PendingImageMeta) {
        let description = meta.description();
        let cfg = self.config.clone();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = match request {
                ImageLoadRequest::Path(path) => decode_image_from_path(&cfg, &path),
                ImageLoadRequest::Bytes(bytes) => decode_image_from_bytes(&cfg, bytes),
            };
            let msg = match result {
                Ok(pixels) => ImageLoadResult::Success(pixels),
                Err(err) => ImageLoadResult::Error(format!("{err:#}")),
            };
            let _ = tx.send(msg);
        });
        self.pending_image_task = Some(PendingImageTask { rx, meta });
        self.set_status(format!("Loading {description}…"));
    }

    pub(crate) fn poll_image_loader(&mut self) {
        let Some(task) = self.pending_image_task.take() else {
            return;
        };
        match task.rx.try_recv() {
            Ok(ImageLoadResult::Success(pixels)) => {
                self.finish_loaded_image(pixels, task.meta.into_image_meta());
            }
            Ok(ImageLoadResult::Error(err)) => {
                let label = task.meta.description();
                log::error!("Error loading image {label}: {err}");
                self.set_status(format!("Failed to load {label}: {err}"));
            }
            Err(TryRecvError::Empty) => {
                self.pending_image_task = Some(task);
            }
            Err(TryRecvError::Disconnected) => {
                let label = task.meta.description();
                log::error!("Image loader for {label} exited without a result");
                self.set_status(format!("Loading {label} failed: worker disconnected."));
            }
        }
    }

    /// Swap in a new image. The palette and readout are left alone.
    pub(crate) fn finish_loaded_image(&mut self, pixels: RgbaImage, meta: ImageMeta) {
        let name = meta.display_name();
        let (w, h) = pixels.dimensions();
        log::info!("Loaded {name} ({w}x{h})");
        self.image.source = Some(pixels);
        self.image.surface = None;
        self.image.meta = Some(meta);
        self.ui.hide_magnifier();
        self.set_status(format!("Loaded {name}"));
    }

    /// Build (or rebuild after a viewport resize) the surface for the loaded image.
    pub(crate) fn ensure_surface(&mut self, ctx: &Context, viewport: Vec2) {
        let Some(source) = self.image.source.as_ref() else {
            return;
        };
        let fraction = self.config.fit_fraction();
        let source_size = [source.width(), source.height()];
        let wanted = fitted_size(source_size, fit_scale(source_size, viewport, fraction));
        if self
            .image
            .surface
            .as_ref()
            .is_some_and(|loaded| loaded.surface.size() == wanted)
        {
            return;
        }
        let surface = Surface::fit(source, viewport, fraction);
        let texture = ctx.load_texture("surface", surface.to_color_image(), TextureOptions::NEAREST);
        let [sw, sh] = surface.size();
        log::debug!(
            "Surface {sw}x{sh} at {:.0}% for viewport {:.0}x{:.0}",
            surface.scale() * 100.0,
            viewport.x,
            viewport.y
        );
        self.image.surface = Some(LoadedSurface { surface, texture });
    }

    pub(crate) fn remember_image_dir_from_path(&mut self, path: &Path) {
        let dir = path
            .parent()
            .map_or_else(|| std::path::PathBuf::from("."), Path::to_path_buf);
        self.last_image_dir = Some(dir);
    }
}
