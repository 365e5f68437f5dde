use super::super::SwatchpickApp;
use crate::image::map_to_surface;
use crate::util::u32_to_f32;
use egui::{Align2, Color32, FontId, PointerButton, Pos2, Sense, vec2};

impl SwatchpickApp {
    pub(crate) fn ui_central_image(&mut self, ui: &mut egui::Ui) {
        self.handle_dropped_files(ui);

        let viewport = ui.available_size();
        self.ensure_surface(ui.ctx(), viewport);

        let Some(loaded) = self.image.surface.as_ref() else {
            self.ui.hide_magnifier();
            let hint = if self.pending_image_task.is_some() {
                "Loading…"
            } else {
                "Open an image (Ctrl+O), drop a file here or paste one (Ctrl+V)"
            };
            let rect = ui.max_rect();
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                hint,
                FontId::proportional(16.0),
                Color32::from_gray(160),
            );
            return;
        };

        let surface_size = loaded.surface.size();
        let display_size = vec2(u32_to_f32(surface_size[0]), u32_to_f32(surface_size[1]));
        let image = egui::Image::new((loaded.texture.id(), display_size));
        let response = ui.add(image.sense(Sense::click()));
        let rect = response.rect;
        let to_surface = |pos: Pos2| map_to_surface(pos - rect.min, rect.size(), surface_size);

        match response.hover_pos() {
            Some(pointer) => match self.session.hover(&loaded.surface, to_surface(pointer)) {
                Ok(preview) => self.ui.show_magnifier(pointer, preview),
                Err(_) => self.ui.hide_magnifier(),
            },
            None => self.ui.hide_magnifier(),
        }

        let click = if response.clicked_by(PointerButton::Primary) {
            response.interact_pointer_pos().map(to_surface)
        } else {
            None
        };
        if let Some(pos) = click {
            self.pick_at(pos);
        }
    }

    fn pick_at(&mut self, pos: Pos2) {
        let Some(loaded) = self.image.surface.as_ref() else {
            return;
        };
        let status = match self.session.pick(&loaded.surface, pos) {
            Ok(entry) => format!("Picked {}", entry.label()),
            Err(err) => format!("Nothing picked: {err}"),
        };
        self.set_status(status);
    }

    fn handle_dropped_files(&mut self, ui: &egui::Ui) {
        let dropped_files = ui.input(|i| i.raw.dropped_files.clone());
        if dropped_files.is_empty() {
            return;
        }
        for (idx, f) in dropped_files.iter().enumerate() {
            let blen = f.bytes.as_ref().map_or(0, |b| b.len());
            log::debug!(
                "[DnD] drop[{idx}] name='{}' mime={} path={:?} bytes={blen}",
                f.name,
                f.mime,
                f.path
            );
        }
        for f in &dropped_files {
            if let Some(path) = &f.path {
                log::debug!("[DnD] Loading from path: {}", path.display());
                self.start_loading_image_from_path(path.clone());
                return;
            }
            if let Some(bytes) = &f.bytes {
                log::debug!("[DnD] Loading from dropped bytes: name='{}'", f.name);
                self.start_loading_image_from_bytes(
                    (!f.name.is_empty()).then(|| f.name.clone()),
                    bytes.to_vec(),
                );
                return;
            }
        }
        log::warn!("[DnD] Drop failed: no readable bytes/path");
        self.set_status("Drop failed: no readable bytes/path");
    }
}
