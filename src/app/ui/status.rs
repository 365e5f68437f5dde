use super::super::SwatchpickApp;
use crate::image::human_readable_bytes;
use egui::{Color32, RichText};

impl SwatchpickApp {
    pub(crate) fn ui_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let dim = |text: String| RichText::new(text).small().color(Color32::from_gray(180));

            if let (Some(meta), Some(loaded)) = (&self.image.meta, &self.image.surface) {
                let [sw, sh] = loaded.surface.size();
                let mut text = format!("{} ({})", meta.display_name(), meta.source_label());
                if let Some(source) = &self.image.source {
                    text.push_str(&format!(" {}×{}", source.width(), source.height()));
                }
                if let Some(bytes) = meta.byte_len() {
                    text.push_str(&format!(", {}", human_readable_bytes(bytes)));
                }
                text.push_str(&format!(
                    " → {sw}×{sh} @ {:.0}%",
                    loaded.surface.scale() * 100.0
                ));
                ui.label(dim(text));
                ui.separator();
            }

            if let Some(pick) = self.session.last_pick() {
                let (rgb, hsl, hsv) = (pick.rgb, pick.hsl, pick.hsv);
                ui.label(dim(format!(
                    "RGB({}, {}, {}) {}  HSL({:.0}°, {:.0}%, {:.0}%)  HSV({:.0}°, {:.0}%, {:.0}%)",
                    rgb.r,
                    rgb.g,
                    rgb.b,
                    rgb.to_hex(),
                    hsl.hue(),
                    hsl.saturation(),
                    hsl.lightness(),
                    hsv.hue(),
                    hsv.saturation(),
                    hsv.value(),
                )));
            }

            if let Some(msg) = &self.ui.last_status {
                ui.separator();
                ui.label(
                    RichText::new(msg.as_str())
                        .small()
                        .color(Color32::from_gray(200)),
                );
            }
        });
    }
}
