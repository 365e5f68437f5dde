use super::super::SwatchpickApp;
use egui::{Color32, Id, Order, Sense, Vec2, vec2};

impl SwatchpickApp {
    /// Floating preview of the hovered color, drawn next to the pointer.
    pub(crate) fn ui_magnifier(&self, ctx: &egui::Context) {
        if !self.ui.magnifier_visible {
            return;
        }
        let Some(hover) = self.ui.hover else {
            return;
        };
        let style = &self.config.magnifier;
        let size = style.size();
        let radius = size / 2.0;
        let fill = hover.preview.fill;
        let fill = Color32::from_rgb(fill.r, fill.g, fill.b);

        egui::Area::new(Id::new("magnifier"))
            .order(Order::Tooltip)
            .interactable(false)
            .fixed_pos(hover.pointer + vec2(style.offset, style.offset))
            .show(ctx, |ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
                let painter = ui.painter();
                painter.circle_filled(rect.center(), radius - 1.0, fill);
                painter.circle_stroke(rect.center(), radius - 1.0, style.stroke());
            });
    }
}
