//! Side panel: numeric readout, readout model and the palette.

use super::super::SwatchpickApp;
use crate::color::{ColorModel, ScaledColor};
use egui::{Color32, CornerRadius, RichText, Sense, StrokeKind, TextEdit, Vec2};

/// Readout fields hold at most "512".
const READOUT_CHARS: usize = 3;

impl SwatchpickApp {
    pub(crate) fn ui_side_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Picked color");
        ui.add_space(4.0);
        self.ui_model_selector(ui);
        ui.add_space(4.0);
        self.ui_readout(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.heading(format!("Palette ({})", self.session.palette().len()));
        ui.add_space(4.0);
        self.ui_palette(ui);
    }

    fn ui_model_selector(&mut self, ui: &mut egui::Ui) {
        let mut model = self.session.model();
        egui::ComboBox::from_label("Readout model")
            .selected_text(model.label())
            .show_ui(ui, |ui| {
                for option in ColorModel::ALL {
                    ui.selectable_value(&mut model, option, option.label());
                }
            });
        if model != self.session.model() {
            self.session.set_model(model);
            self.set_status(format!("New picks read out as {}.", model.label()));
        }
    }

    fn ui_readout(&self, ui: &mut egui::Ui) {
        let current = self.session.current();
        let field = |ui: &mut egui::Ui, label: &str, pick: fn(ScaledColor) -> u16| {
            ui.label(label);
            let mut text = current.map(|c| pick(c).to_string()).unwrap_or_default();
            ui.add(
                TextEdit::singleline(&mut text)
                    .char_limit(READOUT_CHARS)
                    .desired_width(48.0)
                    .interactive(false),
            );
            ui.end_row();
        };
        egui::Grid::new("readout_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                field(ui, "Color", |c: ScaledColor| c.color.value());
                field(ui, "Intensity", |c: ScaledColor| c.intensity.value());
                field(ui, "Brightness", |c: ScaledColor| c.brightness.value());
            });
        ui.label(
            RichText::new(format!(
                "0–512 scale · brightness is {} for new picks",
                self.session.model().brightness_label().to_lowercase()
            ))
            .small()
            .weak(),
        );
    }

    fn ui_palette(&mut self, ui: &mut egui::Ui) {
        if self.session.palette().is_empty() {
            ui.label(RichText::new("Click the image to add colors.").weak());
            return;
        }
        let size = Vec2::splat(self.config.swatch_size());
        let outline = self.config.swatch_outline();
        let mut clicked: Option<usize> = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for (idx, entry) in self.session.palette().iter().enumerate() {
                    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
                    let swatch = entry.swatch();
                    ui.painter().rect(
                        rect,
                        CornerRadius::same(3),
                        Color32::from_rgb(swatch.r, swatch.g, swatch.b),
                        egui::Stroke::new(1.0, outline),
                        StrokeKind::Inside,
                    );
                    if response.on_hover_text(entry.label()).clicked() {
                        clicked = Some(idx);
                    }
                }
            });
        });
        if let Some(idx) = clicked {
            let status = match self.session.select(idx) {
                Ok(scaled) => {
                    let [c, i, b] = scaled.values();
                    format!("Selected palette #{}: {c} / {i} / {b}", idx + 1)
                }
                Err(err) => err.to_string(),
            };
            self.set_status(status);
        }
    }
}
