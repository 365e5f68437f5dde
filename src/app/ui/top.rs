use super::super::SwatchpickApp;
use super::icons;

impl SwatchpickApp {
    pub(crate) fn ui_top(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // Use egui's built-in theme toggle so icon matches current mode.
            egui::widgets::global_theme_preference_switch(ui);
            ui.separator();

            self.ui_file_menu(ui);
            ui.separator();

            let side_label = if self.ui.side_open {
                "Hide palette"
            } else {
                "Show palette"
            };
            if ui
                .add(
                    egui::Button::new(format!("{} {side_label}", icons::ICON_SIDE_TOGGLE))
                        .shortcut_text("Ctrl+B"),
                )
                .clicked()
            {
                self.ui.side_open = !self.ui.side_open;
            }
            ui.separator();

            let can_copy = self.session.last_pick().is_some();
            if ui
                .add_enabled(
                    can_copy,
                    egui::Button::new(format!("{} Copy hex", icons::ICON_COPY))
                        .shortcut_text("Ctrl+Shift+C"),
                )
                .on_hover_text("Copy the last picked color as #RRGGBB")
                .clicked()
            {
                self.copy_current_hex();
            }
        });
    }

    fn ui_file_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button(format!("{} File", icons::ICON_MENU), |ui| {
            if ui
                .add(egui::Button::new("Open image…").shortcut_text("Ctrl+O"))
                .on_hover_text("Open an image (Ctrl+O). You can also drag & drop into the center.")
                .clicked()
            {
                self.open_image_dialog();
                ui.close();
            }

            if ui
                .add(egui::Button::new("Paste image").shortcut_text("Ctrl+V"))
                .on_hover_text("Paste image from clipboard (Ctrl+V)")
                .clicked()
            {
                self.paste_image_from_clipboard();
                ui.close();
            }
        });
    }
}
