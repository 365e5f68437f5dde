//! Main egui/eframe application state and UI orchestration.

use crate::config::AppConfig;
use crate::picker::PickerSession;
use egui::{Context, Key};
use egui_file_dialog::DialogState;
use image_state::{ImageState, PendingImageTask};
use std::path::{Path, PathBuf};
use std::time::Duration;
use ui_state::{NativeDialog, UiState};

mod clipboard;
mod image_loader;
mod image_state;
mod ui;
mod ui_state;

pub struct SwatchpickApp {
    config: AppConfig,
    image: ImageState,
    session: PickerSession,
    ui: UiState,
    pending_image_task: Option<PendingImageTask>,
    active_dialog: Option<NativeDialog>,
    last_image_dir: Option<PathBuf>,
}

impl SwatchpickApp {
    pub fn new(config: AppConfig) -> Self {
        let session = PickerSession::new(config.display_model);
        Self {
            config,
            image: ImageState::default(),
            session,
            ui: UiState::default(),
            pending_image_task: None,
            active_dialog: None,
            last_image_dir: None,
        }
    }

    /// Create a new app and optionally queue an initial image load.
    pub fn new_with_initial_path(config: AppConfig, initial_path: Option<&Path>) -> Self {
        let mut app = Self::new(config);
        if let Some(p) = initial_path {
            app.start_loading_image_from_path(p.to_owned());
        }
        app
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.ui.last_status = Some(msg.into());
    }

    fn handle_hotkeys(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() || self.active_dialog.is_some() {
            return;
        }
        // Ctrl/Cmd + O: open image
        if ctx.input(|i| i.key_pressed(Key::O) && i.modifiers.command) {
            self.open_image_dialog();
        }
        // Ctrl/Cmd + V: paste image from clipboard
        if ctx.input(|i| i.key_pressed(Key::V) && i.modifiers.command) {
            self.paste_image_from_clipboard();
        }
        // Ctrl/Cmd + Shift + C: copy hex of the last pick
        if ctx.input(|i| i.key_pressed(Key::C) && i.modifiers.command && i.modifiers.shift) {
            self.copy_current_hex();
        }
        // Ctrl/Cmd + B: toggle side panel
        if ctx.input(|i| i.key_pressed(Key::B) && i.modifiers.command) {
            self.ui.side_open = !self.ui.side_open;
        }
    }

    fn update_dialogs(&mut self, ctx: &Context) {
        let mut close_dialog = false;
        let mut picked_path: Option<PathBuf> = None;

        if let Some(NativeDialog::Open(dialog)) = self.active_dialog.as_mut() {
            dialog.update(ctx);
            if let Some(path) = dialog.take_picked() {
                picked_path = Some(path);
                close_dialog = true;
            } else {
                match dialog.state() {
                    DialogState::Cancelled => {
                        self.ui.last_status = Some("Open canceled.".to_string());
                        close_dialog = true;
                    }
                    DialogState::Closed => close_dialog = true,
                    _ => {}
                }
            }
        }

        if let Some(path) = picked_path {
            self.start_loading_image_from_path(path);
        }
        if close_dialog {
            self.active_dialog = None;
        }
    }
}

impl eframe::App for SwatchpickApp {
    // eframe 0.34 requires `ui`; it still calls `update` every frame as well,
    // and all drawing lives there.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.poll_image_loader();
        self.handle_hotkeys(ctx);

        if self.pending_image_task.is_some() {
            ctx.request_repaint_after(Duration::from_millis(16));
        }

        egui::TopBottomPanel::top("top").show(ctx, |ui| self.ui_top(ui));
        egui::SidePanel::right("side")
            .resizable(true)
            .default_width(240.0)
            .show_animated(ctx, self.ui.side_open, |ui| self.ui_side_panel(ui));
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| self.ui_status_bar(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.ui_central_image(ui));
        self.ui_magnifier(ctx);

        self.update_dialogs(ctx);
    }
}
