use crate::picker::Preview;
use egui::Pos2;
use egui_file_dialog::FileDialog;

/// Pixel under the pointer, as last seen by the central panel.
#[derive(Debug, Clone, Copy)]
pub struct HoverSample {
    pub(super) pointer: Pos2,
    pub(super) preview: Preview,
}

pub struct UiState {
    pub(super) side_open: bool,
    pub(super) magnifier_visible: bool,
    pub(super) hover: Option<HoverSample>,
    pub(super) last_status: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            side_open: true,
            magnifier_visible: false,
            hover: None,
            last_status: None,
        }
    }
}

impl UiState {
    pub(super) const fn show_magnifier(&mut self, pointer: Pos2, preview: Preview) {
        self.hover = Some(HoverSample { pointer, preview });
        self.magnifier_visible = true;
    }

    pub(super) const fn hide_magnifier(&mut self) {
        self.hover = None;
        self.magnifier_visible = false;
    }
}

#[derive(Debug)]
pub enum NativeDialog {
    Open(FileDialog),
}
