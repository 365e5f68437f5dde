use super::super::SwatchpickApp;
use super::super::ui_state::NativeDialog;
use egui_file_dialog::FileDialog;
use std::path::Path;

impl SwatchpickApp {
    pub(crate) fn open_image_dialog(&mut self) {
        let mut dialog = Self::make_open_dialog(self.last_image_dir.as_deref());
        dialog.pick_file();
        self.active_dialog = Some(NativeDialog::Open(dialog));
    }

    fn make_open_dialog(initial_dir: Option<&Path>) -> FileDialog {
        // Keep in sync with enabled `image` crate features.
        let mut dialog = FileDialog::new()
            .title("Open image")
            .add_file_filter_extensions(
                "All images",
                vec![
                    "png", "jpg", "jpeg", "gif", "bmp", "webp", "ico", "tga", "tiff", "tif", "pnm",
                    "pbm", "pgm", "ppm",
                ],
            )
            .add_file_filter_extensions("PNG", vec!["png"])
            .add_file_filter_extensions("JPEG/JPG", vec!["jpg", "jpeg"])
            .add_file_filter_extensions("WebP", vec!["webp"])
            .default_file_filter("All images");
        if let Some(dir) = initial_dir {
            dialog = dialog.initial_directory(dir.to_path_buf());
        }
        dialog
    }
}
