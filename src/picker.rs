//! Pick session: turns surface samples into readouts and palette entries.
//!
//! Nothing here knows about egui widgets; the app feeds it surface
//! coordinates and renders whatever it returns.

use crate::color::{ColorModel, Hsl, Hsv, Rgb, ScaledColor};
use crate::image::{SampleError, Surface};
use crate::palette::{Palette, PaletteEntry, PaletteError};
use egui::Pos2;

/// What the magnifier shows for the pixel under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preview {
    pub rgb: Rgb,
    pub hsl: Hsl,
    /// The hovered color rendered back through the display model.
    pub fill: Rgb,
    pub scaled: ScaledColor,
}

/// Every encoding of the most recent click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickedColor {
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub hsv: Hsv,
    pub scaled: ScaledColor,
}

#[derive(Debug)]
pub struct PickerSession {
    model: ColorModel,
    palette: Palette,
    current: Option<ScaledColor>,
    last_pick: Option<PickedColor>,
}

impl PickerSession {
    pub fn new(model: ColorModel) -> Self {
        Self {
            model,
            palette: Palette::default(),
            current: None,
            last_pick: None,
        }
    }

    pub const fn model(&self) -> ColorModel {
        self.model
    }

    /// Affects later picks only; existing palette entries keep their readouts.
    pub const fn set_model(&mut self, model: ColorModel) {
        self.model = model;
    }

    pub fn preview_of(&self, rgb: Rgb) -> Preview {
        let hsl = rgb.to_hsl();
        let fill = match self.model {
            ColorModel::Hsl => hsl.to_rgb(),
            ColorModel::Hsv => hsl.to_hsv().to_rgb(),
        };
        Preview {
            rgb,
            hsl,
            fill,
            scaled: ScaledColor::from_model(hsl, self.model),
        }
    }

    /// Sample without touching session state.
    pub fn hover(&self, surface: &Surface, pos: Pos2) -> Result<Preview, SampleError> {
        surface.sample_pixel(pos).map(|rgb| self.preview_of(rgb))
    }

    /// Sample, update the readout and append a palette entry. On error the
    /// session is left as it was.
    pub fn pick(&mut self, surface: &Surface, pos: Pos2) -> Result<&PaletteEntry, SampleError> {
        let rgb = surface.sample_pixel(pos)?;
        Ok(self.record(rgb))
    }

    /// Same as [`Self::pick`] for a color obtained elsewhere.
    pub fn record(&mut self, rgb: Rgb) -> &PaletteEntry {
        let hsl = rgb.to_hsl();
        let scaled = ScaledColor::from_model(hsl, self.model);
        self.current = Some(scaled);
        self.last_pick = Some(PickedColor {
            rgb,
            hsl,
            hsv: rgb.to_hsv(),
            scaled,
        });
        let idx = self.palette.push(PaletteEntry::new(hsl, scaled));
        log::debug!(
            "Picked {} -> {:?} (palette #{idx})",
            rgb.to_hex(),
            scaled.values()
        );
        &self.palette[idx]
    }

    /// Restore the readout recorded for palette entry `index`.
    pub fn select(&mut self, index: usize) -> Result<ScaledColor, PaletteError> {
        let scaled = self.palette.select(index)?;
        self.current = Some(scaled);
        log::debug!("Reselected palette #{index} -> {:?}", scaled.values());
        Ok(scaled)
    }

    pub const fn current(&self) -> Option<ScaledColor> {
        self.current
    }

    pub const fn last_pick(&self) -> Option<&PickedColor> {
        self.last_pick.as_ref()
    }

    pub const fn palette(&self) -> &Palette {
        &self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;
    use image::{Rgba, RgbaImage};

    fn surface_of(colors: &[[u8; 3]]) -> Surface {
        let width = u32::try_from(colors.len()).expect("small test image");
        let mut pixels = RgbaImage::new(width, 1);
        for (x, c) in (0..width).zip(colors) {
            pixels.put_pixel(x, 0, Rgba([c[0], c[1], c[2], 255]));
        }
        Surface::new(pixels)
    }

    #[test]
    fn pick_sets_readout_and_appends_entry() {
        let surface = surface_of(&[[255, 0, 0], [255, 255, 255]]);
        let mut session = PickerSession::new(ColorModel::Hsl);

        let entry = session.pick(&surface, pos2(0.4, 0.9)).expect("in bounds");
        assert_eq!(entry.scaled().values(), [0, 512, 256]);
        assert_eq!(entry.label(), "H: 0, S: 100%, L: 50%");
        assert_eq!(session.current().map(ScaledColor::values), Some([0, 512, 256]));

        session.pick(&surface, pos2(1.0, 0.0)).expect("in bounds");
        assert_eq!(session.current().map(ScaledColor::values), Some([0, 0, 512]));
        assert_eq!(session.palette().len(), 2);
        let last = session.last_pick().expect("picked");
        assert_eq!(last.rgb, Rgb::new(255, 255, 255));
        assert_eq!(last.rgb.to_hex(), "#FFFFFF");
    }

    #[test]
    fn out_of_bounds_pick_changes_nothing() {
        let surface = surface_of(&[[10, 20, 30]]);
        let mut session = PickerSession::new(ColorModel::Hsl);
        session.pick(&surface, pos2(0.0, 0.0)).expect("in bounds");
        let before = session.current();

        let err = session.pick(&surface, pos2(1.0, 0.0)).expect_err("outside");
        assert!(matches!(err, SampleError::OutOfBounds { width: 1, .. }));
        assert_eq!(session.current(), before);
        assert_eq!(session.palette().len(), 1);
    }

    #[test]
    fn reselect_restores_recorded_values_across_image_swaps() {
        let first = surface_of(&[[200, 40, 90]]);
        let mut session = PickerSession::new(ColorModel::Hsl);
        let recorded = session.pick(&first, pos2(0.0, 0.0)).expect("pick").scaled();

        // Load another image, change the readout model and pick again.
        let second = surface_of(&[[0, 0, 0], [17, 230, 160]]);
        session.set_model(ColorModel::Hsv);
        session.pick(&second, pos2(1.5, 0.5)).expect("pick");
        assert_ne!(session.current(), Some(recorded));

        assert_eq!(session.select(0), Ok(recorded));
        assert_eq!(session.current(), Some(recorded));
    }

    #[test]
    fn reselect_matches_readout_shown_at_pick_time() {
        let mut session = PickerSession::new(ColorModel::Hsv);
        for rgb in [
            Rgb::new(1, 2, 3),
            Rgb::new(250, 128, 7),
            Rgb::new(77, 77, 77),
        ] {
            session.record(rgb);
            let shown = session.current().expect("readout set");
            let idx = session.palette().len() - 1;
            assert_eq!(session.select(idx), Ok(shown));
        }
    }

    #[test]
    fn select_unknown_entry_keeps_readout() {
        let mut session = PickerSession::new(ColorModel::Hsl);
        session.record(Rgb::new(0, 0, 0));
        assert_eq!(
            session.select(5),
            Err(PaletteError::NoSuchEntry { index: 5, len: 1 })
        );
        assert_eq!(session.current().map(ScaledColor::values), Some([0, 0, 0]));
    }

    #[test]
    fn hover_previews_without_recording() {
        let surface = surface_of(&[[255, 0, 0]]);
        let session = PickerSession::new(ColorModel::Hsv);
        let preview = session.hover(&surface, pos2(0.5, 0.5)).expect("in bounds");
        assert_eq!(preview.fill, Rgb::new(255, 0, 0));
        assert_eq!(preview.scaled.values(), [0, 512, 512]);
        assert!(session.palette().is_empty());
        assert!(session.current().is_none());
        assert!(session.hover(&surface, pos2(0.5, 3.0)).is_err());
    }
}
