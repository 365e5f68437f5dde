use std::fs;
use std::path::PathBuf;

use crate::color::ColorModel;
use crate::util::rounded_u8;
use directories::{BaseDirs, ProjectDirs};
use egui::{Color32, Stroke};
use serde::Deserialize;

const CONFIG_FILE_NAME: &str = "swatchpick.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MagnifierStyle {
    /// Diameter of the preview circle, in points.
    pub size: f32,
    /// Distance from the pointer to the preview's top-left corner.
    pub offset: f32,
    pub outline: [u8; 3],
    pub outline_width: f32,
}

impl Default for MagnifierStyle {
    fn default() -> Self {
        Self {
            size: 70.0,
            offset: 20.0,
            outline: [0, 0, 0],
            outline_width: 1.0,
        }
    }
}

impl MagnifierStyle {
    pub const fn size(&self) -> f32 {
        self.size.clamp(16.0, 512.0)
    }

    pub fn stroke(&self) -> Stroke {
        Stroke {
            width: self.outline_width.max(0.1),
            color: Color32::from_rgb(self.outline[0], self.outline[1], self.outline[2]),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display_model: ColorModel,
    pub fit_fraction: f32,
    pub magnifier: MagnifierStyle,
    pub swatch_size: f32,
    pub swatch_outline_alpha: f32,
    pub image_limits: ImageLimits,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            display_model: ColorModel::default(),
            fit_fraction: 0.6,
            magnifier: MagnifierStyle::default(),
            swatch_size: 22.0,
            swatch_outline_alpha: 0.5,
            image_limits: ImageLimits::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        for path in Self::candidate_paths() {
            if let Ok(contents) = fs::read_to_string(&path) {
                match Self::parse(&contents) {
                    Ok(cfg) => {
                        log::info!("Loaded config from {}", path.display());
                        return cfg;
                    }
                    Err(err) => {
                        log::warn!("Failed to parse config {}: {err}", path.display());
                    }
                }
            }
        }
        Self::default()
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Self>(contents)
    }

    /// Share of the viewport the surface may occupy in each dimension.
    pub const fn fit_fraction(&self) -> f32 {
        if self.fit_fraction.is_nan() {
            0.6
        } else {
            self.fit_fraction.clamp(0.1, 1.0)
        }
    }

    pub const fn swatch_size(&self) -> f32 {
        self.swatch_size.clamp(8.0, 96.0)
    }

    pub fn swatch_outline(&self) -> Color32 {
        Color32::from_black_alpha(rounded_u8(
            self.swatch_outline_alpha.clamp(0.0, 1.0) * 255.0,
        ))
    }

    pub fn effective_image_limits(&self) -> ImageLimits {
        self.image_limits.sanitized()
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(exe_path) = std::env::current_exe()
            && let Some(dir) = exe_path.parent()
        {
            paths.push(dir.join(CONFIG_FILE_NAME));
        }

        if let Some(proj_dirs) = ProjectDirs::from("dev", "Swatchpick", "Swatchpick") {
            paths.push(proj_dirs.config_dir().join(CONFIG_FILE_NAME));
        }

        if let Some(base_dirs) = BaseDirs::new() {
            paths.push(
                base_dirs
                    .config_dir()
                    .join("swatchpick")
                    .join(CONFIG_FILE_NAME),
            );
        }

        paths
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImageLimits {
    pub image_dim: u32,
    pub total_pixels: u64,
    pub alloc_bytes: u64,
}

impl Default for ImageLimits {
    fn default() -> Self {
        Self {
            image_dim: 12_000,
            total_pixels: 80_000_000,       // ~80 MP
            alloc_bytes: 512 * 1024 * 1024, // 512 MiB
        }
    }
}

impl ImageLimits {
    pub fn sanitized(&self) -> Self {
        let dim = self.image_dim.clamp(64, 100_000);
        let pixels = self.total_pixels.clamp(1_000_000, 5_000_000_000); // 1 MP .. 5 GP
        let alloc = self
            .alloc_bytes
            .clamp(8 * 1024 * 1024, 8 * 1024 * 1024 * 1024); // 8 MiB .. 8 GiB
        Self {
            image_dim: dim,
            total_pixels: pixels,
            alloc_bytes: alloc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = AppConfig::parse("").expect("empty config parses");
        assert_eq!(cfg.display_model, ColorModel::Hsl);
        assert!((cfg.fit_fraction() - 0.6).abs() < f32::EPSILON);
        assert!((cfg.magnifier.size() - 70.0).abs() < f32::EPSILON);
        assert!((cfg.magnifier.offset - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let cfg = AppConfig::parse(
            r#"
display_model = "hsv"
fit_fraction = 0.8

[magnifier]
size = 90.0
"#,
        )
        .expect("config parses");
        assert_eq!(cfg.display_model, ColorModel::Hsv);
        assert!((cfg.fit_fraction() - 0.8).abs() < f32::EPSILON);
        assert!((cfg.magnifier.size() - 90.0).abs() < f32::EPSILON);
        assert!((cfg.magnifier.offset - 20.0).abs() < f32::EPSILON);
        assert_eq!(cfg.image_limits.image_dim, 12_000);
    }

    #[test]
    fn unknown_model_is_rejected() {
        assert!(AppConfig::parse("display_model = \"cmyk\"").is_err());
    }

    #[test]
    fn out_of_range_values_are_clamped_on_use() {
        let cfg = AppConfig::parse("fit_fraction = 4.0\nswatch_size = 1.0").expect("parses");
        assert!((cfg.fit_fraction() - 1.0).abs() < f32::EPSILON);
        assert!((cfg.swatch_size() - 8.0).abs() < f32::EPSILON);

        let limits = ImageLimits {
            image_dim: 1,
            total_pixels: 0,
            alloc_bytes: 0,
        }
        .sanitized();
        assert_eq!(limits.image_dim, 64);
        assert_eq!(limits.total_pixels, 1_000_000);
        assert_eq!(limits.alloc_bytes, 8 * 1024 * 1024);
    }
}
