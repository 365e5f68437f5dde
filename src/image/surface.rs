//! The fitted raster that stands in for a drawing canvas: built once per image
//! and viewport, displayed as a texture and sampled one pixel at a time.

use crate::color::Rgb;
use crate::util::{floor_f32_to_u32, u32_to_f32};
use egui::{ColorImage, Pos2, Vec2, pos2};
use image::RgbaImage;
use image::imageops::{self, FilterType};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SampleError {
    #[error("({x}, {y}) lies outside the {width}x{height} surface")]
    OutOfBounds {
        x: f32,
        y: f32,
        width: u32,
        height: u32,
    },
}

/// Scale factor that fits `image` inside `fraction` of `viewport` in both
/// dimensions. Images that already fit are never enlarged.
pub fn fit_scale(image: [u32; 2], viewport: Vec2, fraction: f32) -> f32 {
    let [w, h] = image;
    if w == 0 || h == 0 {
        return 1.0;
    }
    let max_w = viewport.x.max(1.0) * fraction;
    let max_h = viewport.y.max(1.0) * fraction;
    let img_w = u32_to_f32(w);
    let img_h = u32_to_f32(h);
    if img_w > max_w || img_h > max_h {
        (max_w / img_w).min(max_h / img_h)
    } else {
        1.0
    }
}

/// Surface dimensions for `scale`; fractional pixels are dropped, never below 1.
pub fn fitted_size(image: [u32; 2], scale: f32) -> [u32; 2] {
    image.map(|dim| floor_f32_to_u32(u32_to_f32(dim) * scale).max(1))
}

/// Convert a pointer offset in display points, measured from the top-left of
/// the drawn surface, into surface pixel coordinates.
pub fn map_to_surface(offset: Vec2, displayed: Vec2, surface: [u32; 2]) -> Pos2 {
    let ratio = |surface_dim: u32, displayed_dim: f32| {
        if displayed_dim > 0.0 {
            u32_to_f32(surface_dim) / displayed_dim
        } else {
            1.0
        }
    };
    pos2(
        offset.x * ratio(surface[0], displayed.x),
        offset.y * ratio(surface[1], displayed.y),
    )
}

#[derive(Debug, Clone)]
pub struct Surface {
    pixels: RgbaImage,
    scale: f32,
}

impl Surface {
    /// Wrap pixels that are already at display resolution.
    pub const fn new(pixels: RgbaImage) -> Self {
        Self { pixels, scale: 1.0 }
    }

    /// Draw `source` scaled to fit the viewport box, resampling bilinearly.
    pub fn fit(source: &RgbaImage, viewport: Vec2, fraction: f32) -> Self {
        let size = [source.width(), source.height()];
        let scale = fit_scale(size, viewport, fraction);
        let [w, h] = fitted_size(size, scale);
        let pixels = if [w, h] == size {
            source.clone()
        } else {
            imageops::resize(source, w, h, FilterType::Triangle)
        };
        Self { pixels, scale }
    }

    pub fn size(&self) -> [u32; 2] {
        [self.pixels.width(), self.pixels.height()]
    }

    /// Ratio between surface and source image dimensions.
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Read the pixel under `pos`. Coordinates are truncated, not rounded;
    /// alpha is discarded.
    pub fn sample_pixel(&self, pos: Pos2) -> Result<Rgb, SampleError> {
        let (width, height) = self.pixels.dimensions();
        let out_of_bounds = SampleError::OutOfBounds {
            x: pos.x,
            y: pos.y,
            width,
            height,
        };
        if !pos.x.is_finite() || !pos.y.is_finite() || pos.x < 0.0 || pos.y < 0.0 {
            return Err(out_of_bounds);
        }
        let x = floor_f32_to_u32(pos.x);
        let y = floor_f32_to_u32(pos.y);
        if x >= width || y >= height {
            return Err(out_of_bounds);
        }
        Ok(Rgb::from_rgba(self.pixels.get_pixel(x, y).0))
    }

    /// Texture upload form of the surface.
    pub fn to_color_image(&self) -> ColorImage {
        let (w, h) = self.pixels.dimensions();
        ColorImage::from_rgba_unmultiplied([w as usize, h as usize], self.pixels.as_raw())
    }
}
