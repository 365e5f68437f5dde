mod load;
mod meta;
mod surface;

pub use load::{decode_image_from_bytes, decode_image_from_path};
pub use meta::{ImageMeta, human_readable_bytes};
pub use surface::{SampleError, Surface, fit_scale, fitted_size, map_to_surface};
