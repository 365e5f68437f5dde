//! Append-only collection of picked colors.

use crate::color::{Hsl, Rgb, ScaledColor};
use std::ops::Index;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette has no entry {index} (it holds {len})")]
    NoSuchEntry { index: usize, len: usize },
}

/// One picked color. Entries are never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    hsl: Hsl,
    swatch: Rgb,
    label: String,
    scaled: ScaledColor,
}

impl PaletteEntry {
    /// `scaled` is the readout that was on screen when the color was picked;
    /// reselecting the entry restores exactly these values.
    pub fn new(hsl: Hsl, scaled: ScaledColor) -> Self {
        Self {
            hsl,
            swatch: hsl.to_rgb(),
            label: hsl.label(),
            scaled,
        }
    }

    pub const fn hsl(&self) -> Hsl {
        self.hsl
    }

    pub const fn swatch(&self) -> Rgb {
        self.swatch
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub const fn scaled(&self) -> ScaledColor {
        self.scaled
    }
}

#[derive(Debug, Default)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Append and return the new entry's index.
    pub fn push(&mut self, entry: PaletteEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    /// Recorded readout of the entry at `index`.
    pub fn select(&self, index: usize) -> Result<ScaledColor, PaletteError> {
        self.get(index)
            .map(PaletteEntry::scaled)
            .ok_or(PaletteError::NoSuchEntry {
                index,
                len: self.entries.len(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<usize> for Palette {
    type Output = PaletteEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}
