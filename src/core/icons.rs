//! Icon keys and icon-derived colors.
//!
//! Facts reference icons by [`IconKey`]; renderers resolve keys to files
//! under the assets directory and tint facts with the icon's average
//! opaque color. Resolution failures are logged and yield no color.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::catalog::ItemId;
use crate::core::dimension::season_prefix;

// ============================================================================
// Colors
// ============================================================================

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn complementary(self) -> Rgb {
        Rgb(255 - self.0, 255 - self.1, 255 - self.2)
    }

    /// Perceived brightness in `0.0..=1.0`.
    pub fn luminance(self) -> f32 {
        (0.299 * self.0 as f32 + 0.587 * self.1 as f32 + 0.114 * self.2 as f32) / 255.0
    }

    /// Whether dark text reads better than light text on this color.
    pub fn is_light(self) -> bool {
        self.luminance() > 0.5
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ============================================================================
// Icon keys
// ============================================================================

/// Icon referenced by a fact or result card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IconKey {
    /// Brass coin shown beside prices.
    Brass,
    /// Star on the "Item Quality" header.
    Star,
    /// Poo bucket on fertilizer facts.
    Poo,
    /// Normalized season name (first six lowercase characters).
    Season(String),
    /// Capitalized trait name.
    Trait(String),
    Item(ItemId),
}

impl IconKey {
    pub fn season(value: &str) -> Self {
        Self::Season(season_prefix(&value.to_lowercase()).to_string())
    }

    pub fn trait_icon(value: &str) -> Self {
        Self::Trait(capitalize(value))
    }

    /// Path relative to the assets directory.
    pub fn relative_path(&self) -> PathBuf {
        let images = Path::new("images");
        match self {
            Self::Brass => images.join("items").join("brass.webp"),
            Self::Star => images.join("star.webp"),
            Self::Poo => images.join("items").join("poo.webp"),
            Self::Season(name) => images.join("season").join(format!("{name}.png")),
            Self::Trait(name) => images.join("trait").join(format!("{name}.webp")),
            Self::Item(id) => images.join("items").join(format!("{id}.webp")),
        }
    }
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Icon decoding errors
#[derive(Error, Debug)]
pub enum IconError {
    #[error("Failed to decode icon: {0}")]
    Image(#[from] image::ImageError),

    #[error("Icon has no opaque pixels: {}", .0.display())]
    Transparent(PathBuf),
}

/// Average color of the icon's non-transparent pixels.
pub fn average_color(path: &Path) -> Result<Rgb, IconError> {
    let pixels = image::open(path)?.to_rgba8();

    let (mut r, mut g, mut b, mut count) = (0u64, 0u64, 0u64, 0u64);
    for pixel in pixels.pixels().filter(|p| p.0[3] != 0) {
        r += u64::from(pixel.0[0]);
        g += u64::from(pixel.0[1]);
        b += u64::from(pixel.0[2]);
        count += 1;
    }

    if count == 0 {
        return Err(IconError::Transparent(path.to_path_buf()));
    }

    let avg = |sum: u64| ((sum as f64) / (count as f64)).round() as u8;
    Ok(Rgb(avg(r), avg(g), avg(b)))
}

/// Memoized icon colors keyed by [`IconKey`].
///
/// Failed lookups are cached too, so a missing file is only tried once.
pub struct IconCache {
    assets_dir: PathBuf,
    colors: HashMap<IconKey, Option<Rgb>>,
}

impl IconCache {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            colors: HashMap::new(),
        }
    }

    pub fn color(&mut self, key: &IconKey) -> Option<Rgb> {
        if let Some(cached) = self.colors.get(key) {
            return *cached;
        }

        let path = self.assets_dir.join(key.relative_path());
        let color = match average_color(&path) {
            Ok(color) => Some(color),
            Err(e) => {
                log::debug!("No icon color for {}: {e}", path.display());
                None
            }
        };
        self.colors.insert(key.clone(), color);
        color
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
