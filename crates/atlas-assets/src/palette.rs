//! Alternate-palette export of finished atlas pages.
//!
//! Every `*.png` in the palette directory contributes its exact set of
//! opaque colours. Each atlas page is re-mapped onto that set by nearest
//! colour, without dithering, and written with the `.atlas` descriptors
//! under `<palette dir>/<palette name>/`. Pages are saved as RGBA PNGs; every
//! colour in them belongs to the palette.

use crate::copy::copy_asset;
use crate::placement::list_pngs;
use atlas_core::error::{AtlasError, Result};
use atlas_core::ColorKind;
use image::{Rgba, RgbaImage};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Pixels with alpha below this are written fully transparent.
const ALPHA_THRESHOLD: u8 = 0x80;

/// Largest palette an indexed PNG can hold.
pub const MAX_COLORS: usize = 256;

fn image_error(path: &Path, err: image::ImageError) -> AtlasError {
    AtlasError::Other(anyhow::Error::new(err).context(path.display().to_string()))
}

/// A fixed set of opaque colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<[u8; 3]>,
}

impl Palette {
    /// Distinct colours in first-seen order, at most [`MAX_COLORS`]; an empty
    /// palette is an error.
    pub fn new(colors: impl IntoIterator<Item = [u8; 3]>) -> Result<Self> {
        let mut seen: HashSet<[u8; 3]> = HashSet::new();
        let mut distinct: Vec<[u8; 3]> = Vec::new();
        let mut dropped = 0usize;
        for color in colors {
            if !seen.insert(color) {
                continue;
            }
            if distinct.len() < MAX_COLORS {
                distinct.push(color);
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            tracing::warn!("palette has {} colors, keeping the first {MAX_COLORS}", MAX_COLORS + dropped);
        }
        if distinct.is_empty() {
            return Err(anyhow::anyhow!("palette has no opaque colors").into());
        }
        Ok(Self { colors: distinct })
    }

    /// The opaque colours of `image`.
    pub fn from_image(image: &RgbaImage) -> Result<Self> {
        Self::new(
            image
                .pixels()
                .filter(|p| p.0[3] >= ALPHA_THRESHOLD)
                .map(|p| [p.0[0], p.0[1], p.0[2]]),
        )
    }

    pub fn load(path: &Path) -> Result<Self> {
        let image = image::open(path).map_err(|e| image_error(path, e))?.to_rgba8();
        Self::from_image(&image)
            .map_err(|e| AtlasError::Other(anyhow::Error::new(e).context(path.display().to_string())))
    }

    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }

    /// Closest palette entry by squared RGB distance; ties go to the earlier entry.
    pub fn nearest(&self, rgb: [u8; 3]) -> [u8; 3] {
        let distance = |c: &[u8; 3]| -> u32 {
            (0..3)
                .map(|i| {
                    let d = i32::from(c[i]) - i32::from(rgb[i]);
                    (d * d) as u32
                })
                .sum()
        };
        let mut best = self.colors[0];
        let mut best_distance = distance(&best);
        for color in &self.colors[1..] {
            let d = distance(color);
            if d < best_distance {
                best = *color;
                best_distance = d;
            }
        }
        best
    }

    /// Re-map every pixel of `image` in place.
    pub fn apply(&self, image: &mut RgbaImage) {
        let mut cache: HashMap<[u8; 3], [u8; 3]> = HashMap::new();
        for pixel in image.pixels_mut() {
            let [r, g, b, a] = pixel.0;
            if a < ALPHA_THRESHOLD {
                *pixel = Rgba([0, 0, 0, 0]);
                continue;
            }
            let mapped = *cache.entry([r, g, b]).or_insert_with(|| self.nearest([r, g, b]));
            *pixel = Rgba([mapped[0], mapped[1], mapped[2], 255]);
        }
    }
}

/// Atlas pages (relative to the asset root) for one colour kind.
pub fn atlas_pages(kind: ColorKind) -> Vec<String> {
    let mut pages = vec![format!("atlas/NotoEmoji{kind}.png")];
    pages.extend((2..=5).map(|i| format!("atlas/NotoEmoji{kind}{i}.png")));
    pages.push(format!("atlas-mid/NotoEmoji{kind}.png"));
    pages.push(format!("atlas-small/NotoEmoji{kind}.png"));
    pages
}

/// `.atlas` descriptors copied next to the re-mapped pages.
pub fn atlas_descriptors(kind: ColorKind) -> Vec<String> {
    vec![
        "atlas/NotoEmoji.atlas".to_string(),
        format!("atlas-mid/NotoEmoji{kind}.atlas"),
        format!("atlas-small/NotoEmoji{kind}.atlas"),
    ]
}

/// Inputs of an export run.
#[derive(Debug, Clone)]
pub struct PaletteExport {
    pub palette_dir: PathBuf,
    pub asset_root: PathBuf,
    pub kind: ColorKind,
}

/// Export every palette in `job.palette_dir`. Returns the palette count.
///
/// A missing atlas page or descriptor aborts the run.
pub fn export_palettes(job: &PaletteExport) -> Result<usize> {
    let palettes = list_pngs(&job.palette_dir)?;
    for palette_file in &palettes {
        let Some(palette_name) = palette_file.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        tracing::info!("working on palette {palette_name}");
        let palette = Palette::load(palette_file)?;
        let out_dir = job.palette_dir.join(palette_name);

        for page in atlas_pages(job.kind) {
            let src = job.asset_root.join(&page);
            let mut image = image::open(&src).map_err(|e| image_error(&src, e))?.to_rgba8();
            palette.apply(&mut image);
            let dest = out_dir.join(&page);
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent).map_err(|e| AtlasError::file(parent, e))?;
            }
            image.save(&dest).map_err(|e| image_error(&dest, e))?;
        }

        for descriptor in atlas_descriptors(job.kind) {
            let src = job.asset_root.join(&descriptor);
            if !copy_asset(&src, &out_dir.join(&descriptor))? {
                return Err(AtlasError::file(
                    src,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "atlas descriptor not found"),
                ));
            }
        }
    }
    Ok(palettes.len())
}
