//! Biome classification and the cached tile grid.
//!
//! Every cell samples the noise field once, at startup. The field never
//! changes, so the cached grid shows exactly what a per-frame repaint would.

use bevy::prelude::*;

use super::noise_field::NoiseField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Biome {
    Water,
    Forest,
    Grassland,
    Desert,
}

impl Biome {
    /// Band a normalized noise value in [0, 1]. Each threshold belongs to
    /// the band above it.
    pub fn classify(normalized: f64) -> Self {
        if normalized < 0.2 {
            Biome::Water
        } else if normalized < 0.4 {
            Biome::Forest
        } else if normalized < 0.6 {
            Biome::Grassland
        } else {
            Biome::Desert
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            Biome::Water => [0x00, 0x00, 0x80],
            Biome::Forest => [0x00, 0x64, 0x00],
            Biome::Grassland => [0x22, 0x8B, 0x22],
            Biome::Desert => [0xD2, 0xB4, 0x8C],
        }
    }
}

/// Map a raw noise sample from [-1, 1] onto [0, 1].
pub fn normalize(value: f64) -> f64 {
    (value + 1.0) / 2.0
}

/// Row-major biome per tile: `tiles[gy * width + gx]`.
#[derive(Resource, Debug, Clone)]
pub struct TerrainGrid {
    pub width: u32,
    pub height: u32,
    pub tile_size: f32,
    pub seed: u32,
    tiles: Vec<Biome>,
}

impl TerrainGrid {
    pub fn generate(
        field: &NoiseField,
        width: u32,
        height: u32,
        tile_size: f32,
        noise_scale: f64,
    ) -> Self {
        let mut tiles = Vec::with_capacity(width as usize * height as usize);
        for gy in 0..height {
            for gx in 0..width {
                let value = field.sample(gx as f64 * noise_scale, gy as f64 * noise_scale);
                tiles.push(Biome::classify(normalize(value)));
            }
        }
        Self {
            width,
            height,
            tile_size,
            seed: field.seed(),
            tiles,
        }
    }

    pub fn biome_at(&self, gx: u32, gy: u32) -> Option<Biome> {
        if gx >= self.width || gy >= self.height {
            return None;
        }
        let index = gy as usize * self.width as usize + gx as usize;
        self.tiles.get(index).copied()
    }

    /// Full extent of the painted map in canvas pixels.
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 * self.tile_size,
            self.height as f32 * self.tile_size,
        )
    }

    /// One opaque RGBA8 texel per tile, rows top to bottom.
    pub fn rgba_bytes(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.tiles.len() * 4);
        for biome in &self.tiles {
            let [r, g, b] = biome.rgb();
            data.extend_from_slice(&[r, g, b, 0xFF]);
        }
        data
    }

    pub fn count(&self, biome: Biome) -> usize {
        self.tiles.iter().filter(|&&b| b == biome).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_band_examples() {
        assert_eq!(Biome::classify(0.15), Biome::Water);
        assert_eq!(Biome::classify(0.35), Biome::Forest);
        assert_eq!(Biome::classify(0.55), Biome::Grassland);
        assert_eq!(Biome::classify(0.75), Biome::Desert);
    }

    #[test]
    fn test_classify_boundaries_belong_to_upper_band() {
        assert_eq!(Biome::classify(0.0), Biome::Water);
        assert_eq!(Biome::classify(0.2), Biome::Forest);
        assert_eq!(Biome::classify(0.4), Biome::Grassland);
        assert_eq!(Biome::classify(0.6), Biome::Desert);
        assert_eq!(Biome::classify(1.0), Biome::Desert);
        assert_eq!(Biome::classify(0.199_999), Biome::Water);
    }

    #[test]
    fn test_normalize_maps_noise_range() {
        assert_eq!(normalize(-1.0), 0.0);
        assert_eq!(normalize(0.0), 0.5);
        assert_eq!(normalize(1.0), 1.0);
    }

    #[test]
    fn test_biome_colors() {
        assert_eq!(Biome::Water.rgb(), [0x00, 0x00, 0x80]);
        assert_eq!(Biome::Forest.rgb(), [0x00, 0x64, 0x00]);
        assert_eq!(Biome::Grassland.rgb(), [0x22, 0x8B, 0x22]);
        assert_eq!(Biome::Desert.rgb(), [0xD2, 0xB4, 0x8C]);
    }

    #[test]
    fn test_grid_matches_direct_sampling() {
        let field = NoiseField::new(5);
        let grid = TerrainGrid::generate(&field, 40, 30, 10.0, 0.1);
        for gy in 0..30 {
            for gx in 0..40 {
                let expected =
                    Biome::classify(normalize(field.sample(gx as f64 * 0.1, gy as f64 * 0.1)));
                assert_eq!(grid.biome_at(gx, gy), Some(expected));
            }
        }
        assert_eq!(grid.biome_at(40, 0), None);
        assert_eq!(grid.biome_at(0, 30), None);
    }

    #[test]
    fn test_grid_is_reproducible_for_a_seed() {
        let a = TerrainGrid::generate(&NoiseField::new(11), 25, 25, 10.0, 0.1);
        let b = TerrainGrid::generate(&NoiseField::new(11), 25, 25, 10.0, 0.1);
        assert_eq!(a.rgba_bytes(), b.rgba_bytes());
    }

    #[test]
    fn test_rgba_bytes_layout() {
        let grid = TerrainGrid::generate(&NoiseField::new(3), 8, 4, 10.0, 0.1);
        let bytes = grid.rgba_bytes();
        assert_eq!(bytes.len(), 8 * 4 * 4);

        let total: usize = [Biome::Water, Biome::Forest, Biome::Grassland, Biome::Desert]
            .iter()
            .map(|&b| grid.count(b))
            .sum();
        assert_eq!(total, 32);

        // Texel for (gx=5, gy=2) sits at row 2, column 5.
        let i = (2 * 8 + 5) * 4;
        let [r, g, b] = grid.biome_at(5, 2).unwrap().rgb();
        assert_eq!(&bytes[i..i + 4], &[r, g, b, 0xFF]);
    }

    #[test]
    fn test_pixel_size() {
        let grid = TerrainGrid::generate(&NoiseField::new(3), 4, 2, 10.0, 0.1);
        assert_eq!(grid.pixel_size(), Vec2::new(40.0, 20.0));
    }
}
