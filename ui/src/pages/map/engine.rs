//! Property map: search filtering and a static Web Mercator tile layout.

use std::f64::consts::PI;

use rand::Rng;

use crate::catalog::{PropertyRecord, SelectOption, PROPERTIES};
use crate::config::{GeoPoint, MapSettings};
use crate::i18n::Language;
use crate::t;

pub const TILE_SIZE: f64 = 256.0;

/// Decorative market trend shown in a marker popup. Not derived from data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendBucket {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendBucket {
    pub const ALL: [TrendBucket; 3] = [
        TrendBucket::Increasing,
        TrendBucket::Decreasing,
        TrendBucket::Stable,
    ];

    /// Uniform pick over the three buckets.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn label(self, lang: Language) -> String {
        match self {
            TrendBucket::Increasing => t!(lang, "map-trend-increasing"),
            TrendBucket::Decreasing => t!(lang, "map-trend-decreasing"),
            TrendBucket::Stable => t!(lang, "map-trend-stable"),
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            TrendBucket::Increasing => "up",
            TrendBucket::Decreasing => "down",
            TrendBucket::Stable => "flat",
        }
    }
}

/// Records whose name or localized type label contains `query`, ignoring case.
/// An empty query keeps every record.
pub fn filter_records(query: &str, lang: Language) -> Vec<&'static PropertyRecord> {
    let needle = query.trim().to_lowercase();
    PROPERTIES
        .iter()
        .filter(|record| {
            needle.is_empty()
                || record.name().to_lowercase().contains(&needle)
                || record.kind.label(lang).to_lowercase().contains(&needle)
        })
        .collect()
}

/// Pixel position in the Web Mercator world at a given zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

pub fn project(point: GeoPoint, zoom: u8) -> WorldPoint {
    let world = world_size(zoom);
    let lat = point.lat.clamp(-85.051_128, 85.051_128).to_radians();
    WorldPoint {
        x: (point.lon + 180.0) / 360.0 * world,
        y: (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * world,
    }
}

fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1u32 << zoom.min(19))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub url: String,
    /// Offset of the tile's top-left corner inside the viewport, in pixels.
    pub left: i64,
    pub top: i64,
}

/// Expands `{s}`, `{z}`, `{x}` and `{y}` in a slippy-map URL template.
pub fn tile_url(template: &str, subdomain: &str, z: u8, x: u32, y: u32) -> String {
    template
        .replace("{s}", subdomain)
        .replace("{z}", &z.to_string())
        .replace("{x}", &x.to_string())
        .replace("{y}", &y.to_string())
}

/// A fixed-size window onto the map, centred on a point.
#[derive(Debug, Clone, PartialEq)]
pub struct MapViewport {
    pub width: u32,
    pub height: u32,
    pub zoom: u8,
    origin: WorldPoint,
}

impl MapViewport {
    pub fn new(center: GeoPoint, zoom: u8, width: u32, height: u32) -> Self {
        let middle = project(center, zoom);
        Self {
            width,
            height,
            zoom,
            origin: WorldPoint {
                x: middle.x - f64::from(width) / 2.0,
                y: middle.y - f64::from(height) / 2.0,
            },
        }
    }

    pub fn from_settings(settings: &MapSettings, width: u32, height: u32) -> Self {
        Self::new(settings.center, settings.zoom, width, height)
    }

    /// Viewport pixel offset of a coordinate. May fall outside the viewport.
    pub fn locate(&self, point: GeoPoint) -> (f64, f64) {
        let world = project(point, self.zoom);
        (world.x - self.origin.x, world.y - self.origin.y)
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        let (x, y) = self.locate(point);
        (0.0..=f64::from(self.width)).contains(&x) && (0.0..=f64::from(self.height)).contains(&y)
    }

    /// Tiles covering the viewport. Columns wrap around the antimeridian and
    /// rows outside the world are skipped.
    pub fn tiles(&self, settings: &MapSettings) -> Vec<Tile> {
        let per_axis = 1i64 << self.zoom.min(19);
        let first_col = (self.origin.x / TILE_SIZE).floor() as i64;
        let last_col = ((self.origin.x + f64::from(self.width)) / TILE_SIZE).ceil() as i64;
        let first_row = (self.origin.y / TILE_SIZE).floor() as i64;
        let last_row = ((self.origin.y + f64::from(self.height)) / TILE_SIZE).ceil() as i64;

        let mut tiles = Vec::new();
        for row in first_row.max(0)..last_row.min(per_axis) {
            for col in first_col..last_col {
                let x = col.rem_euclid(per_axis) as u32;
                let y = row as u32;
                let subdomain = subdomain_for(&settings.subdomains, x, y);
                tiles.push(Tile {
                    url: tile_url(&settings.tile_url, subdomain, self.zoom, x, y),
                    left: (col as f64 * TILE_SIZE - self.origin.x).round() as i64,
                    top: (row as f64 * TILE_SIZE - self.origin.y).round() as i64,
                });
            }
        }
        tiles
    }
}

fn subdomain_for(subdomains: &[String], x: u32, y: u32) -> &str {
    if subdomains.is_empty() {
        return "";
    }
    let index = (x as usize + y as usize) % subdomains.len();
    &subdomains[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ListingKind;
    use crate::config::AppConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn settings() -> MapSettings {
        AppConfig::embedded().map
    }

    #[test]
    fn empty_query_keeps_all_records() {
        assert_eq!(filter_records("", Language::En).len(), PROPERTIES.len());
        assert_eq!(filter_records("   ", Language::Th).len(), PROPERTIES.len());
    }

    #[test]
    fn filter_matches_name_case_insensitively() {
        let hits = filter_records("bangkok", Language::En);
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|r| r.location == "Bangkok"));

        let samui = filter_records("KOH", Language::En);
        assert_eq!(samui.len(), 1);
        assert_eq!(samui[0].id, 7);
    }

    #[test]
    fn filter_matches_localized_type_label() {
        let condos = filter_records("คอนโด", Language::Th);
        assert_eq!(condos.len(), 3);
        assert!(condos.iter().all(|r| r.kind == ListingKind::Condo));

        // The Thai label is not searchable while English is active.
        assert!(filter_records("คอนโด", Language::En).is_empty());
    }

    #[test]
    fn unmatched_query_yields_nothing() {
        assert!(filter_records("tokyo", Language::En).is_empty());
    }

    #[test]
    fn projection_places_origin_at_world_centre() {
        let centre = project(GeoPoint { lat: 0.0, lon: 0.0 }, 1);
        assert!((centre.x - 256.0).abs() < 1e-9);
        assert!((centre.y - 256.0).abs() < 1e-9);
    }

    #[test]
    fn viewport_centre_maps_to_middle_pixel() {
        let cfg = settings();
        let viewport = MapViewport::from_settings(&cfg, 800, 500);
        let (x, y) = viewport.locate(cfg.center);
        assert!((x - 400.0).abs() < 1e-6);
        assert!((y - 250.0).abs() < 1e-6);
    }

    #[test]
    fn bangkok_listings_sit_inside_default_view() {
        let cfg = settings();
        let viewport = MapViewport::from_settings(&cfg, 800, 500);
        for record in PROPERTIES.iter().filter(|r| r.location == "Bangkok") {
            assert!(viewport.contains(GeoPoint { lat: record.lat, lon: record.lon }));
        }
    }

    #[test]
    fn tiles_cover_viewport_and_expand_template() {
        let cfg = settings();
        let viewport = MapViewport::from_settings(&cfg, 800, 500);
        let tiles = viewport.tiles(&cfg);
        assert!(!tiles.is_empty());
        assert!(tiles.iter().any(|t| t.left <= 0 && t.top <= 0));
        assert!(tiles.iter().any(|t| t.left + 256 >= 800 && t.top + 256 >= 500));
        for tile in &tiles {
            assert!(tile.url.starts_with("https://"));
            assert!(!tile.url.contains('{'));
        }
    }

    #[test]
    fn rows_outside_the_world_are_skipped() {
        let cfg = settings();
        let viewport = MapViewport::new(GeoPoint { lat: 0.0, lon: 0.0 }, 0, 800, 800);
        let tiles = viewport.tiles(&cfg);
        assert!(tiles.iter().all(|t| t.url.contains("/0/0/0.png")));
        assert!(!tiles.is_empty());
    }

    #[test]
    fn tile_url_substitutes_placeholders() {
        let url = tile_url("https://{s}.tile.example.org/{z}/{x}/{y}.png", "b", 6, 50, 29);
        assert_eq!(url, "https://b.tile.example.org/6/50/29.png");
    }

    #[test]
    fn subdomains_rotate_with_tile_position() {
        let subs = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(subdomain_for(&subs, 0, 0), "a");
        assert_eq!(subdomain_for(&subs, 1, 0), "b");
        assert_eq!(subdomain_for(&subs, 1, 1), "c");
        assert_eq!(subdomain_for(&[], 4, 4), "");
    }

    #[test]
    fn trend_buckets_all_occur() {
        let mut rng = StdRng::seed_from_u64(9);
        let draws: Vec<_> = (0..200).map(|_| TrendBucket::random(&mut rng)).collect();
        for bucket in [TrendBucket::Increasing, TrendBucket::Decreasing, TrendBucket::Stable] {
            assert!(draws.contains(&bucket), "{bucket:?} never drawn");
        }
        assert_eq!(TrendBucket::Stable.label(Language::Th), "คงที่");
    }

    #[test]
    fn trend_buckets_are_drawn_uniformly() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0usize; 3];
        for _ in 0..30_000 {
            let bucket = TrendBucket::random(&mut rng);
            let index = TrendBucket::ALL.iter().position(|b| *b == bucket).unwrap();
            counts[index] += 1;
        }
        for (bucket, count) in TrendBucket::ALL.iter().zip(counts) {
            assert!(
                (9_400..10_600).contains(&count),
                "{bucket:?} drawn {count} times out of 30000"
            );
        }
    }
}
