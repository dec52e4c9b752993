//! Dominant color extraction
//!
//! The logo is shrunk to a fixed 40×40 grid so the cost does not depend on the
//! source resolution, background-ish pixels are discarded and the remaining
//! samples are clustered with a few rounds of Lloyd's algorithm in RGB space.

use image::imageops::FilterType;
use image::RgbaImage;

use crate::model::{Color, Palette};

use super::random::RandomSource;

/// Side of the square the image is resized to before sampling
pub const SAMPLE_GRID: u32 = 40;

/// Default number of clusters
pub const DEFAULT_CLUSTERS: usize = 3;

/// Default maximum number of samples fed to k-means
pub const DEFAULT_SAMPLE_LIMIT: usize = 1500;

/// Lloyd iterations before giving up on convergence
pub const MAX_ITERATIONS: usize = 8;

/// A k-means centroid and how many samples it attracted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cluster {
    pub centroid: Color,
    pub count: usize,
}

/// Extraction parameters
#[derive(Debug, Clone, Copy)]
pub struct ColorExtractor {
    pub clusters: usize,
    pub sample_limit: usize,
}

impl Default for ColorExtractor {
    fn default() -> Self {
        Self {
            clusters: DEFAULT_CLUSTERS,
            sample_limit: DEFAULT_SAMPLE_LIMIT,
        }
    }
}

impl ColorExtractor {
    /// Dominant colors, most frequent first. `None` when the image cannot be
    /// decoded or has no usable pixel.
    pub fn extract<R: RandomSource + ?Sized>(&self, image_bytes: &[u8], rng: &mut R) -> Option<Vec<Color>> {
        let decoded = match image::load_from_memory(image_bytes) {
            Ok(img) => img,
            Err(e) => {
                log::warn!("Color extraction skipped, cannot decode logo: {}", e);
                return None;
            }
        };

        let grid = decoded
            .resize_exact(SAMPLE_GRID, SAMPLE_GRID, FilterType::Triangle)
            .to_rgba8();

        let samples = collect_samples(&grid, self.sample_limit);
        if samples.is_empty() {
            log::debug!("Color extraction found no opaque non-white pixel");
            return None;
        }

        let clusters = kmeans(&samples, self.clusters, rng);
        log::debug!(
            "Extracted {} clusters from {} samples: {:?}",
            clusters.len(),
            samples.len(),
            clusters
        );

        if clusters.is_empty() {
            return None;
        }
        Some(clusters.into_iter().map(|c| c.centroid).collect())
    }

    /// Primary/accent pair from the logo
    pub fn palette<R: RandomSource + ?Sized>(&self, image_bytes: &[u8], rng: &mut R) -> Option<Palette> {
        self.extract(image_bytes, rng)
            .and_then(|colors| palette_from_colors(&colors))
    }
}

/// Convenience wrapper with explicit parameters
pub fn extract_palette<R: RandomSource + ?Sized>(
    image_bytes: &[u8],
    clusters: usize,
    sample_limit: usize,
    rng: &mut R,
) -> Option<Vec<Color>> {
    ColorExtractor {
        clusters,
        sample_limit,
    }
    .extract(image_bytes, rng)
}

/// First color is the primary; the second (or the lightened primary) the accent
pub fn palette_from_colors(colors: &[Color]) -> Option<Palette> {
    match colors {
        [] => None,
        [primary] => Some(Palette::from_primary(*primary)),
        [primary, accent, ..] => Some(Palette::new(*primary, *accent)),
    }
}

/// Gather opaque, non near-white pixels column by column, thinned out with a
/// fixed stride when there are more than `sample_limit` of them. A limit of
/// zero yields no sample.
pub fn collect_samples(image: &RgbaImage, sample_limit: usize) -> Vec<Color> {
    if sample_limit == 0 {
        return Vec::new();
    }
    let (width, height) = image.dimensions();
    let mut pixels = Vec::with_capacity((width * height) as usize);

    for x in 0..width {
        for y in 0..height {
            let p = image.get_pixel(x, y);
            if p[3] == 0 {
                continue;
            }
            let color = Color::new(p[0], p[1], p[2]);
            if color.is_near_white() {
                continue;
            }
            pixels.push(color);
        }
    }

    if pixels.len() <= sample_limit {
        return pixels;
    }

    let step = (pixels.len() / sample_limit).max(1);
    pixels
        .into_iter()
        .step_by(step)
        .take(sample_limit)
        .collect()
}

/// Cluster `samples` into at most `k` groups, sorted by descending size
pub fn kmeans<R: RandomSource + ?Sized>(samples: &[Color], k: usize, rng: &mut R) -> Vec<Cluster> {
    if samples.is_empty() || k == 0 {
        return Vec::new();
    }

    let mut centroids = seed_centroids(samples, k, rng);

    for iteration in 0..MAX_ITERATIONS {
        let mut sums = vec![[0u64; 3]; centroids.len()];
        let mut counts = vec![0u64; centroids.len()];

        for &sample in samples {
            let best = nearest_centroid(&centroids, sample);
            sums[best][0] += sample.r as u64;
            sums[best][1] += sample.g as u64;
            sums[best][2] += sample.b as u64;
            counts[best] += 1;
        }

        let mut moved = false;
        for (c, centroid) in centroids.iter_mut().enumerate() {
            let count = counts[c];
            if count == 0 {
                continue;
            }
            let next = Color::new(
                rounded_mean(sums[c][0], count),
                rounded_mean(sums[c][1], count),
                rounded_mean(sums[c][2], count),
            );
            if next != *centroid {
                *centroid = next;
                moved = true;
            }
        }

        if !moved {
            log::trace!("k-means converged after {} iterations", iteration + 1);
            break;
        }
    }

    // Recount with the final centroids; the last training pass may predate the
    // final move when the iteration cap was hit.
    let mut counts = vec![0usize; centroids.len()];
    for &sample in samples {
        counts[nearest_centroid(&centroids, sample)] += 1;
    }

    let mut clusters: Vec<Cluster> = centroids
        .into_iter()
        .zip(counts)
        .map(|(centroid, count)| Cluster { centroid, count })
        .filter(|c| c.count > 0)
        .collect();
    clusters.sort_by(|a, b| b.count.cmp(&a.count));
    clusters
}

/// Pick up to `k` distinct sample positions (partial Fisher-Yates)
fn seed_centroids<R: RandomSource + ?Sized>(samples: &[Color], k: usize, rng: &mut R) -> Vec<Color> {
    let mut indices: Vec<usize> = (0..samples.len()).collect();
    let take = k.min(samples.len());

    for i in 0..take {
        let j = i + rng.next_below(samples.len() - i);
        indices.swap(i, j);
    }

    indices[..take].iter().map(|&i| samples[i]).collect()
}

/// Index of the closest centroid; ties go to the lowest index
fn nearest_centroid(centroids: &[Color], sample: Color) -> usize {
    let mut best = 0;
    let mut best_dist = u32::MAX;
    for (i, centroid) in centroids.iter().enumerate() {
        let d = sample.distance_sq(*centroid);
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }
    best
}

/// Integer mean rounded half up
fn rounded_mean(sum: u64, count: u64) -> u8 {
    ((2 * sum + count) / (2 * count)).min(255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::random::seeded;
    use image::{DynamicImage, ImageFormat, Rgba};
    use std::io::Cursor;

    fn encode_png(img: RgbaImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn test_all_white_image_yields_none() {
        let img = RgbaImage::from_pixel(64, 64, Rgba([250, 250, 250, 255]));
        let mut rng = seeded(1);
        assert_eq!(ColorExtractor::default().extract(&encode_png(img), &mut rng), None);
    }

    #[test]
    fn test_transparent_image_yields_none() {
        let img = RgbaImage::from_pixel(16, 16, Rgba([10, 20, 30, 0]));
        let mut rng = seeded(1);
        assert_eq!(ColorExtractor::default().extract(&encode_png(img), &mut rng), None);
    }

    #[test]
    fn test_garbage_bytes_yield_none() {
        let mut rng = seeded(1);
        assert_eq!(
            ColorExtractor::default().extract(b"definitely not an image", &mut rng),
            None
        );
    }

    #[test]
    fn test_sample_cap_is_respected() {
        let img = RgbaImage::from_pixel(40, 40, Rgba([200, 10, 10, 255]));
        let samples = collect_samples(&img, 1500);
        assert!(samples.len() <= 1500);
        assert_eq!(samples.len(), 1500);

        let small = collect_samples(&img, 100);
        assert_eq!(small.len(), 100);
    }

    #[test]
    fn test_samples_skip_near_white_and_transparent() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        img.put_pixel(0, 0, Rgba([10, 10, 10, 255]));
        img.put_pixel(1, 0, Rgba([10, 10, 10, 0]));
        img.put_pixel(2, 0, Rgba([241, 241, 200, 255]));
        let samples = collect_samples(&img, 1500);
        assert_eq!(
            samples,
            vec![Color::new(10, 10, 10), Color::new(241, 241, 200)]
        );
    }

    #[test]
    fn test_larger_region_comes_first() {
        // Left three quarters red, right quarter blue
        let img = RgbaImage::from_fn(80, 80, |x, _| {
            if x < 60 {
                Rgba([200, 20, 20, 255])
            } else {
                Rgba([20, 20, 200, 255])
            }
        });
        let bytes = encode_png(img);

        for seed in 0..8 {
            let mut rng = seeded(seed);
            let colors = extract_palette(&bytes, 2, DEFAULT_SAMPLE_LIMIT, &mut rng).unwrap();
            let first = colors[0];
            assert!(first.r > first.b, "seed {}: {:?}", seed, colors);
        }
    }

    #[test]
    fn test_kmeans_counts_and_order() {
        // k equals the sample count, so every sample seeds a centroid
        let mut samples = vec![Color::new(0, 0, 0); 6];
        samples.extend(vec![Color::new(255, 0, 0); 2]);
        for seed in 0..4 {
            let clusters = kmeans(&samples, samples.len(), &mut seeded(seed));
            assert_eq!(
                clusters,
                vec![
                    Cluster { centroid: Color::new(0, 0, 0), count: 6 },
                    Cluster { centroid: Color::new(255, 0, 0), count: 2 },
                ]
            );
        }
    }

    #[test]
    fn test_zero_sample_limit_yields_none() {
        let img = RgbaImage::from_pixel(16, 16, Rgba([200, 10, 10, 255]));
        assert!(collect_samples(&img, 0).is_empty());
        assert_eq!(extract_palette(&encode_png(img), 3, 0, &mut seeded(1)), None);
    }

    #[test]
    fn test_kmeans_with_fewer_samples_than_k() {
        let samples = vec![Color::new(1, 2, 3)];
        let mut rng = seeded(9);
        let clusters = kmeans(&samples, 3, &mut rng);
        assert_eq!(clusters, vec![Cluster { centroid: Color::new(1, 2, 3), count: 1 }]);
    }

    #[test]
    fn test_pinned_seed_is_reproducible() {
        let img = RgbaImage::from_fn(40, 40, |x, y| Rgba([(x * 6) as u8, (y * 6) as u8, 90, 255]));
        let bytes = encode_png(img);
        let a = extract_palette(&bytes, 3, DEFAULT_SAMPLE_LIMIT, &mut seeded(11));
        let b = extract_palette(&bytes, 3, DEFAULT_SAMPLE_LIMIT, &mut seeded(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_palette_from_single_color_lightens() {
        let palette = palette_from_colors(&[Color::new(10, 20, 30)]).unwrap();
        assert_eq!(palette.accent, Color::new(50, 60, 70));
        assert_eq!(palette_from_colors(&[]), None);
    }

    #[test]
    fn test_rounded_mean_rounds_half_up() {
        assert_eq!(rounded_mean(3, 2), 2);
        assert_eq!(rounded_mean(5, 4), 1);
        assert_eq!(rounded_mean(6, 4), 2);
    }
}
