use graykit::{blur, mean_filtered, Counters, PixelBuffer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Straightforward reference: every candidate in the nominal window is
/// tested against the image bounds one by one.
fn reference_blur(image: &PixelBuffer, dx: usize, dy: usize) -> Vec<u8> {
    let (w, h) = (image.width() as i64, image.height() as i64);
    let (dx, dy) = (dx as i64, dy as i64);
    let mut out = Vec::with_capacity(image.len());
    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0f64;
            let mut count = 0.0f64;
            for k in (x - dx).max(0)..=x + dx {
                for l in (y - dy).max(0)..=y + dy {
                    if k < w && l < h {
                        sum += f64::from(image.as_slice()[(l * w + k) as usize]);
                        count += 1.0;
                    }
                }
            }
            let mean = (sum / count).round().min(f64::from(image.maxval()));
            out.push(mean as u8);
        }
    }
    out
}

#[test]
fn uniform_image_is_unchanged() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20 {
        let w = rng.random_range(1..=9);
        let h = rng.random_range(1..=9);
        let v = rng.random_range(0..=200u8);
        let mut img = PixelBuffer::from_vec(vec![v; w * h], w, h, 200).unwrap();
        let dx = rng.random_range(0..=4);
        let dy = rng.random_range(0..=4);
        blur(&mut img, dx, dy, &Counters::new()).unwrap();
        assert!(img.as_slice().iter().all(|&p| p == v));
    }
}

#[test]
fn impulse_uses_shrunken_border_windows() {
    #[rustfmt::skip]
    let mut img = PixelBuffer::from_vec(vec![
        0, 0, 0,
        0, 255, 0,
        0, 0, 0,
    ], 3, 3, 255).unwrap();
    blur(&mut img, 1, 1, &Counters::new()).unwrap();
    // Corners average 4 pixels, edges 6, the centre 9.
    #[rustfmt::skip]
    let expected = [
        64, 43, 64,
        43, 28, 43,
        64, 43, 64,
    ];
    assert_eq!(img.as_slice(), &expected);
}

#[test]
fn blur_counts_reads_writes_and_copy_back() {
    let mut img = PixelBuffer::new(3, 3, 255).unwrap();
    let counters = Counters::new();
    blur(&mut img, 1, 1, &counters).unwrap();
    // Window reads 4*4 + 4*6 + 9, nine stores, then one read and one
    // store per pixel when copying back.
    assert_eq!(counters.pixel_accesses(), 49 + 9 + 18);
    assert_eq!(counters.comparisons(), 0);
}

#[test]
fn windows_read_only_the_original() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..30 {
        let w = rng.random_range(1..=12);
        let h = rng.random_range(1..=12);
        let data = (0..w * h).map(|_| rng.random_range(0..=255u8)).collect();
        let img = PixelBuffer::from_vec(data, w, h, 255).unwrap();
        let dx = rng.random_range(0..=3);
        let dy = rng.random_range(0..=3);

        let expected = reference_blur(&img, dx, dy);
        let filtered = mean_filtered(&img, dx, dy, &Counters::new()).unwrap();
        assert_eq!(filtered.as_slice(), expected.as_slice(), "{w}x{h} dx={dx} dy={dy}");

        let mut in_place = img.clone();
        blur(&mut in_place, dx, dy, &Counters::new()).unwrap();
        assert_eq!(in_place, filtered);
    }
}

#[test]
fn zero_radius_is_identity() {
    let img = PixelBuffer::from_vec(vec![3, 1, 4, 1, 5, 9], 3, 2, 9).unwrap();
    let out = mean_filtered(&img, 0, 0, &Counters::new()).unwrap();
    assert_eq!(out, img);
}

#[test]
fn horizontal_only_radius() {
    let mut img = PixelBuffer::from_vec(vec![0, 30, 60, 90, 0, 0, 0, 0], 4, 2, 255).unwrap();
    blur(&mut img, 1, 0, &Counters::new()).unwrap();
    assert_eq!(img.as_slice(), &[15u8, 30, 60, 75, 0, 0, 0, 0]);
}

#[test]
fn output_keeps_maxval_and_source_is_untouched() {
    let img = PixelBuffer::from_vec(vec![10, 0, 10, 0], 2, 2, 10).unwrap();
    let out = mean_filtered(&img, 1, 1, &Counters::new()).unwrap();
    assert_eq!(out.maxval(), 10);
    assert_eq!(out.as_slice(), &[5u8, 5, 5, 5]);
    assert_eq!(img.as_slice(), &[10u8, 0, 10, 0]);
}
