use retint_core::color::ROUND_TRIP_TOLERANCE;
use retint_core::transform::{
    grayscale, invert, rotate_clockwise, sepia, set_hue, set_lightness, set_saturation,
    stylize_bw,
};
use retint_core::{ImageError, PixelGrid, PreloadedReferences, Rgb, decorative_filter};

/// Deterministic pseudo-random test image (xorshift), so failures reproduce.
fn noise_image(width: u32, height: u32, seed: u32) -> PixelGrid {
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state & 0xff) as u8
    };
    PixelGrid::from_fn(width, height, |_, _| Rgb::new(next(), next(), next()))
        .expect("non-empty test image")
}

fn sample_images() -> Vec<PixelGrid> {
    vec![
        noise_image(1, 1, 7),
        noise_image(2, 3, 11),
        noise_image(7, 4, 42),
        noise_image(16, 9, 1234),
    ]
}

#[test]
fn invert_is_an_involution() {
    for image in sample_images() {
        let mut twice = image.clone();
        invert(&mut twice);
        invert(&mut twice);
        assert_eq!(twice, image);
    }
}

#[test]
fn grayscale_equalizes_channels_and_is_idempotent() {
    for image in sample_images() {
        let mut once = image.clone();
        grayscale(&mut once);
        assert!(once.pixels().iter().all(|px| px.is_gray()));

        let mut twice = once.clone();
        grayscale(&mut twice);
        assert_eq!(twice, once);
    }
}

#[test]
fn rotate_four_times_is_identity() {
    for image in sample_images() {
        let mut rotated = image.clone();
        for _ in 0..4 {
            rotated = rotate_clockwise(&rotated).unwrap();
        }
        assert_eq!(rotated, image);
    }
}

#[test]
fn rotate_swaps_width_and_height() {
    for image in sample_images() {
        let rotated = rotate_clockwise(&image).unwrap();
        assert_eq!(rotated.width(), image.height());
        assert_eq!(rotated.height(), image.width());
    }
}

#[test]
fn stylize_bw_outputs_only_black_or_white() {
    for image in sample_images() {
        let mut bw = image.clone();
        stylize_bw(&mut bw);
        assert!(
            bw.pixels()
                .iter()
                .all(|&px| px == Rgb::BLACK || px == Rgb::WHITE)
        );
        // At least the threshold pixel itself is white.
        assert!(bw.pixels().contains(&Rgb::WHITE));
    }
}

#[test]
fn sepia_never_panics_on_extremes() {
    let mut image = PixelGrid::from_pixels(
        3,
        1,
        vec![Rgb::BLACK, Rgb::WHITE, Rgb::new(255, 0, 255)],
    )
    .unwrap();
    sepia(&mut image);
    assert_eq!(image.pixels()[0], Rgb::BLACK);
}

#[test]
fn hsl_round_trip_within_tolerance() {
    for image in sample_images() {
        for &px in image.pixels() {
            let back = px.to_hsl().to_rgb();
            for (a, e) in back.channels().into_iter().zip(px.channels()) {
                assert!(a.abs_diff(e) <= ROUND_TRIP_TOLERANCE, "{px:?} -> {back:?}");
            }
        }
    }
}

#[test]
fn hsl_matches_palette_reference() {
    use palette::{FromColor, Hsl, Srgb};

    for image in sample_images() {
        for &px in image.pixels() {
            let ours = px.to_hsl();
            let reference = Hsl::from_color(Srgb::new(
                f32::from(px.red) / 255.0,
                f32::from(px.green) / 255.0,
                f32::from(px.blue) / 255.0,
            ));

            assert!((ours.saturation() - f64::from(reference.saturation)).abs() < 1e-3);
            assert!((ours.lightness() - f64::from(reference.lightness)).abs() < 1e-3);
            if ours.saturation() > 1e-3 {
                let theirs = f64::from(reference.hue.into_positive_degrees());
                let diff = (ours.hue() - theirs).abs();
                assert!(diff.min(360.0 - diff) < 0.1, "{px:?}: {} vs {theirs}", ours.hue());
            }
        }
    }
}

#[test]
fn set_hue_on_gray_stays_achromatic() {
    let mut image = PixelGrid::from_fn(8, 1, |x, _| Rgb::gray((x * 32) as u8)).unwrap();
    let original = image.clone();
    set_hue(&mut image, 0.0).unwrap();
    assert_eq!(image, original);
    for &px in image.pixels() {
        let hsl = px.to_hsl();
        assert_eq!(hsl.hue(), 0.0);
        assert_eq!(hsl.saturation(), 0.0);
    }
}

#[test]
fn hsl_setters_apply_uniformly() {
    let mut image = noise_image(6, 6, 99);
    set_saturation(&mut image, 0.0).unwrap();
    assert!(image.pixels().iter().all(|px| px.is_gray()));

    set_lightness(&mut image, 1.0).unwrap();
    assert!(image.pixels().iter().all(|&px| px == Rgb::WHITE));
}

#[test]
fn grayscale_example_from_primaries() {
    let mut image = PixelGrid::from_pixels(
        2,
        2,
        vec![
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 255),
        ],
    )
    .unwrap();
    grayscale(&mut image);
    assert_eq!(image.get(0, 0).unwrap(), Rgb::gray(85));
    assert_eq!(image.get(1, 0).unwrap(), Rgb::gray(85));
    assert_eq!(image.get(0, 1).unwrap(), Rgb::gray(85));
    assert_eq!(image.get(1, 1).unwrap(), Rgb::gray(255));
}

#[test]
fn decorative_filter_rejects_mismatched_references() {
    let mut image = noise_image(4, 4, 5);
    let references = PreloadedReferences {
        halo: noise_image(4, 3, 6),
        grain: noise_image(4, 4, 7),
    };
    let before = image.clone();
    let err = decorative_filter(&mut image, &references).unwrap_err();
    assert!(matches!(err, ImageError::InvalidDimensions(_)));
    assert_eq!(image, before);
}

#[test]
fn decorative_filter_is_deterministic() {
    let references = PreloadedReferences {
        halo: noise_image(5, 5, 21),
        grain: noise_image(5, 5, 22),
    };
    let mut a = noise_image(5, 5, 23);
    let mut b = a.clone();
    decorative_filter(&mut a, &references).unwrap();
    decorative_filter(&mut b, &references).unwrap();
    assert_eq!(a, b);
}
