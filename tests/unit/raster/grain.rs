//! Tests for the grain finishing pass

#[cfg(test)]
mod tests {
    use constructivist::ArtError;
    use constructivist::raster::grain::{GrainSource, apply_grain, finish};
    use image::{Rgba, RgbaImage};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grey(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([128, 128, 128, 200]))
    }

    // Tests offsets stay within the amplitude and leave alpha untouched
    #[test]
    fn test_apply_grain_bounds() {
        let mut image = grey(64, 64);
        apply_grain(&mut image, 5.0, &mut StdRng::seed_from_u64(7));

        for pixel in image.pixels() {
            let [r, g, b, a] = pixel.0;
            assert!((123..=133).contains(&r), "red {r}");
            assert_eq!(r, g);
            assert_eq!(g, b);
            assert_eq!(a, 200);
        }
        assert!(image.pixels().any(|p| p.0[0] != 128));
    }

    // Tests channels saturate instead of wrapping
    #[test]
    fn test_apply_grain_saturates() {
        let mut image = RgbaImage::from_pixel(32, 32, Rgba([0, 255, 3, 255]));
        apply_grain(&mut image, 40.0, &mut StdRng::seed_from_u64(11));

        assert!(image.pixels().any(|p| p.0[0] == 0));
        assert!(image.pixels().any(|p| p.0[1] == 255));
        assert!(image.pixels().all(|p| p.0[1] >= 255 - 40));
    }

    // Tests zero amplitude is the identity
    #[test]
    fn test_apply_grain_zero_amplitude() {
        let mut image = grey(16, 16);
        apply_grain(&mut image, 0.0, &mut StdRng::seed_from_u64(1));
        assert_eq!(image, grey(16, 16));
    }

    // Tests seeded grain reproduces exactly and differs between seeds
    #[test]
    fn test_finish_seeded() {
        let mut first = grey(32, 32);
        let mut second = grey(32, 32);
        let mut other = grey(32, 32);
        finish(&mut first, GrainSource::Seeded, "abc", 5.0);
        finish(&mut second, GrainSource::Seeded, "abc", 5.0);
        finish(&mut other, GrainSource::Seeded, "xyz", 5.0);

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    // Tests entropy grain differs between calls and disabled grain does nothing
    #[test]
    fn test_finish_entropy_and_disabled() {
        let mut first = grey(64, 64);
        let mut second = grey(64, 64);
        finish(&mut first, GrainSource::Entropy, "abc", 5.0);
        finish(&mut second, GrainSource::Entropy, "abc", 5.0);
        assert_ne!(first, second);

        let mut untouched = grey(8, 8);
        finish(&mut untouched, GrainSource::Disabled, "abc", 5.0);
        assert_eq!(untouched, grey(8, 8));
    }

    // Tests source names parse and display
    #[test]
    fn test_grain_source_parsing() {
        assert_eq!("entropy".parse::<GrainSource>().unwrap(), GrainSource::Entropy);
        assert_eq!("Random".parse::<GrainSource>().unwrap(), GrainSource::Entropy);
        assert_eq!(" seeded ".parse::<GrainSource>().unwrap(), GrainSource::Seeded);
        assert_eq!("none".parse::<GrainSource>().unwrap(), GrainSource::Disabled);

        for source in [GrainSource::Entropy, GrainSource::Seeded, GrainSource::Disabled] {
            assert_eq!(source.to_string().parse::<GrainSource>().unwrap(), source);
        }

        assert!(matches!(
            "loud".parse::<GrainSource>(),
            Err(ArtError::InvalidParameter { parameter: "grain", .. })
        ));
    }
}
