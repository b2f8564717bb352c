//! Tests for palette derivation and the contrast branch

#[cfg(test)]
mod tests {
    use constructivist::composition::palette::Palette;
    use constructivist::math::sequence::SequenceGenerator;
    use image::Rgba;

    // Tests the light palette tint for a known grey and tone shift
    #[test]
    fn test_light_palette_tint() {
        let palette = Palette::light(240, 3);
        assert_eq!(palette.background, Rgba([243, 240, 237, 255]));
        assert_eq!(palette.primary, Rgba([0x1a, 0x1a, 0x1a, 255]));
        assert_eq!(palette.secondary, Rgba([123, 120, 117, 255]));
        assert_eq!(palette.accent, Rgba([203, 200, 197, 255]));
        assert_eq!(palette.grid, Rgba([0, 0, 0, 26]));
        assert!(!palette.is_dark());
    }

    // Tests the fixed dark palette
    #[test]
    fn test_dark_palette_constant() {
        assert_eq!(Palette::DARK.background, Rgba([0x22, 0x22, 0x22, 255]));
        assert_eq!(Palette::DARK.accent, Rgba([255, 255, 255, 255]));
        assert_eq!(Palette::DARK.grid, Rgba([255, 255, 255, 26]));
        assert!(Palette::DARK.is_dark());
    }

    // Tests that high contrast always yields the dark palette and low contrast never does
    #[test]
    fn test_contrast_branching() {
        for i in 0..200 {
            let seed = format!("seed-{i}");

            let mut rng = SequenceGenerator::new(&seed);
            assert!(Palette::derive(&mut rng, 0.9).is_dark());

            let mut rng = SequenceGenerator::new(&seed);
            assert!(!Palette::derive(&mut rng, 0.3).is_dark());
        }
    }

    // Tests that both branches consume exactly two draws
    #[test]
    fn test_derive_consumes_two_draws() {
        for contrast in [0.0, 0.5, 0.7, 0.71, 1.0] {
            let mut rng = SequenceGenerator::new("palette");
            let mut reference = rng.clone();
            Palette::derive(&mut rng, contrast);
            reference.next();
            reference.next();
            assert_eq!(rng, reference, "contrast {contrast}");
        }
    }

    // Tests the derived background stays inside the tinted grey band
    #[test]
    fn test_light_background_range() {
        for i in 0..200 {
            let mut rng = SequenceGenerator::new(&format!("bg-{i}"));
            let palette = Palette::derive(&mut rng, 0.0);
            let [r, g, b, a] = palette.background.0;
            assert!((230..250).contains(&g));
            assert_eq!(i32::from(r) - i32::from(g), i32::from(g) - i32::from(b));
            assert!((i32::from(r) - i32::from(g)).abs() <= 5);
            assert_eq!(a, 255);
        }
    }
}
