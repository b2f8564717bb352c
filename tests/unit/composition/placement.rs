//! Tests for shape placement, variant selection and mirroring

#[cfg(test)]
mod tests {
    use constructivist::composition::element::{DrawContext, Variant};
    use constructivist::composition::palette::Palette;
    use constructivist::composition::placement::{
        SIZE_MULTIPLIERS, place_shape, place_shapes, shape_count,
    };
    use constructivist::math::sequence::SequenceGenerator;
    use constructivist::spatial::{LayoutGrid, Mirror, SymmetryAxes};

    // Tests the shape count formula at the ends and the default
    #[test]
    fn test_shape_count() {
        assert_eq!(shape_count(0.0), 5);
        assert_eq!(shape_count(0.6), 20);
        assert_eq!(shape_count(1.0), 30);
        assert_eq!(shape_count(0.5), 17);
    }

    // Tests sizes come from the multiplier table and positions stay on the half-cell lattice
    #[test]
    fn test_place_shape_geometry() {
        let grid = LayoutGrid::with_divisor(800, 1000, 10);
        let unit = grid.unit();
        let mut rng = SequenceGenerator::new("place");

        for _ in 0..500 {
            let placement = place_shape(&mut rng, &grid, 800, 1000, 0.4);
            let cells = placement.size / unit;
            assert!(SIZE_MULTIPLIERS.iter().any(|&m| (f64::from(m) - cells).abs() < 1e-9));

            // Canvas centre is 400, 500 which are multiples of the 80 px cell plus 0 or 20
            let x_cells = placement.origin.x / unit;
            let y_cells = (placement.origin.y - 500.0) / unit;
            assert!((x_cells - x_cells.round()).abs() < 1e-9);
            assert!(
                (y_cells - y_cells.round()).abs() < 1e-9
                    || (placement.origin.y / unit - (placement.origin.y / unit).round()).abs() < 1e-9
            );
            assert!(placement.origin.x >= 0.0 && placement.origin.x <= 800.0);
            assert!(placement.origin.y >= 0.0 && placement.origin.y <= 1040.0);
        }
    }

    // Tests circle emphasis at its extremes
    #[test]
    fn test_circle_emphasis_extremes() {
        let grid = LayoutGrid::with_divisor(600, 600, 12);
        let mut rng = SequenceGenerator::new("variants");

        for _ in 0..300 {
            assert_eq!(place_shape(&mut rng, &grid, 600, 600, 1.0).variant, Variant::Circle);
            assert_ne!(place_shape(&mut rng, &grid, 600, 600, 0.0).variant, Variant::Circle);
        }
    }

    // Tests non-circle variants favour rectangles over nodes
    #[test]
    fn test_rectangle_preference() {
        let grid = LayoutGrid::with_divisor(600, 600, 12);
        let mut rng = SequenceGenerator::new("rect-vs-node");
        let rectangles = (0..2000)
            .filter(|_| place_shape(&mut rng, &grid, 600, 600, 0.0).variant == Variant::Rectangle)
            .count();

        assert!(rectangles > 1200 && rectangles < 1600, "rectangles: {rectangles}");
    }

    // Tests mirror copies follow each placement and share size and variant
    #[test]
    fn test_place_shapes_mirroring() {
        let palette = Palette::light(240, 0);
        let context = DrawContext {
            palette: &palette,
            grid: LayoutGrid::with_divisor(800, 800, 10),
            complexity: 0.6,
            line_density: 0.5,
        };
        let axes = SymmetryAxes::from_symmetry(0.9);
        let mut rng = SequenceGenerator::new("mirrors");
        let elements = place_shapes(&mut rng, &context, 800, 800, 0.4, axes);

        assert_eq!(elements.len(), shape_count(0.6) * 4);
        for group in elements.chunks(4) {
            let [original, vertical, horizontal, both] = group else {
                unreachable!("four copies per placement");
            };
            assert_eq!(original.mirror, Mirror::Original);
            assert_eq!(vertical.mirror, Mirror::Vertical);
            assert_eq!(horizontal.mirror, Mirror::Horizontal);
            assert_eq!(both.mirror, Mirror::Both);

            assert!((vertical.origin.x - (800.0 - original.origin.x)).abs() < 1e-9);
            assert!((horizontal.origin.y - (800.0 - original.origin.y)).abs() < 1e-9);
            assert!((both.origin.x - vertical.origin.x).abs() < 1e-9);
            assert!((both.origin.y - horizontal.origin.y).abs() < 1e-9);

            for copy in group {
                assert_eq!(copy.variant(), original.variant());
                assert!((copy.size - original.size).abs() < f64::EPSILON);
            }
        }
    }

    // Tests no symmetry gives one drawing per placement
    #[test]
    fn test_place_shapes_without_symmetry() {
        let palette = Palette::DARK;
        let context = DrawContext {
            palette: &palette,
            grid: LayoutGrid::with_divisor(500, 500, 10),
            complexity: 0.0,
            line_density: 0.5,
        };
        let mut rng = SequenceGenerator::new("single");
        let elements = place_shapes(&mut rng, &context, 500, 500, 0.4, SymmetryAxes::default());

        assert_eq!(elements.len(), 5);
        assert!(elements.iter().all(|e| e.mirror == Mirror::Original));
    }
}
