//! Tests for PNG export and output naming

#[cfg(test)]
mod tests {
    use constructivist::ArtError;
    use constructivist::io::image::{export_png, output_file_name, output_path};
    use image::{Rgba, RgbaImage};
    use std::path::Path;
    use tempfile::TempDir;

    // Tests output names carry the seed with unsafe characters replaced
    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("abc123"), "constructivist-abc123.png");
        assert_eq!(output_file_name("a b/c"), "constructivist-a_b_c.png");
        assert_eq!(output_file_name("x-1_y"), "constructivist-x-1_y.png");
        assert_eq!(output_file_name("é"), "constructivist-_.png");
    }

    // Tests output paths join the directory and name
    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("renders"), "seed"),
            Path::new("renders").join("constructivist-seed.png")
        );
    }

    // Tests export writes a decodable PNG and creates missing directories
    #[test]
    fn test_export_png_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("out.png");
        let mut image = RgbaImage::from_pixel(12, 8, Rgba([10, 20, 30, 255]));
        image.put_pixel(3, 4, Rgba([200, 100, 50, 255]));

        export_png(&image, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded, image);
    }

    // Tests export errors when the parent path is a file
    #[test]
    fn test_export_png_parent_is_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let image = RgbaImage::new(2, 2);
        let result = export_png(&image, &blocker.join("out.png"));
        let Err(ArtError::FileSystem {
            path, operation, ..
        }) = result
        else {
            unreachable!("expected a file system error");
        };
        assert_eq!(path, blocker);
        assert_eq!(operation, "create directory");
    }
}
