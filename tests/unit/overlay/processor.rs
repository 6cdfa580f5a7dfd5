//! Tests for the per-file skin pipeline

#[cfg(test)]
mod tests {
    use image::{ColorType, Rgb, RgbImage, Rgba, RgbaImage};
    use skinmerge::SkinError;
    use skinmerge::overlay::TRANSPARENT;
    use skinmerge::overlay::processor::{SkinOutcome, apply_overlay, process_skin};
    use std::fs;
    use tempfile::TempDir;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn write_skin(dir: &TempDir, name: &str, size: u32) -> std::path::PathBuf {
        let path = dir.path().join(name);
        RgbaImage::from_pixel(size, size, RED).save(&path).unwrap();
        path
    }

    // Tests a valid skin is merged and written
    // Verified by returning before saving
    #[test]
    fn test_process_skin_writes_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_skin(&temp_dir, "skin.png", 64);
        let output = temp_dir.path().join("out.png");

        let outcome = process_skin(&input, &output, false).unwrap();

        assert_eq!(outcome, SkinOutcome::Written);
        assert!(outcome.is_written());
        let merged = image::open(&output).unwrap().to_rgba8();
        assert_eq!(*merged.get_pixel(40, 0), TRANSPARENT);
        assert_eq!(*merged.get_pixel(8, 0), RED);
    }

    // Tests non skin-sized images are skipped silently without output
    // Verified by processing images of any size
    #[test]
    fn test_wrong_dimensions_skipped_without_output() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.png");

        for (name, width, height) in [("small.png", 32, 32), ("tall.png", 64, 128)] {
            let input = temp_dir.path().join(name);
            RgbaImage::from_pixel(width, height, RED)
                .save(&input)
                .unwrap();

            let outcome = process_skin(&input, &output, true).unwrap();

            assert_eq!(outcome, SkinOutcome::SkippedDimensions { width, height });
            assert!(!outcome.is_written());
            assert!(!output.exists(), "skipped image must not produce output");
        }
    }

    // Tests skipping leaves an existing destination untouched
    // Verified by truncating the destination before the size check
    #[test]
    fn test_skip_keeps_existing_destination() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_skin(&temp_dir, "small.png", 16);
        let output = temp_dir.path().join("out.png");
        fs::write(&output, b"previous").unwrap();

        process_skin(&input, &output, false).unwrap();

        assert_eq!(fs::read(&output).unwrap(), b"previous");
    }

    // Tests existing output files are overwritten
    // Verified by refusing to write over existing files
    #[test]
    fn test_existing_output_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_skin(&temp_dir, "skin.png", 64);
        let output = temp_dir.path().join("out.png");
        fs::write(&output, b"stale").unwrap();

        process_skin(&input, &output, false).unwrap();

        assert!(image::open(&output).is_ok());
    }

    // Tests sources without alpha are converted to RGBA
    // Verified by saving in the source colour type
    #[test]
    fn test_rgb_source_converted_to_rgba() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("rgb.png");
        RgbImage::from_pixel(64, 64, Rgb([0, 128, 0]))
            .save(&input)
            .unwrap();
        let output = temp_dir.path().join("out.png");

        process_skin(&input, &output, false).unwrap();

        let merged = image::open(&output).unwrap();
        assert_eq!(merged.color(), ColorType::Rgba8);
        assert_eq!(*merged.to_rgba8().get_pixel(48, 8), TRANSPARENT);
    }

    // Tests missing and undecodable sources report a load error
    // Verified by mapping load failures to a skip
    #[test]
    fn test_unreadable_source_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.png");

        let missing = process_skin(&temp_dir.path().join("missing.png"), &output, false);
        assert!(matches!(missing, Err(SkinError::ImageLoad { .. })));

        let garbage = temp_dir.path().join("garbage.png");
        fs::write(&garbage, b"not a png").unwrap();
        let result = process_skin(&garbage, &output, false);
        assert!(matches!(result, Err(SkinError::ImageLoad { .. })));
        assert!(!output.exists());
    }

    // Tests head-only mode clears the body after merging
    // Verified by isolating before merging
    #[test]
    fn test_apply_overlay_head_only() {
        let mut skin = RgbaImage::from_pixel(64, 64, RED);

        apply_overlay(&mut skin, true);

        for (x, y, pixel) in skin.enumerate_pixels() {
            if x < 32 && y < 16 {
                assert_eq!(*pixel, RED);
            } else {
                assert_eq!(*pixel, TRANSPARENT);
            }
        }
    }
}
