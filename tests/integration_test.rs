use image::GenericImageView;
use qr_create::{generate, DataType, GenerateOptions};
use std::fs;
use tempfile::TempDir;

fn decode_written_qr(path: &std::path::Path) -> String {
    let gray = image::open(path)
        .expect("Failed to open generated QR image")
        .to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare(gray);
    let grids = prepared.detect_grids();
    assert!(!grids.is_empty(), "No QR code found in {}", path.display());

    let (_, content) = grids[0].decode().expect("Failed to decode QR code");
    content
}

#[test]
fn test_url_end_to_end_128px() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("out.png");

    let options = GenerateOptions {
        data_type: DataType::Url,
        size: 128,
        output: output.clone(),
        ..GenerateOptions::new("https://example.com")
    };
    let result = generate(&options).expect("Generation failed");

    assert_eq!(result.output, output);
    assert_eq!(result.payload, "https://example.com");

    let img = image::open(&output).expect("Failed to open generated QR image");
    assert_eq!(img.dimensions(), (128, 128));
}

#[test]
fn test_written_image_decodes_to_payload() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let cases = [
        ("example.com", DataType::Url, "https://example.com"),
        ("user@example.com", DataType::Email, "mailto:user@example.com"),
        ("SSID:pa:ss", DataType::Wifi, "WIFI:T:WPA;S:SSID;P:pa:ss;;"),
        ("plain text", DataType::Text, "plain text"),
    ];

    for (i, (data, data_type, expected)) in cases.into_iter().enumerate() {
        let output = temp_dir.path().join(format!("decode_{}.png", i));
        let options = GenerateOptions {
            data_type,
            size: 500,
            output: output.clone(),
            ..GenerateOptions::new(data)
        };
        generate(&options).expect("Generation failed");

        assert_eq!(decode_written_qr(&output), expected);
    }
}

#[test]
fn test_format_follows_extension() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    for (name, format) in [
        ("qr.png", image::ImageFormat::Png),
        ("qr.jpg", image::ImageFormat::Jpeg),
    ] {
        let output = temp_dir.path().join(name);
        let options = GenerateOptions {
            size: 64,
            output: output.clone(),
            ..GenerateOptions::new("5551234567")
        };
        generate(&options).expect("Generation failed");

        let bytes = fs::read(&output).expect("Failed to read output");
        assert_eq!(image::guess_format(&bytes).unwrap(), format);

        let img = image::load_from_memory(&bytes).expect("Failed to decode output");
        assert_eq!(img.dimensions(), (64, 64));
    }
}

#[test]
fn test_missing_directory_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("no_such_dir").join("qr.png");

    let options = GenerateOptions {
        output: output.clone(),
        ..GenerateOptions::new("hello")
    };
    let err = generate(&options).unwrap_err();

    assert!(err.to_string().contains("Failed to save QR image"));
    assert!(!output.exists());
}

#[test]
fn test_unknown_extension_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("qr.unknownext");

    let options = GenerateOptions {
        output,
        ..GenerateOptions::new("hello")
    };
    assert!(generate(&options).is_err());
}

#[test]
fn test_payload_too_large_fails_without_writing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("huge.png");

    let options = GenerateOptions {
        output: output.clone(),
        ..GenerateOptions::new("x".repeat(4000))
    };
    let err = generate(&options).unwrap_err();

    assert!(err.to_string().contains("Failed to create QR code"));
    assert!(!output.exists());
}
