use std::path::Path;
use std::process::Command;

use appicon_gen::{png, synth, IconSpec};
use tempfile::TempDir;

fn spec_with_side(side: u32) -> IconSpec {
    IconSpec {
        side,
        ..IconSpec::default()
    }
}

/// Encode a synthesized canvas, decode it with the `image` crate, and check
/// that dimensions and every RGB channel survive the trip. Alpha is uniform
/// 255 and not stored; the decoder reports the image as opaque truecolor.
#[test]
fn round_trip_preserves_rgb() {
    let spec = spec_with_side(256);
    let pixels = synth::synthesize(&spec);
    let encoded = png::encode(spec.side, spec.side, &pixels).expect("encoding failed");

    let decoded = image::load_from_memory(&encoded).expect("any PNG reader must accept this");
    assert_eq!(decoded.width(), 256);
    assert_eq!(decoded.height(), 256);

    let rgb = decoded.to_rgb8();
    for (i, pixel) in pixels.iter().enumerate() {
        let x = (i % 256) as u32;
        let y = (i / 256) as u32;
        assert_eq!(
            rgb.get_pixel(x, y).0,
            [pixel[0], pixel[1], pixel[2]],
            "channel mismatch at ({x}, {y})"
        );
    }
}

/// The decoded icon shows the expected layers: gradient in the corner, the
/// accent ring at its radius, the white glyph over the center.
#[test]
fn decoded_icon_has_expected_geometry() {
    let spec = spec_with_side(256);
    let pixels = synth::synthesize(&spec);
    let encoded = png::encode(spec.side, spec.side, &pixels).expect("encoding failed");
    let rgb = image::load_from_memory(&encoded)
        .expect("decode failed")
        .to_rgb8();

    // Top-left corner: plain gradient.
    assert_eq!(rgb.get_pixel(0, 0).0, [20, 10, 80]);

    // 128 + round(0.44 * 256) sits inside the ring's tolerance band.
    assert_eq!(rgb.get_pixel(241, 128).0, spec.ring_color);

    // The canvas center falls inside the play glyph.
    assert_eq!(rgb.get_pixel(128, 128).0, spec.glyph_color);
}

#[test]
fn encoded_bytes_survive_a_file_write() {
    let spec = spec_with_side(32);
    let pixels = synth::synthesize(&spec);
    let encoded = png::encode(spec.side, spec.side, &pixels).expect("encoding failed");

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("icon.png");
    std::fs::write(&path, &encoded).expect("Failed to write icon");

    let decoded = image::open(&path).expect("Failed to load written icon");
    assert_eq!(decoded.width(), 32);
    assert_eq!(decoded.height(), 32);
}

/// End to end: run the binary with no arguments and check that it drops a
/// decodable 1024x1024 AppIcon.png next to itself and reports the path.
#[test]
fn binary_writes_icon_beside_itself() {
    let binary = Path::new(env!("CARGO_BIN_EXE_appicon-gen"));

    let output = Command::new(binary)
        .output()
        .expect("Failed to run appicon-gen");
    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("appicon-gen failed");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("AppIcon.png"),
        "confirmation line should name the output file, got: {stdout}"
    );

    let icon_path = binary
        .parent()
        .expect("binary has a parent directory")
        .join("AppIcon.png");
    assert!(
        icon_path.exists(),
        "icon should exist at: {}",
        icon_path.display()
    );

    let decoded = image::open(&icon_path).expect("Failed to load generated icon");
    assert_eq!(decoded.width(), 1024);
    assert_eq!(decoded.height(), 1024);

    // Center of the play glyph is solid white.
    let rgb = decoded.to_rgb8();
    assert_eq!(rgb.get_pixel(512, 512).0, [255, 255, 255]);
}
