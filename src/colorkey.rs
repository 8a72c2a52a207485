use image::{Rgb, RgbImage};

/// Replace every pixel exactly equal to `key` with `replacement`.
///
/// Returns how many pixels were rewritten.
pub fn remove_colorkey(image: &mut RgbImage, key: Rgb<u8>, replacement: Rgb<u8>) -> usize {
    let mut replaced = 0;
    for pixel in image.pixels_mut().filter(|p| **p == key) {
        *pixel = replacement;
        replaced += 1;
    }
    replaced
}

// ── Tests ─────────────────────────────────────────────────────────────────────
