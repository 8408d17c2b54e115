use rand::Rng;

/// Fill an RGBA8 buffer with monochrome noise.
///
/// Every pixel gets one grey level in R, G and B and full alpha; the
/// overlay's opacity is applied by CSS. A trailing partial pixel is left
/// untouched.
pub fn fill_noise<R: Rng + ?Sized>(pixels: &mut [u8], rng: &mut R) {
    for px in pixels.chunks_exact_mut(4) {
        let value = (rng.gen::<f32>() * 255.0).floor() as u8;
        px[0] = value;
        px[1] = value;
        px[2] = value;
        px[3] = 255;
    }
}

/// A fresh `width * height` RGBA8 noise image.
pub fn noise_image<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Vec<u8> {
    let mut pixels = vec![0u8; width as usize * height as usize * 4];
    fill_noise(&mut pixels, rng);
    pixels
}

/// Overlay height covering the whole document: the largest of the
/// candidate heights, never negative.
pub fn overlay_height(candidates: &[i32]) -> u32 {
    candidates.iter().copied().max().unwrap_or(0).max(0) as u32
}
