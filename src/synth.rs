use rayon::prelude::*;

/// One RGBA pixel, channels in [0, 255].
pub type Pixel = [u8; 4];

/// Geometry and color parameters for the generated icon.
///
/// All fractional fields are fractions of the canvas side, so one `IconSpec`
/// renders consistently at any size. `Default` reproduces the shipped icon:
/// a purple gradient, an accent ring and a white play glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSpec {
    /// Canvas side length in pixels (the canvas is always square).
    pub side: u32,

    /// Gradient base/span per channel. Red and blue ramp left to right,
    /// green top to bottom: channel = base + (coord / side) * span.
    pub red_base: f64,
    pub red_span: f64,
    pub green_base: f64,
    pub green_span: f64,
    pub blue_base: f64,
    pub blue_span: f64,

    /// Ring radius and half-thickness, as fractions of the side.
    pub ring_radius: f64,
    pub ring_tolerance: f64,
    pub ring_color: [u8; 3],

    /// Horizontal shift of the play glyph off the canvas center.
    pub glyph_offset: f64,
    /// Vertical half-height of the glyph.
    pub glyph_half_height: f64,
    /// Distance from the (shifted) center to the glyph's flat left edge.
    pub glyph_left: f64,
    /// Rightmost extent of the glyph at its vertical midline.
    pub glyph_apex: f64,
    /// How fast the right edge converges toward the apex per unit |ty|.
    pub glyph_slope: f64,
    pub glyph_color: [u8; 3],
}

impl Default for IconSpec {
    fn default() -> Self {
        Self {
            side: 1024,
            red_base: 20.0,
            red_span: 60.0,
            green_base: 10.0,
            green_span: 20.0,
            blue_base: 80.0,
            blue_span: 80.0,
            ring_radius: 0.44,
            ring_tolerance: 0.03,
            ring_color: [107, 53, 245],
            glyph_offset: 0.04,
            glyph_half_height: 0.22,
            glyph_left: 0.14,
            glyph_apex: 0.22,
            glyph_slope: 1.1,
            glyph_color: [255, 255, 255],
        }
    }
}

/// Render the full canvas: `side * side` pixels in row-major order.
///
/// Each pixel depends only on its own coordinates, so rows are rendered in
/// parallel; the output is byte-identical regardless of scheduling.
pub fn synthesize(spec: &IconSpec) -> Vec<Pixel> {
    let side = spec.side as usize;
    if side == 0 {
        return Vec::new();
    }

    let mut pixels = vec![[0u8; 4]; side * side];
    pixels
        .par_chunks_mut(side)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = pixel_at(spec, x as u32, y as u32);
            }
        });
    pixels
}

/// Color of a single coordinate: gradient first, then the accent ring, then
/// the play glyph. Later layers replace earlier ones outright, no blending.
fn pixel_at(spec: &IconSpec, x: u32, y: u32) -> Pixel {
    let s = spec.side as f64;
    let fx = x as f64;
    let fy = y as f64;

    // Background gradient.
    let mut color = [
        channel(spec.red_base + fx / s * spec.red_span),
        channel(spec.green_base + fy / s * spec.green_span),
        channel(spec.blue_base + fx / s * spec.blue_span),
    ];

    // Integer center, so odd sides land on a whole pixel.
    let cx = (spec.side / 2) as f64;
    let cy = cx;

    // Accent ring: a thin annulus around ring_radius.
    let dx = fx - cx;
    let dy = fy - cy;
    let dist = (dx * dx + dy * dy).sqrt();
    if (dist - spec.ring_radius * s).abs() < spec.ring_tolerance * s {
        color = spec.ring_color;
    }

    // Play glyph: flat left edge, two slanted edges meeting at the apex on
    // the right. Drawn last, so it wins over the ring where they cross.
    let tx = fx - cx - spec.glyph_offset * s;
    let ty = fy - cy;
    let half = spec.glyph_half_height * s;
    if -half < ty
        && ty < half
        && tx > -(spec.glyph_left * s)
        && tx < spec.glyph_apex * s - spec.glyph_slope * ty.abs()
    {
        color = spec.glyph_color;
    }

    [color[0], color[1], color[2], 255]
}

// Clamp before the cast so extreme coefficients can't wrap, and truncate
// rather than round to keep the reference pixels bit-for-bit.
fn channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}
