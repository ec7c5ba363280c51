use crate::{buffer::ColorBuffer, grid::IntensityGrid, types::Rgb};

/// Maps one intensity to a color.
///
/// Per channel: a zero weight leaves the base value; otherwise the channel
/// becomes `base + 3 * (value / weight)` with division truncating toward
/// zero, so negative weights darken and positive weights brighten.
#[inline]
pub fn cell_color(value: i32, weights: Rgb, base: Rgb) -> Rgb {
    let channel = |w: i32, b: i32| if w == 0 { b } else { b + 3 * (value / w) };
    Rgb::new(
        channel(weights.x, base.x),
        channel(weights.y, base.y),
        channel(weights.z, base.z),
    )
}

/// Paints every nonzero cell of `grid` into `buffer`.
///
/// Pixels under empty cells are left untouched.
///
/// ### Panics
/// Panics if `grid` and `buffer` have different sizes.
pub fn colorize(grid: &IntensityGrid, weights: Rgb, base: Rgb, buffer: &mut ColorBuffer) {
    assert_eq!(
        (grid.width(), grid.height()),
        (buffer.width(), buffer.height()),
        "grid and buffer size mismatch"
    );

    for (pixel, &value) in buffer.pixels_mut().iter_mut().zip(grid.cells()) {
        if value != 0 {
            *pixel = cell_color(value, weights, base);
        }
    }
}
