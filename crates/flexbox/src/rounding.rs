/// Snap `value` to the nearest multiple of `1 / scale`.
///
/// A non-positive or non-finite `scale` disables snapping. Half steps round away from zero.
#[inline]
pub fn quantize(value: f32, scale: f32) -> f32 {
    if scale <= 0.0 || !scale.is_finite() || !value.is_finite() {
        return value;
    }
    (value * scale).round() / scale
}
