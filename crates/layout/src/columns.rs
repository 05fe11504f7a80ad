/// Splits `available_width` into column widths proportional to `weights`.
///
/// Negative or non-finite weights count as zero. When every weight is zero the width
/// is split evenly. The returned widths always sum to `available_width` (or to zero
/// when the available width is not positive).
pub fn distribute_columns(weights: &[f32], available_width: f32) -> Vec<f32> {
    if weights.is_empty() {
        return Vec::new();
    }
    let available = available_width.max(0.0);
    let clean: Vec<f32> = weights
        .iter()
        .map(|w| if w.is_finite() && *w > 0.0 { *w } else { 0.0 })
        .collect();
    let total: f32 = clean.iter().sum();

    if total == 0.0 {
        let even = available / clean.len() as f32;
        return vec![even; clean.len()];
    }
    clean.iter().map(|w| available * w / total).collect()
}
