/// Renders a number for CSS output: at most three decimals, no trailing zeros,
/// and never `-0`.
pub fn css_number(v: f32) -> String {
    let rounded = (v as f64 * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let s = format!("{rounded:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
