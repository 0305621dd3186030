// Rotation timing and the inline styles that drive the CSS keyframes

/// Keyframes shared by the wiper root and the branch container
pub const ROTATION: &str = "rotation";

/// Keyframes for the image inside the branch
pub const ROTATION_BRANCH: &str = "rotation_branch";

/// Seconds per swing at 1x speed
const BASE_DURATION_SECS: f64 = 1.5;

/// Seconds for one swing at the given multiplier, rounded to two decimals.
///
/// `multiplier` comes from [`crate::settings::Speed`], so it is always positive.
pub fn calc_duration(multiplier: f64) -> f64 {
    ((BASE_DURATION_SECS / multiplier) * 100.0).round() / 100.0
}

/// Inline style for a looping, alternating rotation
pub fn rotation_style(animation: &str, duration: f64) -> String {
    format!(
        "animation: {} {}s linear 0s infinite alternate;",
        animation, duration
    )
}

/// Inline style that hides a wiper
pub const HIDDEN_STYLE: &str = "display:none;";
