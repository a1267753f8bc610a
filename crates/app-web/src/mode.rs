use app_core::AnimationMode;

/// Pick the animation variant from a URL query string like `?mode=spin`.
///
/// Unknown values and an absent parameter both fall back to `Seek`, so a
/// plain page load gets the drifting cube.
pub fn mode_from_query(query: &str) -> AnimationMode {
    query
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("mode="))
        .map(AnimationMode::from_name)
        .unwrap_or(AnimationMode::Seek)
}
