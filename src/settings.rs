//! Presentation settings
//!
//! Read from the page URL query string (`?reduced_motion=1&overlays=0`).
//! Nothing here is persisted.

/// Per-page presentation preferences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Freeze the river animation
    pub reduced_motion: bool,
    /// Draw the bridge photos behind beams
    pub image_overlays: bool,
    /// Play audio cues
    pub sound: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            image_overlays: true,
            sound: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" | "" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

impl Settings {
    /// Parse a URL query string. Unknown keys and bad values are ignored.
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let Some(flag) = parse_flag(value) else {
                log::warn!("Ignoring setting {}={}", key, value);
                continue;
            };
            match key {
                "reduced_motion" => settings.reduced_motion = flag,
                "overlays" => settings.image_overlays = flag,
                "sound" => settings.sound = flag,
                _ => log::warn!("Unknown setting: {}", key),
            }
        }

        settings
    }

    /// Load settings from the current page URL (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let query = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let settings = Self::from_query(&query);
        log::info!("Settings: {:?}", settings);
        settings
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    /// Wall-clock time to feed the river animation
    pub fn wave_time(&self, now: f64) -> f64 {
        if self.reduced_motion { 0.0 } else { now }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_default() {
        assert_eq!(Settings::from_query(""), Settings::default());
        assert_eq!(Settings::from_query("?"), Settings::default());
    }

    #[test]
    fn test_query_flags() {
        let s = Settings::from_query("?reduced_motion=1&overlays=off&sound=false");
        assert!(s.reduced_motion);
        assert!(!s.image_overlays);
        assert!(!s.sound);

        // Bare key means on
        let s = Settings::from_query("reduced_motion");
        assert!(s.reduced_motion);
    }

    #[test]
    fn test_bad_values_are_ignored() {
        let s = Settings::from_query("?overlays=maybe&volume=3&sound=0");
        assert!(s.image_overlays);
        assert!(!s.sound);
    }

    #[test]
    fn test_wave_time_frozen_when_reduced() {
        let mut s = Settings::default();
        assert_eq!(s.wave_time(1234.0), 1234.0);
        s.reduced_motion = true;
        assert_eq!(s.wave_time(1234.0), 0.0);
    }
}
