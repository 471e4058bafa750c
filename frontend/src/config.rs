use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Delay between starting the journey and scrolling to the chapters, so the
/// scroll runs after the cross-fade has been applied.
pub const SCROLL_DELAY_MS: u32 = 100;

pub const HERO_FADE_MS: u32 = 1000;
pub const CONTENT_FADE_MS: u32 = 500;

/// How a reveal wrapper watches the viewport and animates in.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the wrapper that must be on screen before it reveals.
    pub threshold: f64,
    pub root_margin: &'static str,
    pub duration_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            root_margin: "0px",
            duration_ms: 1000,
        }
    }
}
