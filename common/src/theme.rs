use serde::Serialize;

// light/dark preference
//
// only ever changed by the toggle button and never persisted, so every page load starts
// from the default (dark)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ThemePreference {
    pub is_dark: bool,
}

impl Default for ThemePreference {
    fn default() -> Self {
        ThemePreference { is_dark: true }
    }
}

impl ThemePreference {
    pub fn toggle(&mut self) {
        self.is_dark = !self.is_dark;
    }

    /// Glyph on the toggle button: the theme you would switch to.
    pub fn toggle_glyph(self) -> &'static str {
        if self.is_dark { "☀️" } else { "🌙" }
    }
}
