//! Color themes for the advisor client.
//!
//! The active theme is an explicit value held by the app and passed into
//! render functions; nothing reads global mutable state.

use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct AdvisorTheme {
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub link: Color32,
    pub code: Color32,
    pub error: Color32,
    pub bubble_user: Color32,
    pub bubble_user_text: Color32,
    pub bubble_assistant: Color32,
    pub panel: Color32,
    pub card: Color32,
}

impl AdvisorTheme {
    pub fn dark() -> Self {
        Self {
            text_primary: Color32::from_rgb(0xE5, 0xE7, 0xEB),
            text_muted: Color32::from_rgb(0x9C, 0xA3, 0xAF),
            accent: Color32::from_rgb(0x60, 0xA5, 0xFA),
            link: Color32::from_rgb(0x93, 0xC5, 0xFD),
            code: Color32::from_rgb(0xFB, 0xBF, 0x24),
            error: Color32::from_rgb(0xF8, 0x71, 0x71),
            bubble_user: Color32::from_rgb(0x25, 0x63, 0xEB),
            bubble_user_text: Color32::WHITE,
            bubble_assistant: Color32::from_rgb(0x37, 0x41, 0x51),
            panel: Color32::from_rgb(0x1F, 0x29, 0x37),
            card: Color32::from_rgb(0x2B, 0x34, 0x42),
        }
    }

    pub fn light() -> Self {
        Self {
            text_primary: Color32::from_rgb(0x1F, 0x29, 0x37),
            text_muted: Color32::from_rgb(0x6B, 0x72, 0x80),
            accent: Color32::from_rgb(0x25, 0x63, 0xEB),
            link: Color32::from_rgb(0x1D, 0x4E, 0xD8),
            code: Color32::from_rgb(0xB4, 0x53, 0x09),
            error: Color32::from_rgb(0xDC, 0x26, 0x26),
            bubble_user: Color32::from_rgb(0x25, 0x63, 0xEB),
            bubble_user_text: Color32::WHITE,
            bubble_assistant: Color32::from_rgb(0xF3, 0xF4, 0xF6),
            panel: Color32::from_rgb(0xFF, 0xFF, 0xFF),
            card: Color32::from_rgb(0xF9, 0xFA, 0xFB),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_differ() {
        // Sanity check so a copy-paste slip doesn't ship identical themes
        assert_ne!(AdvisorTheme::dark().panel, AdvisorTheme::light().panel);
        assert_ne!(
            AdvisorTheme::dark().text_primary,
            AdvisorTheme::light().text_primary
        );
    }
}
