use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    /// Unmodified arrow keys go to the carousel's own keyboard contract.
    pub(super) fn arrow_key_name(key: &Key, modifiers: Modifiers) -> Option<&'static str> {
        if !modifiers.is_empty() {
            return None;
        }
        match key.as_ref() {
            Key::Named(key::Named::ArrowLeft) => Some("ArrowLeft"),
            Key::Named(key::Named::ArrowRight) => Some("ArrowRight"),
            _ => None,
        }
    }

    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = match key.as_ref() {
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Named(key::Named::Escape) => "escape".to_string(),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        if Self::shortcut_matches(&self.config.key_safe_quit, "q", &pressed, modifiers) {
            Some(Message::SafeQuit)
        } else if Self::shortcut_matches(&self.config.key_next_image, "l", &pressed, modifiers) {
            Some(Message::NextImage)
        } else if Self::shortcut_matches(&self.config.key_prev_image, "h", &pressed, modifiers) {
            Some(Message::PreviousImage)
        } else {
            None
        }
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let required_key = required_key.unwrap_or(fallback);
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized
                .split('+')
                .map(|token| match token.trim() {
                    "spacebar" => "space",
                    "esc" => "escape",
                    other => other,
                })
                .collect::<Vec<_>>()
                .join("+")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::Modifiers;

    #[test]
    fn empty_binding_uses_fallback() {
        assert_eq!(App::normalize_shortcut_token("  ", "q"), "q");
        assert!(App::shortcut_matches("", "q", "q", Modifiers::empty()));
    }

    #[test]
    fn escape_aliases_normalize() {
        assert_eq!(App::normalize_shortcut_token("Esc", "q"), "escape");
        assert_eq!(App::normalize_shortcut_token("ESCAPE", "q"), "escape");
    }

    #[test]
    fn matches_ctrl_shortcut() {
        assert!(App::shortcut_matches("ctrl+n", "l", "n", Modifiers::CTRL));
        assert!(!App::shortcut_matches("ctrl+n", "l", "n", Modifiers::empty()));
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        assert!(!App::shortcut_matches(
            "l",
            "l",
            "l",
            Modifiers::CTRL | Modifiers::SHIFT,
        ));
    }

    #[test]
    fn only_bare_arrows_reach_the_carousel() {
        let left = Key::Named(key::Named::ArrowLeft);
        assert_eq!(App::arrow_key_name(&left, Modifiers::empty()), Some("ArrowLeft"));
        assert_eq!(App::arrow_key_name(&left, Modifiers::SHIFT), None);
        let up = Key::Named(key::Named::ArrowUp);
        assert_eq!(App::arrow_key_name(&up, Modifiers::empty()), None);
    }
}
