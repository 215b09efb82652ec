//! Keyboard and pointer input mapping

/// What a raw browser event means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Start from idle, flap while running
    Primary,
    /// The restart button on the game-over screen
    Restart,
}

/// Map a `KeyboardEvent.code` to an input. Only Space drives the game.
pub fn key_input(code: &str) -> Option<InputKind> {
    match code {
        "Space" => Some(InputKind::Primary),
        _ => None,
    }
}

/// Pointer and touch presses anywhere on the page are primary input
pub fn pointer_input() -> InputKind {
    InputKind::Primary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_is_primary() {
        assert_eq!(key_input("Space"), Some(InputKind::Primary));
    }

    #[test]
    fn test_other_keys_ignored() {
        for code in ["Enter", "ArrowUp", "KeyW", "Escape", " "] {
            assert_eq!(key_input(code), None, "{} should be ignored", code);
        }
    }

    #[test]
    fn test_pointer_is_primary() {
        assert_eq!(pointer_input(), InputKind::Primary);
    }
}
