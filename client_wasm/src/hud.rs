//! HTML overlay: live score, start screen and game-over screen

use game_core::{Session, SessionState};

/// What the overlay should show for a given session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudView {
    /// Live score text; `None` hides the counter
    pub score: Option<String>,
    pub start_screen: bool,
    pub game_over_screen: bool,
    pub final_score: Option<String>,
}

impl HudView {
    pub fn from_session(session: &Session) -> Self {
        match session.state() {
            SessionState::Idle => Self {
                score: None,
                start_screen: true,
                game_over_screen: false,
                final_score: None,
            },
            SessionState::Running => Self {
                score: Some(score_text(session.score())),
                start_screen: false,
                game_over_screen: false,
                final_score: None,
            },
            SessionState::Ended => Self {
                score: None,
                start_screen: false,
                game_over_screen: true,
                final_score: Some(score_text(session.final_score().unwrap_or(session.score()))),
            },
        }
    }
}

pub fn score_text(score: u32) -> String {
    score.to_string()
}

#[cfg(target_arch = "wasm32")]
pub use dom::Hud;

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::HudView;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement};

    const ACTIVE: &str = "active";

    /// Overlay elements; any that are missing from the page are skipped
    pub struct Hud {
        score: Option<HtmlElement>,
        start_screen: Option<HtmlElement>,
        game_over_screen: Option<HtmlElement>,
        final_score: Option<HtmlElement>,
        last: Option<HudView>,
    }

    impl Hud {
        pub fn new(document: &Document) -> Self {
            let find = |id: &str| {
                let element = document
                    .get_element_by_id(id)
                    .and_then(|e| e.dyn_into::<HtmlElement>().ok());
                if element.is_none() {
                    log::warn!("HUD element #{} not found", id);
                }
                element
            };
            Self {
                score: find("score"),
                start_screen: find("start-screen"),
                game_over_screen: find("game-over-screen"),
                final_score: find("final-score"),
                last: None,
            }
        }

        /// Push a view to the DOM, touching it only when something changed
        pub fn apply(&mut self, view: HudView) {
            if self.last.as_ref() == Some(&view) {
                return;
            }

            if let Some(score) = &self.score {
                match &view.score {
                    Some(text) => {
                        score.set_inner_text(text);
                        let _ = score.style().set_property("display", "block");
                    }
                    None => {
                        let _ = score.style().set_property("display", "none");
                    }
                }
            }
            if let Some(screen) = &self.start_screen {
                set_active(screen, view.start_screen);
            }
            if let Some(screen) = &self.game_over_screen {
                set_active(screen, view.game_over_screen);
            }
            if let (Some(final_score), Some(text)) = (&self.final_score, &view.final_score) {
                final_score.set_inner_text(text);
            }

            self.last = Some(view);
        }
    }

    fn set_active(element: &HtmlElement, active: bool) {
        let classes = element.class_list();
        let _ = if active {
            classes.add_1(ACTIVE)
        } else {
            classes.remove_1(ACTIVE)
        };
    }
}
