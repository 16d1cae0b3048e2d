//! HUD contract
//!
//! A label that shows the score (or the game over message) and a restart
//! button that is only visible after a round ends.

/// Display sink the game writes to
pub trait Hud {
    fn show_text(&mut self, text: &str);
    fn set_restart_visible(&mut self, visible: bool);
}

/// Label text while playing
pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

/// Two-line label text once a round is lost
pub fn game_over_text(score: u32) -> String {
    format!("Game Over\nScore: {}", score)
}

/// HUD that remembers what it shows and logs changes
#[derive(Debug, Clone, Default)]
pub struct LogHud {
    pub text: String,
    pub restart_visible: bool,
}

impl Hud for LogHud {
    fn show_text(&mut self, text: &str) {
        if self.text != text {
            log::info!("HUD: {}", text.replace('\n', " | "));
            self.text = text.to_string();
        }
    }

    fn set_restart_visible(&mut self, visible: bool) {
        if self.restart_visible != visible {
            log::debug!("Restart button {}", if visible { "shown" } else { "hidden" });
            self.restart_visible = visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texts() {
        assert_eq!(score_text(3), "Score: 3");
        assert_eq!(game_over_text(0), "Game Over\nScore: 0");
    }

    #[test]
    fn test_log_hud_tracks_state() {
        let mut hud = LogHud::default();
        hud.show_text(&score_text(1));
        hud.set_restart_visible(true);
        assert_eq!(hud.text, "Score: 1");
        assert!(hud.restart_visible);
    }
}
