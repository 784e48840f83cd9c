use crate::resources::*;

/// End the game once lives run out. Returns true on the frame it ends.
pub fn check_game_over(lives: &Lives, score: &Score, events: &mut Events) -> bool {
    if !lives.is_exhausted() {
        return false;
    }
    events.game_over = true;
    tracing::info!(
        score = score.current,
        new_high = score.is_new_high(),
        "game over"
    );
    true
}
