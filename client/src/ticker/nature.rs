use log::debug;

use crate::session::Session;

use super::Ticker;

/// Advances the game by one generation per tick.
pub struct NatureTicker;

impl Ticker for NatureTicker {
    fn tick(&mut self, session: &mut Session) {
        session.step(1);

        debug!(
            "Generation {}: {} alive",
            session.game.generation,
            session.board().alive_count()
        );
    }
}
