use crate::game::GameState;

/// Universal interface for computer players.
pub trait Agent {
    /// Select an action (column) given the current game state.
    /// Precondition: the game is not over.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
