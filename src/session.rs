//! State-change notification
//!
//! This module defines the trait through which a
//! [`GameManager`](crate::game::GameManager) publishes its state. A listener
//! might re-render a UI, forward the state over a socket, or record it for a
//! test; the manager only needs somewhere to send the full state after every
//! accepted action.

use crate::game::GameState;

/// Trait for receiving the state of a game session
///
/// The listener is called synchronously, once per accepted action, with the
/// complete state. Ignored actions do not reach the listener.
pub trait Listener {
    /// Receives the state that resulted from an accepted action
    ///
    /// # Arguments
    ///
    /// * `state` - The complete current state of the session
    fn publish(&mut self, state: &GameState);
}

impl<F: FnMut(&GameState)> Listener for F {
    fn publish(&mut self, state: &GameState) {
        self(state);
    }
}
