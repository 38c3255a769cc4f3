pub mod constants;
pub mod session;
pub mod share;
pub mod shared_connections_game;

pub use session::{GameAction, GameSession, SessionPhase};
