//! Game-state types: units, orders, turn descriptors, and state hashing.

pub mod game;
pub mod order;
pub mod unit;
pub mod zobrist;

pub use game::{DislodgedUnit, GameState, Phase, Season, Turn};
pub use order::Order;
pub use unit::{Location, Unit, UnitKind};
pub use zobrist::hash_state;
