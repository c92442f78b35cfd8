//! Pure tic-tac-toe game logic with move history and time travel.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: pure win and draw detection over a single board
//! - **History**: [`GameState`] keeps one [`Snapshot`] per move and a
//!   pointer to the step being viewed
//! - **Invariants**: properties checked after every mutation in debug builds
//!
//! The crate has no UI dependency. A view reads [`GameState::status`] and
//! [`GameState::move_list`], and forwards input to the three mutators.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     game.apply_move(cell).unwrap();
//! }
//! assert_eq!(game.status().winner(), Some(Player::X));
//!
//! // Travel back to the start and branch.
//! game.jump_to(0).unwrap();
//! game.apply_move(8).unwrap();
//! assert_eq!(game.history_len(), 2);
//! assert_eq!(game.status(), GameStatus::InProgress { next: Player::O });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
pub mod invariants;
mod move_list;
mod position;
mod rejection;
pub mod rules;
mod snapshot;
mod types;

pub use game::{GameState, GameStatus, ListOrder};
pub use move_list::MoveListEntry;
pub use position::Position;
pub use rejection::{JumpRejection, MoveRejection};
pub use rules::Win;
pub use snapshot::{Location, Snapshot};
pub use types::{Board, Player, Square};
