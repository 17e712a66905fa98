//! Terminal output module: VT52 encoding and screen scripts.
//!
//! This is the only place that knows the VT52 wire format. It is pure: views
//! turn game state and demo phases into [`Script`]s, and the session engine plays
//! those scripts over a transport.
//!
//! - [`codes`]: escape and control byte constants
//! - [`encoder`]: [`Vt52Command`] to bytes
//! - [`script`]: ordered sends and pauses
//! - [`game_view`]: guess-the-animal screens
//! - [`demo_view`]: terminal test suite choreography
//!
//! # Example
//!
//! ```
//! use vt52_term::{encode_position, Script, Vt52Command};
//!
//! assert_eq!(encode_position(1, 1), [0x1B, b'Y', 32, 32]);
//!
//! let mut script = Script::new();
//! script.command(Vt52Command::CursorHome).at(12, 5).text("hello");
//! assert_eq!(script.send_count(), 3);
//! ```

pub mod codes;
pub mod demo_view;
pub mod encoder;
pub mod game_view;
pub mod script;

pub use vt52_core as core;
pub use vt52_types as types;

pub use encoder::{encode_all_into, encode_position, Vt52Command, MAX_COMMAND_LEN};
pub use game_view::GameView;
pub use script::{Script, Step};
