//! VT52 terminal server (workspace facade crate).
//!
//! Exposes `vt52_terminal::{types, core, input, term, transport, engine, dispatch}`
//! while the implementation lives in dedicated crates under `crates/`.

pub use vt52_core as core;
pub use vt52_dispatch as dispatch;
pub use vt52_engine as engine;
pub use vt52_input as input;
pub use vt52_term as term;
pub use vt52_transport as transport;
pub use vt52_types as types;
