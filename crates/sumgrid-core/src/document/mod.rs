//! Document state and logic (UI-agnostic).

mod eval;
mod io;
mod ops;
mod recompute;
mod state;

pub use state::Document;
