pub mod classify;
pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod parse;
pub mod wasm;
