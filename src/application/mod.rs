// Application layer - the interactive session use case.
// The CLI only wires the console to it; everything observable happens here.

pub mod error;
pub mod session;

pub use error::*;
pub use session::*;
