pub mod application;
pub mod cli;
pub mod domain;

pub use application::{AccountSession, SessionConfig, SessionOutcome, run_session};
pub use domain::*;
