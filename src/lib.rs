//! Library crate for linecalc.
//!
//! Exposes the expression evaluator, the memory context it reads from and
//! the line-execution layer used by the `linecalc` binary.

#![forbid(unsafe_code)]

pub mod command;
pub mod config;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod operators;
pub mod session;

pub use command::Flow;
pub use config::{Cli, Config, Input};
pub use context::{Context, MEMORY_SLOTS};
pub use error::CalcError;
pub use evaluator::{Evaluator, evaluate, evaluate_integer};
pub use session::Session;
