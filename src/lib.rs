//! # hello_world_pro
//!
//! Asks for a name on the console and greets it.
//! A blank name gets an error message instead of a greeting.

mod error;
mod greeter;

pub use error::{GreeterError, Result};
pub use greeter::{greet, read_name, run, Greeting, BLANK_NAME_ERROR, PROMPT};
