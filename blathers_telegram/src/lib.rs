#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod bot;
pub mod command;
pub mod error;
pub mod handler;
pub mod responder;

pub use bot::BlathersBot;
pub use command::{Command, SplitMessage, split_message};
pub use error::{Error, Result};
pub use responder::{ReplySink, Responder};
