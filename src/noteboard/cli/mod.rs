//! Terminal client: argument parsing, rendering and the interactive session.

mod commands;
mod render;
mod session;
mod setup;

pub use commands::run;
