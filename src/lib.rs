//! chatdeck
//!
//! Terminal chat client mockup: a conversation directory, a message thread
//! and a composer, with a collapsible sidebar.
//!
//! Follows a Pure Core / Impure Shell split: `model` and `state` hold plain
//! data and transitions, `view` owns the terminal and the event loop.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
