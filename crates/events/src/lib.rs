//! Change notification core for the campus workspace.
//!
//! Every committed mutation publishes a [`ChangeEvent`] for its entity
//! topic on the [`ChangeBus`]; connected realtime sessions re-fetch the
//! affected list when the signal reaches them.

pub mod bus;

pub use bus::{ChangeBus, ChangeEvent, Topic};
