//! Batch progress events.

pub mod bus;

pub use bus::{BatchEvent, BatchEventKind, EventBus};
