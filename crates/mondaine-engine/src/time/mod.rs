//! Time subsystem.
//!
//! Provides a testable periodic tick subscription without coupling to the
//! runtime. Intended usage:
//! - create a `Ticker` when a component mounts, cancel it when it unmounts
//! - call `poll(now)` from the event loop and report `deadline()` so the loop
//!   can sleep until the next tick

mod ticker;

pub use ticker::{Tick, Ticker};
