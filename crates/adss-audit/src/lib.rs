//! adss-audit
//!
//! Application-level audit events, emitted through `tracing` so they land
//! in the same structured log stream as everything else.

pub mod events;
