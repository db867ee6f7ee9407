//! adss-store
//!
//! In-memory knowledge store: a class taxonomy loaded once at startup and
//! per-request scopes holding the individuals created while recording a
//! result. The rule engine never reads from here; results are projected
//! onto a scope after they are assembled.

pub mod error;
pub mod project;
pub mod store;
pub mod taxonomy;
