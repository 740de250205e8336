//! Flutter-facing FFI crate for rolodex.
//!
//! # Responsibility
//! - Host the FRB-exported API surface.
//! - Keep all business logic in `rolodex_core`; this crate only composes and
//!   translates.

pub mod api;
