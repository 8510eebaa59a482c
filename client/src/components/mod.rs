//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `tap_selector` owns the global scope; `scope_summary` is one of its
//! read-only consumers.

pub mod scope_summary;
pub mod tap_selector;
