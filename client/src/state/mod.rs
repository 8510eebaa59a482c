//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `selection` defines the scope value, `tap_selection` reconciles it with the
//! live inventory, and `scope` is the read-only projection other views see.

pub mod scope;
pub mod selection;
pub mod tap_selection;
