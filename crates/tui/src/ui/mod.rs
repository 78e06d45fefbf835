//! UI rendering module for the terminal host.
//!
//! Components, the top-level view, theme and the event loop that drives them.

pub(crate) mod components;
pub(crate) mod main_component;
pub(crate) mod runtime;
pub(crate) mod theme;
