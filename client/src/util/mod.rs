//! Browser helpers for the map host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Isolates DOM event decoding, canvas sizing and URL access from component
//! logic. Everything here needs a browser and is built only with `csr`.

pub mod canvas_input;
pub mod canvas_viewport;
pub mod query;
