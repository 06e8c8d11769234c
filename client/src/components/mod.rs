//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `MapHost` drives the canvas engine and publishes grid changes into
//! `GridViewState`; the readouts render that state as text.

pub mod active_cells;
pub mod map_host;
pub mod origin_readout;
