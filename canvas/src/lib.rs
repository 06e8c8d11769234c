//! Canvas map surface for the centicle grid overlay.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It stands in
//! for a tiled web map: a flat longitude/latitude plane with pan and zoom,
//! on which the [`centicle::GridOverlay`] places its rectangles. The host
//! layer wires DOM events to the engine and applies the returned
//! [`engine::Action`]s to the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine, testable [`engine::EngineCore`] and the [`engine::Scene`] surface |
//! | [`doc`] | Rectangle store |
//! | [`camera`] | Pan/zoom camera and degree/pixel conversions |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing clicks against subscribed rectangles |
//! | [`render`] | Scene rendering to a 2D context |
//! | [`consts`] | Zoom limits, gesture thresholds and colors |

pub mod camera;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod hit;
pub mod input;
pub mod render;
