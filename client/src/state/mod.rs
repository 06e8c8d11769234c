//! Client-side state shared through Leptos context.

pub mod grid_view;
