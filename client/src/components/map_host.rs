//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The engine owns the grid overlay, the camera and all hit testing. This host
//! creates it once the `<canvas>` is mounted, forwards DOM pointer and wheel
//! events to it, and applies the returned actions: text readouts go to
//! `GridViewState`, cursor changes to the canvas style, and redraws to the
//! canvas itself.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use canvas::engine::{Action, Engine};

#[cfg(feature = "csr")]
use crate::state::grid_view::GridViewState;
#[cfg(feature = "csr")]
use crate::util::canvas_input::{map_button, pointer_point, wheel_delta, wheel_point};
#[cfg(feature = "csr")]
use crate::util::canvas_viewport::{render, sync_viewport};
#[cfg(feature = "csr")]
use crate::util::query::start_point;

#[cfg(feature = "csr")]
fn process_actions(actions: Vec<Action>, engine: &Engine, grid: RwSignal<GridViewState>, cursor: RwSignal<String>) {
    let mut needs_render = false;
    for action in actions {
        match action {
            Action::OriginChanged(origin) => grid.update(|g| g.set_origin(origin)),
            Action::ActiveCellsChanged(active) => grid.update(|g| g.set_active(active)),
            Action::SetCursor(name) => cursor.set(name),
            Action::RenderNeeded => needs_render = true,
        }
    }
    if needs_render {
        render(engine);
    }
}

/// The interactive map canvas.
#[component]
pub fn MapHost() -> impl IntoView {
    #[cfg(feature = "csr")]
    let grid = expect_context::<RwSignal<GridViewState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let cursor = RwSignal::new(String::from("crosshair"));

    #[cfg(feature = "csr")]
    let engine = Rc::new(RefCell::new(None::<Engine>));

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let mut instance = Engine::new(canvas, start_point());
            let mut actions = sync_viewport(&mut instance, &canvas_ref);
            actions.extend(instance.initial_actions());
            process_actions(actions, &instance, grid, cursor);
            *engine.borrow_mut() = Some(instance);
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let resize = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                let actions = sync_viewport(engine, &canvas_ref);
                process_actions(actions, engine, grid, cursor);
            }
        });
        on_cleanup(move || resize.remove());
    }

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                if let Some(canvas) = canvas_ref.get() {
                    if let Err(e) = canvas.set_pointer_capture(ev.pointer_id()) {
                        log::debug!("pointer capture failed: {e:?}");
                    }
                }
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let mut actions = sync_viewport(engine, &canvas_ref);
                    actions.extend(engine.on_pointer_down(pointer_point(&ev), map_button(ev.button())));
                    process_actions(actions, engine, grid, cursor);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_move(pointer_point(&ev));
                    process_actions(actions, engine, grid, cursor);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(canvas) = canvas_ref.get() {
                    if let Err(e) = canvas.release_pointer_capture(ev.pointer_id()) {
                        log::debug!("pointer release failed: {e:?}");
                    }
                }
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_up(pointer_point(&ev), map_button(ev.button()));
                    process_actions(actions, engine, grid, cursor);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_leave();
                    process_actions(actions, engine, grid, cursor);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_wheel = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::WheelEvent| {
                ev.prevent_default();
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_wheel(wheel_point(&ev), wheel_delta(&ev));
                    process_actions(actions, engine, grid, cursor);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    view! {
        <canvas
            id="map_canvas"
            class="canvas-host"
            node_ref=canvas_ref
            style:cursor=move || cursor.get()
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
            on:wheel=on_wheel
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
