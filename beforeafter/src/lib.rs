//! # beforeafter
//!
//! A before/after image comparison slider for [Dioxus]. Two images are
//! stacked and a draggable handle controls how much of each is revealed;
//! the split position is a `Signal<f64>` in `[0, 1]` so it can be read and
//! driven from outside the widget.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use beforeafter::BeforeAfter;
//! use dioxus::prelude::*;
//!
//! fn app() -> Element {
//!     rsx! {
//!         // Inject the widget stylesheet once, next to your own CSS.
//!         style { {beforeafter::STYLE} }
//!         BeforeAfter {
//!             before: "/images/original.jpg",
//!             after: "/images/edited.jpg",
//!             before_label: rsx! { span { "Original" } },
//!             after_label: rsx! { span { "Edited" } },
//!         }
//!     }
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`BeforeAfter`] — the component and its prop contract
//! - [`split`] — UI-free offset math (clamping, axis projection)
//! - [`STYLE`] — the widget stylesheet, injected once by the host app
//!
//! [Dioxus]: https://dioxuslabs.com

mod component;
pub mod split;

pub use component::{BeforeAfter, BeforeAfterProps, STYLE};
