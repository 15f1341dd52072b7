//! Before/after image comparison slider component.

use dioxus::prelude::*;

use crate::split::{self, SplitAxis};

/// Widget stylesheet.
///
/// Inject once in the host application, e.g. in a `style {}` node at the
/// root component, next to the application's own CSS.
pub const STYLE: &str = include_str!("styles/beforeafter.css");

/// Image comparison slider: two stacked images with a draggable split.
///
/// The `before` image fills the widget and the `after` image is clipped to
/// the fraction of the track given by `offset`, so `0.0` shows only the
/// before image and `1.0` only the after image. Dragging anywhere on the
/// widget moves the split to the pointer.
#[component]
pub fn BeforeAfter(
    /// Source of the "before" image.
    before: String,
    /// Source of the "after" image.
    after: String,
    /// Split position in `[0, 1]`. Pass a signal to read and drive the
    /// position from outside the widget; when omitted the widget owns a
    /// private signal starting at `0.5`. Values written from outside are
    /// clamped before use.
    #[props(default)] offset: Option<Signal<f64>>,
    /// Fill 100% of the parent instead of sizing to the image.
    #[props(default = false)] contain: bool,
    /// Darkening overlay while the pointer hovers the widget.
    #[props(default = true)] overlay: bool,
    /// Fade labels and overlay while a drag is active.
    #[props(default = true)] hide_on_slide: bool,
    /// Content rendered over the before side.
    #[props(default)] before_label: Option<Element>,
    /// Content rendered over the after side.
    #[props(default)] after_label: Option<Element>,
    /// Split top-to-bottom instead of left-to-right.
    #[props(default = false)] vertical: bool,
    /// Diameter of the circular drag handle, in pixels.
    #[props(default = split::DEFAULT_HANDLE_SIZE)] handle_size: f64,
    /// Extra class names merged into the container's class list.
    #[props(default)] class: Option<String>,
) -> Element {
    let fallback = use_signal(|| split::DEFAULT_OFFSET);
    let mut offset = offset.unwrap_or(fallback);
    let mut track_size = use_signal(|| None::<(f64, f64)>);
    let mut sliding = use_signal(|| false);

    let axis = SplitAxis::from_vertical(vertical);

    // Copy-captures only signals and the axis, so both pointer handlers can
    // own their own copy.
    let mut slide_to = move |point: (f64, f64)| {
        if let Some(size) = track_size() {
            if let Some(next) = split::offset_from_pointer(point, size, axis) {
                offset.set(next);
            }
        }
    };

    let shown = split::clamp_offset(offset());
    let offset_pct = shown * 100.0;

    let mut classes = String::from("ba");
    if vertical {
        classes.push_str(" ba-vertical");
    }
    if contain {
        classes.push_str(" ba-contain");
    }
    if hide_on_slide && sliding() {
        classes.push_str(" ba-sliding");
    }
    if let Some(extra) = &class {
        classes.push(' ');
        classes.push_str(extra);
    }

    let before_label = before_label.map(|label| {
        rsx! {
            div { class: "ba-label ba-label-before", {label} }
        }
    });
    let after_label = after_label.map(|label| {
        rsx! {
            div { class: "ba-label ba-label-after", {label} }
        }
    });

    rsx! {
        div {
            class: "{classes}",
            style: "--ba-offset: {offset_pct}%; --ba-handle-size: {handle_size}px;",

            onresize: move |evt| {
                if let Ok(size) = evt.get_border_box_size() {
                    track_size.set(Some((size.width, size.height)));
                }
            },
            onpointerdown: move |evt| {
                evt.prevent_default();
                sliding.set(true);
                let point = evt.element_coordinates();
                slide_to((point.x, point.y));
                log::debug!("slide started");
            },
            onpointermove: move |evt| {
                if sliding() {
                    let point = evt.element_coordinates();
                    slide_to((point.x, point.y));
                }
            },
            onpointerup: move |_| {
                if sliding() {
                    sliding.set(false);
                    log::debug!("slide ended at offset {:.3}", split::clamp_offset(offset()));
                }
            },
            onpointercancel: move |_| sliding.set(false),
            onpointerleave: move |_| sliding.set(false),

            img { class: "ba-image ba-before", src: "{before}", draggable: false }
            div { class: "ba-clip",
                img { class: "ba-image ba-after", src: "{after}", draggable: false }
            }
            if overlay {
                div { class: "ba-overlay" }
            }
            {before_label}
            {after_label}
            div { class: "ba-divider" }
            div { class: "ba-handle" }
        }
    }
}
