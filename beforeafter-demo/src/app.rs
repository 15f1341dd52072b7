//! Root demo component.

use dioxus::prelude::*;

use beforeafter::BeforeAfter;

use crate::config::DemoConfig;

const MAIN_CSS: &str = include_str!("styles/main.css");

/// Demo window: a horizontal slider with a bound offset and labels, and a
/// vertical `contain` slider in a fixed-size panel.
#[component]
pub fn App() -> Element {
    let config = use_signal(DemoConfig::load);
    let (before, after) = {
        let c = config.read();
        (c.before.clone(), c.after.clone())
    };

    // Shared with the widget: dragging the handle moves the range input and
    // vice versa.
    let mut split = use_signal(|| 0.5);
    let pct = split() * 100.0;

    rsx! {
        style { {beforeafter::STYLE} }
        style { {MAIN_CSS} }
        div { class: "app",
            h1 { "beforeafter" }

            section { class: "panel",
                h2 { "Horizontal, bound offset" }
                BeforeAfter {
                    before: before.clone(),
                    after: after.clone(),
                    offset: split,
                    class: "demo-slider",
                    before_label: rsx! {
                        span { "Before" }
                    },
                    after_label: rsx! {
                        span { "After" }
                    },
                }
                div { class: "panel-controls",
                    span { class: "readout", "{pct:.0}%" }
                    input {
                        r#type: "range",
                        min: "0",
                        max: "1",
                        step: "0.001",
                        value: "{split()}",
                        oninput: move |evt| {
                            if let Ok(v) = evt.value().parse::<f64>() {
                                split.set(v);
                            }
                        }
                    }
                }
            }

            section { class: "panel",
                h2 { "Vertical, contain" }
                div { class: "fixed-box",
                    BeforeAfter {
                        before,
                        after,
                        vertical: true,
                        contain: true,
                        overlay: false,
                        handle_size: 28.0,
                    }
                }
            }
        }
    }
}
