use leptos::{component, view, Children, IntoView};

use crate::tooltip::{place_tooltip, TooltipAnchor};

/// What the pointer is over, and where its tooltip goes
#[derive(Debug, Clone, PartialEq)]
pub struct Hover {
    pub id: String,
    pub anchor: TooltipAnchor,
}

impl Hover {
    #[must_use]
    pub fn from_event(id: &str, ev: &web_sys::MouseEvent) -> Self {
        Self {
            id: id.to_string(),
            anchor: anchor_for_event(ev),
        }
    }
}

/// Tooltip placement for the pointer position of a mouse event
#[must_use]
pub fn anchor_for_event(ev: &web_sys::MouseEvent) -> TooltipAnchor {
    let window = web_sys::window();
    let viewport_width = window
        .as_ref()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1920.0);
    let viewport_height = window
        .as_ref()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1080.0);

    place_tooltip(
        (f64::from(ev.page_x()), f64::from(ev.page_y())),
        (f64::from(ev.client_x()), f64::from(ev.client_y())),
        (viewport_width, viewport_height),
    )
}

#[component]
#[must_use]
pub fn Tooltip(anchor: TooltipAnchor, children: Children) -> impl IntoView {
    view! {
        <div
            class="map-tooltip"
            style=format!("{} background-color: white; padding: 1em; pointer-events: none;", anchor.style())
        >
            {children()}
        </div>
    }
}
