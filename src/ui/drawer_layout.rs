use dioxus::prelude::*;

use crate::drawer::{DrawerGesture, DrawerMetrics};
use crate::state::use_window_properties;

/// Swipeable three-pane layout: left drawer, content, right drawer.
///
/// Touch handlers live on the container element, so their registration is
/// scoped to this component's lifetime. All gesture arithmetic is delegated
/// to [`DrawerGesture`].
#[component]
pub fn DrawerLayout(left: Element, content: Element, right: Element) -> Element {
    let window = use_window_properties();
    let width = (window.width)();
    let metrics = DrawerMetrics::new(width);

    let mut gesture = use_signal(move || DrawerGesture::new(&metrics));
    let mut dragging = use_signal(|| false);

    // re-settle on the active page when the viewport width changes
    use_effect(move || {
        let metrics = DrawerMetrics::new((window.width)());
        let page = gesture.peek().page;
        gesture.write().set_page(page, &metrics);
    });

    let touch_x = |e: &Event<TouchData>| e.touches().first().map(|t| t.client_coordinates().x);

    let offset = gesture.read().offset;
    let transition = if dragging() {
        "none"
    } else {
        "transform 0.25s ease"
    };
    let drawer_width = metrics.drawer_width();
    let total_width = metrics.total_width();

    rsx! {
        div {
            class: "drawer-layout",
            style: "overflow: hidden; width: {width}px; height: 100%;",
            ontouchstart: move |e: Event<TouchData>| {
                if let Some(x) = touch_x(&e) {
                    dragging.set(true);
                    gesture.write().touch_start(x);
                }
            },
            ontouchmove: move |e: Event<TouchData>| {
                if let Some(x) = touch_x(&e) {
                    let metrics = DrawerMetrics::new((window.width)());
                    gesture.write().touch_move(x, &metrics);
                }
            },
            ontouchend: move |_| {
                let metrics = DrawerMetrics::new((window.width)());
                gesture.write().touch_end(&metrics);
                dragging.set(false);
            },
            div {
                class: "drawer-container",
                style: "
                    display: flex;
                    height: 100%;
                    width: {total_width}px;
                    transform: translateX({offset}px);
                    transition: {transition};
                ",
                div { style: "width: {drawer_width}px; display: flex;", {left} }
                div { class: "drawer-content", style: "width: {width}px;", {content} }
                div { style: "width: {drawer_width}px; display: flex;", {right} }
            }
        }
    }
}
