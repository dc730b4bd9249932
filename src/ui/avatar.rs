use dioxus::prelude::*;

use crate::utils::initials;

/// Colored disc with the first letters of a name.
#[component]
pub fn Avatar(hex_color: String, name: String, #[props(default = 35)] size: u32) -> Element {
    let letters = initials(&name);
    let font = size / 2;
    rsx! {
        div {
            style: "
                width: {size}px;
                height: {size}px;
                border-radius: 50%;
                background: {hex_color};
                color: white;
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: {font}px;
                flex-shrink: 0;
                user-select: none;
            ",
            "{letters}"
        }
    }
}
