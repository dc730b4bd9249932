use dioxus::prelude::*;

/// Material icon leaf component.
#[component]
pub fn Icon(
    name: String,
    #[props(default = 24)] size: u32,
    color: Option<String>,
    title: Option<String>,
) -> Element {
    let color = color.unwrap_or_else(|| "inherit".to_string());
    rsx! {
        span {
            class: "material-icons",
            style: "font-size: {size}px; color: {color}; user-select: none;",
            title,
            "{name}"
        }
    }
}
