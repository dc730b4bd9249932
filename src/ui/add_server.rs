use dioxus::prelude::*;

use crate::state::use_store;

/// Body of the "Add Server" modal: a name field and a create button.
#[component]
pub fn AddServer(on_close: EventHandler<()>) -> Element {
    let mut store = use_store();
    let mut name = use_signal(String::new);

    let create = move |_| {
        let value = name().trim().to_string();
        if value.is_empty() {
            return;
        }
        store.add_server(value);
        on_close.call(());
    };

    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 0.5rem;",
            label { style: "font-weight: bold;", "Server name" }
            input {
                value: name(),
                placeholder: "e.g., Rust Hideout",
                oninput: move |e| {
                    name.set(e.value());
                },
            }
            button {
                style: "
                    background: #007bff;
                    color: white;
                    border: none;
                    padding: 0.5rem 1rem;
                    border-radius: 4px;
                    cursor: pointer;
                    align-self: flex-end;
                ",
                onclick: create,
                "Create"
            }
        }
    }
}
