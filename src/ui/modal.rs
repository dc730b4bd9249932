use dioxus::prelude::*;

/// Centered modal with a dimmed backdrop. Clicking the backdrop closes it;
/// clicks inside the card do not propagate out.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            style: "
                position: fixed;
                inset: 0;
                background: rgba(0,0,0,.5);
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 100;
            ",
            onclick: move |_| {
                on_close.call(());
            },
            div {
                style: "
                    background: #fff;
                    border-radius: 6px;
                    padding: 1rem;
                    min-width: 280px;
                    max-width: 90vw;
                ",
                onclick: move |e: Event<MouseData>| {
                    e.stop_propagation();
                },
                div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem;",
                    h3 { style: "margin: 0;", "{title}" }
                    button {
                        style: "
                            background: none;
                            border: none;
                            font-size: 1.2rem;
                            cursor: pointer;
                            padding: 0.25rem;
                            color: #666;
                        ",
                        onclick: move |_| {
                            on_close.call(());
                        },
                        "×"
                    }
                }
                {children}
            }
        }
    }
}
