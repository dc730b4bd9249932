//! Renders release-note markdown as RSX.
//!
//! Release bodies arrive as markdown from the releases API; pulldown-cmark
//! parses them and this module folds the event stream into Dioxus elements.
//! Only the subset that shows up in changelogs is handled; anything else
//! degrades to a plain container.

use dioxus::prelude::*;
use pulldown_cmark::{Event, HeadingLevel, Parser, TagEnd};

pub fn markdown_to_rsx(md: &str) -> Element {
    // one vec of children per open container
    let mut stack: Vec<Vec<Element>> = vec![vec![]];

    for ev in Parser::new(md) {
        match ev {
            Event::Start(_) => stack.push(vec![]),
            Event::End(tag) => {
                let children = stack.pop().unwrap_or_default().into_iter();
                let node = close_container(tag, children);
                if let Some(parent) = stack.last_mut() {
                    parent.push(node);
                }
            }
            Event::Text(text) => push_leaf(&mut stack, rsx! { "{text}" }),
            Event::Code(code) => push_leaf(&mut stack, rsx! {
                code { "{code}" }
            }),
            Event::Rule => push_leaf(&mut stack, rsx! {
                hr {}
            }),
            Event::SoftBreak | Event::HardBreak => push_leaf(&mut stack, rsx! {
                br {}
            }),
            // raw HTML, footnotes etc. are dropped
            _ => {}
        }
    }

    let children = stack.into_iter().flatten();
    rsx! {
        div { class: "markdown", {children} }
    }
}

fn push_leaf(stack: &mut Vec<Vec<Element>>, node: Element) {
    if let Some(top) = stack.last_mut() {
        top.push(node);
    }
}

fn close_container(tag: TagEnd, children: impl Iterator<Item = Element>) -> Element {
    match tag {
        TagEnd::Paragraph => rsx! {
            p { {children} }
        },
        TagEnd::Heading(level) => match level {
            HeadingLevel::H1 => rsx! { h1 { {children} } },
            HeadingLevel::H2 => rsx! { h2 { {children} } },
            HeadingLevel::H3 => rsx! { h3 { {children} } },
            _ => rsx! { h4 { {children} } },
        },
        TagEnd::BlockQuote(_) => rsx! {
            blockquote { {children} }
        },
        TagEnd::CodeBlock => rsx! {
            pre {
                code { {children} }
            }
        },
        TagEnd::List(_) => rsx! {
            ul { {children} }
        },
        TagEnd::Item => rsx! {
            li { {children} }
        },
        TagEnd::Emphasis => rsx! {
            em { {children} }
        },
        TagEnd::Strong => rsx! {
            strong { {children} }
        },
        TagEnd::Link => rsx! {
            span { {children} }
        },
        _ => rsx! {
            div { {children} }
        },
    }
}
