use iocraft::prelude::*;

use crate::gallery::GalleryEntry;

#[derive(Default, Props)]
pub struct GalleryListProps {
    pub entries: Vec<GalleryEntry>,
}

#[component]
pub fn GalleryList(props: &GalleryListProps) -> impl Into<AnyElement<'static>> {
    if props.entries.is_empty() {
        element! {
            Text(content: "Gallery is empty")
        }
        .into_any()
    } else {
        element! {
            View(flex_direction: FlexDirection::Column) {
                #(props.entries.iter().enumerate().map(|(index, entry)| {
                    element! {
                        View(flex_direction: FlexDirection::Row) {
                            Text(content: format!("{:>3}  ", index), color: Color::Yellow)
                            Text(weight: Weight::Bold, content: format!("{}  ", entry.name))
                            Text(content: format!("{}  ", display_size(entry.size)))
                            Text(content: entry.url.clone(), color: Color::Cyan)
                        }
                    }
                }))
            }
        }
        .into_any()
    }
}

fn display_size(size: Option<u64>) -> String {
    match size {
        Some(bytes) => format!("{bytes} B"),
        None => "-".to_string(),
    }
}

#[derive(Default, Props)]
pub struct ErrorMessageProps {
    pub message: String,
}

#[component]
pub fn ErrorMessage(props: &ErrorMessageProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(flex_direction: FlexDirection::Row) {
            Text(content: "✗ ", color: Color::Red)
            Text(content: &props.message, color: Color::Red)
        }
    }
}

#[derive(Default, Props)]
pub struct SuccessMessageProps {
    pub message: String,
}

#[component]
pub fn SuccessMessage(props: &SuccessMessageProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(flex_direction: FlexDirection::Row) {
            Text(content: "✓ ", color: Color::Green)
            Text(content: &props.message, color: Color::Green)
        }
    }
}

#[derive(Default, Props)]
pub struct InputPromptProps {
    pub prompt: String,
    pub default: Option<String>,
    pub description: Option<String>,
}

#[component]
pub fn InputPrompt(props: &InputPromptProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(flex_direction: FlexDirection::Column) {
            View(flex_direction: FlexDirection::Row) {
                Text(weight: Weight::Bold, content: &props.prompt)
                #(props.default.as_ref().map(|default| element! {
                    Text(content: format!(" [{default}]"))
                }))
            }
            #(props.description.as_ref().map(|description| element! {
                Text(content: description)
            }))
        }
    }
}

#[component]
pub fn SessionHeader() -> impl Into<AnyElement<'static>> {
    element! {
        View(flex_direction: FlexDirection::Row, margin_bottom: 1) {
            View(background_color: Color::Blue) {
                Text(content: " imgup ", color: Color::White)
            }
            Text(content: " presigned image uploads")
        }
    }
}

#[component]
pub fn ConfigHeader() -> impl Into<AnyElement<'static>> {
    element! {
        View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
            View(flex_direction: FlexDirection::Row) {
                View(background_color: Color::Blue) {
                    Text(content: " imgup ", color: Color::White)
                }
                Text(content: " configuration")
            }
        }
    }
}
