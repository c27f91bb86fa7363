//! Applies a route group's [`PageMeta`] to the document head.

use contracts::shared::page_meta::PageMeta;
use contracts::shared::routes::RouteGroup;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use web_sys::{window, Document};

/// Applies `meta` once the calling layout has mounted.
pub fn use_page_meta(meta: PageMeta) {
    Effect::new(move |_| {
        log::debug!("Applying page metadata: {}", meta.title);
        apply_page_meta(&meta);
    });
}

/// Applies the metadata of the group owning the current path, falling back
/// to `default`. Re-applies on every navigation, for layouts that stay
/// mounted while their nested sections change.
pub fn use_route_meta(default: RouteGroup) {
    let location = use_location();
    Effect::new(move |_| {
        let group = RouteGroup::resolve(&location.pathname.get()).unwrap_or(default);
        let meta = group.metadata();
        log::debug!("Applying page metadata for {:?}: {}", group, meta.title);
        apply_page_meta(&meta);
    });
}

fn apply_page_meta(meta: &PageMeta) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    document.set_title(&meta.document_title());
    set_meta_tag(&document, "description", Some(meta.description));

    let robots = meta.robots.map(|r| r.content());
    set_meta_tag(&document, "robots", robots.as_deref());
}

/// Sets `<meta name=.. content=..>`, creating the tag when missing.
/// `None` removes an existing tag so a previous group's value does not leak.
fn set_meta_tag(document: &Document, name: &str, content: Option<&str>) {
    let selector = format!("meta[name=\"{}\"]", name);
    let existing = document.query_selector(&selector).ok().flatten();

    match (existing, content) {
        (Some(elem), Some(content)) => {
            let _ = elem.set_attribute("content", content);
        }
        (Some(elem), None) => elem.remove(),
        (None, Some(content)) => {
            let head = match document.head() {
                Some(h) => h,
                None => return,
            };
            if let Ok(elem) = document.create_element("meta") {
                let _ = elem.set_attribute("name", name);
                let _ = elem.set_attribute("content", content);
                let _ = head.append_child(&elem);
            }
        }
        (None, None) => {}
    }
}
