//! Table of contents from compiled HTML.
//!
//! Sections are elements matching a selector (`div.section` by default).
//! A section belongs to the nearest enclosing section, so wrapper elements
//! between nested sections are allowed. The title of a section is the inner
//! markup of its first direct-child heading of any level and its link is `#`
//! followed by the section id.
//!
//! ```html
//! <div class="section" id="intro">
//!   <h1>Intro</h1>
//!   <div class="section" id="setup"><h2>Setup</h2></div>
//! </div>
//! ```

use scraper::{ElementRef, Html, Selector};

use crate::node::MenuNode;
use crate::options::TocOptions;

/// Deepest heading level; sections nested below it are not extracted.
const MAX_HEADING_LEVEL: u8 = 6;

/// Title of a section without a heading.
const UNTITLED: &str = "untitled";

/// Extract the section outline of an HTML document.
///
/// Returns an empty vector for empty input, an invalid selector, or a
/// document without matching sections.
#[must_use]
pub fn extract_toc(html: &str, options: &TocOptions) -> Vec<MenuNode> {
    if html.trim().is_empty() {
        return Vec::new();
    }

    let selector = match Selector::parse(&options.path) {
        Ok(selector) => selector,
        Err(e) => {
            tracing::warn!(path = %options.path, error = %e, "Invalid section selector");
            return Vec::new();
        }
    };

    let document = Html::parse_document(html);
    let Some(body) = document_body(&document) else {
        return Vec::new();
    };

    find_sections(body, &selector, 1)
}

fn document_body(document: &Html) -> Option<ElementRef<'_>> {
    let selector = Selector::parse("body").ok()?;
    document.select(&selector).next()
}

fn find_sections(parent: ElementRef<'_>, selector: &Selector, level: u8) -> Vec<MenuNode> {
    child_sections(parent, selector)
        .into_iter()
        .map(|section| {
            let heading = section_heading(section);
            let title = heading.map_or_else(
                || UNTITLED.to_owned(),
                |h| h.inner_html().trim().to_owned(),
            );
            let id = section
                .value()
                .attr("id")
                .or_else(|| heading.and_then(|h| h.value().attr("id")))
                .unwrap_or_default();
            let subsections = if level < MAX_HEADING_LEVEL {
                find_sections(section, selector, level + 1)
            } else {
                Vec::new()
            };

            MenuNode::new(title, format!("#{id}")).with_subsections(subsections)
        })
        .collect()
}

/// Sections whose nearest enclosing section is `parent`.
fn child_sections<'a>(parent: ElementRef<'a>, selector: &Selector) -> Vec<ElementRef<'a>> {
    parent
        .select(selector)
        .filter(|section| {
            section
                .ancestors()
                .filter_map(ElementRef::wrap)
                .find(|el| *el == parent || selector.matches(el))
                == Some(parent)
        })
        .collect()
}

/// First direct-child heading (`h1` to `h6`).
fn section_heading(section: ElementRef<'_>) -> Option<ElementRef<'_>> {
    section
        .children()
        .filter_map(ElementRef::wrap)
        .find(|el| is_heading(el.value().name()))
}

fn is_heading(name: &str) -> bool {
    matches!(name, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}
