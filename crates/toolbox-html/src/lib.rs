//! Minimal HTML tag builders.
//!
//! This crate provides the formatting primitive shared by the navigation
//! helpers and the embed snippet helpers:
//! - [`tag`]: self-closing element (`<br />`)
//! - [`open_tag`]: unclosed opening element (`<div class="x">`)
//! - [`content_tag`]: element wrapping content (`<b>Hello</b>`)
//! - [`link_to`]: anchor element
//!
//! Attribute values are inserted verbatim. Callers are responsible for
//! escaping untrusted values before passing them in.
//!
//! # Example
//!
//! ```
//! use toolbox_html::{Attributes, content_tag, tag};
//!
//! assert_eq!(tag("hr", &Attributes::class("thin")), r#"<hr class="thin" />"#);
//! assert_eq!(content_tag("b", "Hello", &Attributes::new()), "<b>Hello</b>");
//! ```

mod attributes;
mod tag;

pub use attributes::Attributes;
pub use tag::{content_tag, link_to, open_tag, tag};
