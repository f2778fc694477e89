//! Tag builder functions.

use crate::Attributes;

/// Build a self-closing tag.
///
/// ```
/// use toolbox_html::{Attributes, tag};
///
/// assert_eq!(tag("br", &Attributes::new()), "<br />");
/// ```
#[must_use]
pub fn tag(name: &str, attributes: &Attributes) -> String {
    format!("<{name}{} />", attributes.render())
}

/// Build an opening tag that is left unclosed.
#[must_use]
pub fn open_tag(name: &str, attributes: &Attributes) -> String {
    format!("<{name}{}>", attributes.render())
}

/// Wrap content in a tag.
///
/// ```
/// use toolbox_html::{Attributes, content_tag};
///
/// let inner = content_tag("p", "Hello world!", &Attributes::new());
/// assert_eq!(
///     content_tag("div", &inner, &Attributes::class("strong")),
///     r#"<div class="strong"><p>Hello world!</p></div>"#
/// );
/// ```
#[must_use]
pub fn content_tag(name: &str, content: &str, attributes: &Attributes) -> String {
    format!("<{name}{}>{content}</{name}>", attributes.render())
}

/// Build an anchor with `href` as its first attribute.
#[must_use]
pub fn link_to(text: &str, href: &str, attributes: &Attributes) -> String {
    let mut attrs = Attributes::new().with("href", href);
    for (key, value) in attributes.iter() {
        attrs.set(key, value);
    }
    content_tag("a", text, &attrs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tag_self_closing_by_default() {
        assert_eq!(tag("br", &Attributes::new()), "<br />");
    }

    #[test]
    fn test_tag_with_attribute() {
        assert_eq!(tag("hr", &Attributes::class("thin")), r#"<hr class="thin" />"#);
    }

    #[test]
    fn test_open_tag_is_unclosed() {
        let attrs = Attributes::new().with("type", "text");

        assert_eq!(open_tag("input", &attrs), r#"<input type="text">"#);
    }

    #[test]
    fn test_content_tag_plain() {
        assert_eq!(content_tag("b", "Hello", &Attributes::new()), "<b>Hello</b>");
    }

    #[test]
    fn test_content_tag_with_attribute() {
        assert_eq!(
            content_tag("b", "Hello", &Attributes::class("highlight")),
            r#"<b class="highlight">Hello</b>"#
        );
    }

    #[test]
    fn test_content_tag_empty_content() {
        assert_eq!(content_tag("ol", "", &Attributes::new()), "<ol></ol>");
    }

    #[test]
    fn test_link_to_puts_href_first() {
        let link = link_to("Home", "/", &Attributes::class("nav"));

        assert_eq!(link, r#"<a href="/" class="nav">Home</a>"#);
    }
}
