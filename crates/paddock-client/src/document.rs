//! Queryable HTML document tree.
//!
//! Thin wrapper over `scraper` exposing only what result pages need:
//! attribute lookup, text content, descendant search and sibling walks.

use paddock_core::error::AppError;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// The `<html>` element.
    pub fn root(&self) -> Element<'_> {
        Element {
            inner: self.html.root_element(),
        }
    }

    /// All elements matching a CSS selector, in document order.
    pub fn select(&self, css: &str) -> Result<Vec<Element<'_>>, AppError> {
        let selector = parse_selector(css)?;
        Ok(self
            .html
            .select(&selector)
            .map(|inner| Element { inner })
            .collect())
    }

    /// The first element whose `id` attribute equals `id`.
    pub fn by_id(&self, id: &str) -> Option<Element<'_>> {
        let root = self.root();
        if root.attribute("id") == Some(id) {
            return Some(root);
        }
        root.find(|e| e.attribute("id") == Some(id))
    }
}

/// One element of a [`Document`].
#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    inner: ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Lower-case tag name.
    pub fn name(&self) -> &'a str {
        self.inner.value().name()
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.inner.value().attr(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.inner.value().classes().any(|c| c == class)
    }

    /// Concatenated text of this element and all its descendants.
    pub fn text(&self) -> String {
        self.inner.text().collect()
    }

    /// Descendant elements matching a CSS selector, in document order.
    pub fn select(&self, css: &str) -> Result<Vec<Element<'a>>, AppError> {
        let selector = parse_selector(css)?;
        Ok(self
            .inner
            .select(&selector)
            .map(|inner| Element { inner })
            .collect())
    }

    /// First descendant (not self) satisfying `predicate`, depth first.
    pub fn find<P>(&self, predicate: P) -> Option<Element<'a>>
    where
        P: Fn(&Element<'a>) -> bool,
    {
        self.inner
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .map(|inner| Element { inner })
            .find(|e| predicate(e))
    }

    /// First following sibling element satisfying `predicate`.
    pub fn next_sibling_element<P>(&self, predicate: P) -> Option<Element<'a>>
    where
        P: Fn(&Element<'a>) -> bool,
    {
        self.inner
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .map(|inner| Element { inner })
            .find(|e| predicate(e))
    }

    /// Text directly following this element.
    ///
    /// Blank text nodes, comments and elements without text (such as `<br>`)
    /// are skipped. If the next meaningful sibling is an element, its text
    /// content is returned instead.
    pub fn next_sibling_text(&self) -> Option<String> {
        for node in self.inner.next_siblings() {
            let text = match node.value() {
                Node::Text(text) => text.trim().to_string(),
                Node::Comment(_) => continue,
                Node::Element(_) => match ElementRef::wrap(node) {
                    Some(e) => e.text().collect::<String>().trim().to_string(),
                    None => continue,
                },
                _ => return None,
            };
            if !text.is_empty() {
                return Some(text);
            }
        }
        None
    }
}

fn parse_selector(css: &str) -> Result<Selector, AppError> {
    Selector::parse(css)
        .map_err(|e| AppError::StructureError(format!("Invalid selector {css:?}: {e:?}")))
}
