use std::sync::LazyLock;

use scraper::{Html, Selector};

static SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("script").expect("script selector is valid"));

/// Parsed embed page, queried by the key strategies
///
/// Wraps the `scraper` document and exposes only the three lookups the
/// strategies need: attribute lookup, comment search and script text.
pub struct EmbedPage {
    html: Html,
}

impl EmbedPage {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Value of `attr` on the first element matching `selector`
    ///
    /// Only the first matching element is inspected, even when it lacks the
    /// attribute and a later one carries it.
    pub fn first_attr(&self, selector: &Selector, attr: &str) -> Option<&str> {
        self.html.select(selector).next()?.value().attr(attr)
    }

    /// Text of every comment node, in document order
    pub fn comments(&self) -> impl Iterator<Item = &str> + '_ {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(|node| node.value().as_comment())
            .map(|comment| &**comment)
    }

    /// Text of every inline script block, in document order
    ///
    /// Lazy: nothing past the element the caller stops at is collected.
    /// External scripts (`<script src=..>`) have no text and are skipped.
    pub fn scripts(&self) -> impl Iterator<Item = String> + '_ {
        self.html
            .select(&SCRIPT_SELECTOR)
            .map(|script| script.text().collect::<String>())
            .filter(|text| !text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_attr_only_inspects_first_match() {
        let page = EmbedPage::parse(
            r#"<div class="a"></div><div class="a" data-id="2"></div>"#,
        );
        let selector = Selector::parse("div.a").unwrap();
        assert_eq!(page.first_attr(&selector, "data-id"), None);
    }

    #[test]
    fn test_comments_in_document_order() {
        let page = EmbedPage::parse(
            "<!-- head --><html><body><p>x<!-- one --></p><!-- two --></body></html>",
        );
        let comments: Vec<&str> = page.comments().map(str::trim).collect();
        assert_eq!(comments, vec!["head", "one", "two"]);
    }

    #[test]
    fn test_scripts_skip_external_and_empty() {
        let page = EmbedPage::parse(
            r#"<script src="/app.js"></script><script>var a = 1;</script><script>  </script><script>var b = 2;</script>"#,
        );
        let scripts: Vec<String> = page.scripts().collect();
        assert_eq!(scripts, vec!["var a = 1;", "var b = 2;"]);
    }
}
