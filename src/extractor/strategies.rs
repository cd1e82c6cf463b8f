//! Individual key strategies
//!
//! Each strategy is a pure function over the parsed page. Ordering lives in
//! [`KeyExtractor`](super::KeyExtractor), not here.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Selector;

use super::page::EmbedPage;
use super::types::ExtractionKey;

pub const META_NAME: &str = "_gg_fb";
pub const COMMENT_MARKER: &str = "_is_th:";
pub const DATA_ATTRIBUTE: &str = "data-dpi";
pub const SCRIPT_KEY_GLOBAL: &str = "_xy_ws";
pub const SCRIPT_PARTS_GLOBAL: &str = "_lk_db";

static META_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&format!(r#"meta[name="{META_NAME}"]"#)).expect("meta selector is valid")
});

static DATA_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&format!("[{DATA_ATTRIBUTE}]")).expect("data selector is valid")
});

static COMMENT_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}(\S+)", regex::escape(COMMENT_MARKER)))
        .expect("comment regex is valid")
});

static SCRIPT_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"window\.{SCRIPT_KEY_GLOBAL}\s*=\s*['"]([^'"]+)['"]"#
    ))
    .expect("script key regex is valid")
});

// x, y and z in declaration order
static SCRIPT_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    let part = |name: &str| format!(r#"{name}\s*:\s*['"]([^'"]+)['"]"#);
    Regex::new(&format!(
        r"window\.{SCRIPT_PARTS_GLOBAL}\s*=\s*\{{\s*{}\s*,\s*{}\s*,\s*{}\s*\}}",
        part("x"),
        part("y"),
        part("z"),
    ))
    .expect("script parts regex is valid")
});

pub(crate) fn meta_tag(page: &EmbedPage) -> Option<ExtractionKey> {
    page.first_attr(&META_SELECTOR, "content")
        .and_then(ExtractionKey::new)
}

/// Only the first comment carrying the marker is considered
pub(crate) fn comment_marker(page: &EmbedPage) -> Option<ExtractionKey> {
    let comment = page.comments().find(|text| text.contains(COMMENT_MARKER))?;
    let captures = COMMENT_KEY.captures(comment.trim())?;
    ExtractionKey::new(&captures[1])
}

pub(crate) fn data_attribute(page: &EmbedPage) -> Option<ExtractionKey> {
    page.first_attr(&DATA_SELECTOR, DATA_ATTRIBUTE)
        .and_then(ExtractionKey::new)
}

/// First inline script yielding a key wins; later scripts are never read
pub(crate) fn inline_script(page: &EmbedPage) -> Option<ExtractionKey> {
    page.scripts().find_map(|script| script_key(&script))
}

fn script_key(script: &str) -> Option<ExtractionKey> {
    if let Some(captures) = SCRIPT_KEY.captures(script) {
        return ExtractionKey::new(&captures[1]);
    }

    let parts = SCRIPT_PARTS.captures(script)?;
    ExtractionKey::new(format!("{}{}{}", &parts[1], &parts[2], &parts[3]))
}
