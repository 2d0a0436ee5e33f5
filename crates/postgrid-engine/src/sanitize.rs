//! Allow-list sanitiser for rich post content.
//!
//! Formatting tags survive without their attributes (links and images keep a
//! vetted URL), everything else is dropped, text is escaped with its character
//! references kept, and the output is balanced so a post body can never leave elements open in the page.

use postgrid_types::Markup;
use regex::Regex;
use std::sync::LazyLock;

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->|</?[A-Za-z][^<>]*>").unwrap());

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^<\s*(/)?\s*([A-Za-z][A-Za-z0-9]*)(.*?)/?\s*>$").unwrap());

static ATTR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)([a-z-]+)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).unwrap()
});

const CONTAINER_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "strong", "em", "b", "i", "u",
    "blockquote", "code", "pre", "figure", "figcaption", "table", "thead", "tbody", "tr", "th",
    "td", "span", "div", "a",
];

const VOID_TAGS: &[&str] = &["br", "hr", "img"];

/// Elements whose whole body is discarded, not just the tags
const DROPPED_BODIES: &[&str] = &["script", "style", "iframe", "object", "template"];

pub fn sanitize_content(html: &str) -> Markup {
    let mut out = Markup::new();
    let mut open: Vec<&'static str> = Vec::new();
    let mut skip_until: Option<String> = None;
    let mut cursor = 0;

    for token in TOKEN_REGEX.find_iter(html) {
        let text = &html[cursor..token.start()];
        cursor = token.end();

        if skip_until.is_none() {
            out.html_text(text);
        }

        let Some(tag) = parse_tag(token.as_str()) else {
            // comments and malformed tags vanish
            continue;
        };

        if skip_until.is_some() {
            if tag.closing && skip_until.as_deref() == Some(tag.name.as_str()) {
                skip_until = None;
            }
            continue;
        }

        if DROPPED_BODIES.contains(&tag.name.as_str()) {
            if !tag.closing && !tag.self_closing {
                skip_until = Some(tag.name);
            }
            continue;
        }

        if let Some(name) = lookup(VOID_TAGS, &tag.name) {
            if !tag.closing {
                emit_void(&mut out, name, &tag.attrs);
            }
            continue;
        }

        let Some(name) = lookup(CONTAINER_TAGS, &tag.name) else {
            continue;
        };

        if tag.closing {
            if let Some(pos) = open.iter().rposition(|t| *t == name) {
                for inner in open.drain(pos..).rev() {
                    close(&mut out, inner);
                }
            }
        } else if !tag.self_closing {
            emit_open(&mut out, name, &tag.attrs);
            open.push(name);
        }
    }

    if skip_until.is_none() {
        out.html_text(&html[cursor..]);
    }
    for name in open.into_iter().rev() {
        close(&mut out, name);
    }
    out
}

struct Tag {
    name: String,
    closing: bool,
    self_closing: bool,
    attrs: String,
}

fn parse_tag(token: &str) -> Option<Tag> {
    let caps = TAG_REGEX.captures(token)?;
    let name = caps.get(2)?.as_str().to_ascii_lowercase();
    Some(Tag {
        name,
        closing: caps.get(1).is_some(),
        self_closing: token.trim_end_matches('>').trim_end().ends_with('/'),
        attrs: caps.get(3).map(|m| m.as_str().to_string()).unwrap_or_default(),
    })
}

fn lookup(list: &[&'static str], name: &str) -> Option<&'static str> {
    list.iter().copied().find(|t| *t == name)
}

fn attr(attrs: &str, wanted: &str) -> Option<String> {
    ATTR_REGEX.captures_iter(attrs).find_map(|caps| {
        let key = caps.get(1)?.as_str();
        if !key.eq_ignore_ascii_case(wanted) {
            return None;
        }
        caps.get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str().trim().to_string())
    })
}

/// Only web links, site-relative paths and in-page anchors
fn is_safe_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("https://")
        || lower.starts_with("http://")
        || lower.starts_with('/')
        || lower.starts_with('#')
}

fn emit_open(out: &mut Markup, name: &'static str, attrs: &str) {
    if name == "a" {
        match attr(attrs, "href").filter(|href| is_safe_url(href)) {
            Some(href) => {
                out.raw("<a href=\"")
                    .html_text(&href)
                    .raw("\" rel=\"noopener nofollow\">");
            }
            None => {
                out.raw("<a>");
            }
        }
        return;
    }
    out.raw("<").raw(name).raw(">");
}

fn emit_void(out: &mut Markup, name: &'static str, attrs: &str) {
    if name == "img" {
        if let Some(src) = attr(attrs, "src").filter(|src| is_safe_url(src)) {
            let alt = attr(attrs, "alt").unwrap_or_default();
            out.raw("<img src=\"")
                .html_text(&src)
                .raw("\" alt=\"")
                .html_text(&alt)
                .raw("\" loading=\"lazy\">");
        }
        return;
    }
    out.raw("<").raw(name).raw(">");
}

fn close(out: &mut Markup, name: &'static str) {
    out.raw("</").raw(name).raw(">");
}
