//! Safe HTML fragments.
//!
//! `Markup` can only grow through static template literals, escaped text and
//! other `Markup` values. Content fields therefore never reach a container
//! unescaped.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Fragment made of a single template literal
    pub fn from_static(literal: &'static str) -> Self {
        Self(literal.to_string())
    }

    /// Fragment made of escaped text
    pub fn from_text(text: &str) -> Self {
        Self(escape_html(text))
    }

    /// Append a template literal verbatim
    pub fn raw(&mut self, literal: &'static str) -> &mut Self {
        self.0.push_str(literal);
        self
    }

    /// Append text, escaping it for both element content and quoted attributes
    pub fn text(&mut self, text: &str) -> &mut Self {
        push_escaped(&mut self.0, text);
        self
    }

    /// Append text taken from HTML source. Well-formed character references
    /// (`&amp;`, `&#8217;`, `&#x2014;`) are kept, everything else is escaped.
    pub fn html_text(&mut self, text: &str) -> &mut Self {
        let mut rest = text;
        while let Some(pos) = rest.find('&') {
            push_escaped(&mut self.0, &rest[..pos]);
            let tail = &rest[pos..];
            match reference_len(tail) {
                Some(len) => {
                    self.0.push_str(&tail[..len]);
                    rest = &tail[len..];
                }
                None => {
                    self.0.push_str("&amp;");
                    rest = &tail[1..];
                }
            }
        }
        push_escaped(&mut self.0, rest);
        self
    }

    /// Append another fragment
    pub fn append(&mut self, other: &Markup) -> &mut Self {
        self.0.push_str(&other.0);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut out = Markup::new();
        for fragment in iter {
            out.append(&fragment);
        }
        out
    }
}

/// Escape text for embedding in HTML element content or quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    push_escaped(&mut out, input);
    out
}

fn push_escaped(out: &mut String, input: &str) {
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

/// Length of the character reference at the start of `input`, if it is one
fn reference_len(input: &str) -> Option<usize> {
    let body = input.strip_prefix('&')?;
    let (digits, valid): (&str, fn(&u8) -> bool) = if let Some(hex) = body
        .strip_prefix("#x")
        .or_else(|| body.strip_prefix("#X"))
    {
        (hex, u8::is_ascii_hexdigit)
    } else if let Some(dec) = body.strip_prefix('#') {
        (dec, u8::is_ascii_digit)
    } else {
        if !body.bytes().next()?.is_ascii_alphabetic() {
            return None;
        }
        (body, u8::is_ascii_alphanumeric)
    };

    let run = digits.bytes().take_while(|b| valid(b)).count();
    if run == 0 || run > 32 || digits.as_bytes().get(run) != Some(&b';') {
        return None;
    }
    Some(input.len() - digits.len() + run + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_builder_escapes_text_only() {
        let mut m = Markup::new();
        m.raw("<h3>").text("Tips & <Tricks>").raw("</h3>");
        assert_eq!(m.as_str(), "<h3>Tips &amp; &lt;Tricks&gt;</h3>");
    }

    #[test]
    fn test_html_text_keeps_character_references() {
        let mut m = Markup::new();
        m.html_text("Tom &amp; Jerry&nbsp;&mdash; it&#8217;s &#x2014;");
        assert_eq!(
            m.as_str(),
            "Tom &amp; Jerry&nbsp;&mdash; it&#8217;s &#x2014;"
        );
    }

    #[test]
    fn test_html_text_escapes_bare_ampersands() {
        let mut m = Markup::new();
        m.html_text(r#"R&D & Q&A <b> "x" &#; &#xZ; &amp"#);
        assert_eq!(
            m.as_str(),
            "R&amp;D &amp; Q&amp;A &lt;b&gt; &quot;x&quot; &amp;#; &amp;#xZ; &amp;amp"
        );
    }

    #[test]
    fn test_collect_concatenates() {
        let joined: Markup = vec![Markup::from_static("<br>"), Markup::from_text("a<b")]
            .into_iter()
            .collect();
        assert_eq!(joined.as_str(), "<br>a&lt;b");
    }
}
