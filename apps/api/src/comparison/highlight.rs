//! Keyword highlighting over the original document text.
//!
//! Uses the same whole-word discipline as the technical term matcher, so
//! highlighting "java" never marks part of "javascript".

use serde::Serialize;

use crate::comparison::matcher::TermMatcher;

/// A highlighted region of the source text. Offsets are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightSpan {
    pub keyword: String,
    pub start: usize,
    pub end: usize,
}

/// Non-overlapping, position-ordered occurrences of `keywords` in `text`.
/// When two keywords start at the same position the longer one wins.
pub fn find_highlights<S: AsRef<str>>(
    text: &str,
    keywords: &[S],
) -> Result<Vec<HighlightSpan>, regex::Error> {
    let Some(matcher) = TermMatcher::new(keywords)? else {
        return Ok(vec![]);
    };

    Ok(matcher
        .find_all(text)
        .into_iter()
        .map(|m| HighlightSpan {
            keyword: matcher.term(m.term_index).to_string(),
            start: m.start,
            end: m.end,
        })
        .collect())
}

/// Wraps every span in `<mark class="…">`, HTML-escaping the document text so
/// user content cannot inject markup. Spans must be ordered and
/// non-overlapping, as `find_highlights` returns them.
pub fn render_html(text: &str, spans: &[HighlightSpan], class: &str) -> String {
    const CLOSE: &str = "</mark>";
    let open = format!("<mark class=\"{}\">", escape_html(class));

    let mut out = String::with_capacity(text.len() + spans.len() * (open.len() + CLOSE.len()));
    let mut cursor = 0;
    for span in spans {
        if span.start < cursor || span.end > text.len() {
            continue;
        }
        out.push_str(&escape_html(&text[cursor..span.start]));
        out.push_str(&open);
        out.push_str(&escape_html(&text[span.start..span.end]));
        out.push_str(CLOSE);
        cursor = span.end;
    }
    out.push_str(&escape_html(&text[cursor..]));
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keywords_no_spans() {
        let spans = find_highlights::<&str>("anything", &[]).unwrap();
        assert!(spans.is_empty());
    }

    #[test]
    fn test_whole_word_only() {
        let text = "JavaScript and Java";
        let spans = find_highlights(text, &["java"]).unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].start..spans[0].end], "Java");
        assert_eq!(spans[0].start, 15);
    }

    #[test]
    fn test_preserves_original_casing() {
        let text = "React, react, REACT";
        let rendered = render_html(text, &find_highlights(text, &["react"]).unwrap(), "k");
        assert_eq!(
            rendered,
            "<mark class=\"k\">React</mark>, <mark class=\"k\">react</mark>, <mark class=\"k\">REACT</mark>"
        );
    }

    #[test]
    fn test_longer_keyword_wins() {
        let text = "Shipping React Native apps";
        let spans = find_highlights(text, &["react", "react native"]).unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].keyword, "react native");
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let text = "C++ and C# and c+";
        let spans = find_highlights(text, &["c++", "c#"]).unwrap();
        let found: Vec<&str> = spans.iter().map(|s| &text[s.start..s.end]).collect();
        assert_eq!(found, vec!["C++", "C#"]);
    }

    #[test]
    fn test_render_html_escapes_text() {
        let text = "<b>Rust</b> & Go";
        let spans = find_highlights(text, &["rust"]).unwrap();
        let html = render_html(text, &spans, "match");
        assert_eq!(
            html,
            "&lt;b&gt;<mark class=\"match\">Rust</mark>&lt;/b&gt; &amp; Go"
        );
    }

    #[test]
    fn test_render_without_spans_copies_text() {
        assert_eq!(render_html("plain & simple", &[], "k"), "plain &amp; simple");
    }
}
