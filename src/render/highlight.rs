//! HTML syntax highlighting for example markup.
//!
//! Produces `<div class="highlight"><pre>...</pre></div>` with short
//! token classes (`nt` tag name, `na` attribute, `s` string, `o` operator,
//! `p` punctuation, `c` comment) so the page can style code with
//! [`style_defs`].

use std::fmt::Write;

use html_escape::encode_text;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static MARKUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<!--.*?-->|<(/?)([A-Za-z][\w:.-]*)((?:[^>"']|"[^"]*"|'[^']*')*?)(\s*)(/?)>"#)
        .unwrap()
});

static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([^\s=/>"']+)(?:(\s*=\s*)("[^"]*"|'[^']*'|[^\s"'>]+))?"#).unwrap()
});

/// Colours for each token class.
const TOKEN_STYLES: &[(&str, &str)] = &[
    ("c", "color: #3D7B7B; font-style: italic"),
    ("nt", "color: #008000; font-weight: bold"),
    ("na", "color: #687822"),
    ("o", "color: #666666"),
    ("s", "color: #BA2121"),
    ("p", "color: #555555"),
];

/// Highlight a markup snippet. Text outside tags is escaped verbatim.
pub fn highlight_html(markup: &str) -> String {
    let mut out = String::from("<div class=\"highlight\"><pre>");
    let mut last = 0;

    for caps in MARKUP.captures_iter(markup) {
        let Some(whole) = caps.get(0) else { continue };

        out.push_str(&encode_text(&markup[last..whole.start()]));

        if whole.as_str().starts_with("<!--") {
            push_token(&mut out, "c", whole.as_str());
        } else {
            push_tag(&mut out, &caps);
        }

        last = whole.end();
    }

    out.push_str(&encode_text(&markup[last..]));
    out.push_str("</pre></div>");
    out
}

fn push_tag(out: &mut String, caps: &Captures<'_>) {
    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

    push_token(out, "p", &format!("<{}", group(1)));
    push_token(out, "nt", group(2));
    push_attributes(out, group(3));
    out.push_str(group(4));
    push_token(out, "p", &format!("{}>", group(5)));
}

fn push_attributes(out: &mut String, attributes: &str) {
    let mut last = 0;

    for caps in ATTRIBUTE.captures_iter(attributes) {
        let Some(whole) = caps.get(0) else { continue };

        out.push_str(&encode_text(&attributes[last..whole.start()]));

        push_token(out, "na", &caps[1]);
        if let (Some(eq), Some(value)) = (caps.get(2), caps.get(3)) {
            push_token(out, "o", eq.as_str());
            push_token(out, "s", value.as_str());
        }

        last = whole.end();
    }

    out.push_str(&encode_text(&attributes[last..]));
}

fn push_token(out: &mut String, class: &str, text: &str) {
    if text.is_empty() {
        return;
    }
    // Writing into a String cannot fail
    let _ = write!(out, "<span class=\"{}\">{}</span>", class, encode_text(text));
}

/// CSS rules for highlighted code, scoped under `scope` (e.g. `.highlight`).
pub fn style_defs(scope: &str) -> String {
    let mut css = format!("{scope} pre {{ line-height: 125%; margin: 0; }}\n");
    for (class, style) in TOKEN_STYLES {
        let _ = writeln!(css, "{scope} .{class} {{ {style} }}");
    }
    css
}
