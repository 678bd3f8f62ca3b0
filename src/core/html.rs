// src/core/html.rs
// Boundary scanning over raw markup. Deliberately naive, tailored to the
// Metal Archives page layout. Tag/attribute matching is ASCII case-insensitive
// where the name says `_ci`; lowercasing keeps byte offsets stable because only
// ASCII characters change.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::sanitize::{decode_entities, normalize_ws};
use crate::error::ExtractError;

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Substring strictly between `open` and the next `close` after it (case-sensitive).
pub fn between<'a>(
    s: &'a str,
    open: &str,
    close: &str,
    what: &'static str,
) -> Result<&'a str, ExtractError> {
    let start = s.find(open).ok_or_else(|| ExtractError::new(what, open))? + open.len();
    let len = s[start..].find(close).ok_or_else(|| ExtractError::new(what, close))?;
    Ok(&s[start..start + len])
}

/// Like [`between`] but `open_pat` is the start of an opening tag: content begins
/// after that tag's `>`. Case-insensitive.
pub fn tag_content<'a>(
    s: &'a str,
    open_pat: &str,
    close_pat: &str,
    what: &'static str,
) -> Result<&'a str, ExtractError> {
    slice_between_ci(s, open_pat, close_pat).ok_or_else(|| ExtractError::new(what, open_pat))
}

pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let open = to_lower(open_pat);
    let close = to_lower(close_pat);
    let o = lc.find(&open)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

/// Next `<open ...> ... close` block at or after `from`, as byte range.
pub fn next_tag_block_ci(s: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(open);
    let cl = to_lower(close);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + close.len();
    Some((start, end))
}

/// All `<open ...> ... close` blocks, left to right.
pub fn tag_blocks_ci<'a>(s: &'a str, open: &str, close: &str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((b, e)) = next_tag_block_ci(s, open, close, pos) {
        out.push(&s[b..e]);
        pos = e;
    }
    out
}

/// `<td ...>INNER</td>` → `INNER` (may still contain nested tags).
pub fn inner_after_open_tag(block: &str) -> &str {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return &block[oe + 1..cs];
            }
        }
    }
    ""
}

/// Remove every `<...>` tag, decode entities, collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&decode_entities(&out))
}

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

/// Render markup as plain text: `<br>` becomes a line break, raw newlines in the
/// markup do not. Lines are whitespace-collapsed, runs of blank lines shrink to one,
/// and the result is joined with `line_sep`.
pub fn html_to_text(markup: &str, line_sep: &str) -> String {
    let marked = LINE_BREAK.replace_all(markup, "\u{0}");
    let mut lines: Vec<String> = Vec::new();
    for raw in marked.split('\u{0}') {
        let line = strip_tags(raw);
        if line.is_empty() && lines.last().is_none_or(|l| l.is_empty()) {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join(line_sep)
}

/// Split into at most `n` pieces; the last piece retains the unsplit remainder.
/// `n == 0` means unlimited.
pub fn split_retaining<'a>(s: &'a str, delim: &str, n: usize) -> Vec<&'a str> {
    if n == 0 {
        s.split(delim).collect()
    } else {
        s.splitn(n, delim).collect()
    }
}

/// Split on `delim` only where it is outside an `<a>...</a>` element, so anchor
/// text containing the delimiter stays in one piece.
pub fn split_outside_anchors<'a>(s: &'a str, delim: char) -> Vec<&'a str> {
    let lc = to_lower(s);
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut piece_start = 0usize;
    let mut i = 0usize;
    while i < s.len() {
        let rest = &lc[i..];
        if rest.starts_with("<a ") || rest.starts_with("<a>") {
            depth += 1;
        } else if rest.starts_with("</a>") {
            depth = depth.saturating_sub(1);
        }
        let ch = s[i..].chars().next().unwrap_or(delim);
        if ch == delim && depth == 0 {
            out.push(&s[piece_start..i]);
            piece_start = i + ch.len_utf8();
        }
        i += ch.len_utf8();
    }
    out.push(&s[piece_start..]);
    out
}

/// Value of `name="..."` (or single-quoted) inside one opening tag.
pub fn attr<'a>(open_tag: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(open_tag);
    let mut from = 0usize;
    let needle = join!(&to_lower(name), "=");
    while let Some(rel) = lc[from..].find(&needle) {
        let at = from + rel;
        from = at + needle.len();
        // must be a whole attribute name
        let prev = lc[..at].chars().next_back();
        if prev.is_some_and(|c| !c.is_whitespace()) {
            continue;
        }
        let quote = open_tag[from..].chars().next()?;
        if quote != '"' && quote != '\'' {
            continue;
        }
        let body = &open_tag[from + 1..];
        let end = body.find(quote)?;
        return Some(&body[..end]);
    }
    None
}

/// One `<a ...>text</a>` element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Anchor<'a> {
    pub open_tag: &'a str,
    pub href: Option<&'a str>,
    pub inner: &'a str,
}

impl<'a> Anchor<'a> {
    pub fn text(&self) -> String {
        strip_tags(self.inner)
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        attr(self.open_tag, name)
    }

    /// Trailing numeric id of the `href`, see [`id_from_href`].
    pub fn id(&self) -> Option<u64> {
        self.href.and_then(id_from_href)
    }
}

/// Every anchor element in `markup`, left to right.
pub fn anchors(markup: &str) -> Vec<Anchor<'_>> {
    tag_blocks_ci(markup, "<a ", "</a>")
        .into_iter()
        .map(|block| {
            let open_end = block.find('>').map_or(block.len(), |i| i + 1);
            let open_tag = &block[..open_end];
            Anchor { open_tag, href: attr(open_tag, "href"), inner: inner_after_open_tag(block) }
        })
        .collect()
}

/// `https://www.metal-archives.com/labels/Metal_Blade_Records/3#label_tabs` → `Some(3)`.
pub fn id_from_href(href: &str) -> Option<u64> {
    let path = href.split(['?', '#']).next()?;
    let last = path.trim_end_matches('/').rsplit('/').next()?;
    if last.is_empty() || !last.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    last.parse().ok()
}
