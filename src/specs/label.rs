// src/specs/label.rs
//! Scraping spec for the label page (`/labels/<name>/<id>`).
//!
//! Layout, top to bottom:
//! - `<h1 class="label_name">` – the name. **Required.**
//! - `<dl class="float_left">` – address, country, phone number. **Required.**
//! - `<dl class="float_right">` – status, specialties, founding date, optional parent label,
//!   sub-labels, online shopping. **Required.**
//! - `<p id="label_contact">` – website anchor and the obfuscated email anchor.
//! - `class="label_img"` – logo `<img src>`.
//! - `<div id="label_notes">` … `<div id="auditTrail">` – free-text notes, then the audit footer.
//!
//! Definition-list fields are looked up by their `<dt>` term; only when a term is missing do
//! we fall back to the field's usual position in the list. Optional sections that are absent
//! yield defaults. Missing required regions fail the whole page with [`ExtractError`].
//!
//! Pure: no fetching, no logging. The orchestrator in `scrape::label` does both.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::html::{
    anchors, between, html_to_text, inner_after_open_tag, next_tag_block_ci, slice_between_ci,
    split_outside_anchors, split_retaining, strip_tags, tag_blocks_ci, tag_content, to_lower,
};
use crate::error::{DecodeError, ExtractError};
use crate::model::{AuditTrail, Country, Label, LabelStatus, Link};

/// Everything the label page itself says. Lazy collections are not on this page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelPage {
    pub name: String,
    pub address: String,
    pub country: Country,
    pub phone_number: String,
    pub status: LabelStatus,
    pub specialisation: String,
    pub founding_date: String,
    pub parent_label: Option<Label>,
    pub sub_labels: Vec<Label>,
    pub online_shopping: bool,
    pub website: Link,
    /// Still obfuscated; see [`decode_email`].
    pub obfuscated_email: Option<String>,
    pub notes: String,
    pub logo_url: Option<String>,
    pub audit: AuditTrail,
}

pub fn parse(doc: &str) -> Result<LabelPage, ExtractError> {
    let name = strip_tags(tag_content(doc, r#"<h1 class="label_name""#, "</h1>", "label name")?);

    let (left, right) = detail_lists(doc)?;
    let left = DefinitionList::parse(left);
    let right = DefinitionList::parse(right);

    let mut page = LabelPage {
        name,
        address: left.field("address", 0).map(|dd| html_to_text(dd, "\n")).unwrap_or_default(),
        country: Country::from_name(&left.text("country", 1)),
        phone_number: left.text("phone number", 2),
        status: LabelStatus::from_name(&right.text("status", 0)),
        specialisation: right.text("styles and specialties", 1),
        founding_date: right.text("founding date", 2),
        parent_label: right.get("parent label").and_then(parse_parent_label),
        sub_labels: right.get("sub-labels").map(parse_sub_labels).unwrap_or_default(),
        online_shopping: right
            .get("online shopping")
            .or_else(|| right.last())
            .is_some_and(|dd| strip_tags(dd).eq_ignore_ascii_case("yes")),
        ..LabelPage::default()
    };

    if let Some(contact) = slice_between_ci(doc, r#"<p id="label_contact""#, "</p>") {
        page.website = parse_website(contact);
        page.obfuscated_email = parse_obfuscated_email(contact);
    } else {
        page.website = Link::none();
    }
    page.notes = parse_notes(doc);
    page.logo_url = parse_logo_url(doc);
    page.audit = parse_audit_trail(doc);
    Ok(page)
}

/// The two sidebar definition lists. Anchored on their float classes, falling back to
/// "first and second `<dl>` in the document".
fn detail_lists(doc: &str) -> Result<(&str, &str), ExtractError> {
    let left = slice_between_ci(doc, r#"<dl class="float_left""#, "</dl>");
    let right = slice_between_ci(doc, r#"<dl class="float_right""#, "</dl>");
    if let (Some(l), Some(r)) = (left, right) {
        return Ok((l, r));
    }
    let lists = tag_blocks_ci(doc, "<dl", "</dl>");
    match lists.as_slice() {
        [l, r, ..] => Ok((inner_after_open_tag(l), inner_after_open_tag(r))),
        _ => Err(ExtractError::new("label details", "</dl>")),
    }
}

/// `<dt>Term:</dt><dd>value</dd>` pairs in document order.
#[derive(Debug, Default)]
pub struct DefinitionList<'a> {
    entries: Vec<(String, &'a str)>,
}

impl<'a> DefinitionList<'a> {
    pub fn parse(region: &'a str) -> Self {
        let mut entries = Vec::new();
        let mut pos = 0usize;
        while let Some((dt_s, dt_e)) = next_tag_block_ci(region, "<dt", "</dt>", pos) {
            let term = normalize_term(inner_after_open_tag(&region[dt_s..dt_e]));
            pos = dt_e;
            let Some((dd_s, dd_e)) = next_tag_block_ci(region, "<dd", "</dd>", pos) else {
                break;
            };
            // a <dd> that starts after the next <dt> belongs to that one
            if let Some((next_dt, _)) = next_tag_block_ci(region, "<dt", "</dt>", pos) {
                if next_dt < dd_s {
                    entries.push((term, ""));
                    continue;
                }
            }
            entries.push((term, inner_after_open_tag(&region[dd_s..dd_e])));
            pos = dd_e;
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has(&self, term: &str) -> bool {
        self.get(term).is_some()
    }

    /// Raw `<dd>` content for a term, only if the term is present.
    pub fn get(&self, term: &str) -> Option<&'a str> {
        let key = normalize_term(term);
        self.entries.iter().find(|(t, _)| *t == key).map(|(_, dd)| *dd)
    }

    /// By term, else by position.
    pub fn field(&self, term: &str, position: usize) -> Option<&'a str> {
        self.get(term).or_else(|| self.entries.get(position).map(|(_, dd)| *dd))
    }

    /// [`field`](Self::field) as plain text, empty when absent.
    pub fn text(&self, term: &str, position: usize) -> String {
        self.field(term, position).map(strip_tags).unwrap_or_default()
    }

    pub fn last(&self) -> Option<&'a str> {
        self.entries.last().map(|(_, dd)| *dd)
    }
}

fn normalize_term(raw: &str) -> String {
    strip_tags(raw).trim_end_matches(':').trim().to_lowercase()
}

/// `<a href=".../labels/Parent/12">Parent</a>` → label 12. Absent or id-less → `None`.
pub fn parse_parent_label(dd: &str) -> Option<Label> {
    let a = anchors(dd).into_iter().next()?;
    Some(Label::new(a.id()?, a.text()))
}

// At least a few characters of markup ending in a closed anchor. Anything shorter is a
// truncated fragment or the site's "N/A".
static SUB_LABEL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)^.{9,}</a>$").unwrap());
static SUB_LABEL_ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is)^<a\s[^>]*href\s*=\s*["'][^"']*/\d+/?["'][^>]*>.+</a>$"#).unwrap());

/// Comma-separated sub-label anchors, in page order. Accepts the `<dd>` content with or
/// without the closing `</dd>` and whatever follows it.
pub fn parse_sub_labels(fragment: &str) -> Vec<Label> {
    let lc = to_lower(fragment);
    let body = match lc.find("</dd>") {
        Some(end) => &fragment[..end],
        None => fragment,
    }
    .trim();
    if !SUB_LABEL_SHAPE.is_match(body) {
        return Vec::new();
    }
    split_outside_anchors(body, ',')
        .into_iter()
        .map(str::trim)
        .filter(|entry| SUB_LABEL_ENTRY.is_match(entry))
        .filter_map(|entry| {
            let a = anchors(entry).into_iter().next()?;
            Some(Label::new(a.id()?, a.text()))
        })
        .collect()
}

fn is_email_anchor(open_tag: &str) -> bool {
    let lc = to_lower(open_tag);
    lc.contains(r#"title="email""#) || lc.contains("writetome")
}

fn parse_website(contact: &str) -> Link {
    anchors(contact)
        .into_iter()
        .filter(|a| !is_email_anchor(a.open_tag))
        .find_map(|a| {
            let name = a.text();
            let url = a.href?.trim();
            (!name.is_empty() && !url.is_empty() && url != "#").then(|| Link::new(name, url))
        })
        .unwrap_or_else(Link::none)
}

fn parse_obfuscated_email(contact: &str) -> Option<String> {
    anchors(contact)
        .into_iter()
        .find(|a| is_email_anchor(a.open_tag))
        .map(|a| a.text())
        .filter(|t| !t.is_empty())
}

/// Addresses are printed reversed, with `@` as `//` and `.` as `/`.
/// Reverse first, then `//` → `@`, then the remaining `/` → `.`.
pub fn decode_email(obfuscated: &str) -> Result<String, DecodeError> {
    let reversed: String = obfuscated.trim().chars().rev().collect();
    let mail = reversed.replace("//", "@").replace('/', ".");
    if is_address_shape(&mail) {
        Ok(mail)
    } else {
        Err(DecodeError::Email(s!(obfuscated)))
    }
}

/// The inverse of [`decode_email`], as the site applies it.
pub fn encode_email(address: &str) -> String {
    address.replace('.', "/").replace('@', "//").chars().rev().collect()
}

fn is_address_shape(mail: &str) -> bool {
    let mut parts = mail.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !mail.contains(char::is_whitespace)
}

static PARAGRAPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</?p\s*>").unwrap());

fn parse_notes(doc: &str) -> String {
    let Some(start) = doc.find(r#"<div id="label_notes"#) else {
        return s!();
    };
    let rest = &doc[start..];
    let end = rest.find(r#"<div id="auditTrail"#).unwrap_or(rest.len());
    let notes = PARAGRAPH.replace_all(&rest[..end], "<br><br>");
    html_to_text(&notes, "\n")
}

fn parse_logo_url(doc: &str) -> Option<String> {
    let at = doc.find(r#"class="label_img""#)?;
    let src = between(&doc[at..], r#"src=""#, "\"", "logo").ok()?;
    Some(s!(src.trim())).filter(|u| !u.is_empty())
}

fn parse_audit_trail(doc: &str) -> AuditTrail {
    let mut audit = AuditTrail::default();
    let Some(start) = doc.find(r#"<div id="auditTrail""#) else {
        return audit;
    };
    for cell in tag_blocks_ci(&doc[start..], "<td", "</td>") {
        let text = strip_tags(inner_after_open_tag(cell));
        let parts = split_retaining(&text, ":", 2);
        let [key, value] = parts.as_slice() else {
            continue;
        };
        let value = s!(value.trim());
        match key.trim().to_ascii_lowercase().as_str() {
            "added by" => audit.added_by = value,
            "modified by" => audit.modified_by = value,
            "added on" => audit.added_on = value,
            "last modified on" => audit.modified_on = value,
            _ => {}
        }
    }
    audit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entity;

    const PAGE: &str = r##"
<div id="label_info">
  <h1 class="label_name">Metal Blade Records</h1>
  <dl class="float_left">
    <dt>Address:</dt>
    <dd> 5737 Kanan Road #143<br />
         Agoura Hills, California 91301</dd>
    <dt>Country:</dt>
    <dd><a href="https://www.metal-archives.com/lists/US">United States</a></dd>
    <dt>Phone number:</dt>
    <dd> +1 818-991-4466 </dd>
  </dl>
  <dl class="float_right">
    <dt>Status:</dt>
    <dd><span class="active">active</span></dd>
    <dt>Styles and specialties:</dt>
    <dd>Heavy, Thrash, Death Metal </dd>
    <dt>Founding date :</dt>
    <dd>1982 </dd>
    <dt>Parent label:</dt>
    <dd><a href="https://www.metal-archives.com/labels/Sony_Music/1010">Sony Music</a></dd>
    <dt>Sub-labels:</dt>
    <dd><a href="https://www.metal-archives.com/labels/Foo/7">Foo</a>, <a href="https://www.metal-archives.com/labels/Bar/9">Bar</a></dd>
    <dt>Online shopping:</dt>
    <dd>Yes</dd>
  </dl>
  <p id="label_contact">
    <a href="http://www.metalblade.com" target="_blank"><span>www.metalblade.com</span></a><br />
    <a href="#" class="writeToMe" title="Email">moc/edalblatem//ofni</a>
  </p>
</div>
<div class="label_img"><a class="image" id="label_logo" href="https://www.metal-archives.com/images/3/3.jpg"><img src="https://www.metal-archives.com/images/3/3.jpg?1234" alt="Metal Blade Records" /></a></div>
<div id="label_notes" class="tabContent"><p>Founded by Brian Slagel.</p><p>Also <b>home</b> of Slayer's debut.</p></div>
<div id="auditTrail"><table><tr><td>Added by: <a href="/users/Zodiac">Zodiac</a></td><td align="right">Modified by: <a href="/users/Xerxes">Xerxes</a></td></tr>
<tr><td>Added on: 2002-07-24 01:30:38</td><td align="right">Last modified on: 2024-01-02 12:00:00</td></tr></table></div>
"##;

    #[test]
    fn parses_every_region() {
        let p = parse(PAGE).unwrap();
        assert_eq!(p.name, "Metal Blade Records");
        assert_eq!(p.address, "5737 Kanan Road #143\nAgoura Hills, California 91301");
        assert_eq!(p.country, Country::UnitedStates);
        assert_eq!(p.phone_number, "+1 818-991-4466");
        assert_eq!(p.status, LabelStatus::Active);
        assert_eq!(p.specialisation, "Heavy, Thrash, Death Metal");
        assert_eq!(p.founding_date, "1982");
        let parent = p.parent_label.as_ref().unwrap();
        assert_eq!((parent.id(), parent.name.as_str()), (1010, "Sony Music"));
        assert_eq!(p.sub_labels.iter().map(|l| l.id()).collect::<Vec<_>>(), vec![7, 9]);
        assert!(p.online_shopping);
        assert_eq!(p.website, Link::new("www.metalblade.com", "http://www.metalblade.com"));
        assert_eq!(p.obfuscated_email.as_deref(), Some("moc/edalblatem//ofni"));
        assert_eq!(p.logo_url.as_deref(), Some("https://www.metal-archives.com/images/3/3.jpg?1234"));
        assert_eq!(p.notes, "Founded by Brian Slagel.\n\nAlso home of Slayer's debut.");
        assert_eq!(p.audit.added_by, "Zodiac");
        assert_eq!(p.audit.modified_on, "2024-01-02 12:00:00");
    }

    #[test]
    fn name_has_no_markup() {
        let doc = PAGE.replace(
            r#"<h1 class="label_name">Metal Blade Records</h1>"#,
            r#"<h1 class="label_name"><a href="/labels/x/3">Metal Blade Records</a></h1>"#,
        );
        assert_eq!(parse(&doc).unwrap().name, "Metal Blade Records");
    }

    #[test]
    fn parent_label_absent_without_its_term() {
        let start = PAGE.find("<dt>Parent label:</dt>").unwrap();
        let end = PAGE.find("<dt>Sub-labels:</dt>").unwrap();
        let doc = format!("{}{}", &PAGE[..start], &PAGE[end..]);
        let p = parse(&doc).unwrap();
        assert!(p.parent_label.is_none());
        assert_eq!(p.sub_labels.len(), 2);
    }

    #[test]
    fn missing_name_or_lists_fail_the_page() {
        let no_name = PAGE.replace("label_name", "band_name");
        assert_eq!(parse(&no_name).unwrap_err().what, "label name");

        let no_lists = PAGE.replace("<dl", "<ul").replace("</dl>", "</ul>");
        assert_eq!(parse(&no_lists).unwrap_err().what, "label details");
    }

    #[test]
    fn optional_sections_default() {
        let start = PAGE.find("<p id=\"label_contact\">").unwrap();
        let doc = format!("{}</div>", &PAGE[..start]);
        let p = parse(&doc).unwrap();
        assert!(p.website.is_none());
        assert!(p.obfuscated_email.is_none());
        assert!(p.notes.is_empty());
        assert!(p.logo_url.is_none());
        assert_eq!(p.audit, AuditTrail::default());
    }

    #[test]
    fn definition_list_falls_back_to_position() {
        let dl = DefinitionList::parse("<dt>Adresse:</dt><dd>Somewhere</dd><dt>Land:</dt><dd>Norway</dd>");
        assert_eq!(dl.len(), 2);
        assert_eq!(dl.field("address", 0), Some("Somewhere"));
        assert_eq!(dl.text("country", 1), "Norway");
        assert!(!dl.has("country"));
    }

    #[test]
    fn definition_list_dt_without_dd() {
        let dl = DefinitionList::parse("<dt>A:</dt><dt>B:</dt><dd>b</dd>");
        assert_eq!(dl.get("a"), Some(""));
        assert_eq!(dl.get("b"), Some("b"));
    }

    #[test]
    fn sub_labels_example() {
        let labels = parse_sub_labels(
            r#"<a href="/labels/Foo/7">Foo</a>, <a href="/labels/Bar/9">Bar</a></dd>"#,
        );
        let got: Vec<_> = labels.iter().map(|l| (l.id(), l.name.as_str())).collect();
        assert_eq!(got, vec![(7, "Foo"), (9, "Bar")]);
    }

    #[test]
    fn sub_labels_reject_truncated_fragments() {
        assert!(parse_sub_labels("N/A</dd>").is_empty());
        assert!(parse_sub_labels(r#"<a href="/labels/Foo/7">Fo"#).is_empty());
        // one malformed entry is dropped, the rest survive
        let labels = parse_sub_labels(
            r#"<a href="/labels/Foo/7">Foo</a>, Unlisted Imprint, <a href="/labels/Bar/9">Bar</a></dd><dt>x</dt>"#,
        );
        assert_eq!(labels.iter().map(|l| l.id()).collect::<Vec<_>>(), vec![7, 9]);
    }

    #[test]
    fn sub_label_names_may_contain_commas() {
        let labels = parse_sub_labels(r#"<a href="/labels/Foo/7">Foo, Inc.</a>"#);
        assert_eq!(labels[0].name, "Foo, Inc.");
    }

    #[test]
    fn email_example_decodes() {
        assert_eq!(decode_email("moc.elgoog//lieg").unwrap(), "geil@google.com");
        assert_eq!(decode_email("moc/edalblatem//ofni").unwrap(), "info@metalblade.com");
    }

    #[test]
    fn email_decode_inverts_encode() {
        for addr in ["geil@google.com", "first.last@mail.example.org", "a_b-c@x.io"] {
            assert_eq!(decode_email(&encode_email(addr)).unwrap(), addr);
        }
    }

    #[test]
    fn email_bad_shapes() {
        assert!(matches!(decode_email("moc/elgoog"), Err(DecodeError::Email(_))));
        assert!(decode_email("moc//a//b").is_err());
        assert!(decode_email("").is_err());
    }
}
