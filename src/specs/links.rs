// src/specs/links.rs
//! Scraping spec for the links sub-page (`/link/ajax-list/type/<kind>/id/<id>`).
//!
//! The fragment holds one `<table id="linksTable<Category>">` per section; every anchor in a
//! section is one link. Anchors outside a known table are ignored.

use crate::core::html::{anchors, attr, tag_blocks_ci};
use crate::model::{Link, LinkCategory};

pub fn parse(fragment: &str) -> Vec<Link> {
    let mut out = Vec::new();
    for table in tag_blocks_ci(fragment, "<table", "</table>") {
        let open_end = table.find('>').map_or(table.len(), |i| i + 1);
        let Some(id) = attr(&table[..open_end], "id") else {
            continue;
        };
        let Some(section) = id.strip_prefix("linksTable") else {
            continue;
        };
        let category = LinkCategory::from_name(&section.replace('_', " "));
        for a in anchors(&table[open_end..]) {
            let Some(url) = a.href.map(str::trim).filter(|u| u.starts_with("http")) else {
                continue;
            };
            let name = a.text();
            if name.is_empty() {
                continue;
            }
            out.push(Link::new(name, url).in_category(category));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAGMENT: &str = r#"
<table id="linksTableOfficial" class="display">
  <tr id="header_Official"><th colspan="2">Official</th></tr>
  <tr><td><a id="link3001" href="https://www.metalblade.com" target="_blank" title="Go to: https://www.metalblade.com">Homepage</a></td></tr>
  <tr><td><a href="https://www.facebook.com/metalbladerecords" target="_blank">Facebook</a></td></tr>
</table>
<table id="linksTableOfficial_merchandise" class="display">
  <tr><td><a href="https://indiemerch.com/metalblade" target="_blank">Indie Merch</a></td></tr>
</table>
<table id="linksTableSomethingNew">
  <tr><td><a href="https://example.org/x">X</a></td><td><a href="javascript:;">edit</a></td></tr>
</table>
<p>No links outside tables <a href="https://nope.example">nope</a></p>
"#;

    #[test]
    fn links_by_section() {
        let links = parse(FRAGMENT);
        let names: Vec<_> = links.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Homepage", "Facebook", "Indie Merch", "X"]);
        assert_eq!(links[0].url, "https://www.metalblade.com");
        assert_eq!(links[0].category, LinkCategory::Official);
        assert_eq!(links[2].category, LinkCategory::OfficialMerchandise);
        assert_eq!(links[3].category, LinkCategory::Unknown);
    }

    #[test]
    fn empty_fragment() {
        assert!(parse("<p>No links have been added yet.</p>").is_empty());
    }
}
