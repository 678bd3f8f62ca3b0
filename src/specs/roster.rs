// src/specs/roster.rs
//! Row specs for label roster listings (`ajax-bands`, `ajax-bands-past`).
//!
//! Current roster rows: `[band, genre, country]`.
//! Past roster rows:    `[band, genre, country, releases]`.
//!
//! The band cell normally holds one band anchor. A cell with no usable anchor, an id of
//! `0`, or several anchors is an aggregate row and lands on [`Band::various`].

use crate::core::html::{anchors, strip_tags};
use crate::core::sanitize::leading_number;
use crate::model::{Band, Country, CurrentRoster, Entity, PastRoster};

use super::Parsed;

/// What a band cell refers to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BandCell {
    Single(Band),
    /// Several (or no identifiable) bands: a split, compilation or "Various Artists".
    Aggregate(Vec<Band>),
}

impl BandCell {
    /// Mapping key: the band itself, or the placeholder for aggregates.
    pub fn key(&self) -> Band {
        match self {
            BandCell::Single(band) => band.clone(),
            BandCell::Aggregate(_) => Band::various(),
        }
    }
}

pub fn parse_band_cell(cell: &str) -> BandCell {
    let bands: Vec<Band> = anchors(cell)
        .into_iter()
        .filter_map(|a| {
            let id = a.id()?;
            let name = a.text();
            (!name.is_empty()).then(|| Band::new(id, name))
        })
        .collect();
    match bands.as_slice() {
        [one] if one.id() != 0 => BandCell::Single(one.clone()),
        _ => BandCell::Aggregate(bands.into_iter().filter(|b| b.id() != 0).collect()),
    }
}

fn describe(mut band: Band, row: &[String]) -> Band {
    if !band.is_placeholder() {
        band.genre = row.get(1).map(strip_tags).unwrap_or_default();
        band.country = row.get(2).map(|c| Country::from_name(&strip_tags(c))).unwrap_or_default();
    }
    band
}

pub fn parse_current(rows: &[Vec<String>]) -> Parsed<CurrentRoster> {
    let mut out = Parsed::<CurrentRoster>::default();
    for row in rows {
        let Some(cell) = row.first() else {
            out.skipped += 1;
            continue;
        };
        let key = parse_band_cell(cell).key();
        out.items.insert(describe(key, row));
    }
    out
}

pub fn parse_past(rows: &[Vec<String>]) -> Parsed<PastRoster> {
    let mut out = Parsed::<PastRoster>::default();
    for row in rows {
        if row.len() < 4 {
            out.skipped += 1;
            continue;
        }
        let count = leading_number(&strip_tags(&row[3]))
            .map_or(0, |n| u32::try_from(n).unwrap_or(u32::MAX));
        let key = describe(parse_band_cell(&row[0]).key(), row);
        let total = out.items.entry(key).or_insert(0);
        *total = total.saturating_add(count);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn band_cells() {
        let single = parse_band_cell(r#"<a href="https://www.metal-archives.com/bands/Slayer/72">Slayer</a>"#);
        assert_eq!(single, BandCell::Single(Band::new(72, "Slayer")));

        let split = parse_band_cell(
            r#"<a href="/bands/Darkthrone/146">Darkthrone</a> / <a href="/bands/Satyricon/341">Satyricon</a>"#,
        );
        assert_eq!(split.key(), Band::various());
        assert!(matches!(split, BandCell::Aggregate(ref b) if b.len() == 2));

        assert_eq!(parse_band_cell("Various Artists"), BandCell::Aggregate(vec![]));
        assert_eq!(parse_band_cell(r#"<a href="/bands/_/0">Various</a>"#).key(), Band::various());
    }

    #[test]
    fn current_roster_keeps_server_order_and_details() {
        let rows = vec![
            row(&[r#"<a href="/bands/Cannibal_Corpse/186">Cannibal Corpse</a>"#, "Death Metal", "United States"]),
            row(&[r#"<a href="/bands/Amon_Amarth/739">Amon Amarth</a>"#, "Melodic Death Metal", "Sweden"]),
            row(&[r#"<a href="/bands/Cannibal_Corpse/186">Cannibal Corpse</a>"#, "Death Metal", "United States"]),
            vec![],
        ];
        let parsed = parse_current(&rows);
        assert_eq!(parsed.skipped, 1);
        let ids: Vec<_> = parsed.items.iter().map(|b| b.id()).collect();
        assert_eq!(ids, vec![186, 739]);
        let amon = parsed.items.get_index(1).unwrap();
        assert_eq!(amon.country, Country::Sweden);
        assert_eq!(amon.genre, "Melodic Death Metal");
    }

    #[test]
    fn past_roster_counts_and_placeholder() {
        let rows = vec![
            row(&[r#"<a href="/bands/Slayer/72">Slayer</a>"#, "Thrash Metal", "United States", "3"]),
            row(&["Various Artists", "Various", "International", "2"]),
            row(&[r#"<a href="/bands/A/1">A</a> / <a href="/bands/B/2">B</a>"#, "", "", "1"]),
            row(&[r#"<a href="/bands/Slayer/72">Slayer</a>"#]),
        ];
        let parsed = parse_past(&rows);
        assert_eq!(parsed.skipped, 1);
        assert_eq!(parsed.items.len(), 2);
        assert_eq!(parsed.items[&Band::new(72, "Slayer")], 3);
        assert_eq!(parsed.items[&Band::various()], 3);
        // placeholder never collides with a real band
        assert!(parsed.items.keys().filter(|b| b.id() == 0).all(|b| b.name == "Various Artists"));
    }

    #[test]
    fn past_roster_counts_saturate() {
        let rows = vec![
            row(&["Various Artists", "", "", "99999999999"]),
            row(&[r#"<a href="/bands/A/1">A</a> / <a href="/bands/B/2">B</a>"#, "", "", "4000000000"]),
            row(&[r#"<a href="/bands/Slayer/72">Slayer</a>"#, "", "", "n/a"]),
        ];
        let parsed = parse_past(&rows);
        assert_eq!(parsed.items[&Band::various()], u32::MAX);
        assert_eq!(parsed.items[&Band::new(72, "Slayer")], 0);
    }
}
