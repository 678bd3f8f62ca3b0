// src/specs/releases.rs
//! Row spec for the label release listing (`ajax-albums`).
//!
//! Rows: `[band(s), release, type, year, catalog id, format, description]`.
//! A row whose band cell is not a single band (splits, compilations) is keyed by
//! [`Band::various`]; the participating bands ride along on [`Disc::split_bands`].

use crate::core::html::{anchors, strip_tags};
use crate::model::{Disc, DiscType, Releases};

use super::Parsed;
use super::roster::{BandCell, parse_band_cell};

/// One release row, or `None` when the release cell carries no release anchor.
pub fn parse_row(row: &[String]) -> Option<(BandCell, Disc)> {
    let (band_cell, release_cell) = (row.first()?, row.get(1)?);
    let anchor = anchors(release_cell).into_iter().find(|a| a.id().is_some())?;
    let mut disc = Disc::new(anchor.id()?, anchor.text());

    let cell = |i: usize| row.get(i).map(strip_tags).unwrap_or_default();
    disc.disc_type = DiscType::from_name(&cell(2));
    disc.year = cell(3);
    disc.catalog_id = cell(4);
    disc.format = cell(5);
    disc.description = cell(6);

    let owner = parse_band_cell(band_cell);
    match &owner {
        BandCell::Single(band) => disc.band = Some(band.clone()),
        BandCell::Aggregate(bands) => disc.split_bands = bands.clone(),
    }
    Some((owner, disc))
}

pub fn parse(rows: &[Vec<String>]) -> Parsed<Releases> {
    let mut out = Parsed::<Releases>::default();
    for row in rows {
        match parse_row(row) {
            Some((owner, disc)) => out.items.entry(owner.key()).or_default().push(disc),
            None => out.skipped += 1,
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Band, Entity};

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn groups_by_band_in_server_order() {
        let rows = vec![
            row(&[
                r#"<a href="/bands/Slayer/72">Slayer</a>"#,
                r#"<a href="/albums/Slayer/Hell_Awaits/1088">Hell Awaits</a>"#,
                "Full-length",
                "1985",
                "MBR 1039",
                "12\" vinyl",
                "",
            ]),
            row(&[
                r#"<a href="/bands/Armored_Saint/91">Armored Saint</a>"#,
                r#"<a href="/albums/Armored_Saint/March_of_the_Saint/701">March of the Saint</a>"#,
                "Full-length",
                "1984",
                "",
                "",
                "",
            ]),
            row(&[
                r#"<a href="/bands/Slayer/72">Slayer</a>"#,
                r#"<a href="/albums/Slayer/Live_Undead/1089">Live Undead</a>"#,
                "Live album",
                "1984",
                "MBR 1034",
                "",
                "Limited edition",
            ]),
        ];
        let parsed = parse(&rows);
        assert_eq!(parsed.skipped, 0);
        let keys: Vec<_> = parsed.items.keys().map(|b| b.id()).collect();
        assert_eq!(keys, vec![72, 91]);

        let slayer = &parsed.items[&Band::new(72, "")];
        assert_eq!(slayer.len(), 2);
        assert_eq!(slayer[0].name, "Hell Awaits");
        assert_eq!(slayer[0].format, "12\" vinyl");
        assert_eq!(slayer[1].disc_type, DiscType::LiveAlbum);
        assert_eq!(slayer[1].description, "Limited edition");
        assert_eq!(slayer[1].band.as_ref().map(|b| b.id()), Some(72));
    }

    #[test]
    fn split_rows_attach_to_placeholder_only() {
        let rows = vec![
            row(&[
                r#"<a href="/bands/Darkthrone/146">Darkthrone</a> / <a href="/bands/Satyricon/341">Satyricon</a>"#,
                r#"<a href="/albums/Various/Split/555">Split</a>"#,
                "Split",
                "1999",
            ]),
            row(&["Various Artists", r#"<a href="/albums/Various/Comp/556">Comp</a>"#, "Compilation"]),
            row(&["Various Artists", "no release anchor"]),
        ];
        let parsed = parse(&rows);
        assert_eq!(parsed.skipped, 1);
        assert_eq!(parsed.items.len(), 1);
        assert!(!parsed.items.contains_key(&Band::new(146, "Darkthrone")));

        let various = &parsed.items[&Band::various()];
        assert_eq!(various.len(), 2);
        let split_ids: Vec<_> = various[0].split_bands.iter().map(|b| b.id()).collect();
        assert_eq!(split_ids, vec![146, 341]);
        assert!(various[0].band.is_none());
        assert_eq!(various[1].disc_type, DiscType::Compilation);
        assert!(various[1].catalog_id.is_empty());
    }
}
