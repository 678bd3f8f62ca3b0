// src/model/vocab.rs
// Category normalizers. Unrecognised site vocabulary maps to `Unknown`.

site_vocab! {
    /// Label status as printed in the label sidebar.
    pub enum LabelStatus {
        Active => ["active"],
        Closed => ["closed"],
        ChangedName => ["changed name"],
    }
}

site_vocab! {
    /// Release type.
    pub enum DiscType {
        FullLength => ["Full-length", "Full length", "Full-length album"],
        LiveAlbum => ["Live album"],
        Demo => ["Demo"],
        Single => ["Single"],
        Ep => ["EP"],
        Video => ["Video", "Video/VHS"],
        BoxedSet => ["Boxed set"],
        Split => ["Split"],
        Compilation => ["Compilation"],
        SplitVideo => ["Split video"],
        Collaboration => ["Collaboration"],
    }
}

impl DiscType {
    /// `releaseType[]` code of the advanced search form.
    pub fn search_code(self) -> Option<u8> {
        Some(match self {
            DiscType::FullLength => 1,
            DiscType::LiveAlbum => 2,
            DiscType::Demo => 3,
            DiscType::Single => 4,
            DiscType::Ep => 5,
            DiscType::Video => 6,
            DiscType::BoxedSet => 7,
            DiscType::Split => 8,
            DiscType::Compilation => 10,
            DiscType::SplitVideo => 12,
            DiscType::Collaboration => 13,
            DiscType::Unknown => return None,
        })
    }
}

site_vocab! {
    /// Section of the links sub-page a link was listed under.
    pub enum LinkCategory {
        Official => ["Official"],
        OfficialMerchandise => ["Official merchandise", "Official_merchandise"],
        Unofficial => ["Unofficial"],
        Labels => ["Labels", "Label"],
        Tablatures => ["Tablatures", "Tabulatures"],
    }
}

site_vocab! {
    /// Country as printed on entity pages.
    pub enum Country {
        International => ["International"],
        Argentina => ["Argentina"],
        Australia => ["Australia"],
        Austria => ["Austria"],
        Belarus => ["Belarus"],
        Belgium => ["Belgium"],
        Bolivia => ["Bolivia"],
        Brazil => ["Brazil"],
        Bulgaria => ["Bulgaria"],
        Canada => ["Canada"],
        Chile => ["Chile"],
        China => ["China"],
        Colombia => ["Colombia"],
        CostaRica => ["Costa Rica"],
        Croatia => ["Croatia"],
        Czechia => ["Czechia", "Czech Republic"],
        Denmark => ["Denmark"],
        Ecuador => ["Ecuador"],
        Estonia => ["Estonia"],
        Finland => ["Finland"],
        France => ["France"],
        Germany => ["Germany"],
        Greece => ["Greece"],
        Hungary => ["Hungary"],
        Iceland => ["Iceland"],
        India => ["India"],
        Indonesia => ["Indonesia"],
        Iran => ["Iran"],
        Ireland => ["Ireland"],
        Israel => ["Israel"],
        Italy => ["Italy"],
        Japan => ["Japan"],
        Latvia => ["Latvia"],
        Lithuania => ["Lithuania"],
        Luxembourg => ["Luxembourg"],
        Malaysia => ["Malaysia"],
        Mexico => ["Mexico"],
        Netherlands => ["Netherlands", "The Netherlands"],
        NewZealand => ["New Zealand"],
        Norway => ["Norway"],
        Peru => ["Peru"],
        Philippines => ["Philippines"],
        Poland => ["Poland"],
        Portugal => ["Portugal"],
        Romania => ["Romania"],
        Russia => ["Russia"],
        Serbia => ["Serbia"],
        Singapore => ["Singapore"],
        Slovakia => ["Slovakia"],
        Slovenia => ["Slovenia"],
        SouthAfrica => ["South Africa"],
        SouthKorea => ["South Korea", "Korea, South"],
        Spain => ["Spain"],
        Sweden => ["Sweden"],
        Switzerland => ["Switzerland"],
        Taiwan => ["Taiwan"],
        Thailand => ["Thailand"],
        Turkey => ["Turkey", "Türkiye"],
        Ukraine => ["Ukraine"],
        UnitedKingdom => ["United Kingdom", "UK"],
        UnitedStates => ["United States", "USA", "US"],
        Uruguay => ["Uruguay"],
        Venezuela => ["Venezuela"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizers_fall_back_to_unknown() {
        assert_eq!(Country::from_name(" united  states "), Country::UnitedStates);
        assert_eq!(Country::from_name("Atlantis"), Country::Unknown);
        assert_eq!(LabelStatus::from_name("Changed name"), LabelStatus::ChangedName);
        assert_eq!(LabelStatus::from_name("unknown"), LabelStatus::Unknown);
        assert_eq!(DiscType::from_name("full-length"), DiscType::FullLength);
        assert!(!DiscType::from_name("").is_known());
    }

    #[test]
    fn search_codes() {
        assert_eq!(DiscType::Ep.search_code(), Some(5));
        assert_eq!(DiscType::Unknown.search_code(), None);
    }
}
