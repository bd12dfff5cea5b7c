//! Region definitions and metadata for the Classic Diplomacy map.
//!
//! All 75 regions are enumerated in alphabetical order by their 3-letter tag.
//! Region metadata (name, kind, supply center status, home power) is stored
//! in a compile-time lookup table indexed by the `Region` enum discriminant.
//!
//! Tags are the canonical form used throughout the analyzer; Backstabbr's
//! variant spellings (`nwy`, `lyo`, `tys`, `nao`) are folded onto them by a
//! small alias table in `Region::from_tag`.

/// The number of regions on the Classic Diplomacy map.
pub const REGION_COUNT: usize = 75;

/// The number of supply centers on the Classic Diplomacy map.
pub const SUPPLY_CENTER_COUNT: usize = 34;

/// A region on the Classic Diplomacy map.
///
/// Variants are in alphabetical order by 3-letter tag.
/// The `#[repr(u8)]` attribute enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Region {
    Adr = 0,  // Adriatic Sea
    Aeg = 1,  // Aegean Sea
    Alb = 2,  // Albania
    Ank = 3,  // Ankara
    Apu = 4,  // Apulia
    Arm = 5,  // Armenia
    Bal = 6,  // Baltic Sea
    Bar = 7,  // Barents Sea
    Bel = 8,  // Belgium
    Ber = 9,  // Berlin
    Bla = 10, // Black Sea
    Boh = 11, // Bohemia
    Bot = 12, // Gulf of Bothnia
    Bre = 13, // Brest
    Bud = 14, // Budapest
    Bul = 15, // Bulgaria
    Bur = 16, // Burgundy
    Cly = 17, // Clyde
    Con = 18, // Constantinople
    Den = 19, // Denmark
    Eas = 20, // Eastern Mediterranean
    Edi = 21, // Edinburgh
    Eng = 22, // English Channel
    Fin = 23, // Finland
    Gal = 24, // Galicia
    Gas = 25, // Gascony
    Gol = 26, // Gulf of Lyon
    Gre = 27, // Greece
    Hel = 28, // Heligoland Bight
    Hol = 29, // Holland
    Ion = 30, // Ionian Sea
    Iri = 31, // Irish Sea
    Kie = 32, // Kiel
    Lon = 33, // London
    Lvn = 34, // Livonia
    Lvp = 35, // Liverpool
    Mao = 36, // Mid-Atlantic Ocean
    Mar = 37, // Marseilles
    Mos = 38, // Moscow
    Mun = 39, // Munich
    Naf = 40, // North Africa
    Nap = 41, // Naples
    Nat = 42, // North Atlantic Ocean
    Nor = 43, // Norway
    Nrg = 44, // Norwegian Sea
    Nth = 45, // North Sea
    Par = 46, // Paris
    Pic = 47, // Picardy
    Pie = 48, // Piedmont
    Por = 49, // Portugal
    Pru = 50, // Prussia
    Rom = 51, // Rome
    Ruh = 52, // Ruhr
    Rum = 53, // Rumania
    Ser = 54, // Serbia
    Sev = 55, // Sevastopol
    Sil = 56, // Silesia
    Ska = 57, // Skagerrak
    Smy = 58, // Smyrna
    Spa = 59, // Spain
    Stp = 60, // St. Petersburg
    Swe = 61, // Sweden
    Syr = 62, // Syria
    Tri = 63, // Trieste
    Tun = 64, // Tunisia
    Tus = 65, // Tuscany
    Tyn = 66, // Tyrrhenian Sea
    Tyr = 67, // Tyrolia
    Ukr = 68, // Ukraine
    Ven = 69, // Venice
    Vie = 70, // Vienna
    Wal = 71, // Wales
    War = 72, // Warsaw
    Wes = 73, // Western Mediterranean
    Yor = 74, // Yorkshire
}

/// All region variants in index order.
pub const ALL_REGIONS: [Region; REGION_COUNT] = [
    Region::Adr, Region::Aeg, Region::Alb, Region::Ank,
    Region::Apu, Region::Arm, Region::Bal, Region::Bar,
    Region::Bel, Region::Ber, Region::Bla, Region::Boh,
    Region::Bot, Region::Bre, Region::Bud, Region::Bul,
    Region::Bur, Region::Cly, Region::Con, Region::Den,
    Region::Eas, Region::Edi, Region::Eng, Region::Fin,
    Region::Gal, Region::Gas, Region::Gol, Region::Gre,
    Region::Hel, Region::Hol, Region::Ion, Region::Iri,
    Region::Kie, Region::Lon, Region::Lvn, Region::Lvp,
    Region::Mao, Region::Mar, Region::Mos, Region::Mun,
    Region::Naf, Region::Nap, Region::Nat, Region::Nor,
    Region::Nrg, Region::Nth, Region::Par, Region::Pic,
    Region::Pie, Region::Por, Region::Pru, Region::Rom,
    Region::Ruh, Region::Rum, Region::Ser, Region::Sev,
    Region::Sil, Region::Ska, Region::Smy, Region::Spa,
    Region::Stp, Region::Swe, Region::Syr, Region::Tri,
    Region::Tun, Region::Tus, Region::Tyn, Region::Tyr,
    Region::Ukr, Region::Ven, Region::Vie, Region::Wal,
    Region::War, Region::Wes, Region::Yor,
];

impl Region {
    /// Returns the canonical 3-letter tag for this region.
    pub const fn tag(self) -> &'static str {
        REGION_INFO[self as usize].tag
    }

    /// Returns the full display name for this region.
    pub const fn name(self) -> &'static str {
        REGION_INFO[self as usize].name
    }

    /// Returns the region kind (Inland, Sea, Coastal, or Bicoastal).
    pub const fn kind(self) -> RegionKind {
        REGION_INFO[self as usize].kind
    }

    /// Returns true if this region is a supply center.
    pub const fn is_supply_center(self) -> bool {
        REGION_INFO[self as usize].supply_center
    }

    /// Returns the home power for this region, or None if neutral.
    pub const fn home_power(self) -> Option<Power> {
        REGION_INFO[self as usize].home_power
    }

    /// Returns true if this region has distinct named coasts.
    pub const fn is_bicoastal(self) -> bool {
        matches!(REGION_INFO[self as usize].kind, RegionKind::Bicoastal)
    }

    /// Returns the valid coasts for a bicoastal region, empty otherwise.
    pub const fn valid_coasts(self) -> &'static [Coast] {
        match self {
            Region::Bul => &[Coast::East, Coast::South],
            Region::Spa | Region::Stp => &[Coast::North, Coast::South],
            _ => &[],
        }
    }

    /// Looks up a region by its canonical tag or a known alias.
    ///
    /// The tag must already be lowercase. Aliases cover the Backstabbr
    /// spellings of four regions.
    pub fn from_tag(tag: &str) -> Option<Region> {
        let tag = ALIAS_TABLE
            .iter()
            .find(|(alias, _)| *alias == tag)
            .map(|(_, canonical)| *canonical)
            .unwrap_or(tag);
        TAG_TABLE.iter().find(|(t, _)| *t == tag).map(|(_, r)| *r)
    }

    /// Converts a u8 index back to a Region, returning None if out of range.
    pub fn from_u8(idx: u8) -> Option<Region> {
        if (idx as usize) < REGION_COUNT {
            Some(ALL_REGIONS[idx as usize])
        } else {
            None
        }
    }
}

/// Coast specifier for bicoastal regions.
///
/// `None` is the only valid value for regions without split coasts. `West`
/// never occurs on the Classic map but is part of the coast vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Coast {
    None,
    North,
    South,
    East,
    West,
}

impl Coast {
    /// Returns the 2-letter tag (empty string for None).
    pub const fn tag(self) -> &'static str {
        match self {
            Coast::None => "",
            Coast::North => "nc",
            Coast::South => "sc",
            Coast::East => "ec",
            Coast::West => "wc",
        }
    }

    /// Parses a coast from its 2-letter tag.
    pub fn from_tag(s: &str) -> Option<Coast> {
        match s {
            "" => Some(Coast::None),
            "nc" => Some(Coast::North),
            "sc" => Some(Coast::South),
            "ec" => Some(Coast::East),
            "wc" => Some(Coast::West),
            _ => Option::None,
        }
    }
}

/// Classifies a region by terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    Inland,
    Sea,
    Coastal,
    Bicoastal,
}

/// One of the seven great powers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Power {
    Austria = 0,
    England = 1,
    France = 2,
    Germany = 3,
    Italy = 4,
    Russia = 5,
    Turkey = 6,
}

/// All seven powers in standard order.
pub const ALL_POWERS: [Power; 7] = [
    Power::Austria,
    Power::England,
    Power::France,
    Power::Germany,
    Power::Italy,
    Power::Russia,
    Power::Turkey,
];

impl Power {
    /// Returns the capitalized display name of this power.
    pub const fn name(self) -> &'static str {
        match self {
            Power::Austria => "Austria",
            Power::England => "England",
            Power::France => "France",
            Power::Germany => "Germany",
            Power::Italy => "Italy",
            Power::Russia => "Russia",
            Power::Turkey => "Turkey",
        }
    }

    /// Parses a power from its name, case-insensitively.
    ///
    /// `Austria-Hungary` is accepted as an alias for Austria.
    pub fn from_name(name: &str) -> Option<Power> {
        match name.to_ascii_lowercase().as_str() {
            "austria" | "austria-hungary" => Some(Power::Austria),
            "england" => Some(Power::England),
            "france" => Some(Power::France),
            "germany" => Some(Power::Germany),
            "italy" => Some(Power::Italy),
            "russia" => Some(Power::Russia),
            "turkey" => Some(Power::Turkey),
            _ => None,
        }
    }
}

/// Static metadata for a region.
pub struct RegionInfo {
    pub tag: &'static str,
    pub name: &'static str,
    pub kind: RegionKind,
    pub supply_center: bool,
    pub home_power: Option<Power>,
}

/// Compile-time lookup table: index by `Region as usize`.
pub static REGION_INFO: [RegionInfo; REGION_COUNT] = [
    // 0: adr - Adriatic Sea
    RegionInfo { tag: "adr", name: "Adriatic Sea", kind: RegionKind::Sea, supply_center: false, home_power: None },
    // 1: aeg - Aegean Sea
    RegionInfo { tag: "aeg", name: "Aegean Sea", kind: RegionKind::Sea, supply_center: false, home_power: None },
    // 2: alb - Albania
    RegionInfo { tag: "alb", name: "Albania", kind: RegionKind::Coastal, supply_center: false, home_power: None },
    // 3: ank - Ankara
    RegionInfo { tag: "ank", name: "Ankara", kind: RegionKind::Coastal, supply_center: true, home_power: Some(Power::Turkey) },
    // 4: apu - Apulia
    RegionInfo { tag: "apu", name: "Apulia", kind: RegionKind::Coastal, supply_center: false, home_power: None },
    // 5: arm - Armenia
    RegionInfo { tag: "arm", name: "Armenia", kind: RegionKind::Coastal, supply_center: false, home_power: None },
    // 6: bal - Baltic Sea
    RegionInfo { tag: "bal", name: "Baltic Sea", kind: RegionKind::Sea, supply_center: false, home_power: None },
    // 7: bar - Barents Sea
    RegionInfo { tag: "bar", name: "Barents Sea", kind: RegionKind::Sea, supply_center: false, home_power: None },
    // 8: bel - Belgium
    RegionInfo { tag: "bel", name: "Belgium", kind: RegionKind::Coastal, supply_center: true, home_power: None },
    // 9: ber - Berlin
    RegionInfo { tag: "ber", name: "Berlin", kind: RegionKind::Coastal, supply_center: true, home_power: Some(Power::Germany) },
    // 10: bla - Black Sea
    RegionInfo { tag: "bla", name: "Black Sea", kind: RegionKind::Sea, supply_center: false, home_power: None },
    // 11: boh - Bohemia
    RegionInfo { tag: "boh", name: "Bohemia", kind: RegionKind::Inland, supply_center: false, home_power: None },
    // 12: bot - Gulf of Bothnia
    RegionInfo { tag: "bot", name: "Gulf of Bothnia", kind: RegionKind::Sea, supply_center: false, home_power: None },
    // 13: bre - Brest
    RegionInfo { tag: "bre", name: "Brest", kind: RegionKind::Coastal, supply_center: true, home_power: Some(Power::France) },
    // 14: bud - Budapest
    RegionInfo { tag: "bud", name: "Budapest", kind: RegionKind::Inland, supply_center: true, home_power: Some(Power::Austria) },
    // 15: bul - Bulgaria
    RegionInfo { tag: "bul", name: "Bulgaria", kind: RegionKind::Bicoastal, supply_center: true, home_power: None },
    // 16: bur - Burgundy
    RegionInfo { tag: "bur", name: "Burgundy", kind: RegionKind::Inland, supply_center: false, home_power: None },
    // 17: cly - Clyde
    RegionInfo { tag: "cly", name: "Clyde", kind: RegionKind::Coastal, supply_center: false, home_power: None },
    // 18: con - Constantinople
    RegionInfo { tag: "con", name: "Constantinople", kind: RegionKind::Coastal, supply_center: true, home_power: Some(Power::Turkey) },
    // 19: den - Denmark
    RegionInfo { tag: "den", name: "Denmark", kind: RegionKind::Coastal, supply_center: true, home_power: None },
    // 20: eas - Eastern Mediterranean
    RegionInfo { tag: "eas", name: "Eastern Mediterranean", kind: RegionKind::Sea, supply_center: false, home_power: None },
    // 21: edi - Edinburgh
    RegionInfo { tag: "edi", name: "Edinburgh", kind: RegionKind::Coastal, supply_center: true, home_power: Some(Power::England) },
    // 22: eng - English Channel
    RegionInfo { tag: "eng", name: "English Channel", kind: RegionKind::Sea, supply_center: false, home_power: None },
    // 23: fin - Finland
    RegionInfo { tag: "fin", name: "Finland", kind: RegionKind::Coastal, supply_center: false, home_power: None },
    // 24: gal - Galicia
    RegionInfo { tag: "gal", name: "Galicia", kind: RegionKind::Inland, supply_center: false, home_power: None },
    // 25: gas - Gascony
    RegionInfo { tag: "gas", name: "Gascony", kind: RegionKind::Coastal, supply_center: false, home_power: None },
    // 26: gol - Gulf of Lyon
    RegionInfo { tag: "gol", name: "Gulf of Lyon", kind: RegionKind::Sea, supply_center: false, home_power: None },
    // 27: gre - Greece
    RegionInfo { tag: "gre", name: "Greece", kind: RegionKind::Coastal, supply_center: true, home_power: None },
    // 28: hel - Heligoland Bight
    RegionInfo { tag: "hel", name: "Heligoland Bight", kind: RegionKind::Sea, supply_center: false, home_power: None },
    // 29: hol - Holland
    RegionInfo { tag: "hol", name: "Holland", kind: RegionKind::Coastal, supply_center: true, home_power: None },
    // 30: ion - Ionian Sea
    RegionInfo { tag: "ion", name: "Ionian Sea", kind: RegionKind::Sea, supply_center: false, home_power: None },
    // 31: iri - Irish Sea
    RegionInfo { tag: "iri", name: "Irish Sea", kind: RegionKind::Sea, supply_center: false, home_power: None },
    // 32: kie - Kiel
    RegionInfo { tag: "kie", name: "Kiel", kind: RegionKind::Coastal, supply_center: true, home_power: Some(Power::Germany) },
    // 33: lon - London
    RegionInfo { tag: "lon", name: "London", kind: RegionKind::Coastal, supply_center: true, home_power: Some(Power::England) },
    // 34: lvn - Livonia
    RegionInfo { tag: "lvn", name: "Livonia", kind: RegionKind::Coastal, supply_center: false, home_power: None },
    // 35: lvp - Liverpool
    RegionInfo { tag: "lvp", name: "Liverpool", kind: RegionKind::Coastal, supply_center: true, home_power: Some(Power::England) },
    // 36: mao - Mid-Atlantic Ocean
    RegionInfo { tag: "mao", name: "Mid-Atlantic Ocean", kind: RegionKind::Sea, supply_center: false, home_power: None },
    // 37: mar - Marseilles
    RegionInfo { tag: "mar", name: "Marseilles", kind: RegionKind::Coastal, supply_center: true, home_power: Some(Power::France) },
    // 38: mos - Moscow
    RegionInfo { tag: "mos", name: "Moscow", kind: RegionKind::Inland, supply_center: true, home_power: Some(Power::Russia) },
    // 39: mun - Munich
    RegionInfo { tag: "mun", name: "Munich", kind: RegionKind::Inland, supply_center: true, home_power: Some(Power::Germany) },
    // 40: naf - North Africa
    RegionInfo { tag: "naf", name: "North Africa", kind: RegionKind::Coastal, supply_center: false, home_power: None },
    // 41: nap - Naples
    RegionInfo { tag: "nap", name: "Naples", kind: RegionKind::Coastal, supply_center: true, home_power: Some(Power::Italy) },
    // 42: nat - North Atlantic Ocean
    RegionInfo { tag: "nat", name: "North Atlantic Ocean", kind: RegionKind::Sea, supply_center: false, home_power: None },
    // 43: nor - Norway
    RegionInfo { tag: "nor", name: "Norway", kind: RegionKind::Coastal, supply_center: true, home_power: None },
    // 44: nrg - Norwegian Sea
    RegionInfo { tag: "nrg", name: "Norwegian Sea", kind: RegionKind::Sea, supply_center: false, home_power: None },
    // 45: nth - North Sea
    RegionInfo { tag: "nth", name: "North Sea", kind: RegionKind::Sea, supply_center: false, home_power: None },
    // 46: par - Paris
    RegionInfo { tag: "par", name: "Paris", kind: RegionKind::Inland, supply_center: true, home_power: Some(Power::France) },
    // 47: pic - Picardy
    RegionInfo { tag: "pic", name: "Picardy", kind: RegionKind::Coastal, supply_center: false, home_power: None },
    // 48: pie - Piedmont
    RegionInfo { tag: "pie", name: "Piedmont", kind: RegionKind::Coastal, supply_center: false, home_power: None },
    // 49: por - Portugal
    RegionInfo { tag: "por", name: "Portugal", kind: RegionKind::Coastal, supply_center: true, home_power: None },
    // 50: pru - Prussia
    RegionInfo { tag: "pru", name: "Prussia", kind: RegionKind::Coastal, supply_center: false, home_power: None },
    // 51: rom - Rome
    RegionInfo { tag: "rom", name: "Rome", kind: RegionKind::Coastal, supply_center: true, home_power: Some(Power::Italy) },
    // 52: ruh - Ruhr
    RegionInfo { tag: "ruh", name: "Ruhr", kind: RegionKind::Inland, supply_center: false, home_power: None },
    // 53: rum - Rumania
    RegionInfo { tag: "rum", name: "Rumania", kind: RegionKind::Coastal, supply_center: true, home_power: None },
    // 54: ser - Serbia
    RegionInfo { tag: "ser", name: "Serbia", kind: RegionKind::Inland, supply_center: true, home_power: None },
    // 55: sev - Sevastopol
    RegionInfo { tag: "sev", name: "Sevastopol", kind: RegionKind::Coastal, supply_center: true, home_power: Some(Power::Russia) },
    // 56: sil - Silesia
    RegionInfo { tag: "sil", name: "Silesia", kind: RegionKind::Inland, supply_center: false, home_power: None },
    // 57: ska - Skagerrak
    RegionInfo { tag: "ska", name: "Skagerrak", kind: RegionKind::Sea, supply_center: false, home_power: None },
    // 58: smy - Smyrna
    RegionInfo { tag: "smy", name: "Smyrna", kind: RegionKind::Coastal, supply_center: true, home_power: Some(Power::Turkey) },
    // 59: spa - Spain
    RegionInfo { tag: "spa", name: "Spain", kind: RegionKind::Bicoastal, supply_center: true, home_power: None },
    // 60: stp - St. Petersburg
    RegionInfo { tag: "stp", name: "St. Petersburg", kind: RegionKind::Bicoastal, supply_center: true, home_power: Some(Power::Russia) },
    // 61: swe - Sweden
    RegionInfo { tag: "swe", name: "Sweden", kind: RegionKind::Coastal, supply_center: true, home_power: None },
    // 62: syr - Syria
    RegionInfo { tag: "syr", name: "Syria", kind: RegionKind::Coastal, supply_center: false, home_power: None },
    // 63: tri - Trieste
    RegionInfo { tag: "tri", name: "Trieste", kind: RegionKind::Coastal, supply_center: true, home_power: Some(Power::Austria) },
    // 64: tun - Tunisia
    RegionInfo { tag: "tun", name: "Tunisia", kind: RegionKind::Coastal, supply_center: true, home_power: None },
    // 65: tus - Tuscany
    RegionInfo { tag: "tus", name: "Tuscany", kind: RegionKind::Coastal, supply_center: false, home_power: None },
    // 66: tyn - Tyrrhenian Sea
    RegionInfo { tag: "tyn", name: "Tyrrhenian Sea", kind: RegionKind::Sea, supply_center: false, home_power: None },
    // 67: tyr - Tyrolia
    RegionInfo { tag: "tyr", name: "Tyrolia", kind: RegionKind::Inland, supply_center: false, home_power: None },
    // 68: ukr - Ukraine
    RegionInfo { tag: "ukr", name: "Ukraine", kind: RegionKind::Inland, supply_center: false, home_power: None },
    // 69: ven - Venice
    RegionInfo { tag: "ven", name: "Venice", kind: RegionKind::Coastal, supply_center: true, home_power: Some(Power::Italy) },
    // 70: vie - Vienna
    RegionInfo { tag: "vie", name: "Vienna", kind: RegionKind::Inland, supply_center: true, home_power: Some(Power::Austria) },
    // 71: wal - Wales
    RegionInfo { tag: "wal", name: "Wales", kind: RegionKind::Coastal, supply_center: false, home_power: None },
    // 72: war - Warsaw
    RegionInfo { tag: "war", name: "Warsaw", kind: RegionKind::Inland, supply_center: true, home_power: Some(Power::Russia) },
    // 73: wes - Western Mediterranean
    RegionInfo { tag: "wes", name: "Western Mediterranean", kind: RegionKind::Sea, supply_center: false, home_power: None },
    // 74: yor - Yorkshire
    RegionInfo { tag: "yor", name: "Yorkshire", kind: RegionKind::Coastal, supply_center: false, home_power: None },
];

/// Tag-to-Region lookup table (sorted alphabetically).
static TAG_TABLE: [(&str, Region); REGION_COUNT] = [
    ("adr", Region::Adr), ("aeg", Region::Aeg), ("alb", Region::Alb),
    ("ank", Region::Ank), ("apu", Region::Apu), ("arm", Region::Arm),
    ("bal", Region::Bal), ("bar", Region::Bar), ("bel", Region::Bel),
    ("ber", Region::Ber), ("bla", Region::Bla), ("boh", Region::Boh),
    ("bot", Region::Bot), ("bre", Region::Bre), ("bud", Region::Bud),
    ("bul", Region::Bul), ("bur", Region::Bur), ("cly", Region::Cly),
    ("con", Region::Con), ("den", Region::Den), ("eas", Region::Eas),
    ("edi", Region::Edi), ("eng", Region::Eng), ("fin", Region::Fin),
    ("gal", Region::Gal), ("gas", Region::Gas), ("gol", Region::Gol),
    ("gre", Region::Gre), ("hel", Region::Hel), ("hol", Region::Hol),
    ("ion", Region::Ion), ("iri", Region::Iri), ("kie", Region::Kie),
    ("lon", Region::Lon), ("lvn", Region::Lvn), ("lvp", Region::Lvp),
    ("mao", Region::Mao), ("mar", Region::Mar), ("mos", Region::Mos),
    ("mun", Region::Mun), ("naf", Region::Naf), ("nap", Region::Nap),
    ("nat", Region::Nat), ("nor", Region::Nor), ("nrg", Region::Nrg),
    ("nth", Region::Nth), ("par", Region::Par), ("pic", Region::Pic),
    ("pie", Region::Pie), ("por", Region::Por), ("pru", Region::Pru),
    ("rom", Region::Rom), ("ruh", Region::Ruh), ("rum", Region::Rum),
    ("ser", Region::Ser), ("sev", Region::Sev), ("sil", Region::Sil),
    ("ska", Region::Ska), ("smy", Region::Smy), ("spa", Region::Spa),
    ("stp", Region::Stp), ("swe", Region::Swe), ("syr", Region::Syr),
    ("tri", Region::Tri), ("tun", Region::Tun), ("tus", Region::Tus),
    ("tyn", Region::Tyn), ("tyr", Region::Tyr), ("ukr", Region::Ukr),
    ("ven", Region::Ven), ("vie", Region::Vie), ("wal", Region::Wal),
    ("war", Region::War), ("wes", Region::Wes), ("yor", Region::Yor),
];

/// Backstabbr region-tag aliases folded onto the canonical tags.
static ALIAS_TABLE: [(&str, &str); 4] = [
    ("nwy", "nor"),
    ("lyo", "gol"),
    ("tys", "tyn"),
    ("nao", "nat"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_count_is_75() {
        assert_eq!(ALL_REGIONS.len(), 75);
        assert_eq!(REGION_COUNT, 75);
    }

    #[test]
    fn supply_center_count_is_34() {
        let sc_count = ALL_REGIONS.iter().filter(|r| r.is_supply_center()).count();
        assert_eq!(sc_count, SUPPLY_CENTER_COUNT);
    }

    #[test]
    fn region_indices_are_sequential() {
        for (i, r) in ALL_REGIONS.iter().enumerate() {
            assert_eq!(*r as usize, i, "Region {:?} has wrong index", r);
        }
    }

    #[test]
    fn tag_roundtrip() {
        for r in ALL_REGIONS.iter() {
            let tag = r.tag();
            let roundtrip = Region::from_tag(tag)
                .unwrap_or_else(|| panic!("Failed to look up tag '{}'", tag));
            assert_eq!(*r, roundtrip);
        }
    }

    #[test]
    fn backstabbr_aliases_resolve() {
        assert_eq!(Region::from_tag("nwy"), Some(Region::Nor));
        assert_eq!(Region::from_tag("lyo"), Some(Region::Gol));
        assert_eq!(Region::from_tag("tys"), Some(Region::Tyn));
        assert_eq!(Region::from_tag("nao"), Some(Region::Nat));
    }

    #[test]
    fn region_kind_counts() {
        let inland = ALL_REGIONS.iter().filter(|r| r.kind() == RegionKind::Inland).count();
        let sea = ALL_REGIONS.iter().filter(|r| r.kind() == RegionKind::Sea).count();
        let coastal = ALL_REGIONS.iter().filter(|r| r.kind() == RegionKind::Coastal).count();
        let bicoastal = ALL_REGIONS.iter().filter(|r| r.kind() == RegionKind::Bicoastal).count();
        assert_eq!(inland, 14, "Expected 14 inland regions");
        assert_eq!(sea, 19, "Expected 19 sea regions");
        assert_eq!(coastal, 39, "Expected 39 single-coast coastal regions");
        assert_eq!(bicoastal, 3, "Expected 3 bicoastal regions");
        assert_eq!(inland + sea + coastal + bicoastal, 75);
    }

    #[test]
    fn bicoastal_coasts() {
        assert_eq!(Region::Bul.valid_coasts(), &[Coast::East, Coast::South]);
        assert_eq!(Region::Spa.valid_coasts(), &[Coast::North, Coast::South]);
        assert_eq!(Region::Stp.valid_coasts(), &[Coast::North, Coast::South]);
        assert!(Region::Vie.valid_coasts().is_empty());
        assert!(Region::Lon.valid_coasts().is_empty());
    }

    #[test]
    fn home_supply_center_counts() {
        let count_for = |power: Power| -> usize {
            ALL_REGIONS.iter()
                .filter(|r| r.is_supply_center() && r.home_power() == Some(power))
                .count()
        };
        assert_eq!(count_for(Power::Austria), 3); // bud, tri, vie
        assert_eq!(count_for(Power::England), 3); // edi, lon, lvp
        assert_eq!(count_for(Power::France), 3);  // bre, mar, par
        assert_eq!(count_for(Power::Germany), 3); // ber, kie, mun
        assert_eq!(count_for(Power::Italy), 3);   // nap, rom, ven
        assert_eq!(count_for(Power::Russia), 4);  // mos, sev, stp, war
        assert_eq!(count_for(Power::Turkey), 3);  // ank, con, smy

        let neutral_sc = ALL_REGIONS.iter()
            .filter(|r| r.is_supply_center() && r.home_power().is_none())
            .count();
        assert_eq!(neutral_sc, 12);
    }

    #[test]
    fn power_name_parsing() {
        assert_eq!(ALL_POWERS.len(), 7);
        for p in &ALL_POWERS {
            assert_eq!(Power::from_name(p.name()), Some(*p));
            assert_eq!(Power::from_name(&p.name().to_uppercase()), Some(*p));
        }
        assert_eq!(Power::from_name("Austria-Hungary"), Some(Power::Austria));
        assert_eq!(Power::from_name("prussia"), None);
    }

    #[test]
    fn coast_tag_roundtrip() {
        for c in &[Coast::None, Coast::North, Coast::South, Coast::East, Coast::West] {
            assert_eq!(Coast::from_tag(c.tag()), Some(*c));
        }
    }

    #[test]
    fn unknown_tag_returns_none() {
        assert_eq!(Region::from_tag("xyz"), None);
        assert_eq!(Region::from_tag(""), None);
    }
}
