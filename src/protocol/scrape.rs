//! Scraped game-state payload.
//!
//! The scraper collaborator hands over a JSON document with player names,
//! unit placements, and supply-center ownership keyed by region tag. This
//! module models that document with serde and normalizes it into a
//! `GameState`: names are case-insensitive ("Austria-Hungary" folds onto
//! Austria), region tags are lowercased, and Backstabbr's variant tags are
//! resolved through the map's alias table.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::PayloadError;
use crate::map::{Coast, Power, Region};
use crate::state::{GameState, Location, Phase, Season, Turn, Unit, UnitKind};

/// A fully observable game state as scraped from the game page.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapedGame {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub turn: ScrapedTurn,
    /// Player name -> region tag -> unit.
    pub players: BTreeMap<String, BTreeMap<String, ScrapedUnit>>,
    /// Region tag -> owning power name.
    #[serde(default)]
    pub supply_centers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScrapedTurn {
    pub year: u16,
    pub season: ScrapedSeason,
    pub phase: ScrapedPhase,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapedSeason {
    Spring,
    Fall,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapedPhase {
    Movement,
    Retreat,
    Build,
}

/// A unit entry: either a bare kind letter ("A"/"F") or an object with an
/// explicit coast for fleets on bicoastal regions.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScrapedUnit {
    Letter(String),
    Detailed {
        kind: String,
        #[serde(default)]
        coast: Option<String>,
    },
}

impl ScrapedGame {
    /// Decodes a payload from its JSON form.
    pub fn from_json(payload: &str) -> Result<ScrapedGame, PayloadError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Normalizes the payload into a game state.
    pub fn to_state(&self) -> Result<GameState, PayloadError> {
        if self.turn.year < 1901 {
            return Err(PayloadError::InvalidTurn(format!("year {}", self.turn.year)));
        }
        let turn = Turn::new(
            self.turn.year,
            match self.turn.season {
                ScrapedSeason::Spring => Season::Spring,
                ScrapedSeason::Fall => Season::Fall,
            },
            match self.turn.phase {
                ScrapedPhase::Movement => Phase::Movement,
                ScrapedPhase::Retreat => Phase::Retreat,
                ScrapedPhase::Build => Phase::Build,
            },
        );

        let mut state = GameState::empty(turn);

        for (player, units) in self.players.iter() {
            let power = Power::from_name(player)
                .ok_or_else(|| PayloadError::UnknownPower(player.clone()))?;
            for (tag, scraped) in units.iter() {
                let region = parse_region(tag)?;
                let (kind, coast) = scraped.resolve(region)?;
                let unit = Unit::new(kind, power, Location::with_coast(region, coast));
                if !state.place_unit(unit) {
                    return Err(PayloadError::DuplicateUnit(region.tag().to_string()));
                }
            }
        }

        for (tag, owner) in self.supply_centers.iter() {
            let region = parse_region(tag)?;
            let power = Power::from_name(owner)
                .ok_or_else(|| PayloadError::UnknownPower(owner.clone()))?;
            state.set_sc_owner(region, Some(power));
        }

        Ok(state)
    }
}

impl ScrapedUnit {
    fn resolve(&self, region: Region) -> Result<(UnitKind, Coast), PayloadError> {
        let (kind_str, coast_str) = match self {
            ScrapedUnit::Letter(s) => (s.as_str(), None),
            ScrapedUnit::Detailed { kind, coast } => (kind.as_str(), coast.as_deref()),
        };

        let kind = kind_str
            .chars()
            .next()
            .and_then(UnitKind::from_letter)
            .filter(|_| kind_str.len() == 1)
            .ok_or_else(|| PayloadError::UnknownUnitKind(kind_str.to_string()))?;

        let coast = match coast_str {
            Some(c) => parse_coast(c)?,
            None => Coast::None,
        };

        // A fleet on a bicoastal region must say which coast it sits on.
        if kind == UnitKind::Fleet && region.is_bicoastal() && coast == Coast::None {
            return Err(PayloadError::MissingCoast(region.tag().to_string()));
        }
        if kind == UnitKind::Army && coast != Coast::None {
            return Err(PayloadError::UnknownCoast(format!(
                "army in {} cannot carry a coast",
                region.tag()
            )));
        }

        Ok((kind, coast))
    }
}

fn parse_region(tag: &str) -> Result<Region, PayloadError> {
    let normalized = tag.to_ascii_lowercase();
    Region::from_tag(&normalized).ok_or_else(|| PayloadError::UnknownRegion(tag.to_string()))
}

fn parse_coast(value: &str) -> Result<Coast, PayloadError> {
    match value.to_ascii_lowercase().as_str() {
        "nc" | "north" => Ok(Coast::North),
        "sc" | "south" => Ok(Coast::South),
        "ec" | "east" => Ok(Coast::East),
        "wc" | "west" => Ok(Coast::West),
        "" => Ok(Coast::None),
        other => Err(PayloadError::UnknownCoast(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "id": "8123",
        "name": "Test Game",
        "turn": { "year": 1903, "season": "spring", "phase": "movement" },
        "players": {
            "Austria-Hungary": { "VIE": "A", "tri": "F" },
            "russia": {
                "stp": { "kind": "F", "coast": "sc" },
                "mos": { "kind": "A" }
            },
            "England": { "nwy": "F" }
        },
        "supply_centers": {
            "vie": "Austria-Hungary",
            "tri": "austria",
            "stp": "Russia",
            "mos": "Russia",
            "nwy": "England"
        }
    }"#;

    #[test]
    fn normalizes_full_payload() {
        let scraped = ScrapedGame::from_json(PAYLOAD).unwrap();
        let state = scraped.to_state().unwrap();

        assert_eq!(state.turn, Turn::new(1903, Season::Spring, Phase::Movement));
        assert_eq!(state.units.len(), 5);

        // "Austria-Hungary" aliases to Austria, tags are case-folded.
        let vie = state.unit_at(Region::Vie).unwrap();
        assert_eq!(vie.power, Power::Austria);
        assert_eq!(vie.kind, UnitKind::Army);

        // "nwy" is a Backstabbr alias for the canonical "nor".
        let nor = state.unit_at(Region::Nor).unwrap();
        assert_eq!(nor.power, Power::England);
        assert_eq!(state.sc_owner(Region::Nor), Some(Power::England));

        // Detailed units keep their coast.
        let stp = state.unit_at(Region::Stp).unwrap();
        assert_eq!(stp.location.coast, Coast::South);

        assert_eq!(state.sc_count(Power::Russia), 2);
    }

    #[test]
    fn rejects_unknown_power() {
        let raw = r#"{
            "id": "1", "turn": { "year": 1901, "season": "spring", "phase": "movement" },
            "players": { "Prussia": { "ber": "A" } }
        }"#;
        let scraped = ScrapedGame::from_json(raw).unwrap();
        assert!(matches!(scraped.to_state(), Err(PayloadError::UnknownPower(_))));
    }

    #[test]
    fn rejects_unknown_region() {
        let raw = r#"{
            "id": "1", "turn": { "year": 1901, "season": "spring", "phase": "movement" },
            "players": { "France": { "xyz": "A" } }
        }"#;
        let scraped = ScrapedGame::from_json(raw).unwrap();
        assert!(matches!(scraped.to_state(), Err(PayloadError::UnknownRegion(_))));
    }

    #[test]
    fn rejects_bicoastal_fleet_without_coast() {
        let raw = r#"{
            "id": "1", "turn": { "year": 1901, "season": "spring", "phase": "movement" },
            "players": { "Russia": { "stp": "F" } }
        }"#;
        let scraped = ScrapedGame::from_json(raw).unwrap();
        assert!(matches!(scraped.to_state(), Err(PayloadError::MissingCoast(_))));
    }

    #[test]
    fn rejects_duplicate_units() {
        let raw = r#"{
            "id": "1", "turn": { "year": 1901, "season": "spring", "phase": "movement" },
            "players": {
                "France": { "par": "A" },
                "Germany": { "PAR": "A" }
            }
        }"#;
        let scraped = ScrapedGame::from_json(raw).unwrap();
        assert!(matches!(scraped.to_state(), Err(PayloadError::DuplicateUnit(_))));
    }

    #[test]
    fn rejects_pre_1901_years() {
        let raw = r#"{
            "id": "1", "turn": { "year": 1812, "season": "spring", "phase": "movement" },
            "players": {}
        }"#;
        let scraped = ScrapedGame::from_json(raw).unwrap();
        assert!(matches!(scraped.to_state(), Err(PayloadError::InvalidTurn(_))));
    }
}
