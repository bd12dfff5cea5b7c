//! Coalition and priority specification parsing.
//!
//! Coalitions: `P1+P2[,P3+P4]…`, each token a case-insensitive power name.
//! Priorities: `<deny|allow> <power> <region>`. Unknown names are rejected
//! with a configuration error.

use crate::error::ConfigError;
use crate::eval::{Coalition, Priority, PriorityAction};
use crate::map::{Power, Region};

/// Parses a coalition specification into one coalition per comma token.
///
/// The display name is the canonicalized token, e.g. "England+France".
pub fn parse_coalitions(spec: &str) -> Result<Vec<Coalition>, ConfigError> {
    let mut coalitions = Vec::new();

    for group in spec.split(',') {
        let group = group.trim();
        if group.is_empty() {
            continue;
        }
        let mut powers = Vec::new();
        for token in group.split('+') {
            let token = token.trim();
            let power =
                Power::from_name(token).ok_or_else(|| ConfigError::UnknownPower(token.to_string()))?;
            if !powers.contains(&power) {
                powers.push(power);
            }
        }
        if powers.is_empty() {
            return Err(ConfigError::EmptyCoalition);
        }
        let name = powers
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join("+");
        coalitions.push(Coalition::new(name, powers));
    }

    if coalitions.is_empty() {
        return Err(ConfigError::EmptyCoalition);
    }
    Ok(coalitions)
}

/// Picks the coalition to optimize for by name (case-insensitive); `None`
/// selects the first.
pub fn select_coalition(
    coalitions: &[Coalition],
    optimize_for: Option<&str>,
) -> Result<Coalition, ConfigError> {
    match optimize_for {
        None => coalitions
            .first()
            .cloned()
            .ok_or(ConfigError::EmptyCoalition),
        Some(name) => coalitions
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| ConfigError::UnknownCoalition(name.to_string())),
    }
}

/// Parses one priority specification line.
pub fn parse_priority(spec: &str) -> Result<Priority, ConfigError> {
    let parts: Vec<&str> = spec.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(ConfigError::InvalidPriority(spec.to_string()));
    }

    let action = match parts[0].to_ascii_lowercase().as_str() {
        "deny" => PriorityAction::Deny,
        "allow" => PriorityAction::Allow,
        _ => return Err(ConfigError::InvalidPriority(spec.to_string())),
    };
    let power =
        Power::from_name(parts[1]).ok_or_else(|| ConfigError::UnknownPower(parts[1].to_string()))?;
    let region = Region::from_tag(&parts[2].to_ascii_lowercase())
        .ok_or_else(|| ConfigError::UnknownRegion(parts[2].to_string()))?;

    Ok(Priority { action, power, region })
}
