//! Movement-phase resolution.
//!
//! Implements the full pipeline: default holds, structural validation,
//! convoy-route discovery, support cutting, strength comparison, bounded
//! iterative resolution with circular-movement detection, dislodgement
//! bookkeeping, and construction of the successor state.
//!
//! Strengths follow the standard model: attack = 1 + uncut supports for the
//! move, hold = 1 + uncut support-holds for a stationary unit, prevent =
//! attack strength of a rival mover. A move must strictly exceed both the
//! defender's hold strength and every rival's prevent strength; ties bounce
//! everyone. A move never dislodges a unit of its own power.

use log::warn;

use crate::map::{
    adjacent_regions, fleet_hops, is_adjacent, Power, Region, RegionKind, REGION_COUNT,
};
use crate::state::{DislodgedUnit, GameState, Location, Order, Unit, UnitKind};

use super::phase::{next_turn, update_sc_ownership};
use super::{OrderStatus, Resolution};

/// Fix-point iteration cap; hitting it marks the leftovers unresolvable.
const RESOLUTION_ITERATION_CAP: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoveState {
    Unresolved,
    Succeeds,
    Fails,
}

/// Internal tracking for one order during adjudication.
struct Slot {
    order: Order,
    power: Power,
    unit: Unit,
    /// Index into the submitted order list; None for defaulted holds.
    input_index: Option<usize>,
    void_reason: Option<&'static str>,
    /// Moves only.
    move_state: MoveState,
    fail_reason: Option<&'static str>,
    needs_convoy: bool,
    /// Supports only.
    cut: bool,
}

impl Slot {
    fn is_valid_move(&self) -> bool {
        self.void_reason.is_none()
            && matches!(self.order, Order::Move { .. })
            && self.fail_reason.is_none()
    }

    fn is_valid_support(&self) -> bool {
        self.void_reason.is_none() && matches!(self.order, Order::Support { .. })
    }

    fn move_dest(&self) -> Region {
        match self.order {
            Order::Move { dest, .. } => dest.region,
            _ => unreachable!("move_dest on non-move slot"),
        }
    }
}

struct Resolver<'a> {
    state: &'a GameState,
    slots: Vec<Slot>,
    /// Region index -> slot index for the unit ordered there.
    lookup: [Option<usize>; REGION_COUNT],
    /// Region index -> attacker origin, for units dislodged so far.
    dislodged_by: [Option<Region>; REGION_COUNT],
}

/// Resolves movement-phase orders and returns the successor state plus one
/// resolution per submitted order.
pub fn resolve_movement(state: &GameState, orders: &[(Order, Power)]) -> (GameState, Vec<Resolution>) {
    let mut resolver = Resolver {
        state,
        slots: Vec::with_capacity(state.units.len()),
        lookup: [None; REGION_COUNT],
        dislodged_by: [None; REGION_COUNT],
    };

    let prechecked = resolver.ingest(orders);
    resolver.validate();
    resolver.discover_convoy_routes();
    resolver.cut_supports();
    resolver.iterate();
    resolver.finish(orders, prechecked)
}

impl<'a> Resolver<'a> {
    /// Slots every well-addressed order, defaults holds for unordered
    /// units, and records per-input rejections for the rest.
    ///
    /// Returns, per input index, an early rejection reason (or None when a
    /// slot was created for it).
    fn ingest(&mut self, orders: &[(Order, Power)]) -> Vec<Option<&'static str>> {
        let mut prechecked: Vec<Option<&'static str>> = vec![None; orders.len()];

        for (i, (order, power)) in orders.iter().enumerate() {
            let location = match order.unit_location() {
                Some(l) => l,
                None => {
                    prechecked[i] = Some("wrong phase");
                    continue;
                }
            };
            let unit = match self.state.unit_at(location.region) {
                Some(u) => *u,
                None => {
                    prechecked[i] = Some("no such unit");
                    continue;
                }
            };
            if unit.power != *power || !unit.location.same_place(location) {
                prechecked[i] = Some("no such unit");
                continue;
            }
            if self.lookup[location.region as usize].is_some() {
                prechecked[i] = Some("duplicate order");
                continue;
            }
            let slot_idx = self.slots.len();
            self.slots.push(Slot {
                order: *order,
                power: *power,
                unit,
                input_index: Some(i),
                void_reason: None,
                move_state: MoveState::Unresolved,
                fail_reason: None,
                needs_convoy: false,
                cut: false,
            });
            self.lookup[location.region as usize] = Some(slot_idx);
        }

        // Default orders: any unit without one holds.
        for unit in self.state.units.iter() {
            let region = unit.location.region;
            if self.lookup[region as usize].is_some() {
                continue;
            }
            let slot_idx = self.slots.len();
            self.slots.push(Slot {
                order: Order::Hold { unit: unit.location },
                power: unit.power,
                unit: *unit,
                input_index: None,
                void_reason: None,
                move_state: MoveState::Unresolved,
                fail_reason: None,
                needs_convoy: false,
                cut: false,
            });
            self.lookup[region as usize] = Some(slot_idx);
        }

        prechecked
    }

    /// Structural legality checks. Void orders act as holds from here on.
    fn validate(&mut self) {
        for idx in 0..self.slots.len() {
            let reason = self.validate_slot(idx);
            self.slots[idx].void_reason = reason;
        }
    }

    fn validate_slot(&mut self, idx: usize) -> Option<&'static str> {
        let unit = self.slots[idx].unit;
        match self.slots[idx].order {
            Order::Hold { .. } => None,
            Order::Move { dest, via_convoy, .. } => {
                if dest.region == unit.location.region {
                    return Some("moves to own region");
                }
                if !unit.kind.can_occupy(dest.region) {
                    return Some("unreachable destination");
                }
                match unit.kind {
                    UnitKind::Fleet => {
                        if via_convoy {
                            return Some("only armies may be convoyed");
                        }
                        if dest.region.is_bicoastal() && dest.coast == crate::map::Coast::None {
                            return Some("missing coast");
                        }
                        if !is_adjacent(
                            unit.location.region,
                            unit.location.coast,
                            dest.region,
                            dest.coast,
                            true,
                        ) {
                            return Some("unreachable destination");
                        }
                        None
                    }
                    UnitKind::Army => {
                        let adjacent = is_adjacent(
                            unit.location.region,
                            unit.location.coast,
                            dest.region,
                            dest.coast,
                            false,
                        );
                        if via_convoy || !adjacent {
                            let src_kind = unit.location.region.kind();
                            let dst_kind = dest.region.kind();
                            let coastal = |k: RegionKind| {
                                matches!(k, RegionKind::Coastal | RegionKind::Bicoastal)
                            };
                            if !coastal(src_kind) || !coastal(dst_kind) {
                                return Some("unreachable destination");
                            }
                            self.slots[idx].needs_convoy = true;
                        }
                        None
                    }
                }
            }
            Order::Support { supported, dest, .. } => {
                let sup_unit = match self.state.unit_at(supported.region) {
                    Some(u) => *u,
                    None => return Some("no unit to support"),
                };
                if !sup_unit.location.same_place(supported) {
                    return Some("no unit to support");
                }
                let is_fleet = unit.kind == UnitKind::Fleet;
                let reach =
                    adjacent_regions(unit.location.region, unit.location.coast, is_fleet);
                if !reach.contains(&dest.region) {
                    return Some("unreachable support destination");
                }
                if supported.region != dest.region {
                    // Support-move: the supported unit must itself be able
                    // to reach the destination, directly or by convoy.
                    let sup_fleet = sup_unit.kind == UnitKind::Fleet;
                    let direct = is_adjacent(
                        sup_unit.location.region,
                        sup_unit.location.coast,
                        dest.region,
                        crate::map::Coast::None,
                        sup_fleet,
                    );
                    let convoyable = sup_unit.kind == UnitKind::Army
                        && matches!(
                            sup_unit.location.region.kind(),
                            RegionKind::Coastal | RegionKind::Bicoastal
                        )
                        && matches!(
                            dest.region.kind(),
                            RegionKind::Coastal | RegionKind::Bicoastal
                        );
                    if !direct && !convoyable {
                        return Some("supported unit cannot reach destination");
                    }
                    // A support may not be used to dislodge the supporter's
                    // own unit.
                    if let Some(target) = self.state.unit_at(dest.region) {
                        if target.power == self.slots[idx].power {
                            return Some("support against own unit");
                        }
                    }
                }
                None
            }
            Order::Convoy { army, dest, .. } => {
                if unit.kind != UnitKind::Fleet
                    || unit.location.region.kind() != RegionKind::Sea
                {
                    return Some("convoy from non-sea region");
                }
                let carried = match self.state.unit_at(army.region) {
                    Some(u) => *u,
                    None => return Some("no army to convoy"),
                };
                if carried.kind != UnitKind::Army {
                    return Some("only armies may be convoyed");
                }
                if !UnitKind::Army.can_occupy(dest.region)
                    || dest.region.kind() == RegionKind::Sea
                {
                    return Some("unreachable destination");
                }
                None
            }
            Order::Retreat { .. }
            | Order::Disband { .. }
            | Order::Build { .. }
            | Order::Waive { .. } => Some("wrong phase"),
        }
    }

    /// Marks convoyed moves with no complete route as failed.
    fn discover_convoy_routes(&mut self) {
        for idx in 0..self.slots.len() {
            if self.slots[idx].void_reason.is_some() || !self.slots[idx].needs_convoy {
                continue;
            }
            if !matches!(self.slots[idx].order, Order::Move { .. }) {
                continue;
            }
            let src = self.slots[idx].unit.location.region;
            let dst = self.slots[idx].move_dest();
            if !self.convoy_path_exists(src, dst) {
                self.slots[idx].fail_reason = Some("no convoy route");
                self.slots[idx].move_state = MoveState::Fails;
            }
        }
    }

    /// Breadth-first search over sea regions ordered to convoy this
    /// (source, destination) pair, skipping fleets already dislodged.
    fn convoy_path_exists(&self, src: Region, dst: Region) -> bool {
        let carriers: Vec<Region> = self
            .slots
            .iter()
            .filter(|s| s.void_reason.is_none())
            .filter_map(|s| match s.order {
                Order::Convoy { army, dest, .. }
                    if army.region == src && dest.region == dst =>
                {
                    Some(s.unit.location.region)
                }
                _ => None,
            })
            .filter(|r| self.dislodged_by[*r as usize].is_none())
            .collect();

        let mut visited = [false; REGION_COUNT];
        let mut queue: Vec<Region> = Vec::new();

        for &sea in carriers.iter() {
            if is_adjacent(sea, crate::map::Coast::None, src, crate::map::Coast::None, true) {
                visited[sea as usize] = true;
                queue.push(sea);
            }
        }

        let mut head = 0;
        while head < queue.len() {
            let current = queue[head];
            head += 1;
            if is_adjacent(current, crate::map::Coast::None, dst, crate::map::Coast::None, true) {
                return true;
            }
            for &sea in carriers.iter() {
                if visited[sea as usize] {
                    continue;
                }
                if is_adjacent(current, crate::map::Coast::None, sea, crate::map::Coast::None, true)
                {
                    visited[sea as usize] = true;
                    queue.push(sea);
                }
            }
        }
        false
    }

    /// Static support cutting.
    ///
    /// A support is cut by any valid attack on its region from another
    /// power, except an attack coming from the very region the support is
    /// directing force into — unless the support is a support-hold of that
    /// region, in which case the cut applies. Attacks whose convoy already
    /// failed cannot cut.
    fn cut_supports(&mut self) {
        for s_idx in 0..self.slots.len() {
            if !self.slots[s_idx].is_valid_support() {
                continue;
            }
            let s_region = self.slots[s_idx].unit.location.region;
            let s_power = self.slots[s_idx].power;
            let (directed, support_hold) = match self.slots[s_idx].order {
                Order::Support { supported, dest, .. } => {
                    (dest.region, supported.region == dest.region)
                }
                _ => continue,
            };

            for m_idx in 0..self.slots.len() {
                if !self.slots[m_idx].is_valid_move() {
                    continue;
                }
                if self.slots[m_idx].move_dest() != s_region {
                    continue;
                }
                if self.slots[m_idx].power == s_power {
                    continue;
                }
                let attacker_src = self.slots[m_idx].unit.location.region;
                if attacker_src == directed && !support_hold {
                    continue;
                }
                self.slots[s_idx].cut = true;
                break;
            }
        }
    }

    /// Attack strength of the move in `m_idx`: 1 plus uncut supports that
    /// match its source and destination regions.
    fn attack_strength(&self, m_idx: usize) -> i32 {
        let src = self.slots[m_idx].unit.location.region;
        let dst = self.slots[m_idx].move_dest();
        let mut strength = 1;
        for s in self.slots.iter() {
            if !s.is_valid_support() || s.cut {
                continue;
            }
            if let Order::Support { supported, dest, .. } = s.order {
                if supported.region == src && dest.region == dst && supported.region != dest.region
                {
                    strength += 1;
                }
            }
        }
        strength
    }

    /// Uncut support-holds for the unit at `region`.
    fn support_hold_strength(&self, region: Region) -> i32 {
        let mut strength = 0;
        for s in self.slots.iter() {
            if !s.is_valid_support() || s.cut {
                continue;
            }
            if let Order::Support { supported, dest, .. } = s.order {
                if supported.region == region && dest.region == region {
                    strength += 1;
                }
            }
        }
        strength
    }

    /// The strongest rival attack into `dest`, excluding the move itself.
    fn max_prevent(&self, m_idx: usize, dest: Region) -> i32 {
        let mut max = 0;
        for (i, s) in self.slots.iter().enumerate() {
            if i == m_idx || !s.is_valid_move() {
                continue;
            }
            if s.move_dest() != dest {
                continue;
            }
            max = max.max(self.attack_strength(i));
        }
        max
    }

    fn iterate(&mut self) {
        let mut resolved_all = false;

        for _pass in 0..RESOLUTION_ITERATION_CAP {
            let mut changed = false;

            // Convoy disruption: a dislodged carrier can break a route.
            for idx in 0..self.slots.len() {
                if !self.slots[idx].is_valid_move()
                    || !self.slots[idx].needs_convoy
                    || self.slots[idx].move_state != MoveState::Unresolved
                {
                    continue;
                }
                let src = self.slots[idx].unit.location.region;
                let dst = self.slots[idx].move_dest();
                if !self.convoy_path_exists(src, dst) {
                    self.slots[idx].fail_reason = Some("convoy disrupted");
                    self.slots[idx].move_state = MoveState::Fails;
                    changed = true;
                }
            }

            for idx in 0..self.slots.len() {
                if !self.slots[idx].is_valid_move()
                    || self.slots[idx].move_state != MoveState::Unresolved
                {
                    continue;
                }
                match self.try_resolve_move(idx) {
                    Some(true) => {
                        self.mark_success(idx);
                        changed = true;
                    }
                    Some(false) => {
                        self.slots[idx].move_state = MoveState::Fails;
                        changed = true;
                    }
                    None => {}
                }
            }

            let unresolved = self.slots.iter().any(|s| {
                s.is_valid_move() && s.move_state == MoveState::Unresolved
            });
            if !unresolved {
                resolved_all = true;
                break;
            }
            if !changed && !self.resolve_cycles() {
                break;
            }
        }

        if !resolved_all {
            for slot in self.slots.iter_mut() {
                if slot.is_valid_move() && slot.move_state == MoveState::Unresolved {
                    warn!(
                        "movement resolution did not converge for {:?}",
                        slot.unit.location.region
                    );
                    slot.move_state = MoveState::Fails;
                    slot.fail_reason = Some("unresolvable");
                }
            }
        }
    }

    /// Returns true once every attack on this convoyed move's carriers has
    /// been resolved, so the route's fate is known.
    fn carriers_settled(&self, src: Region, dst: Region) -> bool {
        for slot in self.slots.iter() {
            let carrier = match slot.order {
                Order::Convoy { army, dest, .. }
                    if slot.void_reason.is_none()
                        && army.region == src
                        && dest.region == dst =>
                {
                    slot.unit.location.region
                }
                _ => continue,
            };
            let attacked_unresolved = self.slots.iter().any(|s| {
                s.is_valid_move()
                    && s.move_dest() == carrier
                    && s.move_state == MoveState::Unresolved
            });
            if attacked_unresolved {
                return false;
            }
        }
        true
    }

    /// Attempts to resolve one move. Returns None when a dependency (the
    /// destination unit's own move, or an attack on a convoy carrier) is
    /// still unresolved.
    fn try_resolve_move(&self, m_idx: usize) -> Option<bool> {
        let dest = self.slots[m_idx].move_dest();
        let src = self.slots[m_idx].unit.location.region;
        let power = self.slots[m_idx].power;

        if self.slots[m_idx].needs_convoy && !self.carriers_settled(src, dest) {
            return None;
        }

        let attack = self.attack_strength(m_idx);

        // Rival attacks into the same region: ties bounce everyone.
        if attack <= self.max_prevent(m_idx, dest) {
            return Some(false);
        }

        let occupant = self.state.unit_at(dest);
        let occ_slot_idx = self.lookup[dest as usize];

        if let (Some(occ), Some(occ_idx)) = (occupant, occ_slot_idx) {
            let occ_is_mover = self.slots[occ_idx].is_valid_move();

            // Head-to-head: the occupant moves into our region, and neither
            // leg is convoyed. Strictly greater strength wins; the loser is
            // dislodged.
            if occ_is_mover
                && self.slots[occ_idx].move_dest() == src
                && !self.slots[occ_idx].needs_convoy
                && !self.slots[m_idx].needs_convoy
            {
                let defend = self.attack_strength(occ_idx);
                if attack <= defend {
                    return Some(false);
                }
                if occ.power == power {
                    return Some(false);
                }
                return Some(true);
            }

            if occ_is_mover {
                // The occupant is leaving (or trying to).
                match self.slots[occ_idx].move_state {
                    MoveState::Unresolved => return None,
                    MoveState::Succeeds => return Some(true),
                    MoveState::Fails => {
                        if attack <= 1 {
                            return Some(false);
                        }
                        if occ.power == power {
                            return Some(false);
                        }
                        return Some(true);
                    }
                }
            }

            // Stationary defender.
            let hold = 1 + self.support_hold_strength(dest);
            if attack <= hold {
                return Some(false);
            }
            if occ.power == power {
                return Some(false);
            }
            return Some(true);
        }

        // Empty destination; rivals were already beaten.
        Some(true)
    }

    /// Marks a move successful and performs dislodgement bookkeeping: the
    /// defender (if still present) is dislodged, its pending head-to-head
    /// move fails, and any support it was giving is cut.
    fn mark_success(&mut self, m_idx: usize) {
        self.slots[m_idx].move_state = MoveState::Succeeds;

        let dest = self.slots[m_idx].move_dest();
        let src = self.slots[m_idx].unit.location.region;

        if self.state.unit_at(dest).is_none() {
            return;
        }
        if let Some(occ_idx) = self.lookup[dest as usize] {
            if self.slots[occ_idx].is_valid_move() {
                match self.slots[occ_idx].move_state {
                    MoveState::Succeeds => return, // vacated, nobody dislodged
                    MoveState::Fails => {}
                    MoveState::Unresolved => {
                        // Only a beaten head-to-head opponent can still be
                        // unresolved once we succeed.
                        self.slots[occ_idx].move_state = MoveState::Fails;
                    }
                }
            }
            self.dislodged_by[dest as usize] = Some(src);
            // Dislodgement cuts a support even when the attack came from
            // the supported destination.
            if self.slots[occ_idx].is_valid_support() {
                self.slots[occ_idx].cut = true;
            }
        }
    }

    /// Detects circular movement among still-unresolved moves and resolves
    /// whole cycles at once. Returns true if anything changed.
    fn resolve_cycles(&mut self) -> bool {
        for start in 0..self.slots.len() {
            if !self.slots[start].is_valid_move()
                || self.slots[start].move_state != MoveState::Unresolved
            {
                continue;
            }

            let mut chain: Vec<usize> = vec![start];
            let mut cycle: Option<Vec<usize>> = None;
            let mut current = start;
            loop {
                let dest = self.slots[current].move_dest();
                let next = match self.lookup[dest as usize] {
                    Some(n)
                        if self.slots[n].is_valid_move()
                            && self.slots[n].move_state == MoveState::Unresolved =>
                    {
                        n
                    }
                    _ => break,
                };
                if next == start {
                    cycle = Some(chain.clone());
                    break;
                }
                if chain.contains(&next) {
                    break;
                }
                chain.push(next);
                current = next;
            }

            if let Some(members) = cycle {
                // Every member must beat any outside attacker into its
                // destination, otherwise the whole ring bounces.
                let ok = members.iter().all(|&m| {
                    let dest = self.slots[m].move_dest();
                    let strength = self.attack_strength(m);
                    self.slots.iter().enumerate().all(|(i, s)| {
                        if members.contains(&i) || !s.is_valid_move() {
                            return true;
                        }
                        s.move_dest() != dest || self.attack_strength(i) < strength
                    })
                });
                for &m in members.iter() {
                    self.slots[m].move_state = if ok {
                        MoveState::Succeeds
                    } else {
                        MoveState::Fails
                    };
                }
                return true;
            }
        }
        false
    }

    /// Builds the successor state and the per-input resolutions.
    fn finish(
        &mut self,
        orders: &[(Order, Power)],
        prechecked: Vec<Option<&'static str>>,
    ) -> (GameState, Vec<Resolution>) {
        let state = self.state;

        // Regions where an attack bounced this turn; retreats may not end
        // there.
        let mut bounce_sites = [false; REGION_COUNT];
        for slot in self.slots.iter() {
            if slot.void_reason.is_none()
                && matches!(slot.order, Order::Move { .. })
                && slot.move_state == MoveState::Fails
                && slot.fail_reason.is_none()
            {
                bounce_sites[slot.move_dest() as usize] = true;
            }
        }

        let mut next = state.clone();
        next.dislodged.clear();

        // Pull dislodged units off the board.
        let mut dislodged_units: Vec<(Unit, Region)> = Vec::new();
        for region_idx in 0..REGION_COUNT {
            if let Some(attacker) = self.dislodged_by[region_idx] {
                if let Some(unit) = next.remove_unit_at(crate::map::ALL_REGIONS[region_idx]) {
                    dislodged_units.push((unit, attacker));
                }
            }
        }

        // Apply successful moves.
        for slot in self.slots.iter() {
            if !slot.is_valid_move() || slot.move_state != MoveState::Succeeds {
                continue;
            }
            if let Order::Move { dest, .. } = slot.order {
                if let Some(mut unit) = next.remove_unit_at(slot.unit.location.region) {
                    unit.location = match unit.kind {
                        UnitKind::Army => Location::new(dest.region),
                        UnitKind::Fleet => dest,
                    };
                    next.place_unit(unit);
                }
            }
        }

        // Legal retreat sets are computed against the post-move board.
        for (unit, attacker) in dislodged_units {
            let retreats = retreat_options_for(&unit, attacker, &bounce_sites, &next);
            next.dislodged.push(DislodgedUnit { unit, attacker_from: attacker, retreats });
        }

        let has_dislodgements = !next.dislodged.is_empty();
        if state.turn.season == crate::state::Season::Fall {
            update_sc_ownership(&mut next);
        }
        next.turn = next_turn(state.turn, has_dislodgements);

        // Per-input resolutions.
        let mut resolutions = Vec::with_capacity(orders.len());
        for (i, (order, power)) in orders.iter().enumerate() {
            if let Some(reason) = prechecked[i] {
                resolutions.push(Resolution::with_reason(*order, *power, OrderStatus::Void, reason));
                continue;
            }
            let slot = self
                .slots
                .iter()
                .find(|s| s.input_index == Some(i))
                .expect("every accepted input has a slot");
            resolutions.push(self.slot_resolution(slot));
        }

        (next, resolutions)
    }

    fn slot_resolution(&self, slot: &Slot) -> Resolution {
        if let Some(reason) = slot.void_reason {
            return Resolution::with_reason(slot.order, slot.power, OrderStatus::Void, reason);
        }

        let region = slot.unit.location.region;
        let dislodged = self.dislodged_by[region as usize].is_some();

        match slot.order {
            Order::Move { .. } => match slot.move_state {
                MoveState::Succeeds => Resolution::new(slot.order, slot.power, OrderStatus::Succeeds),
                _ => {
                    let status = if dislodged {
                        OrderStatus::Dislodged
                    } else if slot.fail_reason.is_some() {
                        OrderStatus::Fails
                    } else {
                        OrderStatus::Bounced
                    };
                    Resolution {
                        order: slot.order,
                        power: slot.power,
                        status,
                        reason: slot.fail_reason,
                    }
                }
            },
            Order::Support { .. } => {
                if dislodged {
                    Resolution::new(slot.order, slot.power, OrderStatus::Dislodged)
                } else if slot.cut {
                    Resolution::new(slot.order, slot.power, OrderStatus::Cut)
                } else {
                    Resolution::new(slot.order, slot.power, OrderStatus::Succeeds)
                }
            }
            _ => {
                if dislodged {
                    Resolution::new(slot.order, slot.power, OrderStatus::Dislodged)
                } else {
                    Resolution::new(slot.order, slot.power, OrderStatus::Succeeds)
                }
            }
        }
    }
}

/// Legal retreat destinations: adjacent, reachable by the unit's kind, not
/// the attacker's origin, not a bounce site, and vacant after all moves.
/// Bicoastal fleet destinations enumerate each reachable coast.
fn retreat_options_for(
    unit: &Unit,
    attacker_from: Region,
    bounce_sites: &[bool; REGION_COUNT],
    post_move: &GameState,
) -> Vec<Location> {
    let mut options = Vec::new();
    let candidates: Vec<Location> = match unit.kind {
        UnitKind::Army => {
            adjacent_regions(unit.location.region, unit.location.coast, false)
                .into_iter()
                .map(Location::new)
                .collect()
        }
        UnitKind::Fleet => fleet_hops(unit.location.region, unit.location.coast)
            .iter()
            .map(|&(r, c)| Location::with_coast(r, c))
            .collect(),
    };

    for dest in candidates {
        if dest.region == attacker_from {
            continue;
        }
        if bounce_sites[dest.region as usize] {
            continue;
        }
        if post_move.unit_at(dest.region).is_some() {
            continue;
        }
        options.push(dest);
    }
    options
}
