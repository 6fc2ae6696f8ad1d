/*
 * Copyright (c) 2003-2003-2023. Trevor Campbell and others.
 *
 * This file is part of Kelpie Flight Planner.
 *
 * Kelpie Flight Planner is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 2 of the License, or
 * (at your option) any later version.
 *
 * Kelpie Flight Planner is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Kelpie Flight Planner; if not, write to the Free Software
 * Foundation, Inc., 59 Temple Place, Suite 330, Boston, MA  02111-1307  USA
 *
 * Contributors:
 *      Trevor Campbell
 *
 */

use std::collections::BTreeMap;
use std::sync::Arc;

use log::info;

use crate::earth::bounds::Bounds;
use crate::earth::coordinate::Coordinate;
use crate::error::NavDataError;
use crate::model::airport::Airport;
use crate::model::airway::Airway;
use crate::model::fix::{Fix, FixType};
use crate::model::location::Location;
use crate::model::navaid::Navaid;
use crate::util::location_filter::{BoundsFilter, CombinedFilter, Filter, IdFilter, RangeFilter};

pub mod bounds;
pub mod coordinate;

/// Distance inside which a navaid with the same ident is taken to be the one
/// underlying a fix.
const CO_LOCATED_RANGE: f64 = 1.0;

/// Read only queries the router makes against the navigation database.
///
/// "Nothing found" is `Ok(None)` or an empty list, `Err` is reserved for a
/// database that could not answer.
pub trait NavQuery {
    fn get_navaid_by_id(&self, id: i32) -> Result<Option<Arc<Navaid>>, NavDataError>;
    fn get_fix_by_id(&self, id: i32) -> Result<Option<Arc<Fix>>, NavDataError>;
    fn get_airport_by_id(&self, id: i32) -> Result<Option<Arc<Airport>>, NavDataError>;
    fn get_airway_by_id(&self, id: i32) -> Result<Option<Arc<Airway>>, NavDataError>;

    /// The VOR or NDB a fix sits on, if any.
    fn get_navaid_for_fix(&self, fix: &Fix) -> Result<Option<Arc<Navaid>>, NavDataError>;

    fn get_navaids_in(&self, bounds: &Bounds) -> Result<Vec<Arc<Navaid>>, NavDataError>;
    fn get_fixes_in(&self, bounds: &Bounds) -> Result<Vec<Arc<Fix>>, NavDataError>;

    /// Segments with at least one end inside `bounds`.
    fn get_airways_in(&self, bounds: &Bounds) -> Result<Vec<Arc<Airway>>, NavDataError>;

    /// Segments joined to the fix at either end.
    fn get_airways_from(&self, fix_id: i32) -> Result<Vec<Arc<Airway>>, NavDataError>;
}

/// In memory navigation database. Results always come back ordered by id.
#[derive(Default)]
pub struct Earth {
    airports: BTreeMap<i32, Arc<Airport>>,
    navaids: BTreeMap<i32, Arc<Navaid>>,
    fixes: BTreeMap<i32, Arc<Fix>>,
    airways: BTreeMap<i32, Arc<Airway>>,
    airways_by_fix: BTreeMap<i32, Vec<i32>>,
}

impl Earth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_airports(&mut self, airports: Vec<Airport>) {
        self.airports = airports.into_iter().map(|a| (a.get_id(), Arc::new(a))).collect();
        info!("{} airports loaded", self.airports.len());
    }

    pub fn set_navaids(&mut self, navaids: Vec<Navaid>) {
        self.navaids = navaids.into_iter().map(|n| (n.get_id(), Arc::new(n))).collect();
        info!("{} navaids loaded", self.navaids.len());
    }

    pub fn set_fixes(&mut self, fixes: Vec<Fix>) {
        self.fixes = fixes.into_iter().map(|f| (f.get_id(), Arc::new(f))).collect();
        info!("{} fixes loaded", self.fixes.len());
    }

    pub fn set_airways(&mut self, airways: Vec<Airway>) {
        self.airways_by_fix.clear();
        for airway in &airways {
            self.airways_by_fix.entry(airway.get_from_fix_id()).or_default().push(airway.get_id());
            if airway.get_to_fix_id() != airway.get_from_fix_id() {
                self.airways_by_fix.entry(airway.get_to_fix_id()).or_default().push(airway.get_id());
            }
        }
        self.airways = airways.into_iter().map(|a| (a.get_id(), Arc::new(a))).collect();
        info!("{} airway segments loaded", self.airways.len());
    }

    pub fn get_airport_by_ident(&self, ident: &str) -> Option<Arc<Airport>> {
        let filter = IdFilter::new(ident);
        self.airports.values().find(|a| filter.filter(&***a)).cloned()
    }

    /// Navaids with this ident, nearest to `near` first.
    pub fn find_navaids(&self, ident: &str, near: &Coordinate) -> Vec<Arc<Navaid>> {
        let filter = IdFilter::new(ident);
        let mut found: Vec<Arc<Navaid>> = self
            .navaids
            .values()
            .filter(|n| filter.filter(&***n))
            .cloned()
            .collect();
        found.sort_by(|a, b| near.distance_to(a.get_loc()).total_cmp(&near.distance_to(b.get_loc())));
        found
    }

    fn within<T: Location>(items: &BTreeMap<i32, Arc<T>>, bounds: &Bounds) -> Vec<Arc<T>> {
        let filter = BoundsFilter::new(*bounds);
        items.values().filter(|i| filter.filter(&***i)).cloned().collect()
    }
}

impl NavQuery for Earth {
    fn get_navaid_by_id(&self, id: i32) -> Result<Option<Arc<Navaid>>, NavDataError> {
        Ok(self.navaids.get(&id).cloned())
    }

    fn get_fix_by_id(&self, id: i32) -> Result<Option<Arc<Fix>>, NavDataError> {
        Ok(self.fixes.get(&id).cloned())
    }

    fn get_airport_by_id(&self, id: i32) -> Result<Option<Arc<Airport>>, NavDataError> {
        Ok(self.airports.get(&id).cloned())
    }

    fn get_airway_by_id(&self, id: i32) -> Result<Option<Arc<Airway>>, NavDataError> {
        Ok(self.airways.get(&id).cloned())
    }

    fn get_navaid_for_fix(&self, fix: &Fix) -> Result<Option<Arc<Navaid>>, NavDataError> {
        let wanted_vor = match fix.get_fix_type() {
            FixType::Vor => true,
            FixType::Ndb => false,
            FixType::Waypoint => return Ok(None),
        };

        if let Some(id) = fix.get_navaid_id() {
            return match self.navaids.get(&id) {
                Some(navaid) => Ok(Some(navaid.clone())),
                None => Err(NavDataError::Corrupt { table: "navaid", id }),
            };
        }

        // No explicit link so look for a navaid of the right kind and ident on top of the fix
        let mut filter = CombinedFilter::new();
        filter.add(Box::new(IdFilter::new(fix.get_ident())));
        filter.add(Box::new(RangeFilter::around(fix.get_loc(), CO_LOCATED_RANGE)));
        Ok(self
            .navaids
            .values()
            .find(|n| n.get_type().is_vor() == wanted_vor && filter.filter(&***n))
            .cloned())
    }

    fn get_navaids_in(&self, bounds: &Bounds) -> Result<Vec<Arc<Navaid>>, NavDataError> {
        Ok(Self::within(&self.navaids, bounds))
    }

    fn get_fixes_in(&self, bounds: &Bounds) -> Result<Vec<Arc<Fix>>, NavDataError> {
        Ok(Self::within(&self.fixes, bounds))
    }

    fn get_airways_in(&self, bounds: &Bounds) -> Result<Vec<Arc<Airway>>, NavDataError> {
        let inside = |id: i32| {
            self.fixes
                .get(&id)
                .map(|f| bounds.contains(f.get_loc()))
                .unwrap_or(false)
        };
        Ok(self
            .airways
            .values()
            .filter(|a| inside(a.get_from_fix_id()) || inside(a.get_to_fix_id()))
            .cloned()
            .collect())
    }

    fn get_airways_from(&self, fix_id: i32) -> Result<Vec<Arc<Airway>>, NavDataError> {
        Ok(self
            .airways_by_fix
            .get(&fix_id)
            .map(|ids| ids.iter().filter_map(|id| self.airways.get(id).cloned()).collect())
            .unwrap_or_default())
    }
}
