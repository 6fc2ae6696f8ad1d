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

use log::warn;

use crate::earth::NavQuery;
use crate::error::NavDataError;
use crate::model::fix::FixType;
use crate::model::plan::{FlightplanEntry, FlightplanType};
use crate::router::finder::RouteEntry;
use crate::router::graph::NodeType;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssembledRoute {
    pub entries: Vec<FlightplanEntry>,
    pub min_altitude: i32,
}

pub struct RouteAssembler<'a> {
    query: &'a dyn NavQuery,
    resolve_waypoints: bool,
}

impl<'a> RouteAssembler<'a> {
    /// With `resolve_waypoints` set, airway fixes sitting on a VOR or NDB
    /// are replaced by the navaid itself.
    pub fn new(query: &'a dyn NavQuery, resolve_waypoints: bool) -> Self {
        Self {
            query,
            resolve_waypoints,
        }
    }

    pub fn build_entries(&self, route: &[RouteEntry]) -> Result<AssembledRoute, NavDataError> {
        let mut assembled = AssembledRoute::default();
        for route_entry in route {
            let Some(mut entry) = self.resolve(route_entry)? else {
                warn!(
                    "Route {:?} {} not found in navigation data, skipped",
                    route_entry.node_type, route_entry.id
                );
                continue;
            };

            if let Some(airway_id) = route_entry.airway_id {
                match self.query.get_airway_by_id(airway_id)? {
                    Some(airway) => {
                        entry.set_airway(Some(airway.get_name().to_string()));
                        assembled.min_altitude = assembled.min_altitude.max(airway.get_min_altitude());
                    }
                    None => warn!("Airway {} not found in navigation data", airway_id),
                }
            }
            assembled.entries.push(entry);
        }
        Ok(assembled)
    }

    fn resolve(&self, route_entry: &RouteEntry) -> Result<Option<FlightplanEntry>, NavDataError> {
        let id = route_entry.id;
        match route_entry.node_type {
            NodeType::Vor | NodeType::VorDme | NodeType::Dme | NodeType::Ndb => {
                Ok(self.query.get_navaid_by_id(id)?.map(|n| FlightplanEntry::from_navaid(&n)))
            }
            NodeType::Airport => Ok(self.query.get_airport_by_id(id)?.map(|a| FlightplanEntry::from_airport(&a))),
            NodeType::Waypoint => {
                let Some(fix) = self.query.get_fix_by_id(id)? else {
                    return Ok(None);
                };
                if self.resolve_waypoints && fix.get_fix_type() != FixType::Waypoint {
                    if let Some(navaid) = self.query.get_navaid_for_fix(&fix)? {
                        return Ok(Some(FlightplanEntry::from_navaid(&navaid)));
                    }
                }
                Ok(Some(FlightplanEntry::from_fix(&fix)))
            }
            NodeType::Departure | NodeType::Destination => Ok(None),
        }
    }
}

/// Lowest cruising altitude at or above `min_altitude` that follows the
/// hemispheric rule for a flight on `bearing` degrees. Eastbound flights
/// (0 to under 180) fly odd thousands, westbound even. VFR adds 500ft.
pub fn cruise_altitude(min_altitude: i32, bearing: f64, plan_type: FlightplanType) -> i32 {
    let alt = f64::from(min_altitude);
    let eastbound = bearing.rem_euclid(360.0) < 180.0;
    let rounded = if eastbound {
        ((alt - 1000.0) / 2000.0).ceil() * 2000.0 + 1000.0
    } else {
        (alt / 2000.0).ceil() * 2000.0
    };
    let mut cruise = rounded as i32;
    if plan_type == FlightplanType::Vfr {
        cruise += 500;
    }
    cruise
}

#[cfg(test)]
mod tests {
    use crate::earth::Earth;
    use crate::model::airport::Airport;
    use crate::model::airway::AirwayType;
    use crate::model::fix::FixType;
    use crate::model::navaid::NavaidType;
    use crate::model::plan::{FlightplanType, WaypointType};
    use crate::model::test_utils::tests::{make_airway, make_fix, make_fix_on, make_navaid};
    use crate::router::finder::RouteEntry;
    use crate::router::graph::NodeType;

    use super::{cruise_altitude, RouteAssembler};

    fn make_earth() -> Earth {
        let mut earth = Earth::new();
        earth.set_navaids(vec![
            make_navaid(1, "BOR", NavaidType::VorDme, 40.0, -75.0, 100),
            make_navaid(2, "LK", NavaidType::Ndb, 40.5, -74.0, 50),
        ]);
        earth.set_fixes(vec![
            make_fix_on(10, "BOR", 40.0, -75.0, FixType::Vor, Some(1)),
            make_fix(11, "MERIT", 40.2, -74.5),
            make_fix_on(12, "LK", 40.5, -74.0, FixType::Ndb, None),
        ]);
        earth.set_airports(vec![Airport::new(20, "KJFK".to_string(), "Kennedy".to_string(), 40.6, -73.8, 13)]);
        earth.set_airways(vec![
            make_airway(100, "V16", AirwayType::Victor, 10, 11, 3000),
            make_airway(101, "J80", AirwayType::Jet, 11, 12, 18000),
        ]);
        earth
    }

    fn waypoint(id: i32, airway_id: Option<i32>) -> RouteEntry {
        RouteEntry {
            id,
            node_type: NodeType::Waypoint,
            airway_id,
        }
    }

    #[test]
    fn test_hemispheric_rule() {
        assert_eq!(cruise_altitude(17000, 90.0, FlightplanType::Ifr), 17000);
        assert_eq!(cruise_altitude(17000, 270.0, FlightplanType::Ifr), 18000);
        assert_eq!(cruise_altitude(17000, 90.0, FlightplanType::Vfr), 17500);
        assert_eq!(cruise_altitude(17000, 270.0, FlightplanType::Vfr), 18500);
        assert_eq!(cruise_altitude(4200, 0.0, FlightplanType::Ifr), 5000);
        assert_eq!(cruise_altitude(4200, 180.0, FlightplanType::Ifr), 6000);
        assert_eq!(cruise_altitude(18000, 359.9, FlightplanType::Ifr), 18000);
        assert_eq!(cruise_altitude(18000, -90.0, FlightplanType::Ifr), 18000);
        assert_eq!(cruise_altitude(18000, 450.0, FlightplanType::Ifr), 19000);
    }

    #[test]
    fn test_airway_entries_resolved() {
        let earth = make_earth();
        let assembler = RouteAssembler::new(&earth, true);
        let route = vec![waypoint(10, None), waypoint(11, Some(100)), waypoint(12, Some(101))];
        let assembled = assembler.build_entries(&route).unwrap();

        assert_eq!(assembled.min_altitude, 18000);
        let entries = &assembled.entries;
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].get_ident(), "BOR");
        assert_eq!(entries[0].get_waypoint_type(), WaypointType::Vor);
        assert_eq!(entries[0].get_airway(), None);
        assert_eq!(entries[1].get_waypoint_type(), WaypointType::Intersection);
        assert_eq!(entries[1].get_airway(), Some("V16"));
        assert_eq!(entries[2].get_waypoint_type(), WaypointType::Ndb);
        assert_eq!(entries[2].get_airway(), Some("J80"));
    }

    #[test]
    fn test_waypoints_kept_without_resolution() {
        let earth = make_earth();
        let assembler = RouteAssembler::new(&earth, false);
        let assembled = assembler.build_entries(&[waypoint(10, None)]).unwrap();
        assert_eq!(assembled.entries[0].get_waypoint_type(), WaypointType::Intersection);
        assert_eq!(assembled.min_altitude, 0);
    }

    #[test]
    fn test_radio_and_airport_entries() {
        let earth = make_earth();
        let assembler = RouteAssembler::new(&earth, false);
        let route = vec![
            RouteEntry {
                id: 1,
                node_type: NodeType::VorDme,
                airway_id: None,
            },
            RouteEntry {
                id: 2,
                node_type: NodeType::Ndb,
                airway_id: None,
            },
            RouteEntry {
                id: 20,
                node_type: NodeType::Airport,
                airway_id: None,
            },
        ];
        let entries = assembler.build_entries(&route).unwrap().entries;
        let types: Vec<WaypointType> = entries.iter().map(|e| e.get_waypoint_type()).collect();
        assert_eq!(types, vec![WaypointType::Vor, WaypointType::Ndb, WaypointType::Airport]);
        assert_eq!(entries[0].get_region(), "K1");
    }

    #[test]
    fn test_unknown_ids_skipped() {
        let earth = make_earth();
        let assembler = RouteAssembler::new(&earth, true);
        let route = vec![waypoint(10, None), waypoint(99, Some(100)), waypoint(11, Some(999))];
        let assembled = assembler.build_entries(&route).unwrap();
        assert_eq!(assembled.entries.len(), 2);
        assert_eq!(assembled.entries[1].get_ident(), "MERIT");
        assert_eq!(assembled.entries[1].get_airway(), None);
        assert_eq!(assembled.min_altitude, 0);
    }
}
