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

use serde::{Deserialize, Serialize};

use crate::earth::coordinate::Coordinate;
use crate::model::airport::Airport;
use crate::model::fix::Fix;
use crate::model::location::Location;
use crate::model::navaid::Navaid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaypointType {
    Airport,
    Vor,
    Ndb,
    Intersection,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlightplanType {
    #[default]
    Ifr,
    Vfr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RouteType {
    #[default]
    Direct,
    Vor,
    LowAlt,
    HighAlt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightplanEntry {
    ident: String,
    region: String,
    position: Coordinate,
    waypoint_type: WaypointType,
    airway: Option<String>,
}

impl FlightplanEntry {
    pub fn new(ident: &str, region: &str, position: Coordinate, waypoint_type: WaypointType) -> Self {
        Self {
            ident: ident.to_string(),
            region: region.to_string(),
            position,
            waypoint_type,
            airway: None,
        }
    }

    pub fn from_airport(airport: &Airport) -> Self {
        Self::new(airport.get_ident(), "", *airport.get_loc(), WaypointType::Airport)
    }

    pub fn from_navaid(navaid: &Navaid) -> Self {
        let waypoint_type = if navaid.get_type().is_vor() {
            WaypointType::Vor
        } else {
            WaypointType::Ndb
        };
        Self::new(navaid.get_ident(), navaid.get_region(), *navaid.get_loc(), waypoint_type)
    }

    pub fn from_fix(fix: &Fix) -> Self {
        Self::new(fix.get_ident(), fix.get_region(), *fix.get_loc(), WaypointType::Intersection)
    }

    pub fn user(position: Coordinate) -> Self {
        Self::new("", "", position, WaypointType::User)
    }

    pub fn get_ident(&self) -> &str {
        self.ident.as_str()
    }

    pub fn get_region(&self) -> &str {
        self.region.as_str()
    }

    pub fn get_position(&self) -> &Coordinate {
        &self.position
    }

    pub fn get_waypoint_type(&self) -> WaypointType {
        self.waypoint_type
    }

    /// Name of the airway flown to reach this entry, if any.
    pub fn get_airway(&self) -> Option<&str> {
        self.airway.as_deref()
    }

    pub fn set_airway(&mut self, airway: Option<String>) {
        self.airway = airway;
    }
}

/// Ordered list of entries, the first and last usually being the departure
/// and destination airports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flightplan {
    entries: Vec<FlightplanEntry>,
    cruising_altitude: i32,
    plan_type: FlightplanType,
    route_type: RouteType,
}

impl Flightplan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, entry: FlightplanEntry) {
        self.entries.push(entry);
    }

    pub fn get_entries(&self) -> &[FlightplanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn departure_pos(&self) -> Option<&Coordinate> {
        self.entries.first().map(|e| e.get_position())
    }

    pub fn destination_pos(&self) -> Option<&Coordinate> {
        self.entries.last().map(|e| e.get_position())
    }

    pub fn get_cruising_altitude(&self) -> i32 {
        self.cruising_altitude
    }

    pub fn set_cruising_altitude(&mut self, altitude: i32) {
        self.cruising_altitude = altitude;
    }

    pub fn get_plan_type(&self) -> FlightplanType {
        self.plan_type
    }

    pub fn set_plan_type(&mut self, plan_type: FlightplanType) {
        self.plan_type = plan_type;
    }

    pub fn get_route_type(&self) -> RouteType {
        self.route_type
    }

    pub fn set_route_type(&mut self, route_type: RouteType) {
        self.route_type = route_type;
    }

    /// Replace everything between the first and last entry. Plans with fewer
    /// than two entries are left alone.
    pub fn replace_interior(&mut self, interior: Vec<FlightplanEntry>) {
        if self.entries.len() < 2 {
            return;
        }
        let last = self.entries.len() - 1;
        self.entries.splice(1..last, interior);
    }

    pub fn clear_interior(&mut self) {
        self.replace_interior(Vec::new());
    }

    /// Reverse the plan. Each entry keeps the name of the airway used to
    /// reach it, so the names move one place along with the legs.
    pub fn reverse(&mut self) {
        let len = self.entries.len();
        let airways: Vec<Option<String>> = self.entries.iter_mut().map(|e| e.airway.take()).collect();
        self.entries.reverse();
        for (j, entry) in self.entries.iter_mut().enumerate() {
            if j > 0 {
                entry.airway = airways[len - j].clone();
            }
        }
    }

    /// Sum of the great circle legs in nautical miles.
    pub fn total_distance(&self) -> f64 {
        self.entries
            .windows(2)
            .map(|w| w[0].get_position().distance_to(w[1].get_position()))
            .sum()
    }
}
