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

#[cfg(test)]
pub mod tests {
    use crate::model::airport::Airport;
    use crate::model::airway::{Airway, AirwayType};
    use crate::model::fix::{Fix, FixType};
    use crate::model::navaid::{Navaid, NavaidType};
    use crate::model::plan::{Flightplan, FlightplanEntry};

    pub fn make_airport_at(ident: &str, lat: f64, long: f64) -> Airport {
        Airport::new(0, ident.to_string(), format!("{} airport", ident), lat, long, 100)
    }

    pub fn make_navaid(id: i32, ident: &str, type_: NavaidType, lat: f64, long: f64, range: i32) -> Navaid {
        Navaid::new(
            id,
            ident.to_string(),
            type_,
            lat,
            long,
            113.1,
            range,
            "K1".to_string(),
            format!("{} navaid", ident),
        )
    }

    pub fn make_fix(id: i32, ident: &str, lat: f64, long: f64) -> Fix {
        Fix::new(id, ident.to_string(), "K1".to_string(), lat, long)
    }

    pub fn make_fix_on(id: i32, ident: &str, lat: f64, long: f64, fix_type: FixType, navaid_id: Option<i32>) -> Fix {
        make_fix(id, ident, lat, long).on_navaid(fix_type, navaid_id)
    }

    pub fn make_airway(id: i32, name: &str, airway_type: AirwayType, from: i32, to: i32, min_alt: i32) -> Airway {
        Airway::new(id, name.to_string(), airway_type, from, to, min_alt, 0)
    }

    pub fn make_flightplan(from: &Airport, to: &Airport) -> Flightplan {
        let mut plan = Flightplan::new();
        plan.add_entry(FlightplanEntry::from_airport(from));
        plan.add_entry(FlightplanEntry::from_airport(to));
        plan
    }
}
