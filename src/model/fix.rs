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

use super::location::Location;
use crate::earth::coordinate::Coordinate;

/// A named waypoint. Airway segments always join fixes, fixes that sit on a
/// VOR or NDB carry that navaid's type and, when known, its id.
#[derive(Debug, Clone, PartialEq)]
pub struct Fix {
    id: i32,
    ident: String,
    region: String,
    coordinate: Coordinate,
    fix_type: FixType,
    navaid_id: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixType {
    Waypoint,
    Vor,
    Ndb,
}

impl Fix {
    pub fn new(id: i32, ident: String, region: String, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            ident,
            region,
            coordinate: Coordinate::new(latitude, longitude),
            fix_type: FixType::Waypoint,
            navaid_id: None,
        }
    }

    pub fn on_navaid(mut self, fix_type: FixType, navaid_id: Option<i32>) -> Self {
        self.fix_type = fix_type;
        self.navaid_id = navaid_id;
        self
    }

    pub fn get_fix_type(&self) -> FixType {
        self.fix_type
    }

    pub fn get_navaid_id(&self) -> Option<i32> {
        self.navaid_id
    }

    pub fn get_region(&self) -> &str {
        self.region.as_str()
    }
}

impl Location for Fix {
    fn get_id(&self) -> i32 {
        self.id
    }

    fn get_ident(&self) -> &str {
        self.ident.as_str()
    }

    fn get_loc(&self) -> &Coordinate {
        &self.coordinate
    }
}
