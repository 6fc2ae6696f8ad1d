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

use crate::earth::coordinate::Coordinate;

use super::location::Location;

#[derive(Debug, Clone, PartialEq)]
pub struct Navaid {
    id: i32,
    ident: String,
    type_: NavaidType,
    coordinate: Coordinate,
    name: String,
    region: String,
    freq: f64,
    range: i32,
}

impl Navaid {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        ident: String,
        type_: NavaidType,
        latitude: f64,
        longitude: f64,
        freq: f64,
        range: i32,
        region: String,
        name: String,
    ) -> Self {
        Self {
            id,
            ident,
            type_,
            coordinate: Coordinate::new(latitude, longitude),
            name,
            region,
            freq,
            range,
        }
    }

    pub fn get_type(&self) -> NavaidType {
        self.type_
    }

    pub fn get_freq(&self) -> f64 {
        self.freq
    }

    /// Reception range in nautical miles.
    pub fn get_range(&self) -> i32 {
        self.range
    }

    pub fn get_region(&self) -> &str {
        self.region.as_str()
    }

    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }
}

impl Location for Navaid {
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavaidType {
    Vor,
    VorDme,
    Dme,
    Ndb,
}

impl NavaidType {
    /// VOR, VOR-DME and stand alone DME all tune on the VOR receiver.
    pub fn is_vor(&self) -> bool {
        !matches!(self, NavaidType::Ndb)
    }
}
