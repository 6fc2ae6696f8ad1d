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

/// Latitude/longitude rectangle used for spatial queries.
///
/// Rectangles never wrap the antimeridian. A corridor that would cross it is
/// widened to span every longitude instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    north: f64,
    south: f64,
    west: f64,
    east: f64,
}

impl Bounds {
    pub fn new(north: f64, south: f64, west: f64, east: f64) -> Self {
        Self {
            north: north.min(90.0),
            south: south.max(-90.0),
            west: west.max(-180.0),
            east: east.min(180.0),
        }
    }

    /// The rectangle enclosing `from` and `to` grown by `margin` nautical
    /// miles on every side.
    pub fn around(from: &Coordinate, to: &Coordinate, margin: f64) -> Self {
        let lat_margin = margin / 60.0;
        let north = from.get_latitude().max(to.get_latitude()) + lat_margin;
        let south = from.get_latitude().min(to.get_latitude()) - lat_margin;

        // Longitude degrees shrink towards the poles so use the widest latitude
        let x = north.abs().max(south.abs()).min(90.0).to_radians().cos();
        let crosses_antimeridian = (from.get_longitude() - to.get_longitude()).abs() > 180.0;
        if x < 0.01 || crosses_antimeridian {
            return Self::new(north, south, -180.0, 180.0);
        }

        let lon_margin = margin / (60.0 * x);
        let west = from.get_longitude().min(to.get_longitude()) - lon_margin;
        let east = from.get_longitude().max(to.get_longitude()) + lon_margin;
        if west < -180.0 || east > 180.0 {
            return Self::new(north, south, -180.0, 180.0);
        }
        Self::new(north, south, west, east)
    }

    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        let lat = coordinate.get_latitude();
        let lon = coordinate.get_longitude();
        lat <= self.north && lat >= self.south && lon >= self.west && lon <= self.east
    }

    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        other.north <= self.north
            && other.south >= self.south
            && other.west >= self.west
            && other.east <= self.east
    }

    pub fn get_north(&self) -> f64 {
        self.north
    }

    pub fn get_south(&self) -> f64 {
        self.south
    }

    pub fn get_west(&self) -> f64 {
        self.west
    }

    pub fn get_east(&self) -> f64 {
        self.east
    }
}
