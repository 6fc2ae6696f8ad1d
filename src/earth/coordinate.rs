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

use std::f64::consts::PI;

use geo::{Bearing, Point, Rhumb};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    // Nautical miles
    pub const EARTH_RADIUS: f64 = 3441.85;

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// A position is usable for routing when both parts are finite and inside
    /// the normal latitude/longitude ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Initial great circle course to `l` in radians, 0 to 2π.
    pub fn bearing_to(&self, l: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = l.latitude.to_radians();
        let lon1 = self.longitude.to_radians();
        let lon2 = l.longitude.to_radians();

        let d = self.central_angle(l);
        if d == 0.0 {
            return 0.0;
        }

        let x = ((lat2.sin() - lat1.sin() * d.cos()) / (d.sin() * lat1.cos())).clamp(-1.0, 1.0);
        let mut heading = x.acos();

        if (lon2 - lon1).sin() < 0.0 {
            heading = 2.0 * PI - heading;
        }

        heading
    }

    pub fn bearing_to_deg(&self, l: &Coordinate) -> f64 {
        self.bearing_to(l).to_degrees()
    }

    /// Constant compass course to `l` in degrees, normalised to 0 to 360.
    pub fn rhumb_bearing_to_deg(&self, l: &Coordinate) -> f64 {
        let bearing = Rhumb::bearing(
            Point::new(self.longitude, self.latitude),
            Point::new(l.longitude, l.latitude),
        );
        (bearing % 360.0 + 360.0) % 360.0
    }

    pub fn coordinate_at(&self, distance: f64, heading: f64) -> Coordinate {
        let d = distance / Self::EARTH_RADIUS;
        let lat1 = self.latitude.to_radians();
        let lon1 = self.longitude.to_radians();
        let tc = heading.to_radians();
        let lat = (lat1.sin() * d.cos() + lat1.cos() * d.sin() * tc.cos()).asin();
        let d_lon = (tc.sin() * d.sin() * lat1.cos()).atan2(d.cos() - lat1.sin() * lat.sin());

        let lon = (lon1 + d_lon + PI).rem_euclid(2.0 * PI) - PI;

        Coordinate::new(lat.to_degrees(), lon.to_degrees())
    }

    /// Great circle distance in nautical miles.
    pub fn distance_to(&self, l: &Coordinate) -> f64 {
        Self::EARTH_RADIUS * self.central_angle(l).abs()
    }

    fn central_angle(&self, l: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = l.latitude.to_radians();
        let lon1 = self.longitude.to_radians();
        let lon2 = l.longitude.to_radians();
        let d_lon = lon1 - lon2;
        let d_lat = lat1 - lat2;

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * a.sqrt().atan2((1.0 - a).sqrt())
    }

    pub fn get_latitude(&self) -> f64 {
        self.latitude
    }

    pub fn get_longitude(&self) -> f64 {
        self.longitude
    }
}
