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

use chrono::{DateTime, Utc};

/// One segment of a named airway or track, joining two fixes.
#[derive(Debug, Clone, PartialEq)]
pub struct Airway {
    id: i32,
    name: String,
    airway_type: AirwayType,
    direction: AirwayDirection,
    fragment: Option<i32>,
    from_fix_id: i32,
    to_fix_id: i32,
    min_altitude: i32,
    max_altitude: i32,
    valid: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AirwayType {
    Victor,
    Jet,
    Both,
    Track,
}

/// Which way a segment may be flown, relative to `from -> to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AirwayDirection {
    Both,
    Forward,
    Backward,
}

impl Airway {
    pub fn new(
        id: i32,
        name: String,
        airway_type: AirwayType,
        from_fix_id: i32,
        to_fix_id: i32,
        min_altitude: i32,
        max_altitude: i32,
    ) -> Self {
        Self {
            id,
            name,
            airway_type,
            direction: AirwayDirection::Both,
            fragment: None,
            from_fix_id,
            to_fix_id,
            min_altitude,
            max_altitude,
            valid: None,
        }
    }

    pub fn with_direction(mut self, direction: AirwayDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_fragment(mut self, fragment: i32) -> Self {
        self.fragment = Some(fragment);
        self
    }

    pub fn with_validity(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.valid = Some((from, to));
        self
    }

    pub fn get_id(&self) -> i32 {
        self.id
    }

    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    pub fn get_type(&self) -> AirwayType {
        self.airway_type
    }

    pub fn get_direction(&self) -> AirwayDirection {
        self.direction
    }

    pub fn get_fragment(&self) -> Option<i32> {
        self.fragment
    }

    pub fn get_from_fix_id(&self) -> i32 {
        self.from_fix_id
    }

    pub fn get_to_fix_id(&self) -> i32 {
        self.to_fix_id
    }

    pub fn get_min_altitude(&self) -> i32 {
        self.min_altitude
    }

    /// Zero when the segment has no upper limit.
    pub fn get_max_altitude(&self) -> i32 {
        self.max_altitude
    }

    /// Segments without a validity window are always valid.
    pub fn is_valid_at(&self, time: &DateTime<Utc>) -> bool {
        match &self.valid {
            Some((from, to)) => from <= time && time <= to,
            None => true,
        }
    }
}
