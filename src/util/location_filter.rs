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

// Filters for deciding whether a location is near, inside or named like something

use crate::earth::bounds::Bounds;
use crate::earth::coordinate::Coordinate;
use crate::model::location::Location;

pub trait Filter {
    fn filter(&self, location: &dyn Location) -> bool;
}

pub struct RangeFilter {
    this: Coordinate,
    range: f64,
    rough_lat_sep: f64,
    rough_long_sep: f64,
}

impl RangeFilter {
    pub fn new(lat: f64, lon: f64, range: f64) -> Self {
        // We do a little optimization here rather than calculating
        // all distances accurately; we make a quick rough calculation to exclude many coordinates
        let rough_lat_sep = range / 60.0;
        let x = lat.to_radians().cos();
        let rough_long_sep = if x < 0.01 { 181.0 } else { range / (60.0 * x) };

        Self {
            this: Coordinate::new(lat, lon),
            range,
            rough_lat_sep,
            rough_long_sep,
        }
    }

    pub fn around(coordinate: &Coordinate, range: f64) -> Self {
        Self::new(coordinate.get_latitude(), coordinate.get_longitude(), range)
    }
}

impl Filter for RangeFilter {
    // returns true if the coordinate passes the filter
    fn filter(&self, location: &dyn Location) -> bool {
        let other = location.get_loc();
        let mut long_sep = (self.this.get_longitude() - other.get_longitude()).abs();
        if long_sep > 180.0 {
            long_sep = 360.0 - long_sep;
        }
        if ((self.this.get_latitude() - other.get_latitude()).abs() < self.rough_lat_sep)
            & (long_sep < self.rough_long_sep)
        {
            self.this.distance_to(other) < self.range
        } else {
            false
        }
    }
}

pub struct BoundsFilter {
    bounds: Bounds,
}

impl BoundsFilter {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }
}

impl Filter for BoundsFilter {
    fn filter(&self, location: &dyn Location) -> bool {
        self.bounds.contains(location.get_loc())
    }
}

pub struct IdFilter {
    term: String,
}

impl IdFilter {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_string(),
        }
    }
}

impl Filter for IdFilter {
    fn filter(&self, location: &dyn Location) -> bool {
        location.get_ident().eq_ignore_ascii_case(&self.term)
    }
}

pub struct CombinedFilter {
    filters: Vec<Box<dyn Filter>>,
}

impl CombinedFilter {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    pub fn add(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }
}

impl Default for CombinedFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for CombinedFilter {
    fn filter(&self, location: &dyn Location) -> bool {
        self.filters.iter().all(|f| f.filter(location))
    }
}

#[cfg(test)]
mod tests {
    use crate::earth::bounds::Bounds;
    use crate::model::test_utils::tests::make_fix;

    use super::{BoundsFilter, CombinedFilter, Filter, IdFilter, RangeFilter};

    #[test]
    fn test_range_filter() {
        let filter = RangeFilter::new(-34.0, 151.0, 65.0);
        assert!(filter.filter(&make_fix(1, "NEAR", -35.0, 151.0)));
        assert!(!filter.filter(&make_fix(2, "FAR", -36.0, 151.0)));
        assert!(!filter.filter(&make_fix(3, "WEST", -34.0, 149.0)));
    }

    #[test]
    fn test_range_filter_across_antimeridian() {
        let filter = RangeFilter::new(0.0, 179.9, 30.0);
        assert!(filter.filter(&make_fix(1, "OVER", 0.0, -179.9)));
    }

    #[test]
    fn test_combined_filter() {
        let mut filter = CombinedFilter::new();
        filter.add(Box::new(IdFilter::new("sy")));
        filter.add(Box::new(BoundsFilter::new(Bounds::new(-30.0, -40.0, 140.0, 155.0))));
        assert!(filter.filter(&make_fix(1, "SY", -34.0, 151.0)));
        assert!(!filter.filter(&make_fix(2, "SY", -20.0, 151.0)));
        assert!(!filter.filter(&make_fix(3, "ML", -34.0, 151.0)));
    }
}
