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

use std::fmt;
use std::ops::BitOr;

use crate::model::airway::AirwayType;
use crate::model::navaid::NavaidType;

pub mod assembly;
pub mod config;
pub mod controller;
pub mod finder;
pub mod graph;
pub mod network_airway;
pub mod network_radio;

pub use config::RouteConfig;

/// Which navaid or airway kinds a network is built from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RouteMode(u8);

impl RouteMode {
    pub const NONE: RouteMode = RouteMode(0);
    pub const VOR: RouteMode = RouteMode(1);
    pub const VORDME: RouteMode = RouteMode(1 << 1);
    pub const DME: RouteMode = RouteMode(1 << 2);
    pub const NDB: RouteMode = RouteMode(1 << 3);
    pub const VICTOR: RouteMode = RouteMode(1 << 4);
    pub const JET: RouteMode = RouteMode(1 << 5);
    pub const TRACK: RouteMode = RouteMode(1 << 6);

    pub fn contains(&self, other: RouteMode) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub fn accepts_navaid(&self, navaid_type: NavaidType) -> bool {
        self.contains(match navaid_type {
            NavaidType::Vor => RouteMode::VOR,
            NavaidType::VorDme => RouteMode::VORDME,
            NavaidType::Dme => RouteMode::DME,
            NavaidType::Ndb => RouteMode::NDB,
        })
    }

    /// Segments usable at both levels go into both low and high networks.
    pub fn accepts_airway(&self, airway_type: AirwayType) -> bool {
        match airway_type {
            AirwayType::Victor => self.contains(RouteMode::VICTOR),
            AirwayType::Jet => self.contains(RouteMode::JET),
            AirwayType::Both => self.contains(RouteMode::VICTOR) || self.contains(RouteMode::JET),
            AirwayType::Track => self.contains(RouteMode::TRACK),
        }
    }
}

impl BitOr for RouteMode {
    type Output = RouteMode;

    fn bitor(self, rhs: RouteMode) -> RouteMode {
        RouteMode(self.0 | rhs.0)
    }
}

impl fmt::Debug for RouteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (RouteMode::VOR, "VOR"),
            (RouteMode::VORDME, "VORDME"),
            (RouteMode::DME, "DME"),
            (RouteMode::NDB, "NDB"),
            (RouteMode::VICTOR, "VICTOR"),
            (RouteMode::JET, "JET"),
            (RouteMode::TRACK, "TRACK"),
        ];
        let set: Vec<&str> = names
            .iter()
            .filter(|(mode, _)| self.contains(*mode))
            .map(|(_, name)| *name)
            .collect();
        if set.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", set.join("|"))
        }
    }
}
