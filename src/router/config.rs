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
use serde::{Deserialize, Serialize};

use crate::preference::{
    PreferenceManager, CORRIDOR_MARGIN, ENTRY_RADIUS, MAX_ENTRY_NODES, MAX_RADIO_LEG, NDB_COST_FACTOR,
    USE_TRACKS, VOR_PREFERED,
};

/// Distances are in nautical miles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub corridor_margin_nm: f64,
    pub entry_radius_nm: f64,
    pub max_entry_nodes: usize,
    pub max_radio_leg_nm: f64,
    pub vor_preferred: bool,
    /// Only applied when `vor_preferred` is set.
    pub ndb_cost_factor: f64,
    pub use_tracks: bool,
    pub track_time: Option<DateTime<Utc>>,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            corridor_margin_nm: 200.0,
            entry_radius_nm: 150.0,
            max_entry_nodes: 5,
            max_radio_leg_nm: 200.0,
            vor_preferred: true,
            ndb_cost_factor: 1.2,
            use_tracks: false,
            track_time: None,
        }
    }
}

impl RouteConfig {
    pub fn from_preferences(pref: &PreferenceManager) -> Self {
        let default = Self::default();
        Self {
            corridor_margin_nm: pref.get::<f64>(CORRIDOR_MARGIN).unwrap_or(default.corridor_margin_nm),
            entry_radius_nm: pref.get::<f64>(ENTRY_RADIUS).unwrap_or(default.entry_radius_nm),
            max_entry_nodes: pref.get::<usize>(MAX_ENTRY_NODES).unwrap_or(default.max_entry_nodes),
            max_radio_leg_nm: pref.get::<f64>(MAX_RADIO_LEG).unwrap_or(default.max_radio_leg_nm),
            vor_preferred: pref.get::<bool>(VOR_PREFERED).unwrap_or(default.vor_preferred),
            ndb_cost_factor: pref.get::<f64>(NDB_COST_FACTOR).unwrap_or(default.ndb_cost_factor),
            use_tracks: pref.get::<bool>(USE_TRACKS).unwrap_or(default.use_tracks),
            track_time: None,
        }
    }

    /// Never below one, so no edge costs less than its distance.
    pub fn effective_ndb_cost_factor(&self) -> f64 {
        if self.vor_preferred && self.ndb_cost_factor.is_finite() {
            self.ndb_cost_factor.max(1.0)
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::preference::{PreferenceManager, ENTRY_RADIUS, NDB_COST_FACTOR, USE_TRACKS, VOR_PREFERED};

    use super::RouteConfig;

    #[test]
    fn test_from_preferences() {
        let pref = PreferenceManager::with_path("kelpie-router-config-test");
        pref.put(ENTRY_RADIUS, 80.0);
        pref.put(USE_TRACKS, true);
        pref.put(NDB_COST_FACTOR, "not a number");

        let config = RouteConfig::from_preferences(&pref);
        assert_eq!(config.entry_radius_nm, 80.0);
        assert!(config.use_tracks);
        assert_eq!(config.ndb_cost_factor, RouteConfig::default().ndb_cost_factor);
        assert_eq!(config.corridor_margin_nm, 200.0);
        pref.clear();
    }

    #[test]
    fn test_ndb_cost_factor_clamped() {
        let mut config = RouteConfig {
            ndb_cost_factor: 0.5,
            ..RouteConfig::default()
        };
        assert_eq!(config.effective_ndb_cost_factor(), 1.0);
        config.ndb_cost_factor = 1.5;
        assert_eq!(config.effective_ndb_cost_factor(), 1.5);

        let pref = PreferenceManager::with_path("kelpie-router-config-test-2");
        pref.put(VOR_PREFERED, false);
        config = RouteConfig::from_preferences(&pref);
        assert_eq!(config.effective_ndb_cost_factor(), 1.0);
        pref.clear();
    }
}
