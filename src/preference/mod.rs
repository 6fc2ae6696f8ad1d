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

use std::{
    str::FromStr,
    sync::{Arc, RwLock},
};

use lazy_static::lazy_static;
use log::warn;
use preferences::{AppInfo, Preferences, PreferencesMap};

const PREFS_PATH: &str = "router";
const APP_INFO: AppInfo = AppInfo {
    name: "kelpie-flight-planner",
    author: "shartrec.com",
};

// Preference constants
pub const CORRIDOR_MARGIN: &str = "Autorouter.corridorMargin";
pub const ENTRY_RADIUS: &str = "Autorouter.entryRadius";
pub const MAX_ENTRY_NODES: &str = "Autorouter.maxEntryNodes";
pub const MAX_RADIO_LEG: &str = "Autorouter.maxRadioLeg";
pub const VOR_PREFERED: &str = "Autoplanner.vor_prefered";
pub const NDB_COST_FACTOR: &str = "Autorouter.ndbCostFactor";
pub const USE_TRACKS: &str = "Autorouter.useTracks";

lazy_static! {
    static ref MANAGER: PreferenceManager = PreferenceManager {
        preferences: {
            match PreferencesMap::<String>::load(&APP_INFO, PREFS_PATH) {
                Ok(map) => Arc::new(RwLock::new(map)),
                Err(e) => {
                    warn!("Error opening preferences {}", e);
                    Arc::new(RwLock::new(PreferencesMap::new()))
                }
            }
        },
        path: PREFS_PATH,
    };
}

pub struct PreferenceManager {
    preferences: Arc<RwLock<PreferencesMap>>,
    path: &'static str,
}

impl PreferenceManager {
    /// A store that starts empty and saves under `path`.
    pub fn with_path(path: &'static str) -> Self {
        Self {
            preferences: Arc::new(RwLock::new(PreferencesMap::new())),
            path,
        }
    }

    pub fn get<T: FromStr>(&self, key: &str) -> Option<T> {
        let prefs = self.preferences.read().ok()?;
        prefs.get(key).and_then(|s| s.parse::<T>().ok())
    }

    pub fn put<T: ToString>(&self, key: &str, value: T) {
        if let Ok(mut prefs) = self.preferences.write() {
            prefs.insert(key.to_string(), value.to_string());
        }
        self.store();
    }

    pub fn remove(&self, key: &str) {
        if let Ok(mut prefs) = self.preferences.write() {
            prefs.remove(key);
        }
        self.store();
    }

    pub fn clear(&self) {
        if let Ok(mut prefs) = self.preferences.write() {
            prefs.clear();
        }
        self.store();
    }

    fn store(&self) {
        if let Ok(prefs) = self.preferences.read() {
            if let Err(e) = prefs.save(&APP_INFO, self.path) {
                warn!("Unable to save preferences {}", e);
            }
        }
    }
}

pub fn manager() -> &'static PreferenceManager {
    &MANAGER
}

#[cfg(test)]
mod tests {
    use crate::preference;

    #[test]
    fn test_save_restore() {
        let manager = preference::PreferenceManager::with_path("kelpie-router-unit-test");

        manager.put("Test_KEY 1", "First");
        manager.put("Test_KEY 2", 1_i32);
        manager.put("Test_KEY 3", 24.66_f64);

        assert_eq!(
            manager.get::<String>("Test_KEY 1"),
            Some("First".to_string())
        );
        assert_eq!(manager.get::<i32>("Test_KEY 2"), Some(1));
        assert_eq!(manager.get::<f64>("Test_KEY 3"), Some(24.66));
        assert_eq!(manager.get::<i32>("Test_KEY 1"), None);

        manager.remove("Test_KEY 2");
        assert_eq!(manager.get::<i32>("Test_KEY 2"), None);
        manager.clear();
        assert_eq!(manager.get::<String>("Test_KEY 1"), None);
    }
}
