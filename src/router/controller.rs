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

use std::sync::Arc;

use log::info;

use crate::earth::NavQuery;
use crate::error::RouteError;
use crate::model::plan::{Flightplan, RouteType};
use crate::router::assembly::{cruise_altitude, RouteAssembler};
use crate::router::config::RouteConfig;
use crate::router::finder::{CancelToken, RouteFinder};
use crate::router::graph::RouteNetwork;
use crate::router::network_airway::AirwayNetwork;
use crate::router::network_radio::RadioNetwork;
use crate::router::RouteMode;

/// Cruise altitude above which a fixed altitude route counts as high level.
const HIGH_ALTITUDE_LIMIT: i32 = 20000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteCalculation {
    Direct,
    Radionav,
    LowAlt,
    HighAlt,
    SetAlt,
}

/// Owns the flight plan being edited and the cached route networks, and
/// rewrites the plan's interior from calculated routes.
pub struct RouteController {
    query: Arc<dyn NavQuery>,
    radio: RadioNetwork,
    airway: AirwayNetwork,
    config: RouteConfig,
    flightplan: Flightplan,
    cancel: Option<CancelToken>,
    distance: f64,
}

impl RouteController {
    pub fn new(query: Arc<dyn NavQuery>, config: RouteConfig) -> Self {
        Self {
            radio: RadioNetwork::new(query.clone(), config.clone()),
            airway: AirwayNetwork::new(query.clone(), config.clone()),
            query,
            config,
            flightplan: Flightplan::new(),
            cancel: None,
            distance: 0.0,
        }
    }

    pub fn get_flightplan(&self) -> &Flightplan {
        &self.flightplan
    }

    pub fn set_flightplan(&mut self, flightplan: Flightplan) {
        self.flightplan = flightplan;
    }

    pub fn get_config(&self) -> &RouteConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RouteConfig) {
        self.radio.set_config(config.clone());
        self.airway.set_config(config.clone());
        self.config = config;
    }

    /// Token checked by every following calculation.
    pub fn set_cancel_token(&mut self, cancel: Option<CancelToken>) {
        self.cancel = cancel;
    }

    pub fn route_distance_nm(&self) -> f64 {
        self.distance
    }

    pub fn calculate(&mut self, calculation: RouteCalculation) -> Result<bool, RouteError> {
        match calculation {
            RouteCalculation::Direct => self.calculate_direct(),
            RouteCalculation::Radionav => self.calculate_radionav(),
            RouteCalculation::LowAlt => self.calculate_low_alt(),
            RouteCalculation::HighAlt => self.calculate_high_alt(),
            RouteCalculation::SetAlt => self.calculate_set_alt(),
        }
    }

    pub fn calculate_direct(&mut self) -> Result<bool, RouteError> {
        if self.flightplan.len() < 2 {
            return Ok(false);
        }
        self.flightplan.set_route_type(RouteType::Direct);
        self.flightplan.clear_interior();
        self.distance = self.flightplan.total_distance();
        info!("Direct route, {:.1}nm", self.distance);
        Ok(true)
    }

    pub fn calculate_radionav(&mut self) -> Result<bool, RouteError> {
        self.radio.set_mode(RouteMode::VOR | RouteMode::VORDME | RouteMode::NDB);
        self.calculate_internal(false, RouteType::Vor, false)
    }

    pub fn calculate_low_alt(&mut self) -> Result<bool, RouteError> {
        self.airway.set_mode(RouteMode::VICTOR);
        self.calculate_internal(true, RouteType::LowAlt, false)
    }

    pub fn calculate_high_alt(&mut self) -> Result<bool, RouteError> {
        self.airway.set_mode(self.with_tracks(RouteMode::JET));
        self.calculate_internal(true, RouteType::HighAlt, false)
    }

    /// Airway route usable at the plan's current cruising altitude, which is
    /// left unchanged.
    pub fn calculate_set_alt(&mut self) -> Result<bool, RouteError> {
        self.airway.set_mode(self.with_tracks(RouteMode::VICTOR | RouteMode::JET));
        let route_type = if self.flightplan.get_cruising_altitude() > HIGH_ALTITUDE_LIMIT {
            RouteType::HighAlt
        } else {
            RouteType::LowAlt
        };
        self.calculate_internal(true, route_type, true)
    }

    pub fn reverse(&mut self) {
        self.flightplan.reverse();
    }

    /// Cached networks refer to the old data so they go before a reload.
    pub fn pre_database_load(&mut self) {
        self.radio.clear();
        self.airway.clear();
    }

    pub fn post_database_load(&mut self, query: Arc<dyn NavQuery>) {
        self.radio.set_query(query.clone());
        self.airway.set_query(query.clone());
        self.query = query;
    }

    fn with_tracks(&self, mode: RouteMode) -> RouteMode {
        if self.config.use_tracks {
            mode | RouteMode::TRACK
        } else {
            mode
        }
    }

    fn calculate_internal(
        &mut self,
        airways: bool,
        route_type: RouteType,
        use_set_altitude: bool,
    ) -> Result<bool, RouteError> {
        let (Some(departure), Some(destination)) = (
            self.flightplan.departure_pos().copied(),
            self.flightplan.destination_pos().copied(),
        ) else {
            return Ok(false);
        };
        if self.flightplan.len() < 2 {
            return Ok(false);
        }

        let altitude = if use_set_altitude {
            self.flightplan.get_cruising_altitude()
        } else {
            0
        };
        info!("Calculating {:?} route at altitude {}", route_type, altitude);

        let network: &mut dyn RouteNetwork = if airways { &mut self.airway } else { &mut self.radio };
        let mut finder = RouteFinder::new(network, &self.config);
        if let Some(cancel) = &self.cancel {
            finder = finder.with_cancel_token(cancel.clone());
        }
        let mut route = Vec::new();
        if !finder.calculate_route(&departure, &destination, &mut route, altitude)? {
            info!("Routing failed. Start or destination are not reachable.");
            return Ok(false);
        }
        let distance = finder.distance_nm();

        let assembled = RouteAssembler::new(&*self.query, airways).build_entries(&route)?;
        self.flightplan.set_route_type(route_type);
        self.flightplan.replace_interior(assembled.entries);
        if assembled.min_altitude != 0 && !use_set_altitude {
            let bearing = departure.rhumb_bearing_to_deg(&destination);
            let cruise = cruise_altitude(assembled.min_altitude, bearing, self.flightplan.get_plan_type());
            self.flightplan.set_cruising_altitude(cruise);
        }
        self.distance = distance;
        info!(
            "{:?} route with {} entries, {:.1}nm, cruising at {}",
            route_type,
            self.flightplan.len(),
            distance,
            self.flightplan.get_cruising_altitude()
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::earth::Earth;
    use crate::error::RouteError;
    use crate::model::airway::AirwayType;
    use crate::model::fix::FixType;
    use crate::model::navaid::NavaidType;
    use crate::model::plan::{Flightplan, FlightplanEntry, FlightplanType, RouteType, WaypointType};
    use crate::model::test_utils::tests::{
        make_airport_at, make_airway, make_fix, make_fix_on, make_flightplan, make_navaid,
    };
    use crate::router::config::RouteConfig;
    use crate::router::finder::CancelToken;

    use super::{RouteCalculation, RouteController};

    fn make_earth() -> Earth {
        let mut earth = Earth::new();
        earth.set_navaids(vec![
            make_navaid(50, "ALP", NavaidType::Vor, 0.0, 0.0, 60),
            make_navaid(51, "BRV", NavaidType::Vor, 0.5, 1.0, 60),
            make_navaid(52, "CHA", NavaidType::VorDme, 0.0, 2.0, 60),
            make_navaid(53, "DEL", NavaidType::Vor, 0.0, 3.0, 60),
        ]);
        earth.set_fixes(vec![
            make_fix_on(1, "ALP", 0.0, 0.0, FixType::Vor, Some(50)),
            make_fix(2, "BRAVO", 0.0, 1.0),
            make_fix(3, "CHARL", 0.0, 2.0),
            make_fix(4, "DELTA", 0.0, 3.0),
        ]);
        earth.set_airways(vec![
            make_airway(10, "V1", AirwayType::Victor, 1, 2, 4500),
            make_airway(11, "V1", AirwayType::Victor, 2, 3, 4500),
            make_airway(12, "V1", AirwayType::Victor, 3, 4, 4500),
            make_airway(20, "J1", AirwayType::Jet, 1, 4, 18000),
        ]);
        earth
    }

    fn make_controller(earth: Earth) -> RouteController {
        let config = RouteConfig {
            max_entry_nodes: 1,
            ..RouteConfig::default()
        };
        let mut controller = RouteController::new(Arc::new(earth), config);
        controller.set_flightplan(make_flightplan(
            &make_airport_at("WEST", 0.0, -0.3),
            &make_airport_at("EAST", 0.0, 3.3),
        ));
        controller
    }

    fn idents(plan: &Flightplan) -> Vec<&str> {
        plan.get_entries().iter().map(|e| e.get_ident()).collect()
    }

    fn airways(plan: &Flightplan) -> Vec<Option<&str>> {
        plan.get_entries().iter().map(|e| e.get_airway()).collect()
    }

    #[test]
    fn test_radionav() {
        let mut controller = make_controller(make_earth());
        let mut plan = controller.get_flightplan().clone();
        plan.set_cruising_altitude(7000);
        controller.set_flightplan(plan);
        assert_eq!(controller.calculate_radionav(), Ok(true));

        let plan = controller.get_flightplan();
        assert_eq!(idents(plan), vec!["WEST", "ALP", "BRV", "CHA", "DEL", "EAST"]);
        assert_eq!(plan.get_route_type(), RouteType::Vor);
        assert_eq!(plan.get_entries()[3].get_waypoint_type(), WaypointType::Vor);
        assert!(airways(plan).iter().all(|a| a.is_none()));
        assert_eq!(plan.get_cruising_altitude(), 7000);
        assert!(controller.route_distance_nm() > 216.0);
    }

    #[test]
    fn test_low_alt() {
        let mut controller = make_controller(make_earth());
        assert_eq!(controller.calculate_low_alt(), Ok(true));

        let plan = controller.get_flightplan();
        assert_eq!(idents(plan), vec!["WEST", "ALP", "BRAVO", "CHARL", "DELTA", "EAST"]);
        assert_eq!(plan.get_entries()[1].get_waypoint_type(), WaypointType::Vor);
        assert_eq!(plan.get_entries()[2].get_waypoint_type(), WaypointType::Intersection);
        assert_eq!(
            airways(plan),
            vec![None, None, Some("V1"), Some("V1"), Some("V1"), None]
        );
        assert_eq!(plan.get_route_type(), RouteType::LowAlt);
        assert_eq!(plan.get_cruising_altitude(), 5000);
    }

    #[test]
    fn test_high_alt() {
        let mut controller = make_controller(make_earth());
        assert_eq!(controller.calculate(RouteCalculation::HighAlt), Ok(true));

        let plan = controller.get_flightplan();
        assert_eq!(idents(plan), vec!["WEST", "ALP", "DELTA", "EAST"]);
        assert_eq!(airways(plan)[2], Some("J1"));
        assert_eq!(plan.get_route_type(), RouteType::HighAlt);
        assert_eq!(plan.get_cruising_altitude(), 19000);
    }

    #[test]
    fn test_vfr_westbound() {
        let mut controller = make_controller(make_earth());
        let mut plan = make_flightplan(
            &make_airport_at("EAST", 0.0, 3.3),
            &make_airport_at("WEST", 0.0, -0.3),
        );
        plan.set_plan_type(FlightplanType::Vfr);
        controller.set_flightplan(plan);
        assert_eq!(controller.calculate_low_alt(), Ok(true));
        assert_eq!(controller.get_flightplan().get_cruising_altitude(), 6500);
    }

    #[test]
    fn test_set_alt_keeps_altitude() {
        let mut controller = make_controller(make_earth());
        let mut plan = controller.get_flightplan().clone();
        plan.set_cruising_altitude(9000);
        controller.set_flightplan(plan);

        assert_eq!(controller.calculate_set_alt(), Ok(true));
        let plan = controller.get_flightplan();
        assert_eq!(idents(plan), vec!["WEST", "ALP", "BRAVO", "CHARL", "DELTA", "EAST"]);
        assert_eq!(plan.get_cruising_altitude(), 9000);
        assert_eq!(plan.get_route_type(), RouteType::LowAlt);

        let mut plan = plan.clone();
        plan.set_cruising_altitude(24000);
        controller.set_flightplan(plan);
        assert_eq!(controller.calculate_set_alt(), Ok(true));
        assert_eq!(controller.get_flightplan().get_route_type(), RouteType::HighAlt);
        assert_eq!(controller.get_flightplan().get_cruising_altitude(), 24000);
    }

    #[test]
    fn test_failure_leaves_plan_alone() {
        let mut controller = make_controller(make_earth());
        assert_eq!(controller.calculate_low_alt(), Ok(true));

        let mut plan = controller.get_flightplan().clone();
        plan.set_cruising_altitude(3000);
        controller.set_flightplan(plan.clone());
        assert_eq!(controller.calculate_set_alt(), Ok(false));
        assert_eq!(controller.get_flightplan(), &plan);

        let mut empty = make_controller(Earth::new());
        let before = empty.get_flightplan().clone();
        assert_eq!(empty.calculate_radionav(), Ok(false));
        assert_eq!(empty.calculate_high_alt(), Ok(false));
        assert_eq!(empty.get_flightplan(), &before);
    }

    #[test]
    fn test_needs_two_entries() {
        let mut controller = make_controller(make_earth());
        let mut plan = Flightplan::new();
        plan.add_entry(FlightplanEntry::from_airport(&make_airport_at("WEST", 0.0, -0.3)));
        controller.set_flightplan(plan);
        assert_eq!(controller.calculate_low_alt(), Ok(false));
        assert_eq!(controller.calculate_direct(), Ok(false));
        assert_eq!(controller.get_flightplan().len(), 1);
    }

    #[test]
    fn test_direct() {
        let mut controller = make_controller(make_earth());
        assert_eq!(controller.calculate_low_alt(), Ok(true));
        assert_eq!(controller.calculate(RouteCalculation::Direct), Ok(true));
        let plan = controller.get_flightplan();
        assert_eq!(idents(plan), vec!["WEST", "EAST"]);
        assert_eq!(plan.get_route_type(), RouteType::Direct);
    }

    #[test]
    fn test_reverse() {
        let mut controller = make_controller(make_earth());
        assert_eq!(controller.calculate_high_alt(), Ok(true));
        controller.reverse();
        let plan = controller.get_flightplan();
        assert_eq!(idents(plan), vec!["EAST", "DELTA", "ALP", "WEST"]);
        assert_eq!(airways(plan), vec![None, None, Some("J1"), None]);
    }

    #[test]
    fn test_database_reload() {
        let mut controller = make_controller(make_earth());
        assert_eq!(controller.calculate_low_alt(), Ok(true));

        controller.pre_database_load();
        let mut navaids_only = Earth::new();
        navaids_only.set_navaids(vec![
            make_navaid(50, "ALP", NavaidType::Vor, 0.0, 0.0, 60),
            make_navaid(53, "DEL", NavaidType::Ndb, 0.0, 1.8, 60),
        ]);
        controller.post_database_load(Arc::new(navaids_only));

        assert_eq!(controller.calculate_low_alt(), Ok(false));
        assert_eq!(controller.calculate_radionav(), Ok(true));
        assert_eq!(idents(controller.get_flightplan()), vec!["WEST", "ALP", "DEL", "EAST"]);
    }

    #[test]
    fn test_cancelled() {
        let mut controller = make_controller(make_earth());
        let cancel = CancelToken::new();
        controller.set_cancel_token(Some(cancel.clone()));
        cancel.cancel();
        let before = controller.get_flightplan().clone();
        assert_eq!(controller.calculate_low_alt(), Err(RouteError::Cancelled));
        assert_eq!(controller.get_flightplan(), &before);

        controller.set_cancel_token(None);
        assert_eq!(controller.calculate_low_alt(), Ok(true));
    }
}
