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

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};

use crate::earth::bounds::Bounds;
use crate::earth::coordinate::Coordinate;
use crate::earth::NavQuery;
use crate::error::NavDataError;
use crate::model::airway::{Airway, AirwayDirection, AirwayType};
use crate::model::fix::Fix;
use crate::model::location::Location;
use crate::router::config::RouteConfig;
use crate::router::graph::{Edge, NetworkGraph, Node, NodeType, RouteNetwork};
use crate::router::RouteMode;

pub struct AirwayNetwork {
    query: Arc<dyn NavQuery>,
    config: RouteConfig,
    mode: RouteMode,
    graph: NetworkGraph,
    bounds: Option<Bounds>,
}

impl AirwayNetwork {
    pub fn new(query: Arc<dyn NavQuery>, config: RouteConfig) -> Self {
        Self {
            query,
            config,
            mode: RouteMode::NONE,
            graph: NetworkGraph::new(),
            bounds: None,
        }
    }

    pub fn set_query(&mut self, query: Arc<dyn NavQuery>) {
        self.query = query;
        self.clear();
    }

    pub fn set_config(&mut self, config: RouteConfig) {
        if config != self.config {
            self.config = config;
            self.clear();
        }
    }

    fn wanted(&self, airway: &Airway) -> bool {
        if !self.mode.accepts_airway(airway.get_type()) {
            return false;
        }
        match (airway.get_type(), &self.config.track_time) {
            (AirwayType::Track, Some(time)) => airway.is_valid_at(time),
            _ => true,
        }
    }

    fn fix(&self, id: i32, fixes: &mut HashMap<i32, Option<Arc<Fix>>>) -> Result<Option<Arc<Fix>>, NavDataError> {
        if let Some(fix) = fixes.get(&id) {
            return Ok(fix.clone());
        }
        let fix = self.query.get_fix_by_id(id)?;
        fixes.insert(id, fix.clone());
        Ok(fix)
    }

    fn add_fix(&mut self, fix: &Fix) -> usize {
        self.graph.add_node(Node {
            id: fix.get_id(),
            ident: fix.get_ident().to_string(),
            node_type: NodeType::Waypoint,
            coordinate: *fix.get_loc(),
            region: fix.get_region().to_string(),
            range: 0,
        })
    }

    fn add_segment(&mut self, airway: &Airway, from: &Fix, to: &Fix) {
        let from_index = self.add_fix(from);
        let to_index = self.add_fix(to);
        let distance = from.get_loc().distance_to(to.get_loc());
        let direction = airway.get_direction();
        if direction != AirwayDirection::Backward {
            self.graph.add_edge(from.get_id(), Edge::airway(to_index, distance, airway));
        }
        if direction != AirwayDirection::Forward {
            self.graph.add_edge(to.get_id(), Edge::airway(from_index, distance, airway));
        }
    }
}

impl RouteNetwork for AirwayNetwork {
    fn mode(&self) -> RouteMode {
        self.mode
    }

    fn set_mode(&mut self, mode: RouteMode) {
        if mode != self.mode {
            debug!("Airway network mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
            self.clear();
        }
    }

    fn clear(&mut self) {
        self.graph.clear();
        self.bounds = None;
    }

    fn is_loaded(&self) -> bool {
        self.bounds.is_some()
    }

    fn load(&mut self, from: &Coordinate, to: &Coordinate) -> Result<(), NavDataError> {
        let corridor = Bounds::around(from, to, self.config.corridor_margin_nm);
        if let Some(cached) = &self.bounds {
            if cached.contains_bounds(&corridor) {
                return Ok(());
            }
        }

        self.clear();
        let mut fixes = HashMap::new();
        for airway in self.query.get_airways_in(&corridor)? {
            if !self.wanted(&airway) {
                continue;
            }
            if airway.get_from_fix_id() == airway.get_to_fix_id() {
                warn!("Airway {} segment {} starts and ends at the same fix", airway.get_name(), airway.get_id());
                continue;
            }
            let from_fix = self.fix(airway.get_from_fix_id(), &mut fixes)?;
            let to_fix = self.fix(airway.get_to_fix_id(), &mut fixes)?;
            match (from_fix, to_fix) {
                (Some(from_fix), Some(to_fix)) => self.add_segment(&airway, &from_fix, &to_fix),
                _ => warn!(
                    "Airway {} segment {} refers to a missing fix, skipped",
                    airway.get_name(),
                    airway.get_id()
                ),
            }
        }
        self.bounds = Some(corridor);
        debug!(
            "Airway network {:?} loaded with {} fixes and {} legs",
            self.mode,
            self.graph.node_count(),
            self.graph.edge_count()
        );
        Ok(())
    }

    fn graph(&self) -> &NetworkGraph {
        &self.graph
    }

    fn edges_from(&self, index: usize, altitude: i32, out: &mut Vec<Edge>) {
        out.clear();
        out.extend(
            self.graph
                .edges_from(index)
                .iter()
                .filter(|e| e.allows_altitude(altitude))
                .cloned(),
        );
    }

    fn is_airway_network(&self) -> bool {
        true
    }
}
