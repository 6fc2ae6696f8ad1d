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

use log::debug;

use crate::earth::bounds::Bounds;
use crate::earth::coordinate::Coordinate;
use crate::earth::NavQuery;
use crate::error::NavDataError;
use crate::model::location::Location;
use crate::router::config::RouteConfig;
use crate::router::graph::{Edge, NetworkGraph, Node, NodeType, RouteNetwork};
use crate::router::RouteMode;
use crate::util::location_filter::{Filter, RangeFilter};

/// Network of radio navaids. Nothing is stored between navaids, a leg exists
/// wherever two stations can both be received along it.
pub struct RadioNetwork {
    query: Arc<dyn NavQuery>,
    config: RouteConfig,
    mode: RouteMode,
    graph: NetworkGraph,
    bounds: Option<Bounds>,
}

impl RadioNetwork {
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

    fn leg_cost(&self, distance: f64, to: &Node) -> f64 {
        if to.node_type == NodeType::Ndb {
            distance * self.config.effective_ndb_cost_factor()
        } else {
            distance
        }
    }
}

impl RouteNetwork for RadioNetwork {
    fn mode(&self) -> RouteMode {
        self.mode
    }

    fn set_mode(&mut self, mode: RouteMode) {
        if mode != self.mode {
            debug!("Radio network mode {:?} -> {:?}", self.mode, mode);
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
        for navaid in self.query.get_navaids_in(&corridor)? {
            if !self.mode.accepts_navaid(navaid.get_type()) {
                continue;
            }
            self.graph.add_node(Node {
                id: navaid.get_id(),
                ident: navaid.get_ident().to_string(),
                node_type: NodeType::from(navaid.get_type()),
                coordinate: *navaid.get_loc(),
                region: navaid.get_region().to_string(),
                range: navaid.get_range(),
            });
        }
        self.bounds = Some(corridor);
        debug!("Radio network {:?} loaded with {} navaids", self.mode, self.graph.node_count());
        Ok(())
    }

    fn graph(&self) -> &NetworkGraph {
        &self.graph
    }

    fn edges_from(&self, index: usize, _altitude: i32, out: &mut Vec<Edge>) {
        out.clear();
        if index >= self.graph.node_count() {
            return;
        }
        let from = self.graph.node(index);
        let filter = RangeFilter::around(&from.coordinate, self.config.max_radio_leg_nm);
        for (i, to) in self.graph.nodes().iter().enumerate() {
            if i == index || !filter.filter(to) {
                continue;
            }
            let distance = from.coordinate.distance_to(&to.coordinate);
            if distance <= f64::from(from.range + to.range) {
                out.push(Edge::direct(i, distance, self.leg_cost(distance, to)));
            }
        }
    }

    fn is_airway_network(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::earth::coordinate::Coordinate;
    use crate::earth::Earth;
    use crate::model::navaid::NavaidType;
    use crate::model::test_utils::tests::make_navaid;
    use crate::router::config::RouteConfig;
    use crate::router::graph::{Edge, RouteNetwork};
    use crate::router::RouteMode;

    use super::RadioNetwork;

    fn make_network(config: RouteConfig) -> RadioNetwork {
        let mut earth = Earth::new();
        earth.set_navaids(vec![
            make_navaid(1, "AAA", NavaidType::Vor, 0.0, 0.0, 60),
            make_navaid(2, "BBB", NavaidType::Ndb, 0.0, 1.0, 30),
            make_navaid(3, "CCC", NavaidType::VorDme, 0.0, 2.0, 70),
            make_navaid(4, "DDD", NavaidType::Dme, 0.0, 1.5, 60),
            make_navaid(5, "EEE", NavaidType::Vor, 0.0, 5.0, 100),
        ]);
        let mut network = RadioNetwork::new(Arc::new(earth), config);
        network.set_mode(RouteMode::VOR | RouteMode::VORDME | RouteMode::NDB);
        network
    }

    fn targets(network: &RadioNetwork, id: i32) -> Vec<(i32, Edge)> {
        let graph = network.graph();
        let mut out = Vec::new();
        network.edges_from(graph.index_of(id).unwrap(), 0, &mut out);
        let mut found: Vec<(i32, Edge)> = out.into_iter().map(|e| (graph.node(e.to).id, e)).collect();
        found.sort_by_key(|(id, _)| *id);
        found
    }

    #[test]
    fn test_mode_filters_navaids() {
        let mut network = make_network(RouteConfig::default());
        network.load(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 5.0)).unwrap();
        assert!(network.is_loaded());
        assert_eq!(network.graph().node_count(), 4);
        assert!(network.graph().index_of(4).is_none());
        assert!(!network.is_airway_network());
    }

    #[test]
    fn test_legs_need_reception() {
        let mut network = make_network(RouteConfig::default());
        network.load(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 5.0)).unwrap();

        // BBB is 60nm away with ranges 60 + 30, CCC 120nm with 60 + 70
        let from_a = targets(&network, 1);
        let ids: Vec<i32> = from_a.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![2, 3]);

        // 180nm to EEE, ranges 70 + 100 is not enough
        let from_c = targets(&network, 3);
        assert!(from_c.iter().all(|(id, _)| *id != 5));
    }

    #[test]
    fn test_ndb_legs_cost_more() {
        let mut network = make_network(RouteConfig::default());
        network.load(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 5.0)).unwrap();
        let from_a = targets(&network, 1);
        let (_, to_ndb) = &from_a[0];
        assert!((to_ndb.cost - to_ndb.distance * 1.2).abs() < 1e-9);
        let (_, to_vor) = &from_a[1];
        assert_eq!(to_vor.cost, to_vor.distance);

        let mut plain = make_network(RouteConfig {
            vor_preferred: false,
            ..RouteConfig::default()
        });
        plain.load(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 5.0)).unwrap();
        let (_, to_ndb) = &targets(&plain, 1)[0];
        assert_eq!(to_ndb.cost, to_ndb.distance);
    }

    #[test]
    fn test_max_leg_length() {
        let mut network = make_network(RouteConfig {
            max_radio_leg_nm: 100.0,
            ..RouteConfig::default()
        });
        network.load(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 5.0)).unwrap();
        let ids: Vec<i32> = targets(&network, 1).iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_cache_and_mode_change() {
        let mut network = make_network(RouteConfig::default());
        network.load(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 5.0)).unwrap();
        network.load(&Coordinate::new(0.0, 1.0), &Coordinate::new(0.0, 2.0)).unwrap();
        assert_eq!(network.graph().node_count(), 4);

        network.set_mode(RouteMode::NDB);
        assert!(!network.is_loaded());
        network.load(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 5.0)).unwrap();
        assert_eq!(network.graph().node_count(), 1);
    }
}
