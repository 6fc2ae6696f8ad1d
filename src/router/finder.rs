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

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use log::debug;

use crate::earth::coordinate::Coordinate;
use crate::error::RouteError;
use crate::router::config::RouteConfig;
use crate::router::graph::{Edge, NodeType, RouteNetwork};

const DEPARTURE_ID: i32 = -2;
const DESTINATION_ID: i32 = -1;

/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, AtomicOrdering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(AtomicOrdering::SeqCst)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteEntry {
    pub id: i32,
    pub node_type: NodeType,
    pub airway_id: Option<i32>,
}

#[derive(Debug, Clone, Copy)]
struct OpenNode {
    f_score: f64,
    g_score: f64,
    id: i32,
    index: usize,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_score
            .total_cmp(&other.f_score)
            .then_with(|| self.g_score.total_cmp(&other.g_score))
            .then_with(|| self.id.cmp(&other.id))
            .then_with(|| self.index.cmp(&other.index))
    }
}

pub struct RouteFinder<'a> {
    network: &'a mut dyn RouteNetwork,
    entry_radius: f64,
    max_entry_nodes: usize,
    cancel: Option<CancelToken>,
    distance: f64,
    nodes_expanded: usize,
}

impl<'a> RouteFinder<'a> {
    pub fn new(network: &'a mut dyn RouteNetwork, config: &RouteConfig) -> Self {
        Self {
            network,
            entry_radius: config.entry_radius_nm,
            max_entry_nodes: config.max_entry_nodes,
            cancel: None,
            distance: 0.0,
            nodes_expanded: 0,
        }
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Zero unless the last call found a route.
    pub fn distance_nm(&self) -> f64 {
        self.distance
    }

    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    /// On success `entries` is replaced with the fixes between `start` and
    /// `end`. `Ok(false)` leaves it alone. A positive `altitude` excludes
    /// airway legs outside their band.
    pub fn calculate_route(
        &mut self,
        start: &Coordinate,
        end: &Coordinate,
        entries: &mut Vec<RouteEntry>,
        altitude: i32,
    ) -> Result<bool, RouteError> {
        self.distance = 0.0;
        self.nodes_expanded = 0;
        if !start.is_valid() || !end.is_valid() {
            debug!("Route requested between invalid positions {:?} and {:?}", start, end);
            return Ok(false);
        }

        self.network.load(start, end)?;
        let network: &dyn RouteNetwork = &*self.network;
        let graph = network.graph();
        let n = graph.node_count();
        if n == 0 {
            debug!("No {:?} network between {:?} and {:?}", network.mode(), start, end);
            return Ok(false);
        }

        let start_index = n;
        let end_index = n + 1;
        let mut edges: Vec<Edge> = Vec::new();

        // Only nodes that can be flown onward from, or arrived at, at this
        // altitude take up entry and exit slots.
        let near_end = graph.nodes_near(end, self.entry_radius, usize::MAX);
        let mut inbound: HashSet<usize> = HashSet::new();
        for i in 0..n {
            if inbound.len() == near_end.len() {
                break;
            }
            network.edges_from(i, altitude, &mut edges);
            inbound.extend(
                edges
                    .iter()
                    .map(|e| e.to)
                    .filter(|to| near_end.iter().any(|(c, _)| c == to)),
            );
        }
        let exits: HashMap<usize, f64> = near_end
            .into_iter()
            .filter(|(i, _)| {
                inbound.contains(i) || graph.node(*i).coordinate.distance_to(start) <= self.entry_radius
            })
            .take(self.max_entry_nodes)
            .collect();

        let mut entry_edges: Vec<Edge> = Vec::new();
        for (i, d) in graph.nodes_near(start, self.entry_radius, usize::MAX) {
            if entry_edges.len() == self.max_entry_nodes {
                break;
            }
            network.edges_from(i, altitude, &mut edges);
            if !edges.is_empty() || exits.contains_key(&i) {
                entry_edges.push(Edge::direct(i, d, d));
            }
        }

        let id_of = |i: usize| match i {
            i if i == start_index => DEPARTURE_ID,
            i if i == end_index => DESTINATION_ID,
            i => graph.node(i).id,
        };
        let heuristic = |i: usize| {
            if i >= n {
                0.0
            } else {
                graph.node(i).coordinate.distance_to(end)
            }
        };

        let mut g_score = vec![f64::INFINITY; n + 2];
        let mut flown = vec![0.0; n + 2];
        let mut came_from: Vec<Option<(usize, Option<i32>)>> = vec![None; n + 2];
        let mut closed = vec![false; n + 2];
        let mut open_set: BinaryHeap<Reverse<OpenNode>> = BinaryHeap::new();
        let mut expanded = 0usize;

        g_score[start_index] = 0.0;
        open_set.push(Reverse(OpenNode {
            f_score: start.distance_to(end),
            g_score: 0.0,
            id: DEPARTURE_ID,
            index: start_index,
        }));

        let mut found = false;
        while let Some(Reverse(current)) = open_set.pop() {
            if let Some(cancel) = &self.cancel {
                if cancel.is_cancelled() {
                    self.nodes_expanded = expanded;
                    debug!("Route search cancelled after {} nodes", expanded);
                    return Err(RouteError::Cancelled);
                }
            }
            if closed[current.index] {
                continue;
            }
            closed[current.index] = true;
            expanded += 1;

            if current.index == end_index {
                found = true;
                break;
            }

            if current.index == start_index {
                edges.clear();
                edges.extend(entry_edges.iter().cloned());
            } else {
                network.edges_from(current.index, altitude, &mut edges);
                if let Some(d) = exits.get(&current.index) {
                    edges.push(Edge::direct(end_index, *d, *d));
                }
            }

            for edge in &edges {
                if closed[edge.to] {
                    continue;
                }
                let tentative = g_score[current.index] + edge.cost;
                if tentative < g_score[edge.to] {
                    g_score[edge.to] = tentative;
                    flown[edge.to] = flown[current.index] + edge.distance;
                    came_from[edge.to] = Some((current.index, edge.airway_id));
                    open_set.push(Reverse(OpenNode {
                        f_score: tentative + heuristic(edge.to),
                        g_score: tentative,
                        id: id_of(edge.to),
                        index: edge.to,
                    }));
                }
            }
        }

        self.nodes_expanded = expanded;
        if !found {
            debug!("No route after expanding {} nodes", expanded);
            return Ok(false);
        }

        let mut route = Vec::new();
        let mut step = came_from[end_index];
        while let Some((index, _)) = step {
            if index == start_index {
                break;
            }
            let node = graph.node(index);
            route.push(RouteEntry {
                id: node.id,
                node_type: node.node_type,
                airway_id: came_from[index].and_then(|(_, airway)| airway),
            });
            step = came_from[index];
        }
        route.reverse();

        self.distance = flown[end_index];
        debug!(
            "Route of {} fixes, {:.1}nm, found after expanding {} nodes",
            route.len(),
            self.distance,
            expanded
        );
        *entries = route;
        Ok(true)
    }
}
