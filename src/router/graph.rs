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

use crate::earth::coordinate::Coordinate;
use crate::error::NavDataError;
use crate::model::airway::{Airway, AirwayType};
use crate::model::location::Location;
use crate::model::navaid::NavaidType;
use crate::router::RouteMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Vor,
    VorDme,
    Dme,
    Ndb,
    Waypoint,
    Airport,
    Departure,
    Destination,
}

impl From<NavaidType> for NodeType {
    fn from(navaid_type: NavaidType) -> Self {
        match navaid_type {
            NavaidType::Vor => NodeType::Vor,
            NavaidType::VorDme => NodeType::VorDme,
            NavaidType::Dme => NodeType::Dme,
            NavaidType::Ndb => NodeType::Ndb,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: i32,
    pub ident: String,
    pub node_type: NodeType,
    pub coordinate: Coordinate,
    pub region: String,
    /// Reception range in nautical miles, zero for fixes.
    pub range: i32,
}

impl Location for Node {
    fn get_id(&self) -> i32 {
        self.id
    }

    fn get_ident(&self) -> &str {
        self.ident.as_str()
    }

    fn get_loc(&self) -> &Coordinate {
        &self.coordinate
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Arena index, not node id.
    pub to: usize,
    pub distance: f64,
    pub cost: f64,
    pub airway_id: Option<i32>,
    pub airway_type: Option<AirwayType>,
    pub min_altitude: i32,
    pub max_altitude: i32,
    pub fragment: Option<i32>,
}

impl Edge {
    pub fn direct(to: usize, distance: f64, cost: f64) -> Self {
        Self {
            to,
            distance,
            cost,
            airway_id: None,
            airway_type: None,
            min_altitude: 0,
            max_altitude: 0,
            fragment: None,
        }
    }

    pub fn airway(to: usize, distance: f64, airway: &Airway) -> Self {
        Self {
            to,
            distance,
            cost: distance,
            airway_id: Some(airway.get_id()),
            airway_type: Some(airway.get_type()),
            min_altitude: airway.get_min_altitude(),
            max_altitude: airway.get_max_altitude(),
            fragment: airway.get_fragment(),
        }
    }

    /// Zero altitude means unconstrained. A zero maximum means no upper limit.
    pub fn allows_altitude(&self, altitude: i32) -> bool {
        altitude <= 0
            || (altitude >= self.min_altitude && (self.max_altitude <= 0 || altitude <= self.max_altitude))
    }
}

#[derive(Debug, Default)]
pub struct NetworkGraph {
    nodes: Vec<Node>,
    index: HashMap<i32, usize>,
    edges: Vec<Vec<Edge>>,
}

impl NetworkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: Node) -> usize {
        if let Some(i) = self.index.get(&node.id) {
            return *i;
        }
        let i = self.nodes.len();
        self.index.insert(node.id, i);
        self.nodes.push(node);
        self.edges.push(Vec::new());
        i
    }

    /// Unknown ends and self loops are skipped and return false.
    pub fn add_edge(&mut self, from: i32, edge: Edge) -> bool {
        match self.index.get(&from) {
            Some(&i) if edge.to < self.nodes.len() && edge.to != i => {
                self.edges[i].push(edge);
                true
            }
            _ => false,
        }
    }

    pub fn index_of(&self, id: i32) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges_from(&self, index: usize) -> &[Edge] {
        self.edges.get(index).map(|e| e.as_slice()).unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|e| e.len()).sum()
    }

    /// Nearest first, equal distances ordered by smaller id.
    pub fn nodes_near(&self, coordinate: &Coordinate, radius: f64, limit: usize) -> Vec<(usize, f64)> {
        let mut near: Vec<(usize, f64)> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (i, coordinate.distance_to(&n.coordinate)))
            .filter(|(_, d)| *d <= radius)
            .collect();
        near.sort_by(|a, b| {
            a.1.total_cmp(&b.1)
                .then_with(|| self.nodes[a.0].id.cmp(&self.nodes[b.0].id))
        });
        near.truncate(limit);
        near
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.edges.clear();
    }
}

pub trait RouteNetwork {
    fn mode(&self) -> RouteMode;

    /// Changing the mode drops whatever was loaded.
    fn set_mode(&mut self, mode: RouteMode);

    fn clear(&mut self);

    fn is_loaded(&self) -> bool;

    /// A cached network already covering the corridor is kept.
    fn load(&mut self, from: &Coordinate, to: &Coordinate) -> Result<(), NavDataError>;

    fn graph(&self) -> &NetworkGraph;

    /// Replaces the contents of `out`. Zero `altitude` means any altitude.
    fn edges_from(&self, index: usize, altitude: i32, out: &mut Vec<Edge>);

    fn is_airway_network(&self) -> bool;
}
