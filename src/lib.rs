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

#![forbid(unsafe_code)]

//! Route finding for the Kelpie flight planner.
//!
//! Computes a flyable path between a departure and a destination over either a
//! network of radio navaids or a network of airways, then turns that path into
//! flight plan entries and a cruising altitude.

pub mod earth;
pub mod error;
pub mod model;
pub mod preference;
pub mod router;
pub mod util;

pub use error::{NavDataError, RouteError};
pub use router::controller::{RouteCalculation, RouteController};
pub use router::finder::{CancelToken, RouteEntry, RouteFinder};
pub use router::{RouteConfig, RouteMode};
