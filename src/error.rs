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

use thiserror::Error;

/// Failure of the navigation database collaborator.
///
/// An empty answer is never an error, queries return `Ok(None)` or an empty
/// list for that.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NavDataError {
    #[error("Navigation data is not available: {0}")]
    Unavailable(String),
    #[error("Navigation data is corrupt in {table} at id {id}")]
    Corrupt { table: &'static str, id: i32 },
}

/// Errors crossing the route calculation boundary.
///
/// "No route" is not one of them, calculations report that as `Ok(false)`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RouteError {
    #[error("Route calculation failed: {0}")]
    Query(#[from] NavDataError),
    #[error("Route calculation was cancelled")]
    Cancelled,
}
