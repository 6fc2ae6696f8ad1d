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

use log::LevelFilter;
use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use simplelog::{ColorChoice, CombinedLogger, Config, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};
use std::error::Error;

pub mod location_filter;

const LOG_FILE_NAME: &str = "kelpie-route-finder.log";

/// Installs the process wide logger: warnings to the terminal and info to a
/// rolling file in the user's home directory. Dropping it flushes the logger.
pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Self::init_logger();
        Logger
    }

    fn init_logger() {
        if let Some(home_path) = home::home_dir() {
            let log_path = home_path.join(LOG_FILE_NAME);
            let condition = RollingConditionBasic::new()
                .daily()
                .max_size(1024 * 1024);
            let file_appender =
                BasicRollingFileAppender::new(log_path, condition, 2);
            match file_appender {
                Ok(file) => {
                    let mut term_config = ConfigBuilder::new();
                    let term_config = match term_config.set_time_offset_to_local() {
                        Ok(builder) | Err(builder) => builder.build(),
                    };
                    let mut file_config = ConfigBuilder::new();
                    file_config
                        .set_location_level(LevelFilter::Error)
                        .set_time_format_rfc3339();
                    let file_config = match file_config.set_time_offset_to_local() {
                        Ok(builder) | Err(builder) => builder.build(),
                    };
                    CombinedLogger::init(vec![
                        TermLogger::new(
                            LevelFilter::Warn,
                            term_config,
                            TerminalMode::Mixed,
                            ColorChoice::Auto,
                        ),
                        WriteLogger::new(
                            LevelFilter::Info,
                            file_config,
                            file,
                        ),
                    ]).unwrap_or_else(|e| {
                        Self::print_error(&e);
                    });
                    return;
                }
                Err(e) => {
                    Self::print_error(&e);
                }
            }
        }
        TermLogger::init(
            LevelFilter::Warn,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ).unwrap_or_else(|e| {
            Self::print_error(&e);
        });
    }

    fn print_error(e: &dyn Error) {
        println!("Unable to initiate logger: {}", e);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        log::logger().flush();
    }
}
