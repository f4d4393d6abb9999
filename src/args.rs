// Copyright (C) 2025 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use crate::version;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Default)]
#[command(about = "MySQL plugin.", version = version::VERSION)]
pub struct Args {
    /// Enable verbose output. Use once (-v) for logging level DEBUG and twice (-vv) for logging
    /// level TRACE.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Sends log to stderr.
    #[arg(short = 'l', long)]
    pub display_log: bool,

    /// Prints config, parameters, important variables into the log file
    #[arg(long)]
    pub print_info: bool,

    /// Use custom log dir
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Use custom config file
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,
}

impl Args {
    pub fn logging_level(&self) -> Option<log::Level> {
        match self.verbose {
            2.. => Some(log::Level::Trace),
            1 => Some(log::Level::Debug),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args() {
        let args = Args::parse_from(["mk-mysql", "-vv", "-l", "-c", "mysql.yml"]);
        assert_eq!(args.logging_level(), Some(log::Level::Trace));
        assert!(args.display_log);
        assert_eq!(args.config_file, Some(PathBuf::from("mysql.yml")));
        assert!(args.log_dir.is_none());
        assert_eq!(
            Args::parse_from(["mk-mysql", "-v"]).logging_level(),
            Some(log::Level::Debug)
        );
        assert!(Args::parse_from(["mk-mysql"]).logging_level().is_none());
    }
}
