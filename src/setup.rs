// Copyright (C) 2025 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use crate::args::Args;
use crate::config::system::{Logging, SystemConfig};
use crate::config::MysqlConfig;
use crate::constants;
use crate::custom;
use crate::emit;
use crate::platform::CustomQueriesLocator;
use anyhow::{Context, Result};
use clap::Parser;
use flexi_logger::{
    self, Cleanup, Criterion, DeferredNow, FileSpec, LogSpecification, LoggerHandle, Record,
};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Default, Clone, Debug)]
pub struct Env {
    /// guaranteed to contain dir or None
    log_dir: Option<PathBuf>,
}

impl Env {
    pub fn new(args: &Args) -> Self {
        Self {
            log_dir: Env::build_dir(&args.log_dir, &constants::ENV_LOG_DIR.as_deref()),
        }
    }

    /// guaranteed to return log dir or None
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }

    fn build_dir(dir: &Option<PathBuf>, fallback: &Option<&Path>) -> Option<PathBuf> {
        dir.as_deref()
            .or(*fallback)
            .map(PathBuf::from)
            .filter(|p| Path::is_dir(p))
    }
}

pub enum SendTo {
    Null,
    Stderr,
}

/// Parses arguments, starts logging, loads config and resolves defaults of the plugin options
/// Returned logger handle must be kept alive while the plugin runs
pub fn init<I, T>(args: I) -> Result<(MysqlConfig, Env, LoggerHandle)>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::parse_from(args);
    let config_file = get_config_file(&args);

    let logging_config = SystemConfig::load_file(&config_file)
        .map(|x| x.logging().to_owned())
        .ok();
    let environment = Env::new(&args);
    let logger = init_logging(&args, &environment, logging_config)?;
    if !config_file.exists() {
        anyhow::bail!("The config file {:?} doesn't exist", config_file);
    }
    let mut config = get_check_config(&config_file)?;
    config.normalize(&CustomQueriesLocator::from_env());
    Ok((config, environment, logger))
}

/// Text to be printed by the plugin
pub fn run(config: &MysqlConfig) -> Result<String> {
    let options = config
        .options()
        .context("No mysql section in the config file")?;
    let queries = custom::find_queries(options);
    Ok(emit::options_text(options, &queries))
}

fn init_logging(
    args: &Args,
    environment: &Env,
    logging: Option<Logging>,
) -> Result<LoggerHandle> {
    let l = logging.unwrap_or_default();
    let level = args.logging_level().unwrap_or_else(|| l.level());
    let send_to = if args.display_log {
        SendTo::Stderr
    } else {
        SendTo::Null
    };

    let handle = apply_logging_parameters(level, environment.log_dir(), send_to, l);
    log_info_optional(args, level, environment, handle.is_ok());
    handle
}

fn log_info_optional(args: &Args, level: log::Level, environment: &Env, log_available: bool) {
    if args.print_info {
        let info = create_info_text(&level, environment);
        if log_available {
            log::info!("{}", info);
        } else {
            println!("{}", info);
        }
    }
}

fn create_info_text(level: &log::Level, environment: &Env) -> String {
    format!(
        "\n  - Log level: {}\n  - Log dir: {}\n  - MK_CONFDIR: {}\n  - {}: {}",
        level,
        environment
            .log_dir()
            .unwrap_or_else(|| Path::new(""))
            .display(),
        constants::get_env_value(constants::environment::CONFIG_DIR_ENV_VAR, "undefined"),
        constants::environment::PROGRAM_FILES_ENV_VAR,
        constants::get_env_value(constants::environment::PROGRAM_FILES_ENV_VAR, "undefined"),
    )
}

fn get_check_config(file: &Path) -> Result<MysqlConfig> {
    log::info!("Using config file: {}", file.display());

    MysqlConfig::load_file(file)
}

fn get_config_file(args: &Args) -> PathBuf {
    match args.config_file {
        Some(ref config_file) => config_file,
        None => &constants::DEFAULT_CONFIG_FILE,
    }
    .to_owned()
}

fn custom_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} [{}] [{}]: {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f %:z"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        &record.args()
    )
}

fn apply_logging_parameters(
    level: log::Level,
    log_dir: Option<&Path>,
    send_to: SendTo,
    logging: Logging,
) -> Result<LoggerHandle> {
    let spec = LogSpecification::parse(level.as_str().to_lowercase())?;
    let mut logger = flexi_logger::Logger::with(spec);

    logger = if let Some(dir) = log_dir {
        logger
            .log_to_file(make_log_file_spec(dir))
            .rotate(
                Criterion::Size(logging.max_size()),
                constants::log::FILE_NAMING,
                Cleanup::KeepLogFiles(logging.max_count()),
            )
            .append()
    } else {
        logger.do_not_log()
    };

    logger = match send_to {
        SendTo::Null => logger.duplicate_to_stderr(flexi_logger::Duplicate::None),
        SendTo::Stderr => logger.log_to_stderr(),
    };

    log::info!("Log level: {}", level.as_str());
    Ok(logger.format(custom_format).start()?)
}

fn make_log_file_spec(log_dir: &Path) -> FileSpec {
    FileSpec::default()
        .directory(log_dir.to_owned())
        .suppress_timestamp()
        .basename(constants::log::FILE_BASENAME)
}
