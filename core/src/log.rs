//!
//! Logger and logging macros
//!
//! The macros forward to the `log` facade so call sites only depend on this crate.
//! [`init_logger`] installs a log4rs backend writing to stdout and, when a log
//! directory is given, to a pair of size-rolled gzip archived files.
//!

#[doc(hidden)]
pub use ::log as log_impl;
pub use ::log::{Level, LevelFilter};

use appender::AppenderSpec;
use consts::{DEFAULT_LOGGER_ENV, ERR_LOG_FILE_NAME, LOG_FILE_NAME};
use log4rs::{Config, config::Root};
use std::iter::once;

pub use logger::LogError;

mod appender;
mod consts;
mod logger;

#[macro_export]
macro_rules! trace {
    ($($t:tt)*) => (
        $crate::log::log_impl::trace!($($t)*)
    )
}

#[macro_export]
macro_rules! debug {
    ($($t:tt)*) => (
        $crate::log::log_impl::debug!($($t)*)
    )
}

#[macro_export]
macro_rules! info {
    ($($t:tt)*) => (
        $crate::log::log_impl::info!($($t)*)
    )
}

#[macro_export]
macro_rules! warn {
    ($($t:tt)*) => (
        $crate::log::log_impl::warn!($($t)*)
    )
}

#[macro_export]
macro_rules! error {
    ($($t:tt)*) => (
        $crate::log::log_impl::error!($($t)*)
    )
}

const CONSOLE_APPENDER: &str = "stdout";
const LOG_FILE_APPENDER: &str = "log_file";
const ERR_LOG_FILE_APPENDER: &str = "err_log_file";

/// Installs the global logger.
///
/// `filters` follows the `RUST_LOG` grammar (`info,tron_grpc_client=debug`) and is applied
/// on top of the `RUST_LOG` environment variable. The root level defaults to `info`.
/// Only the first successful call in a process takes effect.
pub fn init_logger(log_dir: Option<&str>, filters: &str) -> Result<(), LogError> {
    let mut stdout_appender = AppenderSpec::console(CONSOLE_APPENDER, None);
    let mut file_appender = log_dir.map(|dir| AppenderSpec::roller(LOG_FILE_APPENDER, None, dir, LOG_FILE_NAME)).transpose()?;
    let mut err_file_appender = log_dir
        .map(|dir| AppenderSpec::roller(ERR_LOG_FILE_APPENDER, Some(LevelFilter::Warn), dir, ERR_LOG_FILE_NAME))
        .transpose()?;

    let root_appenders = once(CONSOLE_APPENDER)
        .chain(file_appender.as_ref().map(|x| x.name))
        .chain(err_file_appender.as_ref().map(|x| x.name))
        .collect::<Vec<_>>();
    let appenders = once(&mut stdout_appender)
        .chain(file_appender.as_mut())
        .chain(err_file_appender.as_mut())
        .map(|x| x.appender())
        .collect::<Result<Vec<_>, _>>()?;

    let loggers = logger::Builder::new().root_level(LevelFilter::Info).parse_env(DEFAULT_LOGGER_ENV).parse_expression(filters).build();

    let config = Config::builder()
        .appenders(appenders)
        .loggers(loggers.items())
        .build(Root::builder().appenders(root_appenders).build(loggers.root_level()))
        .map_err(|err| LogError::Config(err.to_string()))?;

    log4rs::init_config(config).map_err(|err| LogError::Init(err.to_string()))?;
    Ok(())
}
