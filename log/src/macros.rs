// Copyright (c) 2026, nestlog developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::types::LevelLogger;
use nestlog_deps::lazy_static::lazy_static;
use std::sync::{Arc, RwLock};

lazy_static! {
	/// This is the static holder of the process-wide logger. Generally this
	/// should not be used directly. See [`log!`] and [`log_config!`] instead.
	#[doc(hidden)]
	pub static ref STATIC_LOG: Arc<RwLock<LevelLogger>> = Arc::new(RwLock::new(LevelLogger::new()));
}

/// A macro that is used to lock a rwlock in write mode and return the appropriate error if the lock is poisoned.
#[macro_export]
macro_rules! lockw {
	($a:expr) => {{
		let res = $a.write().map_err(|e| {
			let error: $crate::Error =
				$crate::ErrorKind::Poison(format!("Poison Error: {}", e.to_string())).into();
			error
		});

		res
	}};
}

/// A macro that is used to lock a rwlock in read mode and return the appropriate error if the lock is poisoned.
#[macro_export]
macro_rules! lockr {
	($a:expr) => {{
		let res = $a.read().map_err(|e| {
			let error: $crate::Error =
				$crate::ErrorKind::Poison(format!("Poison Error: {}", e.to_string())).into();
			error
		});

		res
	}};
}

/// Replace the process-wide logger with one built from the specified [`crate::LogConfig`].
/// If it is not called, the process-wide logger has the defaults of [`crate::LevelLogger::new`]
/// and logs nothing.
///
/// # Examples
/// ```
/// use nestlog_log::*;
///
/// fn main() -> Result<(), Error> {
///     log_config!(LogConfig {
///         min_level: LogConfigOption::MinLevel(Some(Severity::Info)),
///         ..Default::default()
///     })?;
///     info!("ready")?;
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! log_config {
	($config:expr) => {{
		let res: Result<(), $crate::Error> = match $crate::LogBuilder::build($config) {
			Ok(logger) => match $crate::lockw!($crate::STATIC_LOG) {
				Ok(mut static_log) => {
					*static_log = logger;
					Ok(())
				}
				Err(e) => Err(e),
			},
			Err(e) => Err(e),
		};
		res
	}};
}

/// Read a setting of the process-wide logger. See [`crate::LevelLogger::get_config_option`].
#[macro_export]
macro_rules! get_config_option {
	($name:expr) => {{
		let res: Result<$crate::LogConfigOption, $crate::Error> =
			match $crate::lockr!($crate::STATIC_LOG) {
				Ok(static_log) => Ok(static_log.get_config_option($name)),
				Err(e) => Err(e),
			};
		res
	}};
}

/// Change a setting of the process-wide logger. See [`crate::LevelLogger::set_config_option`].
#[macro_export]
macro_rules! set_config_option {
	($value:expr) => {{
		let res: Result<(), $crate::Error> = match $crate::lockw!($crate::STATIC_LOG) {
			Ok(mut static_log) => static_log.set_config_option($value),
			Err(e) => Err(e),
		};
		res
	}};
}

/// Spawn a child of the process-wide logger. The child is an independent
/// [`crate::LevelLogger`] one generation deeper, typically handed to a sub task or thread.
#[macro_export]
macro_rules! child_logger {
	() => {{
		let res: Result<$crate::LevelLogger, $crate::Error> =
			match $crate::lockr!($crate::STATIC_LOG) {
				Ok(static_log) => Ok(static_log.spawn_child()),
				Err(e) => Err(e),
			};
		res
	}};
}

/// Log through the process-wide logger at the specified level. The level may be a
/// [`crate::Severity`] or its lowercase name. The remaining parameters are used like the
/// format! macro.
///
/// # Examples
/// ```
/// use nestlog_log::*;
///
/// fn main() -> Result<(), Error> {
///     let attempts = 3;
///     log!(Severity::Warning, "retrying after {} attempts", attempts)?;
///     log!("notice", "by name")?;
///     assert!(log!("verbose", "unknown level").is_err());
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! log {
	($level:expr, $($arg:tt)+) => {{
		let res: Result<(), $crate::Error> = match $crate::lockw!($crate::STATIC_LOG) {
			Ok(mut static_log) => static_log.log($level, &format!($($arg)+)),
			Err(e) => Err(e),
		};
		res
	}};
}

/// Log at the 'emergency' (0) level through the process-wide logger. It is used like the
/// format! macro. Also see [`alert!`], [`critical!`], [`error!`], [`warning!`], [`notice!`],
/// [`info!`] and [`debug!`].
#[macro_export]
macro_rules! emergency {
	($($arg:tt)+) => {
		$crate::log!($crate::Severity::Emergency, $($arg)+)
	};
}

/// Log at the 'alert' (1) level through the process-wide logger.
#[macro_export]
macro_rules! alert {
	($($arg:tt)+) => {
		$crate::log!($crate::Severity::Alert, $($arg)+)
	};
}

/// Log at the 'critical' (2) level through the process-wide logger.
#[macro_export]
macro_rules! critical {
	($($arg:tt)+) => {
		$crate::log!($crate::Severity::Critical, $($arg)+)
	};
}

/// Log at the 'error' (3) level through the process-wide logger.
#[macro_export]
macro_rules! error {
	($($arg:tt)+) => {
		$crate::log!($crate::Severity::Error, $($arg)+)
	};
}

/// Log at the 'warning' (4) level through the process-wide logger.
#[macro_export]
macro_rules! warning {
	($($arg:tt)+) => {
		$crate::log!($crate::Severity::Warning, $($arg)+)
	};
}

/// Log at the 'notice' (5) level through the process-wide logger.
#[macro_export]
macro_rules! notice {
	($($arg:tt)+) => {
		$crate::log!($crate::Severity::Notice, $($arg)+)
	};
}

/// Log at the 'info' (6) level through the process-wide logger.
///
/// # Examples
/// ```
/// use nestlog_log::*;
///
/// fn main() -> Result<(), Error> {
///     let user = "joe";
///     info!("login by {}", user)?;
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! info {
	($($arg:tt)+) => {
		$crate::log!($crate::Severity::Info, $($arg)+)
	};
}

/// Log at the 'debug' (7) level through the process-wide logger.
#[macro_export]
macro_rules! debug {
	($($arg:tt)+) => {
		$crate::log!($crate::Severity::Debug, $($arg)+)
	};
}

/// Continue the last record of the process-wide logger. See [`crate::LevelLogger::append`].
#[macro_export]
macro_rules! append {
	($($arg:tt)+) => {{
		let res: Result<(), $crate::Error> = match $crate::lockw!($crate::STATIC_LOG) {
			Ok(mut static_log) => static_log.append(&format!($($arg)+)),
			Err(e) => Err(e),
		};
		res
	}};
}

/// Reply to the last record of the process-wide logger. See [`crate::LevelLogger::reply`].
#[macro_export]
macro_rules! reply {
	($($arg:tt)+) => {{
		let res: Result<(), $crate::Error> = match $crate::lockw!($crate::STATIC_LOG) {
			Ok(mut static_log) => static_log.reply(&format!($($arg)+)),
			Err(e) => Err(e),
		};
		res
	}};
}
