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

//! Leveled logger with nested indentation. A [`crate::LevelLogger`] formats each record as a
//! single line made of a local timestamp, the process id, the bracketed level, an indent that
//! grows with the logger's generation, and the message:
//!
//! ```text
//! 2022-08-14 16:44:19.387014 +0200 [4242] [INFO] connecting
//! 2022-08-14 16:44:19.387213 +0200 [4242] [WARNING] .. retrying Context: {"attempt":2}
//! 2022-08-14 16:44:19.388020 +0200 [4242] [INFO] connecting:done
//! ```
//!
//! Records that pass the minimum level are appended to an optional [`crate::Sink`] (usually a
//! [`crate::FileSink`]) and, unless the logger is quiet, echoed to the console. Error-like
//! levels go to stderr, the rest to stdout, and the level tag and message are colored when
//! the stream is a terminal.
//!
//! [`crate::LevelLogger::spawn_child`] creates a logger one generation deeper for nested
//! work; the second line above comes from a child whose indent is "..".
//! [`crate::LevelLogger::append`] and [`crate::LevelLogger::reply`] re-log the previous
//! record with more text, which is how the last line above was produced.
//!
//! # Examples
//!
//!```
//! use nestlog_log::*;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Error> {
//!     let sink = Arc::new(MemorySink::new());
//!     let mut logger = LevelLogger::new();
//!     logger.set_sink(Some(sink.clone()));
//!     logger.set_min_level(Severity::Info)?;
//!
//!     logger.info("connecting")?;
//!     logger.reply("done")?;
//!     logger.debug("not logged")?;
//!
//!     let mut child = logger.spawn_child();
//!     child.warning("nested")?;
//!
//!     let lines = sink.lines()?;
//!     assert_eq!(lines.len(), 3);
//!     assert!(lines[1].ends_with("[INFO] connecting:done"));
//!     assert!(lines[2].ends_with("[WARNING] \t nested"));
//!     Ok(())
//! }
//!```
//!
//! A process-wide logger is also available through the [`info!`], [`error!`], [`log!`], etc.
//! macros. It is configured with [`log_config!`].

mod console;
mod log;
mod macros;
mod sink;
mod types;

pub use crate::console::StdConsole;
pub use crate::log::LogBuilder;
pub use crate::macros::STATIC_LOG;
pub use crate::sink::{FileSink, MemorySink};
pub use crate::types::{
	AsSeverity, Console, Context, LastRecord, LevelLogger, LogConfig, LogConfigOption,
	LogConfigOptionName, Render, Severity, Sink, Stream,
};
pub use nestlog_err::{Error, ErrorKind};
