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

use nestlog_deps::colored::Color;
use nestlog_deps::serde_json::{Map, Value};
use nestlog_err::{err, ErrKind, Error};
use std::fmt::{Display, Formatter, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// (background, foreground) pairs indexed by [`Severity::ordinal`]. The background color
/// highlights the level tag, the foreground color the message.
const LEVEL_COLORS: [(Color, Color); 8] = [
	(Color::Red, Color::BrightRed),         // emergency
	(Color::Red, Color::BrightRed),         // alert
	(Color::Red, Color::BrightRed),         // critical
	(Color::Magenta, Color::BrightMagenta), // error
	(Color::Yellow, Color::BrightYellow),   // warning
	(Color::Green, Color::BrightGreen),     // notice
	(Color::Green, Color::BrightGreen),     // info
	(Color::Cyan, Color::BrightCyan),       // debug
];

/// The eight standard severities, most severe first. The discriminant of each variant is its
/// ordinal, so [`Severity::Emergency`] is 0 and [`Severity::Debug`] is 7. A record passes a
/// threshold when its ordinal is less than or equal to the threshold's ordinal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
	/// System is unusable
	Emergency = 0,
	/// Action must be taken immediately
	Alert = 1,
	/// Critical conditions
	Critical = 2,
	/// Runtime errors that do not require immediate action
	Error = 3,
	/// Exceptional occurrences that are not errors
	Warning = 4,
	/// Normal but significant events
	Notice = 5,
	/// Interesting events
	Info = 6,
	/// Detailed debug information
	Debug = 7,
}

impl Severity {
	/// All severities in ordinal order.
	pub const ALL: [Severity; 8] = [
		Severity::Emergency,
		Severity::Alert,
		Severity::Critical,
		Severity::Error,
		Severity::Warning,
		Severity::Notice,
		Severity::Info,
		Severity::Debug,
	];

	/// The position of this severity in [`Severity::ALL`]. 0 is the most severe.
	pub fn ordinal(self) -> usize {
		self as usize
	}

	/// The lowercase wire name, e.g. "warning".
	pub fn name(self) -> &'static str {
		match self {
			Severity::Emergency => "emergency",
			Severity::Alert => "alert",
			Severity::Critical => "critical",
			Severity::Error => "error",
			Severity::Warning => "warning",
			Severity::Notice => "notice",
			Severity::Info => "info",
			Severity::Debug => "debug",
		}
	}

	/// The uppercase name displayed in the level tag of a line, e.g. "WARNING".
	pub fn label(self) -> &'static str {
		match self {
			Severity::Emergency => "EMERGENCY",
			Severity::Alert => "ALERT",
			Severity::Critical => "CRITICAL",
			Severity::Error => "ERROR",
			Severity::Warning => "WARNING",
			Severity::Notice => "NOTICE",
			Severity::Info => "INFO",
			Severity::Debug => "DEBUG",
		}
	}

	/// Whether records of this severity are echoed to the error stream.
	pub fn is_error_like(self) -> bool {
		self <= Severity::Error
	}

	/// The (background, foreground) color pair used for colorized output.
	pub fn colors(self) -> (Color, Color) {
		LEVEL_COLORS[self.ordinal()]
	}
}

impl Display for Severity {
	fn fmt(&self, w: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		write!(w, "{}", self.name())
	}
}

impl FromStr for Severity {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		match s {
			"emergency" => Ok(Severity::Emergency),
			"alert" => Ok(Severity::Alert),
			"critical" => Ok(Severity::Critical),
			"error" => Ok(Severity::Error),
			"warning" => Ok(Severity::Warning),
			"notice" => Ok(Severity::Notice),
			"info" => Ok(Severity::Info),
			"debug" => Ok(Severity::Debug),
			_ => Err(err!(
				ErrKind::Configuration,
				format!("level is invalid: '{}'", s)
			)),
		}
	}
}

impl TryFrom<&str> for Severity {
	type Error = Error;

	fn try_from(s: &str) -> Result<Self, Error> {
		s.parse()
	}
}

/// Anything that can name a [`Severity`]. Textual severities are validated against the eight
/// wire names and fail with [`nestlog_err::ErrorKind::Configuration`] otherwise.
pub trait AsSeverity {
	/// Resolve to a [`Severity`].
	fn as_severity(&self) -> Result<Severity, Error>;
}

impl AsSeverity for Severity {
	fn as_severity(&self) -> Result<Severity, Error> {
		Ok(*self)
	}
}

impl AsSeverity for str {
	fn as_severity(&self) -> Result<Severity, Error> {
		self.parse()
	}
}

impl AsSeverity for String {
	fn as_severity(&self) -> Result<Severity, Error> {
		self.parse()
	}
}

impl<T: AsSeverity + ?Sized> AsSeverity for &T {
	fn as_severity(&self) -> Result<Severity, Error> {
		(**self).as_severity()
	}
}

/// Conversion of a log message to text. Implemented for every [`std::fmt::Display`] type. A
/// display implementation that reports an error results in
/// [`nestlog_err::ErrorKind::Render`].
pub trait Render {
	/// Render this value as the text of a log message.
	fn render(&self) -> Result<String, Error>;
}

impl<T: Display + ?Sized> Render for T {
	fn render(&self) -> Result<String, Error> {
		let mut text = String::new();
		write!(text, "{}", self)?;
		Ok(text)
	}
}

/// Key-value data appended to a message as `" Context: "` followed by its JSON serialization.
pub type Context = Map<String, Value>;

/// Append-only destination for plain log lines. A sink is shared between a logger and all of
/// the children spawned from it, so implementations must handle their own interleaving.
pub trait Sink: Send + Sync {
	/// Append `data` to the end of this sink.
	fn append(&self, data: &[u8]) -> Result<(), Error>;
}

/// Console output streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
	/// standard output, also the default stream outside of a terminal host
	Stdout,
	/// standard error, used for error-like severities
	Stderr,
}

/// The execution environment used to echo records when a logger is not quiet. The default is
/// [`crate::StdConsole`].
pub trait Console: Send + Sync {
	/// Whether the process runs as a terminal-capable executable. When false, the pid is
	/// omitted from lines and everything is echoed plain to [`Stream::Stdout`].
	fn in_terminal_host(&self) -> bool;
	/// Whether `stream` is attached to an interactive terminal device.
	fn is_interactive(&self, stream: Stream) -> bool;
	/// Write `text` (which already includes its line terminator) to `stream`.
	fn write(&self, stream: Stream, text: &str) -> Result<(), Error>;
}

/// The most recent record passed to [`LevelLogger::log`], whether or not it was filtered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LastRecord {
	/// severity of the record
	pub level: Severity,
	/// the rendered message, including any context suffix
	pub message: String,
}

/// This enum contains the names of the configuration options. It is used in the
/// [`LevelLogger::get_config_option`] function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogConfigOptionName {
	/// View the MinLevel setting. See [`LogConfigOption::MinLevel`].
	MinLevel,
	/// View the Indent setting. See [`LogConfigOption::Indent`].
	Indent,
	/// View the Quiet setting. See [`LogConfigOption::Quiet`].
	Quiet,
	/// View the FilePath setting. See [`LogConfigOption::FilePath`].
	FilePath,
}

/// This enum is used to get/set logger settings after the logger has been built. The function
/// used to get these values is [`LevelLogger::get_config_option`] and the function used to set
/// them is [`LevelLogger::set_config_option`].
#[derive(PartialEq, Debug, Clone)]
pub enum LogConfigOption {
	/// The least severe level that is still logged. None means nothing is logged. The default
	/// value is None.
	MinLevel(Option<Severity>),
	/// The string repeated once per generation in front of each message. The default value is
	/// a single tab.
	Indent(String),
	/// Whether echoing to the console is suppressed. The default value is true.
	Quiet(bool),
	/// The optional file that plain lines are appended to. The default value is None.
	FilePath(Option<PathBuf>),
}

/// The log configuration struct, the only parameter of [`crate::LogBuilder::build`]. An
/// example configuration with all parameters explicitly specified might look like this:
///
///```
/// use nestlog_log::LogConfigOption::*;
/// use nestlog_log::{LogConfig, Severity};
///
/// let config = LogConfig {
///     min_level: MinLevel(Some(Severity::Info)),
///     indent: Indent("  ".to_string()),
///     quiet: Quiet(false),
///     file_path: FilePath(None),
/// };
/// assert_ne!(config, LogConfig::default());
///```
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
	/// See [`LogConfigOption::MinLevel`]. The default value is MinLevel(None).
	pub min_level: LogConfigOption,
	/// See [`LogConfigOption::Indent`]. The default value is Indent("\t".to_string()).
	pub indent: LogConfigOption,
	/// See [`LogConfigOption::Quiet`]. The default value is Quiet(true).
	pub quiet: LogConfigOption,
	/// See [`LogConfigOption::FilePath`]. The default value is FilePath(None).
	pub file_path: LogConfigOption,
}

impl Default for LogConfig {
	fn default() -> Self {
		Self {
			min_level: LogConfigOption::MinLevel(None),
			indent: LogConfigOption::Indent("\t".to_string()),
			quiet: LogConfigOption::Quiet(true),
			file_path: LogConfigOption::FilePath(None),
		}
	}
}

/// A leveled logger whose lines are indented by its generation. See the crate level
/// documentation for the line format. A [`LevelLogger`] is not synchronized; use one instance
/// per thread (see [`LevelLogger::spawn_child`]) or wrap it in a lock.
pub struct LevelLogger {
	pub(crate) min_level: Option<Severity>,
	pub(crate) indent: String,
	pub(crate) generation: usize,
	pub(crate) quiet: bool,
	pub(crate) sink: Option<Arc<dyn Sink>>,
	pub(crate) file_path: Option<PathBuf>,
	pub(crate) console: Arc<dyn Console>,
	pub(crate) last_record: Option<LastRecord>,
}
