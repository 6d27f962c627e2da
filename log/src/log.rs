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

use crate::console::StdConsole;
use crate::sink::FileSink;
use crate::types::{
	AsSeverity, Console, Context, LastRecord, LevelLogger, LogConfig, LogConfigOption,
	LogConfigOptionName, Render, Severity, Sink, Stream,
};
use nestlog_deps::chrono::Local;
use nestlog_deps::serde_json;
use nestlog_err::{err, ErrKind, Error};
use std::fmt::{Debug, Formatter};
use std::path::PathBuf;
use std::sync::Arc;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f %z";
const RESET: &str = "\x1b[0m";

/// The five parts of a line, in output order. Empty parts are left out of the joined line.
struct LineComponents {
	date: String,
	pid: String,
	level: String,
	generation: String,
	message: String,
}

impl LineComponents {
	fn plain(&self) -> String {
		Self::join(&[
			&self.date,
			&self.pid,
			&self.level,
			&self.generation,
			&self.message,
		])
	}

	fn colored(&self, level: Severity) -> String {
		let (bg, fg) = level.colors();
		let tag = format!("\x1b[{}m{}{}", bg.to_bg_str(), self.level, RESET);
		let message = format!("\x1b[{}m{}{}", fg.to_fg_str(), self.message, RESET);
		Self::join(&[&self.date, &self.pid, &tag, &self.generation, &message])
	}

	fn join(parts: &[&String]) -> String {
		parts
			.iter()
			.filter(|p| !p.is_empty())
			.map(|p| p.as_str())
			.collect::<Vec<&str>>()
			.join(" ")
	}
}

impl Default for LevelLogger {
	fn default() -> Self {
		Self::new()
	}
}

impl Debug for LevelLogger {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LevelLogger")
			.field("min_level", &self.min_level)
			.field("indent", &self.indent)
			.field("generation", &self.generation)
			.field("quiet", &self.quiet)
			.field("has_sink", &self.sink.is_some())
			.field("file_path", &self.file_path)
			.field("last_record", &self.last_record)
			.finish()
	}
}

impl LevelLogger {
	/// Create a logger with the defaults: quiet, no sink, no minimum level (so nothing is
	/// logged until [`LevelLogger::set_min_level`] is called), generation 0 and a tab indent.
	pub fn new() -> Self {
		Self {
			min_level: None,
			indent: "\t".to_string(),
			generation: 0,
			quiet: true,
			sink: None,
			file_path: None,
			console: Arc::new(StdConsole),
			last_record: None,
		}
	}

	/// Return a child logger one generation deeper than this one. The child copies this
	/// logger's settings as they are now and shares its sink and console. Later changes to
	/// either logger are not seen by the other.
	pub fn spawn_child(&self) -> LevelLogger {
		Self {
			min_level: self.min_level,
			indent: self.indent.clone(),
			generation: self.generation + 1,
			quiet: self.quiet,
			sink: self.sink.clone(),
			file_path: self.file_path.clone(),
			console: self.console.clone(),
			last_record: None,
		}
	}

	pub fn set_sink(&mut self, sink: Option<Arc<dyn Sink>>) {
		self.sink = sink;
		self.file_path = None;
	}

	pub fn sink(&self) -> Option<Arc<dyn Sink>> {
		self.sink.clone()
	}

	/// Append lines to the file at `path`, or stop writing to any sink if `path` is None.
	///
	/// # Errors
	///
	/// [`nestlog_err::ErrorKind::IO`] if the file cannot be opened for appending. The current
	/// sink is kept in that case.
	pub fn set_file(&mut self, path: Option<PathBuf>) -> Result<(), Error> {
		match path {
			Some(path) => {
				let sink = FileSink::open(&path)?;
				self.sink = Some(Arc::new(sink));
				self.file_path = Some(path);
			}
			None => self.set_sink(None),
		}
		Ok(())
	}

	/// The file backing the current sink, if it was set with [`LevelLogger::set_file`].
	pub fn file(&self) -> Option<&PathBuf> {
		self.file_path.as_ref()
	}

	pub fn set_console(&mut self, console: Arc<dyn Console>) {
		self.console = console;
	}

	/// Set the least severe level that is still logged.
	///
	/// # Errors
	///
	/// [`nestlog_err::ErrorKind::Configuration`] if `level` is not one of the eight severities.
	pub fn set_min_level<L: AsSeverity>(&mut self, level: L) -> Result<(), Error> {
		self.min_level = Some(level.as_severity()?);
		Ok(())
	}

	pub fn min_level(&self) -> Option<Severity> {
		self.min_level
	}

	/// Use `text` repeated `repeat` times as the indent of each generation.
	pub fn set_indent(&mut self, text: &str, repeat: usize) {
		self.indent = text.repeat(repeat);
	}

	pub fn indent(&self) -> &str {
		&self.indent
	}

	pub fn set_quiet(&mut self, quiet: bool) {
		self.quiet = quiet;
	}

	pub fn is_quiet(&self) -> bool {
		self.quiet
	}

	pub fn generation(&self) -> usize {
		self.generation
	}

	pub fn last_record(&self) -> Option<&LastRecord> {
		self.last_record.as_ref()
	}

	/// Change a single setting. See [`crate::LogConfigOption`].
	pub fn set_config_option(&mut self, value: LogConfigOption) -> Result<(), Error> {
		match value {
			LogConfigOption::MinLevel(level) => self.min_level = level,
			LogConfigOption::Indent(indent) => self.indent = indent,
			LogConfigOption::Quiet(quiet) => self.quiet = quiet,
			LogConfigOption::FilePath(path) => self.set_file(path)?,
		}
		Ok(())
	}

	/// Read a single setting. See [`crate::LogConfigOptionName`].
	pub fn get_config_option(&self, option: LogConfigOptionName) -> LogConfigOption {
		match option {
			LogConfigOptionName::MinLevel => LogConfigOption::MinLevel(self.min_level),
			LogConfigOptionName::Indent => LogConfigOption::Indent(self.indent.clone()),
			LogConfigOptionName::Quiet => LogConfigOption::Quiet(self.quiet),
			LogConfigOptionName::FilePath => LogConfigOption::FilePath(self.file_path.clone()),
		}
	}

	/// Log `message` at `level`. Equivalent to [`LevelLogger::log_with`] with an empty context.
	pub fn log<L, M>(&mut self, level: L, message: &M) -> Result<(), Error>
	where
		L: AsSeverity,
		M: Render + ?Sized,
	{
		self.log_with(level, message, &Context::new())
	}

	/// Log `message` at `level`, followed by `context` as JSON when it is not empty.
	///
	/// The record is remembered for [`LevelLogger::append`] and [`LevelLogger::reply`]
	/// before the level filter runs, so filtered records can still be continued. A record
	/// that passes the filter is appended to the sink, then echoed to the console unless the
	/// logger is quiet.
	///
	/// # Errors
	///
	/// * [`nestlog_err::ErrorKind::Configuration`] if `level` is not a valid severity.
	/// * [`nestlog_err::ErrorKind::Render`] if `message` or `context` cannot be rendered.
	/// * [`nestlog_err::ErrorKind::IO`] if the sink or console write fails.
	pub fn log_with<L, M>(
		&mut self,
		level: L,
		message: &M,
		context: &Context,
	) -> Result<(), Error>
	where
		L: AsSeverity,
		M: Render + ?Sized,
	{
		let level = level.as_severity()?;
		let message = Self::make_message(message, context)?;
		self.emit(level, message)
	}

	/// Re-log the previous record with `message` appended directly to its message.
	///
	/// # Errors
	///
	/// [`nestlog_err::ErrorKind::IllegalState`] if nothing was logged with this logger yet,
	/// otherwise as [`LevelLogger::log_with`].
	pub fn append<M: Render + ?Sized>(&mut self, message: &M) -> Result<(), Error> {
		self.append_with(message, &Context::new())
	}

	pub fn append_with<M: Render + ?Sized>(
		&mut self,
		message: &M,
		context: &Context,
	) -> Result<(), Error> {
		self.continue_last(message, context, "")
	}

	/// Like [`LevelLogger::append`], but the two messages are joined by ':'.
	pub fn reply<M: Render + ?Sized>(&mut self, message: &M) -> Result<(), Error> {
		self.reply_with(message, &Context::new())
	}

	pub fn reply_with<M: Render + ?Sized>(
		&mut self,
		message: &M,
		context: &Context,
	) -> Result<(), Error> {
		self.continue_last(message, context, ":")
	}

	pub fn emergency<M: Render + ?Sized>(&mut self, message: &M) -> Result<(), Error> {
		self.log(Severity::Emergency, message)
	}

	pub fn alert<M: Render + ?Sized>(&mut self, message: &M) -> Result<(), Error> {
		self.log(Severity::Alert, message)
	}

	pub fn critical<M: Render + ?Sized>(&mut self, message: &M) -> Result<(), Error> {
		self.log(Severity::Critical, message)
	}

	pub fn error<M: Render + ?Sized>(&mut self, message: &M) -> Result<(), Error> {
		self.log(Severity::Error, message)
	}

	pub fn warning<M: Render + ?Sized>(&mut self, message: &M) -> Result<(), Error> {
		self.log(Severity::Warning, message)
	}

	pub fn notice<M: Render + ?Sized>(&mut self, message: &M) -> Result<(), Error> {
		self.log(Severity::Notice, message)
	}

	pub fn info<M: Render + ?Sized>(&mut self, message: &M) -> Result<(), Error> {
		self.log(Severity::Info, message)
	}

	pub fn debug<M: Render + ?Sized>(&mut self, message: &M) -> Result<(), Error> {
		self.log(Severity::Debug, message)
	}

	fn continue_last<M: Render + ?Sized>(
		&mut self,
		message: &M,
		context: &Context,
		separator: &str,
	) -> Result<(), Error> {
		let (level, previous) = match &self.last_record {
			Some(record) => (record.level, record.message.clone()),
			None => {
				return Err(err!(
					ErrKind::IllegalState,
					"nothing has been logged to continue"
				))
			}
		};
		let message = Self::make_message(message, context)?;
		self.emit(level, format!("{}{}{}", previous, separator, message))
	}

	fn make_message<M: Render + ?Sized>(message: &M, context: &Context) -> Result<String, Error> {
		let mut message = message.render()?;
		if !context.is_empty() {
			message.push_str(" Context: ");
			message.push_str(&serde_json::to_string(context)?);
		}
		Ok(message)
	}

	fn emit(&mut self, level: Severity, message: String) -> Result<(), Error> {
		self.last_record = Some(LastRecord {
			level,
			message: message.clone(),
		});

		match self.min_level {
			Some(min_level) if level.ordinal() <= min_level.ordinal() => {}
			_ => return Ok(()),
		}

		let components = self.line_components(level, message);
		let plain_line = format!("{}\n", components.plain());
		if let Some(sink) = &self.sink {
			sink.append(plain_line.as_bytes())?;
		}

		if self.quiet {
			return Ok(());
		}

		if !self.console.in_terminal_host() {
			return self.console.write(Stream::Stdout, &plain_line);
		}

		let stream = match level.is_error_like() {
			true => Stream::Stderr,
			false => Stream::Stdout,
		};
		match self.console.is_interactive(stream) {
			true => self
				.console
				.write(stream, &format!("{}\n", components.colored(level))),
			false => self.console.write(Stream::Stdout, &plain_line),
		}
	}

	fn line_components(&self, level: Severity, message: String) -> LineComponents {
		let pid = match self.console.in_terminal_host() {
			true => format!("[{}]", std::process::id()),
			false => String::new(),
		};
		LineComponents {
			date: Local::now().format(DATE_FORMAT).to_string(),
			pid,
			level: format!("[{}]", level.label()),
			generation: self.indent.repeat(self.generation),
			message,
		}
	}
}

/// Builds a [`crate::LevelLogger`] from a [`crate::LogConfig`].
pub struct LogBuilder {}

impl LogBuilder {
	/// Build a generation 0 logger configured by `config`.
	///
	/// # Errors
	///
	/// * [`nestlog_err::ErrorKind::Configuration`] if a field of `config` holds the option
	///   for a different field.
	/// * [`nestlog_err::ErrorKind::IO`] if the configured file cannot be opened.
	pub fn build(config: LogConfig) -> Result<LevelLogger, Error> {
		Self::check_config(&config)?;
		let mut logger = LevelLogger::new();
		logger.set_config_option(config.min_level)?;
		logger.set_config_option(config.indent)?;
		logger.set_config_option(config.quiet)?;
		logger.set_config_option(config.file_path)?;
		Ok(logger)
	}

	fn check_config(config: &LogConfig) -> Result<(), Error> {
		if !matches!(config.min_level, LogConfigOption::MinLevel(_)) {
			return Err(err!(
				ErrKind::Configuration,
				"min_level must be a LogConfigOption::MinLevel"
			));
		}
		if !matches!(config.indent, LogConfigOption::Indent(_)) {
			return Err(err!(
				ErrKind::Configuration,
				"indent must be a LogConfigOption::Indent"
			));
		}
		if !matches!(config.quiet, LogConfigOption::Quiet(_)) {
			return Err(err!(
				ErrKind::Configuration,
				"quiet must be a LogConfigOption::Quiet"
			));
		}
		if !matches!(config.file_path, LogConfigOption::FilePath(_)) {
			return Err(err!(
				ErrKind::Configuration,
				"file_path must be a LogConfigOption::FilePath"
			));
		}
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use crate::console::RecordingConsole;
	use crate::log::LogBuilder;
	use crate::sink::MemorySink;
	use crate::types::{
		Context, LastRecord, LevelLogger, LogConfig, LogConfigOption, LogConfigOptionName,
		Severity, Sink, Stream,
	};
	use nestlog_deps::chrono::DateTime;
	use nestlog_deps::serde_json::Value;
	use nestlog_err::{err, ErrKind, Error, ErrorKind};
	use std::fmt::{Display, Formatter};
	use std::path::PathBuf;
	use std::sync::Arc;

	struct FailingSink;

	impl Sink for FailingSink {
		fn append(&self, _data: &[u8]) -> Result<(), Error> {
			Err(err!(ErrKind::IO, "disk full"))
		}
	}

	struct Unrenderable;

	impl Display for Unrenderable {
		fn fmt(&self, _: &mut Formatter<'_>) -> std::fmt::Result {
			Err(std::fmt::Error)
		}
	}

	fn setup_test_dir(dir: &str) -> Result<(), Error> {
		let _ = std::fs::remove_dir_all(dir);
		std::fs::create_dir_all(dir)?;
		Ok(())
	}

	fn tear_down_test_dir(dir: &str) -> Result<(), Error> {
		std::fs::remove_dir_all(dir)?;
		Ok(())
	}

	// a logger writing to a memory sink with a recording console
	fn test_logger(
		console: RecordingConsole,
	) -> (LevelLogger, Arc<MemorySink>, Arc<RecordingConsole>) {
		let sink = Arc::new(MemorySink::new());
		let console = Arc::new(console);
		let mut logger = LevelLogger::new();
		logger.set_sink(Some(sink.clone()));
		logger.set_console(console.clone());
		(logger, sink, console)
	}

	fn last_line(sink: &MemorySink) -> Result<String, Error> {
		match sink.lines()?.pop() {
			Some(line) => Ok(line),
			None => Err(err!(ErrKind::Test, "sink is empty")),
		}
	}

	#[test]
	fn test_defaults() -> Result<(), Error> {
		let logger = LevelLogger::new();
		assert!(logger.is_quiet());
		assert!(logger.sink().is_none());
		assert!(logger.file().is_none());
		assert_eq!(logger.min_level(), None);
		assert_eq!(logger.generation(), 0);
		assert_eq!(logger.indent(), "\t");
		assert!(logger.last_record().is_none());
		Ok(())
	}

	#[test]
	fn test_level_filter() -> Result<(), Error> {
		for threshold in Severity::ALL {
			for level in Severity::ALL {
				let (mut logger, sink, _) = test_logger(RecordingConsole::new(true, false, false));
				logger.set_min_level(threshold)?;
				logger.log(level, "msg")?;
				let written = sink.lines()?.len() == 1;
				assert_eq!(written, level.ordinal() <= threshold.ordinal());
			}
		}
		Ok(())
	}

	#[test]
	fn test_no_threshold_logs_nothing() -> Result<(), Error> {
		let (mut logger, sink, console) = test_logger(RecordingConsole::new(true, true, true));
		logger.set_quiet(false);
		for level in Severity::ALL {
			logger.log(level, "nothing")?;
		}
		assert!(sink.lines()?.is_empty());
		assert!(console.writes()?.is_empty());
		assert_eq!(
			logger.last_record(),
			Some(&LastRecord {
				level: Severity::Debug,
				message: "nothing".to_string()
			})
		);
		Ok(())
	}

	#[test]
	fn test_info_threshold() -> Result<(), Error> {
		let (mut logger, sink, _) = test_logger(RecordingConsole::new(true, false, false));
		logger.set_min_level("info")?;
		assert_eq!(logger.min_level(), Some(Severity::Info));

		logger.log(Severity::Debug, "x")?;
		assert!(sink.lines()?.is_empty());

		logger.log("warning", "y")?;
		let line = last_line(&sink)?;
		assert!(line.contains("[WARNING]"));
		assert!(line.ends_with(" y"));

		logger.log(Severity::Info, "at threshold")?;
		assert!(last_line(&sink)?.ends_with("[INFO] at threshold"));
		assert_eq!(sink.lines()?.len(), 2);
		Ok(())
	}

	#[test]
	fn test_invalid_level() -> Result<(), Error> {
		let (mut logger, sink, _) = test_logger(RecordingConsole::new(true, false, false));
		let res = logger.set_min_level("verbose");
		assert!(matches!(res.unwrap_err().kind(), ErrorKind::Configuration(_)));
		assert_eq!(logger.min_level(), None);

		// validated even though nothing would be logged without a threshold
		let res = logger.log("verbose", "hello");
		assert!(matches!(res.unwrap_err().kind(), ErrorKind::Configuration(_)));
		assert!(logger.last_record().is_none());

		logger.set_min_level(Severity::Debug)?;
		let res = logger.log(String::from("INFO"), "hello");
		assert!(matches!(res.unwrap_err().kind(), ErrorKind::Configuration(_)));
		assert!(sink.lines()?.is_empty());
		Ok(())
	}

	#[test]
	fn test_render_error() -> Result<(), Error> {
		let (mut logger, sink, _) = test_logger(RecordingConsole::new(true, false, false));
		logger.set_min_level(Severity::Debug)?;
		logger.info("before")?;

		let res = logger.info(&Unrenderable);
		assert!(matches!(res.unwrap_err().kind(), ErrorKind::Render(_)));
		assert_eq!(logger.last_record().map(|r| r.message.as_str()), Some("before"));

		let res = logger.append(&Unrenderable);
		assert!(matches!(res.unwrap_err().kind(), ErrorKind::Render(_)));
		assert_eq!(sink.lines()?.len(), 1);

		// any Display value is a valid message
		logger.info(&42u32)?;
		assert!(last_line(&sink)?.ends_with("[INFO] 42"));
		Ok(())
	}

	#[test]
	fn test_continuation_without_record() -> Result<(), Error> {
		let mut logger = LevelLogger::new();
		let res = logger.append("b");
		assert!(matches!(res.unwrap_err().kind(), ErrorKind::IllegalState(_)));
		let res = logger.reply("b");
		assert!(matches!(res.unwrap_err().kind(), ErrorKind::IllegalState(_)));

		// a child does not inherit the parent's record
		logger.log(Severity::Info, "a")?;
		let mut child = logger.spawn_child();
		let res = child.reply("b");
		assert!(matches!(res.unwrap_err().kind(), ErrorKind::IllegalState(_)));
		Ok(())
	}

	#[test]
	fn test_append_and_reply() -> Result<(), Error> {
		let (mut logger, sink, _) = test_logger(RecordingConsole::new(true, false, false));
		logger.set_min_level(Severity::Debug)?;

		logger.log(Severity::Notice, "a")?;
		logger.append("b")?;
		let line = last_line(&sink)?;
		assert!(line.ends_with("[NOTICE] ab"));

		logger.reply("c")?;
		assert!(last_line(&sink)?.ends_with("[NOTICE] ab:c"));
		assert_eq!(
			logger.last_record(),
			Some(&LastRecord {
				level: Severity::Notice,
				message: "ab:c".to_string()
			})
		);

		logger.log(Severity::Error, "connecting")?;
		logger.reply("failed")?;
		assert!(last_line(&sink)?.ends_with("[ERROR] connecting:failed"));
		assert_eq!(sink.lines()?.len(), 5);
		Ok(())
	}

	#[test]
	fn test_continue_filtered_record() -> Result<(), Error> {
		let (mut logger, sink, _) = test_logger(RecordingConsole::new(true, false, false));
		logger.set_min_level(Severity::Info)?;

		logger.debug("hidden")?;
		assert!(sink.lines()?.is_empty());

		// the filtered record is still the one continued, at its own level
		logger.append(" more")?;
		assert!(sink.lines()?.is_empty());

		logger.set_min_level(Severity::Debug)?;
		logger.reply("shown")?;
		assert!(last_line(&sink)?.ends_with("[DEBUG] hidden more:shown"));
		Ok(())
	}

	#[test]
	fn test_context() -> Result<(), Error> {
		let (mut logger, sink, _) = test_logger(RecordingConsole::new(true, false, false));
		logger.set_min_level(Severity::Debug)?;

		let mut context = Context::new();
		context.insert("k".to_string(), Value::String("v".to_string()));
		logger.log_with(Severity::Info, "hello", &context)?;
		assert!(last_line(&sink)?.ends_with("[INFO] hello Context: {\"k\":\"v\"}"));

		logger.log_with(Severity::Info, "empty", &Context::new())?;
		assert!(last_line(&sink)?.ends_with("[INFO] empty"));

		let mut context = Context::new();
		context.insert("id".to_string(), Value::from(7));
		logger.log(Severity::Info, "request")?;
		logger.reply_with("done", &context)?;
		assert!(last_line(&sink)?.ends_with("request:done Context: {\"id\":7}"));
		logger.append_with("!", &context)?;
		assert!(last_line(&sink)?
			.ends_with("request:done Context: {\"id\":7}! Context: {\"id\":7}"));
		Ok(())
	}

	#[test]
	fn test_line_format() -> Result<(), Error> {
		let (mut logger, sink, _) = test_logger(RecordingConsole::new(true, false, false));
		logger.set_min_level(Severity::Debug)?;
		logger.warning("formatted")?;

		let contents = sink.contents()?;
		assert!(contents.ends_with('\n'));
		let line = last_line(&sink)?;

		// YYYY-MM-DD HH:MM:SS.ffffff +HHMM
		let date = &line[0..32];
		assert!(DateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S%.6f %z").is_ok());
		assert_eq!(
			&line[32..],
			format!(" [{}] [WARNING] formatted", std::process::id())
		);
		Ok(())
	}

	#[test]
	fn test_indentation() -> Result<(), Error> {
		let (mut logger, sink, _) = test_logger(RecordingConsole::new(true, false, false));
		logger.set_min_level(Severity::Debug)?;
		logger.set_indent("-", 2);
		assert_eq!(logger.indent(), "--");

		logger.info("root")?;
		assert!(last_line(&sink)?.ends_with("] [INFO] root"));

		let mut grandchild = logger.spawn_child().spawn_child();
		assert_eq!(grandchild.generation(), 2);
		grandchild.info("nested")?;
		assert!(last_line(&sink)?.ends_with("] [INFO] ---- nested"));

		let mut child = logger.spawn_child();
		child.set_indent("\t", 1);
		child.info("tabbed")?;
		assert!(last_line(&sink)?.ends_with("] [INFO] \t tabbed"));
		Ok(())
	}

	#[test]
	fn test_spawn_child() -> Result<(), Error> {
		let (mut logger, sink, _) = test_logger(RecordingConsole::new(true, false, false));
		logger.set_min_level(Severity::Warning)?;
		logger.set_indent("..", 1);
		logger.error("parent")?;

		let mut child = logger.spawn_child();
		assert_eq!(child.generation(), 1);
		assert_eq!(child.min_level(), Some(Severity::Warning));
		assert_eq!(child.indent(), "..");
		assert!(child.is_quiet());
		assert!(child.last_record().is_none());

		// snapshot: later changes to the parent are not seen by the child
		logger.set_min_level(Severity::Emergency)?;
		logger.set_indent("##", 1);
		logger.set_quiet(false);
		assert_eq!(child.min_level(), Some(Severity::Warning));
		assert_eq!(child.indent(), "..");
		assert!(child.is_quiet());

		// but the sink is shared
		child.warning("child")?;
		assert!(last_line(&sink)?.ends_with("[WARNING] .. child"));
		assert_eq!(
			logger.last_record().map(|r| r.message.as_str()),
			Some("parent")
		);

		let mut generation = child.generation();
		let mut current = child.spawn_child();
		for _ in 0..5 {
			assert_eq!(current.generation(), generation + 1);
			generation = current.generation();
			current = current.spawn_child();
		}
		Ok(())
	}

	#[test]
	fn test_quiet() -> Result<(), Error> {
		let (mut logger, sink, console) = test_logger(RecordingConsole::new(true, true, true));
		logger.set_min_level(Severity::Debug)?;
		logger.critical("only in the sink")?;
		assert_eq!(sink.lines()?.len(), 1);
		assert!(console.writes()?.is_empty());
		Ok(())
	}

	#[test]
	fn test_non_terminal_host() -> Result<(), Error> {
		let (mut logger, sink, console) = test_logger(RecordingConsole::new(false, true, true));
		logger.set_min_level(Severity::Debug)?;
		logger.set_quiet(false);
		logger.error("request failed")?;

		let writes = console.writes()?;
		assert_eq!(writes.len(), 1);
		let (stream, text) = &writes[0];
		assert_eq!(*stream, Stream::Stdout);
		assert_eq!(text, &sink.contents()?);
		// no pid outside of a terminal host
		assert_eq!(&text[32..], " [ERROR] request failed\n");
		Ok(())
	}

	#[test]
	fn test_non_interactive_stream() -> Result<(), Error> {
		let (mut logger, sink, console) = test_logger(RecordingConsole::new(true, true, false));
		logger.set_min_level(Severity::Debug)?;
		logger.set_quiet(false);

		logger.alert("plain")?;
		let writes = console.writes()?;
		assert_eq!(writes.len(), 1);
		assert_eq!(writes[0].0, Stream::Stdout);
		assert_eq!(writes[0].1, sink.contents()?);
		assert!(!writes[0].1.contains('\x1b'));
		Ok(())
	}

	#[test]
	fn test_colored_output() -> Result<(), Error> {
		let (mut logger, _, console) = test_logger(RecordingConsole::new(true, true, true));
		logger.set_min_level(Severity::Debug)?;
		logger.set_quiet(false);

		logger.log(Severity::Error, "boom")?;
		logger.log(Severity::Info, "fine")?;
		let mut child = logger.spawn_child();
		child.debug("deeper")?;

		let writes = console.writes()?;
		assert_eq!(writes.len(), 3);

		let (stream, text) = &writes[0];
		assert_eq!(*stream, Stream::Stderr);
		assert!(text.ends_with(&format!(
			"[{}] \x1b[45m[ERROR]\x1b[0m \x1b[95mboom\x1b[0m\n",
			std::process::id()
		)));

		let (stream, text) = &writes[1];
		assert_eq!(*stream, Stream::Stdout);
		assert!(text.ends_with("\x1b[42m[INFO]\x1b[0m \x1b[92mfine\x1b[0m\n"));

		// the indent is not colored
		let (stream, text) = &writes[2];
		assert_eq!(*stream, Stream::Stdout);
		assert!(text.ends_with("\x1b[46m[DEBUG]\x1b[0m \t \x1b[96mdeeper\x1b[0m\n"));
		Ok(())
	}

	#[test]
	fn test_sink_failure() -> Result<(), Error> {
		let console = Arc::new(RecordingConsole::new(true, true, true));
		let mut logger = LevelLogger::new();
		logger.set_console(console.clone());
		logger.set_sink(Some(Arc::new(FailingSink)));
		logger.set_min_level(Severity::Debug)?;
		logger.set_quiet(false);

		let res = logger.info("lost");
		assert!(matches!(res.unwrap_err().kind(), ErrorKind::IO(_)));
		assert!(console.writes()?.is_empty());
		assert_eq!(
			logger.last_record().map(|r| r.message.as_str()),
			Some("lost")
		);

		let sink = Arc::new(MemorySink::new());
		logger.set_sink(Some(sink.clone()));
		logger.append(" and found")?;
		assert!(last_line(&sink)?.ends_with("[INFO] lost and found"));
		Ok(())
	}

	#[test]
	fn test_config_options() -> Result<(), Error> {
		const TEST_DIR: &str = ".test_config_options.nestlog";
		setup_test_dir(TEST_DIR)?;
		let path = PathBuf::from(format!("{}/options.log", TEST_DIR));

		let mut logger = LevelLogger::new();
		logger.set_config_option(LogConfigOption::MinLevel(Some(Severity::Notice)))?;
		logger.set_config_option(LogConfigOption::Indent("  ".to_string()))?;
		logger.set_config_option(LogConfigOption::Quiet(true))?;
		logger.set_config_option(LogConfigOption::FilePath(Some(path.clone())))?;

		assert_eq!(
			logger.get_config_option(LogConfigOptionName::MinLevel),
			LogConfigOption::MinLevel(Some(Severity::Notice))
		);
		assert_eq!(
			logger.get_config_option(LogConfigOptionName::Indent),
			LogConfigOption::Indent("  ".to_string())
		);
		assert_eq!(
			logger.get_config_option(LogConfigOptionName::Quiet),
			LogConfigOption::Quiet(true)
		);
		assert_eq!(
			logger.get_config_option(LogConfigOptionName::FilePath),
			LogConfigOption::FilePath(Some(path.clone()))
		);
		assert_eq!(logger.file(), Some(&path));

		logger.notice("to file")?;
		logger.info("filtered")?;
		let contents = std::fs::read_to_string(&path)?;
		assert_eq!(contents.lines().count(), 1);
		assert!(contents.ends_with("[NOTICE] to file\n"));

		logger.set_config_option(LogConfigOption::FilePath(None))?;
		assert!(logger.sink().is_none());
		logger.notice("dropped")?;
		assert_eq!(std::fs::read_to_string(&path)?.lines().count(), 1);

		logger.set_config_option(LogConfigOption::MinLevel(None))?;
		assert_eq!(logger.min_level(), None);

		let bad = PathBuf::from(format!("{}/missing/options.log", TEST_DIR));
		let res = logger.set_config_option(LogConfigOption::FilePath(Some(bad)));
		assert!(matches!(res.unwrap_err().kind(), ErrorKind::IO(_)));

		tear_down_test_dir(TEST_DIR)?;
		Ok(())
	}

	#[test]
	fn test_log_builder() -> Result<(), Error> {
		let logger = LogBuilder::build(LogConfig::default())?;
		assert!(logger.is_quiet());
		assert_eq!(logger.min_level(), None);
		assert_eq!(logger.indent(), "\t");
		assert!(logger.sink().is_none());

		let logger = LogBuilder::build(LogConfig {
			min_level: LogConfigOption::MinLevel(Some(Severity::Alert)),
			quiet: LogConfigOption::Quiet(false),
			..Default::default()
		})?;
		assert_eq!(logger.min_level(), Some(Severity::Alert));
		assert!(!logger.is_quiet());

		let res = LogBuilder::build(LogConfig {
			indent: LogConfigOption::Quiet(false),
			..Default::default()
		});
		assert!(matches!(res.unwrap_err().kind(), ErrorKind::Configuration(_)));

		let res = LogBuilder::build(LogConfig {
			file_path: LogConfigOption::MinLevel(None),
			..Default::default()
		});
		assert!(matches!(res.unwrap_err().kind(), ErrorKind::Configuration(_)));
		Ok(())
	}

	#[test]
	fn test_file_logging() -> Result<(), Error> {
		const TEST_DIR: &str = ".test_file_logging.nestlog";
		setup_test_dir(TEST_DIR)?;
		let path = PathBuf::from(format!("{}/file.log", TEST_DIR));

		let mut logger = LevelLogger::new();
		logger.set_file(Some(path.clone()))?;
		logger.set_min_level(Severity::Debug)?;
		logger.info("hello")?;
		let mut child = logger.spawn_child();
		child.info("it's child")?;
		child.reply("done")?;

		let contents = std::fs::read_to_string(&path)?;
		let lines: Vec<&str> = contents.lines().collect();
		assert_eq!(lines.len(), 3);
		assert!(lines[0].ends_with("[INFO] hello"));
		assert!(lines[1].ends_with("[INFO] \t it's child"));
		assert!(lines[2].ends_with("[INFO] \t it's child:done"));

		tear_down_test_dir(TEST_DIR)?;
		Ok(())
	}
}
