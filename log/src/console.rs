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

use crate::types::{Console, Stream};
use nestlog_err::Error;
use std::io::{stderr, stdout, IsTerminal, Write};

/// The [`crate::Console`] of a regular executable: the std output streams, with
/// interactivity determined by [`std::io::IsTerminal`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl Console for StdConsole {
	fn in_terminal_host(&self) -> bool {
		true
	}

	fn is_interactive(&self, stream: Stream) -> bool {
		match stream {
			Stream::Stdout => stdout().is_terminal(),
			Stream::Stderr => stderr().is_terminal(),
		}
	}

	fn write(&self, stream: Stream, text: &str) -> Result<(), Error> {
		match stream {
			Stream::Stdout => {
				let mut out = stdout().lock();
				out.write_all(text.as_bytes())?;
				out.flush()?;
			}
			Stream::Stderr => {
				let mut err = stderr().lock();
				err.write_all(text.as_bytes())?;
				err.flush()?;
			}
		}
		Ok(())
	}
}

/// Console double that records every write.
#[cfg(test)]
pub(crate) struct RecordingConsole {
	terminal_host: bool,
	interactive_stdout: bool,
	interactive_stderr: bool,
	writes: std::sync::Mutex<Vec<(Stream, String)>>,
}

#[cfg(test)]
impl RecordingConsole {
	pub(crate) fn new(
		terminal_host: bool,
		interactive_stdout: bool,
		interactive_stderr: bool,
	) -> Self {
		Self {
			terminal_host,
			interactive_stdout,
			interactive_stderr,
			writes: std::sync::Mutex::new(vec![]),
		}
	}

	pub(crate) fn writes(&self) -> Result<Vec<(Stream, String)>, Error> {
		Ok(self.writes.lock()?.clone())
	}
}

#[cfg(test)]
impl Console for RecordingConsole {
	fn in_terminal_host(&self) -> bool {
		self.terminal_host
	}

	fn is_interactive(&self, stream: Stream) -> bool {
		match stream {
			Stream::Stdout => self.interactive_stdout,
			Stream::Stderr => self.interactive_stderr,
		}
	}

	fn write(&self, stream: Stream, text: &str) -> Result<(), Error> {
		self.writes.lock()?.push((stream, text.to_string()));
		Ok(())
	}
}
