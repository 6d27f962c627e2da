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

use crate::types::Sink;
use nestlog_err::{map_err, ErrKind, Error};
use std::fmt::{Debug, Formatter};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// A [`crate::Sink`] that appends to a file. The file is created if it does not exist and is
/// never truncated or rotated.
pub struct FileSink {
	path: PathBuf,
	file: File,
}

impl FileSink {
	/// Open `path` for appending.
	pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
		let path = path.as_ref().to_path_buf();
		let file = map_err!(
			OpenOptions::new().create(true).append(true).open(&path),
			ErrKind::IO,
			format!("could not open log file '{}'", path.display())
		)?;
		Ok(Self { path, file })
	}

	/// The path this sink appends to.
	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl Debug for FileSink {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "FileSink({})", self.path.display())
	}
}

impl Sink for FileSink {
	fn append(&self, data: &[u8]) -> Result<(), Error> {
		// each line goes out in a single write on an O_APPEND descriptor
		(&self.file).write_all(data)?;
		Ok(())
	}
}

/// A [`crate::Sink`] that collects lines in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
	buffer: RwLock<Vec<u8>>,
}

impl MemorySink {
	pub fn new() -> Self {
		Self::default()
	}

	/// Everything appended so far.
	pub fn contents(&self) -> Result<String, Error> {
		let buffer = crate::lockr!(self.buffer)?;
		Ok(std::str::from_utf8(&buffer)?.to_string())
	}

	/// Everything appended so far, split into lines without their terminators.
	pub fn lines(&self) -> Result<Vec<String>, Error> {
		Ok(self.contents()?.lines().map(|l| l.to_string()).collect())
	}
}

impl Sink for MemorySink {
	fn append(&self, data: &[u8]) -> Result<(), Error> {
		crate::lockw!(self.buffer)?.extend_from_slice(data);
		Ok(())
	}
}
