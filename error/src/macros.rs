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

/// Build the specified [`crate::ErrorKind`] and convert it into an [`crate::Error`]. The desired
/// [`crate::ErrorKind`] is specified using the [`crate::ErrKind`] name enum.
///
/// Example:
///
///```
/// use nestlog_err::{Error, ErrorKind, ErrKind, err};
///
/// fn show_err_kind(do_error: bool) -> Result<(), Error> {
///     let e = err!(ErrKind::Configuration, "level is invalid");
///
///     if do_error {
///         return Err(e);
///     }
///
///     Ok(())
/// }
///
/// assert!(show_err_kind(true).is_err());
///```
#[macro_export]
macro_rules! err {
	($kind:expr, $msg:expr) => {{
		let error: $crate::Error = match $kind {
			$crate::ErrKind::IO => $crate::ErrorKind::IO($msg.to_string()).into(),
			$crate::ErrKind::Configuration => {
				$crate::ErrorKind::Configuration($msg.to_string()).into()
			}
			$crate::ErrKind::IllegalState => {
				$crate::ErrorKind::IllegalState($msg.to_string()).into()
			}
			$crate::ErrKind::Render => $crate::ErrorKind::Render($msg.to_string()).into(),
			$crate::ErrKind::Poison => $crate::ErrorKind::Poison($msg.to_string()).into(),
			$crate::ErrKind::Test => $crate::ErrorKind::Test($msg.to_string()).into(),
		};
		error
	}};
}

/// Map the specified error into the [`crate::ErrKind`] enum name from this crate.
/// Optionally specify an additional message to be included in the error.
///
/// Example:
///
///```
/// use nestlog_err::{Error, ErrorKind, ErrKind, map_err};
/// use std::fs::File;
///
/// fn show_map_err() -> Result<(), Error> {
///     let _file = map_err!(File::open("/path/to/something"), ErrKind::IO, "file open failed")?;
///     Ok(())
/// }
///
/// assert!(matches!(show_map_err().unwrap_err().kind(), ErrorKind::IO(_)));
///```
#[macro_export]
macro_rules! map_err {
	($in_err:expr, $kind:expr) => {{
		$crate::map_err!($in_err, $kind, "")
	}};
	($in_err:expr, $kind:expr, $msg:expr) => {{
		$in_err.map_err(|e| {
			let error: $crate::Error = match $kind {
				$crate::ErrKind::IO => $crate::ErrorKind::IO(format!("{}: {}", $msg, e)).into(),
				$crate::ErrKind::Configuration => {
					$crate::ErrorKind::Configuration(format!("{}: {}", $msg, e)).into()
				}
				$crate::ErrKind::IllegalState => {
					$crate::ErrorKind::IllegalState(format!("{}: {}", $msg, e)).into()
				}
				$crate::ErrKind::Render => {
					$crate::ErrorKind::Render(format!("{}: {}", $msg, e)).into()
				}
				$crate::ErrKind::Poison => {
					$crate::ErrorKind::Poison(format!("{}: {}", $msg, e)).into()
				}
				$crate::ErrKind::Test => $crate::ErrorKind::Test(format!("{}: {}", $msg, e)).into(),
			};
			error
		})
	}};
}
