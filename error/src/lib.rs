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

//! This crate includes the error structs, enums and macros used by the nestlog crates. It
//! offers wrappers around the rust failure crate. The [`crate::map_err`] macro can be used to
//! conveniently map errors from 3rd party crates into [`crate::ErrorKind`] in this crate. The
//! [`crate::err`] macro can be used to generate errors. In most cases errors should be created
//! using one of these two macros.
//!
//! # Examples
//!```
//! use nestlog_err::{Error, ErrorKind, ErrKind, err, map_err};
//! use std::fs::File;
//!
//! fn check_indent(indent: &str) -> Result<(), Error> {
//!     if indent.contains('\n') {
//!         return Err(err!(ErrKind::Configuration, "indent may not span lines"));
//!     }
//!     Ok(())
//! }
//!
//! fn open_log(path: &str) -> Result<File, Error> {
//!     // the text of the original error is included in the mapped error.
//!     map_err!(File::open(path), ErrKind::IO, "could not open log file")
//! }
//!
//! assert!(check_indent("\t").is_ok());
//! assert!(matches!(
//!     check_indent("\n").unwrap_err().kind(),
//!     ErrorKind::Configuration(_)
//! ));
//! assert!(open_log("/no/such/dir/x.log").is_err());
//!```

mod error;
mod macros;

pub use crate::error::{ErrKind, Error, ErrorKind};
