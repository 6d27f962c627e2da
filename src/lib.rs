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

//! nestlog is a leveled logger whose lines are indented by the nesting depth of the logger
//! that wrote them. See [`nestlog_log`] for the logger and [`nestlog_err`] for its errors.

pub use nestlog_err::{err, map_err, ErrKind, Error, ErrorKind};
pub use nestlog_log::*;
