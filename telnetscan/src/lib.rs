//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! # Snoopix Telnet Scanner
//!
//! Low level helpers for looking at raw Telnet traffic captured off the wire. Unlike a
//! codec, nothing here negotiates or keeps per-stream state: every function works on a
//! single captured chunk and never reads past the end of the slice it was handed.
//!
//! ## Command Skipping
//!
//! Telnet interleaves negotiation sequences with user data. [`skip_commands`] walks past
//! the leading run of them:
//!
//! - 3-byte negotiation: `IAC <DO|DONT|WILL|WONT> <option>`
//! - Subnegotiation: `IAC SB <option> <data...> IAC SE`
//!
//! A sequence that runs off the end of the chunk consumes the remainder of it.
//!
//! ```rust
//! use snoopix_telnetscan::{consts, skip_commands};
//!
//! let chunk = [consts::IAC, consts::DO, consts::option::ECHO, b'l', b'o', b'g'];
//! assert_eq!(skip_commands(&chunk), 3);
//! ```
//!
//! ## Readable Text
//!
//! Captured data is treated as NUL terminated text. [`readable_text`] trims a chunk at
//! its first NUL, [`contains_line_break`] looks for CR or LF and [`normalize_line_breaks`]
//! turns a chunk into a single display line.

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(clippy::module_name_repetitions)]

pub mod consts;
mod skip;
mod text;

pub use self::skip::skip_commands;
pub use self::text::{
    contains_line_break, find_line_break, is_line_break, normalize_line_breaks, readable_text,
};
