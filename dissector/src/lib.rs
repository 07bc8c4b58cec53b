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

//! # Snoopix Telnet Dissector
//!
//! Passive decoder that rebuilds Telnet logins from captured traffic.
//!
//! Telnet echoes keystrokes one segment at a time, so a user name and password never
//! appear in a single packet. [`TelnetDissector`] keeps a small state machine per
//! connection in a [`SessionStore`] and reports what it finds to an [`EventSink`]:
//!
//! - [`CredentialEvent`]: the `user` and `pass` typed by the client
//! - [`BannerEvent`]: the first line sent by the server
//!
//! # Architecture
//!
//! ```text
//! Dispatcher (port 23)
//!     ↓
//! TelnetDissector ── skip_commands → Direction ─┬─ LoginFailureDetector (server)
//!     │                                        ├─ Session accumulate   (client)
//!     │                                        └─ banner claim         (server)
//!     ↓
//! SessionStore / EventSink
//! ```
//!
//! Capture and TCP reassembly are not part of this crate: callers feed in-order
//! [`Chunk`]s per connection.
//!
//! # Example
//!
//! ```
//! use snoopix_dissector::{
//!     Chunk, DissectorConfig, Dispatcher, MemorySessionStore, TelnetDissector, TracingSink,
//! };
//! use std::sync::Arc;
//!
//! let dissector = TelnetDissector::new(
//!     DissectorConfig::default(),
//!     Arc::new(MemorySessionStore::new()),
//!     Arc::new(TracingSink),
//! );
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.register(Arc::new(dissector)).unwrap();
//!
//! let server = "10.0.0.1:23".parse().unwrap();
//! let client = "10.0.0.2:50000".parse().unwrap();
//! let routed = dispatcher
//!     .dispatch(&Chunk::new(server, client, &b"login: "[..]))
//!     .unwrap();
//! assert!(routed);
//! ```

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

mod config;
mod detector;
mod dispatch;
mod dissector;
mod error;
mod event;
mod metrics;
mod session;
mod sink;
mod store;
mod types;

pub use self::config::{DEFAULT_LOGIN_FAILURE_PATTERN, DissectorConfig};
pub use self::detector::LoginFailureDetector;
pub use self::dispatch::{Dispatcher, Dissector};
pub use self::dissector::TelnetDissector;
pub use self::error::{DissectorError, DissectorResult, StoreError, StoreResult};
pub use self::event::{BannerEvent, CredentialEvent, DissectorEvent};
pub use self::metrics::{DissectorMetrics, MetricsSnapshot};
pub use self::session::{Accumulation, Credentials, Session, SessionState, split_credentials};
pub use self::sink::{EventSink, MemorySink, TracingSink};
pub use self::store::{MemorySessionStore, SessionStore};
pub use self::types::{Chunk, ConnectionIdentity, Direction, is_from_server};
