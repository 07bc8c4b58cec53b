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

//! Telnet credential and banner dissector

use crate::config::DissectorConfig;
use crate::detector::LoginFailureDetector;
use crate::dispatch::Dissector;
use crate::error::DissectorResult;
use crate::event::{BannerEvent, CredentialEvent};
use crate::metrics::DissectorMetrics;
use crate::session::{Accumulation, Session};
use crate::sink::EventSink;
use crate::store::SessionStore;
use crate::types::{Chunk, ConnectionIdentity, Direction};
use metrics::counter;
use snoopix_telnetscan::{
    consts, contains_line_break, normalize_line_breaks, readable_text, skip_commands,
};
use std::sync::Arc;
use tracing::{debug, trace};

/// Passive Telnet dissector
///
/// Fed the chunks of observed Telnet connections, in TCP order per connection, it
/// rebuilds the login typed by the client and reports the first line sent by the server.
///
/// Per chunk:
///
/// 1. Empty chunks (pure ACKs) are ignored.
/// 2. Leading negotiation sequences are skipped; a chunk made only of them is ignored.
/// 3. Server chunks reporting a failed login drop the connection's session so collection
///    restarts with the next typed character.
/// 4. Client chunks contribute their leading character to the session buffer. A chunk
///    carrying a line break ends processing, and splits the buffer into a
///    [`CredentialEvent`] when the password is complete.
/// 5. The first server chunk that gets this far becomes the [`BannerEvent`].
///
/// Only the first character of a client chunk is collected. Telnet echo normally sends
/// one keystroke per segment; any further characters in a chunk are dropped.
///
/// # Example
///
/// ```
/// use snoopix_dissector::{
///     Chunk, DissectorConfig, MemorySessionStore, MemorySink, TelnetDissector,
/// };
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let dissector = TelnetDissector::new(
///     DissectorConfig::default(),
///     Arc::new(MemorySessionStore::new()),
///     sink.clone(),
/// );
///
/// let client = "10.0.0.2:50000".parse().unwrap();
/// let server = "10.0.0.1:23".parse().unwrap();
/// for byte in b"root\rtoor\r" {
///     dissector.process(&Chunk::new(client, server, vec![*byte])).unwrap();
/// }
///
/// let credentials = sink.credentials();
/// assert_eq!(credentials[0].user, "root");
/// assert_eq!(credentials[0].pass, "toor");
/// ```
pub struct TelnetDissector {
    config: DissectorConfig,
    detector: LoginFailureDetector,
    store: Arc<dyn SessionStore>,
    sink: Arc<dyn EventSink>,
    metrics: Arc<DissectorMetrics>,
}

impl TelnetDissector {
    /// Name used when registering with a dispatcher
    pub const NAME: &'static str = "telnet";

    /// Create a dissector over a session store and an event sink
    ///
    /// The failed login pattern is compiled here, once.
    pub fn new(
        config: DissectorConfig,
        store: Arc<dyn SessionStore>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        let detector = LoginFailureDetector::new(&config.login_failure_pattern);
        Self {
            config,
            detector,
            store,
            sink,
            metrics: Arc::new(DissectorMetrics::new()),
        }
    }

    /// Current configuration
    pub fn config(&self) -> &DissectorConfig {
        &self.config
    }

    /// Dissector metrics
    pub fn metrics(&self) -> &Arc<DissectorMetrics> {
        &self.metrics
    }

    /// Dissect one chunk of a connection
    ///
    /// # Errors
    ///
    /// Fails only when the session store cannot persist state; see
    /// [`DissectorError::is_fatal`](crate::DissectorError::is_fatal).
    pub fn process(&self, chunk: &Chunk) -> DissectorResult<()> {
        self.metrics.chunk_seen();
        counter!("snoopix.telnet.chunks").increment(1);
        if chunk.payload.is_empty() {
            self.metrics.empty_chunk();
            counter!("snoopix.telnet.chunks.empty").increment(1);
            return Ok(());
        }

        let key = chunk.identity();
        let start = skip_commands(&chunk.payload);
        if start == chunk.payload.len() {
            self.metrics.command_only_chunk();
            counter!("snoopix.telnet.chunks.commands").increment(1);
            return Ok(());
        }
        let data = &chunk.payload[start..];

        let direction = chunk.direction(self.config.protocol_port);
        trace!(%key, %direction, len = data.len(), "telnet chunk");

        match direction {
            Direction::FromServer => {
                if self.detector.indicates_failed_login(readable_text(data)) {
                    self.reset_session(&key);
                }
                if self.config.capture_banner && self.mark_banner_captured_if_first(&key)? {
                    let event =
                        BannerEvent::new(chunk.server(direction), normalize_line_breaks(data));
                    debug!(%key, banner = %event.banner, "telnet banner");
                    self.metrics.banner_captured();
                    counter!("snoopix.telnet.banners").increment(1);
                    self.sink.on_banner(&event);
                }
            }
            Direction::FromClient => {
                self.collect(chunk, key, data)?;
            }
        }
        Ok(())
    }

    /// Forget everything about a connection that has ended
    pub fn connection_closed(&self, key: &ConnectionIdentity) {
        trace!(%key, "telnet connection closed");
        self.store.evict(key);
    }

    /// Return the connection's session, creating it from `first` if there is none
    ///
    /// Returns `None` when the session was just created; the character that created it
    /// needs no further handling.
    pub fn ensure_session(
        &self,
        key: ConnectionIdentity,
        first: char,
    ) -> DissectorResult<Option<Session>> {
        if let Some(session) = self.store.get(&key) {
            return Ok(Some(session));
        }

        self.store.put(Session::start(key, first))?;
        self.metrics.session_created();
        counter!("snoopix.telnet.sessions.created").increment(1);
        debug!(%key, "telnet session started");
        Ok(None)
    }

    /// Claim the banner of a connection
    ///
    /// Returns `true` for the first call per connection only.
    pub fn mark_banner_captured_if_first(&self, key: &ConnectionIdentity) -> DissectorResult<bool> {
        Ok(self.store.claim_banner(key)?)
    }

    fn reset_session(&self, key: &ConnectionIdentity) {
        if self.store.delete(key) {
            self.metrics.session_reset();
            counter!("snoopix.telnet.sessions.reset").increment(1);
            debug!(%key, "telnet login failed, session reset");
        }
    }

    /// Feed the leading character of a client chunk into the connection's session
    fn collect(&self, chunk: &Chunk, key: ConnectionIdentity, data: &[u8]) -> DissectorResult<()> {
        let Some(&byte) = data.first() else {
            return Ok(());
        };
        if byte == consts::NUL {
            return Ok(());
        }
        let ch = char::from(byte);

        let Some(mut session) = self.ensure_session(key, ch)? else {
            return Ok(());
        };

        match session.accumulate(ch, contains_line_break(readable_text(data))) {
            Accumulation::Finished => {}
            Accumulation::Appended | Accumulation::AwaitingInput => {
                self.store.put(session)?;
            }
            Accumulation::Captured(credentials) => {
                self.store.put(session)?;
                let event = CredentialEvent::new(
                    chunk.server(Direction::FromClient),
                    credentials.user,
                    credentials.pass,
                );
                debug!(%key, user = %event.user, "telnet credentials captured");
                self.metrics.credentials_captured();
                counter!("snoopix.telnet.credentials").increment(1);
                self.sink.on_credentials(&event);
            }
        }
        Ok(())
    }
}

impl Dissector for TelnetDissector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn port(&self) -> u16 {
        self.config.protocol_port
    }

    fn process(&self, chunk: &Chunk) -> DissectorResult<()> {
        TelnetDissector::process(self, chunk)
    }

    fn connection_closed(&self, key: &ConnectionIdentity) {
        TelnetDissector::connection_closed(self, key);
    }
}

impl std::fmt::Debug for TelnetDissector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelnetDissector")
            .field("config", &self.config)
            .field("detector", &self.detector)
            .field("sessions", &self.store.len())
            .finish_non_exhaustive()
    }
}
