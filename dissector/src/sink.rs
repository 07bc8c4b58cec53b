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

//! Output sinks for dissector events

use crate::event::{BannerEvent, CredentialEvent, DissectorEvent};
use std::sync::Mutex;
use tracing::info;

/// Receiver of dissector events
///
/// All methods have default implementations that do nothing.
pub trait EventSink: Send + Sync {
    /// Called when a user and password were captured
    fn on_credentials(&self, _event: &CredentialEvent) {}

    /// Called when a server banner was captured
    fn on_banner(&self, _event: &BannerEvent) {}
}

/// Sink that logs one line per event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn on_credentials(&self, event: &CredentialEvent) {
        info!("{}", event);
    }

    fn on_banner(&self, event: &BannerEvent) {
        info!("{}", event);
    }
}

/// Sink that keeps every event in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<DissectorEvent>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All events received so far, oldest first
    pub fn events(&self) -> Vec<DissectorEvent> {
        self.lock().clone()
    }

    /// Credential events received so far
    pub fn credentials(&self) -> Vec<CredentialEvent> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                DissectorEvent::Credentials(event) => Some(event.clone()),
                DissectorEvent::Banner(_) => None,
            })
            .collect()
    }

    /// Banner events received so far
    pub fn banners(&self) -> Vec<BannerEvent> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                DissectorEvent::Banner(event) => Some(event.clone()),
                DissectorEvent::Credentials(_) => None,
            })
            .collect()
    }

    /// Remove and return all events
    pub fn drain(&self) -> Vec<DissectorEvent> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<DissectorEvent>> {
        // Events are pushed whole, so a poisoned Vec is still consistent.
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn push(&self, event: DissectorEvent) {
        self.lock().push(event);
    }
}

impl EventSink for MemorySink {
    fn on_credentials(&self, event: &CredentialEvent) {
        self.push(event.clone().into());
    }

    fn on_banner(&self, event: &BannerEvent) {
        self.push(event.clone().into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn server() -> std::net::SocketAddr {
        "172.16.0.9:23".parse().unwrap()
    }

    #[test]
    fn test_memory_sink_keeps_order() {
        let sink = MemorySink::new();
        sink.on_banner(&BannerEvent::new(server(), "hello"));
        sink.on_credentials(&CredentialEvent::new(server(), "root", "toor"));

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], DissectorEvent::Banner(_)));
        assert_eq!(sink.credentials()[0].user, "root");
        assert_eq!(sink.banners()[0].banner, "hello");

        assert_eq!(sink.drain().len(), 2);
        assert!(sink.events().is_empty());
    }

    #[test]
    #[traced_test]
    fn test_tracing_sink_logs_event_line() {
        let sink = TracingSink;
        sink.on_credentials(&CredentialEvent::new(server(), "root", "toor"));
        assert!(logs_contain(
            "TELNET : 172.16.0.9:23 -> USER: root  PASS: toor"
        ));
    }
}
