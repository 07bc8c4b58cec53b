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

//! Lock-free metrics for the Telnet dissector

use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free dissector metrics
///
/// All metrics are stored as atomics and can be updated from any number of threads
/// dissecting different connections. Use [`DissectorMetrics::snapshot`] to read them.
#[derive(Debug, Default)]
pub struct DissectorMetrics {
    chunks: AtomicU64,
    empty_chunks: AtomicU64,
    command_only_chunks: AtomicU64,
    sessions_created: AtomicU64,
    sessions_reset: AtomicU64,
    credentials_captured: AtomicU64,
    banners_captured: AtomicU64,
}

impl DissectorMetrics {
    /// Create a new metrics instance
    pub fn new() -> Self {
        Self::default()
    }

    // Chunk tracking

    /// Record a chunk handed to the dissector
    pub fn chunk_seen(&self) {
        self.chunks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a chunk without payload
    pub fn empty_chunk(&self) {
        self.empty_chunks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a chunk made only of Telnet commands
    pub fn command_only_chunk(&self) {
        self.command_only_chunks.fetch_add(1, Ordering::Relaxed);
    }

    // Session tracking

    /// Record a session being created
    pub fn session_created(&self) {
        self.sessions_created.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a session dropped after a failed login
    pub fn session_reset(&self) {
        self.sessions_reset.fetch_add(1, Ordering::Relaxed);
    }

    // Output tracking

    /// Record a credential pair being captured
    pub fn credentials_captured(&self) {
        self.credentials_captured.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a banner being captured
    pub fn banner_captured(&self) {
        self.banners_captured.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a point in time copy of all metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            chunks: self.chunks.load(Ordering::Relaxed),
            empty_chunks: self.empty_chunks.load(Ordering::Relaxed),
            command_only_chunks: self.command_only_chunks.load(Ordering::Relaxed),
            sessions_created: self.sessions_created.load(Ordering::Relaxed),
            sessions_reset: self.sessions_reset.load(Ordering::Relaxed),
            credentials_captured: self.credentials_captured.load(Ordering::Relaxed),
            banners_captured: self.banners_captured.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of dissector metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Chunks handed to the dissector
    pub chunks: u64,
    /// Chunks without payload
    pub empty_chunks: u64,
    /// Chunks made only of Telnet commands
    pub command_only_chunks: u64,
    /// Sessions created
    pub sessions_created: u64,
    /// Sessions dropped after a failed login
    pub sessions_reset: u64,
    /// Credential pairs captured
    pub credentials_captured: u64,
    /// Banners captured
    pub banners_captured: u64,
}
