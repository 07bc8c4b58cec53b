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

//! Connection scoped state storage

use crate::error::{StoreError, StoreResult};
use crate::session::Session;
use crate::types::ConnectionIdentity;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Storage for per-connection dissector state
///
/// Each operation must be atomic for its key. Different keys need no coordination, so
/// connections can be dissected in parallel as long as one connection's chunks are fed
/// in order by a single caller.
pub trait SessionStore: Send + Sync {
    /// Fetch the session for a connection
    fn get(&self, key: &ConnectionIdentity) -> Option<Session>;

    /// Insert or replace the session for its connection
    ///
    /// Either the session is stored or the store is left unchanged.
    fn put(&self, session: Session) -> StoreResult<()>;

    /// Remove the session for a connection, returning whether one existed
    fn delete(&self, key: &ConnectionIdentity) -> bool;

    /// Claim the banner for a connection
    ///
    /// Returns `true` exactly once per connection, for the first caller.
    fn claim_banner(&self, key: &ConnectionIdentity) -> StoreResult<bool>;

    /// Drop all state of a connection that has ended
    fn evict(&self, key: &ConnectionIdentity);

    /// Number of connections with a session
    fn len(&self) -> usize;

    /// Check if no connection has a session
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory [`SessionStore`] backed by concurrent maps
///
/// Occupancy is counted apart from the maps; a slot is reserved atomically before a new
/// connection is inserted.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: DashMap<ConnectionIdentity, Session>,
    banners: DashMap<ConnectionIdentity, ()>,
    session_slots: AtomicUsize,
    banner_slots: AtomicUsize,
    max_sessions: Option<usize>,
}

impl MemorySessionStore {
    /// Create an unbounded store
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of connections tracked at once
    ///
    /// Applies to sessions and banner states separately.
    pub fn with_max_sessions(mut self, max: usize) -> Self {
        self.max_sessions = Some(max);
        self
    }

    /// Number of connections whose banner was claimed
    pub fn banner_count(&self) -> usize {
        self.banners.len()
    }

    /// Take one slot from `slots`, failing when the store is full
    fn reserve(&self, slots: &AtomicUsize) -> StoreResult<()> {
        let max = self.max_sessions.unwrap_or(usize::MAX);
        slots
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |used| {
                (used < max).then_some(used + 1)
            })
            .map(|_| ())
            .map_err(|_| StoreError::CapacityExhausted(max))
    }

    fn release(slots: &AtomicUsize) {
        slots.fetch_sub(1, Ordering::AcqRel);
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &ConnectionIdentity) -> Option<Session> {
        self.sessions.get(key).map(|entry| entry.value().clone())
    }

    fn put(&self, session: Session) -> StoreResult<()> {
        match self.sessions.entry(session.key()) {
            Entry::Occupied(mut entry) => {
                entry.insert(session);
            }
            Entry::Vacant(entry) => {
                self.reserve(&self.session_slots)?;
                entry.insert(session);
            }
        }
        Ok(())
    }

    fn delete(&self, key: &ConnectionIdentity) -> bool {
        let removed = self.sessions.remove(key).is_some();
        if removed {
            Self::release(&self.session_slots);
        }
        removed
    }

    fn claim_banner(&self, key: &ConnectionIdentity) -> StoreResult<bool> {
        match self.banners.entry(*key) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(entry) => {
                self.reserve(&self.banner_slots)?;
                entry.insert(());
                Ok(true)
            }
        }
    }

    fn evict(&self, key: &ConnectionIdentity) {
        self.delete(key);
        if self.banners.remove(key).is_some() {
            Self::release(&self.banner_slots);
        }
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}
