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

//! Port based routing of chunks to dissectors

use crate::error::{DissectorError, DissectorResult};
use crate::types::{Chunk, ConnectionIdentity};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::debug;

/// An application protocol dissector bound to a TCP port
pub trait Dissector: Send + Sync {
    /// Short protocol name
    fn name(&self) -> &'static str;

    /// TCP port the protocol's servers listen on
    fn port(&self) -> u16;

    /// Dissect one chunk of a connection
    fn process(&self, chunk: &Chunk) -> DissectorResult<()>;

    /// Called when a connection routed to this dissector has ended
    fn connection_closed(&self, _key: &ConnectionIdentity) {}
}

/// Routes chunks to the dissector registered for either endpoint's port
#[derive(Default)]
pub struct Dispatcher {
    routes: HashMap<u16, Arc<dyn Dissector>>,
}

impl Dispatcher {
    /// Create a dispatcher with no dissectors
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dissector on its port
    ///
    /// # Errors
    ///
    /// Fails with [`DissectorError::PortInUse`] when the port already has a dissector.
    pub fn register(&mut self, dissector: Arc<dyn Dissector>) -> DissectorResult<()> {
        let port = dissector.port();
        if let Some(existing) = self.routes.get(&port) {
            return Err(DissectorError::PortInUse {
                port,
                existing: existing.name(),
            });
        }
        debug!(port, name = dissector.name(), "dissector registered");
        self.routes.insert(port, dissector);
        Ok(())
    }

    /// Dissector registered on a port
    pub fn lookup(&self, port: u16) -> Option<&Arc<dyn Dissector>> {
        self.routes.get(&port)
    }

    /// Number of registered dissectors
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if no dissector is registered
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Hand a chunk to its dissector
    ///
    /// Returns `false` when no registered dissector handles either port.
    pub fn dispatch(&self, chunk: &Chunk) -> DissectorResult<bool> {
        match self.route(chunk.source, chunk.destination) {
            Some(dissector) => {
                dissector.process(chunk)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Tell the responsible dissector that a connection has ended
    pub fn connection_closed(&self, a: SocketAddr, b: SocketAddr) {
        if let Some(dissector) = self.route(a, b) {
            dissector.connection_closed(&ConnectionIdentity::new(a, b));
        }
    }

    fn route(&self, source: SocketAddr, destination: SocketAddr) -> Option<&Arc<dyn Dissector>> {
        self.routes
            .get(&source.port())
            .or_else(|| self.routes.get(&destination.port()))
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ports: Vec<_> = self
            .routes
            .iter()
            .map(|(port, dissector)| (*port, dissector.name()))
            .collect();
        ports.sort_unstable();
        f.debug_struct("Dispatcher").field("routes", &ports).finish()
    }
}
