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

//! Core types for the Telnet dissector

use bytes::Bytes;
use std::fmt;
use std::net::SocketAddr;

/// Direction-independent identifier for a TCP connection
///
/// Built from both endpoints in a canonical order, so a chunk travelling client to
/// server and one travelling server to client resolve to the same identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionIdentity {
    low: SocketAddr,
    high: SocketAddr,
}

impl ConnectionIdentity {
    /// Create an identity from the two endpoints of a connection, in any order
    pub fn new(a: SocketAddr, b: SocketAddr) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }
}

impl fmt::Display for ConnectionIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<->{}", self.low, self.high)
    }
}

/// Which side of the connection sent a chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Sent by the server, towards the client
    FromServer,
    /// Sent by the client, towards the server
    FromClient,
}

impl Direction {
    /// Classify a chunk by its source port
    ///
    /// A chunk whose source port is the protocol's well known port came from the server.
    pub fn classify(source_port: u16, protocol_port: u16) -> Self {
        if is_from_server(source_port, protocol_port) {
            Self::FromServer
        } else {
            Self::FromClient
        }
    }

    /// Check if this is the server to client direction
    pub fn is_from_server(self) -> bool {
        self == Self::FromServer
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FromServer => write!(f, "server->client"),
            Self::FromClient => write!(f, "client->server"),
        }
    }
}

/// Check if a chunk with the given source port was sent by the server
pub fn is_from_server(source_port: u16, protocol_port: u16) -> bool {
    source_port == protocol_port
}

/// One reassembled, in-order piece of a TCP stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Sending endpoint
    pub source: SocketAddr,
    /// Receiving endpoint
    pub destination: SocketAddr,
    /// TCP payload, possibly empty (pure ACK)
    pub payload: Bytes,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(source: SocketAddr, destination: SocketAddr, payload: impl Into<Bytes>) -> Self {
        Self {
            source,
            destination,
            payload: payload.into(),
        }
    }

    /// Identity of the connection this chunk belongs to
    pub fn identity(&self) -> ConnectionIdentity {
        ConnectionIdentity::new(self.source, self.destination)
    }

    /// Direction of this chunk relative to the given protocol port
    pub fn direction(&self, protocol_port: u16) -> Direction {
        Direction::classify(self.source.port(), protocol_port)
    }

    /// Server endpoint of the connection, given the direction of this chunk
    pub fn server(&self, direction: Direction) -> SocketAddr {
        match direction {
            Direction::FromServer => self.source,
            Direction::FromClient => self.destination,
        }
    }

    /// Check if either endpoint uses `port`
    pub fn involves_port(&self, port: u16) -> bool {
        self.source.port() == port || self.destination.port() == port
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> SocketAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_identity_is_direction_independent() {
        let client = addr("10.0.0.5:40312");
        let server = addr("10.0.0.1:23");
        assert_eq!(
            ConnectionIdentity::new(client, server),
            ConnectionIdentity::new(server, client)
        );
        assert_ne!(
            ConnectionIdentity::new(client, server),
            ConnectionIdentity::new(addr("10.0.0.5:40313"), server)
        );
    }

    #[test]
    fn test_identity_display() {
        let id = ConnectionIdentity::new(addr("10.0.0.5:40312"), addr("10.0.0.1:23"));
        assert_eq!(id.to_string(), "10.0.0.1:23<->10.0.0.5:40312");
    }

    #[test]
    fn test_direction_classify() {
        assert!(is_from_server(23, 23));
        assert!(!is_from_server(40312, 23));
        assert_eq!(Direction::classify(23, 23), Direction::FromServer);
        assert_eq!(Direction::classify(1023, 23), Direction::FromClient);
        assert_eq!(Direction::classify(2323, 2323), Direction::FromServer);
    }

    #[test]
    fn test_chunk_server_endpoint() {
        let client = addr("10.0.0.5:40312");
        let server = addr("10.0.0.1:23");
        let up = Chunk::new(client, server, &b"a"[..]);
        let down = Chunk::new(server, client, &b"login: "[..]);

        assert_eq!(up.direction(23), Direction::FromClient);
        assert_eq!(down.direction(23), Direction::FromServer);
        assert_eq!(up.server(up.direction(23)), server);
        assert_eq!(down.server(down.direction(23)), server);
        assert_eq!(up.identity(), down.identity());
        assert!(up.involves_port(23));
        assert!(!up.involves_port(21));
    }
}
