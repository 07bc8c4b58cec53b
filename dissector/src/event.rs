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

//! Events produced by the dissector

use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// A user and password observed on a connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialEvent {
    /// Address of the server the credentials were sent to
    pub server_address: IpAddr,
    /// Port of the server the credentials were sent to
    pub server_port: u16,
    /// Login name
    pub user: String,
    /// Password
    pub pass: String,
}

impl CredentialEvent {
    /// Create a credential event for a server endpoint
    pub fn new(server: SocketAddr, user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            server_address: server.ip(),
            server_port: server.port(),
            user: user.into(),
            pass: pass.into(),
        }
    }
}

impl fmt::Display for CredentialEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TELNET : {}:{} -> USER: {}  PASS: {}",
            self.server_address, self.server_port, self.user, self.pass
        )
    }
}

/// The first line a server sent on a connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerEvent {
    /// Address of the server
    pub server_address: IpAddr,
    /// Port of the server
    pub server_port: u16,
    /// Banner text with line breaks replaced by spaces
    pub banner: String,
}

impl BannerEvent {
    /// Create a banner event for a server endpoint
    pub fn new(server: SocketAddr, banner: impl Into<String>) -> Self {
        Self {
            server_address: server.ip(),
            server_port: server.port(),
            banner: banner.into(),
        }
    }
}

impl fmt::Display for BannerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TELNET : {}:{} -> BANNER: {}",
            self.server_address, self.server_port, self.banner
        )
    }
}

/// Any event produced by the dissector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DissectorEvent {
    /// Credentials were captured
    Credentials(CredentialEvent),
    /// A banner was captured
    Banner(BannerEvent),
}

impl fmt::Display for DissectorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credentials(event) => event.fmt(f),
            Self::Banner(event) => event.fmt(f),
        }
    }
}

impl From<CredentialEvent> for DissectorEvent {
    fn from(event: CredentialEvent) -> Self {
        Self::Credentials(event)
    }
}

impl From<BannerEvent> for DissectorEvent {
    fn from(event: BannerEvent) -> Self {
        Self::Banner(event)
    }
}
