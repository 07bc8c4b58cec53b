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

//! Error types for the Telnet dissector

use thiserror::Error;

/// Result type for dissector operations
pub type DissectorResult<T> = std::result::Result<T, DissectorError>;

/// Result type for session store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Session store error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store cannot hold another connection
    #[error("Session store capacity ({0}) exhausted")]
    CapacityExhausted(usize),
}

/// Dissector error types
///
/// Malformed traffic is never an error; these only surface conditions the caller has to
/// act on.
#[derive(Debug, Error)]
pub enum DissectorError {
    /// The session store could not persist connection state
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A dissector is already registered for the port
    #[error("Port {port} already handled by {existing}")]
    PortInUse {
        /// The contested port
        port: u16,
        /// Name of the dissector already registered
        existing: &'static str,
    },
}

impl DissectorError {
    /// Check if the error is fatal
    ///
    /// Fatal errors mean connection state could not be kept and the caller should stop
    /// feeding traffic.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DissectorError::Store(_))
    }
}
