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

//! Dissector configuration
//!
//! ```
//! use snoopix_dissector::DissectorConfig;
//!
//! let config = DissectorConfig::new()
//!     .with_protocol_port(2323)
//!     .with_banner_capture(false);
//! assert_eq!(config.protocol_port, 2323);
//! ```

use snoopix_telnetscan::consts;

/// Pattern recognizing a failed login in server text
///
/// Matches `login` at the very start of the text, or `incorrect`, `failed` or
/// `failure` anywhere, ignoring case.
pub const DEFAULT_LOGIN_FAILURE_PATTERN: &str = r"(?i)\Alogin|incorrect|failed|failure";

/// Telnet dissector configuration
#[derive(Debug, Clone)]
pub struct DissectorConfig {
    /// Well known server port, used to tell the two directions apart
    pub protocol_port: u16,

    /// Regular expression matched against server text to detect failed logins
    pub login_failure_pattern: String,

    /// Capture the first server line as a banner
    pub capture_banner: bool,
}

impl Default for DissectorConfig {
    fn default() -> Self {
        Self {
            protocol_port: consts::TELNET_PORT,
            login_failure_pattern: DEFAULT_LOGIN_FAILURE_PATTERN.to_string(),
            capture_banner: true,
        }
    }
}

impl DissectorConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server port
    pub fn with_protocol_port(mut self, port: u16) -> Self {
        self.protocol_port = port;
        self
    }

    /// Set the failed login pattern
    pub fn with_login_failure_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.login_failure_pattern = pattern.into();
        self
    }

    /// Enable or disable banner capture
    pub fn with_banner_capture(mut self, enabled: bool) -> Self {
        self.capture_banner = enabled;
        self
    }
}
