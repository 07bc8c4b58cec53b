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

//! Failed login detection on server text

use crate::config::DEFAULT_LOGIN_FAILURE_PATTERN;
use regex::bytes::Regex;
use tracing::warn;

/// Recognizes server responses to a failed login
///
/// The pattern is compiled once when the detector is built. A pattern that does not
/// compile leaves the detector disarmed: it reports no match for every input rather than
/// failing the caller.
#[derive(Debug, Clone)]
pub struct LoginFailureDetector {
    pattern: Option<Regex>,
}

impl LoginFailureDetector {
    /// Build a detector from a regular expression
    pub fn new(pattern: &str) -> Self {
        match Regex::new(pattern) {
            Ok(regex) => Self {
                pattern: Some(regex),
            },
            Err(error) => {
                warn!(
                    %pattern,
                    %error,
                    "login failure pattern does not compile, detection disabled"
                );
                Self { pattern: None }
            }
        }
    }

    /// Check if the detector has a usable pattern
    pub fn is_armed(&self) -> bool {
        self.pattern.is_some()
    }

    /// Check if server text reports a failed login
    pub fn indicates_failed_login(&self, text: &[u8]) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|regex| regex.is_match(text))
    }
}

impl Default for LoginFailureDetector {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_FAILURE_PATTERN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_anchored_at_start() {
        let detector = LoginFailureDetector::default();
        assert!(detector.indicates_failed_login(b"login: "));
        assert!(detector.indicates_failed_login(b"Login: "));
        assert!(detector.indicates_failed_login(b"LOGIN timed out"));
        assert!(!detector.indicates_failed_login(b"host login: "));
        assert!(!detector.indicates_failed_login(b"Last login: Mon Oct 12"));
    }

    #[test]
    fn test_failure_words_anywhere() {
        let detector = LoginFailureDetector::default();
        assert!(detector.indicates_failed_login(b"Login incorrect"));
        assert!(detector.indicates_failed_login(b"\r\nPassword INCORRECT\r\n"));
        assert!(detector.indicates_failed_login(b"Authentication failed."));
        assert!(detector.indicates_failed_login(b"authentication Failure"));
        assert!(!detector.indicates_failed_login(b"Password: "));
        assert!(!detector.indicates_failed_login(b"Welcome to host"));
        assert!(!detector.indicates_failed_login(b""));
    }

    #[test]
    fn test_bad_pattern_fails_open() {
        let detector = LoginFailureDetector::new("(incorrect");
        assert!(!detector.is_armed());
        assert!(!detector.indicates_failed_login(b"Login incorrect"));
    }

    #[test]
    fn test_non_utf8_text() {
        let detector = LoginFailureDetector::default();
        assert!(detector.indicates_failed_login(&[0xE9, b' ', b'f', b'a', b'i', b'l', b'e', b'd']));
        assert!(!detector.indicates_failed_login(&[0xFE, 0xFF, 0x80]));
    }
}
