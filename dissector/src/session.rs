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

//! Per-connection credential accumulation
//!
//! Telnet clients send what the user types one character at a time, so a login is
//! rebuilt from many chunks. The buffer grows as `user\rpass\r` and is split once a
//! chunk carrying a line break arrives while the first line break in the buffer is no
//! longer its last character.
//!
//! ```text
//!             first char                 chunk with CR/LF, split found
//! NoSession ─────────────▶ Collecting ───────────────────────────────▶ Done
//!     ▲                        │  ▲                                      │
//!     │                        └──┘ next char                            │
//!     └─────────────── failed login reported by server ──────────────────┘
//! ```

use crate::types::ConnectionIdentity;
use snoopix_telnetscan::{find_line_break, is_line_break};

/// Accumulation state of a connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Characters typed so far
    Collecting(String),
    /// A credential pair was already extracted; nothing more is collected
    Done,
}

/// Credential collection state for one connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    key: ConnectionIdentity,
    state: SessionState,
}

/// A user and password split out of a session buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Text before the first line break
    pub user: String,
    /// Text after the first line break, up to the next one
    pub pass: String,
}

/// What happened when a character was fed to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accumulation {
    /// The character was appended, the chunk carried no line break
    Appended,
    /// The chunk carried a line break but the buffer is still waiting for more input
    AwaitingInput,
    /// The buffer was split; the session is now [`SessionState::Done`]
    Captured(Credentials),
    /// The session is done, the character was dropped
    Finished,
}

impl Session {
    /// Start collecting for a connection with its first typed character
    pub fn start(key: ConnectionIdentity, first: char) -> Self {
        Self {
            key,
            state: SessionState::Collecting(first.to_string()),
        }
    }

    /// Connection this session belongs to
    pub fn key(&self) -> ConnectionIdentity {
        self.key
    }

    /// Current state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Characters collected so far, `None` once done
    pub fn buffer(&self) -> Option<&str> {
        match &self.state {
            SessionState::Collecting(buffer) => Some(buffer),
            SessionState::Done => None,
        }
    }

    /// Check if a credential pair was already extracted
    pub fn is_done(&self) -> bool {
        self.state == SessionState::Done
    }

    /// Feed the leading character of a client chunk
    ///
    /// `chunk_has_line_break` tells whether the chunk the character came from carries a
    /// CR or LF anywhere in its readable text; only then is the buffer checked for a
    /// split.
    pub fn accumulate(&mut self, ch: char, chunk_has_line_break: bool) -> Accumulation {
        let SessionState::Collecting(buffer) = &mut self.state else {
            return Accumulation::Finished;
        };

        buffer.push(ch);
        if !chunk_has_line_break {
            return Accumulation::Appended;
        }

        match split_credentials(buffer) {
            Some(credentials) => {
                self.state = SessionState::Done;
                Accumulation::Captured(credentials)
            }
            None => Accumulation::AwaitingInput,
        }
    }
}

/// Split a `user\rpass\r` buffer
///
/// The first CR or LF ends the user. When it is the last character of the buffer the
/// password has not been typed yet and there is nothing to split. The password runs up
/// to the next CR or LF, or to the end of the buffer.
pub fn split_credentials(buffer: &str) -> Option<Credentials> {
    let brk = find_line_break(buffer)?;
    // CR and LF are single byte, so brk + 1 is a char boundary.
    if brk + 1 == buffer.len() {
        return None;
    }

    let rest = &buffer[brk + 1..];
    let pass = match rest.find(is_line_break) {
        Some(end) => &rest[..end],
        None => rest,
    };
    Some(Credentials {
        user: buffer[..brk].to_string(),
        pass: pass.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    fn key() -> ConnectionIdentity {
        let client: SocketAddr = "192.168.1.20:51000".parse().unwrap();
        let server: SocketAddr = "192.168.1.1:23".parse().unwrap();
        ConnectionIdentity::new(client, server)
    }

    fn creds(user: &str, pass: &str) -> Credentials {
        Credentials {
            user: user.to_string(),
            pass: pass.to_string(),
        }
    }

    #[test]
    fn test_split_waits_for_password() {
        assert_eq!(split_credentials("bob"), None);
        assert_eq!(split_credentials("bob\r"), None);
        assert_eq!(split_credentials("bob\n"), None);
    }

    #[test]
    fn test_split_user_and_pass() {
        assert_eq!(split_credentials("bob\rx"), Some(creds("bob", "x")));
        assert_eq!(split_credentials("alice\rsecret\r"), Some(creds("alice", "secret")));
        assert_eq!(split_credentials("alice\nsecret\n"), Some(creds("alice", "secret")));
        assert_eq!(split_credentials("a\rb\rc\r"), Some(creds("a", "b")));
    }

    #[test]
    fn test_split_empty_fields() {
        assert_eq!(split_credentials("\r\r"), Some(creds("", "")));
        assert_eq!(split_credentials("root\r\r"), Some(creds("root", "")));
    }

    #[test]
    fn test_split_keeps_latin1_chars() {
        assert_eq!(
            split_credentials("j\u{f6}rg\rp\u{e4}ss\r"),
            Some(creds("j\u{f6}rg", "p\u{e4}ss"))
        );
    }

    #[test]
    fn test_accumulate_full_login() {
        let mut session = Session::start(key(), 'a');
        for ch in "lice".chars() {
            assert_eq!(session.accumulate(ch, false), Accumulation::Appended);
        }
        assert_eq!(session.accumulate('\r', true), Accumulation::AwaitingInput);
        for ch in "secret".chars() {
            assert_eq!(session.accumulate(ch, false), Accumulation::Appended);
        }
        assert_eq!(session.buffer(), Some("alice\rsecret"));
        assert_eq!(
            session.accumulate('\r', true),
            Accumulation::Captured(creds("alice", "secret"))
        );
        assert!(session.is_done());
        assert_eq!(session.buffer(), None);
    }

    #[test]
    fn test_accumulate_without_line_break_never_splits() {
        let mut session = Session::start(key(), 'b');
        for ch in "ob\rx".chars() {
            session.accumulate(ch, false);
        }
        assert_eq!(session.buffer(), Some("bob\rx"));
        assert!(!session.is_done());
    }

    #[test]
    fn test_done_drops_characters() {
        let mut session = Session::start(key(), 'b');
        session.accumulate('\r', true);
        session.accumulate('x', true);
        assert!(session.is_done());

        assert_eq!(session.accumulate('y', false), Accumulation::Finished);
        assert_eq!(session.accumulate('\r', true), Accumulation::Finished);
        assert_eq!(session.state(), &SessionState::Done);
    }

    #[test]
    fn test_sentinel_like_character_is_data() {
        let mut session = Session::start(key(), '\u{ff}');
        assert!(!session.is_done());
        assert_eq!(session.accumulate('\u{ff}', false), Accumulation::Appended);
        assert_eq!(session.buffer(), Some("\u{ff}\u{ff}"));
    }
}
