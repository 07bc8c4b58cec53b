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

use crate::consts;
use tracing::trace;

/// Advances past the run of Telnet negotiation sequences at the start of `buf`.
///
/// Returns the index of the first byte that is not part of a leading command. A return
/// value equal to `buf.len()` means the chunk held nothing but commands.
///
/// While the byte under the cursor is `IAC`:
///
/// - `IAC SB` starts a subnegotiation. The scan moves forward until the next `IAC` (the
///   start of the closing `IAC SE`) and then steps over that pair.
/// - Anything else is taken as a fixed `IAC <command> <option>` triple.
///
/// Every step saturates at the end of the buffer, so a truncated sequence consumes the
/// rest of the chunk instead of reading past it.
///
/// # Example
/// ```
/// use snoopix_telnetscan::{consts, skip_commands};
///
/// let chunk = [
///     consts::IAC, consts::SB, consts::option::TTYPE, 0x00, b'v', b't',
///     consts::IAC, consts::SE,
///     b'#',
/// ];
/// assert_eq!(skip_commands(&chunk), 8);
///
/// // Truncated subnegotiation: everything is consumed.
/// let truncated = [consts::IAC, consts::SB, consts::option::NAWS, 0x00];
/// assert_eq!(skip_commands(&truncated), truncated.len());
/// ```
#[must_use]
pub fn skip_commands(buf: &[u8]) -> usize {
    let end = buf.len();
    let mut pos = 0;

    while pos < end && buf[pos] == consts::IAC {
        if buf.get(pos + 1) == Some(&consts::SB) {
            pos += 1;
            // Scan the payload for the IAC that opens IAC SE.
            loop {
                pos += 1;
                if pos >= end || buf[pos] == consts::IAC {
                    break;
                }
            }
            pos = end.min(pos + 2);
        } else {
            pos = end.min(pos + 3);
        }
    }

    if pos == end && end > 0 {
        trace!(len = end, "chunk consumed by telnet commands");
    }
    pos
}
