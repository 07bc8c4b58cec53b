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

//! Helpers for treating captured chunks as text

use crate::consts;

/// Returns the part of `data` before its first NUL byte.
#[must_use]
pub fn readable_text(data: &[u8]) -> &[u8] {
    match data.iter().position(|&b| b == consts::NUL) {
        Some(nul) => &data[..nul],
        None => data,
    }
}

/// Checks if a character is a carriage return or line feed.
#[must_use]
pub fn is_line_break(ch: char) -> bool {
    ch == char::from(consts::CR) || ch == char::from(consts::LF)
}

/// Checks if `data` holds a CR or LF byte anywhere.
#[must_use]
pub fn contains_line_break(data: &[u8]) -> bool {
    data.iter().any(|&b| b == consts::CR || b == consts::LF)
}

/// Byte index of the first CR or LF in `text`, if any.
#[must_use]
pub fn find_line_break(text: &str) -> Option<usize> {
    text.find(is_line_break)
}

/// Converts the readable part of `data` to a single line, replacing every CR and LF
/// with a space.
///
/// ```
/// use snoopix_telnetscan::normalize_line_breaks;
///
/// assert_eq!(normalize_line_breaks(b"Welcome\r\nserver ready\r\n"), "Welcome  server ready  ");
/// ```
#[must_use]
pub fn normalize_line_breaks(data: &[u8]) -> String {
    readable_text(data)
        .iter()
        .map(|&b| match b {
            consts::CR | consts::LF => ' ',
            _ => char::from(b),
        })
        .collect()
}
