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

//! Telnet protocol constants (RFC 854, RFC 855)

/// Well known Telnet TCP port
pub const TELNET_PORT: u16 = 23;

/// Null
pub const NUL: u8 = 0x00;
/// Line Feed
pub const LF: u8 = 0x0A;
/// Carriage Return
pub const CR: u8 = 0x0D;

/// End of subnegotiation parameters
pub const SE: u8 = 0xF0;
/// No operation
pub const NOP: u8 = 0xF1;
/// Data mark
pub const DM: u8 = 0xF2;
/// Break
pub const BRK: u8 = 0xF3;
/// Interrupt process
pub const IP: u8 = 0xF4;
/// Abort output
pub const AO: u8 = 0xF5;
/// Are you there
pub const AYT: u8 = 0xF6;
/// Erase character
pub const EC: u8 = 0xF7;
/// Erase line
pub const EL: u8 = 0xF8;
/// Go ahead
pub const GA: u8 = 0xF9;
/// Start of subnegotiation
pub const SB: u8 = 0xFA;
/// Sender wants to enable an option
pub const WILL: u8 = 0xFB;
/// Sender refuses an option
pub const WONT: u8 = 0xFC;
/// Sender asks the peer to enable an option
pub const DO: u8 = 0xFD;
/// Sender asks the peer to disable an option
pub const DONT: u8 = 0xFE;
/// Interpret as command
pub const IAC: u8 = 0xFF;

/// Option codes commonly seen during login negotiation
pub mod option {
    /// Binary transmission
    pub const BINARY: u8 = 0x00;
    /// Echo
    pub const ECHO: u8 = 0x01;
    /// Suppress go ahead
    pub const SGA: u8 = 0x03;
    /// Status
    pub const STATUS: u8 = 0x05;
    /// Terminal type
    pub const TTYPE: u8 = 0x18;
    /// Negotiate about window size
    pub const NAWS: u8 = 0x1F;
    /// Terminal speed
    pub const TSPEED: u8 = 0x20;
    /// Remote flow control
    pub const LFLOW: u8 = 0x21;
    /// Linemode
    pub const LINEMODE: u8 = 0x22;
    /// X display location
    pub const XDISPLOC: u8 = 0x23;
    /// New environment
    pub const NEW_ENVIRON: u8 = 0x27;
}
