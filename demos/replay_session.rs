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

//! Replays a captured Telnet login through the dissector and logs what it finds.
//!
//! ```text
//! cargo run -p snoopix-dissector --example replay_session
//! ```

use snoopix_dissector::{
    Chunk, DissectorConfig, Dispatcher, MemorySessionStore, TelnetDissector, TracingSink,
};
use snoopix_telnetscan::consts::{self, option};
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

fn capture(client: SocketAddr, server: SocketAddr) -> Vec<Chunk> {
    let mut chunks = vec![
        Chunk::new(
            server,
            client,
            vec![
                consts::IAC,
                consts::DO,
                option::TTYPE,
                consts::IAC,
                consts::DO,
                option::NAWS,
            ],
        ),
        Chunk::new(client, server, vec![consts::IAC, consts::WILL, option::TTYPE]),
        Chunk::new(server, client, &b"Debian GNU/Linux 12\r\n"[..]),
        Chunk::new(server, client, &b"gw login: "[..]),
    ];
    chunks.extend(b"admin\r".iter().map(|b| Chunk::new(client, server, vec![*b])));
    chunks.push(Chunk::new(server, client, &b"Password: "[..]));
    chunks.extend(b"hunter2\r".iter().map(|b| Chunk::new(client, server, vec![*b])));
    chunks.push(Chunk::new(server, client, &b"\r\nLogin incorrect\r\ngw login: "[..]));
    chunks.extend(b"admin\r".iter().map(|b| Chunk::new(client, server, vec![*b])));
    chunks.extend(b"correct horse\r".iter().map(|b| Chunk::new(client, server, vec![*b])));
    chunks
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let dissector = Arc::new(TelnetDissector::new(
        DissectorConfig::default(),
        Arc::new(MemorySessionStore::new()),
        Arc::new(TracingSink),
    ));
    let mut dispatcher = Dispatcher::new();
    dispatcher.register(dissector.clone())?;

    let client: SocketAddr = "192.0.2.10:51514".parse()?;
    let server: SocketAddr = "192.0.2.1:23".parse()?;

    for chunk in capture(client, server) {
        dispatcher.dispatch(&chunk)?;
    }
    dispatcher.connection_closed(client, server);

    info!(metrics = ?dissector.metrics().snapshot(), "replay finished");
    Ok(())
}
