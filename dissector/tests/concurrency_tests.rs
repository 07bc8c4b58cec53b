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

//! Many connections dissected in parallel through a dispatcher

use snoopix_dissector::{
    Chunk, ConnectionIdentity, CredentialEvent, DissectorConfig, Dispatcher, MemorySessionStore,
    MemorySink, Session, SessionStore, TelnetDissector,
};
use std::net::SocketAddr;
use std::sync::{Arc, Barrier};
use std::thread;

fn client(n: u16) -> SocketAddr {
    SocketAddr::from(([10, 20, 0, 2], 40000 + n))
}

fn server() -> SocketAddr {
    SocketAddr::from(([10, 20, 0, 1], 23))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_connections_are_independent() {
    let store = Arc::new(MemorySessionStore::new());
    let sink = Arc::new(MemorySink::new());
    let dissector = TelnetDissector::new(DissectorConfig::default(), store.clone(), sink.clone());

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(Arc::new(dissector)).unwrap();
    let dispatcher = Arc::new(dispatcher);

    let mut handles = Vec::new();
    for n in 0..16u16 {
        let dispatcher = dispatcher.clone();
        handles.push(tokio::spawn(async move {
            let banner = format!("node{n}\r\nlogin: ");
            dispatcher
                .dispatch(&Chunk::new(server(), client(n), banner.into_bytes()))
                .unwrap();
            let typed = format!("user{n}\rpass{n}\r");
            for byte in typed.bytes() {
                dispatcher
                    .dispatch(&Chunk::new(client(n), server(), vec![byte]))
                    .unwrap();
                tokio::task::yield_now().await;
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let mut credentials = sink.credentials();
    credentials.sort_by(|a, b| a.user.cmp(&b.user));
    let mut expected: Vec<_> = (0..16u16)
        .map(|n| CredentialEvent::new(server(), format!("user{n}"), format!("pass{n}")))
        .collect();
    expected.sort_by(|a, b| a.user.cmp(&b.user));

    assert_eq!(credentials, expected);
    assert_eq!(sink.banners().len(), 16);
    assert_eq!(store.len(), 16);
}

#[test]
fn test_teardown_through_dispatcher() {
    let store = Arc::new(MemorySessionStore::new());
    let dissector = TelnetDissector::new(
        DissectorConfig::default(),
        store.clone(),
        Arc::new(MemorySink::new()),
    );
    let mut dispatcher = Dispatcher::new();
    dispatcher.register(Arc::new(dissector)).unwrap();

    dispatcher
        .dispatch(&Chunk::new(client(1), server(), &b"r"[..]))
        .unwrap();
    assert_eq!(store.len(), 1);

    dispatcher.connection_closed(server(), client(1));
    assert!(store.is_empty());
}

#[test]
fn test_capacity_holds_under_racing_inserts() {
    const THREADS: u16 = 8;

    for round in 0..2000 {
        let store = Arc::new(MemorySessionStore::new().with_max_sessions(1));
        let barrier = Arc::new(Barrier::new(usize::from(THREADS)));

        let handles: Vec<_> = (0..THREADS)
            .map(|n| {
                let store = store.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    let key = ConnectionIdentity::new(client(n), server());
                    barrier.wait();
                    let session = store.put(Session::start(key, 'a')).is_ok();
                    let banner = store.claim_banner(&key).is_ok_and(|first| first);
                    (session, banner)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let sessions = results.iter().filter(|(session, _)| *session).count();
        let banners = results.iter().filter(|(_, banner)| *banner).count();

        assert_eq!(sessions, 1, "round {round}: {sessions} sessions stored");
        assert_eq!(banners, 1, "round {round}: {banners} banners claimed");
        assert_eq!(store.len(), 1, "round {round}");
        assert_eq!(store.banner_count(), 1, "round {round}");
    }
}
