//! Behavioural integration tests for the server directory over the
//! in-memory repository.
//!
//! These tests exercise the directory the way the owning application
//! would: seed a roster, load once at startup, then resolve identifiers
//! arriving with portal reports and stored subscriptions.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use mockable::DefaultClock;
use tokio::runtime::Runtime;
use waypoint::server_directory::{
    adapters::memory::InMemoryServerRepository,
    domain::{DofusPortalsId, Server, ServerId},
    services::{ServerDirectory, ServerDirectoryError},
};

/// Creates a tokio runtime for async operations in tests.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

fn server(id: &str, portals_id: &str, name: &str) -> Server {
    Server::new(
        ServerId::new(id).expect("valid server id"),
        DofusPortalsId::new(portals_id).expect("valid portals id"),
        name,
    )
    .expect("valid server")
}

fn live_roster() -> Vec<Server> {
    vec![
        server("draconiros", "dofus3-draconiros", "Draconiros"),
        server("imagiro", "dofus3-imagiro", "Imagiro"),
        server("orukam", "dofus3-orukam", "Orukam"),
        server("hell-mina", "dofus3-hell-mina", "Hell Mina"),
        server("tal-kasha", "dofus3-tal-kasha", "Tal Kasha"),
        server("tylezia", "dofus3-tylezia", "Tylezia"),
    ]
}

/// Simulates the startup load followed by the lookups command handlers
/// perform while translating portal reports.
#[test]
fn startup_load_then_command_lookups() {
    let rt = test_runtime();
    let repository = InMemoryServerRepository::with_servers(live_roster());

    let directory = rt
        .block_on(ServerDirectory::load(&repository, &DefaultClock))
        .expect("startup load should succeed");

    assert_eq!(directory.len(), 6);

    // A portal report names the server by its dofus-portals id.
    let reported = directory
        .find_server_by_dofus_portals_id("dofus3-hell-mina")
        .expect("reported server should resolve");
    assert_eq!(reported.name(), "Hell Mina");
    assert_eq!(reported.id().as_str(), "hell-mina");

    // Stored subscriptions carry the local id.
    let subscribed = directory
        .get_server("tylezia")
        .expect("subscribed server should resolve");
    assert_eq!(subscribed.dofus_portals_id().as_str(), "dofus3-tylezia");

    // A server unknown to the snapshot simply does not resolve.
    assert!(directory.get_server("eratz").is_none());
    assert!(
        directory
            .find_server_by_dofus_portals_id("dofus3-eratz")
            .is_none()
    );
}

/// The snapshot is immutable once published; roster growth only becomes
/// visible through a fresh load.
#[test]
fn roster_growth_requires_a_reload() {
    let rt = test_runtime();
    let repository = InMemoryServerRepository::with_servers(live_roster());

    let directory = rt
        .block_on(ServerDirectory::load(&repository, &DefaultClock))
        .expect("startup load should succeed");

    repository
        .insert(server("brial", "dofus3-brial", "Brial"))
        .expect("roster insert should succeed");

    assert!(directory.get_server("brial").is_none());

    let reloaded = rt
        .block_on(ServerDirectory::load(&repository, &DefaultClock))
        .expect("reload should succeed");
    assert_eq!(reloaded.len(), 7);
    assert!(reloaded.get_server("brial").is_some());
    assert!(reloaded.loaded_at() >= directory.loaded_at());
}

/// Concurrent readers share the directory by reference with no locking.
#[test]
fn snapshot_is_shareable_across_threads() {
    let rt = test_runtime();
    let repository = InMemoryServerRepository::with_servers(live_roster());

    let directory = rt
        .block_on(ServerDirectory::load(&repository, &DefaultClock))
        .expect("startup load should succeed");

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let found = directory
                    .get_server("imagiro")
                    .expect("server should resolve from any thread");
                assert_eq!(found.name(), "Imagiro");
            });
        }
    });
}

/// Default loading tolerates a shared dofus-portals id (later record
/// wins in that index); strict loading rejects the same roster.
#[test]
fn strict_load_guards_portals_id_uniqueness() {
    let rt = test_runtime();
    let repository = InMemoryServerRepository::with_servers([
        server("draconiros", "dofus3-shared", "Draconiros"),
        server("imagiro", "dofus3-shared", "Imagiro"),
    ]);

    let directory = rt
        .block_on(ServerDirectory::load(&repository, &DefaultClock))
        .expect("default load should tolerate the duplicate");
    let winner = directory
        .find_server_by_dofus_portals_id("dofus3-shared")
        .expect("shared portals id should resolve");
    assert_eq!(winner.id().as_str(), "imagiro");
    assert!(directory.get_server("draconiros").is_some());

    let strict = rt.block_on(ServerDirectory::load_strict(&repository, &DefaultClock));
    assert!(matches!(
        strict,
        Err(ServerDirectoryError::DuplicateDofusPortalsId(_))
    ));
}
