//! Initialization sequencing against network availability
//!
//! Covers the pending-initialization slot: when the engine starts, when the
//! caller's ready callback runs, and when connectivity resumes playback
//! instead of restarting the engine.

mod helpers;

use epv_common::{PlayerEvent, PlayerState};
use epv_player::network::Unregistration;
use epv_player::playback::ResumeCommand;
use epv_player::sim::EngineCommand;
use epv_player::{PlaybackEngine, PlayerListener};
use helpers::{Harness, ReadyCounter};
use parking_lot::Mutex;
use std::sync::Arc;

#[test]
fn test_offline_start_then_network_available() {
    let mut harness = Harness::new(false);
    let ready = ReadyCounter::default();

    harness.container.initialize(ready.callback(), true);
    assert_eq!(ready.count(), 0);
    assert_eq!(harness.engine.initialize_calls(), 0);
    assert!(harness.container.network_subscription().is_some());

    harness.set_online(true);
    assert_eq!(harness.engine.initialize_calls(), 1);
    assert_eq!(ready.count(), 0, "callback waits for engine success");

    assert!(harness.engine.complete_init());
    assert_eq!(ready.count(), 1);
    assert!(harness.container.is_initialization_pending());

    harness.engine.emit(&PlayerEvent::Ready);
    assert!(!harness.container.is_initialization_pending());
    assert_eq!(ready.count(), 1);
}

#[test]
fn test_network_never_available_never_initializes() {
    let mut harness = Harness::new(false);
    let ready = ReadyCounter::default();

    harness.container.initialize(ready.callback(), true);
    harness.set_online(false);
    harness.container.on_network_unavailable();

    assert_eq!(harness.engine.initialize_calls(), 0);
    assert!(!harness.engine.complete_init());
    assert_eq!(ready.count(), 0);
    assert!(harness.container.is_initialization_pending());
}

#[test]
fn test_manual_network_events_without_watcher() {
    let mut harness = Harness::new(false);
    let ready = ReadyCounter::default();

    harness.container.initialize(ready.callback(), false);
    assert!(harness.container.network_subscription().is_none());
    assert_eq!(harness.network.observer_count(), 0);

    // Host forwards connectivity from its own receiver
    harness.container.on_network_available();
    harness.engine.complete_init();
    assert_eq!(ready.count(), 1);
}

#[test]
fn test_internal_listeners_attached_before_callback() {
    let mut harness = Harness::new(true);
    let tracker = harness.container.tracker().clone();
    let listeners_at_callback = Arc::new(Mutex::new(None));
    let seen = listeners_at_callback.clone();
    let engine_handle = harness.engine.clone();

    harness.container.initialize(
        move |engine: &mut dyn PlaybackEngine| {
            *seen.lock() = Some(engine_handle.listener_count());
            // The caller's very first command triggers an event immediately
            engine_handle.emit(&PlayerEvent::StateChange {
                state: PlayerState::Playing,
                position: 3.0,
            });
            engine.play();
        },
        false,
    );
    harness.engine.complete_init();

    assert_eq!(*listeners_at_callback.lock(), Some(2));
    let snapshot = tracker.snapshot().expect("tracker saw the first event");
    assert_eq!(snapshot.state, PlayerState::Playing);
    assert_eq!(snapshot.position, 3.0);
}

#[test]
fn test_network_available_after_ready_resumes() {
    let mut harness = Harness::new(true);
    harness.container.initialize(|_| {}, true);
    harness.engine.complete_init();
    harness.engine.emit(&PlayerEvent::Ready);
    harness.engine.emit(&PlayerEvent::StateChange {
        state: PlayerState::Playing,
        position: 10.0,
    });
    harness.engine.clear_commands();

    assert!(harness.set_online(false).is_empty());
    let resumes = harness.set_online(true);

    assert_eq!(resumes, vec![ResumeCommand::SeekAndPlay { position: 10.0 }]);
    assert_eq!(harness.engine.initialize_calls(), 0);
    assert_eq!(
        harness.engine.commands(),
        vec![EngineCommand::SeekTo { seconds: 10.0 }, EngineCommand::Play]
    );
}

#[test]
fn test_pending_takes_precedence_over_resume() {
    let mut harness = Harness::new(false);
    harness.container.initialize(|_| {}, false);

    // Tracker already has history from an earlier engine session
    harness.container.tracker().on_event(&PlayerEvent::StateChange {
        state: PlayerState::Paused,
        position: 5.0,
    });

    let resume = harness.container.on_network_available();
    assert_eq!(resume, None);
    assert_eq!(harness.engine.commands(), vec![EngineCommand::Initialize]);
}

#[test]
fn test_ready_clears_each_started_request() {
    let mut harness = Harness::new(true);
    harness.container.initialize(|_| {}, false);
    harness.engine.complete_init();
    harness.engine.emit(&PlayerEvent::Ready);
    assert!(!harness.container.is_initialization_pending());

    // Online, so the second request starts the engine right away; the next
    // ready belongs to it even though its success callback has not run yet.
    let ready = ReadyCounter::default();
    harness.container.initialize(ready.callback(), false);
    assert!(harness.container.is_initialization_pending());
    harness.engine.emit(&PlayerEvent::Ready);
    assert!(!harness.container.is_initialization_pending());

    harness.engine.complete_init();
    assert_eq!(ready.count(), 1);
    assert!(!harness.container.is_initialization_pending());
}

#[test]
fn test_ready_keeps_request_waiting_for_network() {
    let mut harness = Harness::new(true);
    harness.container.initialize(|_| {}, false);
    harness.engine.complete_init();
    harness.engine.emit(&PlayerEvent::Ready);

    harness.set_online(false);
    harness.container.initialize(|_| {}, false);
    harness.engine.emit(&PlayerEvent::Ready);
    assert!(harness.container.is_initialization_pending());

    harness.container.on_network_available();
    assert_eq!(harness.engine.initialize_calls(), 2);
}

#[test]
fn test_ready_between_two_init_successes_reenables_resume() {
    let mut harness = Harness::new(true);
    let ready = ReadyCounter::default();
    harness.container.initialize(ready.callback(), false);
    harness.container.initialize(ready.callback(), false);
    assert_eq!(harness.engine.initialize_calls(), 2);

    assert!(harness.engine.complete_init());
    harness.engine.emit(&PlayerEvent::Ready);
    assert!(harness.engine.complete_init());
    harness.engine.emit(&PlayerEvent::StateChange {
        state: PlayerState::Playing,
        position: 42.0,
    });
    assert!(!harness.container.is_initialization_pending());
    assert_eq!(ready.count(), 2);
    harness.engine.clear_commands();

    let resume = harness.container.on_network_available();
    assert_eq!(resume, Some(ResumeCommand::SeekAndPlay { position: 42.0 }));
    assert_eq!(
        harness.engine.commands(),
        vec![EngineCommand::SeekTo { seconds: 42.0 }, EngineCommand::Play]
    );
}

#[test]
fn test_release_without_network_handling() {
    let mut harness = Harness::new(true);
    harness.container.initialize(|_| {}, false);

    assert_eq!(harness.container.release(), Unregistration::NotRegistered);
    assert!(harness.engine.is_destroyed());
}

#[test]
fn test_release_with_network_handling() {
    let mut harness = Harness::new(false);
    harness.container.initialize(|_| {}, true);
    assert_eq!(harness.network.observer_count(), 1);

    assert_eq!(harness.container.release(), Unregistration::Unregistered);
    assert_eq!(harness.network.observer_count(), 0);
    assert!(!harness.container.is_initialization_pending());
}

#[test]
fn test_release_before_initialize() {
    let mut harness = Harness::new(true);
    assert_eq!(harness.container.release(), Unregistration::NotRegistered);
    assert_eq!(harness.engine.commands(), vec![EngineCommand::Destroy]);
}

#[test]
fn test_repeated_initialize_registers_once() {
    let mut harness = Harness::new(false);
    harness.container.initialize(|_| {}, true);
    harness.container.initialize(|_| {}, true);

    assert_eq!(harness.network.registrations(), 1);
}
