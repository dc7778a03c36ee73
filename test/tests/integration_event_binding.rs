//! Event bindings: each declared callback is subscribed exactly once, and
//! replaced callbacks are unsubscribed before their successors subscribe.

use std::{cell::RefCell, rc::Rc};

use proptest::prelude::*;

use stream_bridge::{
    BridgeConfig, Callback, CallbackSet, ConfigSnapshot, EventKind, ExternalRuntimeError,
    PlayerEvent,
};
use stream_test::{assert_single_subscriptions, assert_subscribed_to, new_bridge, PlayerOp};

#[test]
fn replaced_callback_is_swapped_in_order() {
    let (mut bridge, _surface, host) = new_bridge(BridgeConfig::default());
    host.install();
    let first = Callback::new(|_| {});
    let second = Callback::new(|_| {});

    bridge
        .update(ConfigSnapshot::new("abc").with_callback(EventKind::Error, first.clone()))
        .unwrap();
    let player = host.last_player().unwrap();
    player.clear_ops();

    bridge
        .update(ConfigSnapshot::new("abc").with_callback(EventKind::Error, second.clone()))
        .unwrap();

    assert_eq!(
        player.ops(),
        vec![
            PlayerOp::Unsubscribe(EventKind::Error, first),
            PlayerOp::Subscribe(EventKind::Error, second),
        ]
    );
    assert_single_subscriptions!(player);
}

#[test]
fn unchanged_callbacks_cause_no_churn() {
    let (mut bridge, _surface, host) = new_bridge(BridgeConfig::default());
    host.install();
    let on_play = Callback::new(|_| {});
    let on_pause = Callback::new(|_| {});
    let snapshot = ConfigSnapshot::new("abc")
        .with_callback(EventKind::Play, on_play)
        .with_callback(EventKind::Pause, on_pause);

    bridge.update(snapshot.clone()).unwrap();
    let player = host.last_player().unwrap();
    player.clear_ops();

    bridge.update(snapshot.clone().with_volume(0.5)).unwrap();
    bridge.update(snapshot).unwrap();

    assert!(player
        .ops()
        .iter()
        .all(|op| matches!(op, PlayerOp::Set(_))));
    assert_eq!(player.total_listeners(), 2);
}

#[test]
fn removed_callback_is_unsubscribed() {
    let (mut bridge, _surface, host) = new_bridge(BridgeConfig::default());
    host.install();
    let on_ended = Callback::new(|_| {});
    let snapshot = ConfigSnapshot::new("abc").with_callback(EventKind::Ended, on_ended.clone());

    bridge.update(snapshot.clone()).unwrap();
    let player = host.last_player().unwrap();
    player.clear_ops();

    bridge
        .update(snapshot.without_callback(EventKind::Ended))
        .unwrap();

    assert_eq!(player.ops(), vec![PlayerOp::Unsubscribe(EventKind::Ended, on_ended)]);
    assert_eq!(player.total_listeners(), 0);
    assert!(bridge.events().active(EventKind::Ended).is_none());
}

#[test]
fn callbacks_declared_while_acquiring_bind_on_acquisition() {
    let (mut bridge, _surface, host) = new_bridge(BridgeConfig::default());
    let stale = Callback::new(|_| {});
    let fresh = Callback::new(|_| {});

    bridge
        .update(ConfigSnapshot::new("abc").with_callback(EventKind::TimeUpdate, stale))
        .unwrap();
    let latest = ConfigSnapshot::new("abc")
        .with_callback(EventKind::TimeUpdate, fresh)
        .with_callback(EventKind::AdStart, Callback::new(|_| {}));
    bridge.update(latest.clone()).unwrap();

    host.install();
    bridge.poll();

    let player = host.last_player().unwrap();
    assert_subscribed_to!(player, latest.callbacks());
    assert_eq!(player.unsubscribe_count(), 0);
}

#[test]
fn error_event_reaches_callback_verbatim() {
    let (mut bridge, _surface, host) = new_bridge(BridgeConfig::default());
    host.install();
    let received: Rc<RefCell<Vec<PlayerEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = received.clone();
    let on_error = Callback::new(move |event| sink.borrow_mut().push(event.clone()));

    bridge
        .update(ConfigSnapshot::new("abc").with_callback(EventKind::Error, on_error))
        .unwrap();

    let error = ExternalRuntimeError::with_code("MEDIA_ERR_DECODE", "decode failed");
    host.last_player()
        .unwrap()
        .emit(PlayerEvent::error(error.clone()));

    let received = received.borrow();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].kind, EventKind::Error);
    assert_eq!(received[0].error, Some(error));
}

#[test]
fn teardown_leaves_no_listeners() {
    let (mut bridge, _surface, host) = new_bridge(BridgeConfig::default());
    host.install();
    let mut callbacks = CallbackSet::new();
    for kind in [EventKind::Play, EventKind::Seeked, EventKind::VolumeChange] {
        callbacks = callbacks.with(kind, Callback::new(|_| {}));
    }
    bridge
        .update(ConfigSnapshot::new("abc").with_callbacks(callbacks))
        .unwrap();
    let player = host.last_player().unwrap();
    assert_eq!(player.total_listeners(), 3);

    bridge.teardown();

    assert_eq!(player.total_listeners(), 0);
    assert_eq!(player.unsubscribe_count(), 3);
    assert_eq!(bridge.events().active_count(), 0);
}

fn callback_pool() -> Vec<Callback> {
    (0..4).map(|_| Callback::new(|_| {})).collect()
}

proptest! {
    /// Whatever the sequence of declarations, no event ever has two
    /// listeners and the final listeners are the latest declarations
    #[test]
    fn prop_at_most_one_subscription_per_event(
        steps in prop::collection::vec(
            prop::collection::vec((0usize..EventKind::COUNT, prop::option::of(0usize..4)), 0..6),
            1..10,
        ),
    ) {
        let pool = callback_pool();
        let (mut bridge, _surface, host) = new_bridge(BridgeConfig::default());
        host.install();

        let mut callbacks = CallbackSet::new();
        for step in steps {
            for (kind, pick) in step {
                let kind = EventKind::ALL[kind];
                callbacks = match pick {
                    Some(index) => callbacks.with(kind, pool[index].clone()),
                    None => callbacks.without(kind),
                };
            }
            bridge
                .update(ConfigSnapshot::new("abc").with_callbacks(callbacks.clone()))
                .unwrap();

            let player = host.last_player().unwrap();
            for kind in EventKind::ALL {
                prop_assert!(player.listener_count(kind) <= 1);
            }
        }

        let player = host.last_player().unwrap();
        assert_subscribed_to!(player, &callbacks);
    }
}
