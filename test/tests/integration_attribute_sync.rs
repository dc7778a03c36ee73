//! Attribute synchronization: the first sync writes what is declared, later
//! syncs write only what changed.

use stream_bridge::{
    BridgeConfig, BridgeState, ConfigSnapshot, Field, Preload, Property, SourceChangePolicy,
};
use stream_test::{new_bridge, PlayerOp, TestBridge};

use proptest::prelude::*;

fn ready_bridge(config: BridgeConfig, first: ConfigSnapshot) -> (TestBridge, stream_test::RecordingPlayer) {
    let (mut bridge, _surface, host) = new_bridge(config);
    host.install();
    assert_eq!(bridge.update(first).unwrap(), BridgeState::Ready);
    let player = host.last_player().unwrap();
    (bridge, player)
}

#[test]
fn first_sync_writes_only_declared_fields() {
    let first = ConfigSnapshot::new("abc")
        .with_autoplay(true)
        .with_muted(true)
        .with_controls(false);
    let (_bridge, player) = ready_bridge(BridgeConfig::default(), first);

    assert_eq!(
        player.writes(),
        vec![
            Property::Autoplay(true),
            Property::Controls(false),
            Property::Muted(true),
        ]
    );
}

#[test]
fn first_sync_happens_before_any_subscription() {
    let first = ConfigSnapshot::new("abc")
        .with_loop(true)
        .with_callback(stream_bridge::EventKind::Play, stream_bridge::Callback::new(|_| {}));
    let (_bridge, player) = ready_bridge(BridgeConfig::default(), first);

    let ops = player.ops();
    assert_eq!(ops.len(), 2);
    assert_eq!(ops[0], PlayerOp::Set(Property::Loop(true)));
    assert!(matches!(ops[1], PlayerOp::Subscribe(stream_bridge::EventKind::Play, _)));
}

#[test]
fn incremental_update_writes_only_changes() {
    let first = ConfigSnapshot::new("abc").with_volume(0.5).with_muted(false);
    let (mut bridge, player) = ready_bridge(BridgeConfig::default(), first);
    player.clear_ops();

    bridge
        .update(ConfigSnapshot::new("abc").with_volume(0.8).with_muted(false))
        .unwrap();

    assert_eq!(player.ops(), vec![PlayerOp::Set(Property::Volume(0.8))]);
}

#[test]
fn identical_update_touches_nothing() {
    let snapshot = ConfigSnapshot::new("abc")
        .with_autoplay(true)
        .with_preload(Preload::Auto)
        .with_poster("poster.png")
        .with_current_time(12.5);
    let (mut bridge, player) = ready_bridge(BridgeConfig::default(), snapshot.clone());
    player.clear_ops();

    bridge.update(snapshot.clone()).unwrap();
    bridge.update(snapshot).unwrap();

    assert!(player.ops().is_empty());
}

#[test]
fn identical_nan_update_touches_nothing() {
    let snapshot = ConfigSnapshot::new("abc").with_volume(f64::NAN);
    let (mut bridge, player) = ready_bridge(BridgeConfig::default(), snapshot.clone());
    player.clear_ops();

    bridge.update(snapshot).unwrap();

    assert!(player.ops().is_empty());
}

#[test]
fn removed_declaration_resets_to_default() {
    let first = ConfigSnapshot::new("abc")
        .with_volume(0.2)
        .with_poster("poster.png")
        .with_ad_url("https://ads.example/vast.xml");
    let (mut bridge, player) = ready_bridge(BridgeConfig::default(), first.clone());
    player.clear_ops();

    bridge
        .update(first.without(Field::Volume).without(Field::AdUrl))
        .unwrap();

    assert_eq!(
        player.writes(),
        vec![Property::Volume(1.0), Property::AdUrl(None)]
    );
}

#[test]
fn boolean_preload_maps_onto_hint() {
    let first = ConfigSnapshot::new("abc").with_preload(Preload::Auto);
    let (mut bridge, player) = ready_bridge(BridgeConfig::default(), first);
    player.clear_ops();

    // `true` means auto, so nothing changes
    bridge.update(ConfigSnapshot::new("abc").with_preload(true)).unwrap();
    assert!(player.ops().is_empty());

    bridge.update(ConfigSnapshot::new("abc").with_preload(false)).unwrap();
    assert_eq!(player.writes(), vec![Property::Preload(Preload::Metadata)]);
}

#[test]
fn in_place_policy_writes_new_source() {
    let config = BridgeConfig {
        source_change: SourceChangePolicy::InPlace,
    };
    let (mut bridge, player) = ready_bridge(config, ConfigSnapshot::new("abc").with_muted(true));
    player.clear_ops();

    bridge
        .update(ConfigSnapshot::new("def").with_muted(true))
        .unwrap();

    assert_eq!(bridge.state(), BridgeState::Ready);
    assert_eq!(player.writes(), vec![Property::Src("def".to_string())]);
}

#[test]
fn stream_ref_reads_reflect_written_properties() {
    let (bridge, player) = ready_bridge(
        BridgeConfig::default(),
        ConfigSnapshot::new("abc").with_volume(0.25).with_current_time(3.0),
    );
    let stream = bridge.stream_ref();

    assert!(stream.is_ready());
    assert_eq!(stream.volume(), Some(0.25));
    assert_eq!(stream.current_time(), Some(3.0));
    assert_eq!(stream.muted(), Some(false));

    player.set_dimensions(stream_bridge::VideoDimensions {
        video_width: 1920,
        video_height: 1080,
    });
    assert_eq!(stream.video_dimensions().unwrap().video_width, 1920);
}

proptest! {
    /// After any sequence of updates the player holds the resolved value
    /// of every field in the latest snapshot
    #[test]
    fn prop_player_converges_on_latest(
        updates in prop::collection::vec(
            (prop::option::of(any::<bool>()), prop::option::of(0.0f64..=1.0), prop::option::of(0.0f64..600.0)),
            1..12,
        ),
    ) {
        let (mut bridge, _surface, host) = new_bridge(BridgeConfig::default());
        host.install();

        let mut latest = ConfigSnapshot::new("abc");
        for (muted, volume, time) in updates {
            let mut snapshot = ConfigSnapshot::new("abc");
            if let Some(muted) = muted {
                snapshot = snapshot.with_muted(muted);
            }
            if let Some(volume) = volume {
                snapshot = snapshot.with_volume(volume);
            }
            if let Some(time) = time {
                snapshot = snapshot.with_current_time(time);
            }
            bridge.update(snapshot.clone()).unwrap();
            latest = snapshot;
        }

        let stream = bridge.stream_ref();
        prop_assert_eq!(
            stream.property(Field::Muted),
            Some(latest.resolved(Field::Muted))
        );
        prop_assert_eq!(
            stream.property(Field::Volume),
            Some(latest.resolved(Field::Volume))
        );
        prop_assert_eq!(
            stream.property(Field::CurrentTime),
            Some(latest.resolved(Field::CurrentTime))
        );
    }
}
