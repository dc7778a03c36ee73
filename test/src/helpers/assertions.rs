/// Assert that no event has more than one listener on a player
#[macro_export]
macro_rules! assert_single_subscriptions {
    ($player:expr) => {
        for kind in $crate::EventKind::ALL {
            let count = $player.listener_count(kind);
            assert!(
                count <= 1,
                "Event '{}' has {} listeners on the player, expected at most one",
                kind.name(),
                count
            );
        }
    };
}

/// Assert that a player's listeners are exactly the callbacks declared in a
/// CallbackSet
#[macro_export]
macro_rules! assert_subscribed_to {
    ($player:expr, $callbacks:expr) => {
        for kind in $crate::EventKind::ALL {
            let expected = $callbacks.get(kind).cloned();
            let actual = $player.listener(kind);
            assert_eq!(
                actual,
                expected,
                "Listener for '{}' does not match the declared callback",
                kind.name()
            );
        }
        assert_eq!($player.total_listeners(), $callbacks.len());
    };
}
