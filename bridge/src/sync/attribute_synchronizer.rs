use log::debug;

use stream_shared::{ConfigSnapshot, Field, PlayerHandle, Property};

/// Writes the scalar properties that differ between two snapshots
///
/// Fields are independent writes and are always walked in `Field::ALL`
/// order, so the same pair of snapshots produces the same write sequence.
pub struct AttributeSynchronizer {
    working_set: Vec<Property>,
}

fn same_declaration(previous: &ConfigSnapshot, next: &ConfigSnapshot, field: Field) -> bool {
    match (previous.declared(field), next.declared(field)) {
        (Some(previous), Some(next)) => previous.same_value(&next),
        (None, None) => true,
        _ => false,
    }
}

impl Default for AttributeSynchronizer {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeSynchronizer {
    pub fn new() -> Self {
        Self {
            working_set: Vec::with_capacity(Field::COUNT),
        }
    }

    /// The writes needed to move a player from `previous` to `next`.
    ///
    /// With no `previous` this is a first synchronization: every declared
    /// field is written, except the source, which the embed already carries.
    /// Otherwise a field is written when its declaration changed, using the
    /// field's default if `next` no longer declares it.
    pub fn diff(previous: Option<&ConfigSnapshot>, next: &ConfigSnapshot) -> Vec<Property> {
        let mut writes = Vec::new();
        Self::collect(previous, next, &mut writes);
        writes
    }

    fn collect(previous: Option<&ConfigSnapshot>, next: &ConfigSnapshot, out: &mut Vec<Property>) {
        for field in Field::ALL {
            let write = match previous {
                None if field == Field::Src => None,
                None => next.declared(field),
                Some(previous) if !same_declaration(previous, next, field) => {
                    Some(next.resolved(field))
                }
                Some(_) => None,
            };
            if let Some(property) = write {
                out.push(property);
            }
        }
    }

    /// Apply the diff to `player`, returning how many properties were written
    pub fn apply(
        &mut self,
        previous: Option<&ConfigSnapshot>,
        next: &ConfigSnapshot,
        player: &PlayerHandle,
    ) -> usize {
        self.working_set.clear();
        Self::collect(previous, next, &mut self.working_set);

        let count = self.working_set.len();
        for property in self.working_set.drain(..) {
            debug!("AttributeSynchronizer: {} <- {:?}", property.field().name(), property);
            player.set_property(property);
        }
        count
    }
}
