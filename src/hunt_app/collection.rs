///! Session-scoped bookkeeping for the collectible spheres.
///! Counts each collectible at most once and raises the win signal exactly once,
///! regardless of how many times activation events get delivered.

/// Identifies one collectible for the whole session.
/// Ids are handed out by `CollectionTracker::register` at scene build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectibleId(u32);

impl CollectibleId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectibleState {
    Pending,
    Collected, // terminal
}

/// Outcome of one activation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// A pending collectible was counted.
    Collected { collected: u32, remaining: u32 },
    /// The last pending collectible was counted. Returned exactly once per session.
    Won,
    /// Unknown id, or the collectible was collected before.
    Ignored,
}

#[derive(Debug, Default)]
pub struct CollectionTracker {
    states: Vec<CollectibleState>,
    collected: u32,
    won: bool,
}

impl CollectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one collectible and returns its id.
    /// All registrations happen before any activation is dispatched.
    pub fn register(&mut self) -> CollectibleId {
        let id = CollectibleId(self.states.len() as u32);
        self.states.push(CollectibleState::Pending);
        id
    }

    /// Handles one activation event.
    /// The state transition is checked first, so duplicate delivery of the same
    /// event (or events for an already despawned entity) falls through to `Ignored`.
    pub fn on_activate(&mut self, id: CollectibleId) -> Activation {
        match self.states.get_mut(id.index()) {
            Some(state) if *state == CollectibleState::Pending => {
                *state = CollectibleState::Collected;
                self.collected += 1;
                if self.collected == self.target() && !self.won {
                    self.won = true; // monotonic, never reverts
                    Activation::Won
                } else {
                    Activation::Collected {
                        collected: self.collected,
                        remaining: self.remaining(),
                    }
                }
            },
            _ => Activation::Ignored,
        }
    }

    pub fn target(&self) -> u32 {
        self.states.len() as u32
    }

    pub fn collected_count(&self) -> u32 {
        self.collected
    }

    pub fn remaining(&self) -> u32 {
        self.target() - self.collected
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn state_of(&self, id: CollectibleId) -> Option<CollectibleState> {
        self.states.get(id.index()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CollectibleId, CollectibleState)> + '_ {
        self.states
            .iter()
            .enumerate()
            .map(|(index, state)| (CollectibleId(index as u32), *state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with_three() -> (CollectionTracker, [CollectibleId; 3]) {
        let mut tracker = CollectionTracker::new();
        let ids = [tracker.register(), tracker.register(), tracker.register()];
        (tracker, ids)
    }

    #[test]
    fn counts_each_distinct_collectible_once() {
        let (mut tracker, [a, b, _]) = tracker_with_three();

        assert_eq!(tracker.on_activate(a), Activation::Collected { collected: 1, remaining: 2 });
        assert_eq!(tracker.on_activate(b), Activation::Collected { collected: 2, remaining: 1 });
        assert_eq!(tracker.collected_count(), 2);
    }

    #[test]
    fn duplicate_activation_is_ignored() {
        let (mut tracker, [a, _, _]) = tracker_with_three();

        tracker.on_activate(a);
        assert_eq!(tracker.on_activate(a), Activation::Ignored);
        assert_eq!(tracker.collected_count(), 1);
        assert_eq!(tracker.state_of(a), Some(CollectibleState::Collected));
    }

    #[test]
    fn unknown_id_is_ignored() {
        let (mut tracker, _) = tracker_with_three();

        assert_eq!(tracker.on_activate(CollectibleId(99)), Activation::Ignored);
        assert_eq!(tracker.collected_count(), 0);
        assert_eq!(tracker.state_of(CollectibleId(99)), None);
    }

    #[test]
    fn win_fires_exactly_once_after_third_distinct() {
        let (mut tracker, [a, b, c]) = tracker_with_three();

        // A, B, A again, C: exactly one win signal, fired after C
        let results = [
            tracker.on_activate(a),
            tracker.on_activate(b),
            tracker.on_activate(a),
            tracker.on_activate(c),
        ];

        assert_eq!(results[2], Activation::Ignored);
        assert_eq!(results[3], Activation::Won);
        let wins = results.iter().filter(|r| **r == Activation::Won).count();
        assert_eq!(wins, 1);
        assert!(tracker.has_won());
    }

    #[test]
    fn no_win_below_three_distinct() {
        let (mut tracker, [a, b, _]) = tracker_with_three();

        tracker.on_activate(a);
        tracker.on_activate(b);
        tracker.on_activate(a);
        tracker.on_activate(b);

        assert_eq!(tracker.collected_count(), 2);
        assert!(!tracker.has_won());
    }

    #[test]
    fn final_state_is_order_independent() {
        let (mut forward, [a1, b1, c1]) = tracker_with_three();
        forward.on_activate(a1);
        forward.on_activate(b1);
        forward.on_activate(c1);

        let (mut reversed, [a2, b2, c2]) = tracker_with_three();
        reversed.on_activate(c2);
        reversed.on_activate(a2);
        reversed.on_activate(b2);

        assert_eq!(forward.collected_count(), reversed.collected_count());
        assert_eq!(forward.has_won(), reversed.has_won());
        assert_eq!(forward.collected_count(), 3);
        assert!(forward.has_won());
    }

    #[test]
    fn activations_after_win_change_nothing() {
        let (mut tracker, [a, b, c]) = tracker_with_three();
        tracker.on_activate(a);
        tracker.on_activate(b);
        tracker.on_activate(c);

        for id in [a, b, c, CollectibleId(17)] {
            assert_eq!(tracker.on_activate(id), Activation::Ignored);
        }
        assert_eq!(tracker.collected_count(), 3);
        assert_eq!(tracker.remaining(), 0);
        assert!(tracker.has_won());
    }

    #[test]
    fn registration_order_matches_iteration_order() {
        let (mut tracker, [a, b, c]) = tracker_with_three();
        tracker.on_activate(b);

        let states: Vec<_> = tracker.iter().collect();
        assert_eq!(states, vec![
            (a, CollectibleState::Pending),
            (b, CollectibleState::Collected),
            (c, CollectibleState::Pending),
        ]);
    }
}
