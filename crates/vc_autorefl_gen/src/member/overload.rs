use foldhash::fast::FixedState;
use hashbrown::HashMap;
use vc_autorefl_meta::{Field, FieldMode};

const OVERLOAD_HASH_STATE: FixedState = FixedState::with_seed(0x3C6E_F372_FE94_F82B);

/// Overload sets of one type, keyed by member name.
///
/// Only eligible fields take part: a private overload does not turn a public
/// function into an overloaded one.
#[derive(Debug)]
pub(crate) struct OverloadSets<'a> {
    sets: HashMap<&'a str, OverloadSet, FixedState>,
}

#[derive(Debug, Clone, Copy)]
struct OverloadSet {
    count: usize,
    next_ordinal: usize,
    mode: FieldMode,
    mixed_modes: bool,
}

impl<'a> OverloadSets<'a> {
    pub fn new(fields: impl IntoIterator<Item = &'a Field>) -> Self {
        let mut sets: HashMap<&'a str, OverloadSet, FixedState> =
            HashMap::with_hasher(OVERLOAD_HASH_STATE);

        for field in fields {
            sets.entry(field.name.as_str())
                .and_modify(|set| {
                    set.count += 1;
                    set.mixed_modes |= set.mode != field.mode;
                })
                .or_insert(OverloadSet {
                    count: 1,
                    next_ordinal: 0,
                    mode: field.mode,
                    mixed_modes: false,
                });
        }

        Self { sets }
    }

    /// Number of eligible fields named `name`.
    #[inline]
    pub fn count(&self, name: &str) -> usize {
        self.sets.get(name).map_or(0, |set| set.count)
    }

    #[inline]
    pub fn is_overloaded(&self, name: &str) -> bool {
        self.count(name) > 1
    }

    /// Whether fields named `name` disagree on their mode.
    #[inline]
    pub fn has_mixed_modes(&self, name: &str) -> bool {
        self.sets.get(name).is_some_and(|set| set.mixed_modes)
    }

    /// Hands out `0, 1, 2, ...` for successive fields named `name`.
    pub fn next_ordinal(&mut self, name: &str) -> usize {
        match self.sets.get_mut(name) {
            Some(set) => {
                let ordinal = set.next_ordinal;
                set.next_ordinal += 1;
                ordinal
            }
            None => 0,
        }
    }
}
