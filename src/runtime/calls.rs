use std::any::Any;
use std::fmt;

use super::{Identity, StubDescriptor};

/// Ordered record of every stub a fake was invoked with.
///
/// Entries of any result type share one log. Queries only see entries whose
/// stub type matches the query exactly.
#[derive(Default)]
pub struct CallLog {
    entries: Vec<Box<dyn Any + Send>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record<I: Identity, R: 'static>(&mut self, stub: StubDescriptor<I, R>) {
        self.entries.push(Box::new(stub));
    }

    /// Recorded entries equal to `stub`, in call order.
    pub fn matching<I, R>(&self, stub: &StubDescriptor<I, R>) -> Vec<&StubDescriptor<I, R>>
    where
        I: Identity,
        R: 'static,
    {
        self.entries
            .iter()
            .filter_map(|entry| entry.downcast_ref::<StubDescriptor<I, R>>())
            .filter(|entry| *entry == stub)
            .collect()
    }

    pub fn did_call<I: Identity, R: 'static>(&self, stub: &StubDescriptor<I, R>) -> bool {
        !self.matching(stub).is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl fmt::Debug for CallLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallLog")
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum PlayerMethod {
        Play { track: u32 },
        Stop,
    }

    impl Identity for PlayerMethod {
        fn ordinal(&self) -> usize {
            match self {
                PlayerMethod::Play { .. } => 0,
                PlayerMethod::Stop => 1,
            }
        }
    }

    fn play(track: u32) -> StubDescriptor<PlayerMethod, ()> {
        StubDescriptor::new(PlayerMethod::Play { track })
    }

    #[test]
    fn empty_log_matches_nothing() {
        let log = CallLog::new();
        assert!(log.is_empty());
        assert!(!log.did_call(&play(1)));
    }

    #[test]
    fn matching_returns_every_equal_call_in_order() {
        let mut log = CallLog::new();
        log.record(play(1));
        log.record(StubDescriptor::<_, ()>::new(PlayerMethod::Stop));
        log.record(play(1));
        log.record(play(2));

        assert_eq!(log.len(), 4);
        assert_eq!(log.matching(&play(1)).len(), 2);
        assert_eq!(log.matching(&play(2)).len(), 1);
        assert!(log.did_call(&StubDescriptor::<_, ()>::new(PlayerMethod::Stop)));
        assert!(!log.did_call(&play(3)));
    }

    #[test]
    fn result_type_partitions_the_log() {
        let mut log = CallLog::new();
        log.record(StubDescriptor::<_, bool>::new(PlayerMethod::Stop));
        assert!(!log.did_call(&StubDescriptor::<_, ()>::new(PlayerMethod::Stop)));
        assert!(log.did_call(&StubDescriptor::<_, bool>::new(PlayerMethod::Stop)));
    }

    #[test]
    fn clear_forgets_calls() {
        let mut log = CallLog::new();
        log.record(play(1));
        log.clear();
        assert!(log.is_empty());
        assert!(!log.did_call(&play(1)));
    }
}
