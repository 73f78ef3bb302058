use uuid::Uuid;

/// Source of disambiguating suffixes for entity ids minted by purchases.
///
/// The shop catalog reuses product ids across repeated purchases, so every
/// minted asset or expense gets `<product id>_<suffix>` with a suffix drawn
/// from an injected source instead of the wall clock.
pub trait IdSource: Send + Sync {
    /// Returns the next unused suffix.
    fn next_suffix(&mut self) -> String;

    /// Mints a full entry id for the given catalog base id.
    fn entry_id(&mut self, base: &str) -> String {
        format!("{}_{}", base, self.next_suffix())
    }
}

/// Monotonic counter source. Deterministic, the default for sessions.
#[derive(Debug, Clone, Default)]
pub struct CounterIds {
    next: u64,
}

impl CounterIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting from `next`, for callers resuming a numbering scheme.
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl IdSource for CounterIds {
    fn next_suffix(&mut self) -> String {
        self.next += 1;
        self.next.to_string()
    }
}

/// Random source for embedders that want collision-free ids without
/// carrying counter state.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_suffix(&mut self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
