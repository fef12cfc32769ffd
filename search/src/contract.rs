//! Observer contract between a running search and whoever launched it.

/// Hooks a search calls while it runs.
///
/// # Contract
///
/// - `on_progress` receives expansion counts in batches; the sum over a
///   search equals its total expansions. Implementations must not block
///   for long: the search loop is waiting.
/// - `keep_going` is probed once per dequeued state with that state's depth.
///   Returning `false` ends the search with `TerminationReason::Cancelled`.
///   The probe may be observed late; a search finishes the state it is
///   expanding before looking again.
pub trait SearchObserver {
    /// `expansions` more states were dequeued since the last report.
    fn on_progress(&self, expansions: u64);

    /// Whether to process a state at `depth`.
    fn keep_going(&self, depth: u32) -> bool {
        let _ = depth;
        true
    }
}

/// Observer that ignores progress and never cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SearchObserver for NullObserver {
    fn on_progress(&self, _expansions: u64) {}
}
