//! Fetch lifecycle: one retrieval per (locator, dependency-set) activation.

use std::fmt;

/// Identifier of one retrieval cycle: issue, then settle or get superseded.
pub type ActivationId = u64;

/// Values whose change forces the retrieval to be re-issued. Compared by
/// value equality against the previous activation's list.
pub type DepList = Vec<String>;

/// A retrieval failure, transport and payload-decode alike. The page never
/// branches on what went wrong; the message is kept verbatim for display
/// and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub message: String,
}

impl FetchFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// The three-field result of one retrieval as the page observes it.
///
/// `loading` is true from the moment a retrieval is issued until a
/// settlement lands. Settlements replace exactly one of `data`/`error` and
/// leave the other slot untouched, so a stale payload can coexist with the
/// failure of a later attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchState<T> {
    data: Option<T>,
    loading: bool,
    error: Option<FetchFailure>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&FetchFailure> {
        self.error.as_ref()
    }

    /// Marks a retrieval in flight. Prior data and error stay visible until
    /// the next settlement.
    pub(crate) fn begin(&mut self) {
        self.loading = true;
    }

    pub(crate) fn resolve(&mut self, payload: T) {
        self.data = Some(payload);
    }

    pub(crate) fn reject(&mut self, failure: FetchFailure) {
        self.error = Some(failure);
    }

    /// Ends the in-flight phase regardless of outcome.
    pub(crate) fn finish(&mut self) {
        self.loading = false;
    }
}

/// Mount and activation bookkeeping for the venue retrieval.
///
/// Activation ids are allocated for traceability only. Settlement never
/// compares them: whichever activation settles last while the page is open
/// owns the state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchLifecycle {
    mounted: bool,
    last_activation: ActivationId,
    deps: Option<DepList>,
}

impl FetchLifecycle {
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Marks the owner mounted and forgets the previous dependency list, so
    /// the next `activate` always issues.
    pub(crate) fn mount(&mut self) {
        self.mounted = true;
        self.deps = None;
    }

    /// Records teardown. Settlements observed afterwards must not touch
    /// state.
    pub(crate) fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Allocates a fresh activation when `deps` differs from the previous
    /// activation's list. Returns `None` while unmounted or when the deps
    /// are unchanged, in which case no retrieval is issued.
    pub(crate) fn activate(&mut self, deps: DepList) -> Option<ActivationId> {
        if !self.mounted {
            return None;
        }
        if self.deps.as_ref() == Some(&deps) {
            return None;
        }
        self.deps = Some(deps);
        self.last_activation += 1;
        Some(self.last_activation)
    }
}
