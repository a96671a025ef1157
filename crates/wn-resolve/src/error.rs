use thiserror::Error;

/// Why a path result ended up `Failed`.
///
/// Recorded on the result rather than returned, so one bad request never
/// stops the rest of the step.  Retrying is the requester's decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathFailure {
    /// An endpoint is absent from the current topology or disabled.
    #[error("endpoint not present in the current topology")]
    MissingEndpoint,

    /// Both endpoints exist but no traversable path connects them.
    #[error("no traversable path between endpoints")]
    Unreachable,

    /// A path exists but costs more than the request allows.
    #[error("path cost exceeds the requested maximum")]
    OverBudget,
}
