//! Oracle availability errors.

/// Returned when a query needs an oracle the environment was built without.
///
/// Rule evaluation itself never fails (malformed content degrades to zero
/// contributions), so this is the only error the engine can surface, and it
/// indicates a wiring mistake in the embedding host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// No skill oracle was provided.
    #[error("Skill oracle is not available")]
    SkillsNotAvailable,

    /// No equipment oracle was provided.
    #[error("Equipment oracle is not available")]
    EquipsNotAvailable,

    /// No tables oracle was provided.
    #[error("Tables oracle is not available")]
    TablesNotAvailable,

    /// No switch oracle was provided.
    #[error("Switch oracle is not available")]
    SwitchesNotAvailable,
}
