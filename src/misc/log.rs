/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [grounding](crate::grounding).
    pub const GROUNDING: &str = "grounding";

    /// Logs related to evidence parsing and application.
    pub const EVIDENCE: &str = "evidence";

    /// Logs related to [MAP search](crate::procedures::map_search).
    pub const MAP: &str = "map";

    /// Logs related to the [weight optimizer](crate::procedures::optimize).
    pub const NEWTON: &str = "newton";
}
