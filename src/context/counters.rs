use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug)]
pub struct Counters {
    /// A count of every flip made during MAP search.
    pub total_flips: usize,

    /// A count of ground formula instances emitted by grounding.
    pub ground_instances: usize,

    /// A count of source formulas grounded through the closed-world pruned path.
    pub pruned_sources: usize,

    /// The time taken during search.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            total_flips: 0,
            ground_instances: 0,
            pruned_sources: 0,

            time: Duration::from_secs(0),
        }
    }
}
