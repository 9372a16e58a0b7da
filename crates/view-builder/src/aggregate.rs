//! Survival Rate Aggregation

use feature_engine::Passenger;
use serde::Serialize;
use tracing::debug;

/// Survival rate of one group of passengers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRate {
    pub label: String,
    pub count: usize,
    pub survived: usize,
    /// Percent
    pub rate: f64,
}

/// Survival rate over `members`; `None` for an empty group, whose rate is undefined
pub fn group_rate<'a, I>(label: &str, members: I) -> Option<GroupRate>
where
    I: IntoIterator<Item = &'a Passenger>,
{
    let (count, survived) = members
        .into_iter()
        .fold((0usize, 0usize), |(count, survived), p| {
            (count + 1, survived + usize::from(p.survived))
        });

    if count == 0 {
        debug!("Group {} is empty, omitting", label);
        return None;
    }

    Some(GroupRate {
        label: label.to_string(),
        count,
        survived,
        rate: survived as f64 / count as f64 * 100.0,
    })
}
