//! Team membership reconciliation.
//!
//! Computes the members to add and remove so that a team's current member
//! list matches the desired one.
//!
//! # Invariants
//! - Inputs are treated as sets: duplicates collapse and order is ignored.
//! - `to_add` and the current set are disjoint.
//! - `to_remove` is a subset of the current set and disjoint from the desired set.
//! - `(current - to_remove) ∪ to_add == desired`.
//! - Both deltas iterate in ascending order, so callers apply changes deterministically.

use std::collections::BTreeSet;

use serde::Serialize;

/// Members to add and remove to reach the desired membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MembershipDelta {
    to_add: BTreeSet<String>,
    #[serde(rename = "to_del")]
    to_remove: BTreeSet<String>,
}

impl MembershipDelta {
    /// Members present in the desired list but not in the current one.
    pub fn to_add(&self) -> &BTreeSet<String> {
        &self.to_add
    }

    /// Members present in the current list but not in the desired one.
    pub fn to_remove(&self) -> &BTreeSet<String> {
        &self.to_remove
    }

    /// True when the current membership already matches the desired one.
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }

    /// Total number of membership changes.
    pub fn len(&self) -> usize {
        self.to_add.len() + self.to_remove.len()
    }

    /// Apply the delta to a current membership list.
    pub fn apply<I>(&self, current: I) -> BTreeSet<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut members = collect_set(current);
        members.retain(|member| !self.to_remove.contains(member));
        members.extend(self.to_add.iter().cloned());
        members
    }

    /// The same delta with no removals, for additive-only reconciliation.
    pub fn without_removals(self) -> Self {
        Self {
            to_add: self.to_add,
            to_remove: BTreeSet::new(),
        }
    }

}

fn collect_set<I>(members: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    members
        .into_iter()
        .map(|member| member.as_ref().to_string())
        .collect()
}

/// Compute the membership delta between `desired` and `current`.
///
/// ```
/// use grafana_client::diff_members;
///
/// let delta = diff_members(
///     ["foo@example.com", "bar@example.com"],
///     ["bar@example.com", "random@example.com"],
/// );
/// assert!(delta.to_add().contains("foo@example.com"));
/// assert!(delta.to_remove().contains("random@example.com"));
/// ```
pub fn diff_members<D, C>(desired: D, current: C) -> MembershipDelta
where
    D: IntoIterator,
    D::Item: AsRef<str>,
    C: IntoIterator,
    C::Item: AsRef<str>,
{
    let desired = collect_set(desired);
    let current = collect_set(current);

    MembershipDelta {
        to_add: desired.difference(&current).cloned().collect(),
        to_remove: current.difference(&desired).cloned().collect(),
    }
}
