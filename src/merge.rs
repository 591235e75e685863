//! Merge-or-create semantics for pair-group buckets.
//!
//! Each bucket is an ordered sequence of [`PairGroup`]s. A newly classified
//! pair either starts a new group, extends an existing one (merging
//! transitive chains like a~b, b~c into [a, b, c]), or is dropped because a
//! group already holds both members.

use crate::analyze::analyze_pair;
use crate::inventory::CharInventory;
use crate::types::PairGroup;

/// How a candidate pair relates to one existing group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Membership {
    Both,
    OnlyFirst,
    OnlySecond,
    Neither,
}

fn membership(group: &PairGroup, a: &str, b: &str) -> Membership {
    match (group.contains(a), group.contains(b)) {
        (true, true) => Membership::Both,
        (true, false) => Membership::OnlyFirst,
        (false, true) => Membership::OnlySecond,
        (false, false) => Membership::Neither,
    }
}

/// True when `candidate` forms a valid minimal or tonal pair with every
/// member of `group`.
fn pairs_with_all(candidate: &str, group: &PairGroup, inventory: &CharInventory) -> bool {
    group
        .members
        .iter()
        .all(|member| analyze_pair(candidate, member, inventory).is_minimal_or_tonal())
}

/// Submit a classified pair `[a, b]` to a bucket.
///
/// Groups are scanned in insertion order. A group already holding both
/// members suppresses new-group creation. A group holding exactly one member
/// absorbs the other only if that newcomer pairs with every existing member;
/// the first group that fully matches wins, and later groups are then
/// consulted only for the contains-both check. If no group absorbed the pair
/// and none held both members, `[a, b]` is appended as a new group.
pub fn merge_pair(
    bucket: &mut Vec<PairGroup>,
    a: &str,
    b: &str,
    inventory: &CharInventory,
) {
    let mut add_as_new = true;
    let mut absorbed = false;

    for group in bucket.iter_mut() {
        match membership(group, a, b) {
            Membership::Both => {
                add_as_new = false;
            }
            Membership::OnlyFirst if !absorbed => {
                if pairs_with_all(b, group, inventory) {
                    group.members.push(b.to_string());
                    add_as_new = false;
                    absorbed = true;
                }
            }
            Membership::OnlySecond if !absorbed => {
                if pairs_with_all(a, group, inventory) {
                    group.members.push(a.to_string());
                    add_as_new = false;
                    absorbed = true;
                }
            }
            _ => {}
        }
    }

    if add_as_new {
        bucket.push(PairGroup::from_pair(a, b));
    }
}
