//! Deduplicate approved decisions so at most one file wins per library item.

use std::collections::HashMap;

use reel_vault_catalog::LibraryItemId;

use crate::decision::ImportDecision;

/// Classification of a batch, as index lists into the input slice.
///
/// Every input index lands in exactly one list; all lists are ascending, so
/// iterating a list visits decisions in input order.
#[derive(Debug, Default)]
pub struct Grouping {
    /// Approved decisions that won their item.
    pub winners: Vec<usize>,
    /// Approved decisions beaten by a larger file for the same item.
    pub duplicates: Vec<usize>,
    /// Approved decisions with no library item to import into.
    pub unmatched: Vec<usize>,
    /// Decisions already rejected upstream.
    pub rejected: Vec<usize>,
}

/// Classify a batch of decisions.
///
/// Approved decisions are grouped by library item id; within each group the
/// largest file wins, with earlier input position breaking ties. Rejected
/// decisions pass through untouched. Pure function, no side effects.
pub fn group_decisions(decisions: &[ImportDecision]) -> Grouping {
    let mut grouping = Grouping::default();
    let mut best: HashMap<LibraryItemId, usize> = HashMap::new();

    for (index, decision) in decisions.iter().enumerate() {
        if !decision.approved() {
            grouping.rejected.push(index);
            continue;
        }

        let Some(item) = &decision.file.library_item else {
            grouping.unmatched.push(index);
            continue;
        };

        match best.get(&item.id).copied() {
            None => {
                best.insert(item.id, index);
            }
            Some(current) if decision.file.size > decisions[current].file.size => {
                grouping.duplicates.push(current);
                best.insert(item.id, index);
            }
            Some(_) => {
                grouping.duplicates.push(index);
            }
        }
    }

    grouping.winners = best.into_values().collect();
    grouping.winners.sort_unstable();
    grouping.duplicates.sort_unstable();

    grouping
}
