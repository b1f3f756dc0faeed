//! Stable orderings for table views.
//!
//! Both sorts use `sort_by`, which is stable: records with equal keys keep
//! their relative input order.

use std::cmp::Reverse;

use crate::record::{Opportunity, Task};

/// Orders opportunities by amount, largest first.
pub fn sort_by_amount_descending<'a>(
    opportunities: impl IntoIterator<Item = &'a Opportunity>,
) -> Vec<&'a Opportunity> {
    let mut out: Vec<&Opportunity> = opportunities.into_iter().collect();
    out.sort_by_key(|o| Reverse(o.amount));
    out
}

/// Orders tasks by due date, earliest first.
///
/// Due dates are `NaiveDate`s, so the comparison is chronological.
pub fn sort_by_due_date_ascending<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<&'a Task> {
    let mut out: Vec<&Task> = tasks.into_iter().collect();
    out.sort_by_key(|t| t.due_date);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;

    #[test]
    fn amount_descending_keeps_ties_in_input_order() {
        let store = RecordStore::sample();
        let sorted = sort_by_amount_descending(store.opportunities());
        assert_eq!(sorted.len(), store.opportunities().len());
        assert!(sorted.windows(2).all(|w| w[0].amount >= w[1].amount));

        // Stark Fleet Analytics and Acme Security Add-on share 120,000.
        let tied: Vec<&str> = sorted
            .iter()
            .filter(|o| o.amount == 120_000)
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(tied, vec!["Stark Fleet Analytics", "Acme Security Add-on"]);
    }

    #[test]
    fn due_date_ascending_is_chronological() {
        let store = RecordStore::sample();
        let sorted = sort_by_due_date_ascending(store.tasks());
        assert!(sorted.windows(2).all(|w| w[0].due_date <= w[1].due_date));
        assert_eq!(sorted[0].subject, "Renewal paperwork");
    }

    #[test]
    fn empty_input_sorts_to_empty() {
        assert!(sort_by_amount_descending(std::iter::empty()).is_empty());
        assert!(sort_by_due_date_ascending(std::iter::empty()).is_empty());
    }
}
