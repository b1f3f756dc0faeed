//! Short ranked lists for the dashboard panels.

use chrono::NaiveDate;

use super::sort::{sort_by_amount_descending, sort_by_due_date_ascending};
use crate::record::{Opportunity, Task};

/// The `n` largest open opportunities, ties in input order.
pub fn top_open_opportunities<'a>(
    opportunities: impl IntoIterator<Item = &'a Opportunity>,
    n: usize,
) -> Vec<&'a Opportunity> {
    if n == 0 {
        return Vec::new();
    }
    let mut ranked = sort_by_amount_descending(opportunities.into_iter().filter(|o| o.is_open()));
    ranked.truncate(n);
    ranked
}

/// The `n` open tasks due soonest, ties in input order.
pub fn upcoming_open_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>, n: usize) -> Vec<&'a Task> {
    if n == 0 {
        return Vec::new();
    }
    let mut ranked = sort_by_due_date_ascending(tasks.into_iter().filter(|t| t.is_open()));
    ranked.truncate(n);
    ranked
}

/// Open tasks whose due date is before `today`, in input order.
pub fn overdue_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>, today: NaiveDate) -> Vec<&'a Task> {
    tasks.into_iter().filter(|t| t.is_overdue(today)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;

    #[test]
    fn top_four_open_opportunities() {
        let store = RecordStore::sample();
        let names: Vec<&str> = top_open_opportunities(store.opportunities(), 4)
            .iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Globex ERP Integration",
                "Soylent Supply Chain Suite",
                "Acme Platform Expansion",
                "Stark Fleet Analytics",
            ]
        );
    }

    #[test]
    fn top_returns_fewer_when_fewer_exist() {
        let store = RecordStore::sample();
        assert_eq!(top_open_opportunities(store.opportunities(), 50).len(), 7);
        assert!(top_open_opportunities(store.opportunities(), 0).is_empty());
    }

    #[test]
    fn upcoming_four_open_tasks() {
        let store = RecordStore::sample();
        let subjects: Vec<&str> = upcoming_open_tasks(store.tasks(), 4)
            .iter()
            .map(|t| t.subject.as_str())
            .collect();
        assert_eq!(
            subjects,
            vec![
                "Prepare pricing proposal",
                "Follow up on contract terms",
                "Schedule ERP demo",
                "Security questionnaire",
            ]
        );
        assert!(upcoming_open_tasks(store.tasks(), 0).is_empty());
    }

    #[test]
    fn overdue_relative_to_reference_date() {
        let store = RecordStore::sample();
        let today = NaiveDate::from_ymd_opt(2024, 1, 22).unwrap();
        let subjects: Vec<&str> = overdue_tasks(store.tasks(), today)
            .iter()
            .map(|t| t.subject.as_str())
            .collect();
        assert_eq!(
            subjects,
            vec![
                "Follow up on contract terms",
                "Schedule ERP demo",
                "Prepare pricing proposal",
                "Security questionnaire",
            ]
        );
    }
}
