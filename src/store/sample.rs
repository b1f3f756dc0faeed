//! Built-in sample dataset: a small B2B sales book.

use chrono::NaiveDate;

use super::RecordStore;
use crate::category::{AccountStatus, AccountType, Priority, RelatedType, Stage, TaskStatus};
use crate::record::{Account, Opportunity, RecordId, Task};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("sample dates are valid calendar dates")
}

#[allow(clippy::too_many_arguments)]
fn account(
    key: &str,
    name: &str,
    industry: &str,
    status: AccountStatus,
    account_type: AccountType,
    owner: &str,
    annual_revenue: u64,
    email: &str,
    last_activity: NaiveDate,
) -> Account {
    Account {
        id: RecordId::from_key("account", key),
        name: name.to_string(),
        industry: industry.to_string(),
        status,
        account_type,
        owner: owner.to_string(),
        annual_revenue,
        email: email.to_string(),
        last_activity,
    }
}

#[allow(clippy::too_many_arguments)]
fn opportunity(
    key: &str,
    name: &str,
    account_name: &str,
    stage: Stage,
    amount: u64,
    probability: u8,
    close_date: NaiveDate,
    owner: &str,
    description: &str,
) -> Opportunity {
    Opportunity {
        id: RecordId::from_key("opportunity", key),
        name: name.to_string(),
        account_name: account_name.to_string(),
        stage,
        amount,
        probability,
        close_date,
        owner: owner.to_string(),
        description: description.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn task(
    key: &str,
    subject: &str,
    related_to: &str,
    related_type: RelatedType,
    status: TaskStatus,
    priority: Priority,
    due_date: NaiveDate,
    owner: &str,
    description: &str,
) -> Task {
    Task {
        id: RecordId::from_key("task", key),
        subject: subject.to_string(),
        related_to: related_to.to_string(),
        related_type,
        status,
        priority,
        due_date,
        owner: owner.to_string(),
        description: description.to_string(),
    }
}

fn accounts() -> Vec<Account> {
    use AccountStatus::{Active, Inactive, Prospect};
    use AccountType::{Customer, Lead};

    vec![
        account("acc-001", "Acme Corporation", "Technology", Active, Customer, "Sarah Chen", 5_200_000, "contact@acme.com", date(2024, 1, 15)),
        account("acc-002", "Globex Industries", "Manufacturing", Active, Customer, "Michael Torres", 12_800_000, "info@globex.com", date(2024, 1, 12)),
        account("acc-003", "Initech Solutions", "Financial Services", Prospect, Lead, "Sarah Chen", 3_400_000, "hello@initech.io", date(2024, 1, 10)),
        account("acc-004", "Umbrella Health", "Healthcare", Active, Customer, "Emily Watson", 8_900_000, "partners@umbrellahealth.com", date(2024, 1, 14)),
        account("acc-005", "Stark Logistics", "Transportation", Prospect, Lead, "Michael Torres", 6_100_000, "ops@starklogistics.com", date(2024, 1, 8)),
        account("acc-006", "Wayne Retail Group", "Retail", Inactive, Customer, "Emily Watson", 2_700_000, "buying@wayneretail.com", date(2023, 11, 20)),
        account("acc-007", "Cyberdyne Analytics", "Technology", Prospect, Lead, "David Kim", 1_900_000, "sales@cyberdyne.ai", date(2024, 1, 11)),
        account("acc-008", "Soylent Foods", "Food & Beverage", Active, Customer, "David Kim", 4_300_000, "procurement@soylentfoods.com", date(2024, 1, 13)),
    ]
}

fn opportunities() -> Vec<Opportunity> {
    use Stage::{ClosedLost, ClosedWon, Discovery, Negotiation, Proposal, Qualification};

    vec![
        opportunity("opp-001", "Acme Platform Expansion", "Acme Corporation", Negotiation, 185_000, 75, date(2024, 2, 15), "Sarah Chen", "Expand platform licenses to three new regional offices."),
        opportunity("opp-002", "Globex ERP Integration", "Globex Industries", Proposal, 240_000, 60, date(2024, 2, 28), "Michael Torres", "Integrate order management with the Globex ERP rollout."),
        opportunity("opp-003", "Initech Cloud Migration", "Initech Solutions", Discovery, 95_000, 20, date(2024, 3, 30), "Sarah Chen", "Assess migration of legacy reporting to the cloud."),
        opportunity("opp-004", "Umbrella Patient Portal", "Umbrella Health", ClosedWon, 150_000, 100, date(2024, 1, 5), "Emily Watson", "Patient self-service portal, signed for two years."),
        opportunity("opp-005", "Stark Fleet Analytics", "Stark Logistics", Qualification, 120_000, 35, date(2024, 3, 15), "Michael Torres", "Telematics dashboards for the regional fleet."),
        opportunity("opp-006", "Wayne POS Refresh", "Wayne Retail Group", ClosedLost, 80_000, 0, date(2023, 12, 15), "Emily Watson", "Point-of-sale refresh, lost on price."),
        opportunity("opp-007", "Cyberdyne Data Pilot", "Cyberdyne Analytics", Discovery, 45_000, 15, date(2024, 4, 10), "David Kim", "Ninety-day pilot on the analytics workspace."),
        opportunity("opp-008", "Soylent Supply Chain Suite", "Soylent Foods", Proposal, 210_000, 55, date(2024, 2, 20), "David Kim", "Supplier planning and demand forecasting bundle."),
        opportunity("opp-009", "Globex Support Renewal", "Globex Industries", ClosedWon, 60_000, 100, date(2024, 1, 8), "Michael Torres", "Annual premium support renewal."),
        opportunity("opp-010", "Acme Security Add-on", "Acme Corporation", Qualification, 120_000, 40, date(2024, 3, 5), "Sarah Chen", "Single sign-on and audit logging add-on."),
    ]
}

fn tasks() -> Vec<Task> {
    use Priority::{High, Low, Medium};
    use RelatedType::{Account as OnAccount, Opportunity as OnOpportunity};
    use TaskStatus::{Completed, InProgress, NotStarted};

    vec![
        task("task-001", "Follow up on contract terms", "Acme Platform Expansion", OnOpportunity, InProgress, High, date(2024, 1, 20), "Sarah Chen", "Legal sent redlines on the renewal clause."),
        task("task-002", "Schedule ERP demo", "Globex ERP Integration", OnOpportunity, NotStarted, High, date(2024, 1, 22), "Michael Torres", "Book the integration team for a live walkthrough."),
        task("task-003", "Quarterly business review", "Umbrella Health", OnAccount, Completed, Medium, date(2024, 1, 10), "Emily Watson", "Review adoption metrics with the clinical ops lead."),
        task("task-004", "Send discovery questionnaire", "Initech Cloud Migration", OnOpportunity, NotStarted, Medium, date(2024, 1, 25), "Sarah Chen", "Collect current reporting volumes and data sources."),
        task("task-005", "Prepare pricing proposal", "Soylent Supply Chain Suite", OnOpportunity, InProgress, High, date(2024, 1, 18), "David Kim", "Tiered pricing for the forecasting bundle."),
        task("task-006", "Re-engagement call", "Wayne Retail Group", OnAccount, NotStarted, Low, date(2024, 2, 1), "Emily Watson", "Check in six weeks after the lost deal."),
        task("task-007", "Technical requirements review", "Stark Fleet Analytics", OnOpportunity, Completed, Medium, date(2024, 1, 12), "Michael Torres", "Confirm telematics feed formats."),
        task("task-008", "Intro meeting with data team", "Cyberdyne Analytics", OnAccount, NotStarted, Low, date(2024, 1, 29), "David Kim", "Meet the data platform owners before the pilot."),
        task("task-009", "Security questionnaire", "Acme Security Add-on", OnOpportunity, InProgress, Medium, date(2024, 1, 22), "Sarah Chen", "Answer the vendor risk assessment."),
        task("task-010", "Renewal paperwork", "Globex Industries", OnAccount, Completed, Low, date(2024, 1, 9), "Michael Torres", "Countersigned support renewal filed."),
    ]
}

pub(super) fn build() -> RecordStore {
    RecordStore::builder()
        .accounts(accounts())
        .opportunities(opportunities())
        .tasks(tasks())
        .build()
        .expect("built-in sample data satisfies store invariants")
}
