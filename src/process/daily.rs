use super::definition::ProcessDefinition;
use super::states;
use crate::transaction::Transaction;

/// Name of the daily booking process.
pub const DAILY_PROCESS: &str = "flex-default-process";

/// States of the daily booking process, in order.
const STATES: &[&str] = &[
    states::ENQUIRY,
    states::PENDING_PAYMENT,
    states::PREAUTHORIZED,
    states::ACCEPTED,
    states::DECLINED,
    states::CANCELED,
    states::DELIVERED,
    states::REVIEWED_BY_PROVIDER,
    states::REVIEWED_BY_CUSTOMER,
    states::REVIEWED,
];

/// Last transition name mapped to the state it lands in.
const TRANSITION_TO_STATE: &[(&str, &str)] = &[
    ("enquire", states::ENQUIRY),
    ("request-payment", states::PENDING_PAYMENT),
    ("request-payment-after-enquiry", states::PENDING_PAYMENT),
    ("confirm-payment", states::PREAUTHORIZED),
    ("accept", states::ACCEPTED),
    ("decline", states::DECLINED),
    ("expire", states::DECLINED),
    ("expire-payment", states::CANCELED),
    ("cancel", states::CANCELED),
    ("complete", states::DELIVERED),
    ("review-1-by-provider", states::REVIEWED_BY_PROVIDER),
    ("review-1-by-customer", states::REVIEWED_BY_CUSTOMER),
    ("review-2-by-provider", states::REVIEWED),
    ("review-2-by-customer", states::REVIEWED),
    ("expire-review-period", states::REVIEWED),
];

/// The daily booking process: enquiry, payment preauthorization, provider
/// accept/decline, delivery and mutual review.
pub struct DailyProcess;

impl ProcessDefinition for DailyProcess {
    fn name(&self) -> &'static str {
        DAILY_PROCESS
    }

    fn states(&self) -> &'static [&'static str] {
        STATES
    }

    fn derive_state(&self, tx: &Transaction) -> Option<&'static str> {
        let last = tx.last_transition()?;
        TRANSITION_TO_STATE
            .iter()
            .find(|(transition, _)| *transition == last.name)
            .map(|&(_, state)| state)
    }
}
