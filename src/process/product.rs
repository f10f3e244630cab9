use super::definition::ProcessDefinition;
use super::states;
use crate::transaction::Transaction;

/// Name of the product purchase process.
pub const PRODUCT_PROCESS: &str = "flex-product-default-process";

/// States of the product process, in order.
const STATES: &[&str] = &[
    states::ENQUIRY,
    states::PENDING_PAYMENT,
    states::PURCHASED,
    states::DELIVERED,
    states::DISPUTED,
    states::CANCELED,
    states::COMPLETED,
    states::REVIEWED_BY_PROVIDER,
    states::REVIEWED_BY_CUSTOMER,
    states::REVIEWED,
];

/// Last transition name mapped to the state it lands in.
const TRANSITION_TO_STATE: &[(&str, &str)] = &[
    ("enquire", states::ENQUIRY),
    ("request-payment", states::PENDING_PAYMENT),
    ("request-payment-after-enquiry", states::PENDING_PAYMENT),
    ("confirm-payment", states::PURCHASED),
    ("expire-payment", states::CANCELED),
    ("cancel", states::CANCELED),
    ("mark-delivered", states::DELIVERED),
    ("dispute", states::DISPUTED),
    ("mark-received", states::COMPLETED),
    ("auto-complete", states::COMPLETED),
    ("review-1-by-provider", states::REVIEWED_BY_PROVIDER),
    ("review-1-by-customer", states::REVIEWED_BY_CUSTOMER),
    ("review-2-by-provider", states::REVIEWED),
    ("review-2-by-customer", states::REVIEWED),
    ("expire-review-period", states::REVIEWED),
];

/// The product purchase process: enquiry through payment, delivery,
/// optional dispute, and mutual review.
pub struct ProductProcess;

impl ProcessDefinition for ProductProcess {
    fn name(&self) -> &'static str {
        PRODUCT_PROCESS
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::Participant;
    use chrono::{TimeZone, Utc};

    fn tx_with(transitions: &[&str]) -> Transaction {
        let mut tx = Transaction::new(
            PRODUCT_PROCESS,
            Participant::new("Ana"),
            Participant::new("Bruno"),
        );
        for (i, name) in transitions.iter().enumerate() {
            let at = Utc.with_ymd_and_hms(2024, 3, 10, 9, i as u32, 0).unwrap();
            tx.transition(*name, at);
        }
        tx
    }

    #[test]
    fn empty_history_derives_none() {
        assert_eq!(ProductProcess.derive_state(&tx_with(&[])), None);
    }

    #[test]
    fn unknown_transition_derives_none() {
        let tx = tx_with(&["enquire", "warp-drive"]);
        assert_eq!(ProductProcess.derive_state(&tx), None);
    }

    #[test]
    fn last_transition_wins() {
        let tx = tx_with(&["enquire", "request-payment", "confirm-payment"]);
        assert_eq!(ProductProcess.derive_state(&tx), Some(states::PURCHASED));
    }

    #[test]
    fn payment_expiry_lands_in_canceled() {
        let tx = tx_with(&["request-payment", "expire-payment"]);
        assert_eq!(ProductProcess.derive_state(&tx), Some(states::CANCELED));
    }

    #[test]
    fn review_flow_states() {
        let base = &["confirm-payment", "mark-delivered", "mark-received"];

        let mut tx = tx_with(base);
        tx.transition(
            "review-1-by-customer",
            Utc.with_ymd_and_hms(2024, 3, 11, 9, 0, 0).unwrap(),
        );
        assert_eq!(
            ProductProcess.derive_state(&tx),
            Some(states::REVIEWED_BY_CUSTOMER)
        );

        tx.transition(
            "review-2-by-provider",
            Utc.with_ymd_and_hms(2024, 3, 11, 10, 0, 0).unwrap(),
        );
        assert_eq!(ProductProcess.derive_state(&tx), Some(states::REVIEWED));
    }

    #[test]
    fn every_derivable_state_is_declared() {
        for &(_, state) in TRANSITION_TO_STATE {
            assert!(
                STATES.contains(&state),
                "derived state {state} missing from the declared set"
            );
        }
    }
}
