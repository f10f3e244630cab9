//! The declarative rule tables, one per supported process.
//!
//! Each table maps `(process_state, viewing_role)` to the UI flags for that
//! combination. Rules are order-significant: the first match wins, and the
//! table's default hands back the bare descriptor untouched.

use super::error::TableError;
use super::matcher::Pattern::{Any, Is};
use super::matcher::RuleTable;
use crate::process::{DAILY_PROCESS, PRODUCT_PROCESS, states};
use crate::transaction::Role;

/// Rules for the product purchase process.
///
/// `sale_notification` fires only here, for a fresh purchase seen by the
/// provider; no other table grants that flag.
pub fn product_table() -> Result<RuleTable, TableError> {
    RuleTable::builder(PRODUCT_PROCESS)
        .rule(Is(states::ENQUIRY), Any, |d| d.needs_action().emphasized())
        .rule(Is(states::PENDING_PAYMENT), Is(Role::Customer), |d| {
            d.needs_action()
        })
        .rule(Is(states::PENDING_PAYMENT), Is(Role::Provider), |d| {
            d.needs_action()
        })
        .rule(Is(states::CANCELED), Any, |d| d.finalized())
        .rule(Is(states::PURCHASED), Is(Role::Provider), |d| {
            d.needs_action().sale_notification()
        })
        .rule(Is(states::DELIVERED), Is(Role::Customer), |d| {
            d.needs_action()
        })
        .rule(Is(states::DISPUTED), Any, |d| d.needs_action())
        .rule(Is(states::COMPLETED), Any, |d| d.needs_action())
        .rule(Is(states::REVIEWED_BY_PROVIDER), Is(Role::Customer), |d| {
            d.needs_action()
        })
        .rule(Is(states::REVIEWED_BY_CUSTOMER), Is(Role::Provider), |d| {
            d.needs_action()
        })
        .rule(Is(states::REVIEWED), Any, |d| d.finalized())
        .default(|d| d)
        .build()
}

/// Rules for the daily booking process.
pub fn daily_table() -> Result<RuleTable, TableError> {
    RuleTable::builder(DAILY_PROCESS)
        .rule(Is(states::ENQUIRY), Any, |d| d.needs_action().emphasized())
        .rule(Is(states::PENDING_PAYMENT), Is(Role::Customer), |d| {
            d.needs_action()
        })
        .rule(Is(states::CANCELED), Any, |d| d.finalized())
        .rule(Is(states::PREAUTHORIZED), Is(Role::Provider), |d| {
            d.needs_action()
        })
        .rule(Is(states::ACCEPTED), Any, |d| d.needs_action().emphasized())
        .rule(Is(states::DECLINED), Any, |d| d.finalized())
        .rule(Is(states::DELIVERED), Any, |d| d.needs_action())
        .rule(Is(states::REVIEWED_BY_PROVIDER), Is(Role::Customer), |d| {
            d.needs_action()
        })
        .rule(Is(states::REVIEWED_BY_CUSTOMER), Is(Role::Provider), |d| {
            d.needs_action()
        })
        .rule(Is(states::REVIEWED), Any, |d| d.finalized())
        .default(|d| d)
        .build()
}
