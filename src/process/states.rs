//! State identifiers shared by the transaction processes.
//!
//! Each process declares its own closed, ordered subset of these; no state
//! outside the declared set is ever derived.

pub const ENQUIRY: &str = "enquiry";
pub const PENDING_PAYMENT: &str = "pending-payment";
pub const PURCHASED: &str = "purchased";
pub const PREAUTHORIZED: &str = "preauthorized";
pub const ACCEPTED: &str = "accepted";
pub const DECLINED: &str = "declined";
pub const CANCELED: &str = "canceled";
pub const DELIVERED: &str = "delivered";
pub const DISPUTED: &str = "disputed";
pub const COMPLETED: &str = "completed";
pub const REVIEWED_BY_PROVIDER: &str = "reviewed-by-provider";
pub const REVIEWED_BY_CUSTOMER: &str = "reviewed-by-customer";
pub const REVIEWED: &str = "reviewed";
