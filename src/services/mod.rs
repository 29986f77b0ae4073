//! Business logic services.
//!
//! Services contain the core behavior separated from HTTP handlers: the
//! per-entity CRUD semantics, the cross-entity cascades (lead conversion,
//! invoice history, mark-paid), the read-only aggregations, and email
//! delivery.

pub mod account_service;
pub mod customer_service;
pub mod dashboard_service;
pub mod email_service;
pub mod invoice_service;
pub mod lead_service;
pub mod payment_service;
