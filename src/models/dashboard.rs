//! Aggregated read models: invoice summary and dashboard metrics.
//!
//! These are response-only types; nothing here is persisted.

use serde::Serialize;

use crate::models::invoice::Invoice;
use crate::models::lead::Lead;

/// Totals over the whole invoice collection.
///
/// # JSON Example
///
/// ```json
/// {
///   "totalSales": 150.0,
///   "totalReceivables": 50.0,
///   "totalCashCollected": 100.0
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    /// Sum of every invoice total
    pub total_sales: f64,

    /// Sum of totals for invoices not yet paid
    pub total_receivables: f64,

    /// Sum of totals for paid invoices
    pub total_cash_collected: f64,
}

/// The combined dashboard read over leads, customers and invoices.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub metrics: DashboardMetrics,
    pub trends: Trends,
    pub recent_leads: Vec<Lead>,
    pub unpaid_invoices: Vec<Invoice>,
    pub quick_stats: QuickStats,
    pub charts: Charts,
}

/// Headline dashboard figures.
///
/// The MTD fields are historical names: they are computed over the full
/// invoice history, not month-restricted. The labels are kept because the
/// frontend binds to them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_leads: usize,

    pub active_customers: usize,

    pub outstanding_invoices: f64,

    #[serde(rename = "cashReceivedMTD")]
    pub cash_received_mtd: f64,

    #[serde(rename = "salesMTD")]
    pub sales_mtd: f64,

    pub total_receivables: f64,
}

/// Period-over-period movement indicators.
///
/// Placeholder constants; real trend computation needs reliable invoice
/// dates, which the documents do not guarantee.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trends {
    pub sales_trend: f64,
    pub cash_trend: f64,
}

/// Small derived figures shown beside the headline metrics.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickStats {
    /// Share of leads marked "won", percent with one decimal
    pub conversion_rate: f64,

    /// Mean invoice total, two decimals
    pub avg_invoice_value: f64,

    /// Average days to payment; placeholder constant
    pub payment_cycle: i64,
}

/// Chart series for the dashboard graphs. Placeholder constants, like
/// [`Trends`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Charts {
    pub sales_trend_data: Vec<i64>,
    pub collection_trend_data: Vec<i64>,
}
