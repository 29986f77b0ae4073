//! Aggregation engine - pure read-only passes over loaded collections.
//!
//! Nothing here mutates or persists. Handlers load the collections they
//! need and hand them over; keeping these functions pure keeps them
//! trivially testable.

use crate::models::customer::Customer;
use crate::models::dashboard::{
    Charts, DashboardMetrics, DashboardResponse, InvoiceSummary, QuickStats, Trends,
};
use crate::models::invoice::Invoice;
use crate::models::lead::Lead;

/// How many entries the dashboard's "recent" panels show.
const RECENT_PANEL_SIZE: usize = 4;

/// Totals over the whole invoice collection.
///
/// Receivables are everything not yet paid; cash collected is everything
/// paid. All figures rounded to 2 decimals.
pub fn invoice_summary(invoices: &[Invoice]) -> InvoiceSummary {
    let total_sales: f64 = invoices.iter().map(|inv| inv.total).sum();

    let total_receivables: f64 = invoices
        .iter()
        .filter(|inv| inv.status != "paid")
        .map(|inv| inv.total)
        .sum();

    let total_cash_collected: f64 = invoices
        .iter()
        .filter(|inv| inv.status == "paid")
        .map(|inv| inv.total)
        .sum();

    InvoiceSummary {
        total_sales: round2(total_sales),
        total_receivables: round2(total_receivables),
        total_cash_collected: round2(total_cash_collected),
    }
}

/// The combined dashboard read over leads, customers and invoices.
///
/// The `cashReceivedMTD`/`salesMTD` figures cover the full history despite
/// their names; see [`DashboardMetrics`]. Trend and chart values are fixed
/// placeholders.
pub fn dashboard_metrics(
    leads: &[Lead],
    customers: &[Customer],
    invoices: &[Invoice],
) -> DashboardResponse {
    let outstanding: f64 = invoices
        .iter()
        .filter(|inv| inv.status != "paid")
        .map(|inv| inv.total)
        .sum();

    let cash_received: f64 = invoices
        .iter()
        .filter(|inv| inv.status == "paid")
        .map(|inv| inv.total)
        .sum();

    let total_sales: f64 = invoices.iter().map(|inv| inv.total).sum();

    let recent_leads = last_n(leads, RECENT_PANEL_SIZE);

    let unpaid: Vec<Invoice> = invoices
        .iter()
        .filter(|inv| inv.status != "paid")
        .cloned()
        .collect();
    let unpaid_invoices = last_n(&unpaid, RECENT_PANEL_SIZE);

    DashboardResponse {
        metrics: DashboardMetrics {
            total_leads: leads.len(),
            active_customers: customers.len(),
            outstanding_invoices: round2(outstanding),
            cash_received_mtd: round2(cash_received),
            sales_mtd: round2(total_sales),
            total_receivables: round2(outstanding),
        },
        trends: Trends {
            sales_trend: 12.5,
            cash_trend: 15.2,
        },
        recent_leads,
        unpaid_invoices,
        quick_stats: QuickStats {
            conversion_rate: conversion_rate(leads),
            avg_invoice_value: avg_invoice_value(invoices),
            payment_cycle: 32,
        },
        charts: Charts {
            sales_trend_data: vec![15000, 18000, 21000],
            collection_trend_data: vec![12000, 15000, 18000],
        },
    }
}

/// Share of leads marked "won", as a percentage with one decimal.
///
/// Zero when there are no leads at all.
fn conversion_rate(leads: &[Lead]) -> f64 {
    if leads.is_empty() {
        return 0.0;
    }

    let won = leads.iter().filter(|lead| lead.status == "won").count();
    round1(won as f64 / leads.len() as f64 * 100.0)
}

/// Mean invoice total, two decimals. Zero when there are no invoices.
fn avg_invoice_value(invoices: &[Invoice]) -> f64 {
    if invoices.is_empty() {
        return 0.0;
    }

    let total: f64 = invoices.iter().map(|inv| inv.total).sum();
    round2(total / invoices.len() as f64)
}

/// Last `n` items in list order.
fn last_n<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items[items.len().saturating_sub(n)..].to_vec()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
