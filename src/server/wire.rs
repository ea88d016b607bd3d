//! Request and response payloads for the HTTP surface.
//!
//! Wire structs are the only place binary floats touch money; they convert
//! to and from the exact-decimal core models at the edge.

use serde::{Deserialize, Serialize};

use crate::core::money::decimal_to_f64;
use crate::filter::{FilterRejection, FilterReport, FilteredTransaction};
use crate::periods::RawPeriod;
use crate::returns::{ReturnsProjection, WindowProjection};
use crate::transactions::{RawTransaction, Transaction};
use crate::validator::{RejectedTransaction, ValidationReport};

/* ---------------- Requests ---------------- */

#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseBody {
    #[serde(default)]
    pub(crate) date: Option<String>,
    #[serde(default)]
    pub(crate) timestamp: Option<String>,
    #[serde(default)]
    pub(crate) amount: Option<f64>,
}

impl From<ExpenseBody> for RawTransaction {
    fn from(body: ExpenseBody) -> Self {
        RawTransaction {
            date: body.date,
            timestamp: body.timestamp,
            amount: body.amount,
            ceiling: None,
            remanent: None,
        }
    }
}

/// The parse endpoint accepts both `{"expenses": [...]}` and a bare list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ParseBody {
    Wrapped {
        #[serde(default)]
        expenses: Vec<ExpenseBody>,
    },
    Bare(Vec<ExpenseBody>),
}

impl ParseBody {
    pub(crate) fn into_expenses(self) -> Vec<ExpenseBody> {
        match self {
            ParseBody::Wrapped { expenses } => expenses,
            ParseBody::Bare(expenses) => expenses,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionInputBody {
    #[serde(default)]
    pub(crate) date: Option<String>,
    #[serde(default)]
    pub(crate) timestamp: Option<String>,
    #[serde(default)]
    pub(crate) amount: Option<f64>,
    #[serde(default)]
    pub(crate) ceiling: Option<f64>,
    #[serde(default)]
    pub(crate) remanent: Option<f64>,
}

impl From<TransactionInputBody> for RawTransaction {
    fn from(body: TransactionInputBody) -> Self {
        RawTransaction {
            date: body.date,
            timestamp: body.timestamp,
            amount: body.amount,
            ceiling: body.ceiling,
            remanent: body.remanent,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PeriodBody {
    #[serde(default)]
    pub(crate) start: Option<String>,
    #[serde(default)]
    pub(crate) end: Option<String>,
    #[serde(default)]
    pub(crate) fixed: Option<f64>,
    #[serde(default)]
    pub(crate) extra: Option<f64>,
}

impl From<PeriodBody> for RawPeriod {
    fn from(body: PeriodBody) -> Self {
        RawPeriod {
            start: body.start,
            end: body.end,
            fixed: body.fixed,
            extra: body.extra,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ValidatorBody {
    pub(crate) wage: f64,
    #[serde(default, rename = "maxInvestment")]
    pub(crate) max_investment: Option<f64>,
    #[serde(default)]
    pub(crate) transactions: Vec<TransactionInputBody>,
}

#[derive(Debug, Deserialize)]
pub struct FilterBody {
    #[serde(default)]
    pub(crate) q: Vec<PeriodBody>,
    #[serde(default)]
    pub(crate) p: Vec<PeriodBody>,
    #[serde(default)]
    pub(crate) k: Vec<PeriodBody>,
    #[serde(default)]
    pub(crate) transactions: Vec<TransactionInputBody>,
}

#[derive(Debug, Deserialize)]
pub struct ReturnsBody {
    pub(crate) age: i32,
    pub(crate) wage: f64,
    pub(crate) inflation: f64,
    #[serde(default)]
    pub(crate) q: Vec<PeriodBody>,
    #[serde(default)]
    pub(crate) p: Vec<PeriodBody>,
    #[serde(default)]
    pub(crate) k: Vec<PeriodBody>,
    #[serde(default)]
    pub(crate) transactions: Vec<TransactionInputBody>,
}

/* ---------------- Responses ---------------- */

#[derive(Debug, Serialize)]
pub struct DetailBody {
    pub(crate) detail: String,
}

#[derive(Debug, Serialize)]
pub struct TransactionBody {
    pub(crate) date: String,
    pub(crate) amount: f64,
    pub(crate) ceiling: f64,
    pub(crate) remanent: f64,
}

impl From<&Transaction> for TransactionBody {
    fn from(tx: &Transaction) -> Self {
        TransactionBody {
            date: tx.date.clone(),
            amount: decimal_to_f64(tx.amount),
            ceiling: decimal_to_f64(tx.ceiling),
            remanent: decimal_to_f64(tx.remanent),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RejectedTransactionBody {
    pub(crate) date: String,
    pub(crate) amount: f64,
    pub(crate) ceiling: f64,
    pub(crate) remanent: f64,
    pub(crate) message: String,
}

impl From<RejectedTransaction> for RejectedTransactionBody {
    fn from(tx: RejectedTransaction) -> Self {
        RejectedTransactionBody {
            date: tx.date,
            amount: decimal_to_f64(tx.amount),
            ceiling: decimal_to_f64(tx.ceiling),
            remanent: decimal_to_f64(tx.remanent),
            message: tx.message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ValidatorResponse {
    pub(crate) valid: Vec<TransactionBody>,
    pub(crate) invalid: Vec<RejectedTransactionBody>,
    pub(crate) duplicates: Vec<RejectedTransactionBody>,
}

impl From<ValidationReport> for ValidatorResponse {
    fn from(report: ValidationReport) -> Self {
        ValidatorResponse {
            valid: report.valid.iter().map(TransactionBody::from).collect(),
            invalid: report.invalid.into_iter().map(Into::into).collect(),
            duplicates: report.duplicates.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FilteredTransactionBody {
    pub(crate) date: String,
    pub(crate) amount: f64,
    pub(crate) ceiling: f64,
    pub(crate) remanent: f64,
    #[serde(rename = "inKPeriod")]
    pub(crate) in_k_period: bool,
}

impl From<FilteredTransaction> for FilteredTransactionBody {
    fn from(tx: FilteredTransaction) -> Self {
        FilteredTransactionBody {
            date: tx.date,
            amount: decimal_to_f64(tx.amount),
            ceiling: decimal_to_f64(tx.ceiling),
            remanent: decimal_to_f64(tx.remanent),
            in_k_period: tx.in_k_period,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FilterRejectionBody {
    pub(crate) date: String,
    pub(crate) amount: f64,
    pub(crate) message: String,
}

impl From<FilterRejection> for FilterRejectionBody {
    fn from(rejection: FilterRejection) -> Self {
        FilterRejectionBody {
            date: rejection.date,
            amount: decimal_to_f64(rejection.amount),
            message: rejection.message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FilterResponse {
    pub(crate) valid: Vec<FilteredTransactionBody>,
    pub(crate) invalid: Vec<FilterRejectionBody>,
}

impl From<FilterReport> for FilterResponse {
    fn from(report: FilterReport) -> Self {
        FilterResponse {
            valid: report.valid.into_iter().map(Into::into).collect(),
            invalid: report.invalid.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SavingsByDateBody {
    pub(crate) start: String,
    pub(crate) end: String,
    pub(crate) amount: f64,
    pub(crate) profits: f64,
    #[serde(rename = "taxBenefit")]
    pub(crate) tax_benefit: f64,
}

impl From<WindowProjection> for SavingsByDateBody {
    fn from(window: WindowProjection) -> Self {
        SavingsByDateBody {
            start: window.start,
            end: window.end,
            amount: decimal_to_f64(window.amount),
            profits: decimal_to_f64(window.profits),
            tax_benefit: decimal_to_f64(window.tax_benefit),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnsResponse {
    #[serde(rename = "transactionsTotalAmount")]
    pub(crate) transactions_total_amount: f64,
    #[serde(rename = "transactionsTotalCeiling")]
    pub(crate) transactions_total_ceiling: f64,
    #[serde(rename = "savingsByDates")]
    pub(crate) savings_by_dates: Vec<SavingsByDateBody>,
}

impl From<ReturnsProjection> for ReturnsResponse {
    fn from(projection: ReturnsProjection) -> Self {
        ReturnsResponse {
            transactions_total_amount: decimal_to_f64(projection.total_amount),
            transactions_total_ceiling: decimal_to_f64(projection.total_ceiling),
            savings_by_dates: projection
                .savings_by_dates
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub(crate) status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PerformanceBody {
    pub(crate) time: String,
    pub(crate) memory: String,
    pub(crate) threads: usize,
}
