//! Fundamental statement and metric records.
//!
//! Field coverage follows the upstream payloads; amounts are reported in the
//! statement's filing currency.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One income-statement period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    pub symbol: String,
    /// Fiscal period end date.
    pub date: NaiveDate,
    /// Period type (Q1..Q4, FY).
    pub period: Option<String>,
    pub fiscal_year: Option<String>,
    pub filing_date: Option<NaiveDate>,
    pub revenue: Option<f64>,
    pub cost_of_revenue: Option<f64>,
    pub gross_profit: Option<f64>,
    pub research_and_development_expenses: Option<f64>,
    pub operating_expenses: Option<f64>,
    pub operating_income: Option<f64>,
    pub ebitda: Option<f64>,
    pub income_before_tax: Option<f64>,
    pub income_tax_expense: Option<f64>,
    pub net_income: Option<f64>,
    pub eps: Option<f64>,
    pub eps_diluted: Option<f64>,
    pub weighted_average_shs_out: Option<f64>,
}

/// One balance-sheet period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    pub symbol: String,
    /// Fiscal period end date.
    pub date: NaiveDate,
    pub period: Option<String>,
    pub fiscal_year: Option<String>,
    pub cash_and_cash_equivalents: Option<f64>,
    pub short_term_investments: Option<f64>,
    pub total_current_assets: Option<f64>,
    pub total_assets: Option<f64>,
    pub total_current_liabilities: Option<f64>,
    pub total_liabilities: Option<f64>,
    pub total_debt: Option<f64>,
    pub net_debt: Option<f64>,
    pub total_stockholders_equity: Option<f64>,
    pub retained_earnings: Option<f64>,
}

/// One cash-flow-statement period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowStatement {
    pub symbol: String,
    /// Fiscal period end date.
    pub date: NaiveDate,
    pub period: Option<String>,
    pub fiscal_year: Option<String>,
    pub net_income: Option<f64>,
    pub operating_cash_flow: Option<f64>,
    pub capital_expenditure: Option<f64>,
    pub free_cash_flow: Option<f64>,
    pub common_dividends_paid: Option<f64>,
    pub common_stock_repurchased: Option<f64>,
    pub net_change_in_cash: Option<f64>,
}

/// One key-metrics period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    pub symbol: String,
    pub date: NaiveDate,
    pub period: Option<String>,
    pub market_cap: Option<f64>,
    pub enterprise_value: Option<f64>,
    pub ev_to_sales: Option<f64>,
    pub ev_to_ebitda: Option<f64>,
    pub return_on_equity: Option<f64>,
    pub return_on_invested_capital: Option<f64>,
    pub current_ratio: Option<f64>,
    pub free_cash_flow_yield: Option<f64>,
    pub earnings_yield: Option<f64>,
}

/// One financial-ratios period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRatios {
    pub symbol: String,
    pub date: NaiveDate,
    pub period: Option<String>,
    pub current_ratio: Option<f64>,
    pub quick_ratio: Option<f64>,
    pub gross_profit_margin: Option<f64>,
    pub operating_profit_margin: Option<f64>,
    pub net_profit_margin: Option<f64>,
    pub debt_to_equity_ratio: Option<f64>,
    pub price_to_earnings_ratio: Option<f64>,
    pub price_to_sales_ratio: Option<f64>,
    pub price_to_book_ratio: Option<f64>,
    pub dividend_yield: Option<f64>,
}

/// Composite financial health scores (Piotroski, Altman Z).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialScores {
    pub symbol: String,
    pub altman_z_score: Option<f64>,
    pub piotroski_score: Option<f64>,
    pub working_capital: Option<f64>,
    pub total_assets: Option<f64>,
    pub ebit: Option<f64>,
    pub market_cap: Option<f64>,
    pub revenue: Option<f64>,
}
