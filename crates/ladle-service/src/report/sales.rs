//! Sales report generation.
//!
//! Reports are aggregated in process from the raw payment rows rather
//! than in SQL, so the bucketing logic is plain code that can be unit
//! tested without a database.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ladle_core::error::AppError;
use ladle_database::repositories::payment::PaymentRepository;
use ladle_entity::payment::Payment;

/// Time granularity for a sales report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportGranularity {
    /// One bucket per calendar day.
    Day,
    /// One bucket per ISO week.
    Week,
    /// One bucket per calendar month.
    Month,
}

impl ReportGranularity {
    /// Formats a timestamp into this granularity's bucket key.
    ///
    /// Keys sort chronologically as plain strings, which is what keeps
    /// the report buckets in order.
    fn bucket_key(&self, at: DateTime<Utc>) -> String {
        match self {
            Self::Day => at.format("%Y-%m-%d").to_string(),
            Self::Week => at.format("%G-W%V").to_string(),
            Self::Month => at.format("%Y-%m").to_string(),
        }
    }
}

impl FromStr for ReportGranularity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" | "daily" => Ok(Self::Day),
            "week" | "weekly" => Ok(Self::Week),
            "month" | "monthly" => Ok(Self::Month),
            _ => Err(AppError::validation(format!(
                "Invalid granularity: '{s}'. Expected one of: day, week, month"
            ))),
        }
    }
}

/// One time bucket in a sales report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesBucket {
    /// Bucket label, e.g. `2026-08-17` or `2026-W34`.
    pub period: String,
    /// Number of payments in the bucket.
    pub payment_count: u64,
    /// Total revenue in the bucket.
    pub total: Decimal,
}

/// Revenue totals for a single product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductTotal {
    /// Product name as recorded at the register.
    pub product_name: String,
    /// Units sold.
    pub quantity: i64,
    /// Total revenue for the product.
    pub total: Decimal,
}

/// A complete sales report over a time range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesReport {
    /// Inclusive start of the reported range.
    pub from: DateTime<Utc>,
    /// Exclusive end of the reported range.
    pub to: DateTime<Utc>,
    /// Bucketing granularity.
    pub granularity: ReportGranularity,
    /// Chronologically ordered buckets. Empty periods are omitted.
    pub buckets: Vec<SalesBucket>,
    /// Per-product totals, highest revenue first.
    pub by_product: Vec<ProductTotal>,
    /// Grand total over the whole range.
    pub grand_total: Decimal,
}

/// Generates sales reports from recorded payments.
#[derive(Debug, Clone)]
pub struct SalesReportService {
    /// Payment repository.
    payment_repo: Arc<PaymentRepository>,
}

impl SalesReportService {
    /// Creates a new report service.
    pub fn new(payment_repo: Arc<PaymentRepository>) -> Self {
        Self { payment_repo }
    }

    /// Generates a sales report for `[from, to)` at the given granularity.
    pub async fn generate(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        granularity: ReportGranularity,
    ) -> Result<SalesReport, AppError> {
        if from >= to {
            return Err(AppError::validation("Report range start must be before end"));
        }

        let payments = self.payment_repo.find_between(from, to).await?;
        Ok(build_report(from, to, granularity, &payments))
    }
}

/// Aggregates raw payments into a report. Pure function.
fn build_report(
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    granularity: ReportGranularity,
    payments: &[Payment],
) -> SalesReport {
    let mut buckets: BTreeMap<String, (u64, Decimal)> = BTreeMap::new();
    let mut products: BTreeMap<String, (i64, Decimal)> = BTreeMap::new();
    let mut grand_total = Decimal::ZERO;

    for payment in payments {
        let key = granularity.bucket_key(payment.paid_at);
        let bucket = buckets.entry(key).or_insert((0, Decimal::ZERO));
        bucket.0 += 1;
        bucket.1 += payment.amount;

        let product = products
            .entry(payment.product_name.clone())
            .or_insert((0, Decimal::ZERO));
        product.0 += i64::from(payment.quantity);
        product.1 += payment.amount;

        grand_total += payment.amount;
    }

    let buckets = buckets
        .into_iter()
        .map(|(period, (payment_count, total))| SalesBucket {
            period,
            payment_count,
            total,
        })
        .collect();

    let mut by_product: Vec<ProductTotal> = products
        .into_iter()
        .map(|(product_name, (quantity, total))| ProductTotal {
            product_name,
            quantity,
            total,
        })
        .collect();
    by_product.sort_by(|a, b| b.total.cmp(&a.total));

    SalesReport {
        from,
        to,
        granularity,
        buckets,
        by_product,
        grand_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn payment(product: &str, quantity: i32, unit_price: Decimal, paid_at: DateTime<Utc>) -> Payment {
        Payment {
            id: Uuid::new_v4(),
            product_name: product.to_string(),
            quantity,
            unit_price,
            amount: unit_price * Decimal::from(quantity),
            cashier_id: Uuid::new_v4(),
            paid_at,
            created_at: paid_at,
        }
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn fixture() -> Vec<Payment> {
        vec![
            payment("Lunch box", 2, Decimal::new(850, 2), at(2026, 8, 17)),
            payment("Coffee", 1, Decimal::new(300, 2), at(2026, 8, 17)),
            payment("Lunch box", 1, Decimal::new(850, 2), at(2026, 8, 18)),
            payment("Coffee", 3, Decimal::new(300, 2), at(2026, 9, 1)),
        ]
    }

    #[test]
    fn test_daily_buckets() {
        let report = build_report(
            at(2026, 8, 1),
            at(2026, 10, 1),
            ReportGranularity::Day,
            &fixture(),
        );

        assert_eq!(report.buckets.len(), 3);
        assert_eq!(report.buckets[0].period, "2026-08-17");
        assert_eq!(report.buckets[0].payment_count, 2);
        assert_eq!(report.buckets[0].total, Decimal::new(2000, 2));
        assert_eq!(report.buckets[1].period, "2026-08-18");
        assert_eq!(report.buckets[2].period, "2026-09-01");
    }

    #[test]
    fn test_monthly_buckets() {
        let report = build_report(
            at(2026, 8, 1),
            at(2026, 10, 1),
            ReportGranularity::Month,
            &fixture(),
        );

        assert_eq!(report.buckets.len(), 2);
        assert_eq!(report.buckets[0].period, "2026-08");
        assert_eq!(report.buckets[0].total, Decimal::new(2850, 2));
        assert_eq!(report.buckets[1].period, "2026-09");
        assert_eq!(report.buckets[1].total, Decimal::new(900, 2));
    }

    #[test]
    fn test_weekly_buckets_use_iso_weeks() {
        // 2026-08-17 is a Monday; the 18th falls in the same ISO week.
        let report = build_report(
            at(2026, 8, 1),
            at(2026, 10, 1),
            ReportGranularity::Week,
            &fixture(),
        );

        assert_eq!(report.buckets[0].period, "2026-W34");
        assert_eq!(report.buckets[0].payment_count, 3);
    }

    #[test]
    fn test_product_totals_sorted_by_revenue() {
        let report = build_report(
            at(2026, 8, 1),
            at(2026, 10, 1),
            ReportGranularity::Day,
            &fixture(),
        );

        assert_eq!(report.by_product.len(), 2);
        assert_eq!(report.by_product[0].product_name, "Lunch box");
        assert_eq!(report.by_product[0].quantity, 3);
        assert_eq!(report.by_product[0].total, Decimal::new(2550, 2));
        assert_eq!(report.by_product[1].product_name, "Coffee");
        assert_eq!(report.by_product[1].total, Decimal::new(1200, 2));
    }

    #[test]
    fn test_empty_range() {
        let report = build_report(at(2026, 1, 1), at(2026, 2, 1), ReportGranularity::Day, &[]);

        assert!(report.buckets.is_empty());
        assert!(report.by_product.is_empty());
        assert_eq!(report.grand_total, Decimal::ZERO);
    }

    #[test]
    fn test_granularity_parse() {
        assert_eq!(
            "weekly".parse::<ReportGranularity>().unwrap(),
            ReportGranularity::Week
        );
        assert!("hourly".parse::<ReportGranularity>().is_err());
    }
}
