//! Monthly rent charges and payment tracking.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::badge::{BadgeVariant, Badged};
use crate::models::record::{id_matches, Searchable, SortKey};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum RentStatus {
    #[default]
    Pending,
    Partial,
    Paid,
    Overdue,
}

impl RentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Partial => "Partial",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
        }
    }

    /// Status implied by the amounts and due date on `today`.
    pub fn derive(amount_due: i64, amount_paid: i64, due_date: NaiveDate, today: NaiveDate) -> Self {
        if amount_paid >= amount_due {
            Self::Paid
        } else if today > due_date {
            Self::Overdue
        } else if amount_paid > 0 {
            Self::Partial
        } else {
            Self::Pending
        }
    }
}

impl Badged for RentStatus {
    fn badge_variant(&self) -> BadgeVariant {
        match self {
            Self::Paid => BadgeVariant::Default,
            Self::Partial => BadgeVariant::Secondary,
            Self::Pending => BadgeVariant::Outline,
            Self::Overdue => BadgeVariant::Destructive,
        }
    }

    fn badge_label(&self) -> &'static str {
        self.as_str()
    }
}

/// Rent owed by one tenant for one month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RentCharge {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub room_id: Uuid,
    /// First day of the billed month.
    pub period: NaiveDate,
    pub amount_due: i64,
    pub amount_paid: i64,
    pub due_date: NaiveDate,
    pub status: RentStatus,
    pub created_at: DateTime<Utc>,
}

impl RentCharge {
    pub fn outstanding(&self) -> i64 {
        (self.amount_due - self.amount_paid).max(0)
    }

    /// Add a payment and re-derive the status.
    pub fn record_payment(&mut self, amount: i64, today: NaiveDate) -> Result<(), AppError> {
        if amount <= 0 {
            return Err(AppError::Validation(
                "Payment amount must be positive".to_string(),
            ));
        }
        if self.status == RentStatus::Paid {
            return Err(AppError::Conflict(format!(
                "Rent for {} is already paid",
                period_label(self.period)
            )));
        }
        self.amount_paid = self.amount_paid.checked_add(amount).ok_or_else(|| {
            AppError::Validation(format!("Payment amount {amount} is too large"))
        })?;
        self.status = RentStatus::derive(self.amount_due, self.amount_paid, self.due_date, today);
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentCharge {
    pub tenant_id: Uuid,
    pub room_id: Uuid,
    /// Any day within the billed month.
    pub period: NaiveDate,
    pub amount_due: i64,
    pub due_date: Option<NaiveDate>,
}

impl CreateRentCharge {
    /// Rent is due on the fifth of the billed month unless a date is given.
    pub const DEFAULT_DUE_DAY: u32 = 5;

    pub fn into_charge(self, now: DateTime<Utc>) -> RentCharge {
        let period = first_of_month(self.period);
        let due_date = self
            .due_date
            .or_else(|| period.with_day(Self::DEFAULT_DUE_DAY))
            .unwrap_or(period);
        RentCharge {
            id: Uuid::new_v4(),
            tenant_id: self.tenant_id,
            room_id: self.room_id,
            period,
            amount_due: self.amount_due,
            amount_paid: 0,
            due_date,
            status: RentStatus::derive(self.amount_due, 0, due_date, now.date_naive()),
            created_at: now,
        }
    }
}

/// Body of a payment recording request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPayment {
    pub amount: i64,
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// `YYYY-MM` label for a billing period.
pub fn period_label(period: NaiveDate) -> String {
    period.format("%Y-%m").to_string()
}

impl Searchable for RentCharge {
    const KIND: &'static str = "rent charge";
    const FILTER_KEYS: &'static [&'static str] = &["tenantId", "roomId", "status", "period"];
    const SORT_KEYS: &'static [&'static str] = &["dueDate", "period", "amountDue", "status"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn matches_term(&self, term: &str) -> bool {
        period_label(self.period).contains(term) || self.status.as_str().to_lowercase() == term
    }

    fn matches_filter(&self, key: &str, value: &str) -> bool {
        match key {
            "tenantId" => id_matches(self.tenant_id, value),
            "roomId" => id_matches(self.room_id, value),
            "status" => self.status.as_str().eq_ignore_ascii_case(value.trim()),
            "period" => period_label(self.period) == value.trim(),
            _ => false,
        }
    }

    fn sort_key(&self, key: &str) -> SortKey {
        match key {
            "period" => SortKey::Date(self.period),
            "amountDue" => SortKey::Number(self.amount_due),
            "status" => SortKey::text(self.status.as_str()),
            _ => SortKey::Date(self.due_date),
        }
    }

    fn as_of(mut self, today: NaiveDate) -> Self {
        self.status = RentStatus::derive(self.amount_due, self.amount_paid, self.due_date, today);
        self
    }
}
