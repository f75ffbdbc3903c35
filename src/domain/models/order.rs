use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use sqlx::FromRow;

use crate::domain::models::tour::Tour;

/// Lifecycle of an order. Stored as uppercase TEXT in both backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

// Binds and decodes as a plain string column. The derive would declare a
// named custom type on Postgres, which the TEXT schema does not have.
impl sqlx::Type<sqlx::Sqlite> for OrderStatus {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <&str as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <&str as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

impl sqlx::Type<sqlx::Postgres> for OrderStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <&str as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <&str as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'q, DB> sqlx::Encode<'q, DB> for OrderStatus
where
    DB: sqlx::Database,
    &'q str: sqlx::Encode<'q, DB>,
{
    fn encode_by_ref(
        &self,
        buf: &mut <DB as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<'q, DB>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl<'r, DB> sqlx::Decode<'r, DB> for OrderStatus
where
    DB: sqlx::Database,
    &'r str: sqlx::Decode<'r, DB>,
{
    fn decode(
        value: <DB as sqlx::Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <&str as sqlx::Decode<'r, DB>>::decode(value)?;
        Self::parse(raw).ok_or_else(|| format!("unknown order status in database: {}", raw).into())
    }
}

impl OrderStatus {
    /// Parses an admin-supplied status string. Anything outside the four
    /// known statuses is rejected by the caller.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "CONFIRMED" => Some(Self::Confirmed),
            "CANCELLED" => Some(Self::Cancelled),
            "COMPLETED" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
        }
    }

    /// Informational notice shown to the admin after a status change.
    pub fn transition_notice(&self) -> &'static str {
        match self {
            Self::Pending => "Order moved back to pending",
            Self::Confirmed => "Order confirmed, the customer will be notified",
            Self::Cancelled => "Order cancelled, the customer will be notified",
            Self::Completed => "Order completed, thank you for your business",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub tour_id: String,
    pub guests_count: i32,
    pub total_price: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub contact_phone: String,
    pub contact_email: String,
    pub special_requests: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewOrderParams {
    pub user_id: String,
    pub guests_count: i32,
    pub start_date: NaiveDate,
    pub contact_phone: String,
    pub contact_email: String,
    pub special_requests: Option<String>,
}

impl Order {
    /// Derives `end_date` and `total_price` from the tour at creation time.
    /// Both are snapshots: later changes to the tour do not touch the order.
    pub fn new(tour: &Tour, params: NewOrderParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: params.user_id,
            tour_id: tour.id.clone(),
            guests_count: params.guests_count,
            total_price: tour.price * params.guests_count as f64,
            start_date: params.start_date,
            end_date: params.start_date + Duration::days(tour.duration_days as i64),
            contact_phone: params.contact_phone,
            contact_email: params.contact_email,
            special_requests: params.special_requests,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::{Postgres, Sqlite, Type, TypeInfo};

    #[test]
    fn test_order_status_is_a_text_column_on_both_backends() {
        assert_eq!(<OrderStatus as Type<Postgres>>::type_info().name(), "TEXT");
        assert!(<OrderStatus as Type<Postgres>>::compatible(
            &<&str as Type<Postgres>>::type_info()
        ));

        assert_eq!(<OrderStatus as Type<Sqlite>>::type_info().name(), "TEXT");
        assert!(<OrderStatus as Type<Sqlite>>::compatible(
            &<&str as Type<Sqlite>>::type_info()
        ));
    }

    #[test]
    fn test_order_status_round_trips_through_its_string_form() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Cancelled,
            OrderStatus::Completed,
        ] {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
    }
}
