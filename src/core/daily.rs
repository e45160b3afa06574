//! Daily aggregation - one date's schedule in a single response.
//!
//! Pure composition of the two stores: all-day events on the date plus
//! every appointment on the date. No merging, sorting, or conflict
//! resolution; half-hour slot bucketing is a frontend concern.

use crate::{
    entities::{CalendarEvent, appointment, calendar_event},
    errors::Result,
};
use sea_orm::prelude::*;
use serde::Serialize;

use super::appointment::list_appointments_for_day;

/// Everything scheduled on one date.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyData {
    pub events: Vec<calendar_event::Model>,
    pub appointments: Vec<appointment::Model>,
}

/// All-day events and appointments of `user_id` on `date`.
pub async fn daily_data(db: &DatabaseConnection, user_id: i64, date: Date) -> Result<DailyData> {
    let events = CalendarEvent::find()
        .filter(calendar_event::Column::UserId.eq(user_id))
        .filter(calendar_event::Column::Date.eq(date))
        .filter(calendar_event::Column::AllDay.eq(true))
        .all(db)
        .await?;

    let appointments = list_appointments_for_day(db, user_id, date).await?;

    Ok(DailyData {
        events,
        appointments,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::calendar::{NewCalendarEvent, create_event};
    use crate::test_utils::{
        create_test_appointment, create_test_event, create_test_user, setup_with_user,
    };
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> Date {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn composes_events_and_appointments_for_the_date() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        let day = date(2024, 6, 1);

        create_test_event(&db, user.id, "Holiday", day).await?;
        create_test_appointment(&db, user.id, "Dentist", day).await?;
        create_test_appointment(&db, user.id, "Lunch", day).await?;

        let daily = daily_data(&db, user.id, day).await?;
        assert_eq!(daily.events.len(), 1);
        assert_eq!(daily.appointments.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn only_all_day_events_are_included() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        let day = date(2024, 6, 1);

        create_event(
            &db,
            user.id,
            NewCalendarEvent {
                title: "All-day".to_string(),
                description: None,
                date: day,
                all_day: Some(true),
                kind: None,
            },
        )
        .await?;
        create_event(
            &db,
            user.id,
            NewCalendarEvent {
                title: "Timed".to_string(),
                description: None,
                date: day,
                all_day: Some(false),
                kind: None,
            },
        )
        .await?;

        let daily = daily_data(&db, user.id, day).await?;
        assert_eq!(daily.events.len(), 1);
        assert_eq!(daily.events[0].title, "All-day");
        Ok(())
    }

    #[tokio::test]
    async fn adjacent_days_are_excluded() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        create_test_appointment(&db, user.id, "today", date(2024, 6, 1)).await?;
        create_test_appointment(&db, user.id, "yesterday", date(2024, 5, 31)).await?;
        create_test_appointment(&db, user.id, "tomorrow", date(2024, 6, 2)).await?;
        create_test_event(&db, user.id, "yesterday's event", date(2024, 5, 31)).await?;

        let daily = daily_data(&db, user.id, date(2024, 6, 1)).await?;
        assert_eq!(daily.appointments.len(), 1);
        assert_eq!(daily.appointments[0].title, "today");
        assert!(daily.events.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn overlapping_appointments_both_appear() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        let day = date(2024, 6, 1);

        crate::test_utils::create_timed_appointment(&db, user.id, "First", day, "09:00", "10:00")
            .await?;
        crate::test_utils::create_timed_appointment(&db, user.id, "Second", day, "09:30", "10:30")
            .await?;

        let daily = daily_data(&db, user.id, day).await?;
        assert_eq!(daily.appointments.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn daily_view_is_scoped_by_user() -> Result<()> {
        let (db, alice) = setup_with_user().await?;
        let bob = create_test_user(&db, "bob@example.com").await?;
        let day = date(2024, 6, 1);

        create_test_appointment(&db, alice.id, "Alice's", day).await?;
        create_test_appointment(&db, bob.id, "Bob's", day).await?;

        let daily = daily_data(&db, alice.id, day).await?;
        assert_eq!(daily.appointments.len(), 1);
        assert_eq!(daily.appointments[0].title, "Alice's");
        Ok(())
    }
}
