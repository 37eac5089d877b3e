use chrono::NaiveDateTime;

/// Форматирует момент `at` относительно `now`: «5 мин назад», «2 ч назад».
///
/// Всё, что старше недели, выводится датой. Время из будущего (рассинхрон
/// часов) считается «только что».
pub fn format_relative(at: NaiveDateTime, now: NaiveDateTime) -> String {
    let elapsed = now.signed_duration_since(at);

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "только что".to_string();
    }
    if minutes < 60 {
        return format!("{minutes} мин назад");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours} ч назад");
    }

    let days = elapsed.num_days();
    if days < 7 {
        return format!("{days} дн назад");
    }

    at.format("%Y-%m-%d").to_string()
}

/// [`format_relative`] относительно текущего времени (UTC).
pub fn format_relative_now(at: NaiveDateTime) -> String {
    format_relative(at, chrono::Utc::now().naive_utc())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 15)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .expect("valid timestamp")
    }

    #[test]
    fn recent_moments_are_just_now() {
        let now = base();
        assert_eq!(format_relative(now - Duration::seconds(30), now), "только что");
        assert_eq!(format_relative(now + Duration::minutes(3), now), "только что");
    }

    #[test]
    fn minutes_hours_and_days() {
        let now = base();
        assert_eq!(format_relative(now - Duration::minutes(5), now), "5 мин назад");
        assert_eq!(format_relative(now - Duration::hours(3), now), "3 ч назад");
        assert_eq!(format_relative(now - Duration::days(2), now), "2 дн назад");
    }

    #[test]
    fn old_moments_are_printed_as_date() {
        let now = base();
        assert_eq!(format_relative(now - Duration::days(30), now), "2025-05-16");
    }
}
