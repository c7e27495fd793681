//! 时间工具函数
//!
//! 表单日期/时间字符串的解析与"不得早于当前时间"校验。

use chrono::{NaiveDate, NaiveDateTime, Utc};

use super::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 解析 `datetime-local` 字符串 (秒可选)
pub fn parse_datetime_local(value: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| AppError::validation(format!("Invalid pickup time format: {}", value)))
}

/// 当前 UTC 日期
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// 验证日期不早于今天
pub fn validate_not_past_date(date: NaiveDate) -> AppResult<()> {
    let today = today();
    if date < today {
        return Err(AppError::validation(format!(
            "Date {} is in the past (today is {})",
            date, today
        )));
    }
    Ok(())
}

/// 验证时间点不早于当前时间
pub fn validate_not_past_datetime(datetime: NaiveDateTime) -> AppResult<()> {
    let now = Utc::now().naive_utc();
    if datetime < now {
        return Err(AppError::validation(format!(
            "Pickup time {} is in the past",
            datetime
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_datetime_local_forms() {
        assert!(parse_datetime_local("2030-01-01T18:00").is_ok());
        assert!(parse_datetime_local("2030-01-01T18:00:30").is_ok());
        assert!(parse_datetime_local("2030-01-01 18:00").is_err());
    }

    #[test]
    fn past_dates_are_rejected() {
        assert!(validate_not_past_date(parse_date("2020-01-01").unwrap()).is_err());
        assert!(validate_not_past_date(parse_date("2999-01-01").unwrap()).is_ok());
        // Today itself is allowed
        assert!(validate_not_past_date(today()).is_ok());
    }
}
