use crate::common::*;

#[doc = "HH:MM (24시간제) 형식의 스케줄 시각 문자열을 (시, 분) 으로 파싱해주는 함수"]
pub fn parse_schedule_time(schedule_time: &str) -> anyhow::Result<(u32, u32)> {
    let parts: Vec<&str> = schedule_time.split(':').collect();

    if parts.len() != 2 || parts[0].len() != 2 || parts[1].len() != 2 {
        return Err(anyhow!(
            "[parse_schedule_time] Schedule time must be in HH:MM 24-hour format: '{}'",
            schedule_time
        ));
    }

    let hour: u32 = parts[0]
        .parse()
        .map_err(|_| anyhow!("[parse_schedule_time] Invalid hour: '{}'", parts[0]))?;
    let minute: u32 = parts[1]
        .parse()
        .map_err(|_| anyhow!("[parse_schedule_time] Invalid minute: '{}'", parts[1]))?;

    if hour > 23 || minute > 59 {
        return Err(anyhow!(
            "[parse_schedule_time] Schedule time is not a valid time: '{}'",
            schedule_time
        ));
    }

    Ok((hour, minute))
}

#[doc = "매일 지정된 시각에 발동하는 크론 표현식을 만들어주는 함수"]
pub fn build_daily_cron_expr(hour: u32, minute: u32) -> String {
    format!("0 {} {} * * *", minute, hour)
}

#[doc = ""]
pub fn get_current_local_datetime_str() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parse_schedule_time_accepts_well_formed_values() {
        assert_eq!(parse_schedule_time("09:00").unwrap(), (9, 0));
        assert_eq!(parse_schedule_time("00:00").unwrap(), (0, 0));
        assert_eq!(parse_schedule_time("23:59").unwrap(), (23, 59));
    }

    #[test]
    fn parse_schedule_time_rejects_malformed_values() {
        for bad in ["9:00", "09:0", "0900", "24:00", "09:60", "ab:cd", "", "09:00:00"] {
            assert!(parse_schedule_time(bad).is_err(), "expected rejection: {}", bad);
        }
    }

    #[test]
    fn daily_cron_expr_fires_once_per_day() {
        let schedule =
            cron::Schedule::from_str(&build_daily_cron_expr(9, 0)).expect("valid cron expr");

        let just_before: DateTime<Local> = Local.with_ymd_and_hms(2026, 8, 4, 8, 59, 59).unwrap();
        let first: DateTime<Local> = schedule.after(&just_before).next().unwrap();
        assert_eq!(first, Local.with_ymd_and_hms(2026, 8, 4, 9, 0, 0).unwrap());

        /* 발송 직후에 다시 계산하면 다음 날 같은 시각이 나와야 한다 */
        let second: DateTime<Local> = schedule.after(&first).next().unwrap();
        assert_eq!(second, Local.with_ymd_and_hms(2026, 8, 5, 9, 0, 0).unwrap());
    }
}
