//! Tanggal: parsing nilai wire dan format tampilan bahasa Indonesia.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

const NAMA_BULAN: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Hari ini menurut jam browser.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Hari pertama dan terakhir bulan yang memuat `today`.
pub fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = today.with_day(1).unwrap_or(today);
    let next_month = if today.month() == 12 {
        NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
    };
    let last = next_month.and_then(|d| d.pred_opt()).unwrap_or(today);
    (first, last)
}

fn parse_wire(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").ok()
}

/// "01 Juli 2025"; nilai yang tidak terparse ditampilkan apa adanya.
pub fn format_tanggal(raw: &str) -> String {
    match parse_wire(raw) {
        Some(dt) => format!(
            "{:02} {} {}",
            dt.day(),
            NAMA_BULAN[(dt.month() - 1) as usize],
            dt.year()
        ),
        None => raw.to_string(),
    }
}

/// "01 Juli 2025, 09:30" untuk kolom tanggal transaksi.
pub fn format_tanggal_jam(raw: &str) -> String {
    match parse_wire(raw) {
        Some(dt) => format!(
            "{:02} {} {}, {:02}:{:02}",
            dt.day(),
            NAMA_BULAN[(dt.month() - 1) as usize],
            dt.year(),
            dt.hour(),
            dt.minute()
        ),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_bounds_mid_month() {
        let d = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
        let (first, last) = month_bounds(d);
        assert_eq!(first, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2025, 7, 31).unwrap());
    }

    #[test]
    fn month_bounds_handles_leap_february_and_december() {
        let feb = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        assert_eq!(
            month_bounds(feb).1,
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );

        let dec = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let (first, last) = month_bounds(dec);
        assert_eq!(first, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn formats_rfc3339_in_indonesian() {
        assert_eq!(format_tanggal("2025-07-01T09:30:00Z"), "01 Juli 2025");
        assert_eq!(
            format_tanggal_jam("2025-07-01T09:30:00Z"),
            "01 Juli 2025, 09:30"
        );
    }

    #[test]
    fn unparseable_values_pass_through() {
        assert_eq!(format_tanggal("kemarin"), "kemarin");
        assert_eq!(format_tanggal_jam(""), "");
    }
}
