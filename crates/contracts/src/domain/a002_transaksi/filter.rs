use chrono::NaiveDate;

use super::status::StatusTransaksi;

/// Filter status daftar transaksi. Enum tertutup, bukan string bebas:
/// `Semua` berarti "tanpa filter status" dan berbeda dari status nyata
/// mana pun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Semua,
    Hanya(StatusTransaksi),
}

impl StatusFilter {
    /// Nilai query-param; `None` berarti param dihilangkan.
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            StatusFilter::Semua => None,
            StatusFilter::Hanya(s) => Some(s.as_str()),
        }
    }

    /// Dari nilai `<select>`: string kosong = `Semua`, nilai tak dikenal
    /// juga jatuh ke `Semua` (select hanya menawarkan lima status).
    pub fn from_select_value(v: &str) -> Self {
        match StatusTransaksi::parse(v) {
            Some(s) => StatusFilter::Hanya(s),
            None => StatusFilter::Semua,
        }
    }
}

/// Filter pencarian daftar transaksi; transient, milik view, tidak pernah
/// dipersist. Tanggal mulai/akhir inklusif dan masing-masing opsional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransaksiFilter {
    pub search: String,
    pub status: StatusFilter,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl TransaksiFilter {
    /// Filter awal view daftar: tanpa kata kunci, status `pending`,
    /// rentang tanggal bulan berjalan.
    pub fn awal(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::Hanya(StatusTransaksi::Pending),
            start_date: Some(start),
            end_date: Some(end),
        }
    }

    pub fn search_param(&self) -> Option<&str> {
        let s = self.search.trim();
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    }

    pub fn start_date_param(&self) -> Option<String> {
        self.start_date.map(|d| d.format("%Y-%m-%d").to_string())
    }

    pub fn end_date_param(&self) -> Option<String> {
        self.end_date.map(|d| d.format("%Y-%m-%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semua_means_no_status_param() {
        assert_eq!(StatusFilter::Semua.as_param(), None);
        assert_eq!(
            StatusFilter::Hanya(StatusTransaksi::Deliver).as_param(),
            Some("deliver")
        );
    }

    #[test]
    fn select_value_roundtrip() {
        assert_eq!(StatusFilter::from_select_value(""), StatusFilter::Semua);
        assert_eq!(
            StatusFilter::from_select_value("completed"),
            StatusFilter::Hanya(StatusTransaksi::Completed)
        );
        assert_eq!(StatusFilter::from_select_value("??"), StatusFilter::Semua);
    }

    #[test]
    fn blank_search_is_omitted() {
        let mut f = TransaksiFilter::default();
        assert_eq!(f.search_param(), None);
        f.search = "   ".to_string();
        assert_eq!(f.search_param(), None);
        f.search = "TRX-2025".to_string();
        assert_eq!(f.search_param(), Some("TRX-2025"));
    }

    #[test]
    fn dates_format_as_ymd() {
        let f = TransaksiFilter {
            start_date: NaiveDate::from_ymd_opt(2025, 7, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 7, 31),
            ..Default::default()
        };
        assert_eq!(f.start_date_param().as_deref(), Some("2025-07-01"));
        assert_eq!(f.end_date_param().as_deref(), Some("2025-07-31"));
    }
}
