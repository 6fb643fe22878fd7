use serde::{Deserialize, Serialize};

/// Lima status siklus hidup transaksi.
///
/// Urutan lazimnya `pending → process → deliver → completed`, dengan
/// `cancelled` bisa dicapai dari status non-terminal mana pun. Service
/// tidak menegakkan legalitas transisi dan dashboard juga tidak: update
/// status adalah overwrite biasa, status apa pun boleh ditulis menimpa
/// status apa pun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTransaksi {
    Pending,
    Process,
    Deliver,
    Cancelled,
    Completed,
}

impl StatusTransaksi {
    pub const ALL: [StatusTransaksi; 5] = [
        StatusTransaksi::Pending,
        StatusTransaksi::Process,
        StatusTransaksi::Deliver,
        StatusTransaksi::Cancelled,
        StatusTransaksi::Completed,
    ];

    /// Nilai wire persis seperti yang dipakai API.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTransaksi::Pending => "pending",
            StatusTransaksi::Process => "process",
            StatusTransaksi::Deliver => "deliver",
            StatusTransaksi::Cancelled => "cancelled",
            StatusTransaksi::Completed => "completed",
        }
    }

    /// Parsing dari string wire. Peka huruf besar-kecil, sama seperti
    /// pemetaan label/warna; `"Pending"` bukan status yang dikenal.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(StatusTransaksi::Pending),
            "process" => Some(StatusTransaksi::Process),
            "deliver" => Some(StatusTransaksi::Deliver),
            "cancelled" => Some(StatusTransaksi::Cancelled),
            "completed" => Some(StatusTransaksi::Completed),
            _ => None,
        }
    }

    /// Label untuk operator.
    pub fn label(&self) -> &'static str {
        match self {
            StatusTransaksi::Pending => "Menunggu Konfirmasi",
            StatusTransaksi::Process => "Sedang Diproses",
            StatusTransaksi::Deliver => "Sedang Dikirim",
            StatusTransaksi::Cancelled => "Dibatalkan",
            StatusTransaksi::Completed => "Selesai",
        }
    }

    /// Kelas badge untuk tampilan.
    pub fn badge_class(&self) -> &'static str {
        match self {
            StatusTransaksi::Pending => "badge--warning",
            StatusTransaksi::Process => "badge--primary",
            StatusTransaksi::Deliver => "badge--primary",
            StatusTransaksi::Cancelled => "badge--error",
            StatusTransaksi::Completed => "badge--success",
        }
    }
}

/// Label untuk nilai status mentah apa pun; nilai di luar lima status yang
/// dikenal (termasuk beda kapitalisasi) memetakan ke "Tidak Diketahui".
pub fn status_label(raw: &str) -> &'static str {
    match StatusTransaksi::parse(raw) {
        Some(s) => s.label(),
        None => "Tidak Diketahui",
    }
}

/// Kelas badge untuk nilai status mentah apa pun, fallback netral.
pub fn status_badge_class(raw: &str) -> &'static str {
    match StatusTransaksi::parse(raw) {
        Some(s) => s.badge_class(),
        None => "badge--neutral",
    }
}

/// Titik normalisasi tunggal untuk pencarian status.
///
/// View daftar memberi nilai mentah dari API apa adanya; view detail
/// menurunkan kapital lewat fungsi ini sebelum mencari kelas badge.
/// Dua perilaku itu memang berbeda di sistem asal dan dipertahankan;
/// kalau mau disamakan, cukup ubah pemanggilnya untuk selalu lewat sini.
pub fn normalize(raw: &str) -> String {
    raw.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_and_badge_are_total() {
        for s in StatusTransaksi::ALL {
            assert!(!status_label(s.as_str()).is_empty());
            assert!(status_badge_class(s.as_str()).starts_with("badge--"));
        }
        // arbitrary garbage still maps to the unknown bucket
        for raw in ["", "unknown", "PENDING", "Completed", "dikirim", "42"] {
            assert_eq!(status_label(raw), "Tidak Diketahui");
            assert_eq!(status_badge_class(raw), "badge--neutral");
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(StatusTransaksi::parse("pending"), Some(StatusTransaksi::Pending));
        assert_eq!(StatusTransaksi::parse("Pending"), None);
        assert_eq!(StatusTransaksi::parse(&normalize("Pending")), Some(StatusTransaksi::Pending));
    }

    #[test]
    fn wire_roundtrip_through_serde() {
        for s in StatusTransaksi::ALL {
            let json = serde_json::to_string(&s).unwrap();
            assert_eq!(json, format!("\"{}\"", s.as_str()));
            let back: StatusTransaksi = serde_json::from_str(&json).unwrap();
            assert_eq!(back, s);
        }
    }

    #[test]
    fn known_statuses_map_to_their_labels() {
        assert_eq!(status_label("pending"), "Menunggu Konfirmasi");
        assert_eq!(status_label("process"), "Sedang Diproses");
        assert_eq!(status_label("deliver"), "Sedang Dikirim");
        assert_eq!(status_label("cancelled"), "Dibatalkan");
        assert_eq!(status_label("completed"), "Selesai");
        assert_eq!(status_badge_class("completed"), "badge--success");
        assert_eq!(status_badge_class("cancelled"), "badge--error");
    }
}
