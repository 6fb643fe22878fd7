//! Tautan notifikasi WhatsApp untuk pembeli.
//!
//! Tautan tidak pernah dikirim otomatis; view hanya menawarkannya sebagai
//! anchor yang boleh dibuka operator setelah status transaksi berubah.

use contracts::domain::a002_transaksi::StatusTransaksi;

/// Nomor tujuan wa.me: hanya digit, nol awal format lokal diganti kode
/// negara 62. String tanpa digit sama sekali berarti tidak ada nomor.
pub fn nomor_wa(telp: &str) -> Option<String> {
    let digits: String = telp.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    Some(match digits.strip_prefix('0') {
        Some(rest) => format!("62{rest}"),
        None => digits,
    })
}

/// Satu template pesan per status; status di luar lima nilai yang dikenal
/// jatuh ke template generik "diperbarui menjadi X".
pub fn pesan_status(status_raw: &str, nama_pembeli: &str) -> String {
    match StatusTransaksi::parse(status_raw) {
        Some(StatusTransaksi::Pending) => format!(
            "Halo {nama_pembeli}, pesanan Anda sedang *menunggu konfirmasi*. Mohon ditunggu ya"
        ),
        Some(StatusTransaksi::Process) => format!(
            "Halo {nama_pembeli}, pesanan Anda saat ini sedang *diproses*. Kami akan segera mengirimkan update berikutnya"
        ),
        Some(StatusTransaksi::Deliver) => format!(
            "Halo {nama_pembeli}, pesanan Anda sedang *dikirim*. Mohon pastikan nomor penerima aktif untuk menerima paket"
        ),
        Some(StatusTransaksi::Cancelled) => format!(
            "Halo {nama_pembeli}, mohon maaf, pesanan Anda *dibatalkan*. Silakan hubungi kami jika ada pertanyaan"
        ),
        Some(StatusTransaksi::Completed) => format!(
            "Halo {nama_pembeli}, pesanan Anda telah *selesai*. Terima kasih sudah berbelanja di toko kami!"
        ),
        None => format!(
            "Halo {nama_pembeli}, status pesanan Anda telah diperbarui menjadi *{status_raw}*."
        ),
    }
}

/// Encode teks untuk query wa.me: spasi jadi '+' (lebih ramah WA),
/// tanda bold '*' dibiarkan terbaca.
pub fn encode_pesan(text: &str) -> String {
    urlencoding::encode(text)
        .replace("%20", "+")
        .replace("%2A", "*")
}

/// Bangun tautan wa.me; tanpa nomor telepon tidak ada tautan.
pub fn link_wa(telp: Option<&str>, pesan: &str) -> Option<String> {
    let nomor = nomor_wa(telp?)?;
    Some(format!("https://wa.me/{}?text={}", nomor, encode_pesan(pesan)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_zero_becomes_country_code() {
        assert_eq!(nomor_wa("081234567").as_deref(), Some("6281234567"));
    }

    #[test]
    fn already_international_number_is_untouched() {
        assert_eq!(nomor_wa("+62 812-345-678").as_deref(), Some("62812345678"));
    }

    #[test]
    fn no_digits_means_no_number() {
        assert_eq!(nomor_wa(""), None);
        assert_eq!(nomor_wa("-"), None);
    }

    #[test]
    fn link_requires_a_phone_number() {
        assert_eq!(link_wa(None, "halo"), None);
        let link = link_wa(Some("081234567"), "Halo *Budi*").unwrap();
        assert!(link.starts_with("https://wa.me/6281234567?text="));
    }

    #[test]
    fn encoding_keeps_wa_formatting_readable() {
        assert_eq!(encode_pesan("Halo *Budi* ya"), "Halo+*Budi*+ya");
    }

    #[test]
    fn every_known_status_has_a_template() {
        for s in StatusTransaksi::ALL {
            let pesan = pesan_status(s.as_str(), "Budi");
            assert!(pesan.starts_with("Halo Budi"));
            assert!(pesan.contains('*'));
        }
    }

    #[test]
    fn unknown_status_falls_back_to_generic_template() {
        let pesan = pesan_status("archived", "Budi");
        assert!(pesan.contains("diperbarui menjadi *archived*"));
    }
}
