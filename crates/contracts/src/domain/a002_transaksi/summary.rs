use super::aggregate::Transaksi;

/// Angka ringkasan di atas tabel daftar transaksi. Selalu dihitung ulang
/// dari koleksi yang sedang ditampilkan, tidak pernah di-cache, sehingga
/// konsisten dengan filter aktif (dan memang tidak konsisten dengan
/// database tanpa filter).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RingkasanTransaksi {
    pub jumlah: usize,
    pub pendapatan: f64,
}

/// Hitung jumlah transaksi dan total pendapatan dari koleksi terfilter.
/// `total_harga` yang tidak terparse menyumbang 0 tanpa mengeluarkan
/// barisnya dari hitungan.
pub fn ringkas(items: &[Transaksi]) -> RingkasanTransaksi {
    RingkasanTransaksi {
        jumlah: items.len(),
        pendapatan: items.iter().map(Transaksi::total_harga_angka).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaksi(id: i64, total: &str) -> Transaksi {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "nomor_transaksi": format!("TRX-{id:04}"),
            "nama_pembeli": "Budi",
            "alamat": "-",
            "kode_pos": "-",
            "status": "pending",
            "tanggal": "2025-07-01T00:00:00Z",
            "metode_pengiriman": "JNE",
            "total_harga": total
        }))
        .unwrap()
    }

    #[test]
    fn empty_collection() {
        let r = ringkas(&[]);
        assert_eq!(r.jumlah, 0);
        assert_eq!(r.pendapatan, 0.0);
    }

    #[test]
    fn sums_parsed_totals() {
        let items = vec![transaksi(1, "150000"), transaksi(2, "250000")];
        let r = ringkas(&items);
        assert_eq!(r.jumlah, 2);
        assert_eq!(r.pendapatan, 400000.0);
    }

    #[test]
    fn unparseable_total_contributes_zero_but_still_counts() {
        let items = vec![transaksi(1, "100000"), transaksi(2, "n/a")];
        let r = ringkas(&items);
        assert_eq!(r.jumlah, 2);
        assert_eq!(r.pendapatan, 100000.0);
    }
}
