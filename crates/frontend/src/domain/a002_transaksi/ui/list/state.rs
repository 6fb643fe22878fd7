use contracts::domain::a002_transaksi::{ringkas, RingkasanTransaksi, Transaksi, TransaksiFilter};

/// State view daftar transaksi. Dimiliki eksklusif oleh view-nya dan
/// hanya diubah lewat method di sini, sehingga perilakunya bisa diuji
/// tanpa lapisan rendering.
#[derive(Clone, Debug, Default)]
pub struct TransaksiListState {
    pub items: Vec<Transaksi>,
    pub filter: TransaksiFilter,
    pub loading: bool,
    pub error: Option<String>,
    /// Generasi permintaan terakhir. Respons membawa generasi asalnya;
    /// yang lebih tua dari generasi sekarang dibuang supaya balasan yang
    /// menyusul tidak menimpa hasil filter terbaru.
    generation: u64,
}

impl TransaksiListState {
    pub fn new(filter: TransaksiFilter) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }

    /// Mulai satu fetch; kembalikan generasi untuk ditempelkan ke
    /// respons yang datang nanti.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Terima hasil fetch; respons generasi lama diabaikan utuh.
    pub fn apply_loaded(&mut self, generation: u64, items: Vec<Transaksi>) {
        if generation != self.generation {
            return;
        }
        self.items = items;
        self.loading = false;
    }

    /// Kegagalan fetch mengosongkan koleksi (data basi sengaja dibuang)
    /// dan mencatat pesannya; tidak ada retry otomatis.
    pub fn apply_failed(&mut self, generation: u64, message: String) {
        if generation != self.generation {
            return;
        }
        self.items = Vec::new();
        self.loading = false;
        self.error = Some(message);
    }

    /// Ringkasan selalu dihitung ulang dari koleksi yang tampil.
    pub fn ringkasan(&self) -> RingkasanTransaksi {
        ringkas(&self.items)
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
    fn loaded_items_replace_the_collection() {
        let mut state = TransaksiListState::default();
        let gen = state.begin_fetch();
        assert!(state.loading);

        state.apply_loaded(gen, vec![transaksi(1, "100"), transaksi(2, "200")]);
        assert!(!state.loading);
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.error, None);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = TransaksiListState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        // respons pertama datang terlambat, setelah fetch kedua dimulai
        state.apply_loaded(first, vec![transaksi(1, "100")]);
        assert!(state.items.is_empty());
        assert!(state.loading);

        state.apply_loaded(second, vec![transaksi(2, "200")]);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, 2);
    }

    #[test]
    fn stale_failure_is_also_discarded() {
        let mut state = TransaksiListState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        state.apply_failed(first, "timeout".to_string());
        assert_eq!(state.error, None);

        state.apply_loaded(second, vec![transaksi(1, "100")]);
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn failure_clears_previous_items() {
        let mut state = TransaksiListState::default();
        let gen = state.begin_fetch();
        state.apply_loaded(gen, vec![transaksi(1, "100")]);

        let gen = state.begin_fetch();
        state.apply_failed(gen, "HTTP 500".to_string());
        assert!(state.items.is_empty());
        assert_eq!(state.error.as_deref(), Some("HTTP 500"));
        assert!(!state.loading);
    }

    #[test]
    fn begin_fetch_clears_stale_error() {
        let mut state = TransaksiListState::default();
        let gen = state.begin_fetch();
        state.apply_failed(gen, "HTTP 500".to_string());

        state.begin_fetch();
        assert_eq!(state.error, None);
    }

    #[test]
    fn ringkasan_follows_displayed_collection() {
        let mut state = TransaksiListState::default();
        let gen = state.begin_fetch();
        state.apply_loaded(gen, vec![transaksi(1, "150000"), transaksi(2, "x")]);

        let r = state.ringkasan();
        assert_eq!(r.jumlah, 2);
        assert_eq!(r.pendapatan, 150000.0);
    }
}
