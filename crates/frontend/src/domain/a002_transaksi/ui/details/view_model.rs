use contracts::domain::a002_transaksi::{StatusTransaksi, Transaksi};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_transaksi::api;
use crate::shared::whatsapp::{link_wa, pesan_status};

/// Hasil sukses update status yang ditawarkan ke operator: pesan
/// konfirmasi plus tautan WhatsApp opsional (tidak pernah dikirim
/// otomatis; tanpa nomor telepon tidak ada tautan).
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateBerhasil {
    pub message: String,
    pub wa_link: Option<String>,
}

/// ViewModel halaman detail transaksi.
///
/// Satu-satunya state lokal yang bisa diedit adalah pilihan status yang
/// belum dikirim; diinisialisasi dari status hasil fetch dan bebas
/// diganti operator sebelum submit.
#[derive(Clone, Copy)]
pub struct TransaksiDetailViewModel {
    pub id: i64,
    pub data: RwSignal<Option<Transaksi>>,
    pub loading: RwSignal<bool>,
    pub status_pilihan: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub warning: RwSignal<Option<String>>,
    pub sukses: RwSignal<Option<UpdateBerhasil>>,
    pub preview_terbuka: RwSignal<bool>,
}

impl TransaksiDetailViewModel {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            data: RwSignal::new(None),
            loading: RwSignal::new(false),
            status_pilihan: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            warning: RwSignal::new(None),
            sukses: RwSignal::new(None),
            preview_terbuka: RwSignal::new(false),
        }
    }

    /// Ambil transaksi dari service. Kegagalan menampilkan pesan tanpa
    /// membuang data yang sudah tampil (kebijakan view detail).
    pub fn load(&self) {
        let this = *self;
        spawn_local(async move {
            this.loading.set(true);
            match api::fetch_transaksi_by_id(this.id).await {
                Ok(t) => {
                    this.status_pilihan.set(t.status.clone());
                    this.data.set(Some(t));
                    this.error.set(None);
                }
                Err(e) => {
                    log::error!("fetch transaksi {}: {e}", this.id);
                    this.error.set(Some(e));
                }
            }
            this.loading.set(false);
        });
    }

    /// Submit pilihan status.
    ///
    /// Pilihan kosong (atau di luar lima status) ditolak sebelum ada
    /// panggilan jaringan dan muncul sebagai peringatan validasi. Setelah
    /// PATCH sukses, transaksi di-refetch tepat satu kali supaya status
    /// yang tampil adalah nilai yang diterima service, lalu pesan
    /// WhatsApp disusun dari status baru. Bila gagal, pilihan status dan
    /// data yang tampil dibiarkan; tidak ada retry otomatis.
    pub fn update_status(&self) {
        let pilihan = self.status_pilihan.get_untracked();
        let Some(status) = StatusTransaksi::parse(&pilihan) else {
            self.warning
                .set(Some("Silakan pilih status terlebih dahulu.".to_string()));
            return;
        };

        let this = *self;
        spawn_local(async move {
            this.loading.set(true);
            this.warning.set(None);

            match api::update_status_transaksi(this.id, status).await {
                Ok(()) => match api::fetch_transaksi_by_id(this.id).await {
                    Ok(t) => {
                        let pesan = pesan_status(status.as_str(), &t.nama_pembeli);
                        let wa_link = link_wa(t.telp(), &pesan);
                        this.status_pilihan.set(t.status.clone());
                        this.data.set(Some(t));
                        this.error.set(None);
                        this.sukses.set(Some(UpdateBerhasil {
                            message: "Status transaksi berhasil diperbarui.".to_string(),
                            wa_link,
                        }));
                    }
                    Err(e) => this.error.set(Some(e)),
                },
                Err(e) => this.error.set(Some(e)),
            }

            this.loading.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_is_rejected_before_any_network_call() {
        let vm = TransaksiDetailViewModel::new(1);
        assert_eq!(vm.status_pilihan.get_untracked(), "");

        vm.update_status();

        assert!(vm.warning.get_untracked().is_some());
        // tidak ada fetch yang dimulai
        assert!(!vm.loading.get_untracked());
        assert_eq!(vm.sukses.get_untracked(), None);
    }

    #[test]
    fn unrecognized_selection_is_rejected_too() {
        let vm = TransaksiDetailViewModel::new(1);
        vm.status_pilihan.set("archived".to_string());

        vm.update_status();

        assert!(vm.warning.get_untracked().is_some());
        assert!(!vm.loading.get_untracked());
    }
}
