use std::rc::Rc;

use contracts::domain::a001_produk::{Produk, ProdukDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_produk::api::{self, FotoField};

/// ViewModel form tambah/ubah produk.
#[derive(Clone, Copy)]
pub struct ProdukFormViewModel {
    edit_id: Option<i64>,
    pub draft: RwSignal<ProdukDraft>,
    // web_sys::File bukan Send, jadi signal-nya harus local storage
    pub foto: RwSignal<FotoField, LocalStorage>,
    pub warning: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ProdukFormViewModel {
    pub fn new(existing: Option<&Produk>) -> Self {
        let (edit_id, draft, foto) = match existing {
            Some(p) => (
                Some(p.id),
                ProdukDraft {
                    nama: p.nama.clone(),
                    harga: p.harga.clone(),
                },
                match p.foto() {
                    Some(f) => FotoField::Lama(f.to_string()),
                    None => FotoField::Kosong,
                },
            ),
            None => (None, ProdukDraft::default(), FotoField::Kosong),
        };

        Self {
            edit_id,
            draft: RwSignal::new(draft),
            foto: RwSignal::new_local(foto),
            warning: RwSignal::new(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_id.is_some()
    }

    /// Berkas yang dipilih dari input file menggantikan foto lama.
    pub fn set_file(&self, file: Option<web_sys::File>) {
        if let Some(f) = file {
            self.foto.set(FotoField::Baru(f));
        }
    }

    /// Simpan draft. Validasi berjalan dulu dan kegagalannya muncul
    /// sebagai peringatan tanpa ada panggilan jaringan.
    pub fn save(&self, on_saved: Rc<dyn Fn()>) {
        let draft = self.draft.get_untracked();
        if let Err(msg) = draft.validate() {
            self.warning.set(Some(msg.to_string()));
            return;
        }

        let this = *self;
        spawn_local(async move {
            this.saving.set(true);
            this.warning.set(None);

            let foto = this.foto.get_untracked();
            let result = match this.edit_id {
                Some(id) => api::edit_produk(id, &draft, &foto).await,
                None => api::add_produk(&draft, &foto).await,
            };

            match result {
                Ok(()) => {
                    this.error.set(None);
                    on_saved();
                }
                Err(e) => {
                    log::error!("simpan produk: {e}");
                    this.error.set(Some(e));
                }
            }

            this.saving.set(false);
        });
    }
}
