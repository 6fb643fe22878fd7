use std::rc::Rc;

use contracts::domain::a001_produk::Produk;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::view_model::ProdukFormViewModel;
use crate::domain::a001_produk::api::FotoField;

#[component]
pub fn ProdukForm(
    existing: Option<Produk>,
    on_saved: Rc<dyn Fn()>,
    on_cancel: Rc<dyn Fn()>,
) -> impl IntoView {
    let vm = ProdukFormViewModel::new(existing.as_ref());

    let title = if vm.is_edit_mode() {
        "Edit Produk"
    } else {
        "Tambah Produk"
    };

    let foto_label = move || match vm.foto.get() {
        FotoField::Kosong => "Belum ada foto".to_string(),
        FotoField::Lama(nama) => nama,
        FotoField::Baru(file) => file.name(),
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{title}</h3>
            </div>

            <Show when=move || vm.warning.get().is_some()>
                <div class="notice notice--warning">
                    {move || vm.warning.get().unwrap_or_default()}
                </div>
            </Show>

            <Show when=move || vm.error.get().is_some()>
                <div class="error-message">
                    {move || vm.error.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="details-form">
                <div class="form-group">
                    <label for="nama">"Nama Produk"</label>
                    <input
                        type="text"
                        id="nama"
                        prop:value=move || vm.draft.get().nama
                        on:input=move |ev| {
                            vm.draft.update(|d| d.nama = event_target_value(&ev));
                        }
                        placeholder="Nama produk"
                    />
                </div>

                <div class="form-group">
                    <label for="harga">"Harga"</label>
                    <input
                        type="number"
                        id="harga"
                        prop:value=move || vm.draft.get().harga
                        on:input=move |ev| {
                            vm.draft.update(|d| d.harga = event_target_value(&ev));
                        }
                        placeholder="75000"
                    />
                </div>

                <div class="form-group">
                    <label for="foto">"Foto"</label>
                    <input
                        type="file"
                        id="foto"
                        accept="image/*"
                        on:change=move |ev| {
                            let input = ev
                                .target()
                                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
                            if let Some(input) = input {
                                vm.set_file(input.files().and_then(|files| files.get(0)));
                            }
                        }
                    />
                    <span class="muted">{foto_label}</span>
                </div>

                <div class="form-actions">
                    <button
                        class="btn btn-primary"
                        disabled=move || vm.saving.get()
                        on:click={
                            let on_saved = on_saved.clone();
                            move |_| vm.save(on_saved.clone())
                        }
                    >
                        {move || if vm.saving.get() { "Menyimpan..." } else { "Simpan" }}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| on_cancel()>
                        "Batal"
                    </button>
                </div>
            </div>
        </div>
    }
}
