use std::rc::Rc;

use contracts::domain::a001_produk::Produk;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_produk::api;
use crate::domain::a001_produk::ui::details::ProdukForm;
use crate::shared::api_utils::upload_url;
use crate::shared::date_utils::format_tanggal;
use crate::shared::format::format_harga_str;

#[component]
pub fn ProdukList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Produk>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(Option::<Produk>::None);
    let saved_notice = RwSignal::new(Option::<String>::None);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_produk().await {
                Ok(list) => {
                    set_items.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("fetch produk: {e}");
                    set_items.set(Vec::new());
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    fetch();

    let show_saved_notice = move || {
        saved_notice.set(Some("Data produk tersimpan.".to_string()));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2000).await;
            saved_notice.set(None);
        });
    };

    let handle_add = move |_| {
        editing.set(None);
        show_form.set(true);
    };

    let handle_delete = move |p: Produk| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Hapus produk \"{}\"?", p.nama))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match api::delete_produk(p.id).await {
                Ok(()) => {
                    // berkas foto yatim ikut dibersihkan; kegagalannya
                    // tidak membatalkan penghapusan yang sudah terjadi
                    if let Some(foto) = p.foto() {
                        if let Err(e) = api::delete_foto(foto).await {
                            log::warn!("hapus foto {foto}: {e}");
                        }
                    }
                    fetch();
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let rows = move || {
        let list = items.get();
        if list.is_empty() {
            return view! {
                <div class="table__empty">"Data produk tidak ada"</div>
            }
            .into_any();
        }
        list.into_iter()
            .map(|p| {
                let p_edit = p.clone();
                let p_delete = p.clone();
                let foto_view = match p.foto() {
                    Some(f) => view! {
                        <img class="table__thumb" src=upload_url(f) alt=p.nama.clone() />
                    }
                    .into_any(),
                    None => view! { <span class="muted">"Tidak ada foto"</span> }.into_any(),
                };
                view! {
                    <div class="table__row">
                        <span class="table__cell">{foto_view}</span>
                        <span class="table__cell table__cell--wide">{p.nama.clone()}</span>
                        <span class="table__cell table__cell--right">
                            {format_harga_str(&p.harga)}
                        </span>
                        <span class="table__cell">{format_tanggal(&p.updated_at)}</span>
                        <span class="table__cell table__cell--center">
                            <button
                                class="table__link"
                                on:click=move |_| {
                                    editing.set(Some(p_edit.clone()));
                                    show_form.set(true);
                                }
                            >
                                "Edit"
                            </button>
                            <button
                                class="table__link table__link--danger"
                                on:click=move |_| handle_delete(p_delete.clone())
                            >
                                "Hapus"
                            </button>
                        </span>
                    </div>
                }
                .into_any()
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="toolbar">
            <button class="btn btn-primary" on:click=handle_add>"Tambah Produk"</button>
        </div>

        <Show when=move || saved_notice.get().is_some()>
            <div class="notice notice--success">
                {move || saved_notice.get().unwrap_or_default()}
            </div>
        </Show>

        <Show when=move || error.get().is_some()>
            <div class="error-message">{move || error.get().unwrap_or_default()}</div>
        </Show>

        <Show
            when=move || !loading.get()
            fallback=|| view! { <p class="table__loading">"Memuat..."</p> }
        >
            <div class="table">
                <div class="table__header">
                    <span class="table__cell">"Foto"</span>
                    <span class="table__cell table__cell--wide">"Nama Produk"</span>
                    <span class="table__cell table__cell--right">"Harga"</span>
                    <span class="table__cell">"Terakhir Diubah"</span>
                    <span class="table__cell table__cell--center">"Aksi"</span>
                </div>
                {rows}
            </div>
        </Show>

        {move || {
            show_form.get().then(|| {
                let existing = editing.get();
                view! {
                    <div class="modal-overlay">
                        <div class="modal-overlay__body">
                            <ProdukForm
                                existing=existing
                                on_saved=Rc::new(move || {
                                    show_form.set(false);
                                    show_saved_notice();
                                    fetch();
                                })
                                on_cancel=Rc::new(move || show_form.set(false))
                            />
                        </div>
                    </div>
                }
            })
        }}
    }
}
