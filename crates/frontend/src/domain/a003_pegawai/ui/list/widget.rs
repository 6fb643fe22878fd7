use contracts::domain::a003_pegawai::Pegawai;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_pegawai::api;

#[component]
pub fn PegawaiList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Pegawai>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    spawn_local(async move {
        match api::fetch_pegawai().await {
            Ok(list) => {
                set_items.set(list);
                set_error.set(None);
            }
            Err(e) => {
                log::error!("fetch pegawai: {e}");
                set_items.set(Vec::new());
                set_error.set(Some(e));
            }
        }
        set_loading.set(false);
    });

    let rows = move || {
        let list = items.get();
        if list.is_empty() {
            return view! {
                <div class="table__empty">"Data pegawai tidak ada"</div>
            }
            .into_any();
        }
        list.into_iter()
            .map(|p| {
                view! {
                    <div class="table__row">
                        <span class="table__cell table__cell--wide">{p.nama}</span>
                        <span class="table__cell">{p.jabatan}</span>
                        <span class="table__cell">{p.telp}</span>
                        <span class="table__cell table__cell--wide">{p.alamat}</span>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message">{move || error.get().unwrap_or_default()}</div>
        </Show>

        <Show
            when=move || !loading.get()
            fallback=|| view! { <p class="table__loading">"Memuat..."</p> }
        >
            <div class="table">
                <div class="table__header">
                    <span class="table__cell table__cell--wide">"Nama"</span>
                    <span class="table__cell">"Jabatan"</span>
                    <span class="table__cell">"Telepon"</span>
                    <span class="table__cell table__cell--wide">"Alamat"</span>
                </div>
                {rows}
            </div>
        </Show>
    }
}
