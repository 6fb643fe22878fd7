use contracts::domain::a004_admin_user::AdminUser;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_admin_user::api;
use crate::shared::date_utils::format_tanggal;

#[component]
pub fn AdminUserList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<AdminUser>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    spawn_local(async move {
        match api::fetch_admin_users().await {
            Ok(list) => {
                set_items.set(list);
                set_error.set(None);
            }
            Err(e) => {
                log::error!("fetch admin: {e}");
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
                <div class="table__empty">"Data admin tidak ada"</div>
            }
            .into_any();
        }
        list.into_iter()
            .map(|a| {
                view! {
                    <div class="table__row">
                        <span class="table__cell table__cell--wide">{a.nama}</span>
                        <span class="table__cell table__cell--wide">{a.email}</span>
                        <span class="table__cell">{format_tanggal(&a.created_at)}</span>
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
                    <span class="table__cell table__cell--wide">"Email"</span>
                    <span class="table__cell">"Terdaftar"</span>
                </div>
                {rows}
            </div>
        </Show>
    }
}
