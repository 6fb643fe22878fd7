use chrono::NaiveDate;
use contracts::domain::a002_transaksi::status::{status_badge_class, status_label};
use contracts::domain::a002_transaksi::{StatusFilter, StatusTransaksi, TransaksiFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::state::TransaksiListState;
use crate::domain::a002_transaksi::api;
use crate::routes::{use_navigator, Page};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::{format_tanggal_jam, month_bounds, today};
use crate::shared::format::format_harga;

fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[component]
pub fn TransaksiList() -> impl IntoView {
    let (start, end) = month_bounds(today());
    let state = RwSignal::new(TransaksiListState::new(TransaksiFilter::awal(start, end)));
    let navigator = use_navigator();

    // Setiap perubahan filter memicu fetch baru; koleksi lama diganti
    // respons apa adanya. Respons yang tersalip dibuang oleh state.
    let fetch = move || {
        let generation = state.try_update(|s| s.begin_fetch()).unwrap_or_default();
        let filter = state.with_untracked(|s| s.filter.clone());
        spawn_local(async move {
            match api::fetch_transaksi(&filter).await {
                Ok(items) => state.update(|s| s.apply_loaded(generation, items)),
                Err(e) => {
                    log::error!("fetch transaksi: {e}");
                    state.update(|s| s.apply_failed(generation, e));
                }
            }
        });
    };

    // muat pertama kali
    fetch();

    let handle_reset = move |_| {
        let (start, end) = month_bounds(today());
        state.update(|s| {
            s.filter = TransaksiFilter {
                search: String::new(),
                status: StatusFilter::Semua,
                start_date: Some(start),
                end_date: Some(end),
            };
        });
        fetch();
    };

    let status_options = StatusTransaksi::ALL
        .into_iter()
        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
        .collect_view();

    let rows = move || {
        let items = state.with(|s| s.items.clone());
        if items.is_empty() {
            return view! {
                <div class="table__empty">"Data transaksi tidak ada"</div>
            }
            .into_any();
        }
        items
            .into_iter()
            .map(|t| {
                let detail_target = Page::TransaksiDetail(t.id);
                view! {
                    <div class="table__row">
                        <span class="table__cell">{t.nomor_transaksi.clone()}</span>
                        <span class="table__cell">{format_tanggal_jam(&t.tanggal)}</span>
                        <span class="table__cell">{t.nama_pembeli.clone()}</span>
                        <span class="table__cell table__cell--center">
                            <StatusBadge
                                label=status_label(&t.status)
                                badge_class=status_badge_class(&t.status)
                            />
                        </span>
                        <span class="table__cell table__cell--right">
                            {format_harga(t.total_harga_angka())}
                        </span>
                        <span class="table__cell table__cell--center">
                            <button
                                class="table__link"
                                on:click=move |_| navigator.go(detail_target)
                            >
                                "Detail"
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
        <div class="filter-panel">
            <div class="form-group form-group--grow">
                <label>"Search"</label>
                <input
                    type="text"
                    placeholder="Cari nama / nomor transaksi..."
                    prop:value=move || state.with(|s| s.filter.search.clone())
                    on:input=move |ev| {
                        state.update(|s| s.filter.search = event_target_value(&ev));
                    }
                />
            </div>

            <div class="form-group">
                <label>"Status"</label>
                <select
                    prop:value=move || {
                        state.with(|s| s.filter.status.as_param().unwrap_or("").to_string())
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.filter.status = StatusFilter::from_select_value(&value));
                    }
                >
                    <option value="">"Semua"</option>
                    {status_options}
                </select>
            </div>

            <div class="form-group">
                <label>"Start Date"</label>
                <input
                    type="date"
                    prop:value=move || state.with(|s| date_input_value(s.filter.start_date))
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.filter.start_date = parse_date_input(&value));
                    }
                />
            </div>

            <div class="form-group">
                <label>"End Date"</label>
                <input
                    type="date"
                    prop:value=move || state.with(|s| date_input_value(s.filter.end_date))
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.filter.end_date = parse_date_input(&value));
                    }
                />
            </div>

            <div class="filter-panel__actions">
                <button class="btn btn-primary" on:click=move |_| fetch()>"Filter"</button>
                <button class="btn btn-secondary" on:click=handle_reset>"Reset"</button>
            </div>
        </div>

        <div class="stat-grid">
            <StatCard
                label="Total Transaksi (berdasarkan filter)"
                value=Signal::derive(move || {
                    state.with(|s| s.ringkasan().jumlah.to_string())
                })
            />
            <StatCard
                label="Total Pendapatan (berdasarkan filter)"
                value=Signal::derive(move || {
                    state.with(|s| format_harga(s.ringkasan().pendapatan))
                })
            />
        </div>

        <Show when=move || state.with(|s| s.error.is_some())>
            <div class="error-message">
                {move || state.with(|s| s.error.clone().unwrap_or_default())}
            </div>
        </Show>

        <Show
            when=move || !state.with(|s| s.loading)
            fallback=|| view! { <p class="table__loading">"Memuat..."</p> }
        >
            <div class="table">
                <div class="table__header">
                    <span class="table__cell">"Nomor Transaksi"</span>
                    <span class="table__cell">"Tanggal Transaksi"</span>
                    <span class="table__cell">"Nama Pembeli"</span>
                    <span class="table__cell table__cell--center">"Status"</span>
                    <span class="table__cell table__cell--right">"Total Harga"</span>
                    <span class="table__cell table__cell--center">"Aksi"</span>
                </div>
                {rows}
            </div>
        </Show>
    }
}
