use contracts::domain::a002_transaksi::status::{normalize, status_badge_class, status_label};
use contracts::domain::a002_transaksi::{StatusTransaksi, Transaksi};
use leptos::prelude::*;

use super::view_model::TransaksiDetailViewModel;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::format_tanggal;
use crate::shared::format::format_harga;

#[component]
fn InfoField(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    let display = if value.is_empty() { "-".to_string() } else { value };
    view! {
        <div class="info-field">
            <label>{label}</label>
            <div class="info-field__value">{display}</div>
        </div>
    }
}

#[component]
pub fn TransaksiDetail(id: i64) -> impl IntoView {
    let vm = TransaksiDetailViewModel::new(id);
    vm.load();

    view! {
        <Show when=move || vm.warning.get().is_some()>
            <div class="notice notice--warning">
                <span>{move || vm.warning.get().unwrap_or_default()}</span>
                <button class="notice__close" on:click=move |_| vm.warning.set(None)>
                    "Tutup"
                </button>
            </div>
        </Show>

        <Show when=move || vm.error.get().is_some()>
            <div class="error-message">
                {move || vm.error.get().unwrap_or_default()}
            </div>
        </Show>

        <Show when=move || vm.sukses.get().is_some()>
            <div class="notice notice--success">
                <span>{move || vm.sukses.get().map(|s| s.message).unwrap_or_default()}</span>
                {move || {
                    vm.sukses.get().and_then(|s| s.wa_link).map(|link| {
                        view! {
                            <a class="btn btn-wa" href=link target="_blank">
                                "Kirim WhatsApp"
                            </a>
                        }
                    })
                }}
                <button class="notice__close" on:click=move |_| vm.sukses.set(None)>
                    "Tutup"
                </button>
            </div>
        </Show>

        {move || match vm.data.get() {
            None => {
                view! { <p class="table__loading">"Memuat..."</p> }.into_any()
            }
            Some(t) => view! { <DetailCards vm=vm transaksi=t /> }.into_any(),
        }}
    }
}

#[component]
fn DetailCards(vm: TransaksiDetailViewModel, transaksi: Transaksi) -> impl IntoView {
    let t = transaksi;

    let status_options = StatusTransaksi::ALL
        .into_iter()
        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
        .collect_view();

    // View daftar memakai status mentah untuk label dan warna; di sini
    // warna mencari dengan nilai yang dinormalkan lebih dulu. Keduanya
    // perilaku sistem asal dan sengaja dipertahankan.
    let chip_label = status_label(&t.status);
    let chip_class = status_badge_class(&normalize(&t.status));

    let bukti = t.bukti_transfer().map(str::to_string);
    let bukti_img = bukti.clone();
    let bukti_preview = bukti.clone();

    let details = t.details.clone();
    let total_quantity: i64 = details.iter().map(|d| d.quantity).sum();

    let detail_rows = if details.is_empty() {
        view! {
            <div class="table__empty">"Tidak ada data produk"</div>
        }
        .into_any()
    } else {
        details
            .into_iter()
            .map(|d| {
                let row = match &d.produk {
                    Some(p) => view! {
                        <div class="table__row">
                            <span class="table__cell table__cell--wide">{p.nama.clone()}</span>
                            <span class="table__cell table__cell--center">
                                {format_harga(p.harga_angka())}
                            </span>
                            <span class="table__cell table__cell--center">{d.quantity.to_string()}</span>
                            <span class="table__cell table__cell--center">
                                {format_harga(d.subtotal_tampilan())}
                            </span>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <div class="table__row table__row--muted">
                            <span class="table__cell table__cell--wide">
                                "Tidak ada data produk"
                            </span>
                            <span class="table__cell table__cell--center">"-"</span>
                            <span class="table__cell table__cell--center">{d.quantity.to_string()}</span>
                            <span class="table__cell table__cell--center">"-"</span>
                        </div>
                    }
                    .into_any(),
                };
                row
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="card card--split">
            <div>
                <label class="card__label">"Status"</label>
                <StatusBadge label=chip_label badge_class=chip_class />
            </div>

            <div class="status-update">
                <label class="card__label">"Update Status Transaksi"</label>
                <div class="status-update__controls">
                    <select
                        prop:value=move || vm.status_pilihan.get()
                        on:change=move |ev| vm.status_pilihan.set(event_target_value(&ev))
                    >
                        <option value="">"Pilih status..."</option>
                        {status_options}
                    </select>
                    <button
                        class="btn btn-primary"
                        disabled=move || vm.loading.get()
                        on:click=move |_| vm.update_status()
                    >
                        {move || if vm.loading.get() { "Menyimpan..." } else { "Update Status" }}
                    </button>
                </div>
            </div>
        </div>

        <div class="card card--columns">
            <div class="card__column">
                <InfoField label="Nomor Transaksi" value=t.nomor_transaksi.clone() />
                <InfoField label="Tanggal Transaksi" value=format_tanggal(&t.tanggal) />
                <InfoField label="Nama Pembeli" value=t.nama_pembeli.clone() />
                <InfoField label="Alamat" value=t.alamat.clone() />
                <InfoField label="Kode Pos" value=t.kode_pos.clone() />
                <InfoField label="Metode Pengiriman" value=t.metode_pengiriman.clone() />
                <InfoField label="Total Harga" value=format_harga(t.total_harga_angka()) />
            </div>

            <div class="card__column">
                <label class="card__label">"Bukti Transfer"</label>
                {match bukti_img {
                    Some(url) => {
                        let download_url = url.clone();
                        view! {
                            <div class="bukti">
                                <img
                                    class="bukti__thumb"
                                    src=url
                                    alt="Bukti Transfer"
                                    on:click=move |_| vm.preview_terbuka.set(true)
                                />
                                <div class="bukti__actions">
                                    <button
                                        class="btn btn-secondary"
                                        on:click=move |_| vm.preview_terbuka.set(true)
                                    >
                                        "Lihat Gambar"
                                    </button>
                                    <a
                                        class="btn btn-primary"
                                        href=download_url
                                        target="_blank"
                                    >
                                        "Download"
                                    </a>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                    None => view! {
                        <span class="muted">"Tidak ada bukti transfer"</span>
                    }
                        .into_any(),
                }}
            </div>
        </div>

        <div class="card">
            <div class="card__title">"Detail Produk"</div>
            <div class="table">
                <div class="table__header">
                    <span class="table__cell table__cell--wide">"Nama Produk"</span>
                    <span class="table__cell table__cell--center">"Harga"</span>
                    <span class="table__cell table__cell--center">"Jumlah"</span>
                    <span class="table__cell table__cell--center">"Subtotal"</span>
                </div>
                {detail_rows}
                <div class="table__row table__row--footer">
                    <span class="table__cell table__cell--wide">"Total"</span>
                    <span class="table__cell table__cell--center"></span>
                    <span class="table__cell table__cell--center">{total_quantity.to_string()}</span>
                    <span class="table__cell table__cell--center">
                        {format_harga(t.total_harga_angka())}
                    </span>
                </div>
            </div>
        </div>

        <Show when=move || vm.preview_terbuka.get()>
            {
                let bukti_url = bukti_preview.clone().unwrap_or_default();
                view! {
                    <div class="modal-overlay" on:click=move |_| vm.preview_terbuka.set(false)>
                        <div class="modal-overlay__body">
                            <img src=bukti_url.clone() alt="Preview Bukti Transfer" />
                            <button
                                class="btn btn-secondary"
                                on:click=move |_| vm.preview_terbuka.set(false)
                            >
                                "Tutup"
                            </button>
                        </div>
                    </div>
                }
            }
        </Show>
    }
}
