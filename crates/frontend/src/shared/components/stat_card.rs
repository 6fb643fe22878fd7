use leptos::prelude::*;

/// Kartu ringkasan di atas tabel daftar (jumlah transaksi, pendapatan).
/// Nilainya selalu turunan dari koleksi yang sedang ditampilkan.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Formatted value text
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value}</div>
            </div>
        </div>
    }
}
