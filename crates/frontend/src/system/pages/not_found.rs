use leptos::prelude::*;

use crate::routes::{use_navigator, Page};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigator = use_navigator();

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Halaman tidak ditemukan."</p>
            <button class="btn-primary" on:click=move |_| navigator.go(Page::Produk)>
                "Kembali ke Data Produk"
            </button>
        </div>
    }
}
