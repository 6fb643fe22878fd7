use leptos::prelude::*;

use crate::routes::{use_navigator, Page};

/// Judul halaman + jejak breadcrumb sederhana.
#[component]
pub fn Header(page: Page) -> impl IntoView {
    let navigator = use_navigator();

    // halaman detail menautkan kembali ke daftarnya
    let parent = match page {
        Page::TransaksiDetail(_) => Some(Page::Transaksi),
        _ => None,
    };

    let trail = parent.map(|p| {
        view! {
            <li>
                <button class="breadcrumb__link" on:click=move |_| navigator.go(p)>
                    {p.title()} " /"
                </button>
            </li>
        }
    });

    view! {
        <div class="page-header">
            <h2>{page.title()}</h2>
            <nav>
                <ol class="breadcrumb">
                    {trail}
                    <li class="breadcrumb__current">{page.title()}</li>
                </ol>
            </nav>
        </div>
    }
}
