use leptos::prelude::*;

use crate::domain::a001_produk::ui::list::ProdukList;
use crate::domain::a002_transaksi::ui::details::TransaksiDetail;
use crate::domain::a002_transaksi::ui::list::TransaksiList;
use crate::domain::a003_pegawai::ui::list::PegawaiList;
use crate::domain::a004_admin_user::ui::list::AdminUserList;
use crate::layout::header::Header;
use crate::layout::sidebar::Sidebar;
use crate::routes::Page;

/// Kerangka halaman terautentikasi: sidebar navigasi + konten.
#[component]
pub fn Shell(page: Page) -> impl IntoView {
    view! {
        <div class="shell">
            <Sidebar active=page />
            <main class="shell__content">
                <Header page=page />
                {content(page)}
            </main>
        </div>
    }
}

fn content(page: Page) -> AnyView {
    match page {
        Page::Produk => view! { <ProdukList /> }.into_any(),
        Page::Transaksi => view! { <TransaksiList /> }.into_any(),
        Page::TransaksiDetail(id) => view! { <TransaksiDetail id=id /> }.into_any(),
        Page::Pegawai => view! { <PegawaiList /> }.into_any(),
        Page::DataAdmin => view! { <AdminUserList /> }.into_any(),
        // SignIn/NotFound dirender di luar Shell (lihat AppRoutes)
        _ => view! { <ProdukList /> }.into_any(),
    }
}
