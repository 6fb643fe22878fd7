use leptos::prelude::*;

use crate::routes::{use_navigator, Page};
use crate::system::auth::context::{clear_session, use_auth};

const NAV_ITEMS: [Page; 4] = [Page::Produk, Page::Transaksi, Page::Pegawai, Page::DataAdmin];

#[component]
pub fn Sidebar(active: Page) -> impl IntoView {
    let navigator = use_navigator();
    let (_, set_auth_state) = use_auth();

    // halaman detail menyorot induknya di sidebar
    let active_root = match active {
        Page::TransaksiDetail(_) => Page::Transaksi,
        p => p,
    };

    let items = NAV_ITEMS
        .into_iter()
        .map(|item| {
            let class = if item == active_root {
                "sidebar__item sidebar__item--active"
            } else {
                "sidebar__item"
            };
            view! {
                <li>
                    <button class=class on:click=move |_| navigator.go(item)>
                        {item.title()}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"Toko Admin"</div>
            <nav>
                <ul>{items}</ul>
            </nav>
            <button
                class="sidebar__logout"
                on:click=move |_| {
                    // keputusan rute mengarahkan ke sign-in begitu token hilang
                    clear_session(set_auth_state);
                }
            >
                "Keluar"
            </button>
        </aside>
    }
}
