use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::decision::{decide, parse_path, Page, RouteDecision};
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::SignInPage;
use crate::system::pages::not_found::NotFoundPage;

/// Navigasi internal tanpa reload: ganti halaman aktif dan dorong URL
/// baru ke history browser.
#[derive(Clone, Copy)]
pub struct Navigator {
    page: RwSignal<Page>,
}

impl Navigator {
    pub fn go(&self, target: Page) {
        push_url(&target.href());
        self.page.set(target);
    }
}

pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().expect("Navigator not found in component tree")
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_url(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url));
        }
    }
}

fn replace_url(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url));
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let page = RwSignal::new(Page::SignIn);

    provide_context(Navigator { page });

    // Terapkan keputusan rute untuk path di address bar, saat mount dan
    // setiap status auth berubah (login/logout). Redirect bisa berantai:
    // "/" -> "/produk" -> "/auth/signin" bila belum ada token.
    Effect::new(move |_| {
        let has_token = auth_state.get().token.is_some();
        let mut path = current_path();
        loop {
            match decide(&path, has_token) {
                RouteDecision::Render(p) => {
                    page.set(p);
                    break;
                }
                RouteDecision::Redirect(to) => {
                    replace_url(to);
                    path = to.to_string();
                }
            }
        }
    });

    // Tombol back/forward browser: turunkan halaman dari path lagi.
    if let Some(window) = web_sys::window() {
        let on_popstate = Closure::<dyn FnMut()>::new(move || {
            page.set(parse_path(&current_path()));
        });
        window.set_onpopstate(Some(on_popstate.as_ref().unchecked_ref()));
        on_popstate.forget();
    }

    view! {
        {move || match page.get() {
            Page::SignIn => view! { <SignInPage /> }.into_any(),
            Page::NotFound => view! { <NotFoundPage /> }.into_any(),
            p => view! { <Shell page=p /> }.into_any(),
        }}
    }
}
