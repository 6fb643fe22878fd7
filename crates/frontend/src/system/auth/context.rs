use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
}

/// Auth context provider component
///
/// Sesi dipulihkan sinkron dari cookie saat mount; keberadaan token
/// sudah berarti terautentikasi (tidak ada validasi isi token).
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        token: storage::get_access_token(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
///
/// Panggil di badan komponen, bukan di dalam event handler; handler
/// cukup menangkap signal hasil panggilan ini.
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Simpan token hasil login dan tandai sesi aktif.
pub fn store_session(set_auth_state: WriteSignal<AuthState>, token: String) {
    storage::save_access_token(&token);
    set_auth_state.set(AuthState { token: Some(token) });
}

/// Hapus cookie dan kosongkan state; keputusan rute lalu mengarahkan
/// kembali ke halaman sign-in.
pub fn clear_session(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_access_token();
    set_auth_state.set(AuthState::default());
}
