use leptos::prelude::*;

/// Badge status transaksi. Label dan kelas dihitung pemanggil lewat
/// pemetaan total di contracts (nilai tak dikenal sudah jatuh ke
/// "Tidak Diketahui" / badge--neutral di sana).
#[component]
pub fn StatusBadge(
    #[prop(into)] label: String,
    #[prop(into)] badge_class: String,
) -> impl IntoView {
    view! { <span class=format!("badge {}", badge_class)>{label}</span> }
}
