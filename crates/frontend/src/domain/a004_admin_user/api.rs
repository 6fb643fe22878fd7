use contracts::domain::a004_admin_user::AdminUser;
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Ambil daftar akun admin.
pub async fn fetch_admin_users() -> Result<Vec<AdminUser>, String> {
    let response = Request::get(&format!("{}/admin", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Gagal mengambil data admin: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
