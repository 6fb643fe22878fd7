use contracts::domain::a003_pegawai::Pegawai;
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Ambil daftar pegawai.
pub async fn fetch_pegawai() -> Result<Vec<Pegawai>, String> {
    let response = Request::get(&format!("{}/pegawai", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Gagal mengambil data pegawai: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
