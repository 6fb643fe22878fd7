use serde::{Deserialize, Serialize};

/// Pegawai toko; dashboard hanya menampilkan daftarnya.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pegawai {
    pub id: i64,
    pub nama: String,
    pub jabatan: String,
    #[serde(default)]
    pub telp: String,
    #[serde(default)]
    pub alamat: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}
