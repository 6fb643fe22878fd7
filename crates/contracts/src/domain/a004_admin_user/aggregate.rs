use serde::{Deserialize, Serialize};

/// Akun admin dashboard; daftar baca-saja di halaman Data Admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub nama: String,
    pub email: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}
