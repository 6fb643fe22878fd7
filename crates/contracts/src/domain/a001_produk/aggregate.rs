use serde::{Deserialize, Serialize};

/// Produk yang dijual di toko. Dikelola lewat Product Service
/// (`POST /produk`, `PUT /produk/{id}`, `DELETE /produk/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Produk {
    pub id: i64,

    pub nama: String,

    /// Harga satuan, dikirim API sebagai string angka.
    pub harga: String,

    /// Nama berkas foto di direktori upload server (kosong = belum ada).
    #[serde(default)]
    pub foto: String,

    #[serde(rename = "createdAt", default)]
    pub created_at: String,

    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

impl Produk {
    /// Harga sebagai angka; nilai yang tidak bisa diparse dihitung 0.
    pub fn harga_angka(&self) -> f64 {
        self.harga.trim().parse().unwrap_or(0.0)
    }

    /// Nama berkas foto, `None` bila belum pernah diunggah.
    pub fn foto(&self) -> Option<&str> {
        if self.foto.is_empty() {
            None
        } else {
            Some(&self.foto)
        }
    }
}

/// Form data untuk tambah/ubah produk, divalidasi sebelum dikirim.
#[derive(Debug, Clone, Default)]
pub struct ProdukDraft {
    pub nama: String,
    pub harga: String,
}

impl ProdukDraft {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.nama.trim().is_empty() {
            return Err("Nama Produk wajib diisi");
        }
        if self.harga.trim().is_empty() {
            return Err("Harga wajib diisi");
        }
        match self.harga.trim().parse::<f64>() {
            Ok(h) if h > 0.0 => Ok(()),
            _ => Err("Harga harus berupa angka lebih dari 0"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harga_angka_parses_wire_string() {
        let p = Produk {
            id: 1,
            nama: "Kopi Gayo 250g".to_string(),
            harga: "75000".to_string(),
            foto: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
        };
        assert_eq!(p.harga_angka(), 75000.0);
        assert_eq!(p.foto(), None);
    }

    #[test]
    fn harga_angka_defaults_to_zero_on_garbage() {
        let p = Produk {
            id: 2,
            nama: "x".to_string(),
            harga: "tujuh ribu".to_string(),
            foto: "kopi.jpg".to_string(),
            created_at: String::new(),
            updated_at: String::new(),
        };
        assert_eq!(p.harga_angka(), 0.0);
        assert_eq!(p.foto(), Some("kopi.jpg"));
    }

    #[test]
    fn draft_validation() {
        let mut d = ProdukDraft::default();
        assert!(d.validate().is_err());

        d.nama = "Teh Melati".to_string();
        d.harga = "abc".to_string();
        assert!(d.validate().is_err());

        d.harga = "12000".to_string();
        assert!(d.validate().is_ok());
    }
}
