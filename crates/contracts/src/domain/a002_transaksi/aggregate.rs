use serde::{Deserialize, Serialize};

use crate::domain::a001_produk::Produk;

/// Transaksi (pesanan pelanggan) sebagaimana dikembalikan Order Query
/// Service. Dashboard hanya memegang proyeksi baca/tulis selama view
/// terpasang; data tetap milik service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaksi {
    pub id: i64,

    /// Kode unik yang ditampilkan ke operator, mis. "TRX-2025-0001".
    pub nomor_transaksi: String,

    pub nama_pembeli: String,

    pub alamat: String,

    pub kode_pos: String,

    /// Status mentah dari API. Bisa saja berisi nilai di luar lima status
    /// yang dikenal; pemetaan label/warna menangani kasus itu.
    #[serde(default)]
    pub status: String,

    /// Tanggal transaksi (RFC 3339).
    pub tanggal: String,

    /// URL bukti transfer; string kosong berarti belum ada.
    #[serde(default)]
    pub bukti_transfer: String,

    pub metode_pengiriman: String,

    /// Total dikirim sebagai string angka oleh API.
    pub total_harga: String,

    /// Nomor telepon pembeli, tidak selalu ada.
    #[serde(default)]
    pub telp: Option<String>,

    #[serde(rename = "createdAt", default)]
    pub created_at: String,

    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,

    /// Rincian barang; endpoint daftar boleh mengosongkannya.
    #[serde(default)]
    pub details: Vec<DetailTransaksi>,
}

impl Transaksi {
    /// Total harga sebagai angka; nilai tak terparse dihitung 0 dan
    /// transaksinya tetap ikut dihitung (lihat `summary::ringkas`).
    pub fn total_harga_angka(&self) -> f64 {
        self.total_harga.trim().parse().unwrap_or(0.0)
    }

    pub fn bukti_transfer(&self) -> Option<&str> {
        if self.bukti_transfer.is_empty() {
            None
        } else {
            Some(&self.bukti_transfer)
        }
    }

    pub fn telp(&self) -> Option<&str> {
        self.telp.as_deref().filter(|t| !t.is_empty())
    }
}

/// Satu baris barang dalam transaksi.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailTransaksi {
    pub id: i64,

    pub quantity: i64,

    /// Subtotal tersimpan di service. Untuk tampilan dihitung ulang dari
    /// `quantity * harga` (lihat `subtotal_tampilan`), bukan dari sini.
    pub subtotal: String,

    /// Referensi produk. `None` bila produknya sudah tidak ada; view
    /// menampilkan placeholder, bukan error.
    #[serde(default)]
    pub produk: Option<Produk>,

    #[serde(rename = "createdAt", default)]
    pub created_at: String,

    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

impl DetailTransaksi {
    /// Subtotal yang ditampilkan: quantity × harga satuan produk,
    /// terlepas dari nilai subtotal yang tersimpan.
    pub fn subtotal_tampilan(&self) -> f64 {
        match &self.produk {
            Some(p) => self.quantity as f64 * p.harga_angka(),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn produk(harga: &str) -> Produk {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "nama": "Kopi Gayo 250g",
            "harga": harga,
            "foto": "kopi.jpg",
        }))
        .unwrap()
    }

    #[test]
    fn deserializes_list_payload_without_details() {
        let t: Transaksi = serde_json::from_value(serde_json::json!({
            "id": 12,
            "nomor_transaksi": "TRX-2025-0012",
            "nama_pembeli": "Budi Santoso",
            "alamat": "Jl. Merdeka 1, Bandung",
            "kode_pos": "40111",
            "status": "pending",
            "tanggal": "2025-07-01T09:30:00Z",
            "bukti_transfer": "",
            "metode_pengiriman": "JNE REG",
            "total_harga": "150000",
            "createdAt": "2025-07-01T09:30:00Z",
            "updatedAt": "2025-07-01T09:30:00Z"
        }))
        .unwrap();

        assert_eq!(t.total_harga_angka(), 150000.0);
        assert!(t.details.is_empty());
        assert_eq!(t.bukti_transfer(), None);
        assert_eq!(t.telp(), None);
    }

    #[test]
    fn subtotal_is_recomputed_from_quantity_and_price() {
        let d = DetailTransaksi {
            id: 1,
            quantity: 3,
            // stored subtotal deliberately disagrees with qty * harga
            subtotal: "999".to_string(),
            produk: Some(produk("10000")),
            created_at: String::new(),
            updated_at: String::new(),
        };
        assert_eq!(d.subtotal_tampilan(), 30000.0);
    }

    #[test]
    fn dangling_product_reference_yields_zero_subtotal() {
        let d = DetailTransaksi {
            id: 2,
            quantity: 5,
            subtotal: "50000".to_string(),
            produk: None,
            created_at: String::new(),
            updated_at: String::new(),
        };
        assert_eq!(d.subtotal_tampilan(), 0.0);
    }

    #[test]
    fn unparseable_total_counts_as_zero() {
        let t: Transaksi = serde_json::from_value(serde_json::json!({
            "id": 13,
            "nomor_transaksi": "TRX-2025-0013",
            "nama_pembeli": "Siti",
            "alamat": "-",
            "kode_pos": "-",
            "status": "process",
            "tanggal": "2025-07-02T10:00:00Z",
            "metode_pengiriman": "SiCepat",
            "total_harga": "N/A"
        }))
        .unwrap();
        assert_eq!(t.total_harga_angka(), 0.0);
    }
}
