use contracts::domain::a002_transaksi::{StatusTransaksi, Transaksi, TransaksiFilter};
use gloo_net::http::Request;
use serde::Serialize;

use crate::shared::api_utils::api_base;

#[derive(Serialize)]
struct TransaksiQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'static str>,
    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none")]
    start_date: Option<String>,
    #[serde(rename = "endDate", skip_serializing_if = "Option::is_none")]
    end_date: Option<String>,
}

/// Susun query string daftar transaksi; param yang kosong dihilangkan
/// seluruhnya, bukan dikirim sebagai string kosong.
fn query_string(filter: &TransaksiFilter) -> String {
    let query = TransaksiQuery {
        search: filter.search_param(),
        status: filter.status.as_param(),
        start_date: filter.start_date_param(),
        end_date: filter.end_date_param(),
    };
    serde_qs::to_string(&query).unwrap_or_default()
}

/// Ambil daftar transaksi sesuai filter. Respons menggantikan koleksi
/// tampilan apa adanya; tidak ada penyaringan ulang di sisi klien.
pub async fn fetch_transaksi(filter: &TransaksiFilter) -> Result<Vec<Transaksi>, String> {
    let qs = query_string(filter);
    let url = if qs.is_empty() {
        format!("{}/transaksi", api_base())
    } else {
        format!("{}/transaksi?{}", api_base(), qs)
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Gagal mengambil data transaksi: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Ambil satu transaksi lengkap dengan rincian barang dan produknya.
pub async fn fetch_transaksi_by_id(id: i64) -> Result<Transaksi, String> {
    let response = Request::get(&format!("{}/transaksi/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Gagal mengambil data transaksi: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[derive(Serialize)]
struct UpdateStatusBody {
    status: StatusTransaksi,
}

/// Tulis status baru. Ini overwrite polos: service tidak menegakkan
/// legalitas transisi dan lapisan ini juga tidak. Badan respons tidak
/// dipakai; pemanggil melakukan refetch setelah sukses.
pub async fn update_status_transaksi(id: i64, status: StatusTransaksi) -> Result<(), String> {
    let response = Request::patch(&format!("{}/transaksi/{}/status", api_base(), id))
        .json(&UpdateStatusBody { status })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Tidak dapat memperbarui status: {}", response.status()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a002_transaksi::StatusFilter;

    #[test]
    fn empty_filter_produces_empty_query() {
        assert_eq!(query_string(&TransaksiFilter::default()), "");
    }

    #[test]
    fn full_filter_includes_every_param() {
        let filter = TransaksiFilter {
            search: "TRX-2025".to_string(),
            status: StatusFilter::Hanya(StatusTransaksi::Pending),
            start_date: NaiveDate::from_ymd_opt(2025, 7, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 7, 31),
        };
        assert_eq!(
            query_string(&filter),
            "search=TRX-2025&status=pending&startDate=2025-07-01&endDate=2025-07-31"
        );
    }

    #[test]
    fn semua_status_is_omitted_not_sent_empty() {
        let filter = TransaksiFilter {
            search: "Budi".to_string(),
            status: StatusFilter::Semua,
            start_date: None,
            end_date: None,
        };
        assert_eq!(query_string(&filter), "search=Budi");
    }
}
