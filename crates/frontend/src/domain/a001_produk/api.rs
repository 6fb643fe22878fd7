use contracts::domain::a001_produk::{Produk, ProdukDraft};
use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::{FormData, RequestInit, RequestMode, Response};

use crate::shared::api_utils::api_base;

/// Isi field foto pada form multipart: berkas baru dari input file,
/// nama berkas yang sudah tersimpan di server, atau tidak ada sama
/// sekali (produk baru tanpa foto).
#[derive(Clone, Debug)]
pub enum FotoField {
    Kosong,
    Lama(String),
    Baru(web_sys::File),
}

/// Ambil semua produk.
pub async fn fetch_produk() -> Result<Vec<Produk>, String> {
    let response = Request::get(&format!("{}/produk", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Gagal mengambil data produk: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

fn form_produk(draft: &ProdukDraft, foto: &FotoField) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_str("nama", draft.nama.trim())
        .map_err(|e| format!("{e:?}"))?;
    // harga dikirim sebagai string angka, sesuai kontrak multipart
    form.append_with_str("harga", draft.harga.trim())
        .map_err(|e| format!("{e:?}"))?;
    match foto {
        FotoField::Baru(file) => form
            .append_with_blob("foto", file)
            .map_err(|e| format!("{e:?}"))?,
        FotoField::Lama(nama) => form
            .append_with_str("foto", nama)
            .map_err(|e| format!("{e:?}"))?,
        FotoField::Kosong => {}
    }
    Ok(form)
}

/// Kirim multipart lewat fetch mentah; gloo dipakai untuk endpoint JSON,
/// tapi FormData butuh jalur web_sys.
async fn send_form(method: &str, url: &str, form: &FormData) -> Result<(), String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form);

    let request =
        web_sys::Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    Ok(())
}

/// Tambah produk baru (multipart nama/harga/foto).
pub async fn add_produk(draft: &ProdukDraft, foto: &FotoField) -> Result<(), String> {
    let form = form_produk(draft, foto)?;
    send_form("POST", &format!("{}/produk", api_base()), &form)
        .await
        .map_err(|e| format!("Gagal menambah produk: {e}"))
}

/// Ubah produk; foto boleh berkas baru atau nama berkas lama.
pub async fn edit_produk(id: i64, draft: &ProdukDraft, foto: &FotoField) -> Result<(), String> {
    let form = form_produk(draft, foto)?;
    send_form("PUT", &format!("{}/produk/{}", api_base(), id), &form)
        .await
        .map_err(|e| format!("Gagal mengubah produk: {e}"))
}

/// Hapus satu produk.
pub async fn delete_produk(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/produk/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Gagal menghapus produk: {}", response.status()));
    }

    Ok(())
}

/// Hapus berkas foto yang sudah tidak dirujuk produk mana pun.
pub async fn delete_foto(filename: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/uploads/{}", api_base(), filename))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Gagal menghapus foto: {}", response.status()));
    }

    Ok(())
}
