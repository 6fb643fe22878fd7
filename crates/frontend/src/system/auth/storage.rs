//! Cookie sesi. Proteksi rute hanya memeriksa keberadaan cookie
//! access_token; isinya tidak pernah divalidasi di lapisan ini.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

const TOKEN_COOKIE: &str = "access_token";

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

/// Ambil satu nilai dari string document.cookie ("a=1; b=2").
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key == name {
            Some(value.to_string())
        } else {
            None
        }
    })
}

/// Token sesi saat ini; cookie kosong dianggap tidak ada.
pub fn get_access_token() -> Option<String> {
    let cookies = html_document()?.cookie().ok()?;
    cookie_value(&cookies, TOKEN_COOKIE).filter(|v| !v.is_empty())
}

pub fn save_access_token(token: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&format!("{}={}; path=/; max-age=86400", TOKEN_COOKIE, token));
    }
}

pub fn clear_access_token() {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&format!("{}=; path=/; max-age=0", TOKEN_COOKIE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_token_among_other_cookies() {
        let cookies = "theme=dark; access_token=abc123; lang=id";
        assert_eq!(cookie_value(cookies, "access_token").as_deref(), Some("abc123"));
    }

    #[test]
    fn missing_and_empty_cookies() {
        assert_eq!(cookie_value("", "access_token"), None);
        assert_eq!(cookie_value("theme=dark", "access_token"), None);
        // nilai kosong tetap ditemukan di level parser; filter keberadaan
        // token dilakukan pemanggil
        assert_eq!(cookie_value("access_token=", "access_token").as_deref(), Some(""));
    }

    #[test]
    fn does_not_match_name_prefixes() {
        assert_eq!(cookie_value("xaccess_token=zzz", "access_token"), None);
    }
}
