//! Keputusan rute, meniru kontrak middleware aplikasi:
//! bagian /auth bebas diakses, root dialihkan ke daftar produk, dan
//! semua path lain menuntut keberadaan token sesi (nilai token apa pun
//! cukup; isinya tidak diperiksa di lapisan ini).

/// Halaman dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Produk,
    Transaksi,
    TransaksiDetail(i64),
    Pegawai,
    DataAdmin,
    SignIn,
    NotFound,
}

impl Page {
    pub fn href(&self) -> String {
        match self {
            Page::Produk => "/produk".to_string(),
            Page::Transaksi => "/transaksi".to_string(),
            Page::TransaksiDetail(id) => format!("/transaksi/detail-transaksi/{id}"),
            Page::Pegawai => "/pegawai".to_string(),
            Page::DataAdmin => "/data-admin".to_string(),
            Page::SignIn => "/auth/signin".to_string(),
            Page::NotFound => "/produk".to_string(),
        }
    }

    /// Judul halaman untuk header/breadcrumb.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Produk => "Data Produk",
            Page::Transaksi => "Data Transaksi",
            Page::TransaksiDetail(_) => "Detail Transaksi",
            Page::Pegawai => "Data Pegawai",
            Page::DataAdmin => "Data Admin",
            Page::SignIn => "Masuk",
            Page::NotFound => "Tidak Ditemukan",
        }
    }
}

/// Hasil keputusan untuk satu path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Page),
    Redirect(&'static str),
}

/// Pemetaan path ke halaman; total, path asing jadi NotFound.
pub fn parse_path(path: &str) -> Page {
    let path = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };
    match path {
        "" | "/" | "/produk" => Page::Produk,
        "/transaksi" => Page::Transaksi,
        "/pegawai" => Page::Pegawai,
        "/data-admin" => Page::DataAdmin,
        _ => {
            if let Some(rest) = path.strip_prefix("/transaksi/detail-transaksi/") {
                if let Ok(id) = rest.parse::<i64>() {
                    return Page::TransaksiDetail(id);
                }
            }
            if path.starts_with("/auth") {
                return Page::SignIn;
            }
            Page::NotFound
        }
    }
}

/// Kontrak proteksi rute. Urutan pemeriksaan mengikuti middleware asal:
/// /auth lolos dulu, lalu root dialihkan, baru keberadaan token dicek.
pub fn decide(path: &str, has_token: bool) -> RouteDecision {
    if path.starts_with("/auth") {
        return RouteDecision::Render(Page::SignIn);
    }
    if path.is_empty() || path == "/" {
        return RouteDecision::Redirect("/produk");
    }
    if !has_token {
        return RouteDecision::Redirect("/auth/signin");
    }
    RouteDecision::Render(parse_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_section_is_never_protected() {
        assert_eq!(decide("/auth/signin", false), RouteDecision::Render(Page::SignIn));
        assert_eq!(decide("/auth/signin", true), RouteDecision::Render(Page::SignIn));
    }

    #[test]
    fn root_redirects_to_produk_before_token_check() {
        assert_eq!(decide("/", true), RouteDecision::Redirect("/produk"));
        assert_eq!(decide("/", false), RouteDecision::Redirect("/produk"));
    }

    #[test]
    fn missing_token_forces_sign_in() {
        assert_eq!(decide("/transaksi", false), RouteDecision::Redirect("/auth/signin"));
        assert_eq!(decide("/produk", false), RouteDecision::Redirect("/auth/signin"));
    }

    #[test]
    fn any_token_value_is_enough() {
        assert_eq!(decide("/transaksi", true), RouteDecision::Render(Page::Transaksi));
        assert_eq!(
            decide("/transaksi/detail-transaksi/42", true),
            RouteDecision::Render(Page::TransaksiDetail(42))
        );
    }

    #[test]
    fn unknown_paths_render_not_found() {
        assert_eq!(decide("/ngawur", true), RouteDecision::Render(Page::NotFound));
        assert_eq!(
            decide("/transaksi/detail-transaksi/bukan-angka", true),
            RouteDecision::Render(Page::NotFound)
        );
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(parse_path("/produk/"), Page::Produk);
        assert_eq!(parse_path("/data-admin/"), Page::DataAdmin);
    }

    #[test]
    fn href_and_parse_roundtrip() {
        for page in [
            Page::Produk,
            Page::Transaksi,
            Page::TransaksiDetail(7),
            Page::Pegawai,
            Page::DataAdmin,
            Page::SignIn,
        ] {
            assert_eq!(parse_path(&page.href()), page);
        }
    }
}
