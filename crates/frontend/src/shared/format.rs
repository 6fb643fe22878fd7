//! Format nilai uang untuk tampilan.

/// Format rupiah: pengelompokan ribuan gaya id-ID (titik pemisah), tanpa
/// angka desimal. Nilai non-angka dirender sebagai "Rp 0", tidak pernah
/// gagal.
pub fn format_harga(harga: f64) -> String {
    if !harga.is_finite() {
        return "Rp 0".to_string();
    }
    format!("Rp {}", format_ribuan(harga.round() as i64))
}

/// Varian untuk nilai wire yang masih berupa string angka.
pub fn format_harga_str(harga: &str) -> String {
    format_harga(harga.trim().parse().unwrap_or(0.0))
}

fn format_ribuan(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(c);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_harga(1_000_000.0), "Rp 1.000.000");
        assert_eq!(format_harga(1_234_567.0), "Rp 1.234.567");
        assert_eq!(format_harga(999.0), "Rp 999");
        assert_eq!(format_harga(0.0), "Rp 0");
    }

    #[test]
    fn non_numeric_renders_as_zero_rupiah() {
        assert_eq!(format_harga(f64::NAN), "Rp 0");
        assert_eq!(format_harga(f64::INFINITY), "Rp 0");
        assert_eq!(format_harga_str("bukan angka"), "Rp 0");
        assert_eq!(format_harga_str(""), "Rp 0");
    }

    #[test]
    fn wire_strings_are_parsed() {
        assert_eq!(format_harga_str("150000"), "Rp 150.000");
        assert_eq!(format_harga_str("  75000 "), "Rp 75.000");
    }

    #[test]
    fn rounds_to_whole_rupiah() {
        assert_eq!(format_harga(10500.4), "Rp 10.500");
        assert_eq!(format_harga(10500.6), "Rp 10.501");
    }
}
