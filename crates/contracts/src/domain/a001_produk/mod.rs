pub mod aggregate;

pub use aggregate::{Produk, ProdukDraft};
