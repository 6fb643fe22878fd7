pub mod widget;

pub use widget::ProdukList;
