pub mod widget;

pub use widget::PegawaiList;
