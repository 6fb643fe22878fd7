pub mod aggregate;

pub use aggregate::Pegawai;
