pub mod a001_produk;
pub mod a002_transaksi;
pub mod a003_pegawai;
pub mod a004_admin_user;
