pub mod aggregate;

pub use aggregate::AdminUser;
