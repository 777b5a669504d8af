pub mod address;
pub mod company;
pub mod phone;

pub use company::build;
