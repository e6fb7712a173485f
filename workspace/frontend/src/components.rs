pub mod layout;
pub mod prediction;
