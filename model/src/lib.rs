pub mod guild;
pub mod user;
