pub mod checker;
pub mod hex;
pub mod wcag;
