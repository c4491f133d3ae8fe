pub mod extract;
pub mod interactive;
