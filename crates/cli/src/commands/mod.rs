pub mod cross;
pub mod gametes;
pub mod validate;
