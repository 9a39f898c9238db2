//! Rule-based recovery and cleanup passes for KTP fields.

pub mod clean;
pub mod garbled;
pub mod patterns;
pub mod print_date;

pub use clean::clean_value;
pub use garbled::recover_garbled;
pub use patterns::*;
pub use print_date::find_print_date;
