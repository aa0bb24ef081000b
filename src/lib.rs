pub mod extract;
pub mod load;
pub mod report;

pub use extract::{parse_terms, Term, Terms};
pub use load::{load_rows, read_rows, Row};
