pub mod profile;
pub mod growth;
pub mod meal;

pub use profile::*;
pub use growth::*;
pub use meal::*;
