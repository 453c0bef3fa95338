pub mod bits;

pub mod cursor;
pub use cursor::*;

pub mod enumerator;
pub use enumerator::*;

pub mod error;
pub use error::*;

pub mod oracle;
pub use oracle::*;

pub mod policy;
pub use policy::*;

pub mod query;
pub use query::*;

pub mod slots;
pub use slots::*;

pub mod tally;
pub use tally::*;
