//! One module per catalog operation.
//!
//! Mutating commands take the catalog by `&mut` and save it through the
//! context's store after a successful change. Queries only borrow it.

pub mod add;
pub mod delete;
pub mod list;
pub mod search;
pub mod stats;
pub mod update;

pub use add::AddOutcome;
pub use delete::DeleteOutcome;
pub use list::ListOrder;
pub use update::UpdateOutcome;
