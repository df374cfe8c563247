mod command;
pub mod inventory;
pub mod recipe;
mod text;

pub use command::*;
pub use inventory::InventoryItem;
pub use recipe::RecipeDocument;
pub use text::title_case;
