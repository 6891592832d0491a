pub mod code_block;
pub mod header;
pub mod list_item;
pub mod paragraph;

pub use code_block::IndentedCode;
pub use header::Header;
pub use list_item::ListItem;
pub use paragraph::Paragraph;
