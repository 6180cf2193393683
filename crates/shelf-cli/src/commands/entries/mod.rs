pub mod add;
pub mod edit;
pub mod export;
pub mod list;
pub mod remove;
pub mod show;

pub use add::handle_add;
pub use edit::handle_edit;
pub use export::handle_export;
pub use list::handle_list;
pub use remove::handle_remove;
pub use show::handle_show;
