//! Controllers and rendering for the inventory console.
//!
//! Each resource page is driven by a [`Controller`]: it lists the collection
//! into a [`Table`], validates and submits its form, enters and leaves edit
//! mode and deletes records after confirmation. [`Console::init`] creates the
//! controllers a [`PageLayout`] needs and loads them in dependency order.
//!
//! Front-ends plug in through [`Prompter`] for notices and confirmations.
//!
//! # Example
//!
//! ```rust,ignore
//! use inventory_console::prelude::*;
//!
//! let mut console = Console::init(client, PageLayout::products()).await;
//!
//! if let Some(products) = console.products_mut() {
//!     products.form_mut().sku = "A1".into();
//!     products.form_mut().name = "Widget".into();
//!     products.form_mut().price = "9.99".into();
//!     products.form_mut().stock = "10".into();
//!     products.submit(&prompter).await?;
//!     println!("{}", products.table().to_html());
//! }
//! ```

pub mod bootstrap;
pub mod controller;
pub mod error;
pub mod notify;
pub mod render;
pub mod resource;

pub use bootstrap::{Console, PageLayout};
pub use controller::Controller;
pub use error::ConsoleError;
pub use notify::{Level, Notice, Prompter};
pub use render::{Row, SelectOption, Table};
pub use resource::Resource;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::{fetch_product_options, Console, PageLayout};
    pub use crate::controller::Controller;
    pub use crate::error::ConsoleError;
    pub use crate::notify::{Level, Notice, Prompter};
    pub use crate::render::{Row, SelectOption, Table};
    pub use crate::resource::Resource;
}
