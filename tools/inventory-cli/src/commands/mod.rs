//! CLI command implementations.

pub mod config;
pub mod orders;
pub mod products;
pub mod session;
pub mod suppliers;

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use inventory_console::{Controller, Prompter, Resource, Table};
use inventory_model::RecordId;

use crate::context::Context;

/// Output format of `list`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    #[default]
    Table,
    Json,
    Html,
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Subcommand)]
pub enum ProductsCommand {
    /// List products.
    List(ListArgs),
    /// Add a product. Missing fields are prompted for.
    Add(ProductFields),
    /// Edit a product.
    Edit {
        /// Product id.
        id: String,
        #[command(flatten)]
        fields: ProductFields,
    },
    /// Delete a product.
    Delete(DeleteArgs),
}

/// Product form fields.
#[derive(Args, Debug, Default)]
pub struct ProductFields {
    #[arg(long)]
    pub sku: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub stock: Option<String>,
}

/// Arguments for the suppliers command.
#[derive(Args)]
pub struct SuppliersArgs {
    #[command(subcommand)]
    pub command: SuppliersCommand,
}

#[derive(Subcommand)]
pub enum SuppliersCommand {
    /// List suppliers.
    List(ListArgs),
    /// Add a supplier. Missing fields are prompted for.
    Add(SupplierFields),
    /// Edit a supplier.
    Edit {
        /// Supplier id.
        id: String,
        #[command(flatten)]
        fields: SupplierFields,
    },
    /// Delete a supplier.
    Delete(DeleteArgs),
}

/// Supplier form fields.
#[derive(Args, Debug, Default)]
pub struct SupplierFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub contact: Option<String>,
}

/// Arguments for the orders command.
#[derive(Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: OrdersCommand,
}

#[derive(Subcommand)]
pub enum OrdersCommand {
    /// List orders.
    List(ListArgs),
    /// Add an order. Missing fields are prompted for.
    Add(OrderFields),
    /// Edit an order.
    Edit {
        /// Order id.
        id: String,
        #[command(flatten)]
        fields: OrderFields,
    },
    /// Delete an order.
    Delete(DeleteArgs),
}

/// Order form fields.
#[derive(Args, Debug, Default)]
pub struct OrderFields {
    /// Line item as PRODUCT:QTY:PRICE. Repeat for several items.
    #[arg(long = "item", value_parser = orders::parse_item)]
    pub items: Vec<orders::ItemSpec>,
    /// Supplier id (or name for suppliers without an id).
    #[arg(long)]
    pub supplier: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ListFormat::Table)]
    pub format: ListFormat,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Record id.
    pub id: String,
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Page selected by `session`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Page {
    Products,
    Suppliers,
    Orders,
    #[default]
    All,
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    /// Page to open.
    #[arg(short, long, value_enum, default_value_t = Page::All)]
    pub page: Page,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Print a table in the requested format.
pub(crate) fn print_table(ctx: &Context, table: &Table, format: ListFormat) {
    match format {
        ListFormat::Table => ctx.output.table(table),
        ListFormat::Json => ctx.output.json(table),
        ListFormat::Html => println!("{}", table.to_html()),
    }
}

/// List one resource without bootstrapping a page.
pub(crate) async fn list<R: Resource>(
    ctx: &Context,
    format: ListFormat,
    decorate: impl FnOnce(Table) -> Table,
) -> Result<()> {
    let mut controller = Controller::<R>::new(ctx.client());

    let spinner = ctx.output.spinner(&format!("Loading {}...", R::PLURAL.to_lowercase()));
    let result = controller.list().await;
    spinner.finish_and_clear();

    let table = controller.table().clone();
    let table = if format == ListFormat::Table {
        decorate(table)
    } else {
        table
    };
    ctx.output.header(R::PLURAL);
    print_table(ctx, &table, format);

    result?;
    Ok(())
}

/// Delete one record by id, then show the refreshed list.
pub(crate) async fn delete<R: Resource>(ctx: &Context, args: DeleteArgs) -> Result<()> {
    let prompter = ctx.prompter(args.yes);
    let mut controller = Controller::<R>::new(ctx.client());
    let id = RecordId::new(args.id);

    let deleted = controller.delete(Some(&id), &prompter).await?;
    if !deleted {
        ctx.output.info("Cancelled");
        return Ok(());
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "deleted": id }));
    } else {
        prompter.notify(inventory_console::Notice::success(format!(
            "Deleted {} {}",
            R::KIND,
            id
        )));
        print_table(ctx, controller.table(), ListFormat::Table);
    }
    Ok(())
}

/// Report the outcome of an add or edit.
pub(crate) fn report_saved<R: Resource>(ctx: &Context, controller: &Controller<R>, id: Option<RecordId>) {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "kind": R::KIND, "id": id }));
    } else {
        print_table(ctx, controller.table(), ListFormat::Table);
    }
}
