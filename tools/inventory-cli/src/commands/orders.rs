//! Order commands.

use anyhow::{Context as _, Result};
use inventory_console::{Console, PageLayout, Table};
use inventory_model::form::{OrderForm, OrderItemRow};
use inventory_model::{Order, RecordId};

use super::{OrderFields, OrdersArgs, OrdersCommand};
use crate::context::Context;
use crate::output::status_badge;
use crate::prompt;

/// A `--item PRODUCT:QTY:PRICE` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub product_id: String,
    pub quantity: String,
    pub price: String,
}

/// Parse `PRODUCT:QTY:PRICE`. The product part may itself contain colons.
pub fn parse_item(s: &str) -> Result<ItemSpec, String> {
    let mut parts = s.rsplitn(3, ':');
    let (Some(price), Some(quantity), Some(product_id)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected PRODUCT:QTY:PRICE, got '{}'", s));
    };
    Ok(ItemSpec {
        product_id: product_id.to_string(),
        quantity: quantity.to_string(),
        price: price.to_string(),
    })
}

impl From<&ItemSpec> for OrderItemRow {
    fn from(spec: &ItemSpec) -> Self {
        OrderItemRow::new(&spec.product_id, &spec.quantity, &spec.price)
    }
}

/// Run the orders command.
pub async fn run(args: OrdersArgs, ctx: &Context) -> Result<()> {
    match args.command {
        OrdersCommand::List(list) => super::list::<Order>(ctx, list.format, badge_status).await,
        OrdersCommand::Add(fields) => save(None, fields, ctx).await,
        OrdersCommand::Edit { id, fields } => save(Some(&id), fields, ctx).await,
        OrdersCommand::Delete(delete) => super::delete::<Order>(ctx, delete).await,
    }
}

// Status is the fourth column.
fn badge_status(mut table: Table) -> Table {
    for row in &mut table.rows {
        if let Some(status) = row.cells.get_mut(3) {
            *status = status_badge(status);
        }
    }
    table
}

async fn save(id: Option<&str>, fields: OrderFields, ctx: &Context) -> Result<()> {
    let prompter = ctx.prompter(false);
    let spinner = ctx.output.spinner("Loading orders, suppliers and products...");
    let mut console = Console::init(ctx.client(), PageLayout::orders()).await;
    spinner.finish_and_clear();

    if let Some(id) = id {
        orders(&mut console)?
            .begin_edit(&RecordId::new(id), &prompter)
            .await?;
    }

    let current = orders(&mut console)?.form().clone();
    ctx.output.header(&orders(&mut console)?.submit_label());
    let form = prompt_form(&current, &fields, &console, ctx.statuses())?;

    let controller = orders(&mut console)?;
    controller.set_form(form);
    let saved = controller.submit(&prompter).await?;
    super::report_saved(ctx, controller, saved);
    Ok(())
}

fn orders(console: &mut Console) -> Result<&mut inventory_console::Controller<Order>> {
    console
        .orders_mut()
        .context("Order page has no order controller")
}

/// Fill an order form from flags, prompting for whatever is missing.
pub(crate) fn prompt_form(
    current: &OrderForm,
    fields: &OrderFields,
    console: &Console,
    statuses: &[String],
) -> Result<OrderForm> {
    let items = if fields.items.is_empty() {
        prompt_items(current, console)?
    } else {
        fields.items.iter().map(OrderItemRow::from).collect()
    };

    let supplier_id = prompt::choose(
        "Supplier",
        fields.supplier.as_deref(),
        &console.supplier_options(),
        &current.supplier_id,
    )?;
    let status = prompt::choose(
        "Status",
        fields.status.as_deref(),
        &prompt::plain_options(statuses),
        &current.status,
    )?;

    Ok(OrderForm {
        items,
        supplier_id,
        status,
    })
}

fn prompt_items(current: &OrderForm, console: &Console) -> Result<Vec<OrderItemRow>> {
    let mut rows = Vec::new();
    for (i, row) in current.items.iter().enumerate() {
        if i > 0 && !prompt::yes_no(&format!("Keep item {}?", i + 1), true)? {
            continue;
        }
        rows.push(prompt_item(i + 1, row, console)?);
    }
    while prompt::yes_no("Add another item?", false)? {
        rows.push(prompt_item(rows.len() + 1, &OrderItemRow::default(), console)?);
    }
    Ok(rows)
}

fn prompt_item(n: usize, row: &OrderItemRow, console: &Console) -> Result<OrderItemRow> {
    Ok(OrderItemRow {
        product_id: prompt::choose(
            &format!("Item {} product", n),
            None,
            console.product_options(),
            &row.product_id,
        )?,
        quantity: prompt::text(&format!("Item {} quantity", n), None, &row.quantity)?,
        price: prompt::text(&format!("Item {} price", n), None, &row.price)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item() {
        assert_eq!(
            parse_item("P1:2:5").unwrap(),
            ItemSpec {
                product_id: "P1".into(),
                quantity: "2".into(),
                price: "5".into()
            }
        );
        assert_eq!(parse_item("urn:p:1:3:0.5").unwrap().product_id, "urn:p:1");
        assert!(parse_item("P1:2").is_err());
    }

    #[test]
    fn test_item_spec_to_row() {
        let row = OrderItemRow::from(&parse_item("P1:2:5").unwrap());
        assert_eq!(row, OrderItemRow::new("P1", "2", "5"));
    }

    #[test]
    fn test_badge_keeps_other_cells() {
        console::set_colors_enabled(false);
        let table = Table::new("order", &["ID", "Items", "Supplier", "Status", "Actions"])
            .with_rows(vec![inventory_console::Row {
                id: None,
                cells: vec!["o1".into(), "A x1".into(), "Acme".into(), "pending".into()],
            }]);
        let table = badge_status(table);
        assert_eq!(table.rows[0].cells, vec!["o1", "A x1", "Acme", "pending"]);
    }
}
