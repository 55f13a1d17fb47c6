//! Product commands.

use anyhow::{Context as _, Result};
use inventory_console::{Console, Controller, PageLayout};
use inventory_model::form::ProductForm;
use inventory_model::{Product, RecordId};

use super::{ProductFields, ProductsArgs, ProductsCommand};
use crate::context::Context;
use crate::prompt;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ProductsCommand::List(list) => super::list::<Product>(ctx, list.format, |t| t).await,
        ProductsCommand::Add(fields) => add(fields, ctx).await,
        ProductsCommand::Edit { id, fields } => edit(&id, fields, ctx).await,
        ProductsCommand::Delete(delete) => super::delete::<Product>(ctx, delete).await,
    }
}

async fn add(fields: ProductFields, ctx: &Context) -> Result<()> {
    let prompter = ctx.prompter(false);
    let mut controller = Controller::<Product>::new(ctx.client());

    ctx.output.header(&controller.submit_label());
    let form = prompt_form(controller.form(), &fields)?;
    controller.set_form(form);

    let id = controller.submit(&prompter).await?;
    super::report_saved(ctx, &controller, id);
    Ok(())
}

async fn edit(id: &str, fields: ProductFields, ctx: &Context) -> Result<()> {
    let prompter = ctx.prompter(false);
    let spinner = ctx.output.spinner("Loading products...");
    let mut console = Console::init(ctx.client(), PageLayout::products()).await;
    spinner.finish_and_clear();

    let controller = console
        .products_mut()
        .context("Product page has no product controller")?;
    controller.begin_edit(&RecordId::new(id), &prompter).await?;

    ctx.output.header(&controller.submit_label());
    let form = prompt_form(controller.form(), &fields)?;
    controller.set_form(form);

    let saved = controller.submit(&prompter).await?;
    super::report_saved(ctx, controller, saved);
    Ok(())
}

/// Fill a product form from flags, prompting for whatever is missing.
pub(crate) fn prompt_form(current: &ProductForm, fields: &ProductFields) -> Result<ProductForm> {
    Ok(ProductForm {
        sku: prompt::text("SKU", fields.sku.as_deref(), &current.sku)?,
        name: prompt::text("Name", fields.name.as_deref(), &current.name)?,
        price: prompt::text("Price", fields.price.as_deref(), &current.price)?,
        stock: prompt::text("Stock", fields.stock.as_deref(), &current.stock)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_fill_form_without_prompting() {
        let fields = ProductFields {
            sku: Some("A1".into()),
            name: Some("Widget".into()),
            price: Some("9.99".into()),
            stock: Some("10".into()),
        };
        let form = prompt_form(&ProductForm::default(), &fields).unwrap();
        assert_eq!(form.validate().unwrap().stock, 10);
    }
}
