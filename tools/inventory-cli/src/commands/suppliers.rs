//! Supplier commands.

use anyhow::{Context as _, Result};
use inventory_console::{Console, Controller, PageLayout};
use inventory_model::form::SupplierForm;
use inventory_model::{RecordId, Supplier};

use super::{SupplierFields, SuppliersArgs, SuppliersCommand};
use crate::context::Context;
use crate::prompt;

/// Run the suppliers command.
pub async fn run(args: SuppliersArgs, ctx: &Context) -> Result<()> {
    match args.command {
        SuppliersCommand::List(list) => super::list::<Supplier>(ctx, list.format, |t| t).await,
        SuppliersCommand::Add(fields) => add(fields, ctx).await,
        SuppliersCommand::Edit { id, fields } => edit(&id, fields, ctx).await,
        SuppliersCommand::Delete(delete) => super::delete::<Supplier>(ctx, delete).await,
    }
}

async fn add(fields: SupplierFields, ctx: &Context) -> Result<()> {
    let prompter = ctx.prompter(false);
    let mut controller = Controller::<Supplier>::new(ctx.client());

    ctx.output.header(&controller.submit_label());
    let form = prompt_form(controller.form(), &fields)?;
    controller.set_form(form);

    let id = controller.submit(&prompter).await?;
    super::report_saved(ctx, &controller, id);
    Ok(())
}

async fn edit(id: &str, fields: SupplierFields, ctx: &Context) -> Result<()> {
    let prompter = ctx.prompter(false);
    let spinner = ctx.output.spinner("Loading suppliers...");
    let mut console = Console::init(ctx.client(), PageLayout::suppliers()).await;
    spinner.finish_and_clear();

    let controller = console
        .suppliers_mut()
        .context("Supplier page has no supplier controller")?;
    controller.begin_edit(&RecordId::new(id), &prompter).await?;

    ctx.output.header(&controller.submit_label());
    let form = prompt_form(controller.form(), &fields)?;
    controller.set_form(form);

    let saved = controller.submit(&prompter).await?;
    super::report_saved(ctx, controller, saved);
    Ok(())
}

pub(crate) fn prompt_form(current: &SupplierForm, fields: &SupplierFields) -> Result<SupplierForm> {
    Ok(SupplierForm {
        name: prompt::text("Supplier Name", fields.name.as_deref(), &current.name)?,
        contact: prompt::text("Contact", fields.contact.as_deref(), &current.contact)?,
    })
}
