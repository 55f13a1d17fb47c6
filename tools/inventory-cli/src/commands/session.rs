//! Interactive session.
//!
//! One [`Console`] lives for the whole session, so caches filled by a list
//! serve later edits without another round trip.

use anyhow::Result;
use dialoguer::Select;
use inventory_console::{Console, Controller, PageLayout, Prompter, Resource};
use inventory_model::form::{ProductForm, SupplierForm};
use inventory_model::RecordId;

use super::{
    orders, print_table, products, suppliers, ListFormat, OrderFields, Page, ProductFields,
    SessionArgs, SupplierFields,
};
use crate::context::Context;
use crate::prompt::TerminalPrompter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Products,
    Suppliers,
    Orders,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    List,
    Add,
    Edit,
    Delete,
}

const ACTIONS: [(Action, &str); 4] = [
    (Action::List, "List"),
    (Action::Add, "Add"),
    (Action::Edit, "Edit"),
    (Action::Delete, "Delete"),
];

fn layout_for(page: Page) -> PageLayout {
    match page {
        Page::Products => PageLayout::products(),
        Page::Suppliers => PageLayout::suppliers(),
        Page::Orders => PageLayout::orders(),
        Page::All => PageLayout::all(),
    }
}

/// Resources with a form on this layout.
fn kinds(layout: PageLayout) -> Vec<Kind> {
    let mut kinds = Vec::new();
    if layout.product_form {
        kinds.push(Kind::Products);
    }
    if layout.supplier_form {
        kinds.push(Kind::Suppliers);
    }
    if layout.order_form {
        kinds.push(Kind::Orders);
    }
    kinds
}

/// Run the session command.
pub async fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    let prompter = ctx.prompter(false);
    let spinner = ctx.output.spinner("Loading...");
    let mut console = Console::init(ctx.client(), layout_for(args.page)).await;
    spinner.finish_and_clear();

    let kinds = kinds(console.layout());
    show_tables(ctx, &console, &kinds);

    let mut menu: Vec<(Kind, Action)> = Vec::new();
    for kind in &kinds {
        for (action, _) in ACTIONS {
            menu.push((*kind, action));
        }
    }
    let mut items: Vec<String> = menu
        .iter()
        .map(|(kind, action)| format!("{:?}: {}", kind, action_label(*action)))
        .collect();
    items.push("Quit".to_string());

    loop {
        let selection = Select::new()
            .with_prompt("What next?")
            .items(&items)
            .default(0)
            .interact()?;
        let Some(&(kind, action)) = menu.get(selection) else {
            return Ok(());
        };

        // Failures are already reported; the session carries on.
        if let Err(e) = dispatch(kind, action, &mut console, &prompter, ctx).await {
            ctx.output.debug(&format!("{:#}", e));
        }
    }
}

fn action_label(action: Action) -> &'static str {
    ACTIONS
        .iter()
        .find(|(a, _)| *a == action)
        .map(|(_, label)| *label)
        .unwrap_or("")
}

fn show_tables(ctx: &Context, console: &Console, kinds: &[Kind]) {
    for kind in kinds {
        match kind {
            Kind::Products => show(ctx, console.products()),
            Kind::Suppliers => show(ctx, console.suppliers()),
            Kind::Orders => show(ctx, console.orders()),
        }
    }
}

fn show<R: Resource>(ctx: &Context, controller: Option<&Controller<R>>) {
    if let Some(controller) = controller {
        ctx.output.header(R::PLURAL);
        print_table(ctx, controller.table(), ListFormat::Table);
    }
}

async fn dispatch(
    kind: Kind,
    action: Action,
    console: &mut Console,
    prompter: &TerminalPrompter,
    ctx: &Context,
) -> Result<()> {
    match kind {
        Kind::Products => {
            let Some(controller) = console.products_mut() else {
                return Ok(());
            };
            let fill = |form: &ProductForm| products::prompt_form(form, &ProductFields::default());
            act(controller, action, prompter, ctx, fill).await?;
        }
        Kind::Suppliers => {
            let Some(controller) = console.suppliers_mut() else {
                return Ok(());
            };
            let fill = |form: &SupplierForm| suppliers::prompt_form(form, &SupplierFields::default());
            act(controller, action, prompter, ctx, fill).await?;
        }
        Kind::Orders => order_action(action, console, prompter, ctx).await?,
    }
    Ok(())
}

/// List, add, edit or delete through a controller. `fill` prompts for the
/// form; when it fails the controller leaves edit mode.
async fn act<R: Resource>(
    controller: &mut Controller<R>,
    action: Action,
    prompter: &dyn Prompter,
    ctx: &Context,
    fill: impl Fn(&R::Form) -> Result<R::Form>,
) -> Result<()> {
    match action {
        Action::List => {
            let result = controller.list().await;
            show(ctx, Some(&*controller));
            result?;
        }
        Action::Add => {
            controller.cancel_edit();
            ctx.output.header(&controller.submit_label());
            controller.update_form(&fill)?;
            controller.submit(prompter).await?;
            show(ctx, Some(&*controller));
        }
        Action::Edit => {
            let Some(id) = pick_edit_target(controller, ctx)? else {
                return Ok(());
            };
            controller.begin_edit(&id, prompter).await?;
            if controller.take_focus_request() {
                ctx.output.header(&controller.submit_label());
            }
            controller.update_form(&fill)?;
            if crate::prompt::yes_no(&controller.submit_label(), true)? {
                controller.submit(prompter).await?;
                show(ctx, Some(&*controller));
            } else {
                controller.cancel_edit();
                ctx.output.info("Cancelled");
            }
        }
        Action::Delete => {
            let Some(id) = pick_row(controller, "Delete which?")? else {
                return Ok(());
            };
            if controller.delete(id.as_ref(), prompter).await? {
                show(ctx, Some(&*controller));
            }
        }
    }
    Ok(())
}

/// Pick a row of the current table. `None` when the table is empty; the
/// inner option is the row id, absent for rows without one.
fn pick_row<R: Resource>(
    controller: &Controller<R>,
    prompt: &str,
) -> Result<Option<Option<RecordId>>> {
    let rows = &controller.table().rows;
    if rows.is_empty() {
        return Ok(None);
    }
    let items: Vec<String> = rows
        .iter()
        .map(|row| row.cells.iter().take(3).cloned().collect::<Vec<_>>().join(" | "))
        .collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;
    Ok(rows.get(selection).map(|row| row.id.clone()))
}

/// Pick a row to edit. Rows without an id cannot be edited.
fn pick_edit_target<R: Resource>(
    controller: &Controller<R>,
    ctx: &Context,
) -> Result<Option<RecordId>> {
    match pick_row(controller, "Edit which?")? {
        Some(Some(id)) => Ok(Some(id)),
        Some(None) => {
            ctx.output.warn(&format!("Cannot determine {} id to edit", R::KIND));
            Ok(None)
        }
        None => Ok(None),
    }
}

// Orders need the console for selector options, so they do not go
// through `act` for add and edit.
async fn order_action(
    action: Action,
    console: &mut Console,
    prompter: &TerminalPrompter,
    ctx: &Context,
) -> Result<()> {
    match action {
        Action::List | Action::Delete => {
            if let Some(controller) = console.orders_mut() {
                act(controller, action, prompter, ctx, |form| Ok(form.clone())).await?;
            }
        }
        Action::Add | Action::Edit => {
            let Some(controller) = console.orders_mut() else {
                return Ok(());
            };
            if action == Action::Edit {
                let Some(id) = pick_edit_target(controller, ctx)? else {
                    return Ok(());
                };
                controller.begin_edit(&id, prompter).await?;
            } else {
                controller.cancel_edit();
            }
            let current = controller.form().clone();
            ctx.output.header(&controller.submit_label());

            console.refresh_product_options().await;
            let prompted =
                orders::prompt_form(&current, &OrderFields::default(), console, ctx.statuses());

            let Some(controller) = console.orders_mut() else {
                return Ok(());
            };
            controller.update_form(|_| prompted)?;
            if crate::prompt::yes_no(&controller.submit_label(), true)? {
                controller.submit(prompter).await?;
                show(ctx, Some(&*controller));
            } else {
                controller.cancel_edit();
                ctx.output.info("Cancelled");
            }
        }
    }
    Ok(())
}
