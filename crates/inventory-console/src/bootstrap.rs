//! Page bootstrap.

use inventory_data::{FetchClient, FetchOptions};
use inventory_model::shape::records_from_body;
use inventory_model::{Order, Product, Record, Supplier};
use tracing::{debug, error, warn};

use crate::controller::Controller;
use crate::error::ConsoleError;
use crate::render::{product_options, supplier_options, SelectOption};
use crate::resource::Resource;

/// Which forms a view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub product_form: bool,
    pub supplier_form: bool,
    pub order_form: bool,
}

impl PageLayout {
    pub fn products() -> Self {
        Self {
            product_form: true,
            ..Self::default()
        }
    }

    pub fn suppliers() -> Self {
        Self {
            supplier_form: true,
            ..Self::default()
        }
    }

    pub fn orders() -> Self {
        Self {
            order_form: true,
            ..Self::default()
        }
    }

    pub fn all() -> Self {
        Self {
            product_form: true,
            supplier_form: true,
            order_form: true,
        }
    }

    /// The order form needs the supplier list for its selector.
    pub fn needs_suppliers(&self) -> bool {
        self.supplier_form || self.order_form
    }
}

/// The controllers of one view, initialized for its layout.
pub struct Console {
    client: FetchClient,
    layout: PageLayout,
    products: Option<Controller<Product>>,
    suppliers: Option<Controller<Supplier>>,
    orders: Option<Controller<Order>>,
    product_options: Vec<SelectOption>,
}

impl Console {
    /// Create the controllers the layout needs and load their lists.
    ///
    /// Load failures are logged and leave an error row in the affected
    /// table; they never abort the bootstrap.
    pub async fn init(client: FetchClient, layout: PageLayout) -> Self {
        debug!(?layout, "bootstrapping console");
        let mut console = Self {
            client,
            layout,
            products: None,
            suppliers: None,
            orders: None,
            product_options: Vec::new(),
        };

        if layout.product_form {
            console.products = Some(load(Controller::new(console.client.clone())).await);
        }

        if layout.needs_suppliers() {
            console.suppliers = Some(load(Controller::new(console.client.clone())).await);
        }

        if layout.order_form {
            console.refresh_product_options().await;
            console.orders = Some(load(Controller::new(console.client.clone())).await);
        }

        console
    }

    pub fn layout(&self) -> PageLayout {
        self.layout
    }

    pub fn products(&self) -> Option<&Controller<Product>> {
        self.products.as_ref()
    }

    pub fn products_mut(&mut self) -> Option<&mut Controller<Product>> {
        self.products.as_mut()
    }

    pub fn suppliers(&self) -> Option<&Controller<Supplier>> {
        self.suppliers.as_ref()
    }

    pub fn suppliers_mut(&mut self) -> Option<&mut Controller<Supplier>> {
        self.suppliers.as_mut()
    }

    pub fn orders(&self) -> Option<&Controller<Order>> {
        self.orders.as_ref()
    }

    pub fn orders_mut(&mut self) -> Option<&mut Controller<Order>> {
        self.orders.as_mut()
    }

    /// Options of the order form's product selectors.
    pub fn product_options(&self) -> &[SelectOption] {
        &self.product_options
    }

    /// Options of the order form's supplier selector, from the last
    /// supplier list.
    pub fn supplier_options(&self) -> Vec<SelectOption> {
        self.suppliers
            .as_ref()
            .map(|suppliers| supplier_options(suppliers.records()))
            .unwrap_or_default()
    }

    /// Reload the product selector options. On failure the previous
    /// options are kept and the error is only logged.
    pub async fn refresh_product_options(&mut self) {
        match fetch_product_options(&self.client).await {
            Ok(options) => self.product_options = options,
            Err(e) => error!(error = %e, "failed to load products for order"),
        }
    }
}

async fn load<R: Resource>(mut controller: Controller<R>) -> Controller<R> {
    if let Err(e) = controller.list().await {
        debug!(kind = R::KIND, error = %e, "initial load failed");
    }
    controller
}

/// Fetch the product list as selector options.
pub async fn fetch_product_options(client: &FetchClient) -> Result<Vec<SelectOption>, ConsoleError> {
    let body = client
        .fetch_json(<Product as Resource>::COLLECTION, FetchOptions::get())
        .await?;
    let products: Vec<Product> = records_from_body(<Product as Record>::KIND, body)?
        .iter()
        .filter_map(|value| match <Product as Record>::from_value(value) {
            Ok(product) => Some(product),
            Err(e) => {
                warn!(error = %e, "skipping malformed product option");
                None
            }
        })
        .collect();
    Ok(product_options(&products))
}
