//! Resource controllers.
//!
//! A [`Controller`] owns everything one resource page keeps between user
//! actions: the record cache, the form, the record being edited and the
//! rendered table. Operations report their outcome to a [`Prompter`] and
//! also return it, so a front-end can decide what to do next.

use inventory_data::{FetchClient, FetchError, FetchOptions};
use inventory_model::shape::records_from_body;
use inventory_model::{Record, RecordCache, RecordId};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::error::ConsoleError;
use crate::notify::{Notice, Prompter};
use crate::render::Table;
use crate::resource::Resource;

/// State and operations for one resource.
pub struct Controller<R: Resource> {
    client: FetchClient,
    records: Vec<R>,
    cache: RecordCache<R>,
    form: R::Form,
    editing: Option<RecordId>,
    table: Table,
    focus_requested: bool,
}

impl<R: Resource> Controller<R> {
    pub fn new(client: FetchClient) -> Self {
        Self {
            client,
            records: Vec::new(),
            cache: RecordCache::new(),
            form: R::Form::default(),
            editing: None,
            table: Table::new(R::KIND, R::HEADERS),
            focus_requested: false,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Records of the last successful list, in server order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn cache(&self) -> &RecordCache<R> {
        &self.cache
    }

    pub fn form(&self) -> &R::Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut R::Form {
        &mut self.form
    }

    pub fn set_form(&mut self, form: R::Form) {
        self.form = form;
    }

    /// Produce a new form from the current one with `fill`. When `fill`
    /// fails the controller leaves edit mode with a blank form.
    pub fn update_form<E>(
        &mut self,
        fill: impl FnOnce(&R::Form) -> Result<R::Form, E>,
    ) -> Result<(), E> {
        match fill(&self.form) {
            Ok(form) => {
                self.form = form;
                Ok(())
            }
            Err(e) => {
                self.cancel_edit();
                Err(e)
            }
        }
    }

    /// Id of the record being edited.
    pub fn editing(&self) -> Option<&RecordId> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// `"Add Product"`, or `"Save Product"` while editing.
    pub fn submit_label(&self) -> String {
        if self.is_editing() {
            format!("Save {}", R::LABEL)
        } else {
            format!("Add {}", R::LABEL)
        }
    }

    /// Whether the form asked to be brought into view since the last call.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    /// Fetch the collection, repopulate the cache and re-render the table.
    ///
    /// Failures leave a single error row in the table and are logged; the
    /// user is not notified otherwise.
    pub async fn list(&mut self) -> Result<usize, ConsoleError> {
        match self.fetch_all().await {
            Ok(records) => {
                self.cache.replace_all(&records);
                self.table = Table::new(R::KIND, R::HEADERS)
                    .with_rows(records.iter().map(R::row).collect());
                self.records = records;
                Ok(self.records.len())
            }
            Err(e) => {
                error!(kind = R::KIND, error = %e, "failed to load {}", R::COLLECTION);
                self.table = Table::new(R::KIND, R::HEADERS)
                    .failed(format!("Error loading {}", R::PLURAL.to_lowercase()));
                Err(e)
            }
        }
    }

    async fn fetch_all(&self) -> Result<Vec<R>, ConsoleError> {
        let body = self
            .client
            .fetch_json(R::COLLECTION, FetchOptions::get())
            .await?;
        let records = records_from_body(R::KIND, body)?
            .iter()
            .filter_map(|value| match R::from_value(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(kind = R::KIND, error = %e, "skipping malformed record");
                    None
                }
            })
            .collect();
        Ok(records)
    }

    /// Validate the form, then create or update depending on edit mode.
    ///
    /// Returns the id of the saved record when one is known.
    pub async fn submit(
        &mut self,
        prompter: &dyn Prompter,
    ) -> Result<Option<RecordId>, ConsoleError> {
        let draft = match R::validate(&self.form) {
            Ok(draft) => draft,
            Err(e) => {
                prompter.notify(Notice::error(e.to_string()));
                return Err(e.into());
            }
        };

        let editing = self.editing.clone();
        let action = if editing.is_some() { "update" } else { "add" };

        let saved = match self.save(editing.as_ref(), &draft).await {
            Ok(body) => body,
            Err(e) => {
                error!(kind = R::KIND, error = %e, "{} failed", action);
                prompter.notify(Notice::error(format!(
                    "Failed to {} {}: {}",
                    action,
                    R::KIND,
                    e
                )));
                return Err(e.into());
            }
        };

        let saved = saved.and_then(|value| self.adapt_saved(&value));
        let saved_id = saved.as_ref().and_then(Record::record_id);
        if let Some(record) = saved {
            self.cache.insert(record);
        }

        let message = match (&editing, &saved_id) {
            (Some(_), _) => format!("{} updated successfully!", R::LABEL),
            (None, Some(id)) if R::ANNOUNCE_CREATED_ID => {
                format!("{} added successfully! ID: {}", R::LABEL, id)
            }
            (None, _) => format!("{} added successfully!", R::LABEL),
        };
        prompter.notify(Notice::success(message));

        self.cancel_edit();
        self.refresh().await;
        Ok(saved_id.or(editing))
    }

    async fn save(
        &self,
        editing: Option<&RecordId>,
        draft: &R::Draft,
    ) -> Result<Option<Value>, FetchError> {
        match editing {
            Some(id) => {
                self.client
                    .fetch_json(&R::item_path(id.as_str()), FetchOptions::put(draft)?)
                    .await
            }
            None => {
                self.client
                    .fetch_json(R::COLLECTION, FetchOptions::post(draft)?)
                    .await
            }
        }
    }

    /// Adapt a create/update response. Bodies that are not a record are
    /// ignored.
    fn adapt_saved(&self, value: &Value) -> Option<R> {
        if !value.is_object() {
            return None;
        }
        match R::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(kind = R::KIND, error = %e, "ignoring saved record");
                None
            }
        }
    }

    /// Enter edit mode for `id`, filling the form from the cache or, on a
    /// miss, from `GET {collection}/{id}`.
    pub async fn begin_edit(
        &mut self,
        id: &RecordId,
        prompter: &dyn Prompter,
    ) -> Result<(), ConsoleError> {
        let record = match self.cache.get(id) {
            Some(record) => {
                debug!(kind = R::KIND, %id, "editing from cache");
                record.clone()
            }
            None => match self.fetch_one(id).await {
                Ok(record) => record,
                Err(e) => {
                    error!(kind = R::KIND, %id, error = %e, "edit failed");
                    let message = match &e {
                        ConsoleError::NotRetrievable { .. } | ConsoleError::NotAvailable { .. } => {
                            e.to_string()
                        }
                        other => format!("Failed to load {} for edit: {}", R::KIND, other),
                    };
                    prompter.notify(Notice::error(message));
                    return Err(e);
                }
            },
        };

        self.form = record.fill_form();
        self.editing = Some(id.clone());
        self.focus_requested = true;
        Ok(())
    }

    async fn fetch_one(&self, id: &RecordId) -> Result<R, ConsoleError> {
        let body = self
            .client
            .fetch_json(&R::item_path(id.as_str()), FetchOptions::get())
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    ConsoleError::NotRetrievable {
                        label: R::LABEL,
                        plural: R::PLURAL,
                    }
                } else {
                    e.into()
                }
            })?;

        match body {
            Some(value) if !value.is_null() => Ok(R::from_value(&value)?),
            _ => Err(ConsoleError::NotAvailable { label: R::LABEL }),
        }
    }

    /// Leave edit mode and reset the form.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.form = R::Form::default();
    }

    /// Delete a record after confirmation. Returns `false` when the user
    /// declined.
    pub async fn delete(
        &mut self,
        id: Option<&RecordId>,
        prompter: &dyn Prompter,
    ) -> Result<bool, ConsoleError> {
        let Some(id) = id else {
            let err = ConsoleError::MissingId {
                kind: R::KIND,
                action: "delete",
            };
            prompter.notify(Notice::error(err.to_string()));
            return Err(err);
        };

        if !prompter.confirm(&format!("Delete this {}?", R::KIND)) {
            return Ok(false);
        }

        if let Err(e) = self
            .client
            .fetch_json(&R::item_path(id.as_str()), FetchOptions::delete())
            .await
        {
            error!(kind = R::KIND, %id, error = %e, "delete failed");
            prompter.notify(Notice::error(format!(
                "Failed to delete {}: {}",
                R::KIND,
                e
            )));
            return Err(e.into());
        }

        self.cache.remove(id);
        if self.editing.as_ref() == Some(id) {
            self.cancel_edit();
        }
        self.refresh().await;
        Ok(true)
    }

    // List failures already show up in the table.
    async fn refresh(&mut self) {
        let _ = self.list().await;
    }
}
