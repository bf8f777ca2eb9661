//! CRUD definitions.
//!
//! A [`CrudDefinition`] is everything the admin UI knows about one entity
//! type: its labels, the fields shown per operation, the actions offered in
//! list views, and the provider/processor pair answering operations.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use leafy_client::{Entity, EntityAdapter};
use leafy_core::logging::crud_span;
use leafy_core::utils::text::capfirst;
use leafy_core::LeafyResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::Instrument;

use crate::actions::ActionDescriptor;
use crate::binding::{AdapterStateProcessor, AdapterStateProvider, ListOptions};
use crate::fields::FieldDescriptor;
use crate::operation::{Operation, RequestParameters};
use crate::state::{ProviderResult, StateProcessor, StateProvider};

/// Singular and plural display names of a CRUD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrudLabel {
    pub singular: String,
    pub plural: String,
}

impl CrudLabel {
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }
}

/// The serializable description of a CRUD served to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrudSchema {
    pub name: String,
    pub label: CrudLabel,
    pub fields: Vec<FieldDescriptor>,
    pub operation_fields: HashMap<Operation, Vec<FieldDescriptor>>,
    pub list_actions: Vec<ActionDescriptor>,
    pub operations: Vec<Operation>,
}

/// The admin configuration of one entity type.
///
/// # Examples
///
/// ```
/// use leafy_admin::{CrudDefinition, FieldDescriptor, ListOptions};
/// use leafy_client::models::Book;
/// use leafy_client::EntityAdapter;
///
/// let adapter: EntityAdapter<Book> =
///     EntityAdapter::new(reqwest::Client::new(), "http://localhost:8000", "books").unwrap();
/// let crud = CrudDefinition::for_adapter(
///     "books",
///     adapter,
///     vec![FieldDescriptor::text("title"), FieldDescriptor::textarea("synopsis")],
///     ListOptions::default(),
/// )
/// .label("Book", "Books");
/// assert_eq!(crud.name(), "books");
/// assert_eq!(crud.fields_for(leafy_admin::Operation::List).len(), 2);
/// ```
#[derive(Clone)]
pub struct CrudDefinition {
    name: String,
    label: CrudLabel,
    fields: Vec<FieldDescriptor>,
    operation_fields: HashMap<Operation, Vec<FieldDescriptor>>,
    list_actions: Vec<ActionDescriptor>,
    provider: Arc<dyn StateProvider>,
    processor: Arc<dyn StateProcessor>,
}

impl CrudDefinition {
    /// Creates a definition from an injected provider and processor.
    ///
    /// The labels default to the capitalized name.
    pub fn new(
        name: impl Into<String>,
        provider: Arc<dyn StateProvider>,
        processor: Arc<dyn StateProcessor>,
    ) -> Self {
        let name = name.into();
        let label = CrudLabel::new(capfirst(&name), capfirst(&name));
        Self {
            name,
            label,
            fields: Vec::new(),
            operation_fields: HashMap::new(),
            list_actions: Vec::new(),
            provider,
            processor,
        }
    }

    /// Creates a definition backed by `adapter`.
    ///
    /// `fields` are shown by every operation and drive list rendering:
    /// textarea fields are truncated and missing columns show the placeholder.
    pub fn for_adapter<T: Entity>(
        name: impl Into<String>,
        adapter: EntityAdapter<T>,
        fields: Vec<FieldDescriptor>,
        mut options: ListOptions,
    ) -> Self {
        options.display = options.display.with_fields(&fields);
        let provider = AdapterStateProvider::new(adapter.clone(), options);
        let processor = AdapterStateProcessor::new(adapter);
        let mut crud = Self::new(name, Arc::new(provider), Arc::new(processor));
        crud.label = CrudLabel::new(capfirst(T::NAME), crud.label.plural);
        crud.fields(fields)
    }

    /// Sets the display labels.
    #[must_use]
    pub fn label(mut self, singular: impl Into<String>, plural: impl Into<String>) -> Self {
        self.label = CrudLabel::new(singular, plural);
        self
    }

    /// Sets the fields shown by every operation without an override.
    #[must_use]
    pub fn fields(mut self, fields: Vec<FieldDescriptor>) -> Self {
        self.fields = fields;
        self
    }

    /// Overrides the fields shown by one operation.
    #[must_use]
    pub fn operation_fields(mut self, operation: Operation, fields: Vec<FieldDescriptor>) -> Self {
        self.operation_fields.insert(operation, fields);
        self
    }

    /// Sets the actions offered on list rows.
    #[must_use]
    pub fn list_actions(mut self, actions: Vec<ActionDescriptor>) -> Self {
        self.list_actions = actions;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn label_ref(&self) -> &CrudLabel {
        &self.label
    }

    pub fn actions(&self) -> &[ActionDescriptor] {
        &self.list_actions
    }

    /// Returns the fields shown by `operation`.
    pub fn fields_for(&self, operation: Operation) -> &[FieldDescriptor] {
        self.operation_fields
            .get(&operation)
            .map_or(self.fields.as_slice(), Vec::as_slice)
    }

    /// Builds the schema served to the UI.
    pub fn schema(&self) -> CrudSchema {
        CrudSchema {
            name: self.name.clone(),
            label: self.label.clone(),
            fields: self.fields.clone(),
            operation_fields: self.operation_fields.clone(),
            list_actions: self.list_actions.clone(),
            operations: Operation::ALL.to_vec(),
        }
    }

    /// Asks the provider for the data of `operation`.
    ///
    /// # Errors
    ///
    /// Propagates the provider's error.
    pub async fn provide(
        &self,
        operation: Operation,
        params: &RequestParameters,
    ) -> LeafyResult<ProviderResult> {
        self.provider
            .provide(operation, params)
            .instrument(crud_span(&self.name, operation.as_str()))
            .await
    }

    /// Hands a submission to the processor.
    ///
    /// # Errors
    ///
    /// Propagates the processor's error.
    pub async fn process(
        &self,
        data: Option<Value>,
        operation: Operation,
        params: &RequestParameters,
    ) -> LeafyResult<()> {
        self.processor
            .process(data, operation, params)
            .instrument(crud_span(&self.name, operation.as_str()))
            .await
    }
}

impl fmt::Debug for CrudDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrudDefinition")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("field_count", &self.fields.len())
            .field("list_actions", &self.list_actions.len())
            .finish_non_exhaustive()
    }
}
