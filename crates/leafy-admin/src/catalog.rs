//! The Leafy ILS catalog CRUDs.
//!
//! One CRUD per backend resource, all sharing the injected HTTP client.

use leafy_client::models::{Book, Circulation, Family, Member};
use leafy_client::{Entity, EntityAdapter};
use leafy_core::{LeafyResult, Settings};
use reqwest::Client;

use crate::actions::ActionDescriptor;
use crate::binding::ListOptions;
use crate::crud::CrudDefinition;
use crate::dashboard::Dashboard;
use crate::fields::FieldDescriptor;

fn row_actions(settings: &Settings, crud: &str) -> Vec<ActionDescriptor> {
    let root = settings.root_url.trim_end_matches('/');
    vec![
        ActionDescriptor::navigate("Edit", format!("{root}/{crud}/edit")),
        ActionDescriptor::delete("Delete", format!("{root}/{crud}/delete")),
    ]
}

fn crud_for<T: Entity>(
    client: &Client,
    settings: &Settings,
    resource: &str,
    fields: Vec<FieldDescriptor>,
) -> LeafyResult<CrudDefinition> {
    let adapter = EntityAdapter::<T>::new(client.clone(), &settings.api_base_url, resource)?;
    Ok(
        CrudDefinition::for_adapter(resource, adapter, fields, ListOptions::from_settings(settings))
            .list_actions(row_actions(settings, resource)),
    )
}

/// Books, at `/books`.
pub fn book_crud(client: &Client, settings: &Settings) -> LeafyResult<CrudDefinition> {
    let fields = vec![
        FieldDescriptor::text("title")
            .placeholder("Enter the book's title")
            .sortable(),
        FieldDescriptor::text("author")
            .placeholder("Enter the author's name")
            .sortable(),
        FieldDescriptor::textarea("synopsis")
            .placeholder("Enter the book's synopsis")
            .help("Please don't make a summary of the book, remember to not spoil your readers!"),
        FieldDescriptor::text("edition"),
        FieldDescriptor::text("catalog"),
        FieldDescriptor::text("category_type").label("Type"),
        FieldDescriptor::text("category_age").label("Age group"),
        FieldDescriptor::text("category_topics").label("Topics"),
        FieldDescriptor::text("langage").label("Language"),
        FieldDescriptor::text("cover").label("Cover URL"),
        FieldDescriptor::checkbox("available").sortable(),
    ];
    let root = settings.root_url.trim_end_matches('/');
    let mut actions = row_actions(settings, "books");
    actions.push(ActionDescriptor::quick_add(
        "Quick add",
        format!("{root}/books/new"),
    ));
    Ok(crud_for::<Book>(client, settings, "books", fields)?
        .label("Book", "Books")
        .list_actions(actions))
}

/// Families, at `/families`.
pub fn family_crud(client: &Client, settings: &Settings) -> LeafyResult<CrudDefinition> {
    let fields = vec![
        FieldDescriptor::text("email")
            .placeholder("name@example.org")
            .sortable(),
        FieldDescriptor::text("phone_number").label("Phone"),
    ];
    Ok(crud_for::<Family>(client, settings, "families", fields)?.label("Family", "Families"))
}

/// Members, at `/members`.
pub fn member_crud(client: &Client, settings: &Settings) -> LeafyResult<CrudDefinition> {
    let fields = vec![
        FieldDescriptor::text("firstname").label("First name"),
        FieldDescriptor::text("surname").sortable(),
        FieldDescriptor::date("birthdate"),
        FieldDescriptor::checkbox("family_referent")
            .help("The member the library contacts for the whole family"),
        FieldDescriptor::number("family_id").label("Family"),
    ];
    Ok(crud_for::<Member>(client, settings, "members", fields)?.label("Member", "Members"))
}

/// Loans, at `/circulations`.
pub fn circulation_crud(client: &Client, settings: &Settings) -> LeafyResult<CrudDefinition> {
    let fields = vec![
        FieldDescriptor::number("book_id").label("Book"),
        FieldDescriptor::number("member_id").label("Member"),
        FieldDescriptor::date("borrowed_date").label("Borrowed on").sortable(),
        FieldDescriptor::date("returned_date").label("Returned on"),
    ];
    Ok(crud_for::<Circulation>(client, settings, "circulations", fields)?
        .label("Loan", "Loans"))
}

/// The dashboard with every catalog CRUD registered.
///
/// # Errors
///
/// Returns [`leafy_core::LeafyError::ConfigurationError`] if the API base URL
/// is invalid.
pub fn catalog_dashboard(client: &Client, settings: &Settings) -> LeafyResult<Dashboard> {
    let mut dashboard = Dashboard::from_settings(settings);
    dashboard.register(book_crud(client, settings)?);
    dashboard.register(family_crud(client, settings)?);
    dashboard.register(member_crud(client, settings)?);
    dashboard.register(circulation_crud(client, settings)?);
    tracing::debug!(cruds = ?dashboard.crud_names(), "Catalog dashboard ready");
    Ok(dashboard)
}
