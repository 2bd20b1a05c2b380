//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    models::{
        view::CATALOG_VIEW, BookFields, BookForm, CatalogPage, FormOutcome, Rendered,
    },
    services::catalog::{redirect_to_catalog, redirect_to_search},
    AppState,
};

/// Query string of the search box
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

fn render_catalog(page: CatalogPage) -> Json<Rendered<CatalogPage>> {
    Json(Rendered {
        view: CATALOG_VIEW,
        context: page,
    })
}

fn render_form(form: BookForm) -> Json<Rendered<BookForm>> {
    Json(Rendered {
        view: form.view,
        context: form,
    })
}

impl IntoResponse for FormOutcome {
    fn into_response(self) -> Response {
        match self {
            FormOutcome::Redirect(to) => Redirect::to(&to).into_response(),
            FormOutcome::Redisplay(form) => render_form(form).into_response(),
        }
    }
}

/// GET /books/
pub async fn index() -> Redirect {
    Redirect::to(&redirect_to_catalog())
}

/// GET /books/catalog/:page
pub async fn list_catalog(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> AppResult<Json<Rendered<CatalogPage>>> {
    let page = state.services.catalog.list_catalog(&page).await?;
    Ok(render_catalog(page))
}

/// GET /books/search?search=...
pub async fn search(Query(params): Query<SearchParams>) -> Redirect {
    Redirect::to(&redirect_to_search(params.search.as_deref()))
}

/// GET /books/search/:query/:page
pub async fn search_catalog(
    State(state): State<AppState>,
    Path((query, page)): Path<(String, String)>,
) -> AppResult<Json<Rendered<CatalogPage>>> {
    let page = state.services.catalog.search_catalog(&query, &page).await?;
    Ok(render_catalog(page))
}

/// GET /books/new
pub async fn new_form(State(state): State<AppState>) -> Json<Rendered<BookForm>> {
    render_form(state.services.books.new_form())
}

/// POST /books/new
pub async fn create_book(
    State(state): State<AppState>,
    Form(fields): Form<BookFields>,
) -> AppResult<FormOutcome> {
    state.services.books.create(fields).await
}

/// GET /books/:id
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Rendered<BookForm>>> {
    let form = state.services.books.edit_form(&id).await?;
    Ok(render_form(form))
}

/// POST /books/:id
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(fields): Form<BookFields>,
) -> AppResult<FormOutcome> {
    state.services.books.update(&id, fields).await
}

/// POST /books/:id/delete
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Redirect> {
    let to = state.services.books.delete(&id).await?;
    Ok(Redirect::to(&to))
}
