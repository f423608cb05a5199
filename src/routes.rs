use axum::extract::{Form, Path, State};
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::Router;

use crate::db::repository;
use crate::error::AppError;
use crate::models::{MaterialForm, NewCourseForm};
use crate::state::AppState;
use crate::views;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_courses))
        .route("/course/new", get(new_course_form).post(create_course))
        .route("/course/delete/{id}", get(delete_course))
        .route("/course/{id}/materials", get(list_materials))
        .route(
            "/course/{id}/material/new",
            get(new_material_form).post(create_material),
        )
        .route(
            "/course/{course_id}/material/edit/{material_id}",
            get(edit_material_form).post(update_material),
        )
        .route(
            "/course/{course_id}/material/delete/{material_id}",
            get(delete_material),
        )
        .with_state(state)
}

async fn list_courses(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let courses = repository::fetch_courses(&state.db).await?;
    Ok(Html(views::course_list(&courses)))
}

async fn new_course_form() -> Html<String> {
    Html(views::new_course_form())
}

async fn create_course(
    State(state): State<AppState>,
    Form(form): Form<NewCourseForm>,
) -> Result<Redirect, AppError> {
    repository::insert_course(&state.db, form).await?;
    Ok(Redirect::to("/"))
}

// Redirects whether or not the id existed; absent rows are treated as
// already deleted.
async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    repository::delete_course(&state.db, id).await?;
    Ok(Redirect::to("/"))
}

async fn list_materials(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let materials = repository::fetch_materials_for_course(&state.db, course_id).await?;
    Ok(Html(views::material_list(course_id, &materials)))
}

async fn new_material_form(Path(course_id): Path<i64>) -> Html<String> {
    Html(views::new_material_form(course_id))
}

async fn create_material(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
    Form(form): Form<MaterialForm>,
) -> Result<Redirect, AppError> {
    repository::insert_material(&state.db, course_id, form).await?;
    Ok(Redirect::to(&format!("/course/{}/materials", course_id)))
}

async fn edit_material_form(
    State(state): State<AppState>,
    Path((course_id, material_id)): Path<(i64, i64)>,
) -> Result<Html<String>, AppError> {
    let material = repository::find_material_by_id(&state.db, material_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Html(views::edit_material_form(course_id, &material)))
}

async fn update_material(
    State(state): State<AppState>,
    Path((course_id, material_id)): Path<(i64, i64)>,
    Form(form): Form<MaterialForm>,
) -> Result<Redirect, AppError> {
    repository::update_material(&state.db, material_id, form).await?;
    Ok(Redirect::to(&format!("/course/{}/materials", course_id)))
}

async fn delete_material(
    State(state): State<AppState>,
    Path((course_id, material_id)): Path<(i64, i64)>,
) -> Result<Redirect, AppError> {
    repository::delete_material(&state.db, material_id).await?;
    Ok(Redirect::to(&format!("/course/{}/materials", course_id)))
}
