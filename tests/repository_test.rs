use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use coursecat::db::repository;
use coursecat::models::{MaterialForm, NewCourseForm};

// Single connection so every query in a test sees the same in-memory database.
async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create database");

    sqlx::query(
        r#"
        CREATE TABLE courses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            duration INTEGER NOT NULL,
            embed_url TEXT
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create courses table");

    sqlx::query(
        r#"
        CREATE TABLE materials (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            course_id INTEGER,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            embed_url TEXT,
            FOREIGN KEY (course_id) REFERENCES courses(id)
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create materials table");

    pool
}

fn course(title: &str) -> NewCourseForm {
    NewCourseForm {
        title: title.to_string(),
        description: "A course about things".to_string(),
        duration: 12,
    }
}

fn material(title: &str) -> MaterialForm {
    MaterialForm {
        title: title.to_string(),
        content: "Read the chapter".to_string(),
        embed_url: None,
    }
}

#[tokio::test]
async fn insert_course_then_fetch_includes_it_once() {
    let pool = test_pool().await;

    repository::insert_course(&pool, course("Rust basics"))
        .await
        .unwrap();

    let courses = repository::fetch_courses(&pool).await.unwrap();
    let matching: Vec<_> = courses.iter().filter(|c| c.title == "Rust basics").collect();

    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].description, "A course about things");
    assert_eq!(matching[0].duration, 12);
    assert!(matching[0].embed_url.is_none());
}

#[tokio::test]
async fn delete_course_removes_it_and_is_idempotent() {
    let pool = test_pool().await;

    repository::insert_course(&pool, course("Doomed")).await.unwrap();
    let id = repository::fetch_courses(&pool).await.unwrap()[0].id;

    repository::delete_course(&pool, id).await.unwrap();
    assert!(repository::fetch_courses(&pool).await.unwrap().is_empty());

    // deleting the same id again is not an error
    repository::delete_course(&pool, id).await.unwrap();
    repository::delete_course(&pool, 9999).await.unwrap();
}

#[tokio::test]
async fn materials_are_scoped_to_their_course() {
    let pool = test_pool().await;

    repository::insert_course(&pool, course("First")).await.unwrap();
    repository::insert_course(&pool, course("Second")).await.unwrap();
    let courses = repository::fetch_courses(&pool).await.unwrap();
    let (a, b) = (courses[0].id, courses[1].id);

    repository::insert_material(&pool, a, material("Chapter 1"))
        .await
        .unwrap();

    let for_a = repository::fetch_materials_for_course(&pool, a).await.unwrap();
    let for_b = repository::fetch_materials_for_course(&pool, b).await.unwrap();

    assert_eq!(for_a.len(), 1);
    assert_eq!(for_a[0].title, "Chapter 1");
    assert_eq!(for_a[0].course_id, a);
    assert!(for_b.is_empty());
}

#[tokio::test]
async fn update_material_replaces_all_three_fields() {
    let pool = test_pool().await;

    repository::insert_course(&pool, course("Editing")).await.unwrap();
    let course_id = repository::fetch_courses(&pool).await.unwrap()[0].id;

    repository::insert_material(
        &pool,
        course_id,
        MaterialForm {
            title: "Old title".to_string(),
            content: "Old content".to_string(),
            embed_url: Some("https://old.example/video".to_string()),
        },
    )
    .await
    .unwrap();
    let id = repository::fetch_materials_for_course(&pool, course_id)
        .await
        .unwrap()[0]
        .id;

    repository::update_material(
        &pool,
        id,
        MaterialForm {
            title: "New title".to_string(),
            content: "New content".to_string(),
            embed_url: Some("".to_string()),
        },
    )
    .await
    .unwrap();

    let updated = repository::find_material_by_id(&pool, id)
        .await
        .unwrap()
        .expect("material should still exist");

    // never a mix of old and new; a blank embed field overwrites
    assert_eq!(updated.title, "New title");
    assert_eq!(updated.content, "New content");
    assert_eq!(updated.embed_url.as_deref(), Some(""));
}

#[tokio::test]
async fn find_material_returns_none_when_absent() {
    let pool = test_pool().await;

    let found = repository::find_material_by_id(&pool, 42).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn deleting_a_course_leaves_its_materials_orphaned() {
    let pool = test_pool().await;

    repository::insert_course(&pool, course("Short-lived")).await.unwrap();
    let course_id = repository::fetch_courses(&pool).await.unwrap()[0].id;
    repository::insert_material(&pool, course_id, material("Leftover"))
        .await
        .unwrap();

    repository::delete_course(&pool, course_id).await.unwrap();

    // no cascade: the material row survives its course
    let orphans = repository::fetch_materials_for_course(&pool, course_id)
        .await
        .unwrap();
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].title, "Leftover");
}
