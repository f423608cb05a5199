use sqlx::SqlitePool;

use crate::models::{Course, Material, MaterialForm, NewCourseForm};

pub async fn fetch_courses(db: &SqlitePool) -> Result<Vec<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(
        "SELECT id, title, description, duration, embed_url FROM courses",
    )
    .fetch_all(db)
    .await
}

pub async fn insert_course(db: &SqlitePool, form: NewCourseForm) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO courses (title, description, duration) VALUES (?, ?, ?)")
        .bind(&form.title)
        .bind(&form.description)
        .bind(form.duration)
        .execute(db)
        .await?;

    Ok(())
}

// Materials referencing the course are left in place, matching the schema's
// lack of ON DELETE CASCADE. Deleting an absent id is a no-op, not an error.
pub async fn delete_course(db: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM courses WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;

    Ok(())
}

pub async fn fetch_materials_for_course(
    db: &SqlitePool,
    course_id: i64,
) -> Result<Vec<Material>, sqlx::Error> {
    sqlx::query_as::<_, Material>(
        "SELECT id, course_id, title, content, embed_url FROM materials WHERE course_id = ?",
    )
    .bind(course_id)
    .fetch_all(db)
    .await
}

pub async fn insert_material(
    db: &SqlitePool,
    course_id: i64,
    form: MaterialForm,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO materials (course_id, title, content, embed_url) VALUES (?, ?, ?, ?)")
        .bind(course_id)
        .bind(&form.title)
        .bind(&form.content)
        .bind(&form.embed_url)
        .execute(db)
        .await?;

    Ok(())
}

pub async fn find_material_by_id(
    db: &SqlitePool,
    id: i64,
) -> Result<Option<Material>, sqlx::Error> {
    sqlx::query_as::<_, Material>(
        "SELECT id, course_id, title, content, embed_url FROM materials WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

// Full replacement of the three mutable fields in one statement; a blank
// embed field from the form overwrites whatever was stored.
pub async fn update_material(
    db: &SqlitePool,
    id: i64,
    form: MaterialForm,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE materials SET title = ?, content = ?, embed_url = ? WHERE id = ?")
        .bind(&form.title)
        .bind(&form.content)
        .bind(&form.embed_url)
        .bind(id)
        .execute(db)
        .await?;

    Ok(())
}

pub async fn delete_material(db: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM materials WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;

    Ok(())
}
