//! HTML rendering for the five server-side pages. No template engine;
//! each page is assembled from escaped field values and a shared shell.

use crate::models::{Course, Material};

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

pub fn course_list(courses: &[Course]) -> String {
    let mut body = String::from("<h1>Courses</h1>\n<p><a href=\"/course/new\">Add a course</a></p>\n<ul>\n");

    for course in courses {
        body.push_str(&format!(
            "<li><strong>{}</strong> ({} hours) &mdash; {} \
             <a href=\"/course/{}/materials\">materials</a> \
             <a href=\"/course/delete/{}\">delete</a></li>\n",
            escape(&course.title),
            course.duration,
            escape(&course.description),
            course.id,
            course.id,
        ));
    }

    body.push_str("</ul>\n");
    shell("Courses", &body)
}

pub fn new_course_form() -> String {
    let body = "<h1>New course</h1>\n\
        <form method=\"post\" action=\"/course/new\">\n\
        <label>Title <input name=\"title\"></label><br>\n\
        <label>Description <textarea name=\"description\"></textarea></label><br>\n\
        <label>Duration (hours) <input name=\"duration\"></label><br>\n\
        <button type=\"submit\">Create</button>\n\
        </form>\n\
        <p><a href=\"/\">Back to courses</a></p>\n";
    shell("New course", body)
}

pub fn material_list(course_id: i64, materials: &[Material]) -> String {
    let mut body = format!(
        "<h1>Materials</h1>\n\
         <p><a href=\"/course/{}/material/new\">Add material</a></p>\n<ul>\n",
        course_id
    );

    for material in materials {
        let embed = material
            .embed_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .map(|url| format!(" <a href=\"{}\">embed</a>", escape(url)))
            .unwrap_or_default();

        body.push_str(&format!(
            "<li><strong>{}</strong>: {}{} \
             <a href=\"/course/{}/material/edit/{}\">edit</a> \
             <a href=\"/course/{}/material/delete/{}\">delete</a></li>\n",
            escape(&material.title),
            escape(&material.content),
            embed,
            course_id,
            material.id,
            course_id,
            material.id,
        ));
    }

    body.push_str("</ul>\n<p><a href=\"/\">Back to courses</a></p>\n");
    shell("Materials", &body)
}

pub fn new_material_form(course_id: i64) -> String {
    let body = format!(
        "<h1>New material</h1>\n\
         <form method=\"post\" action=\"/course/{}/material/new\">\n\
         <label>Title <input name=\"title\"></label><br>\n\
         <label>Content <textarea name=\"content\"></textarea></label><br>\n\
         <label>Embed URL <input name=\"embed_url\"></label><br>\n\
         <button type=\"submit\">Create</button>\n\
         </form>\n\
         <p><a href=\"/course/{}/materials\">Back to materials</a></p>\n",
        course_id, course_id
    );
    shell("New material", &body)
}

pub fn edit_material_form(course_id: i64, material: &Material) -> String {
    let body = format!(
        "<h1>Edit material</h1>\n\
         <form method=\"post\" action=\"/course/{}/material/edit/{}\">\n\
         <label>Title <input name=\"title\" value=\"{}\"></label><br>\n\
         <label>Content <textarea name=\"content\">{}</textarea></label><br>\n\
         <label>Embed URL <input name=\"embed_url\" value=\"{}\"></label><br>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <p><a href=\"/course/{}/materials\">Back to materials</a></p>\n",
        course_id,
        material.id,
        escape(&material.title),
        escape(&material.content),
        escape(material.embed_url.as_deref().unwrap_or("")),
        course_id,
    );
    shell("Edit material", &body)
}
