pub mod course;
pub mod material;

pub use course::{Course, NewCourseForm};
pub use material::{Material, MaterialForm};
