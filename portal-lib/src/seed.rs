//! Fixed course lists a catalog starts from when no backend supplies its own.

use crate::course::{Course, Status};

/// Courses the student is registered for at the start of a session.
pub fn enrolled() -> Vec<Course> {
    vec![
        Course::new(
            "1",
            "CS401",
            "Advanced Web Development",
            "Dr. Sarah Johnson",
            3,
            "MWF 10:00-11:30 AM",
            "Tech Building 201",
            25,
            30,
            "course-orange",
        )
        .with_status(Status::Enrolled),
        Course::new(
            "2",
            "MATH301",
            "Linear Algebra",
            "Prof. Michael Chen",
            4,
            "TTh 2:00-3:30 PM",
            "Math Hall 105",
            28,
            35,
            "course-teal",
        )
        .with_status(Status::Enrolled),
    ]
}

/// Catalog courses open to the student at the start of a session.
pub fn available() -> Vec<Course> {
    vec![
        Course::new(
            "3",
            "CS402",
            "Database Systems",
            "Dr. Emily Rodriguez",
            3,
            "MWF 1:00-2:30 PM",
            "Tech Building 305",
            22,
            30,
            "course-green",
        ),
        Course::new(
            "4",
            "CS403",
            "Machine Learning",
            "Dr. James Wilson",
            3,
            "TTh 10:00-11:30 AM",
            "AI Lab 401",
            30,
            30,
            "course-purple",
        ),
        Course::new(
            "5",
            "ENG201",
            "Technical Writing",
            "Prof. Lisa Anderson",
            2,
            "MW 3:00-4:00 PM",
            "Humanities 210",
            18,
            25,
            "course-magenta",
        ),
    ]
}
