use portal_lib::{Catalog, CatalogError, Course, CourseId, Level, Status};
use pretty_assertions::assert_eq;

fn codes<'a>(courses: impl IntoIterator<Item = &'a Course>) -> Vec<&'a str> {
    courses.into_iter().map(|course| course.code.as_str()).collect()
}

fn id(catalog: &Catalog, code: &str) -> CourseId {
    catalog.find_by_code(code).unwrap().id.clone()
}

fn assert_disjoint(catalog: &Catalog) {
    for course in catalog.enrolled() {
        assert!(
            catalog.available().iter().all(|other| other.id != course.id),
            "{} is in both sets",
            course.code
        );
    }
}

#[test]
fn seeded_catalog() {
    let catalog = Catalog::seeded();

    assert_eq!(codes(catalog.enrolled()), ["CS401", "MATH301"]);
    assert_eq!(codes(catalog.available()), ["CS402", "CS403", "ENG201"]);
    assert_eq!(catalog.total_credits(), 7);
    assert_eq!(catalog.open_count(), 2);
    assert!(catalog.find_by_code("cs403").unwrap().is_full());
}

#[test]
fn enroll_open_course() {
    let mut catalog = Catalog::seeded();
    let before = catalog.total_credits();
    let cs402 = id(&catalog, "CS402");

    let notification = catalog.enroll(&cs402).unwrap();

    assert_eq!(notification.level, Level::Success);
    assert_eq!(notification.message, "Enrolled in Database Systems");
    assert_eq!(codes(catalog.enrolled()), ["CS401", "MATH301", "CS402"]);
    assert_eq!(codes(catalog.available()), ["CS403", "ENG201"]);
    assert_eq!(catalog.enrolled().last().unwrap().status, Status::Enrolled);
    assert_eq!(catalog.total_credits(), before + 3);
    assert_eq!(catalog.open_count(), 1);
    assert_disjoint(&catalog);
}

#[test]
fn enroll_full_course_changes_nothing() {
    let mut catalog = Catalog::seeded();
    let cs403 = id(&catalog, "CS403");
    let enrolled = catalog.enrolled().to_vec();
    let available = catalog.available().to_vec();

    let err = catalog.enroll(&cs403).unwrap_err();

    assert!(matches!(err, CatalogError::CourseFull { ref code, .. } if code == "CS403"));
    let notification = err.notification();
    assert!(notification.is_error());
    assert_eq!(notification.message, "This course is full");
    assert_eq!(catalog.enrolled(), enrolled.as_slice());
    assert_eq!(catalog.available(), available.as_slice());
}

#[test]
fn enroll_requires_availability() {
    let mut catalog = Catalog::seeded();
    let cs401 = id(&catalog, "CS401");

    let err = catalog.enroll(&cs401).unwrap_err();
    assert_eq!(
        err,
        CatalogError::NotAvailable {
            id: cs401,
            code: Some("CS401".to_owned()),
        }
    );
    assert_eq!(
        err.notification().message,
        "course `CS401` is not available for enrollment"
    );

    let err = catalog.enroll(&CourseId::new("missing")).unwrap_err();
    assert_eq!(
        err,
        CatalogError::NotAvailable {
            id: CourseId::new("missing"),
            code: None,
        }
    );
    assert_eq!(
        err.notification().message,
        "course `missing` is not available for enrollment"
    );
    assert_eq!(catalog.enrolled_count(), 2);
}

#[test]
fn drop_returns_course_to_the_end_of_available() {
    let mut catalog = Catalog::seeded();
    let before = catalog.total_credits();
    let math = id(&catalog, "MATH301");

    let notification = catalog.drop(&math).unwrap();

    assert_eq!(notification.message, "Dropped Linear Algebra");
    assert_eq!(codes(catalog.enrolled()), ["CS401"]);
    assert_eq!(codes(catalog.available()), ["CS402", "CS403", "ENG201", "MATH301"]);
    assert_eq!(catalog.available().last().unwrap().status, Status::Available);
    assert_eq!(catalog.total_credits(), before - 4);
    assert_disjoint(&catalog);
}

#[test]
fn drop_clears_full_status() {
    let full = Course::new("9", "CS499", "Senior Project", "", 6, "", "", 40, 40, "");
    assert!(full.is_full());
    let mut catalog = Catalog::new(vec![full], Vec::new());

    catalog.drop(&CourseId::new("9")).unwrap();

    let dropped = &catalog.available()[0];
    assert_eq!(dropped.status, Status::Available);
    // Seat counts are left as they were.
    assert!(dropped.is_at_capacity());
    assert_eq!(catalog.open_count(), 1);
}

#[test]
fn drop_then_enroll_restores_membership() {
    let mut catalog = Catalog::seeded();
    let cs401 = id(&catalog, "CS401");
    let credits = catalog.total_credits();

    catalog.drop(&cs401).unwrap();
    catalog.enroll(&cs401).unwrap();

    assert_eq!(codes(catalog.enrolled()), ["MATH301", "CS401"]);
    assert_eq!(catalog.total_credits(), credits);
    assert_eq!(catalog.find(&cs401).unwrap().enrolled, 25);
}

#[test]
fn drop_requires_enrollment() {
    let mut catalog = Catalog::seeded();
    let cs402 = id(&catalog, "CS402");

    let err = catalog.drop(&cs402).unwrap_err();
    assert_eq!(
        err,
        CatalogError::NotEnrolled {
            id: cs402,
            code: Some("CS402".to_owned()),
        }
    );
    assert_eq!(err.notification().message, "course `CS402` is not enrolled");
    assert_eq!(catalog.available().len(), 3);
}

#[test]
fn search_matches_code_or_name_ignoring_case() {
    let catalog = Catalog::seeded();

    assert_eq!(codes(catalog.search("cs")), ["CS402", "CS403"]);
    assert_eq!(codes(catalog.search("WRITING")), ["ENG201"]);
    assert_eq!(codes(catalog.search("learn")), ["CS403"]);
    assert!(catalog.search("zzz").next().is_none());
}

#[test]
fn search_never_looks_at_enrolled() {
    let catalog = Catalog::seeded();

    assert!(catalog.search("CS401").next().is_none());
    assert!(catalog.search("linear").next().is_none());
}

#[test]
fn empty_search_is_everything_available() {
    let catalog = Catalog::seeded();

    assert_eq!(codes(catalog.search("")), codes(catalog.available()));
}

#[test]
fn search_over_mixed_codes() {
    let courses = vec![
        Course::new("1", "CS401", "Advanced Web Development", "", 3, "", "", 0, 30, ""),
        Course::new("2", "MATH301", "Linear Algebra", "", 4, "", "", 0, 35, ""),
        Course::new("3", "ENG201", "Technical Writing", "", 2, "", "", 0, 25, ""),
    ];
    let catalog = Catalog::new(Vec::new(), courses);

    assert_eq!(codes(catalog.search("cs")), ["CS401"]);
}

#[test]
fn replace_keeps_sets_disjoint() {
    let mut catalog = Catalog::seeded();
    let enrolled = vec![Course::new("3", "CS402", "Database Systems", "", 3, "", "", 22, 30, "")];

    catalog.replace(enrolled, Catalog::seeded().available().to_vec());

    assert_eq!(codes(catalog.enrolled()), ["CS402"]);
    assert_eq!(catalog.enrolled()[0].status, Status::Enrolled);
    assert_eq!(codes(catalog.available()), ["CS403", "ENG201"]);
    assert_disjoint(&catalog);
}

#[test]
fn summary_tracks_every_change() {
    let mut catalog = Catalog::seeded();
    let eng = id(&catalog, "ENG201");

    catalog.enroll(&eng).unwrap();
    let summary = catalog.summary();

    assert_eq!(summary.enrolled_courses, 3);
    assert_eq!(summary.total_credits, 9);
    assert_eq!(summary.open_courses, 1);
}
