//! Unit tests for the architecture lint.

use std::path::PathBuf;

use rstest::fixture;
use rstest::rstest;

use super::*;

#[derive(Clone, Copy)]
struct LintSingle;

impl LintSingle {
    fn lint(self, rules: &Rules, file: &str, contents: &str) -> Result<(), ArchitectureLintError> {
        lint_sources(
            &[LintSource {
                file: PathBuf::from(file),
                contents: contents.to_owned(),
            }],
            rules,
        )
    }
}

#[fixture]
fn lint_single() -> LintSingle {
    LintSingle
}

#[rstest]
#[case("domain/patient.rs", "use chrono::NaiveDate; pub struct Patient;", true)]
#[case(
    "domain/patient.rs",
    "use crate::application::patients::create_patient::CreatePatientCommand;",
    false
)]
#[case(
    "domain/patient.rs",
    "use patient_service::infrastructure::repositories::PatientRepository;",
    false
)]
#[case("domain/patient.rs", "fn f() { let _ = crate::api::routes::router; }", false)]
#[case("domain/patient.rs", "use axum::response::Json;", false)]
#[case(
    "application/patients/create_patient/handler.rs",
    "use crate::infrastructure::repositories::PatientRepository; use crate::domain::Patient;",
    true
)]
#[case(
    "application/patients/create_patient/handler.rs",
    "use crate::api::controllers::PatientsController;",
    false
)]
#[case(
    "application/patients/create_patient/handler.rs",
    "use api_shared::ApiError;",
    false
)]
#[case(
    "infrastructure/repositories/mod.rs",
    "use super::super::api::routes;",
    false
)]
#[case(
    "api/controllers/patients_controller.rs",
    "use crate::infrastructure::repositories::InMemoryPatientRepository; use axum::response::Json;",
    true
)]
#[case("infrastructure/repositories/mod.rs", "fn f(api: u8) -> u8 { api }", true)]
#[case("domain/patient.rs", "fn f() { let _ = api::routes::router; }", false)]
fn detects_layer_dependency_violations(
    lint_single: LintSingle,
    #[case] file: &str,
    #[case] contents: &str,
    #[case] ok: bool,
) {
    let result = lint_single.lint(&Rules::patient_service(), file, contents);
    assert_eq!(result.is_ok(), ok, "result: {result:?}");
}

#[rstest]
#[case("api/controllers/patients_controller.rs", "pub struct PatientsController;", true)]
#[case("api/controllers/patients_controller.rs", "pub struct PatientsApi;", false)]
#[case("api/controllers/mod.rs", "pub enum Outcome { Ok }", false)]
#[case("application/patients/create_patient/handler.rs", "pub struct CreatePatientHandler;", true)]
#[case("infrastructure/repositories/handler.rs", "pub struct SaveHandler;", false)]
#[case("api/routes.rs", "pub struct RouteHandler;", false)]
#[case(
    "application/patients/create_patient/handler.rs",
    "#[cfg(test)] mod tests { struct FakeHandlerController; }",
    true
)]
fn enforces_naming_conventions(
    lint_single: LintSingle,
    #[case] file: &str,
    #[case] contents: &str,
    #[case] ok: bool,
) {
    let result = lint_single.lint(&Rules::patient_service(), file, contents);
    assert_eq!(result.is_ok(), ok, "result: {result:?}");
}

#[rstest]
#[case(
    "impl PatientsController { async fn create(&self, c: Cmd) -> Result<Json<P>, E> { let p = self.h.handle(c).await?; Ok(Json(p)) } }",
    true
)]
#[case(
    "impl PatientsController { fn create(&self, c: Cmd) -> R { if c.ok { a() } else { b() } } }",
    false
)]
#[case(
    "impl CreatePatientHandler { fn handle(&self, c: Cmd) -> R { match c { _ => r() } } }",
    false
)]
#[case(
    "impl CreatePatientHandler { fn handle(&self, cs: Vec<Cmd>) { for c in cs { go(c); } } }",
    false
)]
#[case(
    "impl CreatePatientHandler { fn handle(&self, c: Option<Cmd>) { let Some(c) = c else { return; }; go(c); } }",
    false
)]
#[case(
    "impl PatientMapper { fn map(&self, c: Cmd) -> R { if c.ok { a() } else { b() } } }",
    true
)]
fn enforces_pass_through_bodies(lint_single: LintSingle, #[case] contents: &str, #[case] ok: bool) {
    let result = lint_single.lint(&Rules::patient_service(), "lib.rs", contents);
    assert_eq!(result.is_ok(), ok, "result: {result:?}");
}

#[rstest]
#[case("models.rs", "use crate::services::ProductService;", false)]
#[case("services.rs", "use crate::models::Product; pub struct ProductService;", true)]
#[case("services.rs", "pub struct ProductStore;", false)]
#[case("services.rs", "use crate::controllers::ProductsController;", false)]
#[case("controllers.rs", "pub struct ProductsController; pub type Created = ();", true)]
#[case(
    "controllers.rs",
    "impl ProductsController { fn get_by_id(&self, id: i32) -> R { match self.s.get(id) { Some(p) => ok(p), None => nf() } } }",
    false
)]
fn enforces_product_rules(
    lint_single: LintSingle,
    #[case] file: &str,
    #[case] contents: &str,
    #[case] ok: bool,
) {
    let result = lint_single.lint(&Rules::products(), file, contents);
    assert_eq!(result.is_ok(), ok, "result: {result:?}");
}

#[rstest]
fn reports_every_violation_with_file(lint_single: LintSingle) {
    let result = lint_single.lint(
        &Rules::patient_service(),
        "domain/patient.rs",
        "use crate::api::routes; use crate::infrastructure::repositories; pub struct Patient;",
    );
    let violations = match result {
        Err(ArchitectureLintError::Violations(violations)) => violations,
        other => panic!("expected violations, got {other:?}"),
    };
    assert_eq!(violations.len(), 2);
    assert!(violations
        .iter()
        .all(|v| v.file == PathBuf::from("domain/patient.rs")));
    assert!(violations
        .iter()
        .any(|v| v.message == "domain module must not depend on crate::api"));
}

#[rstest]
fn unparseable_source_is_a_parse_error(lint_single: LintSingle) {
    let result = lint_single.lint(&Rules::patient_service(), "domain/patient.rs", "fn (");
    assert!(matches!(result, Err(ArchitectureLintError::Parse { .. })));
}

#[rstest]
fn crate_sources_are_read_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let domain = dir.path().join("domain");
    fs::create_dir_all(&domain).expect("mkdir");
    fs::write(domain.join("mod.rs"), "use crate::api::controllers;").expect("write");
    fs::write(dir.path().join("lib.rs"), "pub mod domain;").expect("write");

    let result = lint_crate_sources(dir.path(), &Rules::patient_service());
    let violations = match result {
        Err(ArchitectureLintError::Violations(violations)) => violations,
        other => panic!("expected violations, got {other:?}"),
    };
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].file, PathBuf::from("domain/mod.rs"));
}

#[rstest]
fn out_of_line_test_modules_are_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let patient_dir = dir.path().join("domain").join("patient");
    fs::create_dir_all(patient_dir.join("tests")).expect("mkdir");
    fs::write(
        dir.path().join("domain").join("patient.rs"),
        "pub struct Patient; #[cfg(test)] mod tests;",
    )
    .expect("write");
    fs::write(
        patient_dir.join("tests.rs"),
        "use crate::api::routes::router; mod fixtures;",
    )
    .expect("write");
    fs::write(
        patient_dir.join("tests").join("fixtures.rs"),
        "use axum::Router;",
    )
    .expect("write");

    let result = lint_crate_sources(dir.path(), &Rules::patient_service());
    assert!(result.is_ok(), "result: {result:?}");
}

#[rstest]
fn test_modules_nested_in_inline_modules_resolve_to_their_own_file() {
    let sources = [
        LintSource {
            file: PathBuf::from("lib.rs"),
            contents: "pub mod domain { #[cfg(test)] mod checks; }".to_owned(),
        },
        LintSource {
            file: PathBuf::from("domain/checks.rs"),
            contents: "use crate::api::routes;".to_owned(),
        },
        LintSource {
            file: PathBuf::from("domain/patient.rs"),
            contents: "use crate::api::routes;".to_owned(),
        },
    ];

    let violations = match lint_sources(&sources, &Rules::patient_service()) {
        Err(ArchitectureLintError::Violations(violations)) => violations,
        other => panic!("expected violations, got {other:?}"),
    };
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].file, PathBuf::from("domain/patient.rs"));
}
