//! Rule sets describing the intended shape of each service crate.

use std::path::Path;

/// Dependency restrictions for one top-level module of a crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerRule {
    /// Top-level module name (`domain`, `api`, `models`, ...).
    pub name: &'static str,
    /// Sibling layers this layer must not reference.
    pub forbidden_modules: &'static [&'static str],
    /// External crates this layer must not reference.
    pub forbidden_crates: &'static [&'static str],
}

/// Naming conventions tying type names to where they are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingRule {
    /// Every type declared under `dir` must have a name ending in `suffix`.
    DeclaredUnder {
        dir: &'static str,
        suffix: &'static str,
    },
    /// Every type whose name ends in `suffix` must be declared under `dir`.
    SuffixResidesIn {
        suffix: &'static str,
        dir: &'static str,
    },
}

/// The complete set of architecture rules for one crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    /// Library name used in absolute paths (`patient_service::api::...`).
    pub crate_name: &'static str,
    pub layers: Vec<LayerRule>,
    pub naming: Vec<NamingRule>,
    /// Methods of types whose names end in one of these suffixes must be straight-line
    /// pass-throughs: no `if`, `match`, loops or `let ... else`.
    pub pass_through_suffixes: Vec<&'static str>,
}

impl Rules {
    /// Rules for the layered patient service.
    pub fn patient_service() -> Self {
        Self {
            crate_name: "patient_service",
            layers: vec![
                LayerRule {
                    name: "domain",
                    forbidden_modules: &["application", "infrastructure", "api"],
                    forbidden_crates: &["api_shared", "axum", "tower", "tower_http"],
                },
                LayerRule {
                    name: "application",
                    forbidden_modules: &["api"],
                    forbidden_crates: &["api_shared", "axum", "tower_http"],
                },
                LayerRule {
                    name: "infrastructure",
                    forbidden_modules: &["api"],
                    forbidden_crates: &["api_shared", "axum", "tower_http"],
                },
                LayerRule {
                    name: "api",
                    forbidden_modules: &[],
                    forbidden_crates: &[],
                },
            ],
            naming: vec![
                NamingRule::DeclaredUnder {
                    dir: "api/controllers",
                    suffix: "Controller",
                },
                NamingRule::SuffixResidesIn {
                    suffix: "Handler",
                    dir: "application",
                },
            ],
            pass_through_suffixes: vec!["Controller", "Handler"],
        }
    }

    /// Rules for the product catalog.
    pub fn products() -> Self {
        Self {
            crate_name: "products",
            layers: vec![
                LayerRule {
                    name: "models",
                    forbidden_modules: &["services", "controllers", "routes"],
                    forbidden_crates: &["api_shared", "axum", "tower_http"],
                },
                LayerRule {
                    name: "services",
                    forbidden_modules: &["controllers", "routes"],
                    forbidden_crates: &["api_shared", "axum", "tower_http"],
                },
                LayerRule {
                    name: "controllers",
                    forbidden_modules: &["routes"],
                    forbidden_crates: &[],
                },
            ],
            naming: vec![
                NamingRule::DeclaredUnder {
                    dir: "controllers",
                    suffix: "Controller",
                },
                NamingRule::DeclaredUnder {
                    dir: "services",
                    suffix: "Service",
                },
            ],
            pass_through_suffixes: vec!["Controller"],
        }
    }

    pub(crate) fn layer_for(&self, relative_path: &Path) -> Option<&LayerRule> {
        let first = relative_path.components().next()?;
        let stem = Path::new(first.as_os_str()).file_stem()?.to_str()?;
        self.layers.iter().find(|layer| layer.name == stem)
    }

    pub(crate) fn is_layer(&self, name: &str) -> bool {
        self.layers.iter().any(|layer| layer.name == name)
    }
}

/// Whether `relative_path` lives under `dir`, either as `dir/...` or as the file `dir.rs`.
pub(crate) fn resides_in(relative_path: &Path, dir: &str) -> bool {
    relative_path.starts_with(dir) || relative_path.with_extension("").starts_with(dir)
}
