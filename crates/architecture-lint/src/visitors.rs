//! `syn` visitors that gather the facts each rule is checked against.

use std::collections::BTreeSet;
use std::path::PathBuf;

use syn::visit::Visit;

/// A method of a pass-through type whose body contains a branching construct.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Branch {
    pub owner: String,
    pub method: String,
    pub construct: &'static str,
}

/// Everything the linter needs to know about one source file.
pub(crate) struct SourceFacts<'r> {
    pass_through_suffixes: &'r [&'static str],
    pub paths: BTreeSet<Vec<String>>,
    pub types: BTreeSet<String>,
    pub branches: Vec<Branch>,
    /// Out-of-line `#[cfg(test)]` modules, relative to this file's module directory.
    pub test_modules: Vec<PathBuf>,
    inline_modules: Vec<String>,
}

impl<'r> SourceFacts<'r> {
    pub(crate) fn collect(file: &syn::File, pass_through_suffixes: &'r [&'static str]) -> Self {
        let mut facts = Self {
            pass_through_suffixes,
            paths: BTreeSet::new(),
            types: BTreeSet::new(),
            branches: Vec::new(),
            test_modules: Vec::new(),
            inline_modules: Vec::new(),
        };
        facts.visit_file(file);
        facts
    }

    fn record_path(&mut self, path: &syn::Path) {
        let segments = path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect::<Vec<_>>();
        if segments.is_empty() {
            return;
        }
        self.paths.insert(segments);
    }

    fn record_use_tree(&mut self, tree: &syn::UseTree, prefix: Vec<String>) {
        match tree {
            syn::UseTree::Path(path) => {
                let mut next = prefix;
                next.push(path.ident.to_string());
                self.record_use_tree(&path.tree, next);
            }
            syn::UseTree::Name(name) => {
                let mut segments = prefix;
                segments.push(name.ident.to_string());
                self.paths.insert(segments);
            }
            syn::UseTree::Rename(rename) => {
                let mut segments = prefix;
                segments.push(rename.ident.to_string());
                self.paths.insert(segments);
            }
            syn::UseTree::Glob(_) => {
                let mut segments = prefix;
                segments.push("*".to_owned());
                self.paths.insert(segments);
            }
            syn::UseTree::Group(group) => {
                for item in &group.items {
                    self.record_use_tree(item, prefix.clone());
                }
            }
        }
    }

    fn is_pass_through(&self, type_name: &str) -> bool {
        self.pass_through_suffixes
            .iter()
            .any(|suffix| type_name.ends_with(suffix))
    }
}

impl<'ast> Visit<'ast> for SourceFacts<'_> {
    fn visit_path(&mut self, node: &'ast syn::Path) {
        self.record_path(node);
        syn::visit::visit_path(self, node);
    }

    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        self.record_use_tree(&node.tree, Vec::new());
    }

    fn visit_item_mod(&mut self, node: &'ast syn::ItemMod) {
        if is_cfg_test(&node.attrs) {
            if node.content.is_none() {
                let mut module = self.inline_modules.iter().collect::<PathBuf>();
                module.push(node.ident.to_string());
                self.test_modules.push(module);
            }
            return;
        }
        self.inline_modules.push(node.ident.to_string());
        syn::visit::visit_item_mod(self, node);
        self.inline_modules.pop();
    }

    fn visit_item_struct(&mut self, node: &'ast syn::ItemStruct) {
        self.types.insert(node.ident.to_string());
        syn::visit::visit_item_struct(self, node);
    }

    fn visit_item_enum(&mut self, node: &'ast syn::ItemEnum) {
        self.types.insert(node.ident.to_string());
        syn::visit::visit_item_enum(self, node);
    }

    fn visit_item_trait(&mut self, node: &'ast syn::ItemTrait) {
        self.types.insert(node.ident.to_string());
        syn::visit::visit_item_trait(self, node);
    }

    fn visit_item_impl(&mut self, node: &'ast syn::ItemImpl) {
        if let Some(owner) = self_type_name(&node.self_ty) {
            if self.is_pass_through(&owner) {
                for item in &node.items {
                    if let syn::ImplItem::Fn(method) = item {
                        let mut finder = BranchFinder::default();
                        finder.visit_block(&method.block);
                        self.branches
                            .extend(finder.found.into_iter().map(|construct| Branch {
                                owner: owner.clone(),
                                method: method.sig.ident.to_string(),
                                construct,
                            }));
                    }
                }
            }
        }
        syn::visit::visit_item_impl(self, node);
    }
}

fn is_cfg_test(attrs: &[syn::Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident("cfg")
            && attr
                .parse_args::<syn::Path>()
                .is_ok_and(|arg| arg.is_ident("test"))
    })
}

fn self_type_name(ty: &syn::Type) -> Option<String> {
    match ty {
        syn::Type::Path(path) => path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        _ => None,
    }
}

/// Finds branching constructs in a method body.
#[derive(Default)]
struct BranchFinder {
    found: Vec<&'static str>,
}

impl<'ast> Visit<'ast> for BranchFinder {
    fn visit_expr_if(&mut self, node: &'ast syn::ExprIf) {
        self.found.push("if");
        syn::visit::visit_expr_if(self, node);
    }

    fn visit_expr_match(&mut self, node: &'ast syn::ExprMatch) {
        self.found.push("match");
        syn::visit::visit_expr_match(self, node);
    }

    fn visit_expr_while(&mut self, node: &'ast syn::ExprWhile) {
        self.found.push("while");
        syn::visit::visit_expr_while(self, node);
    }

    fn visit_expr_for_loop(&mut self, node: &'ast syn::ExprForLoop) {
        self.found.push("for");
        syn::visit::visit_expr_for_loop(self, node);
    }

    fn visit_expr_loop(&mut self, node: &'ast syn::ExprLoop) {
        self.found.push("loop");
        syn::visit::visit_expr_loop(self, node);
    }

    fn visit_local(&mut self, node: &'ast syn::Local) {
        if node.init.as_ref().is_some_and(|init| init.diverge.is_some()) {
            self.found.push("let-else");
        }
        syn::visit::visit_local(self, node);
    }

    // Nested items are not part of the method body.
    fn visit_item(&mut self, _node: &'ast syn::Item) {}
}
