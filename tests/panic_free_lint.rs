//! AST-level test to ensure browser code never panics on unwrap/expect.
//!
//! A panic in the WASM bundle kills the whole page, so every fallible DOM,
//! fetch or storage call must degrade gracefully. This test parses every
//! source file under `src/app` and flags `.unwrap()` and `.expect(..)` calls
//! outside `#[cfg(test)]` modules.
//!
//! Macro bodies (`rsx!`, `format!`) are opaque to `syn` and are not checked.

use std::fs;
use std::path::Path;
use syn::visit::Visit;
use syn::{Attribute, ExprMethodCall, File, ItemMod};
use walkdir::WalkDir;

const PANICKING_METHODS: &[&str] = &["unwrap", "expect"];

struct PanicVisitor {
    current_file: String,
    violations: Vec<(String, String)>,
}

fn is_cfg_test(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident("cfg")
            && attr
                .parse_args::<syn::Ident>()
                .map(|ident| ident == "test")
                .unwrap_or(false)
    })
}

impl<'ast> Visit<'ast> for PanicVisitor {
    fn visit_item_mod(&mut self, item: &'ast ItemMod) {
        if is_cfg_test(&item.attrs) {
            return;
        }
        syn::visit::visit_item_mod(self, item);
    }

    fn visit_expr_method_call(&mut self, call: &'ast ExprMethodCall) {
        let method = call.method.to_string();
        if PANICKING_METHODS.contains(&method.as_str()) {
            self.violations
                .push((self.current_file.clone(), format!(".{}()", method)));
        }
        syn::visit::visit_expr_method_call(self, call);
    }
}

fn analyze_file(path: &Path) -> Vec<(String, String)> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return vec![],
    };

    let syntax: File = match syn::parse_file(&content) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
            return vec![];
        }
    };

    let mut visitor = PanicVisitor {
        current_file: path.display().to_string(),
        violations: Vec::new(),
    };
    visitor.visit_file(&syntax);
    visitor.violations
}

#[test]
fn browser_code_must_not_unwrap() {
    let app_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("app");

    let mut all_violations = Vec::new();

    for entry in WalkDir::new(&app_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        all_violations.extend(analyze_file(entry.path()));
    }

    if !all_violations.is_empty() {
        let mut error_msg = String::from(
            "\n\nFound panicking calls in browser code!\n\n\
            Propagate the error or fall back to a default instead.\n\n\
            Violations:\n",
        );
        for (file, call) in &all_violations {
            error_msg.push_str(&format!("  {}: {}\n", file, call));
        }
        panic!("{}", error_msg);
    }
}

#[test]
fn lint_detects_unwrap_outside_tests() {
    let source = r#"
        fn risky() -> u32 { "1".parse().unwrap() }

        #[cfg(test)]
        mod tests {
            fn fine() { Some(1).expect("present"); }
        }
    "#;
    let syntax = syn::parse_file(source).expect("fixture parses");
    let mut visitor = PanicVisitor {
        current_file: "fixture.rs".to_string(),
        violations: Vec::new(),
    };
    visitor.visit_file(&syntax);
    assert_eq!(
        visitor.violations,
        vec![("fixture.rs".to_string(), ".unwrap()".to_string())]
    );
}
