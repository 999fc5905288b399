//! Export-surface extraction from a resolved production file.

use crate::ast::{Node, NodeKind};

/// Walk a production file's tree once and collect its exported names:
/// named function declarations under a named export, methods of an
/// exported class, named export specifiers, and the identifier or named
/// function assigned via the legacy `module.exports = ..` form.
pub fn exported_names(root: &Node) -> Vec<String> {
    let mut names = Vec::new();
    root.walk(&mut |node| match &node.kind {
        NodeKind::Export { declaration, specifiers, is_default: false } => {
            if let Some(declaration) = declaration {
                collect_declaration(declaration, &mut names);
            }
            for specifier in specifiers {
                if let NodeKind::ExportSpecifier { exported, .. } = &specifier.kind {
                    names.push(exported.clone());
                }
            }
        }
        NodeKind::Assignment { target, value } => {
            if is_module_exports(target) {
                collect_whole_module_value(value, &mut names);
            }
        }
        _ => {}
    });
    names
}

fn collect_declaration(declaration: &Node, names: &mut Vec<String>) {
    match &declaration.kind {
        NodeKind::Function { name: Some(name), .. } => names.push(name.clone()),
        NodeKind::Class { body, .. } => {
            for member in body {
                if let NodeKind::Method { name, .. } = &member.kind {
                    names.push(name.clone());
                }
            }
        }
        _ => {}
    }
}

/// `module.exports` on the left-hand side of an assignment.
fn is_module_exports(target: &Node) -> bool {
    matches!(
        target.as_member(),
        Some((object, "exports")) if object.as_identifier() == Some("module")
    )
}

fn collect_whole_module_value(value: &Node, names: &mut Vec<String>) {
    match &value.kind {
        NodeKind::Identifier { name } => names.push(name.clone()),
        NodeKind::Function { name: Some(name), is_arrow: false, .. } => names.push(name.clone()),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::parsers;

    fn names(source: &str) -> Vec<String> {
        let outcome = parsers::parse(source, Path::new("prod.js")).unwrap();
        exported_names(&outcome.root)
    }

    #[test]
    fn named_function_exports() {
        assert_eq!(
            names("export function createFileText(text) { return text; }"),
            vec!["createFileText"]
        );
    }

    #[test]
    fn exported_class_methods() {
        assert_eq!(
            names(
                r#"
export class Store {
  open(path) {}
  close() {}
}
"#
            ),
            vec!["open", "close"]
        );
    }

    #[test]
    fn export_specifiers_use_exported_name() {
        assert_eq!(
            names("function internal() {}\nexport { internal as publicApi };"),
            vec!["publicApi"]
        );
    }

    #[test]
    fn legacy_module_exports_assignment() {
        assert_eq!(names("module.exports = applyEach;"), vec!["applyEach"]);
        assert_eq!(
            names("module.exports = function applyEach(fns) {};"),
            vec!["applyEach"]
        );
        // Anonymous function: nothing extractable
        assert!(names("module.exports = function (fns) {};").is_empty());
    }

    #[test]
    fn default_exports_are_not_collected() {
        assert!(names("export default function helper() {}").is_empty());
    }
}
