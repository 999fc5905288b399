//! Lowering from the supplier's CST to the generic AST.
//!
//! Lowering is total: every CST node maps to exactly one `Node`, with
//! unrecognized kinds (including ERROR recoveries) landing in `Other` so a
//! partial tree still analyzes.

use crate::types::{Location, Span};

use super::node::{DeclKind, Node, NodeKind};

/// Lower a parsed tree rooted at `root` into the generic AST.
pub fn lower_tree(root: tree_sitter::Node<'_>, source: &str) -> Node {
    let lowerer = Lowerer { source };
    lowerer.lower(root)
}

struct Lowerer<'a> {
    source: &'a str,
}

impl<'a> Lowerer<'a> {
    fn span(&self, n: tree_sitter::Node<'_>) -> Span {
        let start = n.start_position();
        Span {
            start: Location::new(start.row as u32 + 1, start.column as u32),
            start_byte: n.start_byte() as u32,
            end_byte: n.end_byte() as u32,
        }
    }

    fn text(&self, n: tree_sitter::Node<'_>) -> String {
        n.utf8_text(self.source.as_bytes())
            .unwrap_or_default()
            .to_string()
    }

    fn named_children<'t>(&self, n: tree_sitter::Node<'t>) -> Vec<tree_sitter::Node<'t>> {
        let mut cursor = n.walk();
        n.named_children(&mut cursor)
            .filter(|c| c.kind() != "comment")
            .collect()
    }

    fn lower_all(&self, nodes: Vec<tree_sitter::Node<'_>>) -> Vec<Node> {
        nodes.into_iter().map(|c| self.lower(c)).collect()
    }

    fn lower_field(&self, n: tree_sitter::Node<'_>, field: &str) -> Option<Box<Node>> {
        n.child_by_field_name(field).map(|c| Box::new(self.lower(c)))
    }

    fn lower(&self, n: tree_sitter::Node<'_>) -> Node {
        let span = self.span(n);
        let kind = self.lower_kind(n);
        Node { kind, span }
    }

    fn lower_kind(&self, n: tree_sitter::Node<'_>) -> NodeKind {
        match n.kind() {
            "program" => NodeKind::Program {
                body: self.lower_all(self.named_children(n)),
            },

            // Statement wrappers are transparent: the statement list holds
            // the inner construct directly.
            "expression_statement" | "parenthesized_expression" => {
                match self.named_children(n).into_iter().next() {
                    Some(inner) => self.lower_kind(inner),
                    None => NodeKind::Other { kind: n.kind().to_string(), children: Vec::new() },
                }
            }

            "call_expression" => {
                let callee = n
                    .child_by_field_name("function")
                    .map(|c| Box::new(self.lower(c)))
                    .unwrap_or_else(|| Box::new(self.other(n)));
                NodeKind::Call { callee, arguments: self.lower_arguments(n) }
            }
            "new_expression" => {
                let callee = n
                    .child_by_field_name("constructor")
                    .map(|c| Box::new(self.lower(c)))
                    .unwrap_or_else(|| Box::new(self.other(n)));
                NodeKind::New { callee, arguments: self.lower_arguments(n) }
            }
            "member_expression" => {
                let object = n
                    .child_by_field_name("object")
                    .map(|c| Box::new(self.lower(c)))
                    .unwrap_or_else(|| Box::new(self.other(n)));
                let property = n.child_by_field_name("property");
                NodeKind::Member {
                    object,
                    property: property.map(|p| self.text(p)).unwrap_or_default(),
                    property_span: property.map(|p| self.span(p)).unwrap_or_else(|| self.span(n)),
                }
            }
            "assignment_expression" => NodeKind::Assignment {
                target: self
                    .lower_field(n, "left")
                    .unwrap_or_else(|| Box::new(self.other(n))),
                value: self
                    .lower_field(n, "right")
                    .unwrap_or_else(|| Box::new(self.other(n))),
            },

            "identifier" | "property_identifier" | "shorthand_property_identifier" => {
                NodeKind::Identifier { name: self.text(n) }
            }
            "this" => NodeKind::This,
            "string" => NodeKind::StringLit { value: self.string_value(n) },
            "template_string" => {
                let parts = self
                    .named_children(n)
                    .into_iter()
                    .filter(|c| c.kind() == "template_substitution")
                    .filter_map(|c| self.named_children(c).into_iter().next())
                    .map(|c| self.lower(c))
                    .collect();
                NodeKind::TemplateLit { parts }
            }
            "number" => NodeKind::NumberLit { raw: self.text(n) },
            "true" => NodeKind::BoolLit { value: true },
            "false" => NodeKind::BoolLit { value: false },
            "null" => NodeKind::NullLit,
            "regex" => NodeKind::RegexLit { pattern: self.text(n) },
            "array" => NodeKind::ArrayLit {
                elements: self.lower_all(self.named_children(n)),
            },
            "object" => NodeKind::ObjectLit {
                properties: self.lower_all(self.named_children(n)),
            },

            "arrow_function" => NodeKind::Function {
                name: None,
                params: self.lower_params(n),
                body: self.lower_field(n, "body"),
                is_arrow: true,
            },
            "function_expression" | "function" => NodeKind::Function {
                name: n.child_by_field_name("name").map(|c| self.text(c)),
                params: self.lower_params(n),
                body: self.lower_field(n, "body"),
                is_arrow: false,
            },
            "function_declaration"
            | "generator_function"
            | "generator_function_declaration" => NodeKind::Function {
                name: n.child_by_field_name("name").map(|c| self.text(c)),
                params: self.lower_params(n),
                body: self.lower_field(n, "body"),
                is_arrow: false,
            },

            "statement_block" => NodeKind::Block {
                statements: self.lower_all(self.named_children(n)),
            },

            "variable_declaration" => NodeKind::VariableDeclaration {
                decl_kind: DeclKind::Var,
                declarators: self.lower_declarators(n),
            },
            "lexical_declaration" => {
                let decl_kind = match n.child(0).map(|c| c.kind()) {
                    Some("const") => DeclKind::Const,
                    _ => DeclKind::Let,
                };
                NodeKind::VariableDeclaration { decl_kind, declarators: self.lower_declarators(n) }
            }
            "variable_declarator" => NodeKind::Declarator {
                name: n
                    .child_by_field_name("name")
                    .map(|c| self.text(c))
                    .unwrap_or_default(),
                init: self.lower_field(n, "value"),
            },

            "if_statement" => NodeKind::If {
                condition: self
                    .lower_field(n, "condition")
                    .unwrap_or_else(|| Box::new(self.other(n))),
                consequent: self
                    .lower_field(n, "consequence")
                    .unwrap_or_else(|| Box::new(self.other(n))),
                alternate: n.child_by_field_name("alternative").map(|alt| {
                    // else_clause wraps the actual statement
                    match self.named_children(alt).into_iter().next() {
                        Some(inner) => Box::new(self.lower(inner)),
                        None => Box::new(self.other(alt)),
                    }
                }),
            },
            "for_statement" => NodeKind::ForLoop {
                init: self.lower_field(n, "initializer"),
                condition: self.lower_field(n, "condition"),
                update: self.lower_field(n, "increment"),
                body: self
                    .lower_field(n, "body")
                    .unwrap_or_else(|| Box::new(self.other(n))),
            },
            "for_in_statement" => {
                let mut cursor = n.walk();
                let of = n.children(&mut cursor).any(|c| c.kind() == "of");
                NodeKind::ForIn {
                    left: self
                        .lower_field(n, "left")
                        .unwrap_or_else(|| Box::new(self.other(n))),
                    right: self
                        .lower_field(n, "right")
                        .unwrap_or_else(|| Box::new(self.other(n))),
                    body: self
                        .lower_field(n, "body")
                        .unwrap_or_else(|| Box::new(self.other(n))),
                    of,
                }
            }
            "while_statement" => NodeKind::While {
                condition: self
                    .lower_field(n, "condition")
                    .unwrap_or_else(|| Box::new(self.other(n))),
                body: self
                    .lower_field(n, "body")
                    .unwrap_or_else(|| Box::new(self.other(n))),
            },
            "do_statement" => NodeKind::DoWhile {
                body: self
                    .lower_field(n, "body")
                    .unwrap_or_else(|| Box::new(self.other(n))),
                condition: self
                    .lower_field(n, "condition")
                    .unwrap_or_else(|| Box::new(self.other(n))),
            },
            "switch_statement" => {
                let cases = n
                    .child_by_field_name("body")
                    .map(|b| self.lower_all(self.named_children(b)))
                    .unwrap_or_default();
                NodeKind::Switch {
                    discriminant: self
                        .lower_field(n, "value")
                        .unwrap_or_else(|| Box::new(self.other(n))),
                    cases,
                }
            }
            "switch_case" | "switch_default" => {
                let test = self.lower_field(n, "value");
                let body = self
                    .named_children(n)
                    .into_iter()
                    .filter(|c| Some(c.id()) != n.child_by_field_name("value").map(|v| v.id()))
                    .map(|c| self.lower(c))
                    .collect();
                NodeKind::SwitchCase { test, body }
            }
            "try_statement" => NodeKind::TryCatch {
                try_block: self
                    .lower_field(n, "body")
                    .unwrap_or_else(|| Box::new(self.other(n))),
                catch_block: n
                    .child_by_field_name("handler")
                    .and_then(|h| h.child_by_field_name("body"))
                    .map(|b| Box::new(self.lower(b))),
                finally_block: n.child_by_field_name("finalizer").and_then(|fin| {
                    self.named_children(fin)
                        .into_iter()
                        .find(|c| c.kind() == "statement_block")
                        .map(|b| Box::new(self.lower(b)))
                }),
            },
            "throw_statement" => NodeKind::Throw {
                value: self
                    .named_children(n)
                    .into_iter()
                    .next()
                    .map(|c| Box::new(self.lower(c)))
                    .unwrap_or_else(|| Box::new(self.other(n))),
            },
            "return_statement" => NodeKind::Return {
                value: self
                    .named_children(n)
                    .into_iter()
                    .next()
                    .map(|c| Box::new(self.lower(c))),
            },

            "class_declaration" | "class" | "abstract_class_declaration" => NodeKind::Class {
                name: n.child_by_field_name("name").map(|c| self.text(c)),
                body: n
                    .child_by_field_name("body")
                    .map(|b| self.lower_all(self.named_children(b)))
                    .unwrap_or_default(),
            },
            "method_definition" => NodeKind::Method {
                name: n
                    .child_by_field_name("name")
                    .map(|c| self.text(c))
                    .unwrap_or_default(),
                body: self.lower_field(n, "body"),
            },

            "await_expression" => NodeKind::Await {
                value: self
                    .named_children(n)
                    .into_iter()
                    .next()
                    .map(|c| Box::new(self.lower(c)))
                    .unwrap_or_else(|| Box::new(self.other(n))),
            },
            "unary_expression" => NodeKind::Unary {
                op: n
                    .child_by_field_name("operator")
                    .map(|c| self.text(c))
                    .unwrap_or_default(),
                operand: self
                    .lower_field(n, "argument")
                    .unwrap_or_else(|| Box::new(self.other(n))),
            },
            "binary_expression" => NodeKind::Binary {
                left: self
                    .lower_field(n, "left")
                    .unwrap_or_else(|| Box::new(self.other(n))),
                op: n
                    .child_by_field_name("operator")
                    .map(|c| self.text(c))
                    .unwrap_or_default(),
                right: self
                    .lower_field(n, "right")
                    .unwrap_or_else(|| Box::new(self.other(n))),
            },
            "ternary_expression" => NodeKind::Ternary {
                condition: self
                    .lower_field(n, "condition")
                    .unwrap_or_else(|| Box::new(self.other(n))),
                consequent: self
                    .lower_field(n, "consequence")
                    .unwrap_or_else(|| Box::new(self.other(n))),
                alternate: self
                    .lower_field(n, "alternative")
                    .unwrap_or_else(|| Box::new(self.other(n))),
            },

            "import_statement" => NodeKind::Import {
                source: n
                    .child_by_field_name("source")
                    .map(|s| self.string_value(s))
                    .unwrap_or_default(),
                specifiers: self.lower_import_clause(n),
            },
            "export_statement" => {
                let mut cursor = n.walk();
                let is_default = n.children(&mut cursor).any(|c| c.kind() == "default");
                let specifiers = self
                    .named_children(n)
                    .into_iter()
                    .filter(|c| c.kind() == "export_clause")
                    .flat_map(|clause| self.named_children(clause))
                    .filter(|c| c.kind() == "export_specifier")
                    .map(|spec| {
                        let local = spec
                            .child_by_field_name("name")
                            .map(|c| self.text(c))
                            .unwrap_or_default();
                        let exported = spec
                            .child_by_field_name("alias")
                            .map(|c| self.text(c))
                            .unwrap_or_else(|| local.clone());
                        Node {
                            kind: NodeKind::ExportSpecifier { local, exported },
                            span: self.span(spec),
                        }
                    })
                    .collect();
                NodeKind::Export {
                    declaration: self.lower_field(n, "declaration"),
                    specifiers,
                    is_default,
                }
            }

            // Everything else (sequence expressions, subscripts, JSX, type
            // syntax, ERROR recoveries, ...) keeps its children reachable.
            _ => self.other_kind(n),
        }
    }

    fn other(&self, n: tree_sitter::Node<'_>) -> Node {
        Node { kind: self.other_kind(n), span: self.span(n) }
    }

    fn other_kind(&self, n: tree_sitter::Node<'_>) -> NodeKind {
        NodeKind::Other {
            kind: n.kind().to_string(),
            children: self.lower_all(self.named_children(n)),
        }
    }

    fn lower_arguments(&self, n: tree_sitter::Node<'_>) -> Vec<Node> {
        match n.child_by_field_name("arguments") {
            Some(args) if args.kind() == "arguments" => self.lower_all(self.named_children(args)),
            // Tagged template: the template string is the sole argument.
            Some(args) => vec![self.lower(args)],
            None => Vec::new(),
        }
    }

    fn lower_params(&self, n: tree_sitter::Node<'_>) -> Vec<Node> {
        if let Some(params) = n.child_by_field_name("parameters") {
            return self.lower_all(self.named_children(params));
        }
        // Single-identifier arrow parameter without parentheses.
        n.child_by_field_name("parameter")
            .map(|p| vec![self.lower(p)])
            .unwrap_or_default()
    }

    fn lower_declarators(&self, n: tree_sitter::Node<'_>) -> Vec<Node> {
        self.named_children(n)
            .into_iter()
            .filter(|c| c.kind() == "variable_declarator")
            .map(|c| self.lower(c))
            .collect()
    }

    fn lower_import_clause(&self, n: tree_sitter::Node<'_>) -> Vec<Node> {
        let Some(clause) = self
            .named_children(n)
            .into_iter()
            .find(|c| c.kind() == "import_clause")
        else {
            return Vec::new();
        };

        let mut specifiers = Vec::new();
        for child in self.named_children(clause) {
            match child.kind() {
                // Default import: `import fs from 'fs'`
                "identifier" => specifiers.push(Node {
                    kind: NodeKind::ImportSpecifier { name: self.text(child), alias: None },
                    span: self.span(child),
                }),
                // Namespace import: `import * as fs from 'fs'`
                "namespace_import" => {
                    if let Some(local) = self.named_children(child).into_iter().next() {
                        specifiers.push(Node {
                            kind: NodeKind::ImportSpecifier { name: self.text(local), alias: None },
                            span: self.span(child),
                        });
                    }
                }
                "named_imports" => {
                    for spec in self.named_children(child) {
                        if spec.kind() != "import_specifier" {
                            continue;
                        }
                        let name = spec
                            .child_by_field_name("name")
                            .map(|c| self.text(c))
                            .unwrap_or_default();
                        let alias = spec.child_by_field_name("alias").map(|c| self.text(c));
                        specifiers.push(Node {
                            kind: NodeKind::ImportSpecifier { name, alias },
                            span: self.span(spec),
                        });
                    }
                }
                _ => {}
            }
        }
        specifiers
    }

    fn string_value(&self, n: tree_sitter::Node<'_>) -> String {
        let fragments: String = self
            .named_children(n)
            .into_iter()
            .filter(|c| matches!(c.kind(), "string_fragment" | "escape_sequence"))
            .map(|c| self.text(c))
            .collect();
        if !fragments.is_empty() {
            return fragments;
        }
        // Empty string literal, or a grammar without fragment nodes.
        let raw = self.text(n);
        if raw.len() >= 2 {
            raw[1..raw.len() - 1].to_string()
        } else {
            raw
        }
    }
}
