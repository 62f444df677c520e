//! Reader for `sourcekitten structure` output.
//!
//! Class and protocol declarations become [`ClassDescriptor`]s, including
//! nested ones. Members that a subclass or conforming type cannot provide
//! (`private`, `fileprivate`, initializers, subscripts) are left out.

use crate::core::errors::{Error, Result};
use crate::core::{Catalog, ClassDescriptor, ClassKind, MethodDescriptor, MethodKind};
use serde::Deserialize;

const DECL_CLASS: &str = "source.lang.swift.decl.class";
const DECL_PROTOCOL: &str = "source.lang.swift.decl.protocol";
const DECL_PARAMETER: &str = "source.lang.swift.decl.var.parameter";

const HIDDEN_ACCESSIBILITY: &[&str] = &[
    "source.lang.swift.accessibility.private",
    "source.lang.swift.accessibility.fileprivate",
];

#[derive(Debug, Clone, Default, Deserialize)]
struct Node {
    #[serde(rename = "key.kind", default)]
    kind: Option<String>,
    #[serde(rename = "key.name", default)]
    name: Option<String>,
    #[serde(rename = "key.typename", default)]
    typename: Option<String>,
    #[serde(rename = "key.accessibility", default)]
    accessibility: Option<String>,
    #[serde(rename = "key.substructure", default)]
    substructure: Vec<Node>,
}

impl Node {
    fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or_default()
    }

    fn is_hidden(&self) -> bool {
        self.accessibility
            .as_deref()
            .is_some_and(|access| HIDDEN_ACCESSIBILITY.contains(&access))
    }
}

fn member_kind(kind: &str) -> Option<MethodKind> {
    static KIND_MAP: &[(&str, MethodKind)] = &[
        ("source.lang.swift.decl.function.method.instance", MethodKind::Instance),
        ("source.lang.swift.decl.function.method.class", MethodKind::Class),
        ("source.lang.swift.decl.function.method.static", MethodKind::Static),
        ("source.lang.swift.decl.var.instance", MethodKind::InstanceProperty),
        ("source.lang.swift.decl.var.class", MethodKind::StaticProperty),
        ("source.lang.swift.decl.var.static", MethodKind::StaticProperty),
        ("source.lang.swift.expr.call", MethodKind::Call),
    ];

    KIND_MAP
        .iter()
        .find(|(name, _)| *name == kind)
        .map(|(_, kind)| *kind)
}

/// External labels from a selector: `move(_:to:)` gives `["_", "to"]`.
pub fn selector_labels(selector: &str) -> Vec<String> {
    let Some(open) = selector.find('(') else {
        return Vec::new();
    };
    let inner = selector[open + 1..].trim_end_matches(')');
    inner
        .split(':')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_initializer(name: &str) -> bool {
    name == "deinit" || name == "init" || name.starts_with("init(") || name.starts_with("subscript")
}

fn member(node: &Node) -> Option<MethodDescriptor> {
    let kind = member_kind(node.kind())?;
    let name = node.name.as_deref()?;
    if node.is_hidden() || is_initializer(name) {
        log::debug!("Skipping member `{}`", name);
        return None;
    }

    let parameters: Vec<&Node> = node
        .substructure
        .iter()
        .filter(|child| child.kind() == DECL_PARAMETER)
        .collect();
    let labels = if kind.is_property() {
        Vec::new()
    } else {
        selector_labels(name)
    };

    let mut method = MethodDescriptor::new(name, kind);
    method.external_argument_names = labels;
    method.argument_types = parameters
        .iter()
        .map(|param| param.typename.clone().unwrap_or_default())
        .collect();

    let internal: Vec<String> = parameters
        .iter()
        .zip(&method.external_argument_names)
        .map(|(param, label)| param.name.clone().unwrap_or_else(|| label.clone()))
        .collect();
    if internal.len() == method.external_argument_names.len()
        && internal != method.external_argument_names
    {
        method.argument_names = Some(internal);
    }

    method.return_type = node.typename.clone();
    Some(method)
}

fn collect_classes(nodes: &[Node], classes: &mut Vec<ClassDescriptor>) {
    for node in nodes {
        let class_kind = match node.kind() {
            DECL_CLASS => Some(ClassKind::Class),
            DECL_PROTOCOL => Some(ClassKind::Protocol),
            _ => None,
        };

        if let (Some(class_kind), Some(name)) = (class_kind, node.name.as_deref()) {
            let mut class = ClassDescriptor::new(name, class_kind);
            class.methods = node.substructure.iter().filter_map(member).collect();
            classes.push(class);
        }

        collect_classes(&node.substructure, classes);
    }
}

pub fn parse_structure(contents: &str) -> Result<Catalog> {
    let value: serde_json::Value = serde_json::from_str(contents)?;
    if !value.is_object() {
        return Err(Error::catalog(
            "sourcekitten structure output must be a JSON object",
            None,
        ));
    }
    let root: Node = serde_json::from_value(value)?;

    let mut classes = Vec::new();
    collect_classes(&root.substructure, &mut classes);
    Ok(Catalog::new(classes))
}
