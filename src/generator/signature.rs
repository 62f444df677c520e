//! Swift declaration text for faked members and their stub factories.

use crate::core::{ClassKind, MethodDescriptor};

/// `label name: Type` pairs, collapsing to `name: Type` when label and name agree.
pub fn parameter_list(method: &MethodDescriptor) -> String {
    method
        .external_argument_names
        .iter()
        .zip(method.parameter_names())
        .zip(&method.argument_types)
        .map(|((label, name), type_name)| {
            if label == name {
                format!("{}: {}", label, type_name)
            } else {
                format!("{} {}: {}", label, name, type_name)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Human-readable signature used in diagnostics.
pub fn describe(method: &MethodDescriptor) -> String {
    let mut text = format!("{}({})", method.base_name(), parameter_list(method));
    if let Some(result) = method.result_type() {
        text.push_str(" -> ");
        text.push_str(result);
    }
    text
}

/// Header of the faked member, without the opening brace.
pub fn declaration(method: &MethodDescriptor, class_kind: ClassKind) -> String {
    let mut decl = String::new();
    if class_kind == ClassKind::Class && method.kind.is_overridable() {
        decl.push_str("override ");
    }
    decl.push_str(method.kind.keyword());
    decl.push(' ');
    decl.push_str(method.base_name());

    if method.kind.is_property() {
        if let Some(result) = method.result_type() {
            decl.push_str(": ");
            decl.push_str(result);
        }
        return decl;
    }

    decl.push('(');
    decl.push_str(&parameter_list(method));
    decl.push(')');
    if let Some(result) = method.result_type() {
        decl.push_str(" -> ");
        decl.push_str(result);
    }
    decl
}
