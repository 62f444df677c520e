//! Stub descriptors: an identity paired with a phantom result type.
//!
//! `<Class>Stub<T>` compares and hashes through its identity only, so `T`
//! never takes part in equality. Factories live on the non-generic
//! `<Class>Stubs` namespace and mirror each faked member's name, labels and
//! argument types.

use super::identity::{IdentityCatalog, IdentityVariant};
use super::signature;
use super::writer::SwiftWriter;
use super::TypeNames;

/// Result type parameter for a member's stub.
pub fn stub_result_type(variant: &IdentityVariant<'_>) -> String {
    variant
        .method
        .result_type()
        .unwrap_or("Any")
        .to_string()
}

/// `Stub<Result>(method: .key(args))`
pub fn stub_construction(names: &TypeNames, variant: &IdentityVariant<'_>) -> String {
    format!(
        "{}<{}>(method: {})",
        names.stub,
        stub_result_type(variant),
        variant.construction()
    )
}

pub fn render_stub_type(w: &mut SwiftWriter, names: &TypeNames) {
    w.open(format!("struct {}<T>: Hashable", names.stub));
    w.line(format!("var method: {}", names.identity));
    w.blank();
    w.block(format!("init(method: {})", names.identity), |w| {
        w.line("self.method = method");
    });
    w.blank();
    w.block("func hash(into hasher: inout Hasher)", |w| {
        w.line("hasher.combine(method)");
    });
    w.blank();
    w.block(
        format!(
            "static func == (lhs: {0}<T>, rhs: {0}<T>) -> Bool",
            names.stub
        ),
        |w| {
            w.line("return lhs.method == rhs.method");
        },
    );
    w.close();
}

fn factory_header(names: &TypeNames, variant: &IdentityVariant<'_>) -> String {
    let method = variant.method;
    let stub_type = format!("{}<{}>", names.stub, stub_result_type(variant));
    if method.kind.is_property() {
        format!("static var {}: {}", method.base_name(), stub_type)
    } else {
        format!(
            "static func {}({}) -> {}",
            method.base_name(),
            signature::parameter_list(method),
            stub_type
        )
    }
}

/// Emit the factory namespace test authors use to name calls.
pub fn render_factories(w: &mut SwiftWriter, names: &TypeNames, catalog: &IdentityCatalog<'_>) {
    w.open(format!("enum {}", names.factories));
    for (index, variant) in catalog.variants().iter().enumerate() {
        if index > 0 {
            w.blank();
        }
        w.block(factory_header(names, variant), |w| {
            w.line(format!("return {}", stub_construction(names, variant)));
        });
    }
    w.close();
}
