//! Programmed return values, scoped per instance or shared by the type.
//!
//! Instance bindings are an ordered list scanned front to back, so the
//! earliest binding for an identity wins. Shared bindings live in a map keyed
//! by the stub, so the latest write for an identity wins. A faked member that
//! must produce a value and finds no binding stops with `fatalError`.

use super::recorder::CallScope;
use super::writer::SwiftWriter;
use super::TypeNames;

const INSTANCE_BINDINGS: &str = "stubs";
const SHARED_BINDINGS: &str = "classStubs";

/// The `andReturn` helpers returned by `stub(_:)`.
pub fn render_return_types(w: &mut SwiftWriter, names: &TypeNames) {
    w.block(format!("struct {}<T>", names.instance_return), |w| {
        w.line(format!("var fake: {}", names.fake));
        w.line(format!("var stub: {}<T>", names.stub));
        w.blank();
        w.block("func andReturn(_ value: T)", |w| {
            w.line("fake.setReturnFor(stub: stub, value: value)");
        });
    });
    w.blank();
    w.block(format!("struct {}<T>", names.shared_return), |w| {
        w.line(format!("var stub: {}<T>", names.stub));
        w.blank();
        w.block("func andReturn(_ value: T)", |w| {
            w.line(format!("{}.setReturnFor(stub: stub, value: value)", names.fake));
        });
    });
}

pub fn render_binding_storage(w: &mut SwiftWriter) {
    w.line(format!("private var {} = [(Any, Any)]()", INSTANCE_BINDINGS));
    w.line(format!(
        "private static var {} = [AnyHashable: Any]()",
        SHARED_BINDINGS
    ));
}

/// `returnFor`/`setReturnFor` for both scopes.
pub fn render_binding_methods(w: &mut SwiftWriter, names: &TypeNames) {
    w.block(
        format!("func returnFor<T>(stub: {}<T>) -> Any?", names.stub),
        |w| {
            w.block(format!("for (candidate, value) in {}", INSTANCE_BINDINGS), |w| {
                w.block(
                    format!(
                        "if let candidate = candidate as? {}<T>, candidate == stub",
                        names.stub
                    ),
                    |w| {
                        w.line("return value");
                    },
                );
            });
            w.line("return nil");
        },
    );
    w.blank();
    w.block(
        format!(
            "func setReturnFor<T>(stub: {}<T>, value: Any)",
            names.stub
        ),
        |w| {
            w.line(format!("{}.append((stub, value))", INSTANCE_BINDINGS));
        },
    );
    w.blank();
    w.block(
        format!("class func returnFor<T>(stub: {}<T>) -> Any?", names.stub),
        |w| {
            w.line(format!("return {}[stub]", SHARED_BINDINGS));
        },
    );
    w.blank();
    w.block(
        format!(
            "class func setReturnFor<T>(stub: {}<T>, value: Any)",
            names.stub
        ),
        |w| {
            w.line(format!("{}[stub] = value", SHARED_BINDINGS));
        },
    );
}

/// `stub(_:)` entry points returning the `andReturn` helpers.
pub fn render_stub_entry_points(w: &mut SwiftWriter, names: &TypeNames) {
    w.block(
        format!(
            "func stub<T>(_ stub: {}<T>) -> {}<T>",
            names.stub, names.instance_return
        ),
        |w| {
            w.line(format!(
                "return {}<T>(fake: self, stub: stub)",
                names.instance_return
            ));
        },
    );
    w.blank();
    w.block(
        format!(
            "class func stub<T>(_ stub: {}<T>) -> {}<T>",
            names.stub, names.shared_return
        ),
        |w| {
            w.line(format!("return {}<T>(stub: stub)", names.shared_return));
        },
    );
}

/// Clears the type-shared log and bindings. Nothing calls this implicitly.
pub fn render_reset(w: &mut SwiftWriter) {
    w.block("class func resetSharedState()", |w| {
        w.line(format!("{}.removeAll()", SHARED_BINDINGS));
        w.line(format!("{}.removeAll()", CallScope::Shared.log_name()));
    });
}

/// Body tail of a faked member that produces `result_type`.
///
/// `returnFor` resolves to the instance or class helper by context, so the
/// same text serves both scopes.
pub fn render_lookup(w: &mut SwiftWriter, result_type: &str) {
    w.block("guard let value = returnFor(stub: stub) else", |w| {
        w.line("fatalError(\"No return value stubbed for \\(stub.method)\")");
    });
    w.line(format!("return value as! {}", result_type));
}
