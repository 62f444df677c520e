//! Call logs and the matching query over them.
//!
//! Every fake carries two append-only logs: one per instance and one shared
//! by the type. Entries are stored as `Any`, so a query only sees entries
//! whose stub type, including the result parameter, is exactly the queried one.

use super::writer::SwiftWriter;
use super::TypeNames;
use crate::core::MethodKind;

/// Storage a faked member records into and reads bindings from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallScope {
    Instance,
    Shared,
}

impl CallScope {
    pub fn of(kind: MethodKind) -> Self {
        if kind.is_type_level() {
            CallScope::Shared
        } else {
            CallScope::Instance
        }
    }

    pub fn log_name(&self) -> &'static str {
        match self {
            CallScope::Instance => "methodCalls",
            CallScope::Shared => "classMethodCalls",
        }
    }

    /// Declaration prefix for helpers operating on this scope.
    pub fn helper_prefix(&self) -> &'static str {
        match self {
            CallScope::Instance => "",
            CallScope::Shared => "class ",
        }
    }

    pub const ALL: [CallScope; 2] = [CallScope::Instance, CallScope::Shared];
}

pub fn render_log_storage(w: &mut SwiftWriter) {
    w.line(format!("private var {} = [Any]()", CallScope::Instance.log_name()));
    w.line(format!(
        "private static var {} = [Any]()",
        CallScope::Shared.log_name()
    ));
}

pub fn render_record(w: &mut SwiftWriter, scope: CallScope) {
    w.line(format!("{}.append(stub)", scope.log_name()));
}

fn render_matching(w: &mut SwiftWriter, names: &TypeNames, scope: CallScope) {
    w.block(
        format!(
            "{}func matchingMethods<T>(_ stub: {}<T>) -> [Any]",
            scope.helper_prefix(),
            names.stub
        ),
        |w| {
            w.line(format!("return {}.filter {{ call in", scope.log_name()));
            w.indented(|w| {
                w.block(
                    format!("guard let recorded = call as? {}<T> else", names.stub),
                    |w| {
                        w.line("return false");
                    },
                );
                w.line("return recorded == stub");
            });
            w.line("}");
        },
    );
}

fn render_did_call(w: &mut SwiftWriter, names: &TypeNames, scope: CallScope) {
    w.block(
        format!(
            "{}func didCall<T>(method: {}<T>) -> Bool",
            scope.helper_prefix(),
            names.stub
        ),
        |w| {
            w.line("return !matchingMethods(method).isEmpty");
        },
    );
}

/// `matchingMethods` and `didCall` for both scopes, separated by blank lines.
pub fn render_queries(w: &mut SwiftWriter, names: &TypeNames) {
    for scope in CallScope::ALL {
        render_matching(w, names, scope);
        w.blank();
    }
    render_did_call(w, names, CallScope::Instance);
    w.blank();
    render_did_call(w, names, CallScope::Shared);
}
