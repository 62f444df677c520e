//! Equality predicate for the identity enum.
//!
//! Two identities are equal when they are the same variant and every
//! positional argument compares equal. Each argument is compared either with
//! `==` or, for opaque object references, by identity through a generated
//! `checkEquality` helper.

use super::identity::{IdentityCatalog, IdentityVariant};
use super::writer::SwiftWriter;
use crate::core::errors::Result;
use crate::core::{ArgumentCategory, MethodDescriptor};
use regex::Regex;

pub const EQUALITY_HELPER: &str = "checkEquality";

/// Patterns that mark a type name as reference-only when no explicit
/// category is given.
pub const DEFAULT_REFERENCE_PATTERNS: &[&str] = &["AnyObject"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Value,
    Reference,
}

impl From<ArgumentCategory> for Comparison {
    fn from(category: ArgumentCategory) -> Self {
        match category {
            ArgumentCategory::Value => Comparison::Value,
            ArgumentCategory::Reference => Comparison::Reference,
        }
    }
}

/// Chooses the comparison rule for an argument.
#[derive(Debug, Clone)]
pub struct TypeClassifier {
    reference_patterns: Vec<Regex>,
}

impl TypeClassifier {
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let reference_patterns = patterns
            .into_iter()
            .map(|pattern| Regex::new(pattern.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { reference_patterns })
    }

    pub fn classify(&self, type_name: &str) -> Comparison {
        if self
            .reference_patterns
            .iter()
            .any(|pattern| pattern.is_match(type_name))
        {
            Comparison::Reference
        } else {
            Comparison::Value
        }
    }

    /// Explicit categories on the descriptor win over type-name matching.
    pub fn comparison_for(&self, method: &MethodDescriptor, index: usize) -> Comparison {
        match method.category_at(index) {
            Some(category) => category.into(),
            None => method
                .argument_types
                .get(index)
                .map(|type_name| self.classify(type_name))
                .unwrap_or(Comparison::Value),
        }
    }
}

impl Default for TypeClassifier {
    fn default() -> Self {
        Self {
            reference_patterns: DEFAULT_REFERENCE_PATTERNS
                .iter()
                .map(|pattern| Regex::new(pattern).expect("default reference pattern is valid"))
                .collect(),
        }
    }
}

fn bindings(prefix: char, count: usize) -> String {
    (1..=count)
        .map(|i| format!("let {}{}", prefix, i))
        .collect::<Vec<_>>()
        .join(", ")
}

fn pattern(key: &str, prefix: char, count: usize) -> String {
    if count == 0 {
        format!(".{}", key)
    } else {
        format!(".{}({})", key, bindings(prefix, count))
    }
}

fn argument_check(position: usize, comparison: Comparison) -> String {
    match comparison {
        Comparison::Value => format!("a{0} == b{0}", position),
        Comparison::Reference => format!("{}(a{1}, b: b{1})", EQUALITY_HELPER, position),
    }
}

fn render_matching_case(w: &mut SwiftWriter, variant: &IdentityVariant<'_>) {
    let count = variant.arguments.len();
    w.line(format!(
        "case ({}, {}):",
        pattern(&variant.key, 'a', count),
        pattern(&variant.key, 'b', count)
    ));
    let body = if count == 0 {
        "true".to_string()
    } else {
        variant
            .arguments
            .iter()
            .enumerate()
            .map(|(i, argument)| argument_check(i + 1, argument.comparison))
            .collect::<Vec<_>>()
            .join(" && ")
    };
    w.indented(|w| {
        w.line(format!("return {}", body));
    });
}

/// Emit the `==` extension for the identity enum.
pub fn render_equality(w: &mut SwiftWriter, enum_name: &str, catalog: &IdentityCatalog<'_>) {
    w.open(format!("extension {}", enum_name));
    w.block(
        format!("static func == (lhs: {0}, rhs: {0}) -> Bool", enum_name),
        |w| {
            w.switch("(lhs, rhs)", |w| {
                for variant in catalog.variants() {
                    render_matching_case(w, variant);
                }

                // Payloads differ per variant, so mismatched pairs are listed explicitly.
                if catalog.len() > 1 {
                    w.blank();
                    for variant in catalog.variants() {
                        w.line(format!("case (.{}, _):", variant.key));
                        w.indented(|w| {
                            w.line("return false");
                        });
                    }
                }
            });
        },
    );

    if catalog.uses_reference_comparison() {
        w.blank();
        w.block(
            format!(
                "private static func {}(_ lhs: AnyObject?, b rhs: AnyObject?) -> Bool",
                EQUALITY_HELPER
            ),
            |w| {
                w.line("return lhs === rhs");
            },
        );
    }
    w.close();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ClassDescriptor, ClassKind};
    use crate::generator::identity::CollisionPolicy;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn render(class: &ClassDescriptor, classifier: &TypeClassifier) -> String {
        let catalog = IdentityCatalog::build(class, classifier, CollisionPolicy::Preserve).unwrap();
        let mut w = SwiftWriter::new(4);
        render_equality(&mut w, &class.enum_name(), &catalog);
        w.finish()
    }

    #[test]
    fn default_classifier_matches_any_object() {
        let classifier = TypeClassifier::default();
        assert_eq!(classifier.classify("AnyObject"), Comparison::Reference);
        assert_eq!(classifier.classify("AnyObject?"), Comparison::Reference);
        assert_eq!(classifier.classify("String"), Comparison::Value);
    }

    #[test]
    fn explicit_category_overrides_type_name() {
        let classifier = TypeClassifier::default();
        let method = MethodDescriptor::instance("attach")
            .argument("delegate", "SessionDelegate")
            .argument("owner", "AnyObject")
            .categories(vec![ArgumentCategory::Reference, ArgumentCategory::Value]);
        assert_eq!(classifier.comparison_for(&method, 0), Comparison::Reference);
        assert_eq!(classifier.comparison_for(&method, 1), Comparison::Value);
    }

    #[test]
    fn custom_patterns_are_regexes() {
        let classifier = TypeClassifier::new(["Delegate$", "^UI"]).unwrap();
        assert_eq!(classifier.classify("SessionDelegate"), Comparison::Reference);
        assert_eq!(classifier.classify("UIView"), Comparison::Reference);
        assert_eq!(classifier.classify("DelegateKind"), Comparison::Value);
        assert!(TypeClassifier::new(["("]).is_err());
    }

    #[test]
    fn single_variant_has_no_fallback() {
        let class = ClassDescriptor::new("LoginService", ClassKind::Class).with_method(
            MethodDescriptor::instance("login")
                .argument("username", "String")
                .argument("password", "String")
                .returns("Bool"),
        );
        assert_eq!(
            render(&class, &TypeClassifier::default()),
            indoc! {"
                extension LoginServiceMethod {
                    static func == (lhs: LoginServiceMethod, rhs: LoginServiceMethod) -> Bool {
                        switch (lhs, rhs) {
                        case (.login_username_password(let a1, let a2), .login_username_password(let b1, let b2)):
                            return a1 == b1 && a2 == b2
                        }
                    }
                }
            "}
        );
    }

    #[test]
    fn reference_arguments_use_identity_helper() {
        let class = ClassDescriptor::new("Notifier", ClassKind::Protocol)
            .with_method(
                MethodDescriptor::instance("register")
                    .argument("observer", "AnyObject")
                    .argument("name", "String"),
            )
            .with_method(MethodDescriptor::instance("reset"));
        assert_eq!(
            render(&class, &TypeClassifier::default()),
            indoc! {"
                extension NotifierMethod {
                    static func == (lhs: NotifierMethod, rhs: NotifierMethod) -> Bool {
                        switch (lhs, rhs) {
                        case (.register_observer_name(let a1, let a2), .register_observer_name(let b1, let b2)):
                            return checkEquality(a1, b: b1) && a2 == b2
                        case (.reset, .reset):
                            return true

                        case (.register_observer_name, _):
                            return false
                        case (.reset, _):
                            return false
                        }
                    }

                    private static func checkEquality(_ lhs: AnyObject?, b rhs: AnyObject?) -> Bool {
                        return lhs === rhs
                    }
                }
            "}
        );
    }
}
