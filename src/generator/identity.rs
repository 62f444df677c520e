//! Identity enumeration: one tagged variant per derivable method.
//!
//! The identity key of a method is its base name joined with `_` to each
//! external argument label, so `login(username:password:)` becomes
//! `login_username_password`. Ordinals follow catalog order among the
//! derivable methods, starting at zero, and are the only input to the
//! variant hash.

use super::equality::{Comparison, TypeClassifier};
use super::signature;
use super::writer::SwiftWriter;
use crate::core::errors::{Error, Result};
use crate::core::{ClassDescriptor, MethodDescriptor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What to do when two methods reduce to the same identity key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Emit the colliding variants unchanged and warn
    #[default]
    Preserve,
    /// Fold type names into colliding keys, then ordinals; fail if any remain
    Disambiguate,
    /// Fail generation for the class
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityArgument<'a> {
    pub name: &'a str,
    pub type_name: &'a str,
    pub comparison: Comparison,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityVariant<'a> {
    pub ordinal: usize,
    pub key: String,
    pub method: &'a MethodDescriptor,
    pub arguments: Vec<IdentityArgument<'a>>,
}

impl IdentityVariant<'_> {
    /// `.key(arg1, arg2)` built from the method's parameter names.
    pub fn construction(&self) -> String {
        if self.arguments.is_empty() {
            format!(".{}", self.key)
        } else {
            let names: Vec<&str> = self.arguments.iter().map(|arg| arg.name).collect();
            format!(".{}({})", self.key, names.join(", "))
        }
    }

    /// Case declaration inside the identity enum.
    pub fn case_declaration(&self) -> String {
        if self.arguments.is_empty() {
            format!("case {}", self.key)
        } else {
            let types: Vec<&str> = self.arguments.iter().map(|arg| arg.type_name).collect();
            format!("case {}({})", self.key, types.join(", "))
        }
    }
}

/// Whether a method can be faked at all.
pub fn is_derivable(method: &MethodDescriptor) -> bool {
    if method.base_name().is_empty() {
        return false;
    }
    if method.external_argument_names.len() != method.argument_types.len() {
        return false;
    }
    if method.kind.is_property() {
        return method.result_type().is_some() && method.arity() == 0;
    }
    true
}

/// Identity key for `method`, or `None` when it has no derivable base name.
pub fn identity_key(method: &MethodDescriptor) -> Option<String> {
    if !is_derivable(method) {
        return None;
    }
    let mut key = method.base_name().to_string();
    for label in &method.external_argument_names {
        key.push('_');
        key.push_str(label);
    }
    Some(key)
}

/// Reduce a type name to identifier-safe tokens: `[String: Int]?` becomes
/// `Dictionary_String_Int_Optional` and `[Int]` becomes `Array_Int`.
fn type_token(type_name: &str) -> String {
    let chars: Vec<char> = type_name.chars().collect();
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    for (index, &ch) in chars.iter().enumerate() {
        if ch.is_alphanumeric() || ch == '_' {
            current.push(ch);
            continue;
        }
        if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
        let marker = match ch {
            '[' if is_dictionary(&chars[index + 1..]) => "Dictionary",
            '[' => "Array",
            '<' => "Of",
            '>' if index > 0 && chars[index - 1] == '-' => "To",
            '?' => "Optional",
            '!' => "Unwrapped",
            _ => continue,
        };
        tokens.push(marker.to_string());
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens.join("_")
}

/// Whether the bracket body starting at `rest` holds a top-level `:`.
fn is_dictionary(rest: &[char]) -> bool {
    let mut depth = 0usize;
    for &ch in rest {
        match ch {
            '[' | '<' | '(' => depth += 1,
            ']' if depth == 0 => return false,
            ']' | '>' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => return true,
            _ => {}
        }
    }
    false
}

/// Suffix appended to a colliding key: the argument type tokens, or the
/// result type for a method without arguments.
fn disambiguation_suffix(variant: &IdentityVariant<'_>) -> String {
    let tokens: Vec<String> = variant
        .arguments
        .iter()
        .map(|arg| type_token(arg.type_name))
        .filter(|token| !token.is_empty())
        .collect();
    if !tokens.is_empty() {
        return tokens.join("_");
    }
    variant
        .method
        .result_type()
        .map(type_token)
        .filter(|token| !token.is_empty())
        .unwrap_or_else(|| "Void".to_string())
}

/// The derivable variants of one class, in ordinal order.
#[derive(Debug, Clone)]
pub struct IdentityCatalog<'a> {
    variants: Vec<IdentityVariant<'a>>,
}

impl<'a> IdentityCatalog<'a> {
    pub fn build(
        class: &'a ClassDescriptor,
        classifier: &TypeClassifier,
        policy: CollisionPolicy,
    ) -> Result<Self> {
        let variants = class
            .methods
            .iter()
            .filter_map(|method| match identity_key(method) {
                Some(key) => Some((key, method)),
                None => {
                    log::debug!(
                        "Skipping `{}` in {}: no derivable identity",
                        method.name,
                        class.class_name
                    );
                    None
                }
            })
            .enumerate()
            .map(|(ordinal, (key, method))| IdentityVariant {
                ordinal,
                key,
                method,
                arguments: arguments_for(method, classifier),
            })
            .collect();

        let mut catalog = Self { variants };
        catalog.resolve_collisions(&class.class_name, policy)?;
        Ok(catalog)
    }

    fn collisions(&self) -> BTreeMap<String, Vec<usize>> {
        let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (index, variant) in self.variants.iter().enumerate() {
            groups.entry(variant.key.clone()).or_default().push(index);
        }
        groups.retain(|_, indices| indices.len() > 1);
        groups
    }

    fn describe(&self, indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .map(|&i| signature::describe(self.variants[i].method))
            .collect()
    }

    fn rename(&mut self, indices: &[usize], suffix: impl Fn(&IdentityVariant<'a>) -> String) {
        for &i in indices {
            let tail = suffix(&self.variants[i]);
            let variant = &mut self.variants[i];
            variant.key = format!("{}_{}", variant.key, tail);
        }
    }

    fn keys(&self, indices: &[usize]) -> String {
        indices
            .iter()
            .map(|&i| format!("`{}`", self.variants[i].key))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn resolve_collisions(&mut self, class_name: &str, policy: CollisionPolicy) -> Result<()> {
        match policy {
            CollisionPolicy::Preserve => {
                for (key, indices) in self.collisions() {
                    log::warn!(
                        "{}: identity `{}` is shared by {}; the generated enum will not compile",
                        class_name,
                        key,
                        self.describe(&indices).join(", ")
                    );
                }
            }
            CollisionPolicy::Disambiguate => {
                for (key, indices) in self.collisions() {
                    self.rename(&indices, disambiguation_suffix);
                    log::info!(
                        "{}: identity `{}` renamed to {}",
                        class_name,
                        key,
                        self.keys(&indices)
                    );
                }
                for (key, indices) in self.collisions() {
                    self.rename(&indices, |variant| variant.ordinal.to_string());
                    log::warn!(
                        "{}: identity `{}` is still shared after folding types; renamed to {}",
                        class_name,
                        key,
                        self.keys(&indices)
                    );
                }
                self.reject_collisions(class_name)?;
            }
            CollisionPolicy::Reject => self.reject_collisions(class_name)?,
        }
        Ok(())
    }

    fn reject_collisions(&self, class_name: &str) -> Result<()> {
        match self.collisions().into_iter().next() {
            Some((key, indices)) => Err(Error::IdentityCollision {
                class_name: class_name.to_string(),
                key,
                methods: self.describe(&indices),
            }),
            None => Ok(()),
        }
    }

    pub fn variants(&self) -> &[IdentityVariant<'a>] {
        &self.variants
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn uses_reference_comparison(&self) -> bool {
        self.variants.iter().any(|variant| {
            variant
                .arguments
                .iter()
                .any(|arg| arg.comparison == Comparison::Reference)
        })
    }
}

fn arguments_for<'a>(
    method: &'a MethodDescriptor,
    classifier: &TypeClassifier,
) -> Vec<IdentityArgument<'a>> {
    method
        .parameter_names()
        .into_iter()
        .zip(&method.argument_types)
        .enumerate()
        .map(|(index, (name, type_name))| IdentityArgument {
            name,
            type_name: type_name.as_str(),
            comparison: classifier.comparison_for(method, index),
        })
        .collect()
}

/// Emit the identity enum with its ordinal and hash.
pub fn render_enum(w: &mut SwiftWriter, enum_name: &str, catalog: &IdentityCatalog<'_>) {
    w.open(format!("enum {}: Equatable, Hashable", enum_name));
    for variant in catalog.variants() {
        w.line(variant.case_declaration());
    }
    w.blank();
    w.block("var ordinal: Int", |w| {
        w.switch("self", |w| {
            for variant in catalog.variants() {
                w.line(format!("case .{}:", variant.key));
                w.indented(|w| {
                    w.line(format!("return {}", variant.ordinal));
                });
            }
        });
    });
    w.blank();
    w.block("func hash(into hasher: inout Hasher)", |w| {
        w.line("hasher.combine(ordinal)");
    });
    w.close();
}
