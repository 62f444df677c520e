//! Structural catalog model consumed by the fake generator.
//!
//! A [`Catalog`] is an ordered list of [`ClassDescriptor`]s, each holding an
//! ordered list of [`MethodDescriptor`]s. Order is significant everywhere:
//! it decides identity ordinals and the order in which fakes are emitted.

pub mod errors;

use serde::{Deserialize, Serialize};

/// Declaration kind of a faked member.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    /// `class func`
    Class,
    /// `func`
    #[default]
    Instance,
    /// `static func`
    Static,
    /// `var` on an instance
    InstanceProperty,
    /// `static var`
    StaticProperty,
    /// Zero-argument invocable member, faked as an instance `func`
    Call,
}

impl MethodKind {
    /// Swift declaration keyword used for the faked member.
    pub fn keyword(&self) -> &'static str {
        match self {
            MethodKind::Class => "class func",
            MethodKind::Instance | MethodKind::Call => "func",
            MethodKind::Static => "static func",
            MethodKind::InstanceProperty => "var",
            MethodKind::StaticProperty => "static var",
        }
    }

    pub fn is_property(&self) -> bool {
        matches!(
            self,
            MethodKind::InstanceProperty | MethodKind::StaticProperty
        )
    }

    /// Type-level members record into and read from the state shared by the type.
    pub fn is_type_level(&self) -> bool {
        matches!(
            self,
            MethodKind::Class | MethodKind::Static | MethodKind::StaticProperty
        )
    }

    /// `static` members are implicitly final and can never carry `override`.
    pub fn is_overridable(&self) -> bool {
        !matches!(self, MethodKind::Static | MethodKind::StaticProperty)
    }
}

/// Whether the faked type is subclassed or conformed to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    #[default]
    Class,
    Protocol,
}

/// Explicit comparison category for one argument.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentCategory {
    /// Compared with `==`
    Value,
    /// Compared by object identity
    Reference,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// Base identifier, or a full selector such as `login(username:password:)`.
    pub name: String,
    #[serde(default)]
    pub external_argument_names: Vec<String>,
    /// Internal parameter names; the external labels are used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument_names: Option<Vec<String>>,
    #[serde(default)]
    pub argument_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument_categories: Option<Vec<ArgumentCategory>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    #[serde(default)]
    pub kind: MethodKind,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>, kind: MethodKind) -> Self {
        Self {
            name: name.into(),
            external_argument_names: Vec::new(),
            argument_names: None,
            argument_types: Vec::new(),
            argument_categories: None,
            return_type: None,
            kind,
        }
    }

    pub fn instance(name: impl Into<String>) -> Self {
        Self::new(name, MethodKind::Instance)
    }

    pub fn class_method(name: impl Into<String>) -> Self {
        Self::new(name, MethodKind::Class)
    }

    /// Append an argument whose internal name equals its external label.
    pub fn argument(mut self, label: impl Into<String>, type_name: impl Into<String>) -> Self {
        let label = label.into();
        if let Some(names) = self.argument_names.as_mut() {
            names.push(label.clone());
        }
        self.external_argument_names.push(label);
        self.argument_types.push(type_name.into());
        self
    }

    /// Append an argument with distinct external label and internal name.
    pub fn named_argument(
        mut self,
        label: impl Into<String>,
        name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        let mut names = self
            .argument_names
            .take()
            .unwrap_or_else(|| self.external_argument_names.clone());
        names.push(name.into());
        self.argument_names = Some(names);
        self.external_argument_names.push(label.into());
        self.argument_types.push(type_name.into());
        self
    }

    pub fn categories(mut self, categories: Vec<ArgumentCategory>) -> Self {
        self.argument_categories = Some(categories);
        self
    }

    pub fn returns(mut self, type_name: impl Into<String>) -> Self {
        self.return_type = Some(type_name.into());
        self
    }

    /// Identifier before the parameter list, trimmed. Empty when underivable.
    pub fn base_name(&self) -> &str {
        let end = self.name.find('(').unwrap_or(self.name.len());
        self.name[..end].trim()
    }

    /// Names bound inside generated bodies, one per argument.
    pub fn parameter_names(&self) -> Vec<&str> {
        match &self.argument_names {
            Some(names) if names.len() == self.argument_types.len() => {
                names.iter().map(String::as_str).collect()
            }
            _ => self
                .external_argument_names
                .iter()
                .map(String::as_str)
                .collect(),
        }
    }

    pub fn category_at(&self, index: usize) -> Option<ArgumentCategory> {
        self.argument_categories
            .as_ref()
            .and_then(|categories| categories.get(index).copied())
    }

    /// Declared result type; `Void`, `()` and blank declarations produce no value.
    pub fn result_type(&self) -> Option<&str> {
        self.return_type
            .as_deref()
            .map(str::trim)
            .filter(|ty| !ty.is_empty() && *ty != "Void" && *ty != "()")
    }

    pub fn arity(&self) -> usize {
        self.argument_types.len()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassDescriptor {
    pub class_name: String,
    #[serde(default)]
    pub class_kind: ClassKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_name: Option<String>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl ClassDescriptor {
    pub fn new(class_name: impl Into<String>, class_kind: ClassKind) -> Self {
        Self {
            class_name: class_name.into(),
            class_kind,
            enum_name: None,
            methods: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// Name of the generated identity enum, `<ClassName>Method` unless overridden.
    pub fn enum_name(&self) -> String {
        match self.enum_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => format!("{}Method", self.class_name),
        }
    }
}

/// Ordered class descriptors produced by a catalog reader.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Catalog {
    #[serde(default)]
    pub classes: Vec<ClassDescriptor>,
}

impl Catalog {
    pub fn new(classes: Vec<ClassDescriptor>) -> Self {
        Self { classes }
    }

    pub fn method_count(&self) -> usize {
        self.classes.iter().map(|class| class.methods.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_strips_selector() {
        let method = MethodDescriptor::instance("login(username:password:)");
        assert_eq!(method.base_name(), "login");

        let bare = MethodDescriptor::instance("logout");
        assert_eq!(bare.base_name(), "logout");
    }

    #[test]
    fn base_name_is_empty_for_degenerate_names() {
        assert_eq!(MethodDescriptor::instance("(x:)").base_name(), "");
        assert_eq!(MethodDescriptor::instance("   ").base_name(), "");
    }

    #[test]
    fn parameter_names_fall_back_to_labels() {
        let method = MethodDescriptor::instance("add")
            .argument("item", "Item")
            .named_argument("_", "count", "Int");
        assert_eq!(method.parameter_names(), vec!["item", "count"]);
        assert_eq!(method.external_argument_names, vec!["item", "_"]);

        let plain = MethodDescriptor::instance("add").argument("item", "Item");
        assert_eq!(plain.parameter_names(), vec!["item"]);
    }

    #[test]
    fn void_results_produce_no_value() {
        assert_eq!(MethodDescriptor::instance("a").returns("Void").result_type(), None);
        assert_eq!(MethodDescriptor::instance("a").returns(" () ").result_type(), None);
        assert_eq!(
            MethodDescriptor::instance("a").returns("Bool").result_type(),
            Some("Bool")
        );
    }

    #[test]
    fn kinds_split_into_scopes() {
        assert!(MethodKind::Class.is_type_level());
        assert!(MethodKind::StaticProperty.is_type_level());
        assert!(!MethodKind::Call.is_type_level());
        assert!(!MethodKind::Static.is_overridable());
        assert!(MethodKind::InstanceProperty.is_overridable());
    }

    #[test]
    fn enum_name_defaults_from_class_name() {
        let class = ClassDescriptor::new("LoginService", ClassKind::Class);
        assert_eq!(class.enum_name(), "LoginServiceMethod");

        let mut named = class.clone();
        named.enum_name = Some("LoginCall".into());
        assert_eq!(named.enum_name(), "LoginCall");
    }

    #[test]
    fn manifest_fields_default_when_missing() {
        let method: MethodDescriptor = serde_json::from_str(r#"{"name": "refresh"}"#).unwrap();
        assert_eq!(method.kind, MethodKind::Instance);
        assert!(method.external_argument_names.is_empty());
        assert!(method.return_type.is_none());
    }
}
