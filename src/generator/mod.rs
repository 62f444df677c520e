//! Fake class generation.
//!
//! [`FakeClassGenerator`] turns one [`ClassDescriptor`] into Swift source
//! holding, in order:
//!
//! 1. the identity enum and its equality (`identity`, `equality`)
//! 2. the stub descriptor type and its factories (`stub`)
//! 3. the `andReturn` helper types (`returns`)
//! 4. the fake class, whose members record calls (`recorder`) and answer
//!    with bound return values (`returns`)
//!
//! Generation is pure: the same descriptor always yields the same text.

pub mod equality;
pub mod identity;
pub mod recorder;
pub mod returns;
pub mod signature;
pub mod stub;
pub mod writer;

pub use equality::{Comparison, TypeClassifier};
pub use identity::{identity_key, CollisionPolicy, IdentityCatalog, IdentityVariant};
pub use recorder::CallScope;
pub use writer::SwiftWriter;

use crate::core::errors::Result;
use crate::core::ClassDescriptor;

pub const FAKE_PREFIX: &str = "Fake";
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Names of every generated type for one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNames {
    pub class: String,
    pub identity: String,
    pub stub: String,
    pub factories: String,
    pub instance_return: String,
    pub shared_return: String,
    pub fake: String,
}

impl TypeNames {
    pub fn for_class(class: &ClassDescriptor) -> Self {
        let name = &class.class_name;
        Self {
            class: name.clone(),
            identity: class.enum_name(),
            stub: format!("{}Stub", name),
            factories: format!("{}Stubs", name),
            instance_return: format!("{}Return", name),
            shared_return: format!("{}ClassReturn", name),
            fake: format!("{}{}", FAKE_PREFIX, name),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub indent_width: usize,
    pub collision_policy: CollisionPolicy,
    pub classifier: TypeClassifier,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            collision_policy: CollisionPolicy::default(),
            classifier: TypeClassifier::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeClassGenerator {
    options: GeneratorOptions,
}

impl FakeClassGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Swift source for one class; empty when nothing is fakeable.
    pub fn make_fake_class(&self, class: &ClassDescriptor) -> Result<String> {
        if class.methods.is_empty() {
            return Ok(String::new());
        }

        let catalog = IdentityCatalog::build(
            class,
            &self.options.classifier,
            self.options.collision_policy,
        )?;
        if catalog.is_empty() {
            log::debug!(
                "{} has no methods with a derivable identity",
                class.class_name
            );
            return Ok(String::new());
        }

        log::debug!(
            "Generating {}{} with {} of {} methods",
            FAKE_PREFIX,
            class.class_name,
            catalog.len(),
            class.methods.len()
        );

        let names = TypeNames::for_class(class);
        let mut w = SwiftWriter::new(self.options.indent_width);
        self.render_helpers(&mut w, &names, &catalog);
        self.render_fake_class(&mut w, class, &names, &catalog);
        Ok(w.finish())
    }

    /// One blob per class, in catalog order. Empty blobs are dropped.
    pub fn make_fakes(&self, classes: &[ClassDescriptor]) -> Result<Vec<String>> {
        let mut fakes = Vec::with_capacity(classes.len());
        for class in classes {
            let fake = self.make_fake_class(class)?;
            if !fake.is_empty() {
                fakes.push(fake);
            }
        }
        Ok(fakes)
    }

    fn render_helpers(&self, w: &mut SwiftWriter, names: &TypeNames, catalog: &IdentityCatalog<'_>) {
        identity::render_enum(w, &names.identity, catalog);
        w.blank();
        equality::render_equality(w, &names.identity, catalog);
        w.blank();
        stub::render_stub_type(w, names);
        w.blank();
        stub::render_factories(w, names, catalog);
        w.blank();
        returns::render_return_types(w, names);
        w.blank();
    }

    fn render_fake_class(
        &self,
        w: &mut SwiftWriter,
        class: &ClassDescriptor,
        names: &TypeNames,
        catalog: &IdentityCatalog<'_>,
    ) {
        w.open(format!("class {}: {}", names.fake, names.class));
        returns::render_binding_storage(w);
        recorder::render_log_storage(w);
        w.blank();
        returns::render_binding_methods(w, names);
        w.blank();
        returns::render_reset(w);
        w.blank();

        for variant in catalog.variants() {
            render_member(w, class, names, variant);
            w.blank();
        }

        returns::render_stub_entry_points(w, names);
        w.blank();
        recorder::render_queries(w, names);
        w.close();
    }
}

/// Faked member body: build the identity, record it, answer if a result is declared.
fn render_member(
    w: &mut SwiftWriter,
    class: &ClassDescriptor,
    names: &TypeNames,
    variant: &IdentityVariant<'_>,
) {
    let method = variant.method;
    let scope = CallScope::of(method.kind);
    w.block(signature::declaration(method, class.class_kind), |w| {
        w.line(format!(
            "let stub = {}",
            stub::stub_construction(names, variant)
        ));
        recorder::render_record(w, scope);
        if let Some(result_type) = method.result_type() {
            returns::render_lookup(w, result_type);
        }
    });
}
