//! Assembly of the final fake file around the generated class blobs.

use crate::core::errors::Result;
use crate::core::Catalog;
use crate::generator::FakeClassGenerator;

/// Everything that surrounds the generated fakes in the output file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FakeFileOptions {
    /// Command line reproducing this file, written as a header comment
    pub regeneration_command: Option<String>,
    pub imports: Vec<String>,
    /// Module brought in with `@testable import`
    pub module: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FakeFile {
    options: FakeFileOptions,
    fakes: Vec<String>,
}

impl FakeFile {
    pub fn new(options: FakeFileOptions, fakes: Vec<String>) -> Self {
        Self { options, fakes }
    }

    pub fn generate(
        generator: &FakeClassGenerator,
        catalog: &Catalog,
        options: FakeFileOptions,
    ) -> Result<Self> {
        let fakes = generator.make_fakes(&catalog.classes)?;
        Ok(Self::new(options, fakes))
    }

    pub fn fake_count(&self) -> usize {
        self.fakes.len()
    }

    pub fn render(&self) -> String {
        let mut code = String::new();

        if let Some(command) = &self.options.regeneration_command {
            code.push_str("// Copy and paste the following command to regenerate this fake\n");
            code.push_str(&format!("// {}\n\n", command.trim_end()));
        }

        let imports: Vec<&str> = self
            .options
            .imports
            .iter()
            .map(|import| import.trim())
            .filter(|import| !import.is_empty())
            .collect();
        if !imports.is_empty() {
            for import in imports {
                code.push_str(&format!("import {}\n", import));
            }
            code.push('\n');
        }

        if let Some(module) = self.options.module.as_deref().filter(|m| !m.is_empty()) {
            code.push_str(&format!("@testable import {}\n\n", module));
        }

        code.push_str(&self.fakes.join("\n"));
        code.push('\n');
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_imports_and_module_precede_fakes() {
        let file = FakeFile::new(
            FakeFileOptions {
                regeneration_command: Some("fakegen generate Clock.json -o FakeClock.swift".into()),
                imports: vec!["Foundation".into(), " ".into(), "Combine".into()],
                module: Some("App".into()),
            },
            vec!["class FakeClock: Clock {\n}\n".into()],
        );
        assert_eq!(
            file.render(),
            "// Copy and paste the following command to regenerate this fake\n\
             // fakegen generate Clock.json -o FakeClock.swift\n\
             \n\
             import Foundation\n\
             import Combine\n\
             \n\
             @testable import App\n\
             \n\
             class FakeClock: Clock {\n\
             }\n\
             \n"
        );
    }

    #[test]
    fn fakes_are_separated_by_blank_lines() {
        let file = FakeFile::new(
            FakeFileOptions::default(),
            vec!["class A {\n}\n".into(), "class B {\n}\n".into()],
        );
        assert_eq!(file.render(), "class A {\n}\n\nclass B {\n}\n\n");
    }
}
