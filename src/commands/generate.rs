use crate::catalog::{load_catalog, CatalogFormat};
use crate::config::{load_config, load_config_file, FakegenConfig, OutputConfig};
use crate::generator::{CollisionPolicy, FakeClassGenerator, GeneratorOptions};
use crate::io::{self, FakeFile, FakeFileOptions};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Arguments of `fakegen generate`, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    pub catalog: PathBuf,
    pub output: Option<PathBuf>,
    pub format: Option<CatalogFormat>,
    pub module: Option<String>,
    pub imports: Vec<String>,
    pub config: Option<PathBuf>,
    pub no_hint: bool,
    pub collision_policy: Option<CollisionPolicy>,
    /// Arguments after the program name, echoed in the regeneration hint
    pub invocation: Vec<String>,
}

pub fn generate_fakes(config: GenerateConfig) -> Result<()> {
    let file_config = match &config.config {
        Some(path) => load_config_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => load_config(),
    };

    let generator = FakeClassGenerator::new(generator_options(&config, &file_config)?);
    let catalog = load_catalog(&config.catalog, config.format)
        .with_context(|| format!("Failed to load catalog {}", config.catalog.display()))?;

    let fake_file = FakeFile::generate(
        &generator,
        &catalog,
        file_options(&config, &file_config.output),
    )?;
    let text = fake_file.render();

    match &config.output {
        Some(path) => {
            io::write_file(path, &text)?;
            log::info!(
                "Wrote {} fakes to {}",
                fake_file.fake_count(),
                path.display()
            );
        }
        None => print!("{}", text),
    }

    Ok(())
}

/// Generator options from the config file, with command line overrides applied.
pub fn generator_options(
    config: &GenerateConfig,
    file_config: &FakegenConfig,
) -> Result<GeneratorOptions> {
    let mut options = file_config.generator.to_options()?;
    if let Some(policy) = config.collision_policy {
        options.collision_policy = policy;
    }
    Ok(options)
}

/// File layout: the config file's imports come first, then any from the command line.
pub fn file_options(config: &GenerateConfig, output: &OutputConfig) -> FakeFileOptions {
    let mut imports: Vec<String> = Vec::new();
    for import in output.imports.iter().chain(&config.imports) {
        let import = import.trim();
        if !import.is_empty() && !imports.iter().any(|seen| seen == import) {
            imports.push(import.to_string());
        }
    }

    let regeneration_command = (output.regeneration_hint && !config.no_hint)
        .then(|| regeneration_command(&config.invocation));

    FakeFileOptions {
        regeneration_command,
        imports,
        module: config.module.clone().or_else(|| output.module.clone()),
    }
}

/// Shell command reproducing this run.
pub fn regeneration_command(invocation: &[String]) -> String {
    std::iter::once("fakegen".to_string())
        .chain(invocation.iter().map(|arg| shell_quote(arg)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+@".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn regeneration_command_quotes_when_needed() {
        assert_eq!(
            regeneration_command(&args(&["generate", "Catalog/app.json", "-m", "App"])),
            "fakegen generate Catalog/app.json -m App"
        );
        assert_eq!(
            regeneration_command(&args(&["generate", "My Catalog.json", "-i", ""])),
            "fakegen generate 'My Catalog.json' -i ''"
        );
    }

    #[test]
    fn command_line_extends_config_imports() {
        let config = GenerateConfig {
            imports: args(&["UIKit", "Foundation"]),
            module: Some("App".into()),
            invocation: args(&["generate", "c.json"]),
            ..GenerateConfig::default()
        };
        let output = OutputConfig {
            imports: args(&["Foundation"]),
            module: Some("Core".into()),
            regeneration_hint: true,
        };

        let options = file_options(&config, &output);
        assert_eq!(options.imports, args(&["Foundation", "UIKit"]));
        assert_eq!(options.module.as_deref(), Some("App"));
        assert_eq!(
            options.regeneration_command.as_deref(),
            Some("fakegen generate c.json")
        );
    }

    #[test]
    fn hint_can_be_disabled_from_either_side() {
        let output = OutputConfig::default();
        let config = GenerateConfig {
            no_hint: true,
            ..GenerateConfig::default()
        };
        assert_eq!(file_options(&config, &output).regeneration_command, None);

        let quiet = OutputConfig {
            regeneration_hint: false,
            ..OutputConfig::default()
        };
        assert_eq!(
            file_options(&GenerateConfig::default(), &quiet).regeneration_command,
            None
        );
    }

    #[test]
    fn collision_policy_flag_overrides_config() {
        let config = GenerateConfig {
            collision_policy: Some(CollisionPolicy::Disambiguate),
            ..GenerateConfig::default()
        };
        let options = generator_options(&config, &FakegenConfig::default()).unwrap();
        assert_eq!(options.collision_policy, CollisionPolicy::Disambiguate);

        let untouched = generator_options(&GenerateConfig::default(), &FakegenConfig::default())
            .unwrap();
        assert_eq!(untouched.collision_policy, CollisionPolicy::Preserve);
    }
}
