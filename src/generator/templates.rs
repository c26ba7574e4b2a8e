use std::fs;
use std::path::Path;

use anyhow::Context;
use minijinja::value::{Rest, Value};
use minijinja::{Environment, Error, ErrorKind};
use tracing::debug;

use super::error::GenerateError;
use crate::config::TemplateData;
use crate::naming::{pluralize, to_camel_case, to_pascal_case, to_snake_case};

/// Renders `.go.tmpl` files with the generator's fixed helper library.
///
/// Helpers available to every template:
///
/// | name | kind | behaviour |
/// |------|------|-----------|
/// | `snake_case`, `camel_case`, `pascal_case`, `pluralize` | filter + function | case conversion |
/// | `printf(fmt, args...)` | function | `%s`, `%v`, `%d`, `%q`, `%%` |
/// | `contains(haystack, needle)` | function | substring or membership test |
/// | `eq(a, b)`, `ne(a, b)` | function | equality |
/// | `default(fallback, value)` | function | `value` unless it is empty/false |
/// | `raise(message)` | function | fails the render with `message` |
///
/// Whitespace handling matches what Go code needs: block tags swallow their own line and
/// the trailing newline of a template is kept.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        env.add_filter("snake_case", snake_case);
        env.add_filter("camel_case", camel_case);
        env.add_filter("pascal_case", pascal_case);
        env.add_filter("pluralize", plural);

        env.add_function("snake_case", snake_case);
        env.add_function("camel_case", camel_case);
        env.add_function("pascal_case", pascal_case);
        env.add_function("pluralize", plural);
        env.add_function("printf", printf);
        env.add_function("contains", contains);
        env.add_function("eq", eq);
        env.add_function("ne", ne);
        env.add_function("default", default_value);
        env.add_function("raise", raise);

        Self { env }
    }

    /// Render a template file into memory.
    ///
    /// # Errors
    ///
    /// [`GenerateError::TemplateMissing`] when the file is absent, otherwise read and
    /// template syntax/evaluation errors with the template path as context.
    pub fn render(&self, template_path: &Path, data: &TemplateData) -> anyhow::Result<String> {
        if !template_path.is_file() {
            return Err(GenerateError::TemplateMissing {
                path: template_path.to_path_buf(),
            }
            .into());
        }
        let source = fs::read_to_string(template_path)
            .with_context(|| format!("failed to read template {}", template_path.display()))?;
        let name = template_path.to_string_lossy();
        debug!(template = %name, "rendering template");
        self.env
            .render_named_str(&name, &source, data)
            .with_context(|| format!("failed to render template {}", template_path.display()))
    }

    /// Render `template_path` and write the result to `output_path`.
    pub fn generate_file(
        &self,
        template_path: &Path,
        output_path: &Path,
        data: &TemplateData,
    ) -> anyhow::Result<()> {
        let contents = self.render(template_path, data)?;
        write_output(output_path, &contents)?;
        println!("✅ Generated {}", output_path.display());
        Ok(())
    }
}

/// Create parent directories (mode `0755` on unix) and overwrite `path` with `contents`.
pub fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder
            .create(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

fn snake_case(value: String) -> String {
    to_snake_case(&value)
}

fn camel_case(value: String) -> String {
    to_camel_case(&value)
}

fn pascal_case(value: String) -> String {
    to_pascal_case(&value)
}

fn plural(value: String) -> String {
    pluralize(&value)
}

/// Go-style `printf` covering the verbs templates actually use.
fn printf(format: String, args: Rest<Value>) -> Result<String, Error> {
    let mut out = String::with_capacity(format.len());
    let mut args = args.iter();
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('%') => out.push('%'),
            Some(verb @ ('s' | 'v' | 'd' | 'q')) => {
                let arg = args.next().ok_or_else(|| {
                    Error::new(
                        ErrorKind::MissingArgument,
                        format!("printf: missing argument for %{verb}"),
                    )
                })?;
                if verb == 'q' {
                    out.push_str(&format!("{:?}", arg.to_string()));
                } else {
                    out.push_str(&arg.to_string());
                }
            }
            Some(other) => {
                return Err(Error::new(
                    ErrorKind::InvalidOperation,
                    format!("printf: unsupported verb %{other}"),
                ))
            }
            None => out.push('%'),
        }
    }
    Ok(out)
}

fn contains(haystack: Value, needle: Value) -> Result<bool, Error> {
    if let Some(text) = haystack.as_str() {
        return Ok(needle.as_str().is_some_and(|n| text.contains(n)));
    }
    if haystack.is_undefined() || haystack.is_none() {
        return Ok(false);
    }
    Ok(haystack.try_iter()?.any(|item| item == needle))
}

fn eq(a: Value, b: Value) -> bool {
    a == b
}

fn ne(a: Value, b: Value) -> bool {
    a != b
}

fn default_value(fallback: Value, value: Option<Value>) -> Value {
    match value {
        Some(v) if v.is_true() => v,
        _ => fallback,
    }
}

fn raise(message: String) -> Result<Value, Error> {
    Err(Error::new(ErrorKind::InvalidOperation, message))
}
