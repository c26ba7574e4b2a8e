#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::config::TemplateData;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_template(root: &Path, relative: impl AsRef<Path>, body: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

/// Minimal template tree with one template per layer file.
fn template_tree(mode: TemplateMode) -> TempDir {
    let dir = TempDir::new().unwrap();
    let data = TemplateData::from_names("user", "User");
    for component in Component::ALL {
        for (template, _) in component.files(mode, &data) {
            write_template(
                dir.path(),
                template,
                &format!(
                    "// {component}\npackage {{{{ Domain }}}}\n\n{}",
                    "type {{ Entity }} struct{}\n"
                ),
            );
        }
    }
    dir
}

fn options(templates: &Path, output: &Path) -> GenerateOptions {
    GenerateOptions {
        output_root: output.to_path_buf(),
        templates_root: templates.to_path_buf(),
        dry_run: false,
    }
}

#[test]
fn test_component_from_str() {
    assert_eq!("entity".parse::<Component>().unwrap(), Component::Entity);
    assert_eq!("usecase".parse::<Component>().unwrap(), Component::UseCase);
    assert_eq!("use_case".parse::<Component>().unwrap(), Component::UseCase);
    assert_eq!("DI".parse::<Component>().unwrap(), Component::Di);
    assert_eq!(
        "service".parse::<Component>().unwrap_err(),
        GenerateError::UnknownCommand {
            command: "service".to_string()
        }
    );
}

#[test]
fn test_target_from_str() {
    assert_eq!("all".parse::<Target>().unwrap(), Target::All);
    assert_eq!(
        "handler".parse::<Target>().unwrap(),
        Target::Only(Component::Handler)
    );
    let err = "frobnicate".parse::<Target>().unwrap_err();
    assert_eq!(err.to_string(), "unknown command: frobnicate");
    assert_eq!(Target::All.components(), Component::ALL.to_vec());
}

#[test]
fn test_template_paths_per_mode() {
    assert_eq!(
        Component::Entity.template_path(TemplateMode::Legacy),
        PathBuf::from("internal/core/entity/entity.go.tmpl")
    );
    assert_eq!(
        Component::Handler.template_path(TemplateMode::ConfigDriven),
        PathBuf::from("internal/interface/http/handlers/handler_config.go.tmpl")
    );
}

#[test]
fn test_output_layout() {
    let data = TemplateData::from_names("billing", "InvoiceLine");
    let outputs: Vec<PathBuf> = Component::ALL
        .iter()
        .flat_map(|c| c.files(TemplateMode::ConfigDriven, &data))
        .map(|(_, out)| out)
        .collect();
    let expected: Vec<PathBuf> = [
        "internal/core/entity/billing/invoice_line.go",
        "internal/core/models/billing/invoice_line.go",
        "internal/repository/billing/invoice_line_repository.go",
        "internal/repository/billing/repositories.go",
        "internal/usecase/billing/invoice_line_usecase.go",
        "internal/usecase/billing/usecases.go",
        "internal/interface/http/handlers/billing/invoice_line.go",
        "internal/di/billing/di.go",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();
    assert_eq!(outputs, expected);
}

#[test]
fn test_generate_file_missing_template() {
    let dir = TempDir::new().unwrap();
    let engine = TemplateEngine::new();
    let data = TemplateData::from_names("user", "User");
    let err = engine
        .generate_file(
            &dir.path().join("nope.go.tmpl"),
            &dir.path().join("out.go"),
            &data,
        )
        .unwrap_err();
    assert!(err.to_string().contains("does not exist"));
    assert!(matches!(
        err.downcast_ref::<GenerateError>(),
        Some(GenerateError::TemplateMissing { .. })
    ));
    assert!(!dir.path().join("out.go").exists());
}

#[test]
fn test_generate_file_creates_directories() {
    let dir = TempDir::new().unwrap();
    write_template(dir.path(), "t.go.tmpl", "package {{ Domain }}\n");
    let output = dir.path().join("a/b/c/out.go");
    let engine = TemplateEngine::new();
    engine
        .generate_file(
            &dir.path().join("t.go.tmpl"),
            &output,
            &TemplateData::from_names("user", "User"),
        )
        .unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "package user\n");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(dir.path().join("a/b")).unwrap().permissions().mode();
        // umask may only clear bits
        assert_eq!(mode & 0o700, 0o700);
    }
}

#[test]
fn test_helper_library() {
    let dir = TempDir::new().unwrap();
    let body = concat!(
        "{{ Entity | snake_case }} {{ Entity | camel_case }} {{ 'order_item' | pascal_case }}\n",
        "{{ pluralize('category') }} {{ 'box' | pluralize }}\n",
        "{{ printf('%s has %d%% %q', Entity, 5, 'x') }}\n",
        "{{ contains(Entity, 'Item') }} {{ contains(['a', 'b'], 'b') }}\n",
        "{{ eq(Domain, 'shop') }} {{ ne(Domain, 'shop') }}\n",
        "{{ default('none', Description) }}\n",
    );
    write_template(dir.path(), "h.tmpl", body);
    let engine = TemplateEngine::new();
    let out = engine
        .render(
            &dir.path().join("h.tmpl"),
            &TemplateData::from_names("shop", "OrderItem"),
        )
        .unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "order_item orderItem OrderItem");
    assert_eq!(lines[1], "categories boxes");
    assert_eq!(lines[2], "OrderItem has 5% \"x\"");
    assert_eq!(lines[3], "true true");
    assert_eq!(lines[4], "true false");
    assert_eq!(lines[5], "none");
}

#[test]
fn test_block_tags_do_not_leave_blank_lines() {
    let dir = TempDir::new().unwrap();
    write_template(
        dir.path(),
        "f.tmpl",
        concat!(
            "type {{ Entity }} struct {\n",
            "{% for f in EntityConfig.fields %}\n",
            "\t{{ f.name }} {{ f.type }}\n",
            "{% endfor %}\n",
            "}\n",
        ),
    );
    let out = TemplateEngine::new()
        .render(
            &dir.path().join("f.tmpl"),
            &TemplateData::from_names("user", "User"),
        )
        .unwrap();
    assert_eq!(
        out,
        "type User struct {\n\tID uuid.UUID\n\tCreatedAt time.Time\n\tUpdatedAt time.Time\n}\n"
    );
}

#[test]
fn test_template_syntax_error_is_reported() {
    let dir = TempDir::new().unwrap();
    write_template(dir.path(), "bad.tmpl", "{% if Entity %}never closed\n");
    let err = TemplateEngine::new()
        .render(
            &dir.path().join("bad.tmpl"),
            &TemplateData::from_names("user", "User"),
        )
        .unwrap_err();
    assert!(format!("{err:#}").contains("bad.tmpl"));
}

#[test]
fn test_generate_all_files_writes_every_layer() {
    let templates = template_tree(TemplateMode::ConfigDriven);
    let output = TempDir::new().unwrap();
    let generator = Generator::new(
        TemplateData::from_names("user", "User"),
        TemplateMode::ConfigDriven,
        options(templates.path(), output.path()),
    );
    let written = generator.generate_all_files().unwrap();
    assert_eq!(written.len(), 8);
    for path in &written {
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("type User struct{}"), "{path:?}");
        assert!(contents.contains("package user"));
    }
    assert!(output.path().join("internal/di/user/di.go").is_file());
}

#[test]
fn test_generate_component_only_writes_that_layer() {
    let templates = template_tree(TemplateMode::Legacy);
    let output = TempDir::new().unwrap();
    let generator = Generator::new(
        TemplateData::from_names("user", "User"),
        TemplateMode::Legacy,
        options(templates.path(), output.path()),
    );
    let written = generator.generate_component(Component::Repository).unwrap();
    assert_eq!(written.len(), 2);
    assert!(output
        .path()
        .join("internal/repository/user/user_repository.go")
        .is_file());
    assert!(!output.path().join("internal/core/entity").exists());
}

#[test]
fn test_missing_layer_template_aborts_before_writing() {
    let templates = template_tree(TemplateMode::ConfigDriven);
    fs::remove_file(
        templates
            .path()
            .join("internal/interface/http/handlers/handler_config.go.tmpl"),
    )
    .unwrap();
    let output = TempDir::new().unwrap();
    let generator = Generator::new(
        TemplateData::from_names("user", "User"),
        TemplateMode::ConfigDriven,
        options(templates.path(), output.path()),
    );
    let err = generator.generate_all_files().unwrap_err();
    let message = format!("{err:#}");
    assert!(message.starts_with("failed to generate handler"), "{message}");
    assert!(message.contains("does not exist"));
    // staged: the layers rendered before the failure were not written either
    assert!(!output.path().join("internal").exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let templates = template_tree(TemplateMode::ConfigDriven);
    let output = TempDir::new().unwrap();
    let mut opts = options(templates.path(), output.path());
    opts.dry_run = true;
    let generator = Generator::new(
        TemplateData::from_names("user", "User"),
        TemplateMode::ConfigDriven,
        opts,
    );
    let planned = generator.generate_all_files().unwrap();
    assert_eq!(planned.len(), 8);
    assert!(!output.path().join("internal").exists());
}
