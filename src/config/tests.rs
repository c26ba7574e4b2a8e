#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for configuration loading and template data projection

use super::*;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn parse(yaml: &str) -> DomainConfig {
    parse_config(yaml, Path::new("test.yaml")).expect("parse config")
}

fn count_named(fields: &[FieldConfig], name: &str) -> usize {
    fields.iter().filter(|f| f.name == name).count()
}

#[test]
fn test_load_config_minimal_domain() {
    let mut temp = NamedTempFile::with_suffix(".yaml").expect("create temp file");
    temp.write_all(b"domain: \"widget\"\n").expect("write config");
    temp.flush().expect("flush");

    let config = load_config(temp.path()).unwrap();
    assert_eq!(config.entity.name, "Widget");
    assert_eq!(config.module, DEFAULT_MODULE);
    assert_eq!(config.generation, GenerationConfig::recommended());
}

#[test]
fn test_load_config_missing_file() {
    let err = load_config("definitely/not/here.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_parse_config_malformed_yaml() {
    let err = parse_config("domain: [unclosed", Path::new("bad.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_parse_config_requires_domain() {
    let err = parse_config("description: no domain here\n", Path::new("x.yaml")).unwrap_err();
    match err {
        ConfigError::Validation { field, .. } => assert_eq!(field, "domain"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = parse("domain: order\nsomething_else: 42\n");
    assert_eq!(config.domain, "order");
}

#[test]
fn test_generation_defaults_only_when_section_unset() {
    let config = parse(
        "domain: user
generation:
  uuid_primary_key: false
  preserve_custom_code: true
",
    );
    assert!(!config.generation.uuid_primary_key);
    assert!(config.generation.preserve_custom_code);

    // Both flags false is indistinguishable from an absent section.
    let config = parse(
        "domain: user
generation:
  uuid_primary_key: false
  preserve_custom_code: false
",
    );
    assert!(config.generation.uuid_primary_key);
}

#[test]
fn test_entity_name_defaults_to_pascal_domain() {
    let data = create_template_data(&parse("domain: order_item\n"));
    assert_eq!(data.entity, "OrderItem");
    assert_eq!(data.entity_snake, "order_item");
    assert_eq!(data.entities_snake, "order_items");
    assert_eq!(data.domain, "order_item");
    assert_eq!(data.domain_pascal, "OrderItem");
}

#[test]
fn test_explicit_entity_name_is_kept() {
    let data = create_template_data(&parse("domain: billing\nentity:\n  name: APIKey\n"));
    assert_eq!(data.entity, "APIKey");
    assert_eq!(data.repository_config.interface.name, "IAPIKeyRepository");
}

#[test]
fn test_add_standard_fields_is_idempotent() {
    let mut fields = vec![FieldConfig {
        name: "Email".to_string(),
        field_type: "string".to_string(),
        ..FieldConfig::default()
    }];
    add_standard_fields(&mut fields, true);
    add_standard_fields(&mut fields, true);
    add_standard_fields(&mut fields, false);

    for name in STANDARD_FIELDS {
        assert_eq!(count_named(&fields, name), 1, "{name} duplicated");
    }
    let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["ID", "CreatedAt", "UpdatedAt", "Email"]);
}

#[test]
fn test_add_standard_fields_keeps_user_definition() {
    let mut fields = vec![FieldConfig {
        name: "CreatedAt".to_string(),
        field_type: "int64".to_string(),
        ..FieldConfig::default()
    }];
    add_standard_fields(&mut fields, true);
    assert_eq!(count_named(&fields, "CreatedAt"), 1);
    let created = fields.iter().find(|f| f.name == "CreatedAt").unwrap();
    assert_eq!(created.field_type, "int64");
    assert_eq!(fields[0].name, "ID");
}

#[test]
fn test_uuid_primary_key_selects_id_type() {
    let data = create_template_data(&parse(
        "domain: user\ngeneration:\n  uuid_primary_key: true\n",
    ));
    let id = data.entity_config.fields.iter().find(|f| f.name == "ID").unwrap();
    assert_eq!(id.field_type, "uuid.UUID");
    let id = data.model_config.fields.iter().find(|f| f.name == "ID").unwrap();
    assert_eq!(id.field_type, "uuid.UUID");
    assert!(data.model_config.requires_uuid);
    assert!(data.entity_config.requires_uuid);

    let data = create_template_data(&parse(
        "domain: user\ngeneration:\n  uuid_primary_key: false\n  preserve_custom_code: true\n",
    ));
    let id = data.entity_config.fields.iter().find(|f| f.name == "ID").unwrap();
    assert_eq!(id.field_type, "uint");
    let id = data.model_config.fields.iter().find(|f| f.name == "ID").unwrap();
    assert_eq!(id.field_type, "uint");
    assert_eq!(id.gorm_tag, "primaryKey;autoIncrement");
    assert!(!data.model_config.requires_uuid);
    assert!(data.model_config.requires_time);
}

#[test]
fn test_default_conversion_methods() {
    let data = create_template_data(&parse("domain: user\n"));
    let methods = &data.entity_config.conversion_methods;
    let summary: Vec<_> = methods
        .iter()
        .map(|m| (m.name.as_str(), m.placeholder))
        .collect();
    assert_eq!(
        summary,
        [
            ("FromUserModel", false),
            ("ToUserModel", false),
            ("FromUserRequest", true),
            ("ToUserResponse", true),
        ]
    );
}

#[test]
fn test_declared_conversion_methods_are_not_replaced() {
    let yaml = r#"
domain: user
entity:
  conversion_methods:
    - name: ToDTO
      return_type: "*UserDTO"
      implementation: "return &UserDTO{ID: e.ID}"
"#;
    let data = create_template_data(&parse(yaml));
    assert_eq!(data.entity_config.conversion_methods.len(), 1);
    assert_eq!(data.entity_config.conversion_methods[0].name, "ToDTO");
}

#[test]
fn test_model_fields_and_tags() {
    let yaml = r#"
domain: user
entity:
  fields:
    - name: Email
      type: string
      unique: true
    - name: Nickname
      type: string
      max_length: 50
      nullable: true
    - name: Active
      type: bool
      default: "true"
    - name: Age
      type: int
    - name: Visits
      type: int64
    - name: DeletedAt
      type: "*time.Time"
"#;
    let data = create_template_data(&parse(yaml));
    let model = &data.model_config;
    assert_eq!(model.table_name, "users");

    let tag = |name: &str| {
        model
            .fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| (f.gorm_tag.clone(), f.json_tag.clone()))
            .unwrap()
    };
    assert_eq!(
        tag("Email"),
        ("type:varchar(255);uniqueIndex;not null".into(), "email".into())
    );
    assert_eq!(
        tag("Nickname"),
        ("type:varchar(50)".into(), "nickname,omitempty".into())
    );
    assert_eq!(
        tag("Active"),
        ("type:boolean;default:true;not null".into(), "active".into())
    );
    assert_eq!(tag("Age").0, "type:integer;not null");
    assert_eq!(tag("Visits").0, "type:bigint;not null");
    assert_eq!(
        tag("DeletedAt"),
        ("type:timestamp".into(), "deleted_at,omitempty".into())
    );
    assert_eq!(tag("ID").0, "type:uuid;primaryKey");
    assert_eq!(tag("CreatedAt").0, "autoCreateTime");

    let email = model.fields.iter().find(|f| f.name == "Email").unwrap();
    assert_eq!(
        email.struct_tag,
        "`gorm:\"type:varchar(255);uniqueIndex;not null\" json:\"email\"`"
    );
}

#[test]
fn test_explicit_model_section() {
    let yaml = r#"
domain: user
model:
  table_name: app_users
  fields:
    - name: PasswordHash
      type: string
      exclude_from_json: true
      gorm_tag: "column:password_hash"
"#;
    let data = create_template_data(&parse(yaml));
    let model = &data.model_config;
    assert_eq!(model.table_name, "app_users");
    let names: Vec<_> = model.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["ID", "CreatedAt", "UpdatedAt", "PasswordHash"]);
    let hash = &model.fields[3];
    assert_eq!(hash.gorm_tag, "column:password_hash");
    assert_eq!(hash.json_tag, "-");
}

#[test]
fn test_layer_defaults() {
    let data = create_template_data(&parse("domain: category\n"));

    let repo = &data.repository_config;
    assert_eq!(repo.interface.name, "ICategoryRepository");
    assert_eq!(repo.implementation.name, "CategoryRepository");
    assert_eq!(repo.interface.standard_methods, StandardMethodsConfig::all());
    assert!(repo.pagination.enabled);
    assert_eq!(repo.pagination.default_limit, 20);
    assert_eq!(repo.pagination.max_limit, 100);
    assert_eq!(repo.pagination.pagination_type, "offset");
    assert_eq!(repo.filtering.operators, DEFAULT_FILTER_OPERATORS);

    let uc = &data.use_case_config;
    assert_eq!(uc.interface.name, "ICategoryUseCase");
    assert_eq!(uc.implementation.name, "CategoryUseCase");
    assert_eq!(uc.logging.level, "debug");
    assert_eq!(uc.logging.methods, DEFAULT_MUTATING_METHODS);
    assert_eq!(uc.transactions.methods, DEFAULT_MUTATING_METHODS);

    assert_eq!(data.handlers_config.name, "CategoryHandler");
    assert_eq!(data.handlers_config.base_path, "/api/v1/categories");
    assert_eq!(data.entities, "Categories");
}

#[test]
fn test_partial_layer_sections_are_respected() {
    let yaml = r#"
domain: user
repository:
  interface:
    standard_methods:
      create: true
      get_by_id: true
  pagination:
    enabled: true
    default_limit: 50
    max_limit: 500
    type: cursor
"#;
    let data = create_template_data(&parse(yaml));
    let repo = &data.repository_config;
    assert!(repo.interface.standard_methods.create);
    assert!(!repo.interface.standard_methods.delete);
    assert_eq!(repo.pagination.pagination_type, "cursor");
    assert_eq!(repo.pagination.default_limit, 50);
}

#[test]
fn test_default_endpoints_follow_handler_methods() {
    let data = create_template_data(&parse("domain: user\n"));
    let routes: Vec<_> = data
        .endpoints
        .iter()
        .map(|e| format!("{} {}", e.method, e.path))
        .collect();
    assert!(routes.contains(&"POST /api/v1/users".to_string()));
    assert!(routes.contains(&"GET /api/v1/users/:id".to_string()));
    assert!(routes.contains(&"DELETE /api/v1/users/:id".to_string()));
}

#[test]
fn test_from_names_builds_legacy_data() {
    let data = TemplateData::from_names("user", "user");
    assert_eq!(data.entity, "User");
    assert_eq!(data.domain, "user");
    assert_eq!(data.module, DEFAULT_MODULE);
    assert_eq!(count_named(&data.entity_config.fields, "ID"), 1);
}

#[test]
fn test_template_data_serializes_pascal_keys() {
    let data = TemplateData::from_names("user", "User");
    let value = serde_json::to_value(&data).unwrap();
    assert_eq!(value["Entity"], "User");
    assert_eq!(value["EntitiesSnake"], "users");
    assert_eq!(value["RepositoryConfig"]["interface"]["name"], "IUserRepository");
    assert_eq!(value["EntityConfig"]["fields"][0]["type"], "uuid.UUID");
}

#[test]
fn test_method_needs_implementation_or_placeholder() {
    let yaml = r#"
domain: user
repository:
  interface:
    custom_methods:
      - name: FindByEmail
        return_type: "(*entity.User, error)"
"#;
    let err = parse_config(yaml, Path::new("user.yaml")).unwrap_err();
    match &err {
        ConfigError::Validation { field, reason, .. } => {
            assert_eq!(*field, "repository.interface.custom_methods");
            assert!(reason.contains("FindByEmail"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_placeholder_and_generated_conversion_methods_are_accepted() {
    let yaml = r#"
domain: user
entity:
  conversion_methods:
    - name: ToUserModel
  custom_methods:
    - name: Slugify
      placeholder: true
handlers:
  custom_methods:
    - name: Export
      implementation: c.Status(204)
"#;
    let config = parse(yaml);
    assert_eq!(config.entity.conversion_methods[0].name, "ToUserModel");
    assert!(config.entity.custom_methods[0].placeholder);
}
