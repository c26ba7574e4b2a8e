//! Projection of a [`DomainConfig`] into the flat structure handed to every template.
//!
//! All defaulting that depends on derived names (interface names, table names, standard
//! fields, tags) happens here. The projection never fails: input is expected to have
//! passed [`load_config`](super::load_config) or [`apply_defaults`].

use serde::Serialize;
use std::collections::BTreeMap;

use super::load::apply_defaults;
use super::types::{
    ApiConfig, DomainConfig, EndpointConfig, EntityConfig, FieldConfig, FilteringConfig,
    GenerationConfig, HandlersConfig, LoggingConfig, MethodConfig, ModelConfig,
    ModelFieldConfig, PaginationConfig, ParameterConfig, RepositoryConfig,
    StandardMethodsConfig, TransactionConfig, UseCaseConfig,
};
use crate::naming::{pluralize, to_camel_case, to_pascal_case, to_snake_case};

/// Names of the fields injected into every entity and model.
pub const STANDARD_FIELDS: [&str; 3] = ["ID", "CreatedAt", "UpdatedAt"];

/// Filter operators enabled when the filtering section is absent.
pub const DEFAULT_FILTER_OPERATORS: [&str; 8] = ["=", "!=", ">", ">=", "<", "<=", "LIKE", "IN"];

/// Methods wrapped in logging/transactions when those sections are absent.
pub const DEFAULT_MUTATING_METHODS: [&str; 3] = ["Create", "Update", "Delete"];

const DEFAULT_API_BASE_PATH: &str = "/api/v1";

/// Template-ready view of a domain configuration.
///
/// Serialized with PascalCase keys, so templates read `{{ Entity }}`,
/// `{{ EntitiesSnake }}`, `{{ RepositoryConfig.interface.name }}` and so on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateData {
    /// Domain in snake_case; also the Go package name of every layer
    pub domain: String,
    pub domain_pascal: String,
    pub domain_plural: String,
    /// Entity type name in PascalCase
    pub entity: String,
    pub entity_snake: String,
    pub entity_camel: String,
    /// Pluralized entity type name, e.g. `Categories`
    pub entities: String,
    /// Pluralized snake_case entity name, also the default table name
    pub entities_snake: String,
    pub module: String,
    pub description: String,
    pub version: String,
    pub entity_config: EntityConfig,
    pub model_config: ModelConfig,
    pub models: Vec<ModelConfig>,
    pub api_config: ApiConfig,
    pub repository_config: RepositoryConfig,
    pub use_case_config: UseCaseConfig,
    pub handlers_config: HandlersConfig,
    pub endpoints: Vec<EndpointConfig>,
    pub generation: GenerationConfig,
    pub features: BTreeMap<String, bool>,
}

impl TemplateData {
    /// Build template data from a domain and entity name alone (legacy mode).
    ///
    /// Every section is defaulted exactly as if a configuration file contained only
    /// `domain` and `entity.name`.
    pub fn from_names(domain: &str, entity: &str) -> Self {
        let mut config = DomainConfig {
            domain: domain.to_string(),
            entity: EntityConfig {
                name: type_name(entity),
                ..EntityConfig::default()
            },
            ..DomainConfig::default()
        };
        apply_defaults(&mut config);
        create_template_data(&config)
    }
}

/// Go type name for a user-supplied entity name: kept verbatim when already exported.
fn type_name(name: &str) -> String {
    let name = name.trim();
    if name.starts_with(|c: char| c.is_uppercase()) {
        name.to_string()
    } else {
        to_pascal_case(name)
    }
}

/// Go type of the `ID` field.
pub fn primary_key_type(uuid_primary_key: bool) -> &'static str {
    if uuid_primary_key {
        "uuid.UUID"
    } else {
        "uint"
    }
}

/// Project a (defaulted) configuration into [`TemplateData`].
pub fn create_template_data(config: &DomainConfig) -> TemplateData {
    let domain = to_snake_case(&config.domain);
    let entity = if config.entity.name.trim().is_empty() {
        to_pascal_case(&config.domain)
    } else {
        type_name(&config.entity.name)
    };
    let entity_snake = to_snake_case(&entity);
    let entities_snake = pluralize(&entity_snake);
    let uuid_pk = config.generation.uuid_primary_key;

    let entity_config = build_entity_config(&config.entity, &entity, &domain, uuid_pk);
    let model_config = build_model_config(
        &config.model,
        &entity,
        &entities_snake,
        Some(&entity_config),
        uuid_pk,
    );
    let models = config
        .models
        .iter()
        .map(|m| {
            let name = type_name(&m.name);
            let table = pluralize(&to_snake_case(&name));
            build_model_config(m, &name, &table, None, uuid_pk)
        })
        .collect();

    let api_config = build_api_config(&config.api);
    let handlers_config =
        build_handlers_config(&config.handlers, &entity, &entities_snake, &api_config);
    let endpoints = if config.endpoints.is_empty() {
        default_endpoints(&entity, &pluralize(&entity), &handlers_config)
    } else {
        config.endpoints.clone()
    };

    TemplateData {
        domain_pascal: to_pascal_case(&domain),
        domain_plural: pluralize(&domain),
        domain,
        entity_camel: to_camel_case(&entity),
        entities: pluralize(&entity),
        entity_snake,
        entities_snake,
        module: config.module.clone(),
        description: config.description.clone(),
        version: config.version.clone(),
        repository_config: build_repository_config(&config.repository, &entity),
        use_case_config: build_use_case_config(&config.use_case, &entity),
        entity,
        entity_config,
        model_config,
        models,
        api_config,
        handlers_config,
        endpoints,
        generation: config.generation.clone(),
        features: config.features.clone(),
    }
}

/// Insert ID, CreatedAt and UpdatedAt at the front of `fields`, skipping any already present.
///
/// Idempotent: running it on its own output changes nothing.
pub fn add_standard_fields(fields: &mut Vec<FieldConfig>, uuid_primary_key: bool) {
    let standard = [
        FieldConfig {
            name: "ID".to_string(),
            field_type: primary_key_type(uuid_primary_key).to_string(),
            json_tag: "id".to_string(),
            description: "Unique identifier".to_string(),
            ..FieldConfig::default()
        },
        FieldConfig {
            name: "CreatedAt".to_string(),
            field_type: "time.Time".to_string(),
            json_tag: "created_at".to_string(),
            description: "Creation timestamp".to_string(),
            ..FieldConfig::default()
        },
        FieldConfig {
            name: "UpdatedAt".to_string(),
            field_type: "time.Time".to_string(),
            json_tag: "updated_at".to_string(),
            description: "Last update timestamp".to_string(),
            ..FieldConfig::default()
        },
    ];
    let missing: Vec<FieldConfig> = standard
        .into_iter()
        .filter(|s| !fields.iter().any(|f| f.name == s.name))
        .collect();
    fields.splice(0..0, missing);
}

/// Model counterpart of [`add_standard_fields`], with GORM/JSON tags pre-filled.
pub fn add_standard_model_fields(fields: &mut Vec<ModelFieldConfig>, uuid_primary_key: bool) {
    let id_tag = if uuid_primary_key {
        "type:uuid;primaryKey"
    } else {
        "primaryKey;autoIncrement"
    };
    let standard = [
        ModelFieldConfig {
            name: "ID".to_string(),
            field_type: primary_key_type(uuid_primary_key).to_string(),
            gorm_tag: id_tag.to_string(),
            json_tag: "id".to_string(),
            primary_key: true,
            ..ModelFieldConfig::default()
        },
        ModelFieldConfig {
            name: "CreatedAt".to_string(),
            field_type: "time.Time".to_string(),
            gorm_tag: "autoCreateTime".to_string(),
            json_tag: "created_at".to_string(),
            ..ModelFieldConfig::default()
        },
        ModelFieldConfig {
            name: "UpdatedAt".to_string(),
            field_type: "time.Time".to_string(),
            gorm_tag: "autoUpdateTime".to_string(),
            json_tag: "updated_at".to_string(),
            ..ModelFieldConfig::default()
        },
    ];
    let missing: Vec<ModelFieldConfig> = standard
        .into_iter()
        .filter(|s| !fields.iter().any(|f| f.name == s.name))
        .collect();
    fields.splice(0..0, missing);
}

fn build_entity_config(
    source: &EntityConfig,
    entity: &str,
    domain: &str,
    uuid_pk: bool,
) -> EntityConfig {
    let mut cfg = source.clone();
    cfg.name = entity.to_string();
    if cfg.package.is_empty() {
        cfg.package = domain.to_string();
    }
    add_standard_fields(&mut cfg.fields, uuid_pk);
    for field in &mut cfg.fields {
        if field.json_tag.is_empty() {
            let nullable = is_nullable(&field.field_type, field.nullable);
            field.json_tag = json_tag(&field.name, nullable, false);
        }
    }
    if cfg.conversion_methods.is_empty() {
        cfg.conversion_methods = default_conversion_methods(entity);
    }
    cfg.requires_uuid = cfg.fields.iter().any(|f| is_uuid_type(&f.field_type));
    cfg
}

/// `From<E>Model` / `To<E>Model` (generated bodies) and the request/response placeholders.
fn default_conversion_methods(entity: &str) -> Vec<MethodConfig> {
    vec![
        MethodConfig {
            name: format!("From{entity}Model"),
            description: format!("Builds a {entity} from its persistence model"),
            parameters: vec![ParameterConfig {
                name: "model".to_string(),
                param_type: format!("*models.{entity}"),
            }],
            return_type: format!("*{entity}"),
            ..MethodConfig::default()
        },
        MethodConfig {
            name: format!("To{entity}Model"),
            description: format!("Converts the {entity} to its persistence model"),
            return_type: format!("*models.{entity}"),
            ..MethodConfig::default()
        },
        MethodConfig {
            name: format!("From{entity}Request"),
            description: format!("Builds a {entity} from an API request"),
            parameters: vec![ParameterConfig {
                name: "req".to_string(),
                param_type: format!("*{entity}Request"),
            }],
            return_type: format!("*{entity}"),
            placeholder: true,
            ..MethodConfig::default()
        },
        MethodConfig {
            name: format!("To{entity}Response"),
            description: format!("Converts the {entity} to an API response"),
            return_type: format!("*{entity}Response"),
            placeholder: true,
            ..MethodConfig::default()
        },
    ]
}

fn build_model_config(
    source: &ModelConfig,
    name: &str,
    table_name: &str,
    entity: Option<&EntityConfig>,
    uuid_pk: bool,
) -> ModelConfig {
    let mut cfg = source.clone();
    cfg.name = name.to_string();
    if cfg.table_name.is_empty() {
        cfg.table_name = table_name.to_string();
    }
    if cfg.fields.is_empty() {
        if let Some(entity) = entity {
            cfg.fields = entity
                .fields
                .iter()
                .filter(|f| !STANDARD_FIELDS.contains(&f.name.as_str()))
                .map(model_field_from_entity)
                .collect();
        }
    }
    add_standard_model_fields(&mut cfg.fields, uuid_pk);
    for field in &mut cfg.fields {
        let nullable = is_nullable(&field.field_type, field.nullable);
        if field.gorm_tag.is_empty() {
            field.gorm_tag = gorm_tag(field);
        }
        if field.json_tag.is_empty() {
            field.json_tag = json_tag(&field.name, nullable, field.exclude_from_json);
        }
        field.struct_tag = struct_tag(&field.gorm_tag, &field.json_tag);
    }
    cfg.requires_uuid = cfg.fields.iter().any(|f| is_uuid_type(&f.field_type));
    cfg.requires_time = cfg.fields.iter().any(|f| is_time_type(&f.field_type));
    cfg
}

fn model_field_from_entity(field: &FieldConfig) -> ModelFieldConfig {
    let name = if field.model_field.is_empty() {
        field.name.clone()
    } else {
        field.model_field.clone()
    };
    ModelFieldConfig {
        name,
        field_type: field.field_type.clone(),
        max_length: field.max_length,
        unique: field.unique,
        nullable: field.nullable,
        default: field.default.clone(),
        description: field.description.clone(),
        ..ModelFieldConfig::default()
    }
}

fn is_uuid_type(ty: &str) -> bool {
    ty.trim_start_matches('*') == "uuid.UUID"
}

fn is_time_type(ty: &str) -> bool {
    ty.trim_start_matches('*') == "time.Time"
}

fn is_nullable(ty: &str, declared: bool) -> bool {
    declared || ty.starts_with('*')
}

/// Body of a `gorm:"..."` tag derived from the field's Go type and flags.
pub fn gorm_tag(field: &ModelFieldConfig) -> String {
    let mut parts: Vec<String> = Vec::new();
    if field.primary_key {
        parts.push("primaryKey".to_string());
    }
    let column_type = match field.field_type.trim_start_matches('*') {
        "string" => Some(format!("varchar({})", field.max_length.unwrap_or(255))),
        "bool" => Some("boolean".to_string()),
        "int" | "int32" => Some("integer".to_string()),
        "int64" => Some("bigint".to_string()),
        "time.Time" => Some("timestamp".to_string()),
        "uuid.UUID" => Some("uuid".to_string()),
        _ => None,
    };
    if let Some(column_type) = column_type {
        parts.push(format!("type:{column_type}"));
    }
    if !field.column.is_empty() {
        parts.push(format!("column:{}", field.column));
    }
    if !field.default.is_empty() {
        parts.push(format!("default:{}", field.default));
    }
    if field.unique {
        parts.push("uniqueIndex".to_string());
    } else if field.index {
        parts.push("index".to_string());
    }
    if !field.primary_key && !is_nullable(&field.field_type, field.nullable) {
        parts.push("not null".to_string());
    }
    parts.join(";")
}

/// Body of a `json:"..."` tag.
pub fn json_tag(name: &str, nullable: bool, excluded: bool) -> String {
    if excluded {
        return "-".to_string();
    }
    let key = to_snake_case(name);
    if nullable {
        format!("{key},omitempty")
    } else {
        key
    }
}

fn struct_tag(gorm: &str, json: &str) -> String {
    if gorm.is_empty() {
        format!("`json:\"{json}\"`")
    } else {
        format!("`gorm:\"{gorm}\" json:\"{json}\"`")
    }
}

fn build_api_config(source: &ApiConfig) -> ApiConfig {
    let mut cfg = source.clone();
    if cfg.base_path.is_empty() {
        cfg.base_path = DEFAULT_API_BASE_PATH.to_string();
    }
    if cfg.version.is_empty() {
        cfg.version = "v1".to_string();
    }
    cfg
}

fn build_repository_config(source: &RepositoryConfig, entity: &str) -> RepositoryConfig {
    let mut cfg = source.clone();
    if cfg.interface.name.is_empty() {
        cfg.interface.name = format!("I{entity}Repository");
    }
    if cfg.implementation.name.is_empty() {
        cfg.implementation.name = format!("{entity}Repository");
    }
    if cfg.interface.standard_methods == StandardMethodsConfig::default() {
        cfg.interface.standard_methods = StandardMethodsConfig::all();
    }
    if cfg.pagination == PaginationConfig::default() {
        cfg.pagination = PaginationConfig {
            enabled: true,
            default_limit: 20,
            max_limit: 100,
            pagination_type: "offset".to_string(),
        };
    }
    if cfg.filtering == FilteringConfig::default() {
        cfg.filtering = FilteringConfig {
            enabled: true,
            fields: Vec::new(),
            operators: DEFAULT_FILTER_OPERATORS.iter().map(|s| s.to_string()).collect(),
        };
    }
    cfg
}

fn build_use_case_config(source: &UseCaseConfig, entity: &str) -> UseCaseConfig {
    let mut cfg = source.clone();
    if cfg.interface.name.is_empty() {
        cfg.interface.name = format!("I{entity}UseCase");
    }
    if cfg.implementation.name.is_empty() {
        cfg.implementation.name = format!("{entity}UseCase");
    }
    if cfg.interface.standard_methods == StandardMethodsConfig::default() {
        cfg.interface.standard_methods = StandardMethodsConfig::all();
    }
    let mutating: Vec<String> = DEFAULT_MUTATING_METHODS
        .iter()
        .map(|s| s.to_string())
        .collect();
    if cfg.logging == LoggingConfig::default() {
        cfg.logging = LoggingConfig {
            enabled: true,
            level: "debug".to_string(),
            methods: mutating.clone(),
        };
    }
    if cfg.transactions == TransactionConfig::default() {
        cfg.transactions = TransactionConfig {
            enabled: true,
            methods: mutating,
        };
    }
    cfg
}

fn build_handlers_config(
    source: &HandlersConfig,
    entity: &str,
    entities_snake: &str,
    api: &ApiConfig,
) -> HandlersConfig {
    let mut cfg = source.clone();
    if cfg.name.is_empty() {
        cfg.name = format!("{entity}Handler");
    }
    if cfg.base_path.is_empty() {
        cfg.base_path = format!("{}/{}", api.base_path.trim_end_matches('/'), entities_snake);
    }
    if cfg.standard_methods == StandardMethodsConfig::default() {
        cfg.standard_methods = StandardMethodsConfig::all();
    }
    cfg
}

/// REST endpoints for the enabled standard handler methods.
fn default_endpoints(
    entity: &str,
    entities: &str,
    handlers: &HandlersConfig,
) -> Vec<EndpointConfig> {
    let methods = handlers.standard_methods;
    let candidates = [
        (methods.create, format!("Create{entity}"), "POST", ""),
        (methods.list, format!("List{entities}"), "GET", ""),
        (methods.count, format!("Count{entities}"), "GET", "/count"),
        (methods.get_by_id, format!("Get{entity}"), "GET", "/:id"),
        (methods.update, format!("Update{entity}"), "PUT", "/:id"),
        (methods.delete, format!("Delete{entity}"), "DELETE", "/:id"),
    ];
    candidates
        .into_iter()
        .filter(|(enabled, ..)| *enabled)
        .map(|(_, name, method, suffix)| EndpointConfig {
            handler: name.clone(),
            description: String::new(),
            method: method.to_string(),
            path: format!("{}{}", handlers.base_path, suffix),
            name,
        })
        .collect()
}
