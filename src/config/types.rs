//! YAML schema for a domain description.
//!
//! Every struct is `#[serde(default)]`: any section may be omitted and is back-filled by
//! the processor. Unknown keys are ignored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root of a domain configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainConfig {
    /// Schema version of the file (informational)
    pub version: String,
    /// Business domain name, e.g. `user` (required)
    pub domain: String,
    /// Free-text description
    pub description: String,
    /// Business entity
    pub entity: EntityConfig,
    /// Persistence model for the entity
    pub model: ModelConfig,
    /// Additional persistence models
    pub models: Vec<ModelConfig>,
    /// API-wide settings
    pub api: ApiConfig,
    /// Repository layer
    pub repository: RepositoryConfig,
    /// Use-case layer
    pub use_case: UseCaseConfig,
    /// HTTP handler layer
    pub handlers: HandlersConfig,
    /// Explicit endpoint list
    pub endpoints: Vec<EndpointConfig>,
    /// Generation switches
    pub generation: GenerationConfig,
    /// Free-form feature flags, passed to templates untouched
    pub features: BTreeMap<String, bool>,
    /// Go module path of the generated project
    pub module: String,
}

/// Business entity description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityConfig {
    pub name: String,
    pub package: String,
    pub description: String,
    pub fields: Vec<FieldConfig>,
    pub computed_fields: Vec<ComputedFieldConfig>,
    pub conversion_methods: Vec<MethodConfig>,
    pub custom_methods: Vec<MethodConfig>,
    pub imports: Vec<String>,
    pub requires_uuid: bool,
}

/// One entity field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub name: String,
    /// Go type, e.g. `string`, `*time.Time`, `uuid.UUID`
    #[serde(rename = "type")]
    pub field_type: String,
    pub json_tag: String,
    /// Validation rules rendered into a `validate:"..."` tag
    pub validate: Vec<String>,
    pub unique: bool,
    pub nullable: bool,
    pub default: String,
    pub max_length: Option<u32>,
    /// Name of the corresponding model field when it differs
    pub model_field: String,
    pub description: String,
}

/// Field computed from other fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputedFieldConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub implementation: String,
    pub description: String,
}

/// Method parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
}

/// A generated method: either a literal implementation or a placeholder stub.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodConfig {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParameterConfig>,
    pub return_type: String,
    pub implementation: String,
    /// Body must be hand-written after generation
    pub placeholder: bool,
}

/// Persistence-layer mirror of an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    pub table_name: String,
    pub fields: Vec<ModelFieldConfig>,
    pub indexes: Vec<IndexConfig>,
    pub constraints: Vec<ConstraintConfig>,
    pub hooks: HooksConfig,
    pub computed_methods: Vec<MethodConfig>,
    pub validation_methods: Vec<MethodConfig>,
    pub custom_methods: Vec<MethodConfig>,
    pub relationships: Vec<RelationshipConfig>,
    pub imports: Vec<String>,
    /// Derived: some field is `uuid.UUID`
    pub requires_uuid: bool,
    /// Derived: some field is `time.Time` or `*time.Time`
    pub requires_time: bool,
}

/// One model (table column) field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelFieldConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub column: String,
    /// Body of the `gorm:"..."` tag; generated from the type when empty
    pub gorm_tag: String,
    /// Body of the `json:"..."` tag; generated from the name when empty
    pub json_tag: String,
    pub max_length: Option<u32>,
    pub primary_key: bool,
    pub unique: bool,
    pub nullable: bool,
    pub index: bool,
    pub default: String,
    pub exclude_from_json: bool,
    pub description: String,
    /// Derived: complete struct tag literal, e.g. `` `gorm:"..." json:"..."` ``
    pub struct_tag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub name: String,
    pub fields: Vec<String>,
    pub unique: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub constraint_type: String,
    pub expression: String,
}

/// GORM lifecycle hooks to emit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HooksConfig {
    pub before_create: bool,
    pub after_create: bool,
    pub before_update: bool,
    pub after_update: bool,
    pub before_delete: bool,
    pub after_delete: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationshipConfig {
    pub name: String,
    /// `has_one`, `has_many`, `belongs_to` or `many_to_many`
    #[serde(rename = "type")]
    pub relationship_type: String,
    pub model: String,
    pub foreign_key: String,
    pub join_table: String,
}

/// API-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_path: String,
    pub version: String,
}

/// Standard CRUD toggles shared by every layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardMethodsConfig {
    pub create: bool,
    pub get_by_id: bool,
    pub list: bool,
    pub update: bool,
    pub delete: bool,
    pub count: bool,
    pub exists: bool,
}

impl StandardMethodsConfig {
    /// Every standard method enabled.
    pub fn all() -> Self {
        StandardMethodsConfig {
            create: true,
            get_by_id: true,
            list: true,
            update: true,
            delete: true,
            count: true,
            exists: true,
        }
    }
}

/// Interface descriptor shared by repository and use-case layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceConfig {
    pub name: String,
    pub standard_methods: StandardMethodsConfig,
    pub custom_methods: Vec<MethodConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImplementationConfig {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub enabled: bool,
    pub default_limit: u32,
    pub max_limit: u32,
    /// `offset` or `cursor`
    #[serde(rename = "type")]
    pub pagination_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilteringConfig {
    pub enabled: bool,
    pub fields: Vec<String>,
    pub operators: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CachingConfig {
    pub enabled: bool,
    pub ttl_seconds: u64,
    pub key_prefix: String,
}

/// Repository layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    pub interface: InterfaceConfig,
    pub implementation: ImplementationConfig,
    pub pagination: PaginationConfig,
    pub filtering: FilteringConfig,
    pub caching: CachingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub level: String,
    pub methods: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionConfig {
    pub enabled: bool,
    pub methods: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub enabled: bool,
    pub methods: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    pub enabled: bool,
    /// Event names published after successful mutations
    pub publish: Vec<String>,
}

/// Use-case layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UseCaseConfig {
    pub interface: InterfaceConfig,
    pub implementation: ImplementationConfig,
    pub logging: LoggingConfig,
    pub transactions: TransactionConfig,
    pub validation: ValidationConfig,
    pub events: EventsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub enabled: bool,
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    /// e.g. `jwt`, `api_key`
    #[serde(rename = "type")]
    pub auth_type: String,
    /// Handler methods that skip authentication
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub enabled: bool,
    pub requests_per_minute: u32,
}

/// HTTP handler layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlersConfig {
    pub name: String,
    pub base_path: String,
    pub standard_methods: StandardMethodsConfig,
    pub custom_methods: Vec<MethodConfig>,
    pub middleware: Vec<String>,
    pub cors: CorsConfig,
    pub auth: AuthConfig,
    pub rate_limiting: RateLimitConfig,
    pub validation: bool,
}

/// Explicitly declared endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub name: String,
    pub method: String,
    pub path: String,
    pub handler: String,
    pub description: String,
}

/// Generation switches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub preserve_custom_code: bool,
    pub uuid_primary_key: bool,
    pub generate_tests: bool,
}

impl GenerationConfig {
    /// Values used when the `generation` section is absent.
    pub fn recommended() -> Self {
        GenerationConfig {
            preserve_custom_code: true,
            uuid_primary_key: true,
            generate_tests: true,
        }
    }
}
