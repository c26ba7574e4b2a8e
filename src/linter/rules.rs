use once_cell::sync::Lazy;
use regex::Regex;

use crate::generator::Component;

/// Layers validated against each discovered entity, in report order
pub const CHECKED_LAYERS: [Component; 5] = [
    Component::Repository,
    Component::UseCase,
    Component::Handler,
    Component::Di,
    Component::Model,
];

/// Placeholder names that may appear as `{Name}` tokens in rule patterns
const PLACEHOLDERS: [&str; 5] = ["EntitiesSnake", "EntitySnake", "Entity", "Domain", "Entities"];

/// A required declaration: some line of the template must match `pattern`
#[derive(Debug)]
pub struct Rule {
    pub pattern: Regex,
    pub message: String,
    pub suggestion: String,
}

/// Regex source matching `{{ Name }}`, `{{.Name}}` and their whitespace-trimming forms.
pub fn placeholder(name: &str) -> String {
    format!(r"\{{\{{-?\s*\.?{name}\s*-?\}}\}}")
}

fn expand(pattern: &str) -> String {
    PLACEHOLDERS.iter().fold(pattern.to_string(), |acc, name| {
        acc.replace(&format!("{{{name}}}"), &placeholder(name))
    })
}

fn compile(table: &[(&str, &str, &str)]) -> Vec<Rule> {
    table
        .iter()
        .map(|(pattern, message, suggestion)| Rule {
            pattern: Regex::new(&expand(pattern)).expect("lint rule pattern must compile"),
            message: message.to_string(),
            suggestion: suggestion.to_string(),
        })
        .collect()
}

static REPOSITORY_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[
        (
            r"type\s+I{Entity}Repository\s+interface",
            "repository interface must be named I{{ Entity }}Repository",
            "type I{{ Entity }}Repository interface {",
        ),
        (
            r"^\s*Create\(ctx\s+context\.Context",
            "I{{ Entity }}Repository must declare Create",
            "Create(ctx context.Context, {{ EntityCamel }} *entity.{{ Entity }}) error",
        ),
        (
            r"^\s*GetByID\(ctx\s+context\.Context",
            "I{{ Entity }}Repository must declare GetByID",
            "GetByID(ctx context.Context, id uuid.UUID) (*entity.{{ Entity }}, error)",
        ),
        (
            r"^\s*List\(ctx\s+context\.Context",
            "I{{ Entity }}Repository must declare List",
            "List(ctx context.Context, limit, offset int) ([]*entity.{{ Entity }}, error)",
        ),
        (
            r"^\s*Update\(ctx\s+context\.Context",
            "I{{ Entity }}Repository must declare Update",
            "Update(ctx context.Context, {{ EntityCamel }} *entity.{{ Entity }}) error",
        ),
        (
            r"^\s*Delete\(ctx\s+context\.Context",
            "I{{ Entity }}Repository must declare Delete",
            "Delete(ctx context.Context, id uuid.UUID) error",
        ),
        (
            r"type\s+{Entity}Repository\s+struct",
            "repository implementation must be named {{ Entity }}Repository",
            "type {{ Entity }}Repository struct {",
        ),
        (
            r"func\s+New{Entity}Repository\(",
            "repository constructor must be named New{{ Entity }}Repository",
            "func New{{ Entity }}Repository(db *gorm.DB) I{{ Entity }}Repository {",
        ),
    ])
});

static USE_CASE_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[
        (
            r"type\s+I{Entity}UseCase\s+interface",
            "use case interface must be named I{{ Entity }}UseCase",
            "type I{{ Entity }}UseCase interface {",
        ),
        (
            r"type\s+{Entity}UseCase\s+struct",
            "use case implementation must be named {{ Entity }}UseCase",
            "type {{ Entity }}UseCase struct {",
        ),
        (
            r"func\s+New{Entity}UseCase\(",
            "use case constructor must be named New{{ Entity }}UseCase",
            "func New{{ Entity }}UseCase(repo repository.I{{ Entity }}Repository) I{{ Entity }}UseCase {",
        ),
        (
            r"I{Entity}Repository\b",
            "use case must depend on I{{ Entity }}Repository",
            "repo repository.I{{ Entity }}Repository",
        ),
    ])
});

static HANDLER_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[
        (
            r"type\s+{Entity}Handler\s+struct",
            "handler must be named {{ Entity }}Handler",
            "type {{ Entity }}Handler struct {",
        ),
        (
            r"func\s+New{Entity}Handler\(",
            "handler constructor must be named New{{ Entity }}Handler",
            "func New{{ Entity }}Handler(useCase usecase.I{{ Entity }}UseCase) *{{ Entity }}Handler {",
        ),
        (
            r"I{Entity}UseCase\b",
            "handler must depend on I{{ Entity }}UseCase",
            "useCase usecase.I{{ Entity }}UseCase",
        ),
        (
            r"func\s+\(\w+\s+\*{Entity}Handler\)\s+RegisterRoutes\(",
            "handler must register its routes in RegisterRoutes",
            "func (h *{{ Entity }}Handler) RegisterRoutes(router *gin.RouterGroup) {",
        ),
    ])
});

static DI_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[
        (
            r"New{Entity}Repository\(",
            "DI must construct the repository with New{{ Entity }}Repository",
            "repo := repository.New{{ Entity }}Repository(db)",
        ),
        (
            r"New{Entity}UseCase\(",
            "DI must construct the use case with New{{ Entity }}UseCase",
            "useCase := usecase.New{{ Entity }}UseCase(repo)",
        ),
        (
            r"New{Entity}Handler\(",
            "DI must construct the handler with New{{ Entity }}Handler",
            "return handlers.New{{ Entity }}Handler(useCase)",
        ),
        (
            r"^package\s+{Domain}\s*$",
            "DI package must be named after the domain",
            "package {{ Domain }}",
        ),
    ])
});

static MODEL_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[
        (
            r"type\s+{Entity}\s+struct",
            "model struct must be named {{ Entity }}",
            "type {{ Entity }} struct {",
        ),
        (
            r"func\s+\(\w*\s*\*?{Entity}\)\s+TableName\(\)\s+string",
            "model must define TableName()",
            "func ({{ Entity }}) TableName() string {",
        ),
        (
            r#"return\s+"{EntitiesSnake}""#,
            "TableName() must return the plural snake_case entity name",
            "return \"{{ EntitiesSnake }}\"",
        ),
        (
            r"^\s*ID\s+\S+\s+.*primaryKey",
            "model must declare an ID primary key",
            "ID uuid.UUID `gorm:\"type:uuid;primaryKey\" json:\"id\"`",
        ),
    ])
});

/// Required declarations of a layer's template. The entity layer has none.
pub fn rules_for(layer: Component) -> &'static [Rule] {
    match layer {
        Component::Repository => REPOSITORY_RULES.as_slice(),
        Component::UseCase => USE_CASE_RULES.as_slice(),
        Component::Handler => HANDLER_RULES.as_slice(),
        Component::Di => DI_RULES.as_slice(),
        Component::Model => MODEL_RULES.as_slice(),
        Component::Entity => &[],
    }
}
