use crate::enums::HttpMethod;
use crate::inflector::pluralize;

/// One row of the RESTful resource-expansion table (spec.md §4.9). `suffix`
/// is appended to the resource's (plural or singular) base path; `is_member`
/// marks routes that live under `/:id` (or the nested `:id_param`).
pub struct ResourceAction {
    pub methods: &'static [HttpMethod],
    pub suffix: &'static str,
    pub action: &'static str,
    pub is_member: bool,
}

/// `GET /xs`, `GET /xs/new`, `POST /xs`, `GET /xs/:id`, `GET /xs/:id/edit`,
/// `PUT|PATCH /xs/:id`, `DELETE /xs/:id` — the full `resources` table.
pub fn collection_resource_actions() -> Vec<ResourceAction> {
    vec![
        ResourceAction { methods: &[HttpMethod::Get], suffix: "", action: "index", is_member: false },
        ResourceAction { methods: &[HttpMethod::Get], suffix: "new", action: "new", is_member: false },
        ResourceAction { methods: &[HttpMethod::Post], suffix: "", action: "create", is_member: false },
        ResourceAction { methods: &[HttpMethod::Get], suffix: "", action: "show", is_member: true },
        ResourceAction { methods: &[HttpMethod::Get], suffix: "edit", action: "edit", is_member: true },
        ResourceAction { methods: &[HttpMethod::Put, HttpMethod::Patch], suffix: "", action: "update", is_member: true },
        ResourceAction { methods: &[HttpMethod::Delete], suffix: "", action: "destroy", is_member: true },
    ]
}

/// `resource` (singular) drops every `is_member` row's `:id` segment and the
/// bare `index` row, since a singular resource has at most one instance.
pub fn member_only_resource_actions() -> Vec<ResourceAction> {
    vec![
        ResourceAction { methods: &[HttpMethod::Get], suffix: "new", action: "new", is_member: false },
        ResourceAction { methods: &[HttpMethod::Post], suffix: "", action: "create", is_member: false },
        ResourceAction { methods: &[HttpMethod::Get], suffix: "", action: "show", is_member: false },
        ResourceAction { methods: &[HttpMethod::Get], suffix: "edit", action: "edit", is_member: false },
        ResourceAction { methods: &[HttpMethod::Put, HttpMethod::Patch], suffix: "", action: "update", is_member: false },
        ResourceAction { methods: &[HttpMethod::Delete], suffix: "", action: "destroy", is_member: false },
    ]
}

/// Plural path segment used as the base of a `resources :x` expansion.
pub fn plural_base(name: &str) -> String {
    pluralize(name)
}
