use std::collections::HashMap;

use crate::pattern::Constraint;

/// One frame of the DSL's nestable scope stack: a path prefix, a module
/// (controller namespace), declared defaults, and declared constraints
/// (spec.md §4.9 "Scope stack"). Pushed by `namespace`/`scope` and popped
/// once their block returns.
#[derive(Debug, Default, Clone)]
pub struct ScopeFrame {
    pub path: Option<String>,
    pub module: Option<String>,
    pub defaults: HashMap<String, String>,
    pub constraints: HashMap<String, Constraint>,
}

/// Stack of active scope frames. Merging always walks outer-to-inner so
/// that the innermost frame wins ties in `defaults`/`constraints`, and path
/// fragments are concatenated with exactly one `/` between them.
#[derive(Debug, Default)]
pub struct ScopeStack {
    frames: Vec<ScopeFrame>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: ScopeFrame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) {
        self.frames.pop();
    }

    /// Concatenate every frame's `path` (outer to inner) plus the route's
    /// own path fragment, with a single `/` separating each non-empty part.
    pub fn merged_path(&self, route_fragment: &str) -> String {
        let mut parts: Vec<&str> = self
            .frames
            .iter()
            .filter_map(|f| f.path.as_deref())
            .filter(|p| !p.is_empty())
            .collect();
        if !route_fragment.is_empty() {
            parts.push(route_fragment);
        }
        if parts.is_empty() {
            return "/".to_string();
        }
        let joined = parts
            .iter()
            .map(|p| p.trim_matches('/'))
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        format!("/{joined}")
    }

    /// Concatenate every frame's `module` (outer to inner) with `/`,
    /// producing the namespace prefix applied to a route's controller.
    pub fn merged_module(&self) -> Option<String> {
        let modules: Vec<&str> = self
            .frames
            .iter()
            .filter_map(|f| f.module.as_deref())
            .collect();
        if modules.is_empty() {
            None
        } else {
            Some(modules.join("/"))
        }
    }

    /// Merge `defaults` outer-to-inner; inner frames overwrite outer ones
    /// for the same key.
    pub fn merged_defaults(&self) -> HashMap<String, String> {
        let mut merged = HashMap::new();
        for frame in &self.frames {
            merged.extend(frame.defaults.clone());
        }
        merged
    }

    /// Merge `constraints` outer-to-inner; inner frames overwrite outer
    /// ones for the same parameter name.
    pub fn merged_constraints(&self) -> HashMap<String, Constraint> {
        let mut merged = HashMap::new();
        for frame in &self.frames {
            merged.extend(frame.constraints.clone());
        }
        merged
    }

    /// Apply the namespace prefix (if any) to a bare `controller#action`
    /// pair, preserving the `#action` suffix.
    pub fn namespaced_to(&self, to: &str) -> String {
        match self.merged_module() {
            Some(module) => format!("{module}/{to}"),
            None => to.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_path_when_nested_frames_then_joins_with_single_slash() {
        let mut stack = ScopeStack::new();
        stack.push(ScopeFrame {
            path: Some("/admin".to_string()),
            ..Default::default()
        });
        stack.push(ScopeFrame {
            path: Some("/v1/".to_string()),
            ..Default::default()
        });
        assert_eq!(stack.merged_path("users"), "/admin/v1/users");
    }

    #[test]
    fn merged_defaults_when_inner_overrides_outer_then_inner_wins() {
        let mut stack = ScopeStack::new();
        stack.push(ScopeFrame {
            defaults: HashMap::from([("format".to_string(), "xml".to_string())]),
            ..Default::default()
        });
        stack.push(ScopeFrame {
            defaults: HashMap::from([("format".to_string(), "json".to_string())]),
            ..Default::default()
        });
        assert_eq!(
            stack.merged_defaults().get("format").map(String::as_str),
            Some("json")
        );
    }

    #[test]
    fn namespaced_to_when_module_present_then_prefixes_controller() {
        let mut stack = ScopeStack::new();
        stack.push(ScopeFrame {
            module: Some("admin".to_string()),
            ..Default::default()
        });
        assert_eq!(stack.namespaced_to("users#index"), "admin/users#index");
    }
}
