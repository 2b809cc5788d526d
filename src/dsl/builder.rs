use std::collections::HashMap;
use std::rc::Rc;

use crate::enums::HttpMethod;
use crate::errors::{RouterError, RouterErrorCode, RouterResult};
use crate::pattern::Constraint;

use super::resource::{collection_resource_actions, member_only_resource_actions, plural_base};
use super::scope::{ScopeFrame, ScopeStack};

/// Only these method names may be dispatched through [`Builder::call`], the
/// low-level string-keyed entry point (spec.md §4.9 "Only a whitelisted set
/// of DSL method names may be recorded"). The typed methods below (`get`,
/// `resources`, ...) are the primary, compile-time-checked surface; `call`
/// exists for hosts that build a route table from external data (e.g. a
/// config file) rather than Rust source.
pub const DSL_METHOD_WHITELIST: &[&str] = &[
    "get", "post", "put", "patch", "delete", "match", "root", "resources", "resource",
    "namespace", "scope", "constraints", "defaults", "mount", "concern", "concerns",
];

/// A single replay-time route record, already merged against the scope
/// stack active when it was recorded: full path, namespaced `to`, merged
/// constraints/defaults (spec.md §4.9 "record-then-replay"). [`crate::router::Router::build`]
/// turns each of these into a compiled [`crate::route::Route`].
#[derive(Debug, Clone)]
pub struct RouteSpec {
    pub path: String,
    pub methods: Vec<HttpMethod>,
    pub to: String,
    pub name: Option<String>,
    pub constraints: HashMap<String, Constraint>,
    pub defaults: HashMap<String, String>,
}

/// Per-route options accepted by the HTTP-verb methods (`to:`, `as:`,
/// `constraints:`, `defaults:`).
#[derive(Debug, Default, Clone)]
pub struct RouteDslOptions {
    pub to: Option<String>,
    pub as_name: Option<String>,
    pub constraints: HashMap<String, Constraint>,
    pub defaults: HashMap<String, String>,
}

impl RouteDslOptions {
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn as_name(mut self, name: impl Into<String>) -> Self {
        self.as_name = Some(name.into());
        self
    }

    pub fn constraint(mut self, param: impl Into<String>, constraint: Constraint) -> Self {
        self.constraints.insert(param.into(), constraint);
        self
    }

    pub fn default_value(mut self, param: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.insert(param.into(), value.into());
        self
    }
}

/// Options accepted by `namespace`/`scope` when pushing a frame.
#[derive(Debug, Default, Clone)]
pub struct ScopeDslOptions {
    pub path: Option<String>,
    pub module: Option<String>,
    pub constraints: HashMap<String, Constraint>,
    pub defaults: HashMap<String, String>,
}

/// Options accepted by `resources`/`resource`.
#[derive(Debug, Default, Clone)]
pub struct ResourcesOptions {
    pub only: Option<Vec<&'static str>>,
    pub except: Option<Vec<&'static str>>,
    pub controller: Option<String>,
    pub constraints: HashMap<String, Constraint>,
    /// Shorthand for a nested resource expanded under `/:id/<plural>` with
    /// a distinct `:nested_id` member key (spec.md §4.9 "`nested:` shorthand").
    pub nested: Option<String>,
}

type ConcernBlock = Rc<dyn Fn(&mut Builder)>;

/// Records DSL invocations without ever mutating a [`crate::router::Router`]
/// (spec.md §4.9). The scope stack is merged eagerly as each route is
/// recorded, so `specs()` already holds fully-resolved, build-ready route
/// descriptions; `Router::build` replays them into a [`crate::route_set::RouteSet`]
/// and finalizes.
pub struct Builder {
    scope: ScopeStack,
    specs: Vec<RouteSpec>,
    concerns: HashMap<String, ConcernBlock>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            scope: ScopeStack::new(),
            specs: Vec::new(),
            concerns: HashMap::new(),
        }
    }

    pub fn into_specs(self) -> Vec<RouteSpec> {
        self.specs
    }

    pub fn get(&mut self, path: &str, opts: RouteDslOptions) -> RouterResult<()> {
        self.record_verbs(&[HttpMethod::Get], path, opts)
    }

    pub fn post(&mut self, path: &str, opts: RouteDslOptions) -> RouterResult<()> {
        self.record_verbs(&[HttpMethod::Post], path, opts)
    }

    pub fn put(&mut self, path: &str, opts: RouteDslOptions) -> RouterResult<()> {
        self.record_verbs(&[HttpMethod::Put], path, opts)
    }

    pub fn patch(&mut self, path: &str, opts: RouteDslOptions) -> RouterResult<()> {
        self.record_verbs(&[HttpMethod::Patch], path, opts)
    }

    pub fn delete(&mut self, path: &str, opts: RouteDslOptions) -> RouterResult<()> {
        self.record_verbs(&[HttpMethod::Delete], path, opts)
    }

    /// `match path, via: [...]` — the generic verb DSL method.
    pub fn match_route(
        &mut self,
        path: &str,
        via: &[HttpMethod],
        opts: RouteDslOptions,
    ) -> RouterResult<()> {
        self.record_verbs(via, path, opts)
    }

    pub fn root(&mut self, opts: RouteDslOptions) -> RouterResult<()> {
        self.record_verbs(&[HttpMethod::Get], "", opts)
    }

    pub fn namespace(&mut self, name: &str, f: impl FnOnce(&mut Builder)) {
        self.scope.push(ScopeFrame {
            path: Some(name.to_string()),
            module: Some(name.to_string()),
            ..Default::default()
        });
        f(self);
        self.scope.pop();
    }

    pub fn scope(&mut self, opts: ScopeDslOptions, f: impl FnOnce(&mut Builder)) {
        self.scope.push(ScopeFrame {
            path: opts.path,
            module: opts.module,
            defaults: opts.defaults,
            constraints: opts.constraints,
        });
        f(self);
        self.scope.pop();
    }

    pub fn constraints(&mut self, map: HashMap<String, Constraint>, f: impl FnOnce(&mut Builder)) {
        self.scope.push(ScopeFrame {
            constraints: map,
            ..Default::default()
        });
        f(self);
        self.scope.pop();
    }

    pub fn defaults(&mut self, map: HashMap<String, String>, f: impl FnOnce(&mut Builder)) {
        self.scope.push(ScopeFrame {
            defaults: map,
            ..Default::default()
        });
        f(self);
        self.scope.pop();
    }

    /// Reserved, deliberately shallow per spec.md §9: forwards every
    /// standard verb at `prefix/*rest` to `target#mount`.
    pub fn mount(&mut self, prefix: &str, target: &str) -> RouterResult<()> {
        let path = format!("{}/*rest", prefix.trim_end_matches('/'));
        self.record_verbs(
            &[
                HttpMethod::Get,
                HttpMethod::Post,
                HttpMethod::Put,
                HttpMethod::Patch,
                HttpMethod::Delete,
            ],
            &path,
            RouteDslOptions::default().to(format!("{target}#mount")),
        )
    }

    pub fn concern(&mut self, name: &str, f: impl Fn(&mut Builder) + 'static) {
        self.concerns.insert(name.to_string(), Rc::new(f));
    }

    pub fn concerns(&mut self, names: &[&str]) -> RouterResult<()> {
        for name in names {
            let block = self.concerns.get(*name).cloned().ok_or_else(|| {
                RouterError::new(
                    RouterErrorCode::InvalidRoute,
                    "dsl",
                    "concerns",
                    format!("no concern named '{name}' has been declared"),
                    None,
                )
            })?;
            block(self);
        }
        Ok(())
    }

    /// RESTful expansion for a plural resource (spec.md §4.9 "Resource
    /// expansion"). `block`, if given, is invoked with a `/:id` scope frame
    /// already pushed (nested resources).
    pub fn resources(
        &mut self,
        name: &str,
        opts: ResourcesOptions,
        block: Option<impl FnOnce(&mut Builder)>,
    ) -> RouterResult<()> {
        let plural = plural_base(name);
        let controller = opts.controller.clone().unwrap_or_else(|| plural.clone());
        self.expand_resource(&plural, &controller, collection_resource_actions(), &opts, "id")?;

        if let Some(nested_name) = &opts.nested {
            let nested_plural = plural_base(nested_name);
            let nested_controller = nested_plural.clone();
            self.scope.push(ScopeFrame {
                path: Some(format!("{plural}/:id")),
                ..Default::default()
            });
            let result = self.expand_resource(
                &nested_plural,
                &nested_controller,
                collection_resource_actions(),
                &ResourcesOptions::default(),
                "nested_id",
            );
            self.scope.pop();
            result?;
        }

        if let Some(block) = block {
            self.scope.push(ScopeFrame {
                path: Some(format!("{plural}/:id")),
                ..Default::default()
            });
            block(self);
            self.scope.pop();
        }

        Ok(())
    }

    /// RESTful expansion for a singular resource: member routes only, no
    /// `:id` segment (spec.md §4.9).
    pub fn resource(
        &mut self,
        name: &str,
        opts: ResourcesOptions,
        block: Option<impl FnOnce(&mut Builder)>,
    ) -> RouterResult<()> {
        let controller = opts
            .controller
            .clone()
            .unwrap_or_else(|| plural_base(name));
        self.expand_resource(name, &controller, member_only_resource_actions(), &opts, "id")?;

        if let Some(block) = block {
            block(self);
        }
        Ok(())
    }

    fn expand_resource(
        &mut self,
        base: &str,
        controller: &str,
        actions: Vec<super::resource::ResourceAction>,
        opts: &ResourcesOptions,
        member_param: &str,
    ) -> RouterResult<()> {
        for row in actions {
            if !action_selected(&opts.only, &opts.except, row.action) {
                continue;
            }
            let mut path = base.to_string();
            if row.is_member {
                path.push_str(&format!("/:{member_param}"));
            }
            if !row.suffix.is_empty() {
                path.push('/');
                path.push_str(row.suffix);
            }
            let route_opts = RouteDslOptions::default()
                .to(format!("{controller}#{}", row.action))
                .constraints_extend(opts.constraints.clone());
            self.record_verbs(row.methods, &path, route_opts)?;
        }
        Ok(())
    }

    /// Low-level string-dispatch entry point; only names in
    /// [`DSL_METHOD_WHITELIST`] are dispatched, and only the leaf (no
    /// nested block) methods are actually runnable through it — there is no
    /// way to pass a Rust closure across a string boundary.
    pub fn call(&mut self, method: &str, path: &str, opts: RouteDslOptions) -> RouterResult<()> {
        if !DSL_METHOD_WHITELIST.contains(&method) {
            return Err(RouterError::new(
                RouterErrorCode::UnknownDslMethod,
                "dsl",
                "call",
                format!("'{method}' is not a recognized DSL method"),
                None,
            ));
        }
        match method {
            "get" => self.get(path, opts),
            "post" => self.post(path, opts),
            "put" => self.put(path, opts),
            "patch" => self.patch(path, opts),
            "delete" => self.delete(path, opts),
            "root" => self.root(opts),
            _ => Err(RouterError::new(
                RouterErrorCode::UnknownDslMethod,
                "dsl",
                "call",
                format!("'{method}' requires a block and cannot be dispatched by name"),
                None,
            )),
        }
    }

    fn record_verbs(
        &mut self,
        methods: &[HttpMethod],
        path_fragment: &str,
        opts: RouteDslOptions,
    ) -> RouterResult<()> {
        if methods.is_empty() {
            return Err(RouterError::new(
                RouterErrorCode::InvalidRoute,
                "dsl",
                "record_verbs",
                "route declared with no HTTP methods",
                None,
            ));
        }
        let to = opts.to.ok_or_else(|| {
            RouterError::new(
                RouterErrorCode::InvalidRoute,
                "dsl",
                "record_verbs",
                format!("route '{path_fragment}' is missing a 'to:' target"),
                None,
            )
        })?;
        let namespaced_to = self.scope.namespaced_to(&to);

        let mut constraints = self.scope.merged_constraints();
        constraints.extend(opts.constraints);
        let mut defaults = self.scope.merged_defaults();
        defaults.extend(opts.defaults);

        self.specs.push(RouteSpec {
            path: self.scope.merged_path(path_fragment),
            methods: methods.to_vec(),
            to: namespaced_to,
            name: opts.as_name,
            constraints,
            defaults,
        });
        Ok(())
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteDslOptions {
    fn constraints_extend(mut self, extra: HashMap<String, Constraint>) -> Self {
        self.constraints.extend(extra);
        self
    }
}

fn action_selected(only: &Option<Vec<&'static str>>, except: &Option<Vec<&'static str>>, action: &str) -> bool {
    if let Some(only) = only {
        return only.contains(&action);
    }
    if let Some(except) = except {
        return !except.contains(&action);
    }
    true
}
