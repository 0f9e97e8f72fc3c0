use axum::Router;

use crate::{ModuleContext, SchemaObject};

/// Capabilities a feature module exposes to the host.
///
/// Cross-module query services are not part of this trait; a module offers
/// them as inherent methods so consumers receive a typed handle.
pub trait Module: Send + Sync {
    /// Stable name used in logs and composition errors.
    fn name(&self) -> &'static str;

    /// Mount this module's endpoints under its own sub-path of `group`.
    fn register_routes(&self, group: Router) -> Router;

    /// Storage objects this module owns. Read once at startup.
    fn schema_objects(&self) -> Vec<SchemaObject>;
}

type Constructor = Box<dyn FnOnce(&ModuleContext) -> Box<dyn Module> + Send>;

/// A deferred module constructor, run by the registry in list order.
pub struct ModuleSetup {
    build: Constructor,
}

impl ModuleSetup {
    /// Wrap a constructor such as `UserModule::new`.
    pub fn new<F, M>(constructor: F) -> Self
    where
        F: FnOnce(&ModuleContext) -> M + Send + 'static,
        M: Module + 'static,
    {
        Self {
            build: Box::new(move |ctx| Box::new(constructor(ctx)) as Box<dyn Module>),
        }
    }

    /// Hand over a module the caller already built, typically because it
    /// first took that module's query service for another module.
    pub fn ready<M: Module + 'static>(module: M) -> Self {
        Self {
            build: Box::new(move |_| Box::new(module) as Box<dyn Module>),
        }
    }

    pub(crate) fn build(self, ctx: &ModuleContext) -> Box<dyn Module> {
        (self.build)(ctx)
    }
}

impl std::fmt::Debug for ModuleSetup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleSetup").finish_non_exhaustive()
    }
}
