use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::rc::Rc;

pub trait Navigator {
    fn navigate(&self, route: &str);
}

/// Router-backed navigation; must be created inside the router
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    pub fn new() -> Self {
        Self {
            navigate: Rc::new(use_navigate()),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, route: &str) {
        log::debug!("navigate -> {}", route);
        (self.navigate)(route, NavigateOptions::default());
    }
}

/// Does nothing; for pages without a return route and for tests
#[derive(Debug, Default, Clone, Copy)]
pub struct NoNavigation;

impl Navigator for NoNavigation {
    fn navigate(&self, _route: &str) {}
}
