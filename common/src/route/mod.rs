use std::fmt;

/// Views the app can show. The owner switches between them when a component
/// asks to navigate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`, the add form and landing view.
    Add,
    /// `/employees`
    List,
    /// `/edit/{id}`
    Edit(u64),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Add => "/".to_string(),
            Route::List => "/employees".to_string(),
            Route::Edit(id) => format!("/edit/{}", id),
        }
    }

    /// Location fragment carrying this route, e.g. `#/edit/7`.
    pub fn hash(&self) -> String {
        format!("#{}", self.path())
    }

    /// Accepts a path or a location fragment. Unknown paths resolve to the landing view.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim_start_matches('#').trim_end_matches('/');
        match trimmed {
            "" => Route::Add,
            "/employees" => Route::List,
            _ => trimmed
                .strip_prefix("/edit/")
                .and_then(|id| id.parse::<u64>().ok())
                .map_or(Route::Add, Route::Edit),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
