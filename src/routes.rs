use std::fmt;

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Gallery,
    /// Artwork detail. The raw parameter is kept; resolving it against the
    /// catalog happens when the page is shown.
    Artwork(String),
    About,
    Contact,
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Route {
        // Drop query string and fragment
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed };

        let segments: Vec<&str> = trimmed.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            [""] => Route::Home,
            ["gallery"] => Route::Gallery,
            ["about"] => Route::About,
            ["contact"] => Route::Contact,
            ["artwork", id] => Route::Artwork((*id).to_string()),
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn artwork(id: u32) -> Route {
        Route::Artwork(id.to_string())
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Gallery => "/gallery".to_string(),
            Route::Artwork(id) => format!("/artwork/{id}"),
            Route::About => "/about".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Navigation bar entries, in display order.
    pub fn nav() -> [(Route, &'static str); 4] {
        [
            (Route::Home, "Home"),
            (Route::Gallery, "Gallery"),
            (Route::About, "About"),
            (Route::Contact, "Contact"),
        ]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
