//! Application routes.

/// Path of the admin post listing.
pub const ADMIN_PATH: &str = "/admin";

const NEW_POST_PATH: &str = "/admin/posts/new";
const POSTS_PREFIX: &str = "/admin/posts/";

/// A navigable location within the client.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// Reader view with the client widgets.
    #[default]
    Home,
    /// Admin post listing.
    AdminPosts,
    /// Editor in create mode.
    NewPost,
    /// Editor in edit mode for `slug`.
    EditPost {
        /// Slug of the post being edited.
        slug: String,
    },
}

impl Route {
    /// Parses a path such as `/admin/posts/hello`.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        match path {
            "" | "/" => Some(Self::Home),
            ADMIN_PATH => Some(Self::AdminPosts),
            NEW_POST_PATH => Some(Self::NewPost),
            _ => path
                .strip_prefix(POSTS_PREFIX)
                .filter(|slug| !slug.is_empty() && !slug.contains('/'))
                .map(|slug| Self::EditPost {
                    slug: slug.to_string(),
                }),
        }
    }

    /// Returns the path form of the route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::AdminPosts => ADMIN_PATH.to_string(),
            Self::NewPost => NEW_POST_PATH.to_string(),
            Self::EditPost { slug } => format!("{POSTS_PREFIX}{slug}"),
        }
    }

    /// Returns a named route parameter.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        match (self, name) {
            (Self::EditPost { slug }, "slug") => Some(slug.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}
