//! Static route table.
//!
//! The table is the single source of truth for route metadata; the
//! [`Route`](crate::frontend::app::main::Route) enum mirrors it for the
//! router, and the navigation guard consults it for `requires_auth`.

/// Pages the router can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageId {
    Auth,
    Upload,
}

/// One entry of the route table. Built once, immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub page: PageId,
    pub requires_auth: bool,
}

/// Route table, in match order. `/login` aliases `/`.
pub static ROUTES: [RouteDescriptor; 3] = [
    RouteDescriptor {
        path: "/",
        page: PageId::Auth,
        requires_auth: false,
    },
    RouteDescriptor {
        path: "/login",
        page: PageId::Auth,
        requires_auth: false,
    },
    RouteDescriptor {
        path: "/upload",
        page: PageId::Upload,
        requires_auth: true,
    },
];

/// Resolves a path to its descriptor, first match wins.
///
/// Unmatched paths are the router's concern (not-found fallback), so this
/// returns `None` rather than an error.
pub fn resolve(path: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|route| route.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_aliases_root() {
        let root = resolve("/").unwrap();
        let login = resolve("/login").unwrap();
        assert_eq!(root.page, PageId::Auth);
        assert_eq!(login.page, root.page);
    }

    #[test]
    fn upload_is_protected() {
        let upload = resolve("/upload").unwrap();
        assert_eq!(upload.page, PageId::Upload);
        assert!(upload.requires_auth);
    }

    #[test]
    fn auth_pages_are_public() {
        assert!(!resolve("/").unwrap().requires_auth);
        assert!(!resolve("/login").unwrap().requires_auth);
    }

    #[test]
    fn unknown_path_is_unmatched() {
        assert!(resolve("/settings").is_none());
        assert!(resolve("").is_none());
    }

    #[test]
    fn resolve_returns_first_match() {
        for route in &ROUTES {
            let first = ROUTES
                .iter()
                .find(|candidate| candidate.path == route.path)
                .unwrap();
            assert!(std::ptr::eq(resolve(route.path).unwrap(), first));
        }
    }
}
