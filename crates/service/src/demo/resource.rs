use std::{fmt, str::FromStr};

use super::errors::DemoError;

/// Collections the demo store knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Pages,
    Articles,
    Media,
    Documents,
    Events,
    Members,
    Tasks,
    Registrations,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 8] = [
        ResourceKind::Pages,
        ResourceKind::Articles,
        ResourceKind::Media,
        ResourceKind::Documents,
        ResourceKind::Events,
        ResourceKind::Members,
        ResourceKind::Tasks,
        ResourceKind::Registrations,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Pages => "pages",
            ResourceKind::Articles => "articles",
            ResourceKind::Media => "media",
            ResourceKind::Documents => "documents",
            ResourceKind::Events => "events",
            ResourceKind::Members => "members",
            ResourceKind::Tasks => "tasks",
            ResourceKind::Registrations => "registrations",
        }
    }
}

impl FromStr for ResourceKind {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| DemoError::UnknownResource(s.to_string()))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip_and_unknowns_fail() {
        for k in ResourceKind::ALL {
            assert_eq!(k.as_str().parse::<ResourceKind>().unwrap(), k);
        }
        assert_eq!("users".parse::<ResourceKind>(), Err(DemoError::UnknownResource("users".into())));
        assert!("Pages".parse::<ResourceKind>().is_err());
    }
}
