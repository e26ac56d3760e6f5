//! One record type, several ways to order it.

use itertools::Itertools;
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Os {
    pub name: String,
    pub version: String,
}

impl Os {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Os {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn version_parts(&self) -> Vec<u32> {
        parse_version(&self.version)
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

/// Natural order: by name, then by numeric version.
impl Ord for Os {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| compare_versions(&self.version, &other.version))
    }
}

impl PartialOrd for Os {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `"10.15.7"` -> `[10, 15, 7]`. Components that are not numbers count as 0.
pub fn parse_version(version: &str) -> Vec<u32> {
    version
        .split('.')
        .map(|part| part.trim().parse().unwrap_or(0))
        .collect()
}

// Missing trailing components compare as 0, so "11" == "11.0".
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let a = parse_version(a);
    let b = parse_version(b);
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            x.cmp(&y)
        })
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsOrdering {
    ByName,
    ByVersion,
    ByNameThenVersionDesc,
    ByNameLength,
}

impl OsOrdering {
    pub const ALL: [OsOrdering; 4] = [
        OsOrdering::ByName,
        OsOrdering::ByVersion,
        OsOrdering::ByNameThenVersionDesc,
        OsOrdering::ByNameLength,
    ];

    pub fn compare(self, a: &Os, b: &Os) -> Ordering {
        match self {
            OsOrdering::ByName => a.name.cmp(&b.name),
            OsOrdering::ByVersion => compare_versions(&a.version, &b.version),
            OsOrdering::ByNameThenVersionDesc => a
                .name
                .cmp(&b.name)
                .then_with(|| compare_versions(&b.version, &a.version)),
            OsOrdering::ByNameLength => a
                .name
                .len()
                .cmp(&b.name.len())
                .then_with(|| a.name.cmp(&b.name)),
        }
    }
}

pub fn sort_with(systems: &mut [Os], ordering: OsOrdering) {
    systems.sort_by(|a, b| ordering.compare(a, b));
}

pub fn sorted_with(systems: &[Os], ordering: OsOrdering) -> Vec<Os> {
    systems
        .iter()
        .cloned()
        .sorted_by(|a, b| ordering.compare(a, b))
        .collect()
}

pub fn sample_systems() -> Vec<Os> {
    vec![
        Os::new("macOS", "10.15.7"),
        Os::new("Windows", "11"),
        Os::new("Linux", "6.8"),
        Os::new("macOS", "14.2"),
        Os::new("Windows", "10"),
        Os::new("FreeBSD", "14.0"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(systems: &[Os]) -> Vec<String> {
        systems.iter().map(|os| os.to_string()).collect()
    }

    #[test]
    fn versions_compare_numerically() {
        assert_eq!(compare_versions("10.15.7", "9.9"), Ordering::Greater);
        assert_eq!(compare_versions("11", "11.0"), Ordering::Equal);
        assert_eq!(compare_versions("6.8", "6.10"), Ordering::Less);
        assert_eq!(parse_version("1.x.3"), vec![1, 0, 3]);
        assert_eq!(Os::new("macOS", "10.15.7").version_parts(), vec![10, 15, 7]);
    }

    #[test]
    fn natural_order() {
        let mut systems = sample_systems();
        systems.sort();
        assert_eq!(
            render(&systems),
            [
                "FreeBSD 14.0",
                "Linux 6.8",
                "Windows 10",
                "Windows 11",
                "macOS 10.15.7",
                "macOS 14.2"
            ]
        );
    }

    #[test]
    fn name_then_version_desc() {
        let sorted = sorted_with(&sample_systems(), OsOrdering::ByNameThenVersionDesc);
        assert_eq!(render(&sorted)[2..4], ["Windows 11", "Windows 10"]);
    }

    #[test]
    fn by_version_and_by_name_length() {
        let mut systems = sample_systems();
        sort_with(&mut systems, OsOrdering::ByVersion);
        assert_eq!(systems[0].to_string(), "Linux 6.8");

        sort_with(&mut systems, OsOrdering::ByNameLength);
        let names: Vec<&str> = systems.iter().map(|os| os.name.as_str()).collect();
        assert_eq!(names[0], "Linux");
        assert_eq!(names[1], "macOS");
        assert_eq!(names.last(), Some(&"Windows"));
    }
}
