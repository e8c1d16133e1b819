//! Label taxonomy for tracker issues
//!
//! The fixed label set created on the target repository before any issues
//! are filed. Colors are hex RGB without the leading `#`.

/// A label name with its display color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSpec {
    /// Label name as shown on the tracker
    pub name: &'static str,
    /// Hex RGB color, no leading `#`
    pub color: &'static str,
}

/// Labels ensured on every run: one per hierarchy level plus the
/// technology-classification labels derived from epic names.
pub const DEFAULT_LABELS: &[LabelSpec] = &[
    LabelSpec {
        name: "initiative",
        color: "1f77b4",
    },
    LabelSpec {
        name: "epic",
        color: "ff7f0e",
    },
    LabelSpec {
        name: "user story",
        color: "2ca02c",
    },
    LabelSpec {
        name: "backend",
        color: "8c564b",
    },
    LabelSpec {
        name: "frontend",
        color: "17becf",
    },
    LabelSpec {
        name: "devops",
        color: "9467bd",
    },
    LabelSpec {
        name: "ai",
        color: "e377c2",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels_cover_hierarchy() {
        let names: Vec<&str> = DEFAULT_LABELS.iter().map(|l| l.name).collect();
        assert!(names.contains(&"initiative"));
        assert!(names.contains(&"epic"));
        assert!(names.contains(&"user story"));
    }

    #[test]
    fn test_label_colors_are_hex() {
        for label in DEFAULT_LABELS {
            assert_eq!(label.color.len(), 6, "bad color for {}", label.name);
            assert!(label.color.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}
