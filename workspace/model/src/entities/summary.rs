use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptive label attached to a forecast day.
///
/// The labels carry no numeric meaning; they are display text picked at
/// random, independent of the temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Summary {
    Freezing,
    Bracing,
    Chilly,
    Cool,
    Mild,
    Warm,
    Balmy,
    Hot,
    Sweltering,
    Scorching,
}

impl Summary {
    /// Every label, in display order.
    pub const ALL: [Summary; 10] = [
        Summary::Freezing,
        Summary::Bracing,
        Summary::Chilly,
        Summary::Cool,
        Summary::Mild,
        Summary::Warm,
        Summary::Balmy,
        Summary::Hot,
        Summary::Sweltering,
        Summary::Scorching,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Summary::Freezing => "Freezing",
            Summary::Bracing => "Bracing",
            Summary::Chilly => "Chilly",
            Summary::Cool => "Cool",
            Summary::Mild => "Mild",
            Summary::Warm => "Warm",
            Summary::Balmy => "Balmy",
            Summary::Hot => "Hot",
            Summary::Sweltering => "Sweltering",
            Summary::Scorching => "Scorching",
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_label_set_is_ten_distinct_labels_in_order() {
        let labels: Vec<&str> = Summary::ALL.iter().map(Summary::as_str).collect();
        assert_eq!(
            labels,
            vec![
                "Freezing", "Bracing", "Chilly", "Cool", "Mild",
                "Warm", "Balmy", "Hot", "Sweltering", "Scorching",
            ]
        );

        let unique: HashSet<Summary> = Summary::ALL.into_iter().collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn test_serializes_as_plain_label() {
        let json = serde_json::to_string(&Summary::Sweltering).unwrap();
        assert_eq!(json, "\"Sweltering\"");
        assert_eq!(Summary::Balmy.to_string(), "Balmy");
    }
}
