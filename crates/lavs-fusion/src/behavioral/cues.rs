//! Closed vocabularies scanned for in layer findings.

use std::fmt;

/// Phrases suggesting a layer found content "too regular to be human".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniformityCue {
    UnnaturallySmooth,
    TooUniform,
    Stable,
    Regular,
    Consistent,
}

impl UniformityCue {
    pub const ALL: [UniformityCue; 5] = [
        Self::UnnaturallySmooth,
        Self::TooUniform,
        Self::Stable,
        Self::Regular,
        Self::Consistent,
    ];

    /// Lowercase phrase matched as a substring.
    pub fn phrase(&self) -> &'static str {
        match self {
            Self::UnnaturallySmooth => "unnaturally smooth",
            Self::TooUniform => "too uniform",
            Self::Stable => "stable",
            Self::Regular => "regular",
            Self::Consistent => "consistent",
        }
    }

    /// First cue contained in `detail`, ignoring case.
    pub fn find_in(detail: &str) -> Option<Self> {
        let lowered = detail.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|cue| lowered.contains(cue.phrase()))
    }
}

impl fmt::Display for UniformityCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// Markers of over-regularized texture or signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegularityMarker {
    Homogeneity,
    Entropy,
}

impl RegularityMarker {
    pub const ALL: [RegularityMarker; 2] = [Self::Homogeneity, Self::Entropy];

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Homogeneity => "homogeneity",
            Self::Entropy => "entropy",
        }
    }

    /// Whether `detail` mentions any marker, ignoring case.
    pub fn mentioned_in(detail: &str) -> bool {
        let lowered = detail.to_lowercase();
        Self::ALL.iter().any(|m| lowered.contains(m.keyword()))
    }
}
