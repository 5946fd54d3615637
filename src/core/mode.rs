//! Display modes: cosmetic labels applied by the presenter.
//!
//! A mode never changes the transformation, only the label on the rendered
//! fragment.

/// A display mode, selected by wire codes "1" to "7".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Professional,
    Casual,
    Student,
    Teacher,
    Creative,
    QuickAnswer,
    DetailedAnalysis,
}

impl Mode {
    /// All modes, in wire-code order.
    pub const ALL: [Mode; 7] = [
        Mode::Professional,
        Mode::Casual,
        Mode::Student,
        Mode::Teacher,
        Mode::Creative,
        Mode::QuickAnswer,
        Mode::DetailedAnalysis,
    ];

    /// Parse a wire code. Unknown codes are not an error: the presenter
    /// renders without a label for them.
    pub fn from_code(code: &str) -> Option<Mode> {
        match code {
            "1" => Some(Mode::Professional),
            "2" => Some(Mode::Casual),
            "3" => Some(Mode::Student),
            "4" => Some(Mode::Teacher),
            "5" => Some(Mode::Creative),
            "6" => Some(Mode::QuickAnswer),
            "7" => Some(Mode::DetailedAnalysis),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Mode::Professional => "1",
            Mode::Casual => "2",
            Mode::Student => "3",
            Mode::Teacher => "4",
            Mode::Creative => "5",
            Mode::QuickAnswer => "6",
            Mode::DetailedAnalysis => "7",
        }
    }

    /// Display label shown in the rendered fragment.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Professional => "Professional",
            Mode::Casual => "Casual",
            Mode::Student => "Student",
            Mode::Teacher => "Teacher",
            Mode::Creative => "Creative",
            Mode::QuickAnswer => "Quick Answer",
            Mode::DetailedAnalysis => "Detailed Analysis",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_round_trips() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_code(mode.code()), Some(mode));
        }
    }

    #[test]
    fn from_code_unknown_is_none() {
        assert_eq!(Mode::from_code("0"), None);
        assert_eq!(Mode::from_code("8"), None);
        assert_eq!(Mode::from_code("professional"), None);
        assert_eq!(Mode::from_code(""), None);
    }

    #[test]
    fn labels_match_wire_order() {
        let labels: Vec<&str> = Mode::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            [
                "Professional",
                "Casual",
                "Student",
                "Teacher",
                "Creative",
                "Quick Answer",
                "Detailed Analysis"
            ]
        );
    }
}
