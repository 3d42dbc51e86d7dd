use serde::{Deserialize, Serialize};

/// Which side of the focused card is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Face {
    /// Every newly focused card starts here
    #[default]
    Question,
    Answer,
}

impl Face {
    /// The other side of the card
    pub fn flipped(self) -> Self {
        match self {
            Self::Question => Self::Answer,
            Self::Answer => Self::Question,
        }
    }

    pub fn is_flipped(self) -> bool {
        matches!(self, Self::Answer)
    }

    /// Label shown in the corner of the card
    pub fn label(self) -> &'static str {
        match self {
            Self::Question => "Question",
            Self::Answer => "Answer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_flipping() {
        let face = Face::default();
        assert_eq!(face, Face::Question);
        assert!(!face.is_flipped());

        let face = face.flipped();
        assert_eq!(face, Face::Answer);
        assert!(face.is_flipped());

        assert_eq!(face.flipped(), Face::Question);
    }

    #[test]
    fn test_face_labels() {
        assert_eq!(Face::Question.label(), "Question");
        assert_eq!(Face::Answer.label(), "Answer");
    }
}
