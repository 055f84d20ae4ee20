/// The marker a well formed application key starts with.
pub const WELL_FORMED_PREFIX: &str = "base64:";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Emptiness {
    Empty,
    NonEmpty,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Format {
    WellFormedPrefix,
    UnexpectedFormat,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ValueClassification {
    pub emptiness: Emptiness,
    pub format: Format,
    /// Length in characters.
    pub length: usize,
}

impl ValueClassification {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.emptiness == Emptiness::Empty
    }

    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.format == Format::WellFormedPrefix
    }
}

pub fn classify(value: &str) -> ValueClassification {
    let emptiness = if value.is_empty() {
        Emptiness::Empty
    } else {
        Emptiness::NonEmpty
    };

    let format = if value.starts_with(WELL_FORMED_PREFIX) {
        Format::WellFormedPrefix
    } else {
        Format::UnexpectedFormat
    };

    ValueClassification {
        emptiness,
        format,
        length: value.chars().count(),
    }
}
