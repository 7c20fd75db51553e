use strum::{Display, EnumCount, EnumIter};

/// Which analog output the card is driving. `Unknown` is the state before
/// the first successful status query, and the fallback if that query fails.
#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum OutputSelection {
    Speakers,
    Headphones,
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::OutputSelection;

    #[test]
    fn renders_lowercase() {
        assert_eq!(OutputSelection::Speakers.to_string(), "speakers");
        assert_eq!(OutputSelection::Headphones.to_string(), "headphones");
        assert_eq!(OutputSelection::Unknown.to_string(), "unknown");
    }
}
