//! Shared carbon-market / climate-policy vocabulary:
//! used by adapters that must keyword-filter before emitting records, and by
//! the mailer's short-digest mode.

/// Matched case-insensitively against title + excerpt (and, for feed
/// sources, item categories).
pub const CARBON_VOCABULARY: &[&str] = &[
    "carbon",
    "emission",
    "emissions",
    "co2",
    "carbon credit",
    "carbon offset",
    "cap-and-trade",
    "cap and trade",
    "emissions trading",
    "ets",
    "net zero",
    "net-zero",
    "decarbonization",
    "decarbonisation",
    "climate policy",
    "climate change",
    "greenhouse gas",
    "ghg",
    "renewable energy",
    "paris agreement",
    "cop28",
    "cop29",
    "cop30",
    "carbon tax",
    "carbon market",
    "carbon border",
    "cbam",
    "脱炭素",
    "排出量取引",
    "カーボンクレジット",
    "温室効果ガス",
];

/// True if any vocabulary keyword appears (case-insensitively) in any of the
/// given haystacks (title, excerpt, category list, …).
pub fn matches_vocabulary<'a>(haystacks: impl IntoIterator<Item = &'a str>) -> bool {
    let combined: String = haystacks.into_iter().collect::<Vec<_>>().join(" ").to_lowercase();
    CARBON_VOCABULARY.iter().any(|kw| combined.contains(&kw.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_title_keyword() {
        assert!(matches_vocabulary(["EU tightens carbon border tax", ""]));
    }

    #[test]
    fn matches_excerpt_keyword() {
        assert!(matches_vocabulary(["Unrelated headline", "discusses net zero targets"]));
    }

    #[test]
    fn no_match_when_absent() {
        assert!(!matches_vocabulary(["Local bakery wins award", "Nothing about the topic"]));
    }

    #[test]
    fn matches_japanese_keyword() {
        assert!(matches_vocabulary(["経済産業省が脱炭素戦略を発表", ""]));
    }
}
