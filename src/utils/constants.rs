//! Application constants

/// One carousel entry: a chattable One Piece character
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Character {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

/// Featured characters shown in the showcase carousel
pub const CHARACTERS: &[Character] = &[
    Character {
        name: "Luffy",
        description: "The ambitious Straw Hat captain with the power of the Gomu Gomu no Mi",
        image: "https://images.unsplash.com/photo-1578632767115-351597cf2477?auto=format&fit=crop&q=80",
    },
    Character {
        name: "Zoro",
        description: "The legendary swordsman with unmatched determination",
        image: "https://images.unsplash.com/photo-1580477667995-2b94f01c9516?auto=format&fit=crop&q=80",
    },
    Character {
        name: "Nami",
        description: "The skilled navigator with a passion for cartography",
        image: "https://images.unsplash.com/photo-1580477667995-2b94f01c9516?auto=format&fit=crop&q=80",
    },
];

/// Route to the referral code entry flow (owned by the referral module)
pub const REFERRALS_PATH: &str = "/referrals";

// Showcase copy
pub const SHOWCASE_HEADING: &str = "Experience One Piece AI Chat";
pub const SHOWCASE_TAGLINE: &str =
    "Connect with your favorite One Piece characters through advanced AI technology";
pub const CHAT_PANEL_TITLE: &str = "AI Chatbot";
pub const CHAT_PANEL_BLURB: &str =
    "Engage in natural conversations with AI-powered One Piece characters";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_is_three_complete_cards() {
        assert_eq!(CHARACTERS.len(), 3);
        for character in CHARACTERS {
            assert!(!character.name.is_empty());
            assert!(!character.description.is_empty());
            assert!(character.image.starts_with("https://"));
        }
    }
}
