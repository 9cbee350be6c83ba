//! Filter dimensions and their option lists.

/// Number of leading characters that name the base season ("Spring w2" → "Spring").
pub const SEASON_PREFIX_LEN: usize = 6;

/// Tool proficiency tiers, lowest first. Position is the tier rank.
pub const TOOL_TIERS: [&str; 8] = [
    "Apprentice+",
    "Journeyman+",
    "Craftsman+",
    "Artisan+",
    "Adept+",
    "Expert+",
    "Master+",
    "Legendary+",
];

const GATHER_TYPES: [&str; 5] = ["Growing", "Fishing", "Mining", "Shooting", "Gathering"];

const FOLLOWERS: [&str; 10] = [
    "Any Animal",
    "Bumbabloopfnoop",
    "Cat",
    "Dog",
    "Fillifryth",
    "NPC",
    "Pig",
    "Sheep",
    "Spouse",
    "Has Greens",
];

const WEATHERS: [&str; 18] = [
    "Blizzard",
    "Foggy",
    "Hot",
    "Mild",
    "Overcast",
    "Sunny",
    "Windy",
    "Snow",
    "Not Rain",
    "Rain",
    "Storm",
    "Pollen",
    "Bubbles",
    "Meteors",
    "Bloodmoon",
    "Eclipse",
    "Under Moonbeams",
    "Strange",
];

const TRAITS: [&str; 16] = [
    "Blessed",
    "Bravery",
    "Cowardly",
    "Cursed",
    "Illusion",
    "Negative",
    "Scent",
    "Stench",
    "Agility",
    "Constitution",
    "Intelligence",
    "Strength",
    "Toughness",
    "Clumsy",
    "Flatulent",
    "Goddess Jinx",
];

const SEASONS: [&str; 12] = [
    "Autumn",
    "Autumn w1",
    "Autumn w2",
    "Spring",
    "Spring w1",
    "Spring w2",
    "Summer",
    "Summer w1",
    "Summer w2",
    "Winter",
    "Winter w1",
    "Winter w2",
];

const TIMES: [&str; 19] = [
    "Moonsday (1)",
    "Truthsday (2)",
    "Woesday (3)",
    "Turnsday (4)",
    "Freylsday (5)",
    "Satyrsday (6)",
    "Solsday (7)",
    "Morning",
    "Afternoon",
    "Evening",
    "Night",
    "Dawn",
    "Dusk",
    "Dawn/Dusk",
    "Midnight",
    "Even days",
    "Odd days",
    "Vale Market days",
    "Exact Hour",
];

/// One filterable facet of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    GatherableType,
    Tool,
    Follower,
    Weather,
    Trait,
    Season,
    Time,
}

impl Dimension {
    pub const COUNT: usize = 7;

    /// Display and evaluation order.
    pub const ALL: [Dimension; Self::COUNT] = [
        Self::GatherableType,
        Self::Tool,
        Self::Follower,
        Self::Weather,
        Self::Trait,
        Self::Season,
        Self::Time,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Attribute key used in the catalog file.
    pub fn key(self) -> &'static str {
        match self {
            Self::GatherableType => "gatherable_type",
            Self::Tool => "tool",
            Self::Follower => "follower",
            Self::Weather => "weather",
            Self::Trait => "trait",
            Self::Season => "season",
            Self::Time => "time",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }

    /// Placeholder label shown when the dimension is unconstrained.
    pub fn sentinel(self) -> &'static str {
        match self {
            Self::GatherableType => "Gather Type",
            Self::Tool => "Tool Proficiency",
            Self::Follower => "Follower",
            Self::Weather => "Weather",
            Self::Trait => "Trait",
            Self::Season => "Season",
            Self::Time => "Time",
        }
    }

    /// Heading used in fact labels ("Follower: Cat").
    pub fn title(self) -> &'static str {
        match self {
            Self::GatherableType => "Gather type",
            Self::Tool => "Tool",
            Self::Follower => "Follower",
            Self::Weather => "Weather",
            Self::Trait => "Trait",
            Self::Season => "Season",
            Self::Time => "Time",
        }
    }

    /// Selectable values, in menu order.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            Self::GatherableType => &GATHER_TYPES,
            Self::Tool => &TOOL_TIERS,
            Self::Follower => &FOLLOWERS,
            Self::Weather => &WEATHERS,
            Self::Trait => &TRAITS,
            Self::Season => &SEASONS,
            Self::Time => &TIMES,
        }
    }
}

/// Rank of a tool tier name, `None` if it is not a known tier.
pub fn tool_rank(tier: &str) -> Option<usize> {
    TOOL_TIERS.iter().position(|t| *t == tier)
}

/// Base season of a season value: its first [`SEASON_PREFIX_LEN`] characters.
pub fn season_prefix(value: &str) -> &str {
    match value.char_indices().nth(SEASON_PREFIX_LEN) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}
