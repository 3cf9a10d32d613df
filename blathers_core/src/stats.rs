/// Statistics listed by `!help_characteristics`.
///
/// Hard coded rather than scraped so the help command never touches the wiki.
/// Lookups are not restricted to these labels.
pub const VILLAGER_STATS: &[&str] = &[
    "Gender",
    "Personality",
    "Species",
    "Birthday",
    "Initial phrase",
    "Initial clothes",
    "Home request",
    "Skill",
    "Goal",
    "Coffee",
    "Favourite Song",
    "Appearances",
];
