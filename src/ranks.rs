//! Player rank ladder.
//!
//! Rank is derived from lifetime rank points; it never decreases because
//! points are append-only.

/// One rung of the rank ladder.
#[derive(Debug, Clone)]
pub struct PlayerRank {
    pub id: &'static str,
    pub name: &'static str,
    pub required_points: u64,
    /// One-time reward granted on reaching this rank.
    pub reward_xp: u64,
    pub reward_currency: u64,
    pub reward_items: Vec<&'static str>,
    pub perks: Vec<&'static str>,
}

/// The rank ladder, ascending by required points.
pub fn player_ranks() -> Vec<PlayerRank> {
    vec![
        PlayerRank {
            id: "rank-bronze",
            name: "Bronze",
            required_points: 0,
            reward_xp: 0,
            reward_currency: 0,
            reward_items: vec![],
            perks: vec!["Access to basic games", "Basic daily quests"],
        },
        PlayerRank {
            id: "rank-silver",
            name: "Silver",
            required_points: 1000,
            reward_xp: 500,
            reward_currency: 250,
            reward_items: vec![],
            perks: vec![
                "Access to all basic games",
                "Daily and weekly quests",
                "+5% XP gain",
            ],
        },
        PlayerRank {
            id: "rank-gold",
            name: "Gold",
            required_points: 5000,
            reward_xp: 1000,
            reward_currency: 500,
            reward_items: vec!["Gold Rank Badge"],
            perks: vec![
                "Access to all regular games",
                "All quest types available",
                "+10% XP gain",
                "Daily login bonus",
            ],
        },
        PlayerRank {
            id: "rank-platinum",
            name: "Platinum",
            required_points: 15000,
            reward_xp: 2000,
            reward_currency: 1000,
            reward_items: vec!["Platinum Rank Badge", "Exclusive Accessory"],
            perks: vec![
                "Access to all games including beta tests",
                "All quest types available",
                "+15% XP gain",
                "Enhanced daily login bonus",
                "Priority tournament entry",
            ],
        },
        PlayerRank {
            id: "rank-diamond",
            name: "Diamond",
            required_points: 30000,
            reward_xp: 5000,
            reward_currency: 2500,
            reward_items: vec![
                "Diamond Rank Badge",
                "Exclusive Armor Set",
                "Exclusive Weapon Skin",
            ],
            perks: vec![
                "Access to all content including alpha tests",
                "All quest types with enhanced rewards",
                "+20% XP gain",
                "Premium daily login bonus",
                "Reserved tournament spots",
                "Access to Diamond-only events",
            ],
        },
        PlayerRank {
            id: "rank-master",
            name: "Master",
            required_points: 50000,
            reward_xp: 10000,
            reward_currency: 5000,
            reward_items: vec![
                "Master Rank Badge",
                "Legendary Armor Set",
                "Legendary Weapon",
                "Exclusive Mount",
            ],
            perks: vec![
                "Access to all content",
                "All quest types with maximum rewards",
                "+25% XP gain",
                "Elite daily login bonus",
                "Automatic tournament qualification",
                "Access to Master-only events",
                "Custom title creation",
                "Champion aura effect",
            ],
        },
    ]
}

/// The highest rank whose point threshold `rank_points` meets. The
/// ladder starts at zero, so there is always a match.
pub fn rank_for_points(rank_points: u64) -> PlayerRank {
    let mut ranks = player_ranks();
    ranks.sort_by(|a, b| b.required_points.cmp(&a.required_points));
    let lowest = ranks.len() - 1;
    let index = ranks
        .iter()
        .position(|rank| rank_points >= rank.required_points)
        .unwrap_or(lowest);
    ranks.swap_remove(index)
}
