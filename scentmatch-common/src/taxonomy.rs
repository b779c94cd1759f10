//! Static scent taxonomy and personality archetype tables
//!
//! Process-lifetime constants mapping user-facing labels to the raw catalog
//! values they subsume. Never mutated after startup.

/// A user-facing scent category and the raw note names it covers
#[derive(Debug, Clone, Copy)]
pub struct ScentCategory {
    pub label: &'static str,
    pub notes: &'static [&'static str],
}

/// A personality archetype and the catalog values it favors
#[derive(Debug, Clone, Copy)]
pub struct PersonalityProfile {
    pub label: &'static str,
    /// Accepted attribute (gender category) values
    pub attributes: &'static [&'static str],
    /// Accepted fragrance type values
    pub frag_types: &'static [&'static str],
}

/// Neutral attribute category; always passes the gender filter
pub const NEUTRAL_ATTRIBUTE: &str = "中性香";

pub const SCENT_CATEGORIES: &[ScentCategory] = &[
    ScentCategory {
        label: "Citrus 柑橘",
        notes: &["葡萄柚", "橘子", "香柠檬", "柠檬", "日本柚子", "橙子"],
    },
    ScentCategory {
        label: "Floral 花香",
        notes: &[
            "薰衣草", "茉莉", "玫瑰", "紫罗兰", "晚香玉", "风信子", "铃兰", "紫丁香", "牡丹",
        ],
    },
    ScentCategory {
        label: "Woody 木质",
        notes: &["雪松", "檀香木", "愈创木", "广藿香", "木质香", "干燥木头"],
    },
    ScentCategory {
        label: "Spicy 辛辣",
        notes: &["肉桂", "胡椒", "粉红胡椒", "肉豆蔻"],
    },
    ScentCategory {
        label: "Sweet 甜香",
        notes: &["香草", "零陵香豆", "琥珀", "安息香脂"],
    },
    ScentCategory {
        label: "Fruity 果香",
        notes: &["梨", "桃子", "菠萝", "荔枝", "树莓", "曼多拉"],
    },
];

pub const PERSONALITY_PROFILES: &[PersonalityProfile] = &[
    PersonalityProfile {
        label: "Confident 自信",
        attributes: &["男香", "中性香"],
        frag_types: &["木质东方调", "辛辣木质调", "芳香木质调", "黑胡椒"],
    },
    PersonalityProfile {
        label: "Elegent 优雅",
        attributes: &["女香", "中性香"],
        frag_types: &[
            "花香调", "绿叶花香调", "花香东方调", "馥奇东方调", "馥奇调", "木质花香调",
            "芳香柑橘调",
        ],
    },
    PersonalityProfile {
        label: "Sports 运动",
        attributes: &["男香", "中性香"],
        frag_types: &["辛辣芳香调", "芳香调", "果香花香调"],
    },
    PersonalityProfile {
        label: "Romantic 浪漫",
        attributes: &["女香", "中性香"],
        frag_types: &[
            "花香调", "绿叶花香调", "玫瑰", "花香西普调", "花香东方调", "木质花香调",
        ],
    },
    PersonalityProfile {
        label: "Humble 低调",
        attributes: &["中性香"],
        frag_types: &["木质调", "芳香调", "芳香柑橘调", "洋甘菊", "水生花香调"],
    },
];

/// Expand user-chosen scent category labels into a flat target-note list.
///
/// The result is the ordered union of the note lists registered under each
/// label; duplicates are permitted. Unknown labels pass through verbatim as
/// if they were raw note names (compatibility fallback for free-form
/// entries).
pub fn expand_scent_prefs(labels: &[String]) -> Vec<String> {
    let mut target_notes = Vec::new();
    for label in labels {
        match SCENT_CATEGORIES.iter().find(|c| c.label == label.as_str()) {
            Some(category) => {
                target_notes.extend(category.notes.iter().map(|note| note.to_string()))
            }
            None => target_notes.push(label.clone()),
        }
    }
    target_notes
}

/// Look up the accepted attribute and fragrance-type sets for a personality.
///
/// Unknown labels yield empty sets, so no bonus is ever granted for them.
pub fn personality_targets(label: &str) -> (&'static [&'static str], &'static [&'static str]) {
    PERSONALITY_PROFILES
        .iter()
        .find(|p| p.label == label)
        .map(|p| (p.attributes, p.frag_types))
        .unwrap_or((&[], &[]))
}
