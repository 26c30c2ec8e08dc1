// (name, upgrade point cost, category)
pub const TRAITS: &[(&str, u32, &str)] = &[
    ("Assailant", 2, "Combat"),
    ("Beastface", 3, "Stealth"),
    ("Bloodless", 2, "Survival"),
    ("Bulwark", 2, "Survival"),
    ("Conduit", 4, "Perception"),
    ("Dauntless", 1, "Survival"),
    ("Decoy Supply", 1, "Resupply"),
    ("Determination", 2, "Movement"),
    ("Doctor", 3, "Healing"),
    ("Fanning", 2, "Combat"),
    ("Fast Fingers", 2, "Combat"),
    ("Frontiersman", 2, "Resupply"),
    ("Gator Legs", 2, "Movement"),
    ("Ghoul", 3, "Healing"),
    ("Greyhound", 3, "Movement"),
    ("Hornskin", 2, "Survival"),
    ("Iron Eye", 1, "Combat"),
    ("Iron Repeater", 1, "Combat"),
    ("Kiteskin", 2, "Survival"),
    ("Levering", 1, "Combat"),
    ("Lightfoot", 4, "Stealth"),
    ("Magpie", 1, "Resupply"),
    ("Mithridatist", 2, "Survival"),
    ("Necromancer", 5, "Healing"),
    ("Packmule", 3, "Resupply"),
    ("Physician", 2, "Healing"),
    ("Pitcher", 2, "Combat"),
    ("Poacher", 2, "Resupply"),
    ("Quartermaster", 4, "Combat"),
    ("Remedy", 2, "Healing"),
    ("Resilience", 3, "Healing"),
    ("Salveskin", 2, "Survival"),
    ("Serpent", 3, "Stealth"),
    ("Silent Killer", 1, "Stealth"),
    ("Steady Aim", 4, "Combat"),
    ("Surefoot", 3, "Movement"),
    ("Tolerance", 2, "Survival"),
    ("Vigilant", 4, "Perception"),
    ("Vulture", 2, "Resupply"),
    ("Whispersmith", 3, "Stealth"),
    ("Witness", 2, "Perception"),
];
