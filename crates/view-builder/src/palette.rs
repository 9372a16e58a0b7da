//! Dashboard colors

/// Teal, used for survivors everywhere
pub const SURVIVED: &str = "#4ECDC4";
/// Coral, used for passengers who did not survive
pub const DID_NOT_SURVIVE: &str = "#FF6B6B";

/// Female, male
pub const GENDER: [&str; 2] = [SURVIVED, DID_NOT_SURVIVE];
/// Mint, coral, purple for 1st, 2nd, 3rd class
pub const CLASS: [&str; 3] = ["#95E1D3", "#F38181", "#AA96DA"];

pub const SURVIVED_LABEL: &str = "Survived";
pub const DID_NOT_SURVIVE_LABEL: &str = "Did Not Survive";

/// Color for an outcome
pub fn outcome_color(survived: bool) -> &'static str {
    if survived {
        SURVIVED
    } else {
        DID_NOT_SURVIVE
    }
}

pub fn outcome_label(survived: bool) -> &'static str {
    if survived {
        SURVIVED_LABEL
    } else {
        DID_NOT_SURVIVE_LABEL
    }
}
