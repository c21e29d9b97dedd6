//! Game options and house rules.

use serde::{Deserialize, Serialize};

use super::scoring::{LeasterTieBreak, Scoring};

/// How the picker's partner is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartnerStyle {
    /// The holder of the jack of diamonds is the partner.
    JackOfDiamonds,
    /// The picker calls a fail ace; its holder is the partner.
    CalledAce,
    /// The picker plays alone.
    GoAlone,
}

impl PartnerStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartnerStyle::JackOfDiamonds => "jackOfDiamonds",
            PartnerStyle::CalledAce => "calledAce",
            PartnerStyle::GoAlone => "goAlone",
        }
    }
}

/// Table configuration for one hand.
///
/// The house-rule flags (`double_on_the_bump` through `misdeal`) are declared
/// table conventions; the engine records but does not enforce them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheepsheadOptions {
    pub partner_style: PartnerStyle,
    pub scoring: Scoring,
    pub leaster_tie_break: LeasterTieBreak,
    pub double_on_the_bump: bool,
    pub no_trick_picker_pays: bool,
    pub blitzing: bool,
    pub crack: bool,
    pub recrack: bool,
    pub misdeal: bool,
}

impl Default for SheepsheadOptions {
    fn default() -> Self {
        SheepsheadOptions {
            partner_style: PartnerStyle::JackOfDiamonds,
            scoring: Scoring::Normal,
            leaster_tie_break: LeasterTieBreak::SeatOrder,
            double_on_the_bump: false,
            no_trick_picker_pays: false,
            blitzing: false,
            crack: false,
            recrack: false,
            misdeal: false,
        }
    }
}
