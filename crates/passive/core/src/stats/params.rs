//! The three parameter families of the battler data schema.
//!
//! - Base parameters are integer-valued and stored per battler.
//! - Extra parameters are fractional rates (hit chance, regen, ...) whose
//!   neutral value is 0.
//! - Special parameters are multiplicative rates (damage taken, aggro, ...)
//!   whose neutral value is 1.
//!
//! Each family has a fixed slot numbering used by the tag mini-language; the
//! `from_index`/`index` pair round-trips those slot numbers.

/// The eight integer base parameters, in slot order 0..=7.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BaseParam {
    /// Maximum hit points.
    MaxHp,
    /// Maximum magic points.
    MaxMp,
    /// Physical attack power.
    Atk,
    /// Physical defense.
    Def,
    /// Magic attack power.
    Mat,
    /// Magic defense.
    Mdf,
    /// Agility (turn order, hit contests).
    Agi,
    /// Luck (state application contests).
    Luk,
}

impl BaseParam {
    /// All base parameters in slot order.
    pub const ALL: [BaseParam; 8] = [
        BaseParam::MaxHp,
        BaseParam::MaxMp,
        BaseParam::Atk,
        BaseParam::Def,
        BaseParam::Mat,
        BaseParam::Mdf,
        BaseParam::Agi,
        BaseParam::Luk,
    ];

    /// Resolves a slot number to a parameter, if in range.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// The slot number of this parameter.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The ten fractional extra parameters, in slot order 0..=9.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ExtraParam {
    /// Hit rate.
    Hit,
    /// Evasion rate.
    Eva,
    /// Critical rate.
    Cri,
    /// Critical evasion rate.
    Cev,
    /// Magic evasion rate.
    Mev,
    /// Magic reflection rate.
    Mrf,
    /// Counterattack rate.
    Cnt,
    /// HP regeneration rate.
    Hrg,
    /// MP regeneration rate.
    Mrg,
    /// TP regeneration rate.
    Trg,
}

impl ExtraParam {
    /// All extra parameters in slot order.
    pub const ALL: [ExtraParam; 10] = [
        ExtraParam::Hit,
        ExtraParam::Eva,
        ExtraParam::Cri,
        ExtraParam::Cev,
        ExtraParam::Mev,
        ExtraParam::Mrf,
        ExtraParam::Cnt,
        ExtraParam::Hrg,
        ExtraParam::Mrg,
        ExtraParam::Trg,
    ];

    /// Resolves a slot number to a parameter, if in range.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// The slot number of this parameter.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The ten multiplicative special parameters, in slot order 0..=9.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SpecialParam {
    /// Target rate (aggro).
    Tgr,
    /// Guard effect rate.
    Grd,
    /// Recovery effect rate.
    Rec,
    /// Pharmacology (item effect) rate.
    Pha,
    /// MP cost rate.
    Mcp,
    /// TP charge rate.
    Tcr,
    /// Physical damage rate.
    Pdr,
    /// Magic damage rate.
    Mdr,
    /// Floor damage rate.
    Fdr,
    /// Experience gain rate.
    Exr,
}

impl SpecialParam {
    /// All special parameters in slot order.
    pub const ALL: [SpecialParam; 10] = [
        SpecialParam::Tgr,
        SpecialParam::Grd,
        SpecialParam::Rec,
        SpecialParam::Pha,
        SpecialParam::Mcp,
        SpecialParam::Tcr,
        SpecialParam::Pdr,
        SpecialParam::Mdr,
        SpecialParam::Fdr,
        SpecialParam::Exr,
    ];

    /// Resolves a slot number to a parameter, if in range.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// The slot number of this parameter.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Which parameter family an equipment mastery rule scales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamFamily {
    Base,
    Extra,
    Special,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_numbers_round_trip() {
        for (i, param) in BaseParam::ALL.iter().enumerate() {
            assert_eq!(BaseParam::from_index(i as u8), Some(*param));
            assert_eq!(param.index(), i);
        }
        assert_eq!(BaseParam::from_index(8), None);
        assert_eq!(ExtraParam::from_index(10), None);
        assert_eq!(SpecialParam::from_index(10), None);
    }

    #[test]
    fn atk_is_slot_two() {
        assert_eq!(BaseParam::Atk.index(), 2);
        assert_eq!(ExtraParam::Hrg.index(), 7);
        assert_eq!(SpecialParam::Tgr.index(), 0);
    }
}
