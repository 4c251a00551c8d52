//! The fixed catalog of physical dimensions and their decimal ladders.
//!
//! Every dimension is described by one row of `DESCRIPTORS`; the ladder of
//! rungs is generated from that row rather than declared per unit.
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// A physical quantity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Length,
    Area,
    Voltage,
    Current,
    Time,
    Frequency,
    Resistance,
    Capacitance,
    Charge,
    Resistivity,
    Energy,
    Power,
}

impl Dimension {
    pub const ALL: [Dimension; 12] = [
        Dimension::Length,
        Dimension::Area,
        Dimension::Voltage,
        Dimension::Current,
        Dimension::Time,
        Dimension::Frequency,
        Dimension::Resistance,
        Dimension::Capacitance,
        Dimension::Charge,
        Dimension::Resistivity,
        Dimension::Energy,
        Dimension::Power,
    ];

    pub fn tag(&self) -> &'static str {
        self.descriptor().tag
    }

    /// Canonical base-unit name, e.g. "meter" or "ohm meter".
    pub fn base_name(&self) -> String {
        self.descriptor().name(Prefix::Base)
    }

    /// Canonical base-unit symbol, e.g. "m" or "Ohm m".
    pub fn base_symbol(&self) -> String {
        self.descriptor().symbol(Prefix::Base)
    }

    fn descriptor(&self) -> &'static Descriptor {
        // DESCRIPTORS is declared in the same order as the enum.
        &DESCRIPTORS[*self as usize]
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Dimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim();
        Dimension::ALL
            .iter()
            .copied()
            .find(|d| d.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| Error::UnknownDimension(s.to_string()))
    }
}

/// Metric decimal prefixes, atto through peta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prefix {
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Base,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
}

impl Prefix {
    pub const ALL: [Prefix; 12] = [
        Prefix::Atto,
        Prefix::Femto,
        Prefix::Pico,
        Prefix::Nano,
        Prefix::Micro,
        Prefix::Milli,
        Prefix::Base,
        Prefix::Kilo,
        Prefix::Mega,
        Prefix::Giga,
        Prefix::Tera,
        Prefix::Peta,
    ];

    /// Power of ten applied to a linear unit.
    pub fn exponent(&self) -> i32 {
        (*self as i32 - Prefix::Base as i32) * 3
    }

    /// Empty for `Base`.
    pub fn name(&self) -> &'static str {
        match self {
            Prefix::Atto => "atto",
            Prefix::Femto => "femto",
            Prefix::Pico => "pico",
            Prefix::Nano => "nano",
            Prefix::Micro => "micro",
            Prefix::Milli => "milli",
            Prefix::Base => "",
            Prefix::Kilo => "kilo",
            Prefix::Mega => "mega",
            Prefix::Giga => "giga",
            Prefix::Tera => "tera",
            Prefix::Peta => "peta",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Prefix::Atto => "a",
            Prefix::Femto => "f",
            Prefix::Pico => "p",
            Prefix::Nano => "n",
            Prefix::Micro => "u",
            Prefix::Milli => "m",
            Prefix::Base => "",
            Prefix::Kilo => "k",
            Prefix::Mega => "M",
            Prefix::Giga => "G",
            Prefix::Tera => "T",
            Prefix::Peta => "P",
        }
    }
}

impl FromStr for Prefix {
    type Err = Error;

    /// Accepts the prefix name, with "base" (or nothing) for the unprefixed unit.
    /// Names outside atto..peta (e.g. "centi") fail with `UnknownPrefix`.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        if name.is_empty() || name == "base" {
            return Ok(Prefix::Base);
        }
        Prefix::ALL
            .iter()
            .copied()
            .find(|p| p.name() == name)
            .ok_or_else(|| Error::UnknownPrefix(s.to_string()))
    }
}

/// One entry of a dimension's ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScaleRung {
    pub dimension: Dimension,
    pub prefix: Prefix,
}

impl ScaleRung {
    /// Power of ten relative to the dimension's base unit.
    pub fn exponent(&self) -> i32 {
        self.prefix.exponent() * self.dimension.descriptor().power
    }

    pub fn name(&self) -> String {
        self.dimension.descriptor().name(self.prefix)
    }

    pub fn symbol(&self) -> String {
        self.dimension.descriptor().symbol(self.prefix)
    }
}

pub type Ladder = SmallVec<[ScaleRung; 12]>;

/// Static description of a dimension from which its ladder is generated.
struct Descriptor {
    tag: &'static str,
    name_lead: &'static str,
    name_stem: &'static str,
    symbol_stem: &'static str,
    symbol_suffix: &'static str,
    /// Prefix exponents are multiplied by this (2 for the square-length family).
    power: i32,
    prefixes: &'static [Prefix],
}

impl Descriptor {
    fn name(&self, prefix: Prefix) -> String {
        format!("{}{}{}", self.name_lead, prefix.name(), self.name_stem)
    }

    fn symbol(&self, prefix: Prefix) -> String {
        format!("{}{}{}", prefix.symbol(), self.symbol_stem, self.symbol_suffix)
    }
}

const FULL: &[Prefix] = &Prefix::ALL;

const fn linear(tag: &'static str, name: &'static str, symbol: &'static str, prefixes: &'static [Prefix]) -> Descriptor {
    Descriptor { tag, name_lead: "", name_stem: name, symbol_stem: symbol, symbol_suffix: "", power: 1, prefixes }
}

static DESCRIPTORS: [Descriptor; 12] = [
    linear("length", "meter", "m", FULL),
    Descriptor {
        tag: "area",
        name_lead: "square ",
        name_stem: "meter",
        symbol_stem: "m",
        symbol_suffix: "^2",
        power: 2,
        prefixes: &[Prefix::Nano, Prefix::Micro, Prefix::Milli, Prefix::Base, Prefix::Kilo],
    },
    // Supply and reference levels never need sub-volt rungs.
    linear("voltage", "volt", "V", &[Prefix::Base, Prefix::Kilo, Prefix::Mega]),
    linear("current", "ampere", "A", FULL),
    linear("time", "second", "s", FULL),
    linear("frequency", "hertz", "Hz", FULL),
    linear("resistance", "ohm", "Ohm", FULL),
    linear("capacitance", "farad", "F", FULL),
    linear("charge", "coulomb", "C", FULL),
    linear("resistivity", "ohm meter", "Ohm m", &[Prefix::Nano, Prefix::Micro, Prefix::Milli, Prefix::Base]),
    linear("energy", "joule", "J", FULL),
    linear("power", "watt", "W", FULL),
];

/// Resolves a dimension tag such as "resistivity".
pub fn lookup(tag: &str) -> Result<Dimension> {
    tag.parse()
}

/// The ordered ladder for `dimension`, smallest exponent first.
pub fn rungs(dimension: Dimension) -> Ladder {
    dimension
        .descriptor()
        .prefixes
        .iter()
        .map(|&prefix| ScaleRung { dimension, prefix })
        .collect()
}

/// Ladder lookup by dimension tag.
pub fn rungs_for_tag(tag: &str) -> Result<Ladder> {
    Ok(rungs(lookup(tag)?))
}

pub fn rung_at(dimension: Dimension, exponent: i32) -> Result<ScaleRung> {
    rungs(dimension)
        .into_iter()
        .find(|r| r.exponent() == exponent)
        .ok_or(Error::InvalidScale { dimension, exponent })
}

pub fn rung_for_prefix(dimension: Dimension, prefix: Prefix) -> Result<ScaleRung> {
    let rung = ScaleRung { dimension, prefix };
    if dimension.descriptor().prefixes.contains(&prefix) {
        Ok(rung)
    } else {
        Err(Error::InvalidScale { dimension, exponent: rung.exponent() })
    }
}

pub fn is_on_ladder(dimension: Dimension, exponent: i32) -> bool {
    rung_at(dimension, exponent).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_descriptor_order_matches_enum() {
        for d in Dimension::ALL {
            assert_eq!(d.tag().parse::<Dimension>().unwrap(), d);
        }
    }

    #[test]
    fn test_ladders_are_ordered_in_even_steps() {
        for d in Dimension::ALL {
            let ladder = rungs(d);
            assert!(!ladder.is_empty());
            assert!(is_on_ladder(d, 0), "{} lacks a base rung", d);
            let step = 3 * d.descriptor().power;
            for pair in ladder.windows(2) {
                assert_eq!(pair[1].exponent() - pair[0].exponent(), step, "{}", d);
            }
        }
    }

    #[test]
    fn test_full_ladder_spans_atto_to_peta() {
        let exps: Vec<i32> = rungs(Dimension::Time).iter().map(|r| r.exponent()).collect();
        assert_eq!(exps, vec![-18, -15, -12, -9, -6, -3, 0, 3, 6, 9, 12, 15]);
    }

    #[rstest]
    #[case(Dimension::Length, "meter", "m")]
    #[case(Dimension::Area, "square meter", "m^2")]
    #[case(Dimension::Resistivity, "ohm meter", "Ohm m")]
    #[case(Dimension::Frequency, "hertz", "Hz")]
    fn test_base_units(#[case] d: Dimension, #[case] name: &str, #[case] symbol: &str) {
        assert_eq!(d.base_name(), name);
        assert_eq!(d.base_symbol(), symbol);
    }

    #[rstest]
    #[case(Dimension::Area, Prefix::Kilo, "square kilometer", "km^2", 6)]
    #[case(Dimension::Area, Prefix::Micro, "square micrometer", "um^2", -12)]
    #[case(Dimension::Time, Prefix::Nano, "nanosecond", "ns", -9)]
    #[case(Dimension::Resistivity, Prefix::Micro, "microohm meter", "uOhm m", -6)]
    fn test_prefixed_rungs(
        #[case] d: Dimension,
        #[case] p: Prefix,
        #[case] name: &str,
        #[case] symbol: &str,
        #[case] exponent: i32,
    ) {
        let rung = rung_for_prefix(d, p).unwrap();
        assert_eq!(rung.name(), name);
        assert_eq!(rung.symbol(), symbol);
        assert_eq!(rung.exponent(), exponent);
    }

    #[test]
    fn test_unknown_tag_and_off_ladder_scale() {
        assert_eq!(lookup("luminance"), Err(Error::UnknownDimension("luminance".into())));
        assert!(rungs_for_tag("Voltage").is_ok());
        assert_eq!(
            rung_at(Dimension::Area, 3),
            Err(Error::InvalidScale { dimension: Dimension::Area, exponent: 3 })
        );
        assert!(rung_for_prefix(Dimension::Resistivity, Prefix::Kilo).is_err());
    }

    #[test]
    fn test_prefix_parsing() {
        assert_eq!("base".parse::<Prefix>().unwrap(), Prefix::Base);
        assert_eq!("".parse::<Prefix>().unwrap(), Prefix::Base);
        assert_eq!("Milli".parse::<Prefix>().unwrap(), Prefix::Milli);
        assert_eq!("centi".parse::<Prefix>(), Err(Error::UnknownPrefix("centi".into())));
        assert!("centi".parse::<Prefix>().unwrap_err().is_defect());
    }
}
