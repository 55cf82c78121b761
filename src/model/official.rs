//! Officials, skill tiers, and the tier-weight table.

use std::fmt;

use crate::error::{RosterError, RosterResult};

/// Multiplicative weight per tier, indexed by `tier - 1`.
///
/// Monotonically increasing with tier. Published so that callers can
/// preview an official's score before submitting it.
pub const TIER_WEIGHTS: [f64; 4] = [1.0, 1.2, 1.4, 1.6];

/// Lowest admissible rating (inclusive).
pub const RATING_MIN: f64 = 0.0;

/// Highest admissible rating (inclusive).
pub const RATING_MAX: f64 = 10.0;

/// Returns the weight of a raw tier value, or `None` if the tier is undefined.
///
/// # Examples
///
/// ```
/// use u_roster::model::tier_weight;
///
/// assert_eq!(tier_weight(1), Some(1.0));
/// assert_eq!(tier_weight(4), Some(1.6));
/// assert_eq!(tier_weight(5), None);
/// ```
pub fn tier_weight(tier: u8) -> Option<f64> {
    Tier::new(tier).map(Tier::weight)
}

/// A validated skill tier.
///
/// Only values in `Tier::MIN..=Tier::TOP` can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Tier(u8);

impl Tier {
    /// Lowest defined tier.
    pub const MIN: Tier = Tier(1);

    /// Highest defined tier. Every station needs at least one official of
    /// this tier.
    pub const TOP: Tier = Tier(4);

    /// Creates a tier, or `None` if `value` is not a defined tier.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN.0..=Self::TOP.0)
            .contains(&value)
            .then_some(Tier(value))
    }

    /// Raw tier value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Multiplicative weight applied to the rating.
    pub fn weight(self) -> f64 {
        TIER_WEIGHTS[usize::from(self.0 - 1)]
    }

    pub fn is_top(self) -> bool {
        self == Self::TOP
    }
}

impl TryFrom<u8> for Tier {
    type Error = RosterError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Tier::new(value).ok_or_else(|| {
            RosterError::InvalidInput(format!(
                "tier {value} outside [{}, {}]",
                Tier::MIN.0,
                Tier::TOP.0
            ))
        })
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> u8 {
        tier.0
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tier {}", self.0)
    }
}

/// A rated official to be placed on exactly one station.
///
/// Immutable for the duration of an assignment round.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Official {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    pub tier: Tier,
    /// Quality rating in `[RATING_MIN, RATING_MAX]`.
    pub rating: f64,
}

impl Official {
    /// Creates a validated official.
    ///
    /// # Errors
    ///
    /// [`RosterError::InvalidOfficial`] when the name is blank, the tier is
    /// undefined, or the rating is not a finite value within bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_roster::model::Official;
    ///
    /// let ok = Official::new("r1", "Alice", 4, 9.5).unwrap();
    /// assert!(ok.is_top_tier());
    ///
    /// assert!(Official::new("r2", "Bob", 0, 5.0).is_err());
    /// assert!(Official::new("r3", "Carol", 2, 10.5).is_err());
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        tier: u8,
        rating: f64,
    ) -> RosterResult<Self> {
        let id = id.into();
        let Some(tier) = Tier::new(tier) else {
            return Err(RosterError::InvalidOfficial {
                id,
                reason: format!(
                    "tier {tier} outside [{}, {}]",
                    Tier::MIN.get(),
                    Tier::TOP.get()
                ),
            });
        };
        let official = Self {
            id,
            name: name.into(),
            tier,
            rating,
        };
        official.validate()?;
        Ok(official)
    }

    /// Re-checks the invariants of an official built by struct literal or
    /// deserialization.
    pub fn validate(&self) -> RosterResult<()> {
        let invalid = |reason: String| RosterError::InvalidOfficial {
            id: self.id.clone(),
            reason,
        };
        if self.name.trim().is_empty() {
            return Err(invalid("name is required".into()));
        }
        if !self.rating.is_finite() || !(RATING_MIN..=RATING_MAX).contains(&self.rating) {
            return Err(invalid(format!(
                "rating {} outside [{RATING_MIN}, {RATING_MAX}]",
                self.rating
            )));
        }
        Ok(())
    }

    pub fn is_top_tier(&self) -> bool {
        self.tier.is_top()
    }
}
